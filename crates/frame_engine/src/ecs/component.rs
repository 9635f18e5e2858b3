//! Polymorphic component dispatch
//!
//! Every per-frame behavior attached to an object is stored as a
//! [`Component`]. The engine's own behaviors are enum variants; anything else
//! plugs in through [`Behavior`] and [`Component::Custom`]. The object owns
//! its components, so dropping a component (or its object) releases the
//! payload exactly once.

use std::any::Any;
use std::fmt;

use crate::context::Context;
use crate::ecs::components::{Collider, Renderer, Rigidbody};
use crate::ecs::ObjectId;
use crate::ecs::Tag;
use crate::foundation::math::Transform;

/// Discriminant of a [`Component`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Velocity/drag integration
    RigidBody,
    /// Render submission data
    Renderer,
    /// Collision volume
    Collider,
    /// Game-defined behavior
    Custom,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RigidBody => "RigidBody",
            Self::Renderer => "Renderer",
            Self::Collider => "Collider",
            Self::Custom => "Custom",
        };
        f.write_str(name)
    }
}

/// The owning object's state as seen by a component during its update
pub struct ComponentHost<'a> {
    /// Handle of the owning object
    pub id: ObjectId,
    /// Tag of the owning object
    pub tag: Tag,
    /// Transform of the owning object
    pub transform: &'a mut Transform,
}

/// Per-frame behavior interface
pub trait Behavior: Any + fmt::Debug {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Advance this behavior by one frame
    fn update(&mut self, host: ComponentHost<'_>, ctx: &Context);

    /// Whether this behavior writes the owner's position/rotation every frame.
    /// An object accepts at most one such component.
    fn integrates_transform(&self) -> bool {
        false
    }

    /// Upcast for typed access
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for typed access
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A behavior owned by an object
#[derive(Debug)]
pub enum Component {
    /// Rigidbody integration
    RigidBody(Rigidbody),
    /// Renderer data
    Renderer(Renderer),
    /// Collision volume
    Collider(Collider),
    /// Game-defined behavior
    Custom(Box<dyn Behavior>),
}

impl Component {
    /// Wrap a game-defined behavior
    pub fn custom(behavior: impl Behavior) -> Self {
        Self::Custom(Box::new(behavior))
    }

    /// Discriminant of this component
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::RigidBody(_) => ComponentKind::RigidBody,
            Self::Renderer(_) => ComponentKind::Renderer,
            Self::Collider(_) => ComponentKind::Collider,
            Self::Custom(_) => ComponentKind::Custom,
        }
    }

    /// The payload behind the uniform interface
    pub fn behavior(&self) -> &dyn Behavior {
        match self {
            Self::RigidBody(rb) => rb,
            Self::Renderer(renderer) => renderer,
            Self::Collider(collider) => collider,
            Self::Custom(behavior) => behavior.as_ref(),
        }
    }

    /// Mutable payload behind the uniform interface
    pub fn behavior_mut(&mut self) -> &mut dyn Behavior {
        match self {
            Self::RigidBody(rb) => rb,
            Self::Renderer(renderer) => renderer,
            Self::Collider(collider) => collider,
            Self::Custom(behavior) => behavior.as_mut(),
        }
    }

    /// Dispatch one frame of update to the payload
    pub fn update(&mut self, host: ComponentHost<'_>, ctx: &Context) {
        self.behavior_mut().update(host, ctx);
    }

    /// See [`Behavior::integrates_transform`]
    pub fn integrates_transform(&self) -> bool {
        self.behavior().integrates_transform()
    }
}

impl From<Rigidbody> for Component {
    fn from(rb: Rigidbody) -> Self {
        Self::RigidBody(rb)
    }
}

impl From<Renderer> for Component {
    fn from(renderer: Renderer) -> Self {
        Self::Renderer(renderer)
    }
}

impl From<Collider> for Component {
    fn from(collider: Collider) -> Self {
        Self::Collider(collider)
    }
}

impl From<Box<dyn Behavior>> for Component {
    fn from(behavior: Box<dyn Behavior>) -> Self {
        Self::Custom(behavior)
    }
}
