//! Objects: a transform, a tag and an ordered list of owned components

use thiserror::Error;

use crate::context::Context;
use crate::ecs::component::{Behavior, Component, ComponentHost, ComponentKind};
use crate::ecs::components::{Collider, Renderer, Rigidbody};
use crate::ecs::{ObjectId, Tag};
use crate::foundation::math::{Transform, Vec3};

/// Errors raised while assembling objects
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// A second component that integrates the transform was added
    #[error("object already has a {existing} component driving its transform; refusing to add {added}")]
    ConflictingComponent {
        /// Kind already attached
        existing: ComponentKind,
        /// Kind that was rejected
        added: ComponentKind,
    },
}

/// A world entity
#[derive(Debug, Default)]
pub struct Object {
    /// Position and rotation
    pub transform: Transform,

    /// Gameplay classification
    pub tag: Tag,

    components: Vec<Component>,
}

impl Object {
    /// Create an untagged object at the origin with no components
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    /// Builder: set tag
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = tag;
        self
    }

    /// Builder: add a component
    pub fn with_component(mut self, component: impl Into<Component>) -> Result<Self, ObjectError> {
        self.add_component(component)?;
        Ok(self)
    }

    /// Append a component; it will update after the ones already attached.
    ///
    /// Returns the component's index.
    pub fn add_component(&mut self, component: impl Into<Component>) -> Result<usize, ObjectError> {
        let component = component.into();
        if component.integrates_transform() {
            if let Some(existing) = self.components.iter().find(|c| c.integrates_transform()) {
                return Err(ObjectError::ConflictingComponent {
                    existing: existing.kind(),
                    added: component.kind(),
                });
            }
        }
        self.components.push(component);
        Ok(self.components.len() - 1)
    }

    /// Detach and return the component at `index`; dropping it destroys the payload
    pub fn remove_component(&mut self, index: usize) -> Option<Component> {
        (index < self.components.len()).then(|| self.components.remove(index))
    }

    /// Attached components in update order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of attached components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Whether a component of `kind` is attached
    pub fn has_component(&self, kind: ComponentKind) -> bool {
        self.components.iter().any(|c| c.kind() == kind)
    }

    /// Rigidbody, if attached
    pub fn rigidbody(&self) -> Option<&Rigidbody> {
        self.components.iter().find_map(|c| match c {
            Component::RigidBody(rb) => Some(rb),
            _ => None,
        })
    }

    /// Mutable rigidbody, if attached
    pub fn rigidbody_mut(&mut self) -> Option<&mut Rigidbody> {
        self.components.iter_mut().find_map(|c| match c {
            Component::RigidBody(rb) => Some(rb),
            _ => None,
        })
    }

    /// First renderer, if attached
    pub fn renderer(&self) -> Option<&Renderer> {
        self.components.iter().find_map(|c| match c {
            Component::Renderer(renderer) => Some(renderer),
            _ => None,
        })
    }

    /// First collider, if attached
    pub fn collider(&self) -> Option<&Collider> {
        self.components.iter().find_map(|c| match c {
            Component::Collider(collider) => Some(collider),
            _ => None,
        })
    }

    /// First custom behavior of type `T`
    pub fn behavior<T: Behavior>(&self) -> Option<&T> {
        self.components.iter().find_map(|c| match c {
            Component::Custom(behavior) => behavior.as_any().downcast_ref::<T>(),
            _ => None,
        })
    }

    /// Mutable first custom behavior of type `T`
    pub fn behavior_mut<T: Behavior>(&mut self) -> Option<&mut T> {
        self.components.iter_mut().find_map(|c| match c {
            Component::Custom(behavior) => behavior.as_any_mut().downcast_mut::<T>(),
            _ => None,
        })
    }

    /// Update every component once, in attachment order
    pub fn update(&mut self, id: ObjectId, ctx: &Context) {
        let Self {
            transform,
            tag,
            components,
        } = self;

        for component in components.iter_mut() {
            component.update(
                ComponentHost {
                    id,
                    tag: *tag,
                    transform: &mut *transform,
                },
                ctx,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    #[derive(Debug, Default)]
    struct Spinner {
        ticks: u32,
    }

    impl Behavior for Spinner {
        fn name(&self) -> &str {
            "spinner"
        }

        fn update(&mut self, host: ComponentHost<'_>, _ctx: &Context) {
            self.ticks += 1;
            host.transform.rotation.y += 1.0;
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    /// Writes the transform every frame, like a rigidbody
    #[derive(Debug)]
    struct Mover;

    impl Behavior for Mover {
        fn name(&self) -> &str {
            "mover"
        }

        fn update(&mut self, host: ComponentHost<'_>, _ctx: &Context) {
            host.transform.position.x += 1.0;
        }

        fn integrates_transform(&self) -> bool {
            true
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn test_components_update_in_order() {
        let mut rb = Rigidbody::new();
        rb.add_force(Vec3::new(2.0, 0.0, 0.0));

        let mut object = Object::new()
            .with_component(rb)
            .and_then(|o| o.with_component(Renderer::new("demo.mesh", "demo.tex")))
            .unwrap();

        object.update(ObjectId::default(), &Context::new(0.5));

        assert_eq!(object.transform.position, Vec3::new(1.0, 0.0, 0.0));
        // Renderer ran after integration, so it saw the new position
        let renderer = object.renderer().unwrap();
        assert_eq!(renderer.model_matrix().m14, 1.0);
    }

    #[test]
    fn test_second_rigidbody_is_rejected() {
        let mut object = Object::new();
        object.add_component(Rigidbody::new()).unwrap();

        let result = object.add_component(Rigidbody::new());
        assert_eq!(
            result,
            Err(ObjectError::ConflictingComponent {
                existing: ComponentKind::RigidBody,
                added: ComponentKind::RigidBody,
            })
        );

        let result = object.add_component(Component::custom(Mover));
        assert!(result.is_err());
        assert_eq!(object.component_count(), 1);
    }

    #[test]
    fn test_non_integrating_components_stack() {
        let mut object = Object::new();
        object.add_component(Rigidbody::new()).unwrap();
        object.add_component(Collider::new(Vec3::new(1.0, 1.0, 1.0))).unwrap();
        object.add_component(Collider::new(Vec3::new(2.0, 2.0, 2.0)).as_trigger()).unwrap();
        object.add_component(Component::custom(Spinner::default())).unwrap();

        assert_eq!(object.component_count(), 4);
        assert!(object.has_component(ComponentKind::Collider));
        assert!(!object.has_component(ComponentKind::Renderer));
    }

    #[test]
    fn test_typed_access() {
        let mut object = Object::new();
        object.add_component(Component::custom(Spinner::default())).unwrap();
        object.add_component(Rigidbody::new()).unwrap();

        object.rigidbody_mut().unwrap().add_force(Vec3::new(0.0, 1.0, 0.0));
        object.update(ObjectId::default(), &Context::new(1.0));

        assert_eq!(object.behavior::<Spinner>().unwrap().ticks, 1);
        assert!(object.behavior::<Mover>().is_none());
        assert_eq!(object.transform.rotation.y, 1.0);
        assert_eq!(object.transform.position.y, 1.0);

        object.behavior_mut::<Spinner>().unwrap().ticks = 10;
        assert_eq!(object.behavior::<Spinner>().unwrap().ticks, 10);
    }

    #[test]
    fn test_remove_component() {
        let mut object = Object::new();
        object.add_component(Rigidbody::new()).unwrap();

        let removed = object.remove_component(0).unwrap();
        assert_eq!(removed.kind(), ComponentKind::RigidBody);
        assert!(object.rigidbody().is_none());
        assert!(object.remove_component(0).is_none());

        // The slot is free again
        assert!(object.add_component(Rigidbody::new()).is_ok());
    }
}
