//! Collider component
//!
//! An axis-aligned box centred on the owning object's position. The
//! collision pass reads it after integration; the component itself has no
//! per-frame work.

use std::any::Any;

use crate::context::Context;
use crate::ecs::component::{Behavior, ComponentHost};
use crate::foundation::math::Vec3;
use crate::physics::Aabb;

/// Collision volume attached to an object
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    /// Half size of the box along each axis
    pub half_extents: Vec3,

    /// Trigger volumes report overlaps but never hold anything up
    pub is_trigger: bool,
}

impl Collider {
    /// Create a solid box collider
    pub fn new(half_extents: Vec3) -> Self {
        Self {
            half_extents: half_extents.abs(),
            is_trigger: false,
        }
    }

    /// Mark this as a trigger volume
    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    /// Whether this collider can support bodies standing on it
    pub fn is_solid(&self) -> bool {
        !self.is_trigger
    }

    /// World-space bounds when the owner sits at `position`
    pub fn bounds_at(&self, position: &Vec3) -> Aabb {
        Aabb::from_center(*position, self.half_extents)
    }
}

impl Behavior for Collider {
    fn name(&self) -> &str {
        "collider"
    }

    fn update(&mut self, _host: ComponentHost<'_>, _ctx: &Context) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
