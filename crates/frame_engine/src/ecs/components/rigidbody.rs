//! Rigidbody component
//!
//! Owns linear/angular velocity and drag and advances its object's transform
//! once per frame with semi-implicit Euler: velocities are damped first, then
//! the damped velocities move the transform.
//!
//! Mass is not modelled. [`Rigidbody::add_force`] and
//! [`Rigidbody::add_torque`] are impulses applied directly to velocity.

use std::any::Any;

use crate::context::Context;
use crate::ecs::component::{Behavior, ComponentHost};
use crate::foundation::math::Vec3;

/// Multiplicative damping applied to a velocity over `delta_time` seconds
///
/// `1 - drag * delta_time`, clamped to `[0, 1]` so that large steps stop the
/// body instead of reversing it.
pub fn drag_factor(drag: f32, delta_time: f32) -> f32 {
    (1.0 - drag * delta_time).clamp(0.0, 1.0)
}

/// Physics state of a single object
#[derive(Debug, Clone, PartialEq)]
pub struct Rigidbody {
    /// Linear velocity in units per second
    pub linear_velocity: Vec3,

    /// Angular velocity in radians per second
    pub angular_velocity: Vec3,

    /// Linear drag per second (>= 0)
    linear_drag: f32,

    /// Angular drag per second (>= 0)
    angular_drag: f32,

    /// Whether the body is resting on a solid surface.
    /// Written by the collision pass, never by integration.
    pub is_on_ground: bool,
}

impl Rigidbody {
    /// Create a body at rest with no drag
    pub fn new() -> Self {
        Self {
            linear_velocity: Vec3::zeros(),
            angular_velocity: Vec3::zeros(),
            linear_drag: 0.0,
            angular_drag: 0.0,
            is_on_ground: false,
        }
    }

    /// Builder: set linear drag
    pub fn with_linear_drag(mut self, drag: f32) -> Self {
        self.set_linear_drag(drag);
        self
    }

    /// Builder: set angular drag
    pub fn with_angular_drag(mut self, drag: f32) -> Self {
        self.set_angular_drag(drag);
        self
    }

    /// Linear drag per second
    pub fn linear_drag(&self) -> f32 {
        self.linear_drag
    }

    /// Angular drag per second
    pub fn angular_drag(&self) -> f32 {
        self.angular_drag
    }

    /// Set linear drag; negative values are treated as zero
    pub fn set_linear_drag(&mut self, drag: f32) {
        self.linear_drag = drag.max(0.0);
    }

    /// Set angular drag; negative values are treated as zero
    pub fn set_angular_drag(&mut self, drag: f32) {
        self.angular_drag = drag.max(0.0);
    }

    /// Add an impulse to linear velocity
    pub fn add_force(&mut self, impulse: Vec3) {
        self.linear_velocity += impulse;
    }

    /// Add an impulse to angular velocity
    pub fn add_torque(&mut self, impulse: Vec3) {
        self.angular_velocity += impulse;
    }

    /// Zero both velocities
    pub fn stop(&mut self) {
        self.linear_velocity = Vec3::zeros();
        self.angular_velocity = Vec3::zeros();
    }

    /// Damp velocities for one step of `delta_time` seconds
    pub fn apply_drag(&mut self, delta_time: f32) {
        self.linear_velocity *= drag_factor(self.linear_drag, delta_time);
        self.angular_velocity *= drag_factor(self.angular_drag, delta_time);
    }

    /// One integration step: damp, then move `position`/`rotation`
    pub fn integrate(&mut self, position: &mut Vec3, rotation: &mut Vec3, delta_time: f32) {
        self.apply_drag(delta_time);

        *position += self.linear_velocity * delta_time;
        *rotation += self.angular_velocity * delta_time;

        debug_assert!(
            self.linear_velocity.iter().all(|v| v.is_finite()),
            "linear velocity became non-finite"
        );
    }
}

impl Default for Rigidbody {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for Rigidbody {
    fn name(&self) -> &str {
        "rigidbody"
    }

    fn update(&mut self, host: ComponentHost<'_>, ctx: &Context) {
        let transform = host.transform;
        self.integrate(&mut transform.position, &mut transform.rotation, ctx.delta_time());
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
