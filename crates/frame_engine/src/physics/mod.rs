//! Physics module for collision detection and response
//!
//! Rigidbody integration itself is a component
//! ([`Rigidbody`](crate::ecs::components::Rigidbody)); this module holds the
//! collision pass that runs after it.

pub mod collision;
pub mod collision_system;

pub use collision::Aabb;
pub use collision_system::{CollisionEvent, CollisionSystem, Contact, PhysicsSettings};
