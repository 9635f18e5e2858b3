//! Built-in components

pub mod collider;
pub mod renderer;
pub mod rigidbody;

pub use collider::Collider;
pub use renderer::Renderer;
pub use rigidbody::{drag_factor, Rigidbody};
