//! Object/component runtime
//!
//! Objects own an ordered list of components which the world updates once
//! per frame through a single polymorphic interface.

pub mod component;
pub mod components;
pub mod entity;
pub mod object;
pub mod world;

pub use component::{Behavior, Component, ComponentHost, ComponentKind};
pub use entity::{ObjectId, Tag};
pub use object::{Object, ObjectError};
pub use world::World;
