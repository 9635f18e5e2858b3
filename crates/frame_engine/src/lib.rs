//! # Frame Engine
//!
//! A small single-threaded runtime for real-time simulations.
//!
//! ## Features
//!
//! - **Components**: objects own an ordered list of behaviors updated once per
//!   frame through one polymorphic interface
//! - **Rigidbody**: velocity/drag integration with semi-implicit Euler
//! - **Collision pass**: grounding, gravity and overlap events for game logic
//! - **Configuration**: TOML/RON loading for any serde type
//!
//! ## Quick Start
//!
//! ```rust
//! use frame_engine::prelude::*;
//!
//! let mut world = World::new();
//! let mut rb = Rigidbody::new();
//! rb.add_force(Vec3::new(1.0, 0.0, 0.0));
//! let ball = world.add_object(Object::new().with_component(rb)?);
//!
//! let mut timer = Timer::new();
//! world.update(&timer.advance(0.5));
//!
//! assert_eq!(world.object(ball).map(|o| o.transform.position.x), Some(0.5));
//! # Ok::<(), ObjectError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod context;
pub mod ecs;
pub mod foundation;
pub mod input;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, ConfigFormat},
        context::{Context, TimeSlice},
        ecs::{
            components::{Collider, Renderer, Rigidbody},
            Behavior, Component, ComponentHost, ComponentKind, Object, ObjectError, ObjectId, Tag,
            World,
        },
        foundation::{
            math::{Transform, Vec3},
            time::Timer,
        },
        input::{KeyCode, KeyEvent},
        physics::{CollisionEvent, CollisionSystem, Contact, PhysicsSettings},
    };
}
