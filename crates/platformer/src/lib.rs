//! # Platformer
//!
//! A small grid platformer on top of `frame_engine`: walk across floor tiles,
//! collect every objective, avoid traps and don't fall off the edge.
//!
//! The [`game::Game`] driver owns the world and steps it with a fixed
//! per-frame order; [`session::Session`] holds the player state that reacts
//! to input and collisions.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod actions;
pub mod config;
pub mod game;
pub mod level;
pub mod session;

pub use config::GameConfig;
pub use game::{FrameReport, Game, GameError, GameResult, RunSummary};
pub use session::{CollisionOutcome, Session, SessionError};
