//! Object handles

use serde::{Deserialize, Serialize};

slotmap::new_key_type! {
    /// Stable, generational handle to an object stored in a [`World`](crate::ecs::World)
    ///
    /// A handle to a removed object never aliases a newer one.
    pub struct ObjectId;
}

/// Gameplay classification of an object
///
/// The engine never interprets tags; game code uses them to decide how to
/// react to collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tag {
    /// No special meaning
    #[default]
    Untagged,
    /// Touching it sends the player back to spawn
    Trap,
    /// Collectible goal
    Objective,
    /// Game-defined tag
    Custom(u16),
}
