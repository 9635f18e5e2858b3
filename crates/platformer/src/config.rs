//! Game configuration
//!
//! Every section has defaults so a config file only needs the values it
//! changes. Load with [`Config::load_from_file`](frame_engine::config::Config).

use frame_engine::config::Config;
use frame_engine::foundation::math::Vec3;
use frame_engine::input::{KeyCode, KeyEvent};
use frame_engine::physics::PhysicsSettings;
use serde::{Deserialize, Serialize};

use crate::actions::{default_bindings, KeyBinding};
use crate::level::LevelLayout;

/// Game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Collision pass settings
    pub physics: PhysicsSettings,

    /// Controls settings
    pub controls: ControlsConfig,

    /// Level layout
    pub level: LevelLayout,

    /// Headless run settings
    pub run: RunConfig,
}

impl Config for GameConfig {}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Walking speed. Multiplied by the frame time and written straight
    /// into horizontal velocity each frame.
    pub speed: f32,

    /// Upward impulse applied by a jump
    pub jump_force: f32,

    /// World size of one grid step along X and Z
    pub grid_unit: f32,

    /// World size of one grid step along Y
    pub grid_unit_up: f32,

    /// Z offset added to every grid position
    pub level_origin_z: f32,

    /// Camera position at level start; the player-relative offset is
    /// derived from it
    pub initial_camera: Vec3,

    /// Collider half size of the player
    pub player_half_extents: Vec3,

    /// Collider half size of platforms and traps
    pub tile_half_extents: Vec3,

    /// Collider half size of objectives
    pub pickup_half_extents: Vec3,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            speed: 12_000.0,
            jump_force: 450.0,
            grid_unit: 100.0,
            grid_unit_up: 50.0,
            level_origin_z: -200.0,
            initial_camera: Vec3::new(0.0, 400.0, 200.0),
            player_half_extents: Vec3::new(20.0, 25.0, 20.0),
            tile_half_extents: Vec3::new(50.0, 25.0, 50.0),
            pickup_half_extents: Vec3::new(20.0, 25.0, 20.0),
        }
    }
}

/// Controls configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Key bindings
    pub bindings: Vec<KeyBinding>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            bindings: default_bindings(),
        }
    }
}

/// A key transition fired at the start of a given frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedKey {
    /// Frame number (1-based) before which the key event is delivered
    pub frame: u64,
    /// Key
    pub key: KeyCode,
    /// `true` on press, `false` on release
    pub pressed: bool,
}

impl ScriptedKey {
    const fn press(frame: u64, key: KeyCode) -> Self {
        Self {
            frame,
            key,
            pressed: true,
        }
    }

    const fn release(frame: u64, key: KeyCode) -> Self {
        Self {
            frame,
            key,
            pressed: false,
        }
    }

    /// The key transition this entry delivers
    pub fn event(&self) -> KeyEvent {
        if self.pressed {
            KeyEvent::press(self.key)
        } else {
            KeyEvent::release(self.key)
        }
    }
}

/// Headless driver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Fixed frame time in seconds
    pub timestep: f32,

    /// Number of frames to simulate
    pub frames: u64,

    /// Input fed to the game, in frame order
    pub script: Vec<ScriptedKey>,
}

impl Default for RunConfig {
    /// A route through the stock level: collect the far objective, jump,
    /// reset, collect the near one, step on the trap, walk off the edge and
    /// finally reset back to spawn.
    fn default() -> Self {
        use KeyCode::{Space, A, D, R, S, W};

        Self {
            timestep: 1.0 / 60.0,
            frames: 600,
            script: vec![
                ScriptedKey::press(10, D),
                ScriptedKey::release(40, D),
                ScriptedKey::press(45, S),
                ScriptedKey::release(75, S),
                ScriptedKey::press(80, D),
                ScriptedKey::release(140, D),
                ScriptedKey::press(145, W),
                ScriptedKey::release(175, W),
                ScriptedKey::press(180, Space),
                ScriptedKey::release(181, Space),
                ScriptedKey::press(240, R),
                ScriptedKey::release(241, R),
                ScriptedKey::press(245, A),
                ScriptedKey::release(275, A),
                ScriptedKey::press(300, D),
                ScriptedKey::release(380, D),
                ScriptedKey::press(390, W),
                ScriptedKey::release(430, W),
                ScriptedKey::press(500, R),
                ScriptedKey::release(501, R),
            ],
        }
    }
}
