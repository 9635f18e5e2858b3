//! Level construction on a coarse grid

use frame_engine::ecs::components::{Collider, Renderer, Rigidbody};
use frame_engine::ecs::{Object, ObjectError, ObjectId, Tag, World};
use frame_engine::foundation::math::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::GameplayConfig;

const PLATFORM_MESH: &str = "res/plane.mesh";
const PROP_MESH: &str = "demo.mesh";
const TEXTURE: &str = "demo.tex";

/// Integer grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Column along X
    pub x: i32,
    /// Layer along Y
    pub y: i32,
    /// Row along Z
    pub z: i32,
}

impl GridCell {
    /// Cell at `(x, y, z)`
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Placement of everything in a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelLayout {
    /// Where the player starts (and returns to on reset)
    pub player_spawn: GridCell,
    /// Solid floor tiles
    pub platforms: Vec<GridCell>,
    /// Collectibles
    pub objectives: Vec<GridCell>,
    /// Floor tiles that send the player back to spawn
    pub traps: Vec<GridCell>,
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self {
            player_spawn: GridCell::new(0, 2, 0),
            platforms: vec![
                GridCell::new(0, 1, 0),
                GridCell::new(1, 1, 0),
                GridCell::new(-1, 1, 0),
                GridCell::new(-1, 1, 1),
                GridCell::new(-2, 1, 1),
                GridCell::new(-3, 1, 1),
                GridCell::new(-3, 1, 0),
            ],
            objectives: vec![GridCell::new(1, 2, 0), GridCell::new(-3, 1, 0)],
            traps: vec![GridCell::new(-2, 1, 0)],
        }
    }
}

/// Handles produced by building a level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// The player object
    pub player: ObjectId,
    /// Number of objectives placed
    pub objectives: u32,
}

/// Places grid-aligned objects into a world
pub struct LevelBuilder<'a> {
    world: &'a mut World,
    tuning: &'a GameplayConfig,
    objectives: u32,
}

impl<'a> LevelBuilder<'a> {
    /// Start placing objects into `world`
    pub fn new(world: &'a mut World, tuning: &'a GameplayConfig) -> Self {
        Self {
            world,
            tuning,
            objectives: 0,
        }
    }

    /// World position of a grid cell
    #[allow(clippy::cast_precision_loss)]
    pub fn grid_position(&self, cell: GridCell) -> Vec3 {
        Vec3::new(
            self.tuning.grid_unit * cell.x as f32,
            self.tuning.grid_unit_up * cell.y as f32,
            self.tuning.grid_unit * cell.z as f32 + self.tuning.level_origin_z,
        )
    }

    fn place(&mut self, cell: GridCell, object: Object) -> ObjectId {
        let object = object.with_position(self.grid_position(cell));
        self.world.add_object(object)
    }

    /// Solid floor tile
    pub fn add_platform(&mut self, cell: GridCell) -> Result<ObjectId, ObjectError> {
        let object = Object::new()
            .with_component(Renderer::new(PLATFORM_MESH, TEXTURE))?
            .with_component(Collider::new(self.tuning.tile_half_extents))?;
        Ok(self.place(cell, object))
    }

    /// Collectible counted towards the win condition
    pub fn add_objective(&mut self, cell: GridCell) -> Result<ObjectId, ObjectError> {
        let object = Object::new()
            .with_tag(Tag::Objective)
            .with_component(Renderer::new(PROP_MESH, TEXTURE))?
            .with_component(Collider::new(self.tuning.pickup_half_extents).as_trigger())?;
        self.objectives += 1;
        Ok(self.place(cell, object))
    }

    /// Trap tile; it cannot be stood on
    pub fn add_trap(&mut self, cell: GridCell) -> Result<ObjectId, ObjectError> {
        let object = Object::new()
            .with_tag(Tag::Trap)
            .with_component(Renderer::new(PROP_MESH, TEXTURE))?
            .with_component(Collider::new(self.tuning.tile_half_extents).as_trigger())?;
        Ok(self.place(cell, object))
    }

    /// The player: rigidbody first so the renderer and collider see the
    /// integrated transform
    pub fn spawn_player(&mut self, cell: GridCell) -> Result<ObjectId, ObjectError> {
        let object = Object::new()
            .with_component(Rigidbody::new())?
            .with_component(Renderer::new(PROP_MESH, TEXTURE))?
            .with_component(Collider::new(self.tuning.player_half_extents))?;
        Ok(self.place(cell, object))
    }

    /// Objectives placed so far
    pub fn objectives(&self) -> u32 {
        self.objectives
    }

    /// Place a whole layout
    pub fn build(mut self, layout: &LevelLayout) -> Result<Level, ObjectError> {
        let player = self.spawn_player(layout.player_spawn)?;
        for &cell in &layout.platforms {
            self.add_platform(cell)?;
        }
        for &cell in &layout.objectives {
            self.add_objective(cell)?;
        }
        for &cell in &layout.traps {
            self.add_trap(cell)?;
        }

        log::info!(
            "Level built: {} platforms, {} objectives, {} traps",
            layout.platforms.len(),
            self.objectives,
            layout.traps.len()
        );

        Ok(Level {
            player,
            objectives: self.objectives,
        })
    }
}
