//! Player session: input, collision reactions, camera and win state
//!
//! One [`Session`] exists per loaded level. It is passed by `&mut` to every
//! operation alongside the [`World`] that owns the player object.

use frame_engine::context::Context;
use frame_engine::ecs::components::Rigidbody;
use frame_engine::ecs::{ObjectId, Tag, World};
use frame_engine::foundation::math::{utils, Vec3};
use thiserror::Error;

use crate::actions::{Action, ActionMap, Directions};
use crate::config::GameConfig;
use crate::level::Level;

/// Session errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The player object is no longer in the world
    #[error("Player object {0:?} is missing from the world")]
    PlayerMissing(ObjectId),

    /// The player object lost its rigidbody
    #[error("Player object {0:?} has no rigidbody")]
    RigidbodyMissing(ObjectId),
}

/// What a collision did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Nothing gameplay-relevant was hit
    Ignored,
    /// The player was sent back to spawn
    Reset,
    /// An objective was picked up and others remain
    Collected {
        /// Objectives still in the level
        remaining: u32,
    },
    /// The last objective was picked up
    Won,
}

/// Per-level player state
#[derive(Debug, Clone)]
pub struct Session {
    player: ObjectId,
    spawn: Vec3,
    camera_offset: Vec3,
    camera_position: Vec3,
    pressed: Directions,
    objectives_left: u32,
    won: bool,
    resets: u32,
    actions: ActionMap,
    speed: f32,
    jump_force: f32,
}

impl Session {
    /// Start a session for a freshly built level
    pub fn init(world: &World, level: &Level, config: &GameConfig) -> Result<Self, SessionError> {
        let spawn = world
            .object(level.player)
            .map(|object| object.transform.position)
            .ok_or(SessionError::PlayerMissing(level.player))?;
        let camera_position = config.gameplay.initial_camera;

        log::debug!(
            "Session started: spawn {:?}, {} objectives",
            spawn,
            level.objectives
        );

        Ok(Self {
            player: level.player,
            spawn,
            camera_offset: camera_position - spawn,
            camera_position,
            pressed: Directions::empty(),
            objectives_left: level.objectives,
            won: false,
            resets: 0,
            actions: ActionMap::from_bindings(&config.controls.bindings),
            speed: config.gameplay.speed,
            jump_force: config.gameplay.jump_force,
        })
    }

    /// Feed a raw key transition. Returns the action it mapped to, if any.
    ///
    /// Movement keys are held flags. Jump and reset fire on press only.
    pub fn input(&mut self, world: &mut World, key: u32, pressed: bool) -> Result<Option<Action>, SessionError> {
        let Some(action) = self.actions.resolve(key) else {
            return Ok(None);
        };

        if let Some(direction) = action.direction() {
            self.pressed.set(direction, pressed);
            return Ok(Some(action));
        }

        if !pressed {
            return Ok(Some(action));
        }

        match action {
            Action::Jump => {
                let rb = self.rigidbody_mut(world)?;
                if rb.is_on_ground {
                    rb.add_force(Vec3::new(0.0, self.jump_force, 0.0));
                    log::debug!("Jump");
                }
            }
            Action::Reset => self.reset_player(world)?,
            Action::MoveUp | Action::MoveDown | Action::MoveLeft | Action::MoveRight => {}
        }
        Ok(Some(action))
    }

    /// React to the player touching `other`; `None` means the player dropped
    /// off a platform or out of the world
    pub fn on_collision(&mut self, world: &mut World, other: Option<ObjectId>) -> Result<CollisionOutcome, SessionError> {
        let Some(other) = other else {
            log::info!("Player fell");
            self.reset_player(world)?;
            return Ok(CollisionOutcome::Reset);
        };

        let Some(tag) = world.object(other).map(|object| object.tag) else {
            return Ok(CollisionOutcome::Ignored);
        };

        match tag {
            Tag::Trap => {
                log::info!("Player hit a trap");
                self.reset_player(world)?;
                Ok(CollisionOutcome::Reset)
            }
            Tag::Objective => {
                if world.remove_object(other).is_none() {
                    return Ok(CollisionOutcome::Ignored);
                }
                self.objectives_left = self.objectives_left.saturating_sub(1);
                log::info!("Objective collected, {} left", self.objectives_left);

                if self.objectives_left == 0 {
                    self.won = true;
                    log::info!("All objectives collected");
                    Ok(CollisionOutcome::Won)
                } else {
                    Ok(CollisionOutcome::Collected {
                        remaining: self.objectives_left,
                    })
                }
            }
            Tag::Untagged | Tag::Custom(_) => Ok(CollisionOutcome::Ignored),
        }
    }

    /// Teleport the player back to spawn and stop it
    pub fn reset_player(&mut self, world: &mut World) -> Result<(), SessionError> {
        let object = world
            .object_mut(self.player)
            .ok_or(SessionError::PlayerMissing(self.player))?;
        let rb = object
            .rigidbody_mut()
            .ok_or(SessionError::RigidbodyMissing(self.player))?;
        rb.linear_velocity = Vec3::zeros();
        object.transform.position = self.spawn;

        self.resets += 1;
        self.camera_position = self.spawn + self.camera_offset;
        Ok(())
    }

    /// Per-frame movement, facing and camera follow
    pub fn update(&mut self, world: &mut World, ctx: &Context) -> Result<(), SessionError> {
        let direction = self.direction() * (self.speed * ctx.delta_time());

        let object = world
            .object_mut(self.player)
            .ok_or(SessionError::PlayerMissing(self.player))?;
        let rb = object
            .rigidbody_mut()
            .ok_or(SessionError::RigidbodyMissing(self.player))?;
        rb.linear_velocity.x = direction.x;
        rb.linear_velocity.z = direction.z;

        if !utils::is_horizontal_zero(&direction) {
            object.transform.rotation = Vec3::new(0.0, utils::heading_yaw(&direction), 0.0);
        }

        self.camera_position = object.transform.position + self.camera_offset;
        Ok(())
    }

    fn direction(&self) -> Vec3 {
        Vec3::new(
            self.axis(Directions::LEFT, Directions::RIGHT),
            0.0,
            self.axis(Directions::DOWN, Directions::UP),
        )
    }

    fn axis(&self, positive: Directions, negative: Directions) -> f32 {
        let held = |flag: Directions| if self.pressed.contains(flag) { 1.0 } else { 0.0 };
        held(positive) - held(negative)
    }

    fn rigidbody_mut<'w>(&self, world: &'w mut World) -> Result<&'w mut Rigidbody, SessionError> {
        world
            .object_mut(self.player)
            .ok_or(SessionError::PlayerMissing(self.player))?
            .rigidbody_mut()
            .ok_or(SessionError::RigidbodyMissing(self.player))
    }

    /// Last computed camera position
    pub fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    /// Objectives still to collect
    pub fn objectives_left(&self) -> u32 {
        self.objectives_left
    }

    /// Whether every objective has been collected
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// The player object
    pub fn player(&self) -> ObjectId {
        self.player
    }

    /// Where resets send the player
    pub fn spawn_position(&self) -> Vec3 {
        self.spawn
    }

    /// Directional keys currently held
    pub fn pressed(&self) -> Directions {
        self.pressed
    }

    /// How many times the player has been sent back to spawn
    pub fn resets(&self) -> u32 {
        self.resets
    }
}
