//! Headless frame driver
//!
//! Owns the world, the session and the collision pass, and runs them in a
//! fixed order every frame:
//!
//! 1. component updates (`World::update`, rigidbodies integrate here)
//! 2. collision pass
//! 3. collision reactions for the player
//! 4. session update (movement, facing, camera)

use frame_engine::config::ConfigError;
use frame_engine::context::Context;
use frame_engine::ecs::{ObjectError, World};
use frame_engine::foundation::math::Vec3;
use frame_engine::foundation::time::Timer;
use frame_engine::physics::{CollisionEvent, CollisionSystem};
use thiserror::Error;

use crate::config::{GameConfig, RunConfig};
use crate::level::LevelBuilder;
use crate::session::{CollisionOutcome, Session, SessionError};

/// Game errors
#[derive(Error, Debug)]
pub enum GameError {
    /// Session failure
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Level construction failure
    #[error("Level error: {0}")]
    Level(#[from] ObjectError),

    /// Configuration failure
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias for game operations
pub type GameResult<T> = Result<T, GameError>;

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Frame number
    pub frame: u64,
    /// Contacts reported for the player
    pub events: Vec<CollisionEvent>,
    /// Reactions to those contacts, in the same order
    pub outcomes: Vec<CollisionOutcome>,
}

impl FrameReport {
    /// Whether any contact sent the player back to spawn
    pub fn was_reset(&self) -> bool {
        self.outcomes.contains(&CollisionOutcome::Reset)
    }
}

/// Totals of a scripted run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Frames simulated
    pub frames: u64,
    /// Simulated seconds
    pub elapsed: f32,
    /// Whether every objective was collected
    pub won: bool,
    /// Objectives left uncollected
    pub objectives_left: u32,
    /// Times the player was sent back to spawn
    pub resets: u32,
    /// Player position after the last frame
    pub final_position: Vec3,
}

/// A loaded level and everything needed to simulate it
pub struct Game {
    world: World,
    session: Session,
    collisions: CollisionSystem,
    timer: Timer,
}

impl Game {
    /// Build the configured level and start a session on it
    pub fn new(config: &GameConfig) -> GameResult<Self> {
        let mut world = World::new();
        let level = LevelBuilder::new(&mut world, &config.gameplay).build(&config.level)?;
        let session = Session::init(&world, &level, config)?;

        Ok(Self {
            world,
            session,
            collisions: CollisionSystem::new(config.physics.clone()),
            timer: Timer::new(),
        })
    }

    /// Deliver a raw key transition
    pub fn key_event(&mut self, code: u32, pressed: bool) -> GameResult<()> {
        if let Some(action) = self.session.input(&mut self.world, code, pressed)? {
            log::trace!("Key {code} ({}) -> {action:?}", if pressed { "down" } else { "up" });
        }
        Ok(())
    }

    /// Simulate one frame of `delta_time` seconds
    pub fn frame(&mut self, delta_time: f32) -> GameResult<FrameReport> {
        let ctx = self.timer.advance(delta_time);
        self.step(&ctx)
    }

    fn step(&mut self, ctx: &Context) -> GameResult<FrameReport> {
        self.world.update(ctx);

        let player = self.session.player();
        let events: Vec<CollisionEvent> = self
            .collisions
            .step(&mut self.world, ctx)
            .into_iter()
            .filter(|event| event.subject == player)
            .collect();

        let mut outcomes = Vec::with_capacity(events.len());
        for event in &events {
            outcomes.push(self.session.on_collision(&mut self.world, event.other())?);
        }

        self.session.update(&mut self.world, ctx)?;

        Ok(FrameReport {
            frame: ctx.time.frame,
            events,
            outcomes,
        })
    }

    /// Run a scripted, fixed-timestep session
    pub fn run(&mut self, run: &RunConfig) -> GameResult<RunSummary> {
        let mut script = run.script.iter().peekable();

        for _ in 0..run.frames {
            let next_frame = self.timer.frame_count() + 1;
            while let Some(key) = script.next_if(|key| key.frame <= next_frame) {
                let event = key.event();
                self.key_event(event.code, event.pressed)?;
            }

            let report = self.frame(run.timestep)?;
            if report.outcomes.contains(&CollisionOutcome::Won) {
                log::info!("Level complete at frame {}", report.frame);
            }
        }

        Ok(self.summary())
    }

    /// Current totals
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.timer.frame_count(),
            elapsed: self.timer.total_time(),
            won: self.session.has_won(),
            objectives_left: self.session.objectives_left(),
            resets: self.session.resets(),
            final_position: self.player_position().unwrap_or_else(|| self.session.spawn_position()),
        }
    }

    /// Player position, if the player still exists
    pub fn player_position(&self) -> Option<Vec3> {
        self.world
            .object(self.session.player())
            .map(|object| object.transform.position)
    }

    /// The simulated world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the simulated world
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The player session
    pub fn session(&self) -> &Session {
        &self.session
    }
}
