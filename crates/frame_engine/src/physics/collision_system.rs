//! Collision pass run after integration each frame
//!
//! For every object that has both a rigidbody and a collider (a "subject"):
//!
//! 1. Find a solid collider directly underneath it. If there is one the
//!    subject is snapped onto it, downward velocity is cancelled and
//!    `is_on_ground` is set; otherwise gravity is added to its velocity.
//! 2. Report [`Contact::GroundLost`] when it was grounded last pass and has
//!    no support now without having jumped.
//! 3. Report every other collider it touches as [`Contact::Hit`]. Surfaces
//!    it is standing on are not reported.
//! 4. Report [`Contact::FellOut`] when it drops below the configured limit.
//!
//! The pass only produces events; game code decides how to react.

use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::ecs::{ObjectId, World};
use crate::foundation::math::Vec3;
use crate::physics::Aabb;

/// Tuning for the collision pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// Acceleration applied to airborne bodies (units per second squared)
    pub gravity: Vec3,

    /// How far a body's feet may be from a surface and still stand on it
    pub ground_tolerance: f32,

    /// Bodies below this height have left the world
    pub fall_limit: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -980.0, 0.0),
            ground_tolerance: 10.0,
            fall_limit: -500.0,
        }
    }
}

/// What a subject ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Touching another collider
    Hit(ObjectId),
    /// Walked off its supporting surface
    GroundLost,
    /// Dropped below the fall limit
    FellOut,
}

/// A contact reported for one subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    /// Object whose collider produced the contact
    pub subject: ObjectId,
    /// The contact
    pub contact: Contact,
}

impl CollisionEvent {
    /// The other object, or `None` when the subject lost its footing or
    /// fell out of the world
    pub fn other(&self) -> Option<ObjectId> {
        match self.contact {
            Contact::Hit(other) => Some(other),
            Contact::GroundLost | Contact::FellOut => None,
        }
    }
}

struct ColliderSnapshot {
    id: ObjectId,
    bounds: Aabb,
    solid: bool,
}

/// Grounding, gravity and overlap detection
pub struct CollisionSystem {
    settings: PhysicsSettings,
}

impl CollisionSystem {
    /// Create a collision pass with the given settings
    pub fn new(settings: PhysicsSettings) -> Self {
        Self { settings }
    }

    /// Run the pass over every subject in `world`
    pub fn step(&self, world: &mut World, ctx: &Context) -> Vec<CollisionEvent> {
        let colliders: Vec<ColliderSnapshot> = world
            .iter()
            .filter_map(|(id, object)| {
                object.collider().map(|collider| ColliderSnapshot {
                    id,
                    bounds: collider.bounds_at(&object.transform.position),
                    solid: collider.is_solid(),
                })
            })
            .collect();

        let subjects: Vec<ObjectId> = world
            .iter()
            .filter(|(_, object)| object.rigidbody().is_some() && object.collider().is_some())
            .map(|(id, _)| id)
            .collect();

        let mut events = Vec::new();
        for subject in subjects {
            self.step_subject(world, subject, &colliders, ctx, &mut events);
        }
        events
    }

    fn step_subject(
        &self,
        world: &mut World,
        subject: ObjectId,
        colliders: &[ColliderSnapshot],
        ctx: &Context,
        events: &mut Vec<CollisionEvent>,
    ) {
        let Some(object) = world.object_mut(subject) else {
            return;
        };
        let Some(half_extents) = object.collider().map(|c| c.half_extents) else {
            return;
        };
        let rising = object
            .rigidbody()
            .is_some_and(|rb| rb.linear_velocity.y > 0.0);

        let bounds = Aabb::from_center(object.transform.position, half_extents);
        let supports: Vec<&ColliderSnapshot> = colliders
            .iter()
            .filter(|other| other.id != subject && other.solid && !rising)
            .filter(|other| bounds.rests_on(&other.bounds, self.settings.ground_tolerance))
            .collect();
        let support_top = supports
            .iter()
            .map(|other| other.bounds.max.y)
            .reduce(f32::max);

        if let Some(top) = support_top {
            object.transform.position.y += top - bounds.min.y;
        }

        let Some(rb) = object.rigidbody_mut() else {
            return;
        };
        let was_on_ground = rb.is_on_ground;
        rb.is_on_ground = support_top.is_some();
        if rb.is_on_ground {
            rb.linear_velocity.y = rb.linear_velocity.y.max(0.0);
        } else {
            rb.linear_velocity += self.settings.gravity * ctx.delta_time();
        }
        if was_on_ground != rb.is_on_ground {
            log::trace!("{subject:?} grounded: {}", rb.is_on_ground);
        }
        if was_on_ground && !rb.is_on_ground && !rising {
            events.push(CollisionEvent {
                subject,
                contact: Contact::GroundLost,
            });
        }

        let position = object.transform.position;
        let bounds = Aabb::from_center(position, half_extents);
        for other in colliders {
            if other.id == subject || supports.iter().any(|s| s.id == other.id) {
                continue;
            }
            if bounds.intersects(&other.bounds) {
                events.push(CollisionEvent {
                    subject,
                    contact: Contact::Hit(other.id),
                });
            }
        }

        if position.y < self.settings.fall_limit {
            events.push(CollisionEvent {
                subject,
                contact: Contact::FellOut,
            });
        }
    }
}

impl Default for CollisionSystem {
    fn default() -> Self {
        Self::new(PhysicsSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{Collider, Rigidbody};
    use crate::ecs::{Object, Tag};
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;

    fn platform(world: &mut World, position: Vec3) -> ObjectId {
        let object = Object::new()
            .with_position(position)
            .with_component(Collider::new(Vec3::new(50.0, 25.0, 50.0)))
            .unwrap();
        world.add_object(object)
    }

    fn body(world: &mut World, position: Vec3) -> ObjectId {
        let object = Object::new()
            .with_position(position)
            .with_component(Rigidbody::new())
            .and_then(|o| o.with_component(Collider::new(Vec3::new(20.0, 25.0, 20.0))))
            .unwrap();
        world.add_object(object)
    }

    #[test]
    fn test_body_on_platform_is_grounded() {
        let mut world = World::new();
        platform(&mut world, Vec3::new(0.0, 50.0, 0.0));
        let player = body(&mut world, Vec3::new(0.0, 100.0, 0.0));

        let events = CollisionSystem::default().step(&mut world, &Context::new(DT));

        let object = world.object(player).unwrap();
        assert!(object.rigidbody().unwrap().is_on_ground);
        assert_eq!(object.rigidbody().unwrap().linear_velocity, Vec3::zeros());
        assert!(events.is_empty());
    }

    #[test]
    fn test_body_in_air_falls() {
        let mut world = World::new();
        let player = body(&mut world, Vec3::new(0.0, 300.0, 0.0));

        CollisionSystem::default().step(&mut world, &Context::new(DT));

        let rb = world.object(player).unwrap().rigidbody().unwrap();
        assert!(!rb.is_on_ground);
        assert_relative_eq!(rb.linear_velocity.y, -980.0 * DT);
    }

    #[test]
    fn test_landing_snaps_onto_surface() {
        let mut world = World::new();
        platform(&mut world, Vec3::new(0.0, 50.0, 0.0));
        let player = body(&mut world, Vec3::new(0.0, 96.0, 0.0));
        world
            .object_mut(player)
            .unwrap()
            .rigidbody_mut()
            .unwrap()
            .linear_velocity
            .y = -120.0;

        CollisionSystem::default().step(&mut world, &Context::new(DT));

        let object = world.object(player).unwrap();
        assert_relative_eq!(object.transform.position.y, 100.0);
        assert_eq!(object.rigidbody().unwrap().linear_velocity.y, 0.0);
    }

    #[test]
    fn test_rising_body_is_not_grounded() {
        let mut world = World::new();
        platform(&mut world, Vec3::new(0.0, 50.0, 0.0));
        let player = body(&mut world, Vec3::new(0.0, 102.0, 0.0));
        world
            .object_mut(player)
            .unwrap()
            .rigidbody_mut()
            .unwrap()
            .add_force(Vec3::new(0.0, 300.0, 0.0));

        CollisionSystem::default().step(&mut world, &Context::new(DT));

        assert!(!world.object(player).unwrap().rigidbody().unwrap().is_on_ground);
    }

    #[test]
    fn test_overlapping_trigger_is_reported() {
        let mut world = World::new();
        platform(&mut world, Vec3::new(0.0, 50.0, 0.0));
        let player = body(&mut world, Vec3::new(0.0, 100.0, 0.0));
        let pickup = world.add_object(
            Object::new()
                .with_tag(Tag::Objective)
                .with_position(Vec3::new(30.0, 100.0, 0.0))
                .with_component(Collider::new(Vec3::new(20.0, 25.0, 20.0)).as_trigger())
                .unwrap(),
        );

        let events = CollisionSystem::default().step(&mut world, &Context::new(DT));

        assert_eq!(
            events,
            vec![CollisionEvent {
                subject: player,
                contact: Contact::Hit(pickup),
            }]
        );
        assert_eq!(events[0].other(), Some(pickup));
    }

    #[test]
    fn test_walking_off_edge_reports_ground_lost() {
        let mut world = World::new();
        platform(&mut world, Vec3::new(0.0, 50.0, 0.0));
        let player = body(&mut world, Vec3::new(0.0, 100.0, 0.0));
        let system = CollisionSystem::default();
        let ctx = Context::new(DT);

        assert!(system.step(&mut world, &ctx).is_empty());

        world.object_mut(player).unwrap().transform.position.x = 80.0;
        let events = system.step(&mut world, &ctx);

        assert_eq!(
            events,
            vec![CollisionEvent {
                subject: player,
                contact: Contact::GroundLost,
            }]
        );
        assert_eq!(events[0].other(), None);

        // Only the transition is reported
        assert!(system.step(&mut world, &ctx).is_empty());
    }

    #[test]
    fn test_jumping_is_not_ground_lost() {
        let mut world = World::new();
        platform(&mut world, Vec3::new(0.0, 50.0, 0.0));
        let player = body(&mut world, Vec3::new(0.0, 100.0, 0.0));
        let system = CollisionSystem::default();
        let ctx = Context::new(DT);
        system.step(&mut world, &ctx);

        let object = world.object_mut(player).unwrap();
        object.transform.position.y += 5.0;
        object.rigidbody_mut().unwrap().add_force(Vec3::new(0.0, 300.0, 0.0));
        let events = system.step(&mut world, &ctx);

        assert!(events.is_empty());
        assert!(!world.object(player).unwrap().rigidbody().unwrap().is_on_ground);
    }

    #[test]
    fn test_falling_below_limit_is_reported() {
        let mut world = World::new();
        let player = body(&mut world, Vec3::new(0.0, -600.0, 0.0));

        let events = CollisionSystem::default().step(&mut world, &Context::new(DT));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].subject, player);
        assert_eq!(events[0].other(), None);
    }

    #[test]
    fn test_static_colliders_are_not_subjects() {
        let mut world = World::new();
        platform(&mut world, Vec3::new(0.0, 50.0, 0.0));
        platform(&mut world, Vec3::new(50.0, 50.0, 0.0));

        let events = CollisionSystem::default().step(&mut world, &Context::new(DT));
        assert!(events.is_empty());
    }
}
