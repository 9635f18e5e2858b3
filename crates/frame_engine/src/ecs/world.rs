//! World container owning every live object

use slotmap::SlotMap;

use super::{Object, ObjectId, Tag};
use crate::context::Context;

/// All objects of a running simulation
pub struct World {
    objects: SlotMap<ObjectId, Object>,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    /// Take ownership of an object and return its handle
    pub fn add_object(&mut self, object: Object) -> ObjectId {
        let tag = object.tag;
        let id = self.objects.insert(object);
        log::trace!("Added object {id:?} ({tag:?})");
        id
    }

    /// Remove an object; its components are dropped with it.
    ///
    /// Returns `None` if the handle is stale.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<Object> {
        let removed = self.objects.remove(id);
        if removed.is_some() {
            log::debug!("Removed object {id:?}");
        }
        removed
    }

    /// Whether `id` refers to a live object
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Get an object
    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id)
    }

    /// Get a mutable object
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(id)
    }

    /// Iterate over all live objects
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Object)> {
        self.objects.iter()
    }

    /// Handles of all objects carrying `tag`
    pub fn tagged(&self, tag: Tag) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects
            .iter()
            .filter(move |(_, object)| object.tag == tag)
            .map(|(id, _)| id)
    }

    /// Number of live objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the world has no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Run one frame of component updates on every object
    pub fn update(&mut self, ctx: &Context) {
        for (id, object) in &mut self.objects {
            object.update(id, ctx);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::Rigidbody;
    use crate::foundation::math::Vec3;

    #[test]
    fn test_add_and_remove() {
        let mut world = World::new();
        let a = world.add_object(Object::new());
        let b = world.add_object(Object::new().with_tag(Tag::Objective));

        assert_eq!(world.len(), 2);
        assert!(world.remove_object(a).is_some());
        assert!(world.remove_object(a).is_none());
        assert!(!world.contains(a));
        assert!(world.contains(b));
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn test_stale_handle_does_not_alias() {
        let mut world = World::new();
        let old = world.add_object(Object::new());
        world.remove_object(old);
        let new = world.add_object(Object::new());

        assert_ne!(old, new);
        assert!(world.object(old).is_none());
        assert!(world.object(new).is_some());
    }

    #[test]
    fn test_tagged() {
        let mut world = World::new();
        world.add_object(Object::new().with_tag(Tag::Objective));
        world.add_object(Object::new().with_tag(Tag::Trap));
        world.add_object(Object::new().with_tag(Tag::Objective));

        assert_eq!(world.tagged(Tag::Objective).count(), 2);
        assert_eq!(world.tagged(Tag::Trap).count(), 1);
        assert_eq!(world.tagged(Tag::Custom(7)).count(), 0);
    }

    #[test]
    fn test_update_runs_every_object() {
        let mut world = World::new();
        let mut ids = Vec::new();
        for i in 0..3 {
            let mut rb = Rigidbody::new();
            rb.add_force(Vec3::new(1.0, 0.0, 0.0));
            let object = Object::new()
                .with_position(Vec3::new(0.0, i as f32, 0.0))
                .with_component(rb)
                .unwrap();
            ids.push(world.add_object(object));
        }

        world.update(&Context::new(2.0));

        for id in ids {
            assert_eq!(world.object(id).unwrap().transform.position.x, 2.0);
        }
    }
}
