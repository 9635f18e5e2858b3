//! Renderer component
//!
//! Carries the asset paths an external render pass needs plus the model
//! matrix captured during the object's update. Asset loading and drawing live
//! outside the engine.

use std::any::Any;

use crate::context::Context;
use crate::ecs::component::{Behavior, ComponentHost};
use crate::foundation::math::Mat4;

/// Component for objects that can be rendered
#[derive(Debug, Clone)]
pub struct Renderer {
    /// Mesh asset path
    pub mesh: String,

    /// Texture asset path
    pub texture: String,

    /// Whether this object is visible
    pub visible: bool,

    model_matrix: Mat4,
}

impl Renderer {
    /// Create a visible renderer for the given assets
    pub fn new(mesh: impl Into<String>, texture: impl Into<String>) -> Self {
        Self {
            mesh: mesh.into(),
            texture: texture.into(),
            visible: true,
            model_matrix: Mat4::identity(),
        }
    }

    /// Set visibility
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Model matrix captured at the last update
    pub fn model_matrix(&self) -> &Mat4 {
        &self.model_matrix
    }
}

impl Behavior for Renderer {
    fn name(&self) -> &str {
        "renderer"
    }

    fn update(&mut self, host: ComponentHost<'_>, _ctx: &Context) {
        if self.visible {
            self.model_matrix = host.transform.to_matrix();
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::{ObjectId, Tag};
    use crate::foundation::math::{Transform, Vec3};
    use approx::assert_relative_eq;

    #[test]
    fn test_update_captures_model_matrix() {
        let mut renderer = Renderer::new("res/plane.mesh", "demo.tex");
        let mut transform = Transform::from_position(Vec3::new(3.0, 0.0, -2.0));

        renderer.update(
            ComponentHost {
                id: ObjectId::default(),
                tag: Tag::Untagged,
                transform: &mut transform,
            },
            &Context::new(0.016),
        );

        assert_relative_eq!(*renderer.model_matrix(), transform.to_matrix());
        assert_eq!(renderer.mesh, "res/plane.mesh");
    }

    #[test]
    fn test_hidden_renderer_keeps_previous_matrix() {
        let mut renderer = Renderer::new("demo.mesh", "demo.tex");
        renderer.set_visible(false);
        let mut transform = Transform::from_position(Vec3::new(1.0, 1.0, 1.0));

        renderer.update(
            ComponentHost {
                id: ObjectId::default(),
                tag: Tag::Untagged,
                transform: &mut transform,
            },
            &Context::new(0.016),
        );

        assert_eq!(*renderer.model_matrix(), Mat4::identity());
    }
}
