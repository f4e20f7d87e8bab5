//! Model-view-projection pipeline
//!
//! Builds the three camera matrices from [`AppConfig`] and pushes model-space
//! points through them to clip space and normalized device coordinates.

use rust3d_math::{Mat4, Vec3, Vec4};

use crate::config::{AppConfig, CameraConfig, SceneConfig};

/// A point after projection
#[derive(Clone, Copy, Debug)]
pub struct ProjectedPoint {
    /// Clip-space xyz
    pub clip: Vec3,
    /// Clip-space w
    pub w: f32,
    /// Normalized device coordinates, `None` when w is zero
    pub ndc: Option<Vec3>,
}

impl ProjectedPoint {
    /// Inside the canonical view volume ([-1, 1] on every axis)
    pub fn is_visible(&self) -> bool {
        self.w > 0.0
            && self.ndc.is_some_and(|p| {
                p.to_array().iter().all(|c| (-1.0..=1.0).contains(c))
            })
    }
}

/// Model, view and projection matrices for one frame
#[derive(Clone, Copy, Debug)]
pub struct Pipeline {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl Pipeline {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            model: model_matrix(&config.scene),
            view: view_matrix(&config.camera),
            projection: projection_matrix(&config.camera),
        }
    }

    /// Combined transform, applies model first
    pub fn model_view_projection(&self) -> Mat4 {
        self.projection * self.view * self.model
    }

    /// Project a model-space point (w = 1)
    pub fn project(&self, point: Vec3) -> ProjectedPoint {
        let mut w = 1.0;
        let clip = self.model_view_projection().transform_point(point, &mut w);
        let ndc = if w == 0.0 { None } else { Some(clip * (1.0 / w)) };
        ProjectedPoint { clip, w, ndc }
    }

    /// Map an NDC point back to world space through the inverse view-projection
    pub fn unproject(&self, ndc: Vec3) -> Option<Vec3> {
        let inverse = (self.projection * self.view).try_inverse()?;
        let mut w = 1.0;
        let world = inverse.transform_point(ndc, &mut w);
        if w == 0.0 {
            return None;
        }
        Some(world * (1.0 / w))
    }
}

/// Translation and uniform scale from the scene config
pub fn model_matrix(scene: &SceneConfig) -> Mat4 {
    let mut model = Mat4::IDENTITY * scene.scale;
    model.set_position(Vec4::from_vec3(Vec3::from(scene.translation), 1.0));
    model
}

pub fn view_matrix(camera: &CameraConfig) -> Mat4 {
    Mat4::look_at(camera.eye(), camera.target(), camera.up())
}

pub fn projection_matrix(camera: &CameraConfig) -> Mat4 {
    Mat4::perspective(camera.fov, camera.aspect, camera.near, camera.far)
}
