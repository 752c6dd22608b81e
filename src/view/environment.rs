use bevy::{color::palettes::css, prelude::*};
use nalgebra::{Point3, Vector3};

use crate::config::setup::parameters::limits::PlotLimits;

// Half-width of the 3D scene box, in world units.
pub const SCENE_HALF_WIDTH: f32 = 5.0;

/// Maps physics coordinates (z up, metres) onto the bevy world (y up).
#[derive(Resource)]
pub struct Environment {
    pub limits: PlotLimits,
    pub length_factor: f64,
}

impl Environment {
    pub fn new(limits: PlotLimits) -> Self {
        Environment {
            limits,
            length_factor: SCENE_HALF_WIDTH as f64 / limits.space,
        }
    }

    pub fn transform_coord(&self, sd: f64) -> f32 {
        (sd * self.length_factor) as f32
    }

    pub fn transformed_vec3(&self, sd: &Vector3<f64>) -> Vec3 {
        Vec3::new(
            self.transform_coord(sd.x),
            self.transform_coord(sd.z),
            -self.transform_coord(sd.y),
        )
    }

    pub fn transformed_point3(&self, sd: &Point3<f64>) -> Vec3 {
        self.transformed_vec3(&sd.coords)
    }

    pub fn transformed_space_limit(&self) -> f32 {
        self.transform_coord(self.limits.space)
    }
}

pub fn draw_axes(env: Res<Environment>, mut gizmos: Gizmos) {
    let lim = env.limits.space;
    for (axis, color) in [
        (Vector3::x(), css::RED),
        (Vector3::y(), css::GREEN),
        (Vector3::z(), css::BLUE),
    ] {
        gizmos.line(
            env.transformed_vec3(&(-lim * axis)),
            env.transformed_vec3(&(lim * axis)),
            color.with_alpha(0.4),
        );
    }
    gizmos.cuboid(
        Transform::from_scale(Vec3::splat(2.0 * env.transformed_space_limit())),
        css::GRAY.with_alpha(0.3),
    );
}
