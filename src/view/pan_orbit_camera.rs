use std::f32::consts::{FRAC_PI_2, PI};

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use super::environment::Environment;

// change input mapping for orbit and panning here
const ORBIT_BUTTON: MouseButton = MouseButton::Right;
const PAN_BUTTON: MouseButton = MouseButton::Middle;

// Camera distance from the focus, in scene half-widths.
const INITIAL_DISTANCE: f32 = 4.0;

#[derive(Component)]
pub struct PanOrbitCamera {
    /// The "focus point" to orbit around. It is automatically updated when panning the camera
    pub focus: Vec3,
    pub radius: f32,
    pub upside_down: bool,
}

impl Default for PanOrbitCamera {
    fn default() -> Self {
        PanOrbitCamera {
            focus: Vec3::ZERO,
            radius: 5.0,
            upside_down: false,
        }
    }
}

/// Starting camera direction, as elevation and azimuth in radians measured in
/// the z-up physics frame.
#[derive(Resource, Clone, Copy)]
pub struct InitialView {
    pub elevation: f32,
    pub azimuth: f32,
}

impl InitialView {
    // Azimuth is measured from physics +x, which sits a quarter turn from
    // the world +z axis the turntable yaw starts at.
    pub fn rotation(&self) -> Quat {
        turntable_rotation(self.azimuth + FRAC_PI_2, self.elevation)
    }
}

/// Yaw about the global y axis applied after pitch about the local x axis.
pub fn turntable_rotation(yaw: f32, pitch: f32) -> Quat {
    Quat::from_rotation_y(yaw) * Quat::from_rotation_x(-pitch)
}

// The camera sits `radius` along its own +z, looking back at the focus.
pub fn orbit_translation(focus: Vec3, rotation: Quat, radius: f32) -> Vec3 {
    focus + Mat3::from_quat(rotation).mul_vec3(Vec3::new(0.0, 0.0, radius))
}

pub fn zoomed_radius(radius: f32, scroll: f32) -> f32 {
    // dont allow zoom to reach zero or you get stuck
    f32::max(radius - scroll * radius * 0.01, 0.05)
}

pub fn pan_orbit_camera_update(
    mut ev_motion: EventReader<MouseMotion>,
    mut ev_scroll: EventReader<MouseWheel>,
    input_mouse: Res<ButtonInput<MouseButton>>,
    mut camera_query: Query<(&mut PanOrbitCamera, &mut Transform, &Projection)>,
    window_query: Query<&Window, With<bevy::window::PrimaryWindow>>,
) {
    let mut pan = Vec2::ZERO;
    let mut rotation_move = Vec2::ZERO;

    if input_mouse.pressed(ORBIT_BUTTON) {
        rotation_move = ev_motion.read().map(|ev| ev.delta).sum();
    } else if input_mouse.pressed(PAN_BUTTON) {
        // Pan only if we're not rotating at the moment
        pan = ev_motion.read().map(|ev| ev.delta).sum();
    }
    // consume any remaining events, so they don't pile up if we don't need them
    ev_motion.clear();
    let scroll: f32 = ev_scroll.read().map(|ev| ev.y).sum();
    let orbit_button_changed =
        input_mouse.just_released(ORBIT_BUTTON) || input_mouse.just_pressed(ORBIT_BUTTON);

    let Ok(window) = window_query.get_single() else {
        warn!("No window found");
        return;
    };
    let window = Vec2::new(window.width(), window.height());

    for (mut pan_orbit, mut transform, projection) in camera_query.iter_mut() {
        if orbit_button_changed {
            // if the camera is "upside" down, panning horizontally would be inverted, so invert the input to make it correct
            let up = transform.rotation * Vec3::Y;
            pan_orbit.upside_down = up.y <= 0.0;
        }

        if rotation_move.length_squared() > 0.0 {
            let delta_x = rotation_move.x / window.x * PI * 2.0;
            let delta_x = if pan_orbit.upside_down { -delta_x } else { delta_x };
            let delta_y = rotation_move.y / window.y * PI;
            transform.rotation = Quat::from_rotation_y(-delta_x) * transform.rotation;
            transform.rotation *= Quat::from_rotation_x(-delta_y);
        } else if pan.length_squared() > 0.0 {
            // make panning distance independent of resolution and FOV,
            if let Projection::Perspective(projection) = projection {
                pan *= Vec2::new(projection.fov * projection.aspect_ratio, projection.fov) / window;
            }
            let right = transform.rotation * Vec3::X * -pan.x;
            let up = transform.rotation * Vec3::Y * pan.y;
            // make panning proportional to distance away from focus point
            let radius = pan_orbit.radius;
            pan_orbit.focus += (right + up) * radius;
        } else if scroll.abs() > 0.0 {
            pan_orbit.radius = zoomed_radius(pan_orbit.radius, scroll);
        } else {
            continue;
        }

        debug!("Camera moved, radius {}", pan_orbit.radius);
        transform.translation =
            orbit_translation(pan_orbit.focus, transform.rotation, pan_orbit.radius);
    }
}

pub fn add_camera(mut commands: Commands, env: Res<Environment>, initial_view: Res<InitialView>) {
    let radius = INITIAL_DISTANCE * env.transformed_space_limit();
    let rotation = initial_view.rotation();
    let translation = orbit_translation(Vec3::ZERO, rotation, radius);
    info!("Starting camera position: {:?}", translation);

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(translation).with_rotation(rotation),
        PanOrbitCamera {
            radius,
            ..Default::default()
        },
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 500.0,
    });
}
