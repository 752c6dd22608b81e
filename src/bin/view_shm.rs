use std::{error::Error, path::PathBuf};

use bevy::{prelude::*, time::common_conditions::on_timer, window::WindowResolution};
use clap::Parser;
use shm_kinematics::{
    config::{run::ViewParams, setup::SetupConfig},
    kinematics,
    view::{
        common::close_on_esc,
        environment::{draw_axes, Environment},
        pan_orbit_camera::{add_camera, pan_orbit_camera_update, InitialView},
        scene::{add_scene_objects, draw_guides, update_scene_objects},
        series::{add_series_panels, draw_series},
        *,
    },
};

const TITLE: &str = "Circular Motion, SHM Projections, and Real-Time Force";

#[derive(Debug, clap::Parser)]
#[command(name = "view_shm", about = "Animate circular motion and its SHM projection")]
struct ViewCli {
    #[arg(short = 'w', long = "window-size", default_value = "800.0")]
    pub window_size: f32,

    /// YAML file with the physical parameters; the reference run if omitted.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = ViewCli::parse();

    let setup = SetupConfig::load(args.config.as_deref())?;
    let trajectory = kinematics::sample(&setup.parameters.sample_params)?;
    let view_params = ViewParams::new(args.window_size, &setup.parameters)?;
    let env = Environment::new(setup.parameters.limits());

    let exit = App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: TITLE.to_string(),
                        resolution: WindowResolution::new(
                            view_params.window_size,
                            view_params.window_size,
                        ),
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    ..default()
                }),
        )
        .insert_resource(env)
        .insert_resource(InitialView {
            elevation: view_params.elevation as f32,
            azimuth: view_params.azimuth as f32,
        })
        .insert_resource(TrajectoryRes(trajectory))
        .insert_resource(PlaybackState::default())
        .add_systems(
            Startup,
            (
                add_camera,
                add_scene_objects,
                add_series_panels,
                add_time_label,
            ),
        )
        .add_systems(
            Startup,
            move || info!("Loaded parameters:\n{}", setup.summary()),
        )
        .add_systems(
            Update,
            (
                advance_playback.run_if(on_timer(view_params.frame_interval)),
                update_scene_objects,
                update_time_label,
                draw_axes,
                draw_guides,
                draw_series,
            )
                .chain(),
        )
        .add_systems(Update, (pan_orbit_camera_update, close_on_esc))
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(format!("viewer exited with code {code}").into()),
    }
}
