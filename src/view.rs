pub mod common;
pub mod environment;
pub mod pan_orbit_camera;
pub mod scene;
pub mod series;

use bevy::prelude::*;

use crate::state::{FrameView, Trajectory};

// Resources.

#[derive(Resource)]
pub struct TrajectoryRes(pub Trajectory);

#[derive(Resource, Default)]
pub struct PlaybackState {
    pub i: usize,
}

impl PlaybackState {
    pub fn current<'a>(&self, trajectory: &'a TrajectoryRes) -> Option<FrameView<'a>> {
        trajectory.0.view(self.i)
    }
}

pub fn advance_playback(trajectory: Res<TrajectoryRes>, mut playback: ResMut<PlaybackState>) {
    playback.i = common::advance_frame(playback.i, trajectory.0.len());
    if playback.i == 0 {
        debug!("Animation looped back to the first frame");
    }
}

// Components.

#[derive(Component)]
pub struct TimeLabel;

pub fn add_time_label(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        TimeLabel,
    ));
}

pub fn update_time_label(
    trajectory: Res<TrajectoryRes>,
    playback: Res<PlaybackState>,
    mut q_text: Query<&mut Text, With<TimeLabel>>,
) {
    let Some(view) = playback.current(&trajectory) else {
        return;
    };
    for mut text in &mut q_text {
        text.0 = format!(
            "t = {:5.2} s   d = {:+.3} m   v = {:+.3} m/s   a = {:+.3} m/s²\n{}",
            view.frame.t,
            view.frame.d,
            view.frame.v,
            view.frame.a,
            series::legend(),
        );
    }
}
