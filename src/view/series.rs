use bevy::{color::palettes::css, prelude::*};

use crate::{config::setup::parameters::limits::PlotLimits, state::Frame};

use super::{
    environment::{Environment, SCENE_HALF_WIDTH},
    pan_orbit_camera::InitialView,
    PlaybackState, TrajectoryRes,
};

// Panel column geometry, in scene half-widths.
const COLUMN_OFFSET: f32 = 1.4;
const PANEL_WIDTH: f32 = 2.4;
const PANEL_GAP: f32 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Force,
    Displacement,
    Velocity,
    Acceleration,
}

impl Series {
    /// Top to bottom.
    pub const ALL: [Series; 4] = [
        Series::Force,
        Series::Displacement,
        Series::Velocity,
        Series::Acceleration,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Series::Force => "Force vs Time",
            Series::Displacement => "Displacement vs Time",
            Series::Velocity => "Velocity vs Time",
            Series::Acceleration => "Acceleration vs Time",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            Series::Force => "F (N)",
            Series::Displacement => "d (m)",
            Series::Velocity => "v (m/s)",
            Series::Acceleration => "a (m/s²)",
        }
    }

    pub fn color(&self) -> Srgba {
        match self {
            Series::Force => css::ORANGE,
            Series::Displacement => css::RED,
            Series::Velocity => css::FUCHSIA,
            Series::Acceleration => css::AQUA,
        }
    }

    pub fn color_name(&self) -> &'static str {
        match self {
            Series::Force => "orange",
            Series::Displacement => "red",
            Series::Velocity => "magenta",
            Series::Acceleration => "cyan",
        }
    }

    pub fn value(&self, frame: &Frame) -> f64 {
        match self {
            Series::Force => frame.f,
            Series::Displacement => frame.d,
            Series::Velocity => frame.v,
            Series::Acceleration => frame.a,
        }
    }

    pub fn limit(&self, limits: &PlotLimits) -> f64 {
        match self {
            Series::Displacement => limits.space,
            Series::Velocity => limits.velocity,
            Series::Force | Series::Acceleration => limits.acceleration,
        }
    }
}

pub fn legend() -> String {
    Series::ALL
        .iter()
        .map(|s| format!("{} [{}]: {}", s.title(), s.axis_label(), s.color_name()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A rectangle in the world onto which one time series is plotted, with
/// `[0, t_max]` across and `[-limit, limit]` up.
#[derive(Debug, Clone)]
pub struct Panel {
    pub series: Series,
    pub origin: Vec3,
    pub across: Vec3,
    pub up: Vec3,
    pub t_max: f64,
    pub limit: f64,
}

impl Panel {
    pub fn to_world(&self, t: f64, value: f64) -> Vec3 {
        let u = (t / self.t_max) as f32;
        let scaled = if self.limit > 0.0 {
            value / self.limit
        } else {
            0.0
        };
        let w = (0.5 + 0.5 * scaled) as f32;
        self.origin + u * self.across + w * self.up
    }

    pub fn outline(&self) -> [Vec3; 5] {
        let o = self.origin;
        [
            o,
            o + self.across,
            o + self.across + self.up,
            o + self.up,
            o,
        ]
    }
}

#[derive(Resource)]
pub struct SeriesPanels(pub Vec<Panel>);

impl SeriesPanels {
    /// Stack one panel per series in a column to the right of the scene, in
    /// the vertical plane facing the initial camera.
    pub fn new(limits: &PlotLimits, initial_view: &InitialView) -> Self {
        let right = (initial_view.rotation() * Vec3::X).normalize();
        let n = Series::ALL.len() as f32;
        let height = (2.0 - PANEL_GAP * (n - 1.0)) / n * SCENE_HALF_WIDTH;
        let across = right * PANEL_WIDTH * SCENE_HALF_WIDTH;
        let up = Vec3::Y * height;
        let left = right * COLUMN_OFFSET * SCENE_HALF_WIDTH;

        let panels = Series::ALL
            .iter()
            .enumerate()
            .map(|(i, series)| {
                let top = SCENE_HALF_WIDTH * (1.0 - i as f32 * PANEL_GAP) - i as f32 * height;
                Panel {
                    series: *series,
                    origin: left + Vec3::Y * (top - height),
                    across,
                    up,
                    t_max: limits.t_max,
                    limit: series.limit(limits),
                }
            })
            .collect();
        SeriesPanels(panels)
    }
}

pub fn add_series_panels(
    mut commands: Commands,
    env: Res<Environment>,
    initial_view: Res<InitialView>,
) {
    let panels = SeriesPanels::new(&env.limits, &initial_view);
    for panel in &panels.0 {
        debug!(
            "{} panel, limit ±{:.3} {}",
            panel.series.title(),
            panel.limit,
            panel.series.axis_label()
        );
    }
    commands.insert_resource(panels);
}

pub fn draw_series(
    panels: Res<SeriesPanels>,
    trajectory: Res<TrajectoryRes>,
    playback: Res<PlaybackState>,
    mut gizmos: Gizmos,
) {
    let history = trajectory.0.history(playback.i);
    for panel in &panels.0 {
        gizmos.linestrip(panel.outline(), css::GRAY);
        gizmos.line(
            panel.to_world(0.0, 0.0),
            panel.to_world(panel.t_max, 0.0),
            css::GRAY.with_alpha(0.4),
        );
        gizmos.linestrip(
            history
                .iter()
                .map(|fr| panel.to_world(fr.t, panel.series.value(fr))),
            panel.series.color(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::setup::parameters::Parameters;

    fn panels() -> SeriesPanels {
        let view = InitialView {
            elevation: 20f32.to_radians(),
            azimuth: 45f32.to_radians(),
        };
        SeriesPanels::new(&Parameters::default().limits(), &view)
    }

    #[test]
    fn test_panels_stack_top_to_bottom_without_overlap() {
        let panels = panels();
        assert_eq!(panels.0.len(), 4);
        assert_eq!(panels.0[0].series, Series::Force);
        assert_eq!(panels.0[3].series, Series::Acceleration);

        let top = panels.0[0].origin.y + panels.0[0].up.y;
        assert!((top - SCENE_HALF_WIDTH).abs() < 1e-4);
        let bottom = panels.0[3].origin.y;
        assert!((bottom + SCENE_HALF_WIDTH).abs() < 1e-4);
        for pair in panels.0.windows(2) {
            assert!(pair[1].origin.y + pair[1].up.y < pair[0].origin.y);
        }
    }

    #[test]
    fn test_to_world_maps_axis_corners() {
        let panels = panels();
        let panel = &panels.0[1];
        assert_eq!(panel.series, Series::Displacement);
        let limit = panel.limit;
        assert!((panel.to_world(0.0, -limit) - panel.origin).length() < 1e-4);
        let top_right = panel.origin + panel.across + panel.up;
        assert!((panel.to_world(panel.t_max, limit) - top_right).length() < 1e-4);
        let mid = panel.origin + 0.5 * panel.up;
        assert!((panel.to_world(0.0, 0.0) - mid).length() < 1e-4);
    }

    #[test]
    fn test_series_values_and_limits() {
        let frame = crate::kinematics::frame_at(1.0, 2.0, 0.4);
        assert_eq!(Series::Force.value(&frame), frame.f);
        assert_eq!(Series::Displacement.value(&frame), frame.d);
        assert_eq!(Series::Velocity.value(&frame), frame.v);
        assert_eq!(Series::Acceleration.value(&frame), frame.a);

        let limits = Parameters::default().limits();
        assert_eq!(Series::Force.limit(&limits), limits.acceleration);
        assert_eq!(Series::Displacement.limit(&limits), limits.space);
        assert!(legend().starts_with("Force vs Time [F (N)]: orange"));
    }

    #[test]
    fn test_stationary_particle_plots_finite_points() {
        let params = crate::config::setup::parameters::simulation::SampleParams {
            radius: 1.0,
            omega: 0.0,
            t_max: 2.0,
            n_frames: 10,
        };
        let traj = crate::kinematics::sample(&params).unwrap();
        let view = InitialView {
            elevation: 20f32.to_radians(),
            azimuth: 45f32.to_radians(),
        };
        let panels = SeriesPanels::new(&PlotLimits::new(&params), &view);
        for panel in &panels.0 {
            assert!(panel.to_world(0.0, 0.0).is_finite());
            assert!(panel.to_world(panel.t_max, 0.0).is_finite());
            for fr in traj.iter() {
                let p = panel.to_world(fr.t, panel.series.value(fr));
                assert!(p.is_finite(), "{:?} at t={} gave {p}", panel.series, fr.t);
            }
        }
    }

    #[test]
    fn test_zero_limit_maps_to_centre_line() {
        let mut panel = panels().0[2].clone();
        panel.limit = 0.0;
        let mid = panel.origin + 0.5 * panel.up;
        assert!((panel.to_world(0.0, -0.0) - mid).length() < 1e-4);
    }
}
