use super::simulation::SampleParams;

// Headroom above each quantity's peak.
const MARGIN: f64 = 1.2;

/// Fixed symmetric axis limits for the scene and the time-series panels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLimits {
    pub t_max: f64,
    // Applies to the 3D scene and to displacement.
    pub space: f64,
    pub velocity: f64,
    // Applies to both force and acceleration.
    pub acceleration: f64,
}

// A stationary particle has zero peak speed and acceleration; those panels
// then fall back to the radius so their axes keep a nonzero span.
fn headroom(peak: f64, fallback: f64) -> f64 {
    if peak > 0.0 {
        MARGIN * peak
    } else {
        MARGIN * fallback
    }
}

impl PlotLimits {
    pub fn new(params: &SampleParams) -> Self {
        PlotLimits {
            t_max: params.t_max,
            space: MARGIN * params.radius,
            velocity: headroom(params.peak_speed(), params.radius),
            acceleration: headroom(params.peak_acceleration(), params.radius),
        }
    }
}
