use std::f64::consts::TAU;

use super::simulation::SampleParams;

/// The run as it is naturally described: a period and a frame rate rather
/// than an angular velocity and a frame count.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct PhysicalParams {
    pub radius: f64,
    // Time for one revolution, s.
    pub period: f64,
    pub t_max: f64,
    // Frames per second.
    pub fps: f64,
}

impl Default for PhysicalParams {
    fn default() -> Self {
        PhysicalParams {
            radius: 1.0,
            period: 5.0,
            t_max: 10.0,
            fps: 30.0,
        }
    }
}

impl PhysicalParams {
    pub fn omega(&self) -> f64 {
        TAU / self.period
    }

    // Truncates, so a fractional last frame is dropped.
    pub fn n_frames(&self) -> usize {
        let n = self.t_max * self.fps;
        if n.is_finite() && n > 0.0 {
            n as usize
        } else {
            0
        }
    }

    pub fn as_params(&self) -> SampleParams {
        SampleParams {
            radius: self.radius,
            omega: self.omega(),
            t_max: self.t_max,
            n_frames: self.n_frames(),
        }
    }
}
