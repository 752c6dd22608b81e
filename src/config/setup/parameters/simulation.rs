use std::f64::consts::TAU;

use crate::kinematics::{ParameterError, MAX_FRAMES};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct SampleParams {
    // Radius of the circle.
    pub radius: f64,
    // Angular velocity, rad/s.
    pub omega: f64,
    // Sampled time span, starting at zero.
    pub t_max: f64,
    pub n_frames: usize,
}

impl SampleParams {
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ParameterError::NonPositiveRadius(self.radius));
        }
        if !(self.t_max.is_finite() && self.t_max > 0.0) {
            return Err(ParameterError::NonPositiveDuration(self.t_max));
        }
        if self.n_frames <= 1 {
            return Err(ParameterError::TooFewFrames(self.n_frames));
        }
        if self.n_frames > MAX_FRAMES {
            return Err(ParameterError::TooManyFrames(self.n_frames));
        }
        if !self.omega.is_finite() {
            return Err(ParameterError::NonFiniteAngularVelocity(self.omega));
        }
        Ok(())
    }

    pub fn period(&self) -> f64 {
        TAU / self.omega.abs()
    }

    // Time between consecutive frames.
    pub fn dt(&self) -> f64 {
        self.t_max / (self.n_frames - 1) as f64
    }

    pub fn sample_rate(&self) -> f64 {
        1.0 / self.dt()
    }

    pub fn peak_speed(&self) -> f64 {
        (self.radius * self.omega).abs()
    }

    pub fn peak_acceleration(&self) -> f64 {
        self.radius * self.omega.powi(2)
    }
}
