use std::time::{Duration, TryFromFloatSecsError};

use super::setup::parameters::Parameters;

// Initial camera direction, in the z-up frame of the physics.
pub const ELEVATION_DEG: f64 = 20.0;
pub const AZIMUTH_DEG: f64 = 45.0;

pub struct ViewParams {
    pub window_size: f32,
    pub frame_interval: Duration,
    pub elevation: f64,
    pub azimuth: f64,
}

impl ViewParams {
    /// Fails when the playback rate is so low that one frame outlasts the
    /// longest representable `Duration`.
    pub fn new(
        window_size: f32,
        parameters: &Parameters,
    ) -> Result<Self, TryFromFloatSecsError> {
        Ok(ViewParams {
            window_size,
            frame_interval: Duration::try_from_secs_f64(1.0 / parameters.playback_fps())?,
            elevation: ELEVATION_DEG.to_radians(),
            azimuth: AZIMUTH_DEG.to_radians(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::setup::parameters::{simulation::SampleParams, ParametersYaml};

    #[test]
    fn test_default_interval_is_thirty_fps() {
        let view_params = ViewParams::new(800.0, &Parameters::default()).unwrap();
        assert_eq!(view_params.frame_interval.as_micros(), 33_333);
    }

    #[test]
    fn test_vanishing_playback_rate_is_an_error() {
        let parameters: Parameters = ParametersYaml::Sampling(SampleParams {
            radius: 1.0,
            omega: 1.0,
            t_max: 1e300,
            n_frames: 2,
        })
        .into();
        assert!(parameters.sample_params.validate().is_ok());
        assert!(ViewParams::new(800.0, &parameters).is_err());
    }
}
