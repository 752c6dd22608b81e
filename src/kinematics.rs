use log::debug;
use nalgebra::Vector3;

use crate::config::setup::parameters::simulation::SampleParams;
use crate::geometry::linspace;
use crate::state::{Frame, Trajectory};

// Upper bound on one sample set, far beyond any animation's frame count.
pub const MAX_FRAMES: usize = 10_000_000;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("radius must be positive and finite, got {0}")]
    NonPositiveRadius(f64),

    #[error("time span must be positive and finite, got {0} s")]
    NonPositiveDuration(f64),

    #[error("need at least two frames, got {0}")]
    TooFewFrames(usize),

    #[error("too many frames: {0} (expected at most {max})", max = MAX_FRAMES)]
    TooManyFrames(usize),

    #[error("angular velocity must be finite, got {0} rad/s")]
    NonFiniteAngularVelocity(f64),
}

/// Closed-form state of the particle and its x-projection at time `t`.
///
/// The force is the scalar SHM force on a unit mass, so it equals the
/// acceleration.
pub fn frame_at(radius: f64, omega: f64, t: f64) -> Frame {
    let (sin, cos) = (omega * t).sin_cos();
    let x = radius * cos;
    let a = -radius * omega.powi(2) * cos;
    Frame {
        t,
        x,
        y: radius * sin,
        z: 0.0,
        d: x,
        v: -radius * omega * sin,
        a,
        f: a,
    }
}

// Points from the particle towards the centre of the circle.
pub fn centripetal_force(radius: f64, omega: f64, t: f64) -> Vector3<f64> {
    let (sin, cos) = (omega * t).sin_cos();
    -radius * omega.powi(2) * Vector3::new(cos, sin, 0.0)
}

/// Sample the trajectory on a uniform grid over `[0, t_max]`, both ends
/// included.
pub fn sample(params: &SampleParams) -> Result<Trajectory, ParameterError> {
    params.validate()?;

    debug!(
        "Sampling {} frames over {} s (R={}, omega={} rad/s)",
        params.n_frames, params.t_max, params.radius, params.omega
    );
    let frames = linspace(0.0, params.t_max, params.n_frames)
        .into_iter()
        .map(|t| frame_at(params.radius, params.omega, t))
        .collect();

    Ok(Trajectory::new(params.clone(), frames))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::TAU;

    fn params(radius: f64, omega: f64, t_max: f64, n_frames: usize) -> SampleParams {
        SampleParams {
            radius,
            omega,
            t_max,
            n_frames,
        }
    }

    fn reference() -> SampleParams {
        params(1.0, TAU / 5.0, 10.0, 300)
    }

    #[test]
    fn test_length_and_time_grid() {
        for n in [2, 3, 10, 300, 1001] {
            let traj = sample(&params(2.5, 0.7, 4.0, n)).unwrap();
            assert_eq!(traj.len(), n);

            let ts = traj.times();
            assert_eq!(ts[0], 0.0);
            assert_relative_eq!(ts[n - 1], 4.0, epsilon = 1e-12);

            let dt = 4.0 / (n - 1) as f64;
            for w in ts.windows(2) {
                assert!(w[1] > w[0]);
                assert_relative_eq!(w[1] - w[0], dt, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_circle_and_projection_identities() {
        let p = params(3.0, 1.9, 7.0, 257);
        let traj = sample(&p).unwrap();
        for fr in traj.iter() {
            assert_relative_eq!(fr.x.powi(2) + fr.y.powi(2), 9.0, epsilon = 1e-9);
            assert_eq!(fr.z, 0.0);
            assert_eq!(fr.d, fr.x);
            assert_eq!(fr.f, fr.a);
            // Restoring: acceleration opposes displacement.
            assert_relative_eq!(fr.a, -p.omega.powi(2) * fr.d, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_velocity_and_acceleration_are_derivatives() {
        let (r, omega) = (1.5, 2.3);
        let h = 1e-6;
        for t in [0.0, 0.3, 1.1, 2.9, 6.0] {
            let fr = frame_at(r, omega, t);
            let before = frame_at(r, omega, t - h);
            let after = frame_at(r, omega, t + h);
            assert_relative_eq!(fr.v, (after.d - before.d) / (2.0 * h), epsilon = 1e-6);
            assert_relative_eq!(fr.a, (after.v - before.v) / (2.0 * h), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_reference_scenario() {
        let p = reference();
        let omega = p.omega;
        let traj = sample(&p).unwrap();

        let f0 = traj.frame(0).unwrap();
        assert_eq!(f0.t, 0.0);
        assert_eq!(f0.x, 1.0);
        assert_eq!(f0.y, 0.0);
        assert_eq!(f0.d, 1.0);
        assert_eq!(f0.v, 0.0);
        assert_relative_eq!(f0.a, -omega * omega, epsilon = 1e-12);
        assert_relative_eq!(f0.f, -omega * omega, epsilon = 1e-12);

        // A quarter period in.
        let q = frame_at(p.radius, omega, 1.25);
        assert_relative_eq!(q.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(q.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(q.d, 0.0, epsilon = 1e-12);
        assert_relative_eq!(q.v, -omega, epsilon = 1e-12);
        assert_relative_eq!(q.a, 0.0, epsilon = 1e-12);

        // The nearest sampled frame sits within one grid step of it.
        let dt = 10.0 / 299.0;
        let nearest = traj
            .iter()
            .min_by(|a, b| (a.t - 1.25).abs().total_cmp(&(b.t - 1.25).abs()))
            .unwrap();
        assert!((nearest.t - 1.25).abs() <= dt / 2.0);
        assert_relative_eq!(nearest.x, 0.0, epsilon = omega * dt);
        assert_relative_eq!(nearest.y, 1.0, epsilon = omega * dt);
    }

    #[test]
    fn test_resampling_is_consistent() {
        let coarse = sample(&params(1.0, TAU / 5.0, 10.0, 5)).unwrap();
        let fine = sample(&params(1.0, TAU / 5.0, 10.0, 9)).unwrap();
        // Every coarse time point is every second fine time point.
        for (i, fr) in coarse.iter().enumerate() {
            assert_eq!(*fr, *fine.frame(2 * i).unwrap());
        }
    }

    #[test]
    fn test_deterministic() {
        let a = sample(&reference()).unwrap();
        let b = sample(&reference()).unwrap();
        assert_eq!(a.frames(), b.frames());
    }

    #[test]
    fn test_invalid_parameters() {
        assert_eq!(
            sample(&params(0.0, 1.0, 10.0, 300)).unwrap_err(),
            ParameterError::NonPositiveRadius(0.0)
        );
        assert_eq!(
            sample(&params(-1.0, 1.0, 10.0, 300)).unwrap_err(),
            ParameterError::NonPositiveRadius(-1.0)
        );
        assert_eq!(
            sample(&params(1.0, 1.0, 0.0, 300)).unwrap_err(),
            ParameterError::NonPositiveDuration(0.0)
        );
        assert_eq!(
            sample(&params(1.0, 1.0, 10.0, 1)).unwrap_err(),
            ParameterError::TooFewFrames(1)
        );
        assert_eq!(
            sample(&params(1.0, 1.0, 10.0, 0)).unwrap_err(),
            ParameterError::TooFewFrames(0)
        );
        assert_eq!(
            sample(&params(1.0, 1.0, 10.0, MAX_FRAMES + 1)).unwrap_err(),
            ParameterError::TooManyFrames(MAX_FRAMES + 1)
        );
        assert_eq!(
            sample(&params(1.0, 1.0, 10.0, usize::MAX)).unwrap_err(),
            ParameterError::TooManyFrames(usize::MAX)
        );
        assert!(matches!(
            sample(&params(1.0, f64::INFINITY, 10.0, 300)),
            Err(ParameterError::NonFiniteAngularVelocity(_))
        ));
        assert!(matches!(
            sample(&params(1.0, f64::NAN, 10.0, 300)),
            Err(ParameterError::NonFiniteAngularVelocity(_))
        ));
        assert!(matches!(
            sample(&params(f64::NAN, 1.0, 10.0, 300)),
            Err(ParameterError::NonPositiveRadius(_))
        ));
    }

    #[test]
    fn test_centripetal_force_points_inward() {
        let (r, omega) = (2.0, 0.8);
        for t in [0.0, 0.5, 3.0] {
            let fr = frame_at(r, omega, t);
            let force = centripetal_force(r, omega, t);
            assert_relative_eq!(force.norm(), r * omega * omega, epsilon = 1e-12);
            assert_relative_eq!(force.x, fr.f, epsilon = 1e-12);
            assert_relative_eq!(
                force.normalize(),
                -fr.position().coords.normalize(),
                epsilon = 1e-12
            );
        }
    }
}
