use nalgebra::Point3;

// Each point is computed from its index rather than by accumulating a step,
// so the end point is exactly `stop` and grids that share a point agree on it.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let span = stop - start;
            let last = (n - 1) as f64;
            (0..n).map(|i| start + span * (i as f64) / last).collect()
        }
    }
}

/// Closed polyline around a circle of `radius` in the z=0 plane.
pub fn circle_path(radius: f64, segments: usize) -> Vec<Point3<f64>> {
    linspace(0.0, std::f64::consts::TAU, segments + 1)
        .into_iter()
        .map(|theta| Point3::new(radius * theta.cos(), radius * theta.sin(), 0.0))
        .collect()
}
