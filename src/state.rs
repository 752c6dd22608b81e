use nalgebra::{Point3, Vector3};

use crate::config::setup::parameters::simulation::SampleParams;
use crate::kinematics::centripetal_force;

/// One time sample of the particle and its SHM projection.
#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub t: f64,
    // Position on the circle.
    pub x: f64,
    pub y: f64,
    pub z: f64,
    // Projection onto the x-axis.
    pub d: f64,
    pub v: f64,
    pub a: f64,
    // Force on a unit mass.
    #[serde(rename = "F")]
    pub f: f64,
}

impl Frame {
    pub fn position(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }
}

/// The full precomputed sample set for one animation run.
///
/// Built once by [`crate::kinematics::sample`] and only read afterwards.
#[derive(Debug, Clone)]
pub struct Trajectory {
    params: SampleParams,
    frames: Vec<Frame>,
}

impl Trajectory {
    pub(crate) fn new(params: SampleParams, frames: Vec<Frame>) -> Self {
        Trajectory { params, frames }
    }

    pub fn params(&self) -> &SampleParams {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, i: usize) -> Option<&Frame> {
        self.frames.get(i)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn times(&self) -> Vec<f64> {
        self.frames.iter().map(|fr| fr.t).collect()
    }

    /// Frames `0..=i`, the part of each time series drawn at frame `i`.
    pub fn history(&self, i: usize) -> &[Frame] {
        &self.frames[..i.saturating_add(1).min(self.frames.len())]
    }

    pub fn view(&self, i: usize) -> Option<FrameView<'_>> {
        let frame = self.frames.get(i)?;
        Some(FrameView {
            index: i,
            frame,
            history: self.history(i),
            force: centripetal_force(self.params.radius, self.params.omega, frame.t),
        })
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub index: usize,
    pub frame: &'a Frame,
    pub history: &'a [Frame],
    pub force: Vector3<f64>,
}

impl FrameView<'_> {
    pub fn radius_segment(&self) -> (Point3<f64>, Point3<f64>) {
        (Point3::origin(), self.frame.position())
    }

    /// Where the particle lands on the SHM axis.
    pub fn projection_point(&self) -> Point3<f64> {
        Point3::new(self.frame.d, 0.0, 0.0)
    }

    pub fn projection_segment(&self) -> (Point3<f64>, Point3<f64>) {
        (self.frame.position(), self.projection_point())
    }
}
