use self::{limits::PlotLimits, physical::PhysicalParams, simulation::SampleParams};

pub mod limits;
pub mod physical;
pub mod simulation;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum ParametersYaml {
    Physical(PhysicalParams),
    Sampling(SampleParams),
}

impl Default for ParametersYaml {
    fn default() -> Self {
        ParametersYaml::Physical(PhysicalParams::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub sample_params: SampleParams,
    // Only present when the run was described physically.
    pub physical_params: Option<PhysicalParams>,
}

impl From<ParametersYaml> for Parameters {
    fn from(raw: ParametersYaml) -> Self {
        match raw {
            ParametersYaml::Physical(physical_params) => Parameters {
                sample_params: physical_params.as_params(),
                physical_params: Some(physical_params),
            },
            ParametersYaml::Sampling(sample_params) => Parameters {
                sample_params,
                physical_params: None,
            },
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        ParametersYaml::default().into()
    }
}

impl Parameters {
    /// Frames shown per second of wall-clock time.
    pub fn playback_fps(&self) -> f64 {
        match &self.physical_params {
            Some(physical_params) => physical_params.fps,
            None => self.sample_params.sample_rate(),
        }
    }

    pub fn limits(&self) -> PlotLimits {
        PlotLimits::new(&self.sample_params)
    }
}
