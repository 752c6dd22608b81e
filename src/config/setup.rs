pub mod parameters;

use std::{fs::File, io::Read, path::Path, path::PathBuf};

use log::info;

use crate::kinematics::ParameterError;

use self::parameters::{Parameters, ParametersYaml};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid parameters: {0}")]
    Parameters(#[from] ParameterError),
}

#[derive(serde::Serialize, serde::Deserialize, Default)]
struct ConfigYaml {
    #[serde(default)]
    parameters: ParametersYaml,
}

#[derive(Debug, Clone, Default)]
pub struct SetupConfig {
    pub parameters: Parameters,
}

impl SetupConfig {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut contents = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut contents))
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        info!("Read config from {}", path.display());
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config_raw: ConfigYaml = serde_yaml::from_str(contents)?;
        let config = SetupConfig {
            parameters: config_raw.parameters.into(),
        };
        config.parameters.sample_params.validate()?;
        Ok(config)
    }

    /// Read `path` if given, else fall back to the reference run.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::parse(path),
            None => {
                info!("No config given, using default parameters");
                Ok(Self::default())
            }
        }
    }

    pub fn summary(&self) -> String {
        let mut out = String::new();
        if let Some(physical_params) = &self.parameters.physical_params {
            out.push_str(&format!(
                "\
Physical parameters:
  Radius: {r} m
  Period: {period} s
  Duration: {t_max} s
  Frame rate: {fps} fps
",
                r = physical_params.radius,
                period = physical_params.period,
                t_max = physical_params.t_max,
                fps = physical_params.fps,
            ));
        }
        let sample_params = &self.parameters.sample_params;
        out.push_str(&format!(
            "\
Sampling:
  Radius: {r} m
  Angular velocity: {omega:.4} rad/s
  Duration: {t_max} s
  Frames: {n}

Computed derived parameters (for info only):
  Period: {period:.3} s
  Frame spacing: {dt:.4} s
  Peak speed: {v:.4} m/s
  Peak acceleration: {a:.4} m/s²",
            r = sample_params.radius,
            omega = sample_params.omega,
            t_max = sample_params.t_max,
            n = sample_params.n_frames,
            period = sample_params.period(),
            dt = sample_params.dt(),
            v = sample_params.peak_speed(),
            a = sample_params.peak_acceleration(),
        ));
        out
    }
}
