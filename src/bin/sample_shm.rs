use std::{error::Error, io, path::PathBuf};

use clap::Parser;
use log::info;
use shm_kinematics::{config::setup::SetupConfig, kinematics};

#[derive(Debug, clap::Parser)]
#[command(
    name = "sample_shm",
    about = "Write the sampled circular-motion trajectory as CSV to stdout"
)]
struct SampleCli {
    /// YAML file with the physical parameters; the reference run if omitted.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = SampleCli::parse();

    let setup = SetupConfig::load(args.config.as_deref())?;
    info!("Loaded parameters:\n{}", setup.summary());

    let trajectory = kinematics::sample(&setup.parameters.sample_params)?;

    let mut wtr = csv::Writer::from_writer(io::stdout().lock());
    for frame in &trajectory {
        wtr.serialize(frame)?;
    }
    wtr.flush()?;

    info!("Wrote {} frames", trajectory.len());
    Ok(())
}
