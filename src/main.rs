//! `floorplan`: renders the cutaway floor plan (or a TOML layout) to an image.
#![forbid(unsafe_code)]

mod cli;
mod job;
mod turntable;
mod watch;

use std::process::ExitCode;

use clap::Parser;
use log::error;

use cli::Cli;
use job::Job;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every requested image was produced.
fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let job = Job::load(cli)?;
    if let Some(frames) = cli.turntable {
        return turntable::render_all(&job, cli, frames);
    }
    let ok = job.render_and_write(cli)?;
    if cli.watch {
        watch::run(cli, job)?;
    }
    Ok(ok)
}
