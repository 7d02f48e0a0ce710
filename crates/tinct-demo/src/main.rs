//! Tinct Demo — headless color editor.
//!
//! Converts one color between RGB, XYZ and HSV from the command line, or runs
//! an interactive session that keeps all three fields and the swatch in sync.

mod cli;
mod config;
mod error;
mod session;
mod view;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tinct_core::parse::{parse_hsv, parse_rgb, parse_xyz};
use tinct_core::{ColorTriad, Representation};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::error::DemoError;
use crate::session::Session;

fn init_tracing(config: &AppConfig) -> Result<(), DemoError> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| DemoError::Logging(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| DemoError::Logging(e.to_string()))
}

fn convert_once(repr: Representation, config: &AppConfig) -> Result<(), DemoError> {
    let session = Session::new(ColorTriad::from_representation(repr));
    let mut out = io::stdout().lock();
    session::write_view(&mut out, &session, config, true)?;
    out.flush()?;
    Ok(())
}

fn run(cli: &Cli, config: &AppConfig) -> Result<(), DemoError> {
    match &cli.command {
        Command::Rgb { triple } => convert_once(Representation::Rgb(parse_rgb(triple)?), config),
        Command::Xyz { triple } => convert_once(Representation::Xyz(parse_xyz(triple)?), config),
        Command::Hsv { triple } => convert_once(Representation::Hsv(parse_hsv(triple)?), config),
        Command::Session => {
            let stdin = io::stdin().lock();
            let mut out = io::stdout().lock();
            session::run(stdin, &mut out, config)?;
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = AppConfig::default().with_cli(&cli);

    if let Err(e) = init_tracing(&config) {
        eprintln!("tinct: {e}");
        return ExitCode::FAILURE;
    }
    tracing::debug!(?config, "starting");

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
