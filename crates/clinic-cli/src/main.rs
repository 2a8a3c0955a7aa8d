//! Console front end for the clinic record and reservation system.

mod config;
mod console;
mod gate;
mod render;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clinic_core::Clinic;
use log::info;

use crate::config::Config;
use crate::console::Console;

#[derive(Debug, Parser)]
#[command(author, version, about = "Clinic patient records and appointment slots")]
struct Args {
    /// JSON config file
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Code that unlocks admin mode
    #[arg(long, env = "CLINIC_ADMIN_CODE")]
    admin_code: Option<i32>,

    /// Wrong admin codes allowed before admin mode closes
    #[arg(long, env = "CLINIC_MAX_TRIES")]
    max_tries: Option<u32>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(code) = self.admin_code {
            config.admin_code = code;
        }
        if let Some(tries) = self.max_tries {
            config.max_password_tries = tries;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = args.load_config()?;
    info!("starting console, {} admin attempts allowed", config.max_password_tries);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(Clinic::new(), config, stdin.lock(), stdout.lock());
    console.run().context("console I/O failed")?;
    Ok(())
}
