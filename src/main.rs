use std::io::{self, Write};

use anyhow::{Context, Result};
use log::debug;

use mars_rover::config::{Config, OutputFormat};
use mars_rover::{RoverState, navigate_file};

fn write_positions(out: &mut impl Write, format: OutputFormat, finals: &[RoverState]) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for state in finals {
                writeln!(out, "{}", state)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, finals)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    // Parse configuration from command line and config file
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();
    debug!("Effective configuration: {:?}", config);

    let finals = navigate_file(&config.commands, &config.parse_options)
        .with_context(|| format!("Failed to navigate rovers from {}", config.commands.display()))?;

    let stdout = io::stdout();
    write_positions(&mut stdout.lock(), config.format, &finals)
}
