mod locations;
mod pick;
mod shops;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::locations::LocationsCommands;
use crate::shops::ShopsCommands;

#[derive(Debug, Parser)]
#[command(name = "boipara")]
#[command(about = "Boipara marketplace admin command line interface")]
struct Cli {
    /// Read locations from a local JSON or YAML snapshot instead of the backend
    #[arg(long, global = true)]
    locations_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse, filter and resolve administrative locations
    Locations {
        #[command(subcommand)]
        command: LocationsCommands,
    },
    /// List and create seller shops
    Shops {
        #[command(subcommand)]
        command: ShopsCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = boipara_core::load_app_config();

    let log_level = config.as_ref().map_or("info", |c| c.log_level.as_str());
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source = locations::LocationSource::new(cli.locations_file, config);

    match cli.command {
        Some(Commands::Locations { command }) => locations::run(command, &source).await?,
        Some(Commands::Shops { command }) => shops::run(command, &source).await?,
        None => println!("boipara: try `boipara --help`"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
