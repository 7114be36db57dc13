//! Subcommand implementations.

pub mod convert;
pub mod version;

use crate::cli::Commands;
use crate::config::AnyppConfig;

/// Dispatch a parsed subcommand.
pub fn run(command: Commands, config: &AnyppConfig) -> anyhow::Result<()> {
    match command {
        Commands::Convert(args) => convert::run(args, config),
        Commands::Version => {
            version::run();
            Ok(())
        }
    }
}
