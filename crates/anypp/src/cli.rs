//! Command-line arguments.

use crate::commands::convert::ConvertArgs;
use clap::{ArgAction, Parser, Subcommand};

/// Convert MeshLab pick-points files to and from AnyScript.
#[derive(Parser)]
#[command(name = "anypp", version)]
pub struct Cli {
    /// Enable verbose output (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a file between MeshLab pick-points and AnyScript
    Convert(ConvertArgs),

    /// Print the version
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::convert::{SourceFormat, TargetFormat};

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::parse_from([
            "anypp",
            "-vv",
            "convert",
            "points.txt",
            "--from",
            "anyscript",
            "--to",
            "anyscript-pointcloud",
            "--to",
            "pickpoints",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.input.as_deref(), Some(std::path::Path::new("points.txt")));
        assert!(matches!(args.from, Some(SourceFormat::Anyscript)));
        assert!(matches!(
            args.to.as_slice(),
            [TargetFormat::AnyscriptPointcloud, TargetFormat::Pickpoints]
        ));
    }

    #[test]
    fn test_verbose_after_subcommand() {
        let cli = Cli::parse_from(["anypp", "version", "-v"]);
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Commands::Version));
    }
}
