use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "soilsim",
    version,
    about = "Generate a year of seasonal soil-moisture demo data"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the output JSON path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed the jitter source for a reproducible run
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Disable random jitter entirely
    #[arg(long)]
    pub no_jitter: bool,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the effective configuration as YAML
    ShowConfig,
}

impl Cli {
    pub fn default_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_generate() {
        let cli = Cli::parse_from(["soilsim"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert!(cli.output.is_none());
        assert!(cli.seed.is_none());
        assert!(!cli.no_jitter);
        assert_eq!(cli.default_log_level(), "warn");
    }

    #[test]
    fn verbosity_and_overrides() {
        let cli = Cli::parse_from(["soilsim", "-vv", "--seed", "42", "-o", "out.json"]);
        assert_eq!(cli.default_log_level(), "debug");
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn no_jitter_flag() {
        let cli = Cli::parse_from(["soilsim", "--no-jitter"]);
        assert!(cli.no_jitter);
    }

    #[test]
    fn show_config_subcommand() {
        let cli = Cli::parse_from(["soilsim", "show-config"]);
        assert!(matches!(cli.command, Some(Commands::ShowConfig)));
    }
}
