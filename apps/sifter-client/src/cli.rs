//! Command-line arguments

use clap::Parser;
use sifter_grpc::{GrpcSifterConfig, DEFAULT_TARGET};

/// Demonstration client for the CHORD FRB sifter
#[derive(Debug, Parser)]
#[command(name = "sifter-client", version, about)]
pub struct Cli {
    /// Sifter address, `host:port` [default: SIFTER_TARGET or localhost:50051]
    #[arg(long, value_name = "ADDR")]
    pub target: Option<String>,
}

impl Cli {
    /// Apply the flag over settings loaded from the environment
    pub fn apply(&self, config: GrpcSifterConfig) -> GrpcSifterConfig {
        match &self.target {
            Some(target) => config.with_target(target.clone()),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_target_flag_overrides_environment() {
        let cli = Cli::parse_from(["sifter-client", "--target", "sifter-0:6000"]);
        let config = cli.apply(GrpcSifterConfig::new("from-env:1234"));

        assert_eq!(config.target, "sifter-0:6000");
    }

    #[test]
    fn test_default_target_when_flag_absent() {
        let cli = Cli::parse_from(["sifter-client"]);
        let config = cli.apply(GrpcSifterConfig::default());

        assert_eq!(config.target, DEFAULT_TARGET);
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        assert!(Cli::try_parse_from(["sifter-client", "--beams", "4"]).is_err());
    }
}
