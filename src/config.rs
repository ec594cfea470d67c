//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown-tui")]
#[command(about = "Pick hours and minutes, then watch them count down")]
#[command(version)]
pub struct Config {
    /// Write logs to this file (logging is disabled otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["countdown-tui"]).unwrap();
        assert_eq!(config.log_file, None);
        assert!(!config.verbose);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_log_file_and_verbose() {
        let config =
            Config::try_parse_from(["countdown-tui", "--log-file", "timer.log", "-v"]).unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("timer.log")));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert!(Config::try_parse_from(["countdown-tui", "--hours", "3"]).is_err());
    }
}
