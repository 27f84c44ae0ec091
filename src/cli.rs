// Command-line interface definitions and parsing for urlcheck

use clap::Parser;

use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URLs to check
    pub urls: Vec<String>,

    /// Timeout in seconds for each request (default: 5)
    #[arg(short = 't', long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Use specific config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long)]
    pub no_config: bool,
}

/// Convert parsed CLI arguments into the config-merge representation
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        timeout: cli.timeout,
        verbose: cli.verbose,
    }
}
