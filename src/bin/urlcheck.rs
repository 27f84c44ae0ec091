use clap::Parser;
use log::{debug, info, warn};

use urlcheck::checker::{CheckUrls, Checker};
use urlcheck::cli::{Cli, cli_to_config};
use urlcheck::config::Config;
use urlcheck::{logging, output};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_and_merge_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logger(config.verbose.unwrap_or(false));
    debug!("Received urls: {:?}", cli.urls);
    debug!("Received timeout: {:?}", config.timeout);

    if cli.urls.is_empty() {
        warn!("No URLs provided to check");
        println!("Usage: urlcheck <URL1> <URL2> ...");
        std::process::exit(0);
    }

    info!("Starting check for {} URLs", cli.urls.len());

    let checker = Checker::default();
    let results = checker.check_urls_with_config(&cli.urls, &config).await;

    output::display_results(&cli.urls, &results);

    // Failures are reported through the output, never the exit status
    std::process::exit(0);
}

/// Load configuration from file or standard locations and merge with CLI
/// arguments (CLI takes precedence)
fn load_and_merge_config(cli: &Cli) -> urlcheck::error::Result<Config> {
    let mut config = if cli.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli.config {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()
    };

    config.merge_with_cli(&cli_to_config(cli));
    Ok(config)
}
