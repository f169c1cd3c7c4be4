//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "nearby.count")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    if args.path {
        let path = Config::config_path()?;
        println!("{}", path.display());
        return Ok(());
    }

    if args.reset {
        Config::default().save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (&args.key, &args.value) {
        (None, None) => {
            show_all_config(&config);
        }

        (Some(key), None) => match config.get(key) {
            Some(value) => println!("{}", value),
            None => {
                eprintln!("Available keys:");
                for k in Config::available_keys() {
                    eprintln!("  {}", k);
                }
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        },

        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            println!("{} = {}", key, value);
        }

        (None, Some(_)) => {
            return Err(Error::Config("Must specify a key to set a value".to_string()));
        }
    }

    Ok(())
}

/// Display all configuration values
fn show_all_config(config: &Config) {
    println!("[nearby]");
    println!("count = {}", config.nearby.count);
    println!();

    println!("[geocoder]");
    println!("backend = \"{}\"", config.geocoder.backend);
    println!("concurrency = {}", config.geocoder.concurrency);
    println!("timeout_secs = {}", config.geocoder.timeout_secs);
    println!();

    println!("[paths]");
    println!("data_dir = \"{}\"", config.paths.data_dir.display());
    println!("names_file = \"{}\"", config.paths.names_file);
    println!("places_file = \"{}\"", config.paths.places_file);
    println!("cache_file = \"{}\"", config.paths.cache_file);
    println!();

    println!("[api_keys]");
    if config.api_keys.google.is_empty() {
        println!("google = \"\" # not configured");
    } else {
        println!("google = \"***\" # configured");
    }
}
