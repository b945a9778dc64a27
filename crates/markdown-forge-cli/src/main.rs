use anyhow::{Context, Result};
use markdown_forge_config::Config;
use std::{env, process};

mod site;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config_path = Config::config_path();
    let mut config = match Config::load().context("Failed to load config file")? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        None => {
            log::info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Config::default()
        }
    };

    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => {}
        2 => {
            config.base_path = args[1].clone();
            log::info!("Using base path from CLI argument: {}", config.base_path);
        }
        _ => {
            let program_name = args.first().map_or("markdown-forge", String::as_str);
            eprintln!("Usage: {program_name} [base-path]");
            process::exit(1);
        }
    }

    let summary = site::build(&config)?;
    log::info!(
        "Built site in {}: {} pages, {} static files",
        config.output_path.display(),
        summary.pages,
        summary.static_files
    );
    Ok(())
}
