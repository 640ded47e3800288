use ad_dispatch::core::app::{run_once, AppOptions};
use ad_dispatch::utils::logger;
use ad_dispatch::{CliConfig, ConsolePrompter, TomlConfig};
use anyhow::Context;
use clap::Parser;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ad-dispatch CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let opts = match build_options(&config) {
        Ok(opts) => opts,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    };

    let mut prompter = ConsolePrompter::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run_once(&mut prompter, &mut out, &opts) {
        Ok(()) => {
            out.flush()?;
            tracing::info!("✅ Advertisement dispatched successfully");
        }
        Err(e) => {
            tracing::error!("❌ Ad dispatch failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn build_options(config: &CliConfig) -> anyhow::Result<AppOptions> {
    let mut opts = AppOptions::default();

    if let Some(path) = &config.config {
        let file = TomlConfig::from_file(path)
            .with_context(|| format!("Failed to load config file {path}"))?;
        if let Some(source) = file.default_source()? {
            opts.default_source = source;
        }
        if let Some(destination) = file.default_destination()? {
            opts.default_destination = destination;
        }
        opts.payloads = file.payload_overrides();
    }

    if let Some(source) = &config.source {
        opts.source_override = Some(source.parse()?);
    }
    if let Some(destination) = &config.destination {
        opts.destination_override = Some(destination.parse()?);
    }
    opts.skip_edit = config.no_edit;

    Ok(opts)
}
