use crate::core::editor::edit_ad;
use crate::core::factory::{
    destination_for, source_for, DestinationKey, PayloadOverrides, SourceKey,
};
use crate::core::handler::AdHandler;
use crate::core::{Prompter, Result};
use std::io::Write;

/// Resolved options for one run: defaults substituted on invalid menu
/// input, optional CLI key overrides that skip the menus, and configured
/// payload replacements.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub default_source: SourceKey,
    pub default_destination: DestinationKey,
    pub source_override: Option<SourceKey>,
    pub destination_override: Option<DestinationKey>,
    pub skip_edit: bool,
    pub payloads: PayloadOverrides,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            default_source: SourceKey::Text,
            default_destination: DestinationKey::WhatsApp,
            source_override: None,
            destination_override: None,
            skip_edit: false,
            payloads: PayloadOverrides::default(),
        }
    }
}

fn select_source<P: Prompter + ?Sized>(
    prompter: &mut P,
    out: &mut dyn Write,
    opts: &AppOptions,
) -> Result<SourceKey> {
    if let Some(key) = opts.source_override {
        tracing::debug!(source = %key, "Source selected via command line");
        return Ok(key);
    }

    writeln!(out, "Choose the ad source:")?;
    writeln!(out, "1. Database")?;
    writeln!(out, "2. JSON")?;
    writeln!(out, "3. XML")?;
    writeln!(out, "4. Text")?;

    let choice = prompter.read_line("Enter the number for the source (1-4)")?;
    match SourceKey::from_menu_choice(&choice) {
        Some(key) => Ok(key),
        None => {
            tracing::warn!(choice = %choice, "Invalid source choice, using default");
            writeln!(
                out,
                "Invalid option. Using default source ({}).",
                opts.default_source
            )?;
            Ok(opts.default_source)
        }
    }
}

fn select_destination<P: Prompter + ?Sized>(
    prompter: &mut P,
    out: &mut dyn Write,
    opts: &AppOptions,
) -> Result<DestinationKey> {
    if let Some(key) = opts.destination_override {
        tracing::debug!(destination = %key, "Destination selected via command line");
        return Ok(key);
    }

    writeln!(out, "Choose the ad destination:")?;
    writeln!(out, "1. WhatsApp")?;
    writeln!(out, "2. SMS")?;
    writeln!(out, "3. Facebook")?;

    let choice = prompter.read_line("Enter the number for the destination (1-3)")?;
    match DestinationKey::from_menu_choice(&choice) {
        Some(key) => Ok(key),
        None => {
            tracing::warn!(choice = %choice, "Invalid destination choice, using default");
            writeln!(
                out,
                "Invalid option. Using default destination ({}).",
                opts.default_destination
            )?;
            Ok(opts.default_destination)
        }
    }
}

/// One full pass: select source and destination, fetch, edit, deliver.
pub fn run_once<P: Prompter + ?Sized>(
    prompter: &mut P,
    out: &mut dyn Write,
    opts: &AppOptions,
) -> Result<()> {
    let source_key = select_source(prompter, out, opts)?;
    let destination_key = select_destination(prompter, out, opts)?;

    tracing::info!(source = %source_key, destination = %destination_key, "Dispatching advertisement");

    let handler = AdHandler::new(
        source_for(source_key, &opts.payloads),
        destination_for(destination_key),
    );

    let mut ad = handler.fetch()?;

    if !opts.skip_edit {
        writeln!(out)?;
        writeln!(out, "You can edit the ad before sending!")?;
        edit_ad(prompter, &mut ad)?;
    }

    handler.process_ad(&ad, out)
}
