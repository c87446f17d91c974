//! Removes empty and superseded translations from the nicobarese dictionary.

mod clean;
mod config;
mod entry;
mod error;
mod report;
mod store;
mod tables;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::{
    clean::{Cleaned, clean},
    config::Settings,
    error::CleanerError,
    report::Summary,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&Settings::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> Result<(), CleanerError> {
    settings.validate().map_err(CleanerError::InvalidSettings)?;

    let entries = store::load(&settings.input_path)?;
    let original = entries.len();
    let Cleaned { kept, removed } = clean(entries, &settings.canonical, &settings.keep_both);
    tracing::debug!(original, kept = kept.len(), removed = removed.len(), "cleaned dictionary");

    println!(
        "{}",
        Summary {
            original,
            removed: &removed,
            kept: kept.len(),
            preview_limit: settings.preview_limit,
        }
    );

    store::save(&settings.output_path, &kept)?;
    println!("{}", report::saved(&settings.output_path, removed.len(), kept.len()));
    Ok(())
}
