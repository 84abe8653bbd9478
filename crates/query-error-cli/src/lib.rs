//! qerr command-line interface.
//!
pub mod options;
pub mod output;

use query_error::registry;
use query_error::{Error, ErrorDescriptor, Result};
use tracing::{debug, info};

pub use options::{Command, ListOptions};

/// Options for running qerr.
pub struct QerrOptions {
    pub command: Command,
    pub output: Option<String>,
}

/// Main entry point. Returns the text to print, if any.
pub fn run_main(opts: &QerrOptions) -> Result<Option<String>> {
    let text = match &opts.command {
        Command::List(list) => {
            let text = match list.band {
                Some(band) => output::render_list(registry::in_band(band)),
                None => output::render_list(registry::descriptors()),
            };
            debug!(band = ?list.band, lines = text.lines().count(), "listed error kinds");
            text
        }
        Command::Show { query } => output::render_descriptor(find(query)?),
        Command::Bands => output::render_bands(),
    };

    if text.is_empty() {
        return Ok(None);
    }
    Ok(Some(text))
}

/// Write `text` to the configured output file, or stdout when none is set.
pub fn emit(opts: &QerrOptions, text: &str) -> Result<()> {
    match &opts.output {
        Some(path) => {
            std::fs::write(path, text).map_err(|err| Error::service_bad_value(err, path))?;
            info!(path, "output written");
        }
        None => print!("{text}"),
    }
    Ok(())
}

/// Look a descriptor up by numeric code, falling back to dotted key.
pub fn find(query: &str) -> Result<&'static ErrorDescriptor> {
    let query = query.trim();
    match query.parse::<u32>() {
        Ok(code) => registry::lookup_code(code)
            .ok_or_else(|| Error::service_unrecognized_value("error code", query)),
        Err(_) => registry::lookup_key(query)
            .ok_or_else(|| Error::service_unrecognized_value("error key", query)),
    }
}
