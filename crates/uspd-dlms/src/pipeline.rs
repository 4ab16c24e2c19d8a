// crates/uspd-dlms/src/pipeline.rs

//! Runs a complete conversion: load, build, write.

use crate::builder;
use crate::config::Settings;
use crate::error::{BuildError, LoadError, WriteError};
use crate::loader;
use crate::types::UspdConfig;
use crate::writer;
use log::error;

/// What happened during a conversion that reached the output file.
#[derive(Debug)]
pub struct ConversionReport {
    /// Set if the input was malformed; the output then has no logical devices.
    pub load_error: Option<LoadError>,
    /// Set if the document is partial.
    pub build_error: Option<BuildError>,
    pub modules: usize,
    pub channels: usize,
    pub logical_devices: usize,
    pub objects: usize,
}

impl ConversionReport {
    pub fn is_clean(&self) -> bool {
        self.load_error.is_none() && self.build_error.is_none()
    }
}

/// Converts `settings.input_path` into `settings.output_path`.
///
/// Load and build errors are logged and recorded in the report; the output
/// file is written regardless. A malformed input produces a document without
/// logical devices.
///
/// # Errors
/// Returns a `WriteError` only if the output cannot be serialized or written.
pub fn convert(settings: &Settings) -> Result<ConversionReport, WriteError> {
    let (config, load_error) = match loader::load_from_path(&settings.input_path) {
        Ok(config) => (config, None),
        Err(e) => {
            error!(
                "Failed to parse {}: {}",
                settings.input_path.display(),
                e
            );
            (UspdConfig::default(), Some(e))
        }
    };

    let outcome = builder::build(&config, &settings.line, settings.base_logical_address);
    if let Some(e) = &outcome.error {
        error!("Gateway document is incomplete: {}", e);
    }

    writer::write_xml_file(&outcome.document, &settings.output_path)?;

    Ok(ConversionReport {
        load_error,
        build_error: outcome.error,
        modules: config.modules().len(),
        channels: config.channel_count(),
        logical_devices: outcome.document.logical_devices().count(),
        objects: outcome
            .document
            .logical_devices()
            .map(|d| d.object.len())
            .sum(),
    })
}
