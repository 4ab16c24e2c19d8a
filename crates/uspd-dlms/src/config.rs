// crates/uspd-dlms/src/config.rs

//! Inputs of a conversion run.

use crate::builder::DEFAULT_BASE_LOGICAL_ADDRESS;
use crate::types::LineHeader;
use std::path::PathBuf;

/// Default location of the USPD configuration.
pub const DEFAULT_INPUT_PATH: &str = "uspd.ini";
/// Default location of the generated gateway document.
pub const DEFAULT_OUTPUT_PATH: &str = "dlms_cosem.xml";

/// Where to read from, where to write to and how to describe the configured server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Address of the first emitted logical device.
    pub base_logical_address: u16,
    /// Line of the second (configured) server.
    pub line: LineHeader,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            base_logical_address: DEFAULT_BASE_LOGICAL_ADDRESS,
            line: LineHeader::default_server(),
        }
    }
}
