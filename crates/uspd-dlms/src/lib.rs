// src/lib.rs

#![doc = "Converts USPD INI device configurations into DLMS/COSEM gateway XML."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `load_from_path` / `load_from_str`: Reading modules and channels from a USPD INI file."]
#![doc = "- `build`: Projecting the modules onto the gateway's servers and logical devices."]
#![doc = "- `to_xml_string` / `write_xml_file`: Serializing the gateway document."]
#![doc = "- `convert`: Running all three steps for a set of `Settings`."]

// --- Crate Modules ---

mod builder;
mod config;
mod document;
mod error;
mod ini;
mod loader;
mod pipeline;
mod section;
mod types;
mod writer;

// --- Public API Re-exports ---

pub use builder::{BuildOutcome, DEFAULT_BASE_LOGICAL_ADDRESS, MAX_LOGICAL_ADDRESS, build};
pub use config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, Settings};
pub use document::{DataObject, Line, Lines, LogicalDevice, LogicalDevices, Server, Servers};
pub use error::{BuildError, LoadError, WriteError};
pub use loader::{load_from_path, load_from_str};
pub use pipeline::{ConversionReport, convert};
pub use section::{SectionKind, classify};
pub use types::{Channel, LineHeader, Module, UspdConfig};
pub use writer::{to_xml_string, write_xml_file};
