// crates/uspd-dlms/src/builder.rs

//! Projects a `UspdConfig` onto the gateway document.
//!
//! Each part of the document is built as a value and composed at the end.
//! Building never panics and never loses what was already assembled: when a
//! module cannot be addressed, the remaining modules are dropped and the
//! partial document is returned together with the error.

use crate::document::{DataObject, Line, Lines, LogicalDevice, LogicalDevices, Server, Servers};
use crate::error::BuildError;
use crate::types::{Channel, LineHeader, Module, UspdConfig};
use log::{debug, info};

/// Logical address of the first emitted module unless configured otherwise.
pub const DEFAULT_BASE_LOGICAL_ADDRESS: u16 = 16;

/// Highest DLMS server (logical device) address.
pub const MAX_LOGICAL_ADDRESS: u16 = 0x3FFF;

/// The document produced by `build`, and why it is incomplete if it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    pub document: Servers,
    /// `Some` if assembly stopped early; `document` then holds the partial result.
    pub error: Option<BuildError>,
}

impl BuildOutcome {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Builds the gateway document.
///
/// The first server uses `LineHeader::default_server()`, the second one uses
/// `configured` and carries one logical device per module that owns at
/// least one channel. Logical addresses count up from `base_logical_address`
/// over emitted modules only.
pub fn build(config: &UspdConfig, configured: &LineHeader, base_logical_address: u16) -> BuildOutcome {
    let default_server = Server {
        lines: build_lines(&LineHeader::default_server()),
        logical_devices: None,
    };

    let (devices, error) = build_logical_devices(config.modules(), base_logical_address);

    info!(
        "Built {} logical device(s) with {} object(s)",
        devices.len(),
        devices.iter().map(|d| d.object.len()).sum::<usize>()
    );

    let configured_server = Server {
        lines: build_lines(configured),
        logical_devices: if devices.is_empty() {
            None
        } else {
            Some(LogicalDevices {
                logical_device: devices,
            })
        },
    };

    BuildOutcome {
        document: Servers {
            server: vec![default_server, configured_server],
        },
        error,
    }
}

/// Builds the `<lines>` block; `baudrate` is only set for serial lines.
fn build_lines(header: &LineHeader) -> Lines {
    Lines {
        line: Line {
            line_type: header.line_type.clone(),
            port: header.port.clone(),
            baudrate: header.is_serial().then(|| header.baudrate.clone()),
            address: header.line_address.clone(),
        },
    }
}

/// Builds the logical devices, stopping at the first module without an address.
fn build_logical_devices(modules: &[Module], base: u16) -> (Vec<LogicalDevice>, Option<BuildError>) {
    let mut devices = Vec::new();

    for (idx, module) in modules.iter().enumerate() {
        if module.channels().is_empty() {
            debug!("Module {} has no channels, skipped", idx + 1);
            continue;
        }

        let address = match next_address(base, devices.len()) {
            Some(address) => address,
            None => {
                let error = BuildError::LogicalAddressOutOfRange {
                    module: idx + 1,
                    base,
                    emitted: devices.len(),
                };
                return (devices, Some(error));
            }
        };

        debug!(
            "Module {} ('{}') -> logical device {}",
            idx + 1,
            module.module_type(),
            address
        );
        devices.push(LogicalDevice {
            address,
            object: module.channels().iter().map(build_object).collect(),
        });
    }

    (devices, None)
}

fn next_address(base: u16, emitted: usize) -> Option<u16> {
    u16::try_from(emitted)
        .ok()
        .and_then(|offset| base.checked_add(offset))
        .filter(|address| *address <= MAX_LOGICAL_ADDRESS)
}

fn build_object(channel: &Channel) -> DataObject {
    DataObject {
        class_id: channel.class_id.clone(),
        logical_name: channel.logical_name.clone(),
        data_source: channel.data_source.clone(),
    }
}
