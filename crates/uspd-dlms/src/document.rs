// crates/uspd-dlms/src/document.rs

//! `serde` data structures that map directly to the gateway XML document.
//!
//! ```xml
//! <servers>
//!   <server>
//!     <lines>
//!       <line type="TCP/IP" port="48999" address="20"/>
//!     </lines>
//!     <logical_devices>
//!       <logical_device address="16">
//!         <object class_id="3" logical_name="1.0.1.8.0.255" data_source="ChannelA"/>
//!       </logical_device>
//!     </logical_devices>
//!   </server>
//! </servers>
//! ```

use serde::{Deserialize, Serialize};

/// The root `<servers>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "servers")]
pub struct Servers {
    #[serde(rename = "server", default)]
    pub server: Vec<Server>,
}

/// One communication server of the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    #[serde(rename = "lines")]
    pub lines: Lines,

    /// Absent when no logical device was emitted.
    #[serde(
        rename = "logical_devices",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub logical_devices: Option<LogicalDevices>,
}

/// Wrapper for the `<line>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lines {
    #[serde(rename = "line")]
    pub line: Line,
}

/// Physical line the server listens on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    #[serde(rename = "@type")]
    pub line_type: String,

    #[serde(rename = "@port")]
    pub port: String,

    /// Only present for serial lines.
    #[serde(rename = "@baudrate", default, skip_serializing_if = "Option::is_none")]
    pub baudrate: Option<String>,

    #[serde(rename = "@address")]
    pub address: String,
}

/// Wrapper for the `<logical_device>` elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalDevices {
    #[serde(rename = "logical_device", default)]
    pub logical_device: Vec<LogicalDevice>,
}

/// A DLMS logical device, one per populated module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalDevice {
    #[serde(rename = "@address")]
    pub address: u16,

    #[serde(rename = "object", default)]
    pub object: Vec<DataObject>,
}

/// A COSEM object, one per channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataObject {
    #[serde(rename = "@class_id")]
    pub class_id: String,

    #[serde(rename = "@logical_name")]
    pub logical_name: String,

    #[serde(rename = "@data_source")]
    pub data_source: String,
}

impl Servers {
    /// All logical devices of all servers, in document order.
    pub fn logical_devices(&self) -> impl Iterator<Item = &LogicalDevice> {
        self.server
            .iter()
            .filter_map(|s| s.logical_devices.as_ref())
            .flat_map(|lds| lds.logical_device.iter())
    }
}
