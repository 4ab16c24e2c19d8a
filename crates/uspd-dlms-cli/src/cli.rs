// crates/uspd-dlms-cli/src/cli.rs

//! Command-line arguments of the `uspd-dlms` binary.
//!
//! Every option can also be given through an environment variable; an
//! explicit argument wins.

use clap::Parser;
use std::path::PathBuf;
use uspd_dlms::{
    DEFAULT_BASE_LOGICAL_ADDRESS, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, LineHeader, Settings,
};

/// Converts a USPD INI configuration into DLMS/COSEM gateway XML.
#[derive(Debug, Parser)]
#[command(name = "uspd-dlms", version, about)]
pub struct Cli {
    /// USPD configuration to read
    #[arg(long, short = 'i', env = "USPD_DLMS_INPUT", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Gateway XML to write (replaced on every run)
    #[arg(long, short = 'o', env = "USPD_DLMS_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Address of the first emitted logical device
    #[arg(
        long,
        env = "USPD_DLMS_BASE_ADDRESS",
        default_value_t = DEFAULT_BASE_LOGICAL_ADDRESS
    )]
    pub base_logical_address: u16,

    /// Line type of the configured server ("TCP/IP" or "serial")
    #[arg(long, env = "USPD_DLMS_LINE_TYPE", default_value = "TCP/IP")]
    pub line_type: String,

    /// TCP port or serial device of the configured server
    #[arg(long, env = "USPD_DLMS_PORT", default_value = "48999")]
    pub port: String,

    /// Baudrate of the configured server (serial lines only)
    #[arg(long, env = "USPD_DLMS_BAUDRATE", default_value = "9600")]
    pub baudrate: String,

    /// Line address of the configured server
    #[arg(long, env = "USPD_DLMS_LINE_ADDRESS", default_value = "20")]
    pub line_address: String,
}

impl Cli {
    pub fn into_settings(self) -> Settings {
        Settings {
            input_path: self.input,
            output_path: self.output,
            base_logical_address: self.base_logical_address,
            line: LineHeader::new(self.line_type, self.port, self.baudrate, self.line_address),
        }
    }
}
