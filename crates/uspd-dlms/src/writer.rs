// crates/uspd-dlms/src/writer.rs

//! Serializes the gateway document to XML text and files.

use crate::document::Servers;
use crate::error::WriteError;
use log::info;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs::File;
use std::io::Write as _;
use std::path::Path;

/// Serializes the document into an XML `String`, indented by two spaces.
///
/// # Errors
/// Returns a `WriteError` if serialization fails.
pub fn to_xml_string(document: &Servers) -> Result<String, WriteError> {
    let mut buffer = String::new();
    // We must write the XML declaration manually
    writeln!(&mut buffer, "<?xml version=\"1.0\" encoding=\"utf-8\"?>")?;

    let mut serializer = quick_xml::se::Serializer::new(&mut buffer);
    serializer.indent(' ', 2);

    document.serialize(serializer)?;
    buffer.push('\n');
    Ok(buffer)
}

/// Writes the document to `path`, replacing any previous contents.
///
/// # Errors
/// Returns `WriteError::Sink` if the file cannot be created or written.
pub fn write_xml_file(document: &Servers, path: impl AsRef<Path>) -> Result<(), WriteError> {
    let path = path.as_ref();
    let xml = to_xml_string(document)?;

    let mut file = File::create(path)?;
    file.write_all(xml.as_bytes())?;
    file.flush()?;

    info!("Wrote {} bytes to {}", xml.len(), path.display());
    Ok(())
}
