// crates/uspd-dlms/src/error.rs

use quick_xml::errors::serialize::SeError;
use std::fmt;
use std::io;
use std::num::ParseIntError;

/// Errors that abort loading a USPD configuration.
///
/// Loading is fail-closed: any of these discards every module and channel
/// read so far.
#[derive(Debug)]
pub enum LoadError {
    /// The source was opened but could not be read (e.g. invalid UTF-8).
    Read(io::Error),

    /// A line is neither a section header, a `key = value` pair, nor a comment.
    Syntax { line: usize, content: String },

    /// Two sections share a name (compared case-insensitively).
    DuplicateSection { line: usize, name: String },

    /// A key appears twice in one section (compared case-insensitively).
    DuplicateKey {
        line: usize,
        section: String,
        key: String,
    },

    /// The `MODULE` field of a channel section is not an integer.
    InvalidModuleNumber {
        section: String,
        value: String,
        source: ParseIntError,
    },

    /// The `MODULE` field of a channel section names no declared module.
    UnknownModule {
        section: String,
        module: i64,
        declared: usize,
    },
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Read(e)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Read(e) => write!(f, "Failed to read configuration: {}", e),
            LoadError::Syntax { line, content } => {
                write!(f, "Syntax error on line {}: '{}'", line, content)
            }
            LoadError::DuplicateSection { line, name } => {
                write!(f, "Duplicate section '{}' on line {}", name, line)
            }
            LoadError::DuplicateKey { line, section, key } => write!(
                f,
                "Duplicate key '{}' in section '{}' on line {}",
                key, section, line
            ),
            LoadError::InvalidModuleNumber {
                section,
                value,
                source,
            } => write!(
                f,
                "Section '{}' has invalid MODULE value '{}': {}",
                section, value, source
            ),
            LoadError::UnknownModule {
                section,
                module,
                declared,
            } => write!(
                f,
                "Section '{}' references module {} but only {} module(s) are declared before it",
                section, module, declared
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Read(e) => Some(e),
            LoadError::InvalidModuleNumber { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors that stop the document builder before every module was emitted.
///
/// Building is fail-soft: the document assembled up to this point is still
/// returned next to the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The next logical device address does not fit the DLMS server address range.
    LogicalAddressOutOfRange {
        /// 1-based number of the module that could not be addressed.
        module: usize,
        /// Base address the run started from.
        base: u16,
        /// Number of logical devices already emitted.
        emitted: usize,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::LogicalAddressOutOfRange {
                module,
                base,
                emitted,
            } => write!(
                f,
                "No logical address left for module {} (base {}, {} device(s) already emitted)",
                module, base, emitted
            ),
        }
    }
}

impl std::error::Error for BuildError {}

/// Errors that occur while serializing or writing the XML document.
#[derive(Debug)]
pub enum WriteError {
    /// An error from the underlying `quick-xml` serializer.
    Serialize(SeError),

    /// An error occurred while formatting the XML declaration.
    Fmt(fmt::Error),

    /// The output destination could not be opened or written.
    Sink(io::Error),
}

impl From<SeError> for WriteError {
    fn from(e: SeError) -> Self {
        WriteError::Serialize(e)
    }
}

impl From<fmt::Error> for WriteError {
    fn from(e: fmt::Error) -> Self {
        WriteError::Fmt(e)
    }
}

impl From<io::Error> for WriteError {
    fn from(e: io::Error) -> Self {
        WriteError::Sink(e)
    }
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::Serialize(e) => write!(f, "XML serializing error: {}", e),
            WriteError::Fmt(e) => write!(f, "Formatting error: {}", e),
            WriteError::Sink(e) => write!(f, "Failed to write output: {}", e),
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WriteError::Serialize(e) => Some(e),
            WriteError::Fmt(e) => Some(e),
            WriteError::Sink(e) => Some(e),
        }
    }
}
