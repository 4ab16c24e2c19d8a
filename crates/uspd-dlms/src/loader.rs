// crates/uspd-dlms/src/loader.rs

//! Loads a USPD INI configuration into the module/channel model.

use crate::error::LoadError;
use crate::ini::{self, Section};
use crate::section::{SectionKind, classify};
use crate::types::{Channel, Module, UspdConfig};
use log::{debug, info, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Module type key of a module section.
const TYPE_KEY: &str = "TYPE";
/// Owning module number of a channel section.
const MODULE_KEY: &str = "MODULE";
/// Combined `"<class id>,<logical name>"` key of a channel section.
const DLMS_NAME_KEY: &str = "DlmsName";

/// Loads a configuration file.
///
/// A file that cannot be opened is not an error: it yields an empty
/// configuration and a warning.
///
/// # Errors
/// Returns a `LoadError` if the file cannot be read after opening or its
/// contents are malformed. Nothing of a malformed file is kept.
///
/// The file must be ASCII or UTF-8. Other encodings (e.g. CP1251 exports
/// with Cyrillic section names) fail with `LoadError::Read` carrying an
/// `io::ErrorKind::InvalidData` error, not an I/O fault of the device.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<UspdConfig, LoadError> {
    let path = path.as_ref();
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!(
                "Configuration source {} unavailable ({}), nothing to convert",
                path.display(),
                e
            );
            return Ok(UspdConfig::default());
        }
    };

    let mut text = String::new();
    file.read_to_string(&mut text)?;
    load_from_str(&text)
}

/// Parses configuration text into modules and channels.
///
/// Sections are visited once, in file order. Module sections append a new
/// module; channel sections with a non-zero `MODULE` field attach a channel
/// to the module with that 1-based number, which must already be declared.
///
/// # Errors
/// Returns a `LoadError` for malformed lines, duplicate names, a `MODULE`
/// field that is not an integer, or a reference to an undeclared module.
pub fn load_from_str(text: &str) -> Result<UspdConfig, LoadError> {
    let doc = ini::parse(text)?;
    let mut config = UspdConfig::default();

    if !doc.globals.is_empty() {
        debug!("Ignoring {} entries outside any section", doc.globals.len());
    }

    for section in &doc.sections {
        match classify(&section.name) {
            SectionKind::Module => {
                let module_type = section.get(TYPE_KEY).unwrap_or_default();
                debug!(
                    "Module {} '{}' on line {} (type '{}')",
                    config.modules().len() + 1,
                    section.name,
                    section.line,
                    module_type
                );
                config.push_module(Module::new(module_type));
            }
            SectionKind::Channel => {
                if let Some((number, channel)) = parse_channel(section)? {
                    let declared = config.modules().len();
                    let index = usize::try_from(number).unwrap_or(0);
                    let Some(module) = config.module_mut(index) else {
                        return Err(LoadError::UnknownModule {
                            section: section.name.clone(),
                            module: number,
                            declared,
                        });
                    };
                    debug!(
                        "Channel '{}' -> module {} (class {}, {})",
                        channel.data_source, number, channel.class_id, channel.logical_name
                    );
                    module.push_channel(channel);
                }
            }
            SectionKind::Excluded => {
                debug!("Skipping system section '{}'", section.name);
            }
        }
    }

    info!(
        "Loaded {} module(s) with {} channel(s)",
        config.modules().len(),
        config.channel_count()
    );
    Ok(config)
}

/// Reads a channel section.
///
/// Returns `None` when the section has no `MODULE` field or it is zero.
fn parse_channel(section: &Section) -> Result<Option<(i64, Channel)>, LoadError> {
    let Some(raw) = section.get(MODULE_KEY) else {
        return Ok(None);
    };

    let number: i64 = raw.parse().map_err(|source| LoadError::InvalidModuleNumber {
        section: section.name.clone(),
        value: raw.to_string(),
        source,
    })?;
    if number == 0 {
        return Ok(None);
    }

    let channel = match section.get(DLMS_NAME_KEY) {
        Some(dlms_name) if !dlms_name.is_empty() => {
            Channel::from_dlms_name(dlms_name, section.name.as_str())
        }
        _ => Channel::new("", "", section.name.as_str()),
    };

    Ok(Some((number, channel)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_MODULES: &str = "\
[USPD IN SYSTEM]
COUNT=2

[Module1]
TYPE=DM

[Module2]
TYPE=Sx

[Active energy]
MODULE=2
DlmsName=3,1.0.1.8.0.255

[Voltage L1]
MODULE=1
DlmsName=3,1.0.32.7.0.255

[Reactive energy]
MODULE=2
DlmsName=3,1.0.3.8.0.255
";

    #[test]
    fn test_channels_attach_to_numbered_module() {
        let config = load_from_str(TWO_MODULES).unwrap();
        assert_eq!(config.modules().len(), 2);

        let m1 = config.module(1).unwrap();
        assert_eq!(m1.module_type(), "DM");
        assert_eq!(m1.channels().len(), 1);
        assert_eq!(m1.channels()[0].data_source, "Voltage L1");

        let m2 = config.module(2).unwrap();
        assert_eq!(m2.module_type(), "Sx");
        let sources: Vec<&str> = m2.channels().iter().map(|c| c.data_source.as_str()).collect();
        assert_eq!(sources, ["Active energy", "Reactive energy"]);
    }

    #[test]
    fn test_missing_type_is_tolerated() {
        let config = load_from_str("[Module1]\nSERIAL=42\n").unwrap();
        assert_eq!(config.module(1).unwrap().module_type(), "");
    }

    #[test]
    fn test_section_without_module_field_is_skipped() {
        let config = load_from_str("[Module1]\nTYPE=DM\n[Info]\nDlmsName=1,0.0.0.0.0.255\n").unwrap();
        assert_eq!(config.channel_count(), 0);
    }

    #[test]
    fn test_module_zero_is_skipped() {
        let config = load_from_str("[Module1]\nTYPE=DM\n[Spare]\nMODULE=0\n").unwrap();
        assert_eq!(config.channel_count(), 0);
    }

    #[test]
    fn test_missing_or_empty_dlms_name_leaves_ids_empty() {
        let text = "[Module1]\nTYPE=DM\n[A]\nMODULE=1\n[B]\nMODULE=1\nDlmsName=\n";
        let config = load_from_str(text).unwrap();
        for channel in config.module(1).unwrap().channels() {
            assert_eq!(channel.class_id, "");
            assert_eq!(channel.logical_name, "");
        }
        assert_eq!(config.channel_count(), 2);
    }

    #[test]
    fn test_non_integer_module_is_an_error() {
        let err = load_from_str("[Module1]\nTYPE=DM\n[A]\nMODULE=one\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidModuleNumber { ref value, .. } if value == "one"));
    }

    #[test]
    fn test_module_out_of_range_is_an_error() {
        let err = load_from_str("[Module1]\nTYPE=DM\n[A]\nMODULE=2\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::UnknownModule {
                module: 2,
                declared: 1,
                ..
            }
        ));

        let err = load_from_str("[Module1]\nTYPE=DM\n[A]\nMODULE=-1\n").unwrap_err();
        assert!(matches!(err, LoadError::UnknownModule { module: -1, .. }));
    }

    #[test]
    fn test_channel_before_its_module_is_an_error() {
        let err = load_from_str("[A]\nMODULE=1\n[Module1]\nTYPE=DM\n").unwrap_err();
        assert!(matches!(err, LoadError::UnknownModule { declared: 0, .. }));
    }

    #[test]
    fn test_reserved_sections_never_become_channels() {
        let text = "[Module1]\nTYPE=DM\n[COM1]\nMODULE=1\nDlmsName=1,0.0.0.0.0.255\n[ARCHIVES]\nMODULE=1\n";
        let config = load_from_str(text).unwrap();
        assert_eq!(config.channel_count(), 0);
    }

    #[test]
    fn test_missing_file_yields_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from_path(dir.path().join("absent.ini")).unwrap();
        assert!(config.is_empty());
    }
}
