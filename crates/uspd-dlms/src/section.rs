// crates/uspd-dlms/src/section.rs

//! Classifies USPD configuration sections by their name.

/// Marker that declares a module section (case-sensitive).
const MODULE_MARKER: &str = "Module";

/// Name fragments of sections that never describe a channel (case-sensitive).
const RESERVED_MARKERS: [&str; 4] = ["MODULE", "USPD IN SYSTEM", "ARCHIVES", "COM"];

/// What a section of the configuration file declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// A metering module (`[Module1]`, `[Module 2]`, ...).
    Module,
    /// A candidate channel; it still needs a non-zero `MODULE` field to count.
    Channel,
    /// System sections such as `[COM1]` or `[ARCHIVES]`.
    Excluded,
}

/// Determines the kind of a section from its name alone.
pub fn classify(name: &str) -> SectionKind {
    if name.contains(MODULE_MARKER) {
        SectionKind::Module
    } else if RESERVED_MARKERS.iter().any(|marker| name.contains(marker)) {
        SectionKind::Excluded
    } else {
        SectionKind::Channel
    }
}
