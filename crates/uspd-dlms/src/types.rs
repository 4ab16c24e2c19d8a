// crates/uspd-dlms/src/types.rs

//! Public data structures for a parsed USPD configuration.

// --- Configuration Root ---

/// The metering modules of a USPD configuration, in declaration order.
///
/// Built once by the loader and read-only afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UspdConfig {
    modules: Vec<Module>,
}

impl UspdConfig {
    /// Creates a configuration from already assembled modules.
    pub fn from_modules(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    /// All modules, in declaration order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Looks up a module by its 1-based number.
    pub fn module(&self, number: usize) -> Option<&Module> {
        number.checked_sub(1).and_then(|idx| self.modules.get(idx))
    }

    /// Total number of channels across all modules.
    pub fn channel_count(&self) -> usize {
        self.modules.iter().map(|m| m.channels.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub(crate) fn push_module(&mut self, module: Module) {
        self.modules.push(module);
    }

    pub(crate) fn module_mut(&mut self, number: usize) -> Option<&mut Module> {
        let idx = number.checked_sub(1)?;
        self.modules.get_mut(idx)
    }
}

// --- Module ---

/// A physical or logical metering module (`[ModuleN]` section).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Module {
    module_type: String,
    channels: Vec<Channel>,
}

impl Module {
    /// Creates a module without channels.
    pub fn new(module_type: impl Into<String>) -> Self {
        Self {
            module_type: module_type.into(),
            channels: Vec::new(),
        }
    }

    /// Creates a module owning the given channels.
    pub fn with_channels(module_type: impl Into<String>, channels: Vec<Channel>) -> Self {
        Self {
            module_type: module_type.into(),
            channels,
        }
    }

    /// The `TYPE` label, empty if the section had none.
    pub fn module_type(&self) -> &str {
        &self.module_type
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub(crate) fn push_channel(&mut self, channel: Channel) {
        self.channels.push(channel);
    }
}

// --- Channel ---

/// A measurement channel assigned to a module.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Channel {
    /// COSEM interface class identifier.
    pub class_id: String,
    /// OBIS code, e.g. `1.0.1.8.0.255`.
    pub logical_name: String,
    /// Name of the section the channel was declared in.
    pub data_source: String,
}

impl Channel {
    pub fn new(
        class_id: impl Into<String>,
        logical_name: impl Into<String>,
        data_source: impl Into<String>,
    ) -> Self {
        Self {
            class_id: class_id.into(),
            logical_name: logical_name.into(),
            data_source: data_source.into(),
        }
    }

    /// Creates a channel from a combined `"<class id>,<logical name>"` field.
    ///
    /// The split happens on the first comma. Without a comma the whole value
    /// is the class id and the logical name stays empty.
    pub fn from_dlms_name(dlms_name: &str, data_source: impl Into<String>) -> Self {
        let (class_id, logical_name) = dlms_name.split_once(',').unwrap_or((dlms_name, ""));
        Self::new(class_id, logical_name, data_source)
    }
}

// --- Line Header ---

/// Connection parameters of a gateway server line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineHeader {
    /// `"TCP/IP"` or `"serial"`.
    pub line_type: String,
    pub port: String,
    /// Only emitted for serial lines.
    pub baudrate: String,
    pub line_address: String,
}

impl LineHeader {
    /// Line type that carries a baudrate.
    pub const SERIAL: &'static str = "serial";

    pub fn new(
        line_type: impl Into<String>,
        port: impl Into<String>,
        baudrate: impl Into<String>,
        line_address: impl Into<String>,
    ) -> Self {
        Self {
            line_type: line_type.into(),
            port: port.into(),
            baudrate: baudrate.into(),
            line_address: line_address.into(),
        }
    }

    /// The fixed line of the first (default) server.
    pub fn default_server() -> Self {
        Self::new("TCP/IP", "48999", "9600", "20")
    }

    pub fn is_serial(&self) -> bool {
        self.line_type == Self::SERIAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dlms_name_split_on_first_comma() {
        let ch = Channel::from_dlms_name("3,1.0.1.8.0.255", "ChannelA");
        assert_eq!(ch.class_id, "3");
        assert_eq!(ch.logical_name, "1.0.1.8.0.255");
        assert_eq!(ch.data_source, "ChannelA");
    }

    #[test]
    fn test_dlms_name_without_comma() {
        let ch = Channel::from_dlms_name("3", "ChannelA");
        assert_eq!(ch.class_id, "3");
        assert_eq!(ch.logical_name, "");
    }

    #[test]
    fn test_dlms_name_keeps_later_commas() {
        let ch = Channel::from_dlms_name("7,0.0.99.1.0.255,2", "Profile");
        assert_eq!(ch.class_id, "7");
        assert_eq!(ch.logical_name, "0.0.99.1.0.255,2");
    }

    #[test]
    fn test_module_lookup_is_one_based() {
        let config = UspdConfig::from_modules(vec![Module::new("DM"), Module::new("Sx")]);
        assert_eq!(config.module(1).map(Module::module_type), Some("DM"));
        assert_eq!(config.module(2).map(Module::module_type), Some("Sx"));
        assert!(config.module(0).is_none());
        assert!(config.module(3).is_none());
    }

    #[test]
    fn test_channel_count() {
        let config = UspdConfig::from_modules(vec![
            Module::with_channels("DM", vec![Channel::default(), Channel::default()]),
            Module::new("Sx"),
            Module::with_channels("DM", vec![Channel::default()]),
        ]);
        assert_eq!(config.channel_count(), 3);
    }

    #[test]
    fn test_serial_detection_is_exact() {
        assert!(LineHeader::new("serial", "/dev/ttyS0", "9600", "1").is_serial());
        assert!(!LineHeader::new("Serial", "/dev/ttyS0", "9600", "1").is_serial());
        assert!(!LineHeader::default_server().is_serial());
    }
}
