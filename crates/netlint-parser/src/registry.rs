// ── Parser registry ──

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use netlint_model::{ConfigModel, Device, DeviceType};

use crate::arista::EosParser;
use crate::cisco::{IosParser, NxosParser};
use crate::error::ParseError;
use crate::juniper::JunosParser;

/// Implemented by every vendor-specific parser. Converts raw
/// configuration bytes into a canonical [`ConfigModel`].
pub trait DeviceParser: Send + Sync {
    /// The platform this parser handles.
    fn device_type(&self) -> DeviceType;
    /// Convert raw configuration bytes into a ConfigModel.
    fn parse(&self, data: &[u8], device: Device) -> Result<ConfigModel, ParseError>;
}

/// Maps [`DeviceType`] to its parser. Dispatch is by the Detector's
/// result; an unregistered type is an explicit error rather than a
/// default parser.
#[derive(Default)]
pub struct Registry {
    parsers: HashMap<DeviceType, Box<dyn DeviceParser>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with all built-in vendor parsers.
    pub fn with_builtin() -> Self {
        let mut r = Self::new();
        r.register(Box::new(IosParser::new()));
        r.register(Box::new(NxosParser::new()));
        r.register(Box::new(JunosParser::new()));
        r.register(Box::new(EosParser::new()));
        r
    }

    /// Add a parser, keyed by its reported device type.
    pub fn register(&mut self, parser: Box<dyn DeviceParser>) {
        self.parsers.insert(parser.device_type(), parser);
    }

    /// The parser for the given device type, if registered.
    pub fn get(&self, device_type: DeviceType) -> Option<&dyn DeviceParser> {
        self.parsers.get(&device_type).map(Box::as_ref)
    }

    /// Dispatch to the parser for `device_type`.
    pub fn parse(
        &self,
        device_type: DeviceType,
        data: &[u8],
        device: Device,
    ) -> Result<ConfigModel, ParseError> {
        let parser = self
            .get(device_type)
            .ok_or(ParseError::NoParser { device_type })?;
        debug!(%device_type, device = %device.effective_id(), "dispatching to parser");
        parser.parse(data, device)
    }
}

static BUILTIN: Lazy<Registry> = Lazy::new(Registry::with_builtin);

/// The shared registry of built-in parsers.
pub fn builtin_registry() -> &'static Registry {
    &BUILTIN
}

/// Parse with the built-in registry.
pub fn parse(
    device_type: DeviceType,
    data: &[u8],
    device: Device,
) -> Result<ConfigModel, ParseError> {
    BUILTIN.parse(device_type, data, device)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_is_an_error() {
        let device = Device::new("d1", DeviceType::Unknown);
        let err = parse(DeviceType::Unknown, b"whatever", device).unwrap_err();
        assert!(matches!(
            err,
            ParseError::NoParser {
                device_type: DeviceType::Unknown
            }
        ));
    }

    #[test]
    fn builtin_registry_covers_all_vendors() {
        let r = builtin_registry();
        for dt in [
            DeviceType::CiscoIos,
            DeviceType::CiscoNxos,
            DeviceType::JuniperJunos,
            DeviceType::AristaEos,
        ] {
            assert!(r.get(dt).is_some(), "missing parser for {dt}");
        }
        assert!(r.get(DeviceType::Unknown).is_none());
    }
}
