// ── Cisco NX-OS parser ──
//
// NX-OS shares the IOS line grammar, so the IOS parser does the
// structural work; NX-OS-specific top-level directives are then captured
// into `global_settings`.

use netlint_model::{ConfigModel, Device, DeviceType};

use crate::cisco::ios::IosParser;
use crate::error::ParseError;
use crate::registry::DeviceParser;

#[derive(Debug, Default)]
pub struct NxosParser {
    ios: IosParser,
}

impl NxosParser {
    pub fn new() -> Self {
        Self {
            ios: IosParser::new(),
        }
    }
}

impl DeviceParser for NxosParser {
    fn device_type(&self) -> DeviceType {
        DeviceType::CiscoNxos
    }

    fn parse(&self, data: &[u8], device: Device) -> Result<ConfigModel, ParseError> {
        let mut cfg = self.ios.parse(data, device)?;
        cfg.device.device_type = DeviceType::CiscoNxos;

        let mut settings = Vec::new();
        for line in &cfg.lines {
            let trimmed = line.trim();
            if let Some(feature) = trimmed.strip_prefix("feature ") {
                settings.push((format!("feature_{feature}"), "enabled".to_owned()));
            } else if let Some(domain) = trimmed.strip_prefix("vpc domain ") {
                settings.push(("vpc_domain".to_owned(), domain.to_owned()));
            } else if let Some(mac) = trimmed.strip_prefix("fabric forwarding anycast-gateway-mac ")
            {
                settings.push(("anycast_gw_mac".to_owned(), mac.to_owned()));
            } else if trimmed.starts_with("nv overlay evpn") {
                settings.push(("evpn".to_owned(), "enabled".to_owned()));
            }
        }
        cfg.global_settings.extend(settings);

        Ok(cfg)
    }
}
