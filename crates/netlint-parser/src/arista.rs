// ── Arista EOS parser ──
//
// EOS uses a Cisco-compatible CLI grammar; the IOS parser handles the
// structural parsing and EOS-specific directives (MLAG, VXLAN,
// management API) decorate `global_settings`.

use netlint_model::{ConfigModel, Device, DeviceType};

use crate::cisco::IosParser;
use crate::error::ParseError;
use crate::registry::DeviceParser;

#[derive(Debug, Default)]
pub struct EosParser {
    ios: IosParser,
}

impl EosParser {
    pub fn new() -> Self {
        Self {
            ios: IosParser::new(),
        }
    }
}

impl DeviceParser for EosParser {
    fn device_type(&self) -> DeviceType {
        DeviceType::AristaEos
    }

    fn parse(&self, data: &[u8], device: Device) -> Result<ConfigModel, ParseError> {
        let mut cfg = self.ios.parse(data, device)?;
        cfg.device.device_type = DeviceType::AristaEos;

        let mut settings = Vec::new();
        for line in &cfg.lines {
            let trimmed = line.trim();
            if trimmed.starts_with("management api http-commands") {
                settings.push(("management_api".to_owned(), "http-commands".to_owned()));
            } else if trimmed.starts_with("daemon terminattr") {
                settings.push(("terminattr".to_owned(), "enabled".to_owned()));
            } else if trimmed.starts_with("mlag configuration") {
                settings.push(("mlag".to_owned(), "configured".to_owned()));
            } else if let Some(mac) = trimmed.strip_prefix("ip virtual-router mac-address ") {
                settings.push(("virtual_router_mac".to_owned(), mac.to_owned()));
            } else if trimmed.starts_with("vxlan vni") {
                settings.push(("vxlan".to_owned(), "configured".to_owned()));
            }
        }
        cfg.global_settings.extend(settings);

        Ok(cfg)
    }
}
