// ── Juniper JunOS parser ──
//
// JunOS configurations come in two shapes: flat "set path value"
// statements and the hierarchical curly-brace format. The parser sniffs
// which one it was given and walks accordingly.

use std::collections::BTreeMap;

use netlint_model::{
    BgpConfig, BgpNeighbor, ConfigModel, Device, DeviceType, Interface, StaticRoute,
};

use crate::error::ParseError;
use crate::registry::DeviceParser;

#[derive(Debug, Default)]
pub struct JunosParser;

impl JunosParser {
    pub fn new() -> Self {
        Self
    }
}

impl DeviceParser for JunosParser {
    fn device_type(&self) -> DeviceType {
        DeviceType::JuniperJunos
    }

    fn parse(&self, data: &[u8], device: Device) -> Result<ConfigModel, ParseError> {
        let mut cfg = ConfigModel::from_raw(device, data);

        let set_format = cfg
            .lines
            .iter()
            .any(|l| l.trim_start().starts_with("set "));
        if set_format {
            parse_set_format(&mut cfg);
        } else {
            parse_hierarchical(&mut cfg);
        }

        Ok(cfg)
    }
}

// ── Set format ──────────────────────────────────────────────────────

fn parse_set_format(cfg: &mut ConfigModel) {
    // BTreeMap keeps the emitted interface order deterministic.
    let mut interfaces: BTreeMap<String, Interface> = BTreeMap::new();
    let mut bgp = BgpConfig::default();
    let mut has_bgp = false;
    let lines = std::mem::take(&mut cfg.lines);

    for line in &lines {
        let Some(stmt) = line.trim().strip_prefix("set ") else {
            continue;
        };
        let parts: Vec<&str> = stmt.split_whitespace().collect();

        match parts.first().copied() {
            Some("system") => {
                if parts.len() >= 3 && parts[1] == "host-name" {
                    cfg.device.hostname = parts[2].to_owned();
                    cfg.global_settings
                        .insert("hostname".into(), parts[2].to_owned());
                }
                if parts.len() >= 4 && parts[1] == "ntp" && parts[2] == "server" {
                    cfg.global_settings
                        .insert("ntp_server".into(), parts[3].to_owned());
                }
            }
            Some("interfaces") if parts.len() >= 2 => {
                let iface = interfaces
                    .entry(parts[1].to_owned())
                    .or_insert_with(|| Interface::named(parts[1]));
                let tail = parts[2..].join(" ");
                if let Some(desc) = tail.strip_prefix("description ") {
                    iface.description = Some(desc.to_owned());
                }
                if let Some(pos) = tail.find("address ") {
                    let addr = tail[pos + "address ".len()..]
                        .split_whitespace()
                        .next()
                        .unwrap_or_default();
                    if !addr.is_empty() {
                        iface.ip_address = Some(addr.to_owned());
                    }
                }
                if tail.contains("disable") {
                    iface.shutdown = true;
                }
            }
            Some("protocols") if parts.len() >= 2 && parts[1] == "bgp" => {
                has_bgp = true;
                let tail = parts[2..].join(" ");
                if let Some(group) = tail.strip_prefix("group ") {
                    let sub: Vec<&str> = group.split_whitespace().collect();
                    if sub.len() >= 3 && sub[1] == "neighbor" {
                        let addr = sub[2];
                        if !bgp.neighbors.iter().any(|n| n.address == addr) {
                            bgp.neighbors.push(BgpNeighbor::at(addr));
                        }
                    }
                }
                if let Some(asn) = tail.strip_prefix("local-as ") {
                    if let Ok(asn) = asn.parse::<u32>() {
                        bgp.local_as = Some(asn);
                    }
                }
            }
            Some("routing-options") => {
                if parts.len() >= 5 && parts[1] == "static" && parts[2] == "route" {
                    let next_hop = parts
                        .iter()
                        .position(|p| *p == "next-hop")
                        .and_then(|pos| parts.get(pos + 1))
                        .map(|nh| (*nh).to_owned());
                    cfg.static_routes.push(StaticRoute {
                        destination: parts[3].to_owned(),
                        next_hop,
                        admin_distance: None,
                    });
                }
                if parts.len() >= 3 && parts[1] == "autonomous-system" {
                    if let (Ok(asn), false) = (parts[2].parse::<u32>(), has_bgp) {
                        bgp.local_as = Some(asn);
                    }
                }
            }
            _ => {}
        }
    }

    cfg.lines = lines;
    cfg.interfaces = interfaces.into_values().collect();
    if has_bgp {
        cfg.bgp = Some(bgp);
    }
}

// ── Hierarchical format ─────────────────────────────────────────────

fn parse_hierarchical(cfg: &mut ConfigModel) {
    let mut stack: Vec<String> = Vec::new();
    let mut interfaces: BTreeMap<String, Interface> = BTreeMap::new();
    let mut current_iface: Option<String> = None;
    let lines = std::mem::take(&mut cfg.lines);

    for line in &lines {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Block open.
        if let Some(head) = trimmed.strip_suffix('{') {
            let block = head.trim().to_owned();

            // `route <dest> { ... }` opens a block; emit the route so the
            // inner next-hop statement has something to pair with.
            if stack.len() >= 2 && stack[0] == "routing-options" && stack[1] == "static" {
                if let Some(rest) = block.strip_prefix("route ") {
                    if let Some(dest) = rest.split_whitespace().next() {
                        cfg.static_routes.push(StaticRoute {
                            destination: dest.to_owned(),
                            next_hop: None,
                            admin_distance: None,
                        });
                    }
                }
            }

            stack.push(block.clone());
            if stack.len() == 2 && stack[0] == "interfaces" {
                interfaces
                    .entry(block.clone())
                    .or_insert_with(|| Interface::named(&block));
                current_iface = Some(block);
            }
            continue;
        }

        // Block close.
        if trimmed == "}" {
            stack.pop();
            if stack.is_empty() {
                current_iface = None;
            }
            continue;
        }

        let stmt = trimmed.trim_end_matches(';');

        // System block.
        if stack.first().map(String::as_str) == Some("system") {
            if let Some(hostname) = stmt.strip_prefix("host-name ") {
                cfg.device.hostname = hostname.to_owned();
                cfg.global_settings
                    .insert("hostname".into(), hostname.to_owned());
            }
        }

        // Interface attributes, at any nesting below the interface block.
        if stack.len() >= 2 {
            if let Some(iface) = current_iface
                .as_ref()
                .and_then(|name| interfaces.get_mut(name))
            {
                if let Some(desc) = stmt.strip_prefix("description ") {
                    iface.description = Some(desc.to_owned());
                }
                if let Some(addr) = stmt.strip_prefix("address ") {
                    iface.ip_address = Some(addr.to_owned());
                }
                if stmt == "disable" {
                    iface.shutdown = true;
                }
            }
        }

        // Static routes: routing-options { static { route ...; next-hop ...; } }
        if stack.len() >= 2 && stack[0] == "routing-options" && stack[1] == "static" {
            if let Some(rest) = stmt.strip_prefix("route ") {
                let fields: Vec<&str> = rest.split_whitespace().collect();
                let next_hop = fields
                    .iter()
                    .position(|f| *f == "next-hop")
                    .and_then(|pos| fields.get(pos + 1))
                    .map(|nh| (*nh).to_owned());
                if let Some(dest) = fields.first() {
                    cfg.static_routes.push(StaticRoute {
                        destination: (*dest).to_owned(),
                        next_hop,
                        admin_distance: None,
                    });
                }
            } else if let Some(nh) = stmt.strip_prefix("next-hop ") {
                // Pairs with the most recently emitted route.
                if let Some(route) = cfg.static_routes.last_mut() {
                    route.next_hop = Some(nh.to_owned());
                }
            }
        }
    }

    cfg.lines = lines;
    cfg.interfaces = interfaces.into_values().collect();
}
