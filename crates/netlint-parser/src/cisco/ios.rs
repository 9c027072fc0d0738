// ── Cisco IOS / IOS-XE parser ──

use std::collections::HashMap;

use tracing::debug;

use netlint_model::{
    Acl, AclAction, AclEntry, AclKind, BgpConfig, BgpNeighbor, BgpNetwork, ConfigModel, Device,
    DeviceType, Interface, OspfArea, OspfConfig, OspfRedistribution, StaticRoute, Vlan, VlanState,
};

use crate::cisco::lexer::{Lexer, Token, TokenKind};
use crate::error::ParseError;
use crate::registry::DeviceParser;

/// Token-driven block walker for Cisco IOS and IOS-XE configurations.
#[derive(Debug, Default)]
pub struct IosParser {
    lexer: Lexer,
}

impl IosParser {
    pub fn new() -> Self {
        Self { lexer: Lexer::new() }
    }
}

impl DeviceParser for IosParser {
    fn device_type(&self) -> DeviceType {
        DeviceType::CiscoIos
    }

    fn parse(&self, data: &[u8], device: Device) -> Result<ConfigModel, ParseError> {
        let mut cfg = ConfigModel::from_raw(device, data);
        let tokens = self.lexer.tokenize(data);

        let mut i = 0;
        while i < tokens.len() {
            let tok = &tokens[i];
            if tok.kind == TokenKind::Comment {
                i += 1;
                continue;
            }
            let text = tok.text.as_str();

            if let Some(rest) = text.strip_prefix("hostname ") {
                cfg.device.hostname = rest.to_owned();
                cfg.global_settings
                    .insert("hostname".into(), rest.to_owned());
            } else if text.starts_with("interface ") {
                let (iface, consumed) = parse_interface(&tokens, i);
                cfg.interfaces.push(iface);
                i += consumed;
                continue;
            } else if text.starts_with("ip access-list ") {
                let (acl, consumed) = parse_acl(&tokens, i);
                cfg.acls.push(acl);
                i += consumed;
                continue;
            } else if text.starts_with("router bgp ") {
                let (bgp, consumed) = parse_bgp(&tokens, i);
                cfg.bgp = Some(bgp);
                i += consumed;
                continue;
            } else if text.starts_with("router ospf ") {
                let (ospf, consumed) = parse_ospf(&tokens, i);
                cfg.ospf = Some(ospf);
                i += consumed;
                continue;
            } else if let Some(rest) = text.strip_prefix("ip route ") {
                if let Some(route) = parse_static_route(rest) {
                    cfg.static_routes.push(route);
                }
            } else if let Some(rest) = text.strip_prefix("vlan ") {
                if let Ok(id) = rest.trim().parse::<u16>() {
                    cfg.vlans.push(Vlan {
                        id,
                        name: None,
                        state: VlanState::Active,
                    });
                }
            } else if let Some(rest) = text.strip_prefix("logging ") {
                cfg.global_settings.insert("logging".into(), rest.to_owned());
            } else if let Some(rest) = text.strip_prefix("ntp server ") {
                cfg.global_settings
                    .insert("ntp_server".into(), rest.to_owned());
            } else if text == "no ip domain-lookup" {
                cfg.global_settings
                    .insert("no_domain_lookup".into(), "true".into());
            } else if text.starts_with("enable secret ") || text.starts_with("enable password ") {
                cfg.global_settings
                    .insert("enable_secret".into(), "configured".into());
            } else if text.starts_with("snmp-server ") {
                cfg.global_settings
                    .insert(format!("snmp_server_{i}"), text.to_owned());
            }

            i += 1;
        }

        debug!(
            device = %cfg.device.effective_id(),
            interfaces = cfg.interfaces.len(),
            acls = cfg.acls.len(),
            "parsed ios configuration"
        );
        Ok(cfg)
    }
}

/// Whether the token at `tok` is still inside the block opened at
/// `base_depth`.
fn in_block(tok: &Token, base_depth: usize) -> bool {
    tok.depth > base_depth || tok.kind == TokenKind::BlockStart
}

/// Extract an interface block beginning at `start`. Returns the interface
/// and the number of tokens consumed (header included).
fn parse_interface(tokens: &[Token], start: usize) -> (Interface, usize) {
    let name = tokens[start]
        .text
        .strip_prefix("interface ")
        .unwrap_or_default();
    let mut iface = Interface::named(name);
    let base_depth = tokens[start].depth;
    let mut consumed = 1;

    for tok in &tokens[start + 1..] {
        if !in_block(tok, base_depth) {
            break;
        }
        if tok.kind == TokenKind::Comment {
            consumed += 1;
            continue;
        }
        let text = tok.text.as_str();

        if let Some(rest) = text.strip_prefix("description ") {
            iface.description = Some(rest.to_owned());
        } else if let Some(rest) = text.strip_prefix("ip address ") {
            let mut parts = rest.split_whitespace();
            if let (Some(addr), Some(mask)) = (parts.next(), parts.next()) {
                iface.ip_address = Some(addr.to_owned());
                iface.subnet_mask = Some(mask.to_owned());
            }
        } else if let Some(rest) = text.strip_prefix("ipv6 address ") {
            iface.ipv6_address = Some(rest.to_owned());
        } else if text == "shutdown" {
            iface.shutdown = true;
        } else if let Some(rest) = text.strip_prefix("switchport mode ") {
            if let Ok(mode) = rest.parse() {
                iface.vlan_mode = Some(mode);
            }
        } else if let Some(rest) = text.strip_prefix("switchport access vlan ") {
            if let Ok(id) = rest.parse::<u16>() {
                iface.access_vlan = Some(id);
            }
        } else if let Some(rest) = text.strip_prefix("mtu ") {
            if let Ok(mtu) = rest.parse::<u32>() {
                iface.mtu = Some(mtu);
            }
        } else if let Some(rest) = text.strip_prefix("ip access-group ") {
            let parts: Vec<&str> = rest.split_whitespace().collect();
            if let [name, direction] = parts[..] {
                match direction {
                    "in" => iface.inbound_acl = Some(name.to_owned()),
                    "out" => iface.outbound_acl = Some(name.to_owned()),
                    _ => {}
                }
            }
        } else if text == "spanning-tree portfast" {
            iface.stp_portfast = true;
        } else {
            iface
                .attributes
                .insert(format!("line_{consumed}"), text.to_owned());
        }
        consumed += 1;
    }

    (iface, consumed)
}

/// Extract an `ip access-list <type> <name>` block.
fn parse_acl(tokens: &[Token], start: usize) -> (Acl, usize) {
    let header = tokens[start]
        .text
        .strip_prefix("ip access-list ")
        .unwrap_or_default();
    let mut parts = header.split_whitespace();
    let mut acl = Acl::default();
    if let (Some(kind), Some(name)) = (parts.next(), parts.next()) {
        acl.kind = kind.parse().ok();
        acl.name = name.to_owned();
    }
    let base_depth = tokens[start].depth;
    let mut consumed = 1;

    for tok in &tokens[start + 1..] {
        if !in_block(tok, base_depth) {
            break;
        }
        if tok.kind != TokenKind::Comment {
            acl.entries.push(parse_acl_entry(&tok.text));
        }
        consumed += 1;
    }

    (acl, consumed)
}

/// Parse a single ACL entry line left-to-right: optional sequence number,
/// action word, protocol, source, destination, then a `log` keyword
/// anywhere in the tail. `remark` entries keep their text verbatim.
fn parse_acl_entry(text: &str) -> AclEntry {
    let parts: Vec<&str> = text.split_whitespace().collect();
    let mut entry = AclEntry::default();
    let mut idx = 0;

    if let Some(seq) = parts.first().and_then(|p| p.parse::<u32>().ok()) {
        entry.sequence = Some(seq);
        idx += 1;
    }
    match parts.get(idx).copied() {
        Some("remark") => {
            entry.remark = Some(parts[idx + 1..].join(" "));
            return entry;
        }
        Some(word) => {
            if let Ok(action) = word.parse::<AclAction>() {
                entry.action = Some(action);
                idx += 1;
            } else {
                // Unrecognised entry shape; keep the text for inspection.
                entry.remark = Some(text.to_owned());
                return entry;
            }
        }
        None => return entry,
    }
    if let Some(proto) = parts.get(idx) {
        entry.protocol = Some((*proto).to_owned());
        idx += 1;
    }
    if let Some(src) = parts.get(idx) {
        entry.source = Some((*src).to_owned());
        idx += 1;
    }
    if let Some(dst) = parts.get(idx) {
        entry.destination = Some((*dst).to_owned());
        idx += 1;
    }
    if parts[idx.min(parts.len())..].contains(&"log") {
        entry.log = true;
    }
    entry
}

/// Extract a `router bgp <asn>` block. Neighbor attribute lines are
/// merged into one neighbor per address, preserving first-seen order.
fn parse_bgp(tokens: &[Token], start: usize) -> (BgpConfig, usize) {
    let asn = tokens[start]
        .text
        .strip_prefix("router bgp ")
        .unwrap_or_default();
    let mut bgp = BgpConfig {
        local_as: asn.trim().parse().ok(),
        ..BgpConfig::default()
    };
    let base_depth = tokens[start].depth;
    let mut consumed = 1;
    let mut neighbor_index: HashMap<String, usize> = HashMap::new();

    for tok in &tokens[start + 1..] {
        if !in_block(tok, base_depth) {
            break;
        }
        if tok.kind == TokenKind::Comment {
            consumed += 1;
            continue;
        }
        let text = tok.text.as_str();

        if let Some(rest) = text.strip_prefix("bgp router-id ") {
            bgp.router_id = Some(rest.to_owned());
        } else if text.starts_with("neighbor ") {
            let parts: Vec<&str> = text.split_whitespace().collect();
            if parts.len() >= 3 {
                let addr = parts[1];
                let slot = *neighbor_index.entry(addr.to_owned()).or_insert_with(|| {
                    bgp.neighbors.push(BgpNeighbor::at(addr));
                    bgp.neighbors.len() - 1
                });
                apply_neighbor_attr(&mut bgp.neighbors[slot], &parts[2..].join(" "));
            }
        } else if text.starts_with("network ") {
            let parts: Vec<&str> = text.split_whitespace().collect();
            if parts.len() >= 2 {
                let mask = (parts.len() == 4 && parts[2] == "mask")
                    .then(|| parts[3].to_owned());
                bgp.networks.push(BgpNetwork {
                    prefix: parts[1].to_owned(),
                    mask,
                });
            }
        }
        consumed += 1;
    }

    (bgp, consumed)
}

fn apply_neighbor_attr(neighbor: &mut BgpNeighbor, attr: &str) {
    if let Some(rest) = attr.strip_prefix("remote-as ") {
        if let Ok(asn) = rest.parse::<u32>() {
            neighbor.remote_as = Some(asn);
        }
    } else if let Some(rest) = attr.strip_prefix("description ") {
        neighbor.description = Some(rest.to_owned());
    } else if attr == "next-hop-self" {
        neighbor.next_hop_self = true;
    } else if attr == "shutdown" {
        neighbor.shutdown = true;
    } else if let Some(rest) = attr.strip_prefix("update-source ") {
        neighbor.update_source = Some(rest.to_owned());
    } else if attr.starts_with("route-map ") {
        let parts: Vec<&str> = attr.split_whitespace().collect();
        if let ["route-map", name, direction] = parts[..] {
            if direction == "in" {
                neighbor.route_map_in = Some(name.to_owned());
            } else {
                neighbor.route_map_out = Some(name.to_owned());
            }
        }
    }
}

/// Extract a `router ospf <pid>` block. Networks accumulate into the
/// area whose id matches, creating the area on first sight.
fn parse_ospf(tokens: &[Token], start: usize) -> (OspfConfig, usize) {
    let pid = tokens[start]
        .text
        .strip_prefix("router ospf ")
        .unwrap_or_default();
    let mut ospf = OspfConfig {
        process_id: pid.trim().parse().ok(),
        ..OspfConfig::default()
    };
    let base_depth = tokens[start].depth;
    let mut consumed = 1;

    for tok in &tokens[start + 1..] {
        if !in_block(tok, base_depth) {
            break;
        }
        if tok.kind == TokenKind::Comment {
            consumed += 1;
            continue;
        }
        let text = tok.text.as_str();

        if let Some(rest) = text.strip_prefix("router-id ") {
            ospf.router_id = Some(rest.to_owned());
        } else if text.starts_with("network ") {
            let parts: Vec<&str> = text.split_whitespace().collect();
            if parts.len() >= 4 && parts[parts.len() - 2] == "area" {
                let area_id = parts[parts.len() - 1];
                let network = parts[1].to_owned();
                match ospf.areas.iter_mut().find(|a| a.id == area_id) {
                    Some(area) => area.networks.push(network),
                    None => ospf.areas.push(OspfArea {
                        id: area_id.to_owned(),
                        networks: vec![network],
                    }),
                }
            }
        } else if text.starts_with("passive-interface default") {
            ospf.default_passive = true;
        } else if let Some(rest) = text.strip_prefix("passive-interface ") {
            ospf.passive_interfaces.push(rest.to_owned());
        } else if text.starts_with("redistribute ") {
            let parts: Vec<&str> = text.split_whitespace().collect();
            if parts.len() >= 2 {
                ospf.redistributions.push(OspfRedistribution {
                    source: parts[1].to_owned(),
                });
            }
        }
        consumed += 1;
    }

    (ospf, consumed)
}

/// Parse the tail of an `ip route` line: `DEST MASK NEXTHOP [AD]`. The
/// destination is normalised to CIDR via [`mask_to_prefix`].
fn parse_static_route(rest: &str) -> Option<StaticRoute> {
    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.len() < 3 {
        return None;
    }
    Some(StaticRoute {
        destination: format!("{}/{}", parts[0], mask_to_prefix(parts[1])),
        next_hop: Some(parts[2].to_owned()),
        admin_distance: parts.get(3).and_then(|p| p.parse().ok()),
    })
}

/// Convert a dotted subnet mask to a CIDR prefix length by counting set
/// bits across the four octets. Non-contiguous masks (e.g. `255.0.255.0`)
/// are accepted as-is by the bit count; anything that is not four
/// integers is returned unchanged.
pub(crate) fn mask_to_prefix(mask: &str) -> String {
    let octets: Vec<&str> = mask.split('.').collect();
    if octets.len() != 4 {
        return mask.to_owned();
    }
    let mut count = 0u32;
    for octet in octets {
        match octet.parse::<u32>() {
            Ok(n) => count += n.count_ones(),
            Err(_) => return mask.to_owned(),
        }
    }
    count.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_to_prefix_counts_bits() {
        assert_eq!(mask_to_prefix("255.255.255.0"), "24");
        assert_eq!(mask_to_prefix("255.255.0.0"), "16");
        assert_eq!(mask_to_prefix("255.255.255.252"), "30");
        assert_eq!(mask_to_prefix("0.0.0.0"), "0");
    }

    #[test]
    fn mask_to_prefix_accepts_non_contiguous_masks() {
        // Popcount over illegal masks, not an error.
        assert_eq!(mask_to_prefix("255.0.255.0"), "16");
    }

    #[test]
    fn mask_to_prefix_passes_through_malformed_input() {
        assert_eq!(mask_to_prefix("not-a-mask"), "not-a-mask");
        assert_eq!(mask_to_prefix("255.255.x.0"), "255.255.x.0");
    }

    #[test]
    fn acl_entry_with_sequence_and_log() {
        let entry = parse_acl_entry("10 permit tcp 10.0.0.0/8 any eq 443 log");
        assert_eq!(entry.sequence, Some(10));
        assert_eq!(entry.action, Some(AclAction::Permit));
        assert_eq!(entry.protocol.as_deref(), Some("tcp"));
        assert_eq!(entry.source.as_deref(), Some("10.0.0.0/8"));
        assert_eq!(entry.destination.as_deref(), Some("any"));
        assert!(entry.log);
    }

    #[test]
    fn acl_remark_is_kept_verbatim() {
        let entry = parse_acl_entry("20 remark allow web traffic");
        assert_eq!(entry.sequence, Some(20));
        assert_eq!(entry.action, None);
        assert_eq!(entry.remark.as_deref(), Some("allow web traffic"));
    }
}
