// Integration tests for the vendor parsers, driven by realistic
// configuration fixtures.

use netlint_model::{AclAction, AclKind, Device, DeviceType, VlanMode};
use netlint_parser::{parse, Detector};

// ── Fixtures ────────────────────────────────────────────────────────

const IOS_CONFIG: &str = "\
version 15.2
service timestamps debug datetime msec
hostname core-r1
no ip domain-lookup
enable secret 5 $1$abcd$xyz
!
interface GigabitEthernet0/0
 description uplink to isp
 ip address 203.0.113.2 255.255.255.252
 ip access-group EDGE-IN in
 mtu 1500
!
interface GigabitEthernet0/1
 description access port
 switchport mode access
 switchport access vlan 20
 spanning-tree portfast
 shutdown
 speed 1000
!
ip access-list extended EDGE-IN
 10 permit tcp any host 203.0.113.2 eq 22 log
 20 deny ip any any
!
router bgp 65001
 bgp router-id 10.255.0.1
 neighbor 203.0.113.1 remote-as 64496
 neighbor 203.0.113.1 description transit
 neighbor 203.0.113.1 route-map TRANSIT-IN in
 neighbor 10.0.0.2 remote-as 65001
 neighbor 10.0.0.2 next-hop-self
 network 10.10.0.0 mask 255.255.0.0
!
router ospf 10
 router-id 10.255.0.1
 network 10.10.1.0 0.0.0.255 area 0
 network 10.10.2.0 0.0.0.255 area 0
 network 10.20.0.0 0.0.255.255 area 10
 passive-interface default
 passive-interface GigabitEthernet0/1
 redistribute static
!
ip route 0.0.0.0 0.0.0.0 203.0.113.1
ip route 192.168.50.0 255.255.255.0 10.0.0.2 250
vlan 20
vlan 30
ntp server 10.0.0.5
logging host 10.0.0.9
snmp-server community public RO
";

const JUNOS_SET: &str = "\
set system host-name edge-fw1
set system ntp server 10.0.0.5
set interfaces ge-0/0/0 description \"to core\"
set interfaces ge-0/0/0 unit 0 family inet address 10.0.0.1/30
set interfaces ge-0/0/1 disable
set protocols bgp local-as 65010
set protocols bgp group PEERS neighbor 10.0.0.2
set routing-options static route 0.0.0.0/0 next-hop 10.0.0.2
";

const JUNOS_HIERARCHICAL: &str = "\
system {
    host-name edge-fw2;
}
interfaces {
    ge-0/0/0 {
        description core-link;
        unit 0 {
            family inet {
                address 10.0.1.1/30;
            }
        }
    }
    ge-0/0/1 {
        disable;
    }
}
routing-options {
    static {
        route 0.0.0.0/0 {
            next-hop 10.0.1.2;
        }
        route 172.16.0.0/12 next-hop 10.0.1.3;
    }
}
";

fn device(id: &str, dt: DeviceType) -> Device {
    Device::new(id, dt)
}

// ── IOS ─────────────────────────────────────────────────────────────

#[test]
fn ios_hostname_and_globals() {
    let cfg = parse(
        DeviceType::CiscoIos,
        IOS_CONFIG.as_bytes(),
        device("core-r1", DeviceType::CiscoIos),
    )
    .unwrap();

    assert_eq!(cfg.device.hostname, "core-r1");
    assert_eq!(cfg.global_settings.get("hostname").unwrap(), "core-r1");
    assert_eq!(cfg.global_settings.get("ntp_server").unwrap(), "10.0.0.5");
    assert_eq!(
        cfg.global_settings.get("no_domain_lookup").unwrap(),
        "true"
    );
    assert_eq!(
        cfg.global_settings.get("enable_secret").unwrap(),
        "configured"
    );
    assert_eq!(cfg.global_settings.get("logging").unwrap(), "host 10.0.0.9");
    assert!(cfg
        .global_settings
        .iter()
        .any(|(k, v)| k.starts_with("snmp_server_") && v.contains("community public")));
}

#[test]
fn ios_interfaces() {
    let cfg = parse(
        DeviceType::CiscoIos,
        IOS_CONFIG.as_bytes(),
        device("core-r1", DeviceType::CiscoIos),
    )
    .unwrap();

    assert_eq!(cfg.interfaces.len(), 2);

    let gi0 = &cfg.interfaces[0];
    assert_eq!(gi0.name, "GigabitEthernet0/0");
    assert_eq!(gi0.description.as_deref(), Some("uplink to isp"));
    assert_eq!(gi0.ip_address.as_deref(), Some("203.0.113.2"));
    assert_eq!(gi0.subnet_mask.as_deref(), Some("255.255.255.252"));
    assert_eq!(gi0.inbound_acl.as_deref(), Some("EDGE-IN"));
    assert_eq!(gi0.mtu, Some(1500));
    assert!(!gi0.shutdown);

    let gi1 = &cfg.interfaces[1];
    assert_eq!(gi1.vlan_mode, Some(VlanMode::Access));
    assert_eq!(gi1.access_vlan, Some(20));
    assert!(gi1.stp_portfast);
    assert!(gi1.shutdown);
    // "speed 1000" is unclassified and lands in the attribute map.
    assert!(gi1.attributes.values().any(|v| v == "speed 1000"));
}

#[test]
fn ios_acl_block() {
    let cfg = parse(
        DeviceType::CiscoIos,
        IOS_CONFIG.as_bytes(),
        device("core-r1", DeviceType::CiscoIos),
    )
    .unwrap();

    assert_eq!(cfg.acls.len(), 1);
    let acl = &cfg.acls[0];
    assert_eq!(acl.name, "EDGE-IN");
    assert_eq!(acl.kind, Some(AclKind::Extended));
    assert_eq!(acl.entries.len(), 2);

    assert_eq!(acl.entries[0].sequence, Some(10));
    assert_eq!(acl.entries[0].action, Some(AclAction::Permit));
    assert_eq!(acl.entries[0].protocol.as_deref(), Some("tcp"));
    assert!(acl.entries[0].log);
    assert_eq!(acl.entries[1].action, Some(AclAction::Deny));
    assert!(!acl.entries[1].log);
}

#[test]
fn ios_bgp_block() {
    let cfg = parse(
        DeviceType::CiscoIos,
        IOS_CONFIG.as_bytes(),
        device("core-r1", DeviceType::CiscoIos),
    )
    .unwrap();

    let bgp = cfg.bgp.as_ref().unwrap();
    assert_eq!(bgp.local_as, Some(65001));
    assert_eq!(bgp.router_id.as_deref(), Some("10.255.0.1"));

    // Neighbors are merged by address, in first-seen order.
    assert_eq!(bgp.neighbors.len(), 2);
    let transit = &bgp.neighbors[0];
    assert_eq!(transit.address, "203.0.113.1");
    assert_eq!(transit.remote_as, Some(64496));
    assert_eq!(transit.description.as_deref(), Some("transit"));
    assert_eq!(transit.route_map_in.as_deref(), Some("TRANSIT-IN"));

    let ibgp = &bgp.neighbors[1];
    assert_eq!(ibgp.remote_as, Some(65001));
    assert!(ibgp.next_hop_self);

    assert_eq!(bgp.networks.len(), 1);
    assert_eq!(bgp.networks[0].prefix, "10.10.0.0");
    assert_eq!(bgp.networks[0].mask.as_deref(), Some("255.255.0.0"));
}

#[test]
fn ios_ospf_block() {
    let cfg = parse(
        DeviceType::CiscoIos,
        IOS_CONFIG.as_bytes(),
        device("core-r1", DeviceType::CiscoIos),
    )
    .unwrap();

    let ospf = cfg.ospf.as_ref().unwrap();
    assert_eq!(ospf.process_id, Some(10));
    assert_eq!(ospf.router_id.as_deref(), Some("10.255.0.1"));

    // Two networks accumulate into area 0, one into area 10.
    assert_eq!(ospf.areas.len(), 2);
    assert_eq!(ospf.areas[0].id, "0");
    assert_eq!(ospf.areas[0].networks.len(), 2);
    assert_eq!(ospf.areas[1].id, "10");

    assert!(ospf.default_passive);
    assert_eq!(ospf.passive_interfaces, vec!["GigabitEthernet0/1"]);
    assert_eq!(ospf.redistributions.len(), 1);
    assert_eq!(ospf.redistributions[0].source, "static");
}

#[test]
fn ios_static_routes_and_vlans() {
    let cfg = parse(
        DeviceType::CiscoIos,
        IOS_CONFIG.as_bytes(),
        device("core-r1", DeviceType::CiscoIos),
    )
    .unwrap();

    assert_eq!(cfg.static_routes.len(), 2);
    assert_eq!(cfg.static_routes[0].destination, "0.0.0.0/0");
    assert_eq!(cfg.static_routes[0].next_hop.as_deref(), Some("203.0.113.1"));
    assert_eq!(cfg.static_routes[1].destination, "192.168.50.0/24");
    assert_eq!(cfg.static_routes[1].admin_distance, Some(250));

    assert_eq!(cfg.vlans.len(), 2);
    assert_eq!(cfg.vlans[0].id, 20);
    assert_eq!(cfg.vlans[1].id, 30);
}

// ── NX-OS / EOS decoration ──────────────────────────────────────────

#[test]
fn nxos_decorates_global_settings() {
    let config = "\
hostname nx-leaf1
feature nxapi
feature bgp
vpc domain 100
fabric forwarding anycast-gateway-mac 0000.2222.3333
nv overlay evpn
";
    let cfg = parse(
        DeviceType::CiscoNxos,
        config.as_bytes(),
        device("nx-leaf1", DeviceType::CiscoNxos),
    )
    .unwrap();

    assert_eq!(cfg.device.device_type, DeviceType::CiscoNxos);
    assert_eq!(cfg.device.hostname, "nx-leaf1");
    assert_eq!(cfg.global_settings.get("feature_nxapi").unwrap(), "enabled");
    assert_eq!(cfg.global_settings.get("feature_bgp").unwrap(), "enabled");
    assert_eq!(cfg.global_settings.get("vpc_domain").unwrap(), "100");
    assert_eq!(
        cfg.global_settings.get("anycast_gw_mac").unwrap(),
        "0000.2222.3333"
    );
    assert_eq!(cfg.global_settings.get("evpn").unwrap(), "enabled");
}

#[test]
fn eos_decorates_global_settings() {
    let config = "\
hostname arista-leaf1
management api http-commands
daemon terminattr
mlag configuration
ip virtual-router mac-address 00:1c:73:00:00:01
interface Vxlan1
 vxlan vni 10020
";
    let cfg = parse(
        DeviceType::AristaEos,
        config.as_bytes(),
        device("arista-leaf1", DeviceType::AristaEos),
    )
    .unwrap();

    assert_eq!(cfg.device.device_type, DeviceType::AristaEos);
    assert_eq!(
        cfg.global_settings.get("management_api").unwrap(),
        "http-commands"
    );
    assert_eq!(cfg.global_settings.get("terminattr").unwrap(), "enabled");
    assert_eq!(cfg.global_settings.get("mlag").unwrap(), "configured");
    assert_eq!(
        cfg.global_settings.get("virtual_router_mac").unwrap(),
        "00:1c:73:00:00:01"
    );
    assert_eq!(cfg.global_settings.get("vxlan").unwrap(), "configured");
}

// ── JunOS ───────────────────────────────────────────────────────────

#[test]
fn junos_set_format() {
    let cfg = parse(
        DeviceType::JuniperJunos,
        JUNOS_SET.as_bytes(),
        device("edge-fw1", DeviceType::JuniperJunos),
    )
    .unwrap();

    assert_eq!(cfg.device.hostname, "edge-fw1");
    assert_eq!(cfg.global_settings.get("ntp_server").unwrap(), "10.0.0.5");

    assert_eq!(cfg.interfaces.len(), 2);
    let ge0 = cfg.interfaces.iter().find(|i| i.name == "ge-0/0/0").unwrap();
    assert_eq!(ge0.ip_address.as_deref(), Some("10.0.0.1/30"));
    let ge1 = cfg.interfaces.iter().find(|i| i.name == "ge-0/0/1").unwrap();
    assert!(ge1.shutdown);

    let bgp = cfg.bgp.as_ref().unwrap();
    assert_eq!(bgp.local_as, Some(65010));
    assert_eq!(bgp.neighbors.len(), 1);
    assert_eq!(bgp.neighbors[0].address, "10.0.0.2");

    assert_eq!(cfg.static_routes.len(), 1);
    assert_eq!(cfg.static_routes[0].destination, "0.0.0.0/0");
    assert_eq!(cfg.static_routes[0].next_hop.as_deref(), Some("10.0.0.2"));
}

#[test]
fn junos_hierarchical_format() {
    let cfg = parse(
        DeviceType::JuniperJunos,
        JUNOS_HIERARCHICAL.as_bytes(),
        device("edge-fw2", DeviceType::JuniperJunos),
    )
    .unwrap();

    assert_eq!(cfg.device.hostname, "edge-fw2");

    assert_eq!(cfg.interfaces.len(), 2);
    let ge0 = cfg.interfaces.iter().find(|i| i.name == "ge-0/0/0").unwrap();
    assert_eq!(ge0.description.as_deref(), Some("core-link"));
    assert_eq!(ge0.ip_address.as_deref(), Some("10.0.1.1/30"));
    let ge1 = cfg.interfaces.iter().find(|i| i.name == "ge-0/0/1").unwrap();
    assert!(ge1.shutdown);

    assert_eq!(cfg.static_routes.len(), 2);
    assert_eq!(cfg.static_routes[0].destination, "0.0.0.0/0");
    assert_eq!(cfg.static_routes[0].next_hop.as_deref(), Some("10.0.1.2"));
    assert_eq!(cfg.static_routes[1].destination, "172.16.0.0/12");
    assert_eq!(cfg.static_routes[1].next_hop.as_deref(), Some("10.0.1.3"));
}

// ── Totality ────────────────────────────────────────────────────────

#[test]
fn parsers_survive_arbitrary_bytes() {
    let junk: Vec<u8> = (0u8..=255).chain([b'\n', 0xff, 0x00]).collect();
    for dt in [
        DeviceType::CiscoIos,
        DeviceType::CiscoNxos,
        DeviceType::JuniperJunos,
        DeviceType::AristaEos,
    ] {
        let cfg = parse(dt, &junk, device("junk", dt)).unwrap();
        // Lines always reflect the (lossily decoded) input.
        assert_eq!(
            cfg.lines,
            netlint_model::split_config_lines(&String::from_utf8_lossy(&junk))
        );
    }
}

#[test]
fn detector_and_registry_round_trip() {
    let detector = Detector::new();
    let dt = detector.detect(IOS_CONFIG.as_bytes());
    assert_eq!(dt, DeviceType::CiscoIos);
    let cfg = parse(dt, IOS_CONFIG.as_bytes(), device("core-r1", dt)).unwrap();
    assert_eq!(cfg.device.device_type, DeviceType::CiscoIos);
}
