// ── Platform detection ──
//
// Purely textual fingerprinting -- no parse is attempted. Checks are
// ordered and first-match-wins: NX-OS before IOS because NX-OS configs
// satisfy most IOS fingerprints too.

use netlint_model::DeviceType;

/// Identifies the vendor/platform dialect of raw configuration text.
#[derive(Debug, Default)]
pub struct Detector;

impl Detector {
    pub fn new() -> Self {
        Self
    }

    /// Examine raw configuration bytes and return the most likely
    /// platform. Returns [`DeviceType::Unknown`] when no fingerprint
    /// matches; the pipeline then fails upstream since no parser is
    /// registered for it.
    pub fn detect(&self, data: &[u8]) -> DeviceType {
        let text = String::from_utf8_lossy(data);
        let content = text.to_lowercase();

        // Cisco NX-OS directives first.
        if content.contains("nxos")
            || content.contains("feature nxapi")
            || content.contains("vpc domain")
            || content.contains("fabric forwarding")
        {
            return DeviceType::CiscoNxos;
        }

        // Cisco IOS / IOS-XE.
        if has_any_prefix(
            &content,
            &[
                "version ",
                "service timestamps",
                "ip cef",
                "ip routing",
                "no ip domain-lookup",
            ],
        ) || content.contains("cisco ios")
        {
            return DeviceType::CiscoIos;
        }

        // Juniper JunOS: brace hierarchy or set-format statements.
        if content.contains("system {")
            || content.contains("interfaces {")
            || content.contains("protocols {")
            || has_any_prefix(&content, &["set system", "set interfaces", "set protocols"])
        {
            return DeviceType::JuniperJunos;
        }

        // Arista EOS.
        if content.contains("arista")
            || content.contains("eos")
            || content.contains("management api http-commands")
            || content.contains("daemon terminattr")
        {
            return DeviceType::AristaEos;
        }

        DeviceType::Unknown
    }
}

/// Whether any line (leading whitespace trimmed) starts with one of the
/// given prefixes. `content` is already lowercased.
fn has_any_prefix(content: &str, prefixes: &[&str]) -> bool {
    content
        .lines()
        .map(str::trim_start)
        .any(|line| prefixes.iter().any(|p| line.starts_with(p)))
}
