// ── Snapshot digests ──

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// SHA-256 digest of a device configuration snapshot, for cheap
/// equality checks before running the differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashEntry {
    pub device_id: String,
    /// Hex-encoded SHA-256 of the raw configuration bytes.
    pub hash: String,
}

/// Compute the digest entry for a raw snapshot.
pub fn snapshot_digest(device_id: &str, data: &[u8]) -> HashEntry {
    let digest = Sha256::digest(data);
    HashEntry {
        device_id: device_id.to_owned(),
        hash: format!("{digest:x}"),
    }
}

/// Whether a device's configuration changed between two snapshots.
/// Equal hashes mean the differ can be skipped entirely.
pub fn has_changed(baseline: &HashEntry, current: &HashEntry) -> bool {
    baseline.hash != current.hash
}
