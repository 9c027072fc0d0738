//! Line-level drift detection between two configuration snapshots.

mod differ;
mod hash;
mod scorer;

pub use differ::{Comparator, DiffResult, LineChange, LineDiff};
pub use hash::{has_changed, snapshot_digest, HashEntry};
pub use scorer::{DriftScore, DriftScorer};
