// ── Set-based line diff ──
//
// Not an LCS diff: only set membership matters. Reordering identical
// lines yields an empty diff, and the output cannot be applied as a
// patch.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use netlint_model::split_config_lines;

/// Direction of a line-level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LineChange {
    Added,
    Removed,
}

/// A single changed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    #[serde(rename = "type")]
    pub change: LineChange,
    /// The configuration line text.
    pub line: String,
    /// Line number in the side the line appears on: the current config
    /// for additions, the baseline for removals. Counted over the split
    /// (non-empty) lines, 1-based.
    pub line_number: usize,
}

/// Full set of differences between two raw configurations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffResult {
    /// The device the snapshots belong to.
    pub device_id: String,
    /// Lines present in current but absent from baseline.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub added: Vec<LineDiff>,
    /// Lines present in baseline but absent from current.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub removed: Vec<LineDiff>,
    pub has_changes: bool,
}

impl fmt::Display for DiffResult {
    /// Unified-diff-flavoured rendering for humans.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- baseline/{}", self.device_id)?;
        writeln!(f, "+++ current/{}", self.device_id)?;
        for r in &self.removed {
            writeln!(f, "-{}", r.line)?;
        }
        for a in &self.added {
            writeln!(f, "+{}", a.line)?;
        }
        Ok(())
    }
}

/// Computes line-level diffs between two raw configuration snapshots.
#[derive(Debug, Default)]
pub struct Comparator;

impl Comparator {
    pub fn new() -> Self {
        Self
    }

    /// Produce a [`DiffResult`] between the two snapshots. Both sides go
    /// through the same splitter the parsers use.
    pub fn compare(&self, device_id: &str, baseline: &[u8], current: &[u8]) -> DiffResult {
        let base_lines = split_config_lines(&String::from_utf8_lossy(baseline));
        let curr_lines = split_config_lines(&String::from_utf8_lossy(current));

        let base_set: HashSet<&str> = base_lines.iter().map(String::as_str).collect();
        let curr_set: HashSet<&str> = curr_lines.iter().map(String::as_str).collect();

        let removed = base_lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !curr_set.contains(line.as_str()))
            .map(|(i, line)| LineDiff {
                change: LineChange::Removed,
                line: line.clone(),
                line_number: i + 1,
            })
            .collect::<Vec<_>>();

        let added = curr_lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !base_set.contains(line.as_str()))
            .map(|(i, line)| LineDiff {
                change: LineChange::Added,
                line: line.clone(),
                line_number: i + 1,
            })
            .collect::<Vec<_>>();

        DiffResult {
            device_id: device_id.to_owned(),
            has_changes: !added.is_empty() || !removed.is_empty(),
            added,
            removed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_have_no_changes() {
        let cfg = b"hostname R1\nip ssh version 2\n";
        let diff = Comparator::new().compare("R1", cfg, cfg);
        assert!(!diff.has_changes);
        assert!(diff.added.is_empty());
        assert!(diff.removed.is_empty());
    }

    #[test]
    fn reordered_lines_yield_an_empty_diff() {
        let baseline = b"a\nb\nc\n";
        let current = b"c\na\nb\n";
        let diff = Comparator::new().compare("R1", baseline, current);
        assert!(!diff.has_changes);
    }

    #[test]
    fn duplicate_lines_only_count_by_set_presence() {
        let baseline = b"line x\nline x\n";
        let current = b"line x\n";
        let diff = Comparator::new().compare("R1", baseline, current);
        assert!(!diff.has_changes);
    }

    #[test]
    fn added_and_removed_carry_side_local_line_numbers() {
        let baseline = b"hostname R1\nip ssh version 2\nntp server 10.0.0.1\n";
        let current = b"hostname R1\nip ssh version 2\nlogging host 10.0.0.2\n";
        let diff = Comparator::new().compare("R1", baseline, current);

        assert!(diff.has_changes);
        assert_eq!(diff.removed.len(), 1);
        assert_eq!(diff.removed[0].line, "ntp server 10.0.0.1");
        assert_eq!(diff.removed[0].line_number, 3);
        assert_eq!(diff.added.len(), 1);
        assert_eq!(diff.added[0].line, "logging host 10.0.0.2");
        assert_eq!(diff.added[0].line_number, 3);
    }

    #[test]
    fn diff_is_symmetric_by_line_text() {
        let a = b"one\ntwo\nthree\n";
        let b = b"two\nfour\n";
        let c = Comparator::new();
        let forward = c.compare("d", a, b);
        let backward = c.compare("d", b, a);

        let fwd_added: Vec<&str> = forward.added.iter().map(|d| d.line.as_str()).collect();
        let bwd_removed: Vec<&str> = backward.removed.iter().map(|d| d.line.as_str()).collect();
        assert_eq!(fwd_added, bwd_removed);

        let fwd_removed: Vec<&str> = forward.removed.iter().map(|d| d.line.as_str()).collect();
        let bwd_added: Vec<&str> = backward.added.iter().map(|d| d.line.as_str()).collect();
        assert_eq!(fwd_removed, bwd_added);
    }

    #[test]
    fn display_renders_unified_diff_shape() {
        let diff = Comparator::new().compare("R1", b"gone\n", b"new\n");
        let text = diff.to_string();
        assert!(text.contains("--- baseline/R1"));
        assert!(text.contains("+++ current/R1"));
        assert!(text.contains("-gone"));
        assert!(text.contains("+new"));
    }
}
