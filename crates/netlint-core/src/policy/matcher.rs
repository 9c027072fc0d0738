// ── Match primitives ──

use std::collections::HashMap;

use regex::Regex;
use thiserror::Error;

use netlint_model::ConfigModel;

use super::rule::MatchSpec;

/// Errors surfaced by the matcher. These mark the offending rule as
/// ERROR during evaluation; they never abort the engine.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("match spec has no condition")]
    EmptySpec,

    #[error("invalid regex '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },
}

/// Evaluates a [`MatchSpec`] against a configuration's line surface.
/// Regex patterns are compiled on first use and memoised for the
/// lifetime of the Matcher.
#[derive(Debug, Default)]
pub struct Matcher {
    cache: HashMap<String, Regex>,
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the spec's condition holds for the configuration. The
    /// primitives are checked in declaration order; the first populated
    /// field wins.
    pub fn matches(&mut self, spec: &MatchSpec, cfg: &ConfigModel) -> Result<bool, MatchError> {
        if let Some(text) = populated(&spec.contains) {
            return Ok(cfg.lines.iter().any(|l| l.contains(text)));
        }
        if let Some(text) = populated(&spec.not_contains) {
            return Ok(!cfg.lines.iter().any(|l| l.contains(text)));
        }
        if let Some(pattern) = populated(&spec.regex) {
            let re = self.compile(pattern)?;
            return Ok(cfg.lines.iter().any(|l| re.is_match(l)));
        }
        if let Some(prefix) = populated(&spec.required_block) {
            return Ok(cfg.lines.iter().any(|l| l.starts_with(prefix)));
        }
        Err(MatchError::EmptySpec)
    }

    fn compile(&mut self, pattern: &str) -> Result<&Regex, MatchError> {
        if !self.cache.contains_key(pattern) {
            let re = Regex::new(pattern).map_err(|source| MatchError::InvalidRegex {
                pattern: pattern.to_owned(),
                source: Box::new(source),
            })?;
            self.cache.insert(pattern.to_owned(), re);
        }
        Ok(&self.cache[pattern])
    }
}

/// An empty string counts as an unset field.
fn populated(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
