//! Multi-device topology: graph construction from parsed configurations
//! and consistency analysis over the inferred adjacencies.

mod analyzer;
mod builder;
pub mod checks;
mod graph;

pub use analyzer::{AnalysisResult, Analyzer};
pub use builder::Builder;
pub use checks::{Check, Issue};
pub use graph::Graph;
