//! AnalyzeThoughtHandler - Query handler pairing a thought with the
//! cognitive distortion catalog.
//!
//! The thought itself is not inspected; it is echoed back so the user can
//! compare it against the examples.

use std::collections::BTreeMap;

use crate::domain::support::distortion_catalog;

#[derive(Debug, Clone, Default)]
pub struct AnalyzeThoughtQuery {
    pub thought: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThoughtAnalysis {
    pub thought: Option<String>,
    pub cognitive_distortions: &'static BTreeMap<&'static str, &'static str>,
}

pub type AnalyzeThoughtResult = ThoughtAnalysis;

#[derive(Debug, Clone, Default)]
pub struct AnalyzeThoughtHandler;

impl AnalyzeThoughtHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: AnalyzeThoughtQuery) -> AnalyzeThoughtResult {
        ThoughtAnalysis {
            thought: query.thought,
            cognitive_distortions: distortion_catalog(),
        }
    }
}
