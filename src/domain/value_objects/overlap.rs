//! Overlap policy - what happens to triggers while a compile is running

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// One compiler process at a time; triggers that arrive meanwhile collapse
    /// into a single follow-up compile.
    #[default]
    Coalesce,
    /// Every trigger launches its own compiler process immediately.
    Overlap,
}

impl OverlapPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "coalesce" => Some(OverlapPolicy::Coalesce),
            "overlap" => Some(OverlapPolicy::Overlap),
            _ => None,
        }
    }
}

impl std::fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlapPolicy::Coalesce => write!(f, "coalesce"),
            OverlapPolicy::Overlap => write!(f, "overlap"),
        }
    }
}
