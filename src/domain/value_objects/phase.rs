//! Compile phase and its indicator rendering

use serde::Serialize;

/// Where the orchestrator is in its lifecycle. Exactly one is live at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompilePhase {
    /// Startup: config discovery has not finished yet
    #[default]
    Warming,
    /// Idle and ready for the next trigger
    Watching,
    /// At least one compiler process is running
    Compiling,
    /// Last compile failed. Ready for the next trigger like `Watching`;
    /// only the indicator differs.
    Failed,
}

/// Indicator color role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Normal,
    Busy,
    Attention,
}

/// Short always-visible status plus its longer description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub text: String,
    pub detail: String,
    pub tone: Tone,
}

impl Indicator {
    pub fn new(text: impl Into<String>, detail: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            detail: detail.into(),
            tone,
        }
    }
}

impl CompilePhase {
    /// Accepts a new compile trigger without waiting.
    pub fn is_ready(&self) -> bool {
        matches!(self, CompilePhase::Watching | CompilePhase::Failed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompilePhase::Warming => "warming",
            CompilePhase::Watching => "watching",
            CompilePhase::Compiling => "compiling",
            CompilePhase::Failed => "failed",
        }
    }

    pub fn indicator(&self) -> Indicator {
        match self {
            CompilePhase::Warming => Indicator::new(
                "TS [...]",
                "TypeScript auto compiler - warming up...",
                Tone::Normal,
            ),
            CompilePhase::Watching => Indicator::new(
                "TS [ON]",
                "TypeScript auto compiler is ON - watching file changes.",
                Tone::Normal,
            ),
            CompilePhase::Compiling => Indicator::new(
                "TS [ON]",
                "TypeScript auto compiler is ON - compiling changes...",
                Tone::Busy,
            ),
            CompilePhase::Failed => Indicator::new(
                "TS [ERR]",
                "TypeScript auto compiler is ON - last compilation failed.",
                Tone::Attention,
            ),
        }
    }
}

impl std::fmt::Display for CompilePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
