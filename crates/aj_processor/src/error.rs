use thiserror::Error;

/// Host-contract violations. Ordinary validation problems are diagnostics,
/// not errors; these only fire when the host drives a processor incorrectly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    #[error("compilation already finished; no further rounds are accepted")]
    CompilationFinished,
}
