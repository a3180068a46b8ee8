use thiserror::Error;

/// Error variants produced while rendering descriptors to Java source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodeGenError {
    #[error("Cannot render unresolved type: {written}")]
    UnresolvedType { written: String },

    #[error("Unsupported construct: {construct}")]
    UnsupportedConstruct { construct: String },
}
