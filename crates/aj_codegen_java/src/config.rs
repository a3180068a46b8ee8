use serde::{Deserialize, Serialize};

/// Configuration options that drive Java code generation behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JavaCodeGenConfig {
    /// Indentation string used when pretty-printing generated Java.
    pub indent: String,
}

impl Default for JavaCodeGenConfig {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
        }
    }
}
