use aj_model::{ClassName, Span};
use serde::{Deserialize, Serialize};

/// Per-compilation module-site tracking.
///
/// `AwaitingModule → ModuleSeen → Validated` is the healthy path; a second
/// declared site anywhere in the compilation moves to `MultipleModulesError`,
/// which disables both module emission and the includes validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum ModuleState {
    #[default]
    AwaitingModule,
    ModuleSeen {
        name: ClassName,
        span: Span,
    },
    Validated,
    MultipleModulesError,
}
