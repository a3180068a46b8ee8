// aj_processor - Round-based entry points for assisted injection processing
//! Orchestration layer of the aj-inject pipeline.
//!
//! A host drives one processor instance per compilation, feeding it discrete
//! rounds of newly-resolvable declarations and collecting generated sources
//! and diagnostics from each. Cross-round state (factories seen so far, the
//! module site) lives on the processor value itself: constructed at
//! compilation start, consumed by [`finish`] when the host signals that no
//! further rounds will come.
//!
//! [`finish`]: AssistedModuleProcessor::finish

pub mod assisted;
pub mod error;
pub mod inflation;
pub mod module_binding;
pub mod round;
pub mod state;

pub use assisted::AssistedInjectProcessor;
pub use error::ProcessError;
pub use inflation::InflationInjectProcessor;
pub use module_binding::AssistedModuleProcessor;
pub use round::{GeneratedSource, RoundInput, RoundOutcome};
pub use state::ModuleState;
