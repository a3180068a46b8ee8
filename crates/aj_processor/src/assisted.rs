use crate::round::{generated_marker, GeneratedSource, RoundInput, RoundOutcome};
use aj_checker::{check_assisted_usage, find_candidates, match_assisted, validate_candidate, Diagnostics};
use aj_codegen_java::{JavaCodeGenConfig, JavaCodeGenerator};
use aj_model::{Flavor, TypeIndex};
use tracing::debug;

/// Per-round processor for the assisted-inject product line. Every candidate
/// is handled in isolation within its round; nothing carries across rounds.
#[derive(Debug, Default, Clone)]
pub struct AssistedInjectProcessor {
    codegen: JavaCodeGenerator,
    config: JavaCodeGenConfig,
    /// Whether `javax.annotation.processing.Generated` is on the host
    /// classpath and should be recorded on emitted classes.
    emit_generated_annotation: bool,
}

impl AssistedInjectProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generated_annotation() -> Self {
        Self {
            emit_generated_annotation: true,
            ..Self::default()
        }
    }

    pub fn process_round(&self, round: &RoundInput) -> RoundOutcome {
        let index = TypeIndex::build(&round.declarations);
        let mut diagnostics = Diagnostics::new();
        let mut sources = Vec::new();

        let candidates = find_candidates(&round.declarations, &mut diagnostics);
        debug!(candidates = candidates.len(), "processing assisted-inject round");

        for target in candidates {
            let Some(candidate) = validate_candidate(target, &index, &mut diagnostics) else {
                continue;
            };
            let annotation = self
                .emit_generated_annotation
                .then(|| generated_marker(Flavor::AssistedInject.processor_name()));
            let Some(injection) = match_assisted(&candidate, &index, annotation, &mut diagnostics)
            else {
                continue;
            };
            match self.codegen.generate_factory(&injection) {
                Ok(unit) => sources.push(GeneratedSource {
                    name: injection.generated_type(),
                    source: unit.to_source(&self.config),
                    originating: vec![target.name.clone()],
                }),
                Err(error) => diagnostics.error(
                    format!("Could not write factory for {}: {error}", target.name),
                    Some(target.span.clone()),
                ),
            }
        }

        check_assisted_usage(&round.declarations, &mut diagnostics);

        RoundOutcome {
            sources,
            diagnostics: diagnostics.into_vec(),
        }
    }
}
