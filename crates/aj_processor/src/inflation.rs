use crate::error::ProcessError;
use crate::round::{
    collect_annotated, generated_marker, references_generated, GeneratedSource, RoundInput,
    RoundOutcome,
};
use crate::state::ModuleState;
use aj_checker::{
    find_inflation_candidates, match_inflation, validate_inflation_candidate, Diagnostics,
};
use aj_codegen_java::{JavaCodeGenConfig, JavaCodeGenerator};
use aj_model::{
    inflation_inject_module_name, known, Annotated, ClassName, Flavor, InflationInjectionModule,
    TypeDeclaration, TypeIndex,
};
use tracing::debug;

/// Aggregating processor for the inflation-inject product line: view
/// factories plus the map-multibinding module, in one pass.
#[derive(Debug, Default, Clone)]
pub struct InflationInjectProcessor {
    codegen: JavaCodeGenerator,
    config: JavaCodeGenConfig,
    emit_generated_annotation: bool,
    index: TypeIndex,
    module_state: ModuleState,
    finished: bool,
}

impl InflationInjectProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generated_annotation() -> Self {
        Self {
            emit_generated_annotation: true,
            ..Self::default()
        }
    }

    pub fn module_state(&self) -> &ModuleState {
        &self.module_state
    }

    pub fn process_round(&mut self, round: &RoundInput) -> Result<RoundOutcome, ProcessError> {
        if self.finished {
            return Err(ProcessError::CompilationFinished);
        }
        self.index.absorb(&round.declarations);

        let mut diagnostics = Diagnostics::new();
        let mut sources = Vec::new();

        let candidates = find_inflation_candidates(&round.declarations);
        debug!(candidates = candidates.len(), "processing inflation-inject round");

        // The module binds the structurally valid candidates of this round,
        // whether or not their parameter matching succeeds.
        let mut injected_names: Vec<ClassName> = Vec::new();
        for target in candidates {
            let Some(candidate) =
                validate_inflation_candidate(target, &self.index, &mut diagnostics)
            else {
                continue;
            };
            injected_names.push(target.name.clone());
            let annotation = self
                .emit_generated_annotation
                .then(|| generated_marker(Flavor::InflationInject.processor_name()));
            let Some(injection) = match_inflation(
                candidate.target,
                candidate.constructor,
                &self.index,
                annotation,
                &mut diagnostics,
            ) else {
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

        let modules = collect_annotated(&round.declarations, &known::INFLATION_MODULE);
        if modules.len() > 1 {
            for module in &modules {
                diagnostics.error(
                    "Multiple @InflationModule-annotated modules found.",
                    Some(module.span.clone()),
                );
            }
        } else if let Some(module) = modules.first() {
            if !module.has_annotation(&known::DAGGER_MODULE) {
                diagnostics.error(
                    "@InflationModule must also be annotated as a Dagger @Module",
                    Some(module.span.clone()),
                );
            } else {
                match self.module_state.clone() {
                    ModuleState::ModuleSeen { span: prior, .. } => {
                        diagnostics.error(
                            "Multiple @InflationModule-annotated modules found.",
                            Some(prior),
                        );
                        diagnostics.error(
                            "Multiple @InflationModule-annotated modules found.",
                            Some(module.span.clone()),
                        );
                        self.module_state = ModuleState::MultipleModulesError;
                    }
                    ModuleState::AwaitingModule => {
                        self.module_state = ModuleState::ModuleSeen {
                            name: module.name.clone(),
                            span: module.span.clone(),
                        };
                        let descriptor = self.to_module_descriptor(module, injected_names.clone());
                        match self.codegen.generate_inflation_module(&descriptor) {
                            Ok(unit) => {
                                let mut originating = vec![module.name.clone()];
                                originating.extend(descriptor.injected_names.iter().cloned());
                                sources.push(GeneratedSource {
                                    name: descriptor.generated_type(),
                                    source: unit.to_source(&self.config),
                                    originating,
                                });
                            }
                            Err(error) => diagnostics.error(
                                format!("Could not write module for {}: {error}", module.name),
                                Some(module.span.clone()),
                            ),
                        }
                    }
                    _ => {}
                }
            }
        }

        Ok(RoundOutcome {
            sources,
            diagnostics: diagnostics.into_vec(),
        })
    }

    /// End-of-compilation hook: the user module must include the generated
    /// module by its exact generated name.
    pub fn finish(&mut self) -> Result<RoundOutcome, ProcessError> {
        if self.finished {
            return Err(ProcessError::CompilationFinished);
        }
        self.finished = true;

        let mut diagnostics = Diagnostics::new();
        if let ModuleState::ModuleSeen { name, .. } = self.module_state.clone() {
            if let Some(module) = self.index.get(&name) {
                let generated_name = inflation_inject_module_name(&name);
                let references = module
                    .get_annotation(&known::DAGGER_MODULE)
                    .and_then(|annotation| annotation.value_of("includes"))
                    .map(|includes| references_generated(includes, &generated_name))
                    .unwrap_or(false);
                if !references {
                    diagnostics.error(
                        format!(
                            "@InflationModule's @Module must include {}",
                            generated_name.simple_name()
                        ),
                        Some(module.span.clone()),
                    );
                }
            }
            self.module_state = ModuleState::Validated;
        }

        Ok(RoundOutcome {
            sources: Vec::new(),
            diagnostics: diagnostics.into_vec(),
        })
    }

    fn to_module_descriptor(
        &self,
        module: &TypeDeclaration,
        injected_names: Vec<ClassName>,
    ) -> InflationInjectionModule {
        let mut extra_annotations = Vec::new();
        if self.emit_generated_annotation {
            extra_annotations.push(generated_marker(Flavor::InflationInject.processor_name()));
        }
        InflationInjectionModule {
            module_name: module.name.clone(),
            public: module.modifiers.is_public(),
            injected_names,
            extra_annotations,
        }
    }
}

