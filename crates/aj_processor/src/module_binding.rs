use crate::error::ProcessError;
use crate::round::{
    collect_annotated, generated_marker, references_generated, GeneratedSource, RoundInput,
    RoundOutcome,
};
use crate::state::ModuleState;
use aj_checker::Diagnostics;
use aj_codegen_java::{JavaCodeGenConfig, JavaCodeGenerator};
use aj_model::{
    assisted_inject_module_name, known, Annotated, Annotation, AssistedInjectionModule, ClassName,
    TypeDeclaration, TypeIndex,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Qualified name recorded in the `@Generated` marker of emitted modules.
pub const PROCESSOR_NAME: &str = "aj.inject.dagger2.processor.AssistedModuleProcessor";

/// Aggregating processor for the Dagger module of the assisted-inject
/// product line.
///
/// Factories are recorded by qualified name as rounds arrive, because the
/// round that declares the `@AssistedModule` site may come later than the
/// factories it must bind. The includes validation waits for [`finish`]:
/// in the module's own round the `@Module` includes still reference the
/// not-yet-generated type.
///
/// [`finish`]: AssistedModuleProcessor::finish
#[derive(Debug, Default, Clone)]
pub struct AssistedModuleProcessor {
    codegen: JavaCodeGenerator,
    config: JavaCodeGenConfig,
    emit_generated_annotation: bool,
    index: TypeIndex,
    factory_names: Vec<ClassName>,
    module_state: ModuleState,
    finished: bool,
}

impl AssistedModuleProcessor {
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
        for factory in collect_annotated(&round.declarations, &known::ASSISTED_INJECT_FACTORY) {
            self.factory_names.push(factory.name.clone());
        }
        debug!(
            factories = self.factory_names.len(),
            "processing assisted-module round"
        );

        let mut diagnostics = Diagnostics::new();
        let mut sources = Vec::new();

        let modules = collect_annotated(&round.declarations, &known::ASSISTED_MODULE);
        if modules.len() > 1 {
            for module in &modules {
                diagnostics.error(
                    "Multiple @AssistedModule-annotated modules found.",
                    Some(module.span.clone()),
                );
            }
        } else if let Some(module) = modules.first() {
            if !module.has_annotation(&known::DAGGER_MODULE) {
                diagnostics.error(
                    "@AssistedModule must also be annotated as a Dagger @Module",
                    Some(module.span.clone()),
                );
            } else {
                match self.module_state.clone() {
                    ModuleState::ModuleSeen { span: prior, .. } => {
                        diagnostics.error(
                            "Multiple @AssistedModule-annotated modules found.",
                            Some(prior),
                        );
                        diagnostics.error(
                            "Multiple @AssistedModule-annotated modules found.",
                            Some(module.span.clone()),
                        );
                        self.module_state = ModuleState::MultipleModulesError;
                    }
                    ModuleState::AwaitingModule => {
                        self.module_state = ModuleState::ModuleSeen {
                            name: module.name.clone(),
                            span: module.span.clone(),
                        };
                        let descriptor = self.to_module_descriptor(module);
                        match self.codegen.generate_assisted_module(&descriptor) {
                            Ok(unit) => {
                                let mut originating = vec![module.name.clone()];
                                originating.extend(descriptor.bindings.keys().cloned());
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

    /// End-of-compilation hook: validate that the user module references the
    /// generated module, or omits it when `@InstallIn` takes over. Runs
    /// against a fresh lookup of the module declaration so includes that
    /// were unresolved in the module's own round are seen resolved.
    pub fn finish(&mut self) -> Result<RoundOutcome, ProcessError> {
        if self.finished {
            return Err(ProcessError::CompilationFinished);
        }
        self.finished = true;

        let mut diagnostics = Diagnostics::new();
        if let ModuleState::ModuleSeen { name, .. } = self.module_state.clone() {
            if let Some(module) = self.index.get(&name) {
                let generated_name = assisted_inject_module_name(&name);
                let references = module
                    .get_annotation(&known::DAGGER_MODULE)
                    .and_then(|annotation| annotation.value_of("includes"))
                    .map(|includes| references_generated(includes, &generated_name))
                    .unwrap_or(false);
                if module.has_annotation(&known::INSTALL_IN) {
                    if references {
                        diagnostics.error(
                            format!(
                                "@AssistedModule's @Module must not include {} if @InstallIn is used",
                                generated_name.simple_name()
                            ),
                            Some(module.span.clone()),
                        );
                    }
                } else if !references {
                    diagnostics.error(
                        format!(
                            "@AssistedModule's @Module must include {}",
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

    fn to_module_descriptor(&self, module: &TypeDeclaration) -> AssistedInjectionModule {
        let mut bindings = BTreeMap::new();
        for factory_name in &self.factory_names {
            // Factories without an enclosing type are malformed; the
            // assisted-inject processor reports those.
            if let Some(target) = factory_name.enclosing() {
                bindings.insert(target, factory_name.clone());
            }
        }
        let mut extra_annotations = Vec::new();
        if self.emit_generated_annotation {
            extra_annotations.push(generated_marker(PROCESSOR_NAME));
        }
        if let Some(install_in) = module.get_annotation(&known::INSTALL_IN) {
            // Mirror @InstallIn so the generated module lands in the same
            // Hilt component as the user's.
            extra_annotations.push(install_in.clone());
        } else if self.index.contains(&known::DISABLE_INSTALL_IN_CHECK) {
            extra_annotations.push(Annotation::marker(known::DISABLE_INSTALL_IN_CHECK.clone()));
        }
        AssistedInjectionModule {
            module_name: module.name.clone(),
            public: module.modifiers.is_public(),
            bindings,
            extra_annotations,
        }
    }
}

