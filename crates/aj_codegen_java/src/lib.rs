// aj_codegen_java - Java source rendering for generated factories and modules
//! Rendering half of the aj-inject pipeline.
//!
//! Consumes validated descriptors from `aj_model` and renders compilable Java
//! compilation units: one factory class per injection, one module class per
//! compilation. Rendering is deterministic; identical descriptors always
//! produce byte-identical source.

pub mod builder;
pub mod config;
pub mod error;
pub mod factory;
pub mod imports;
pub mod module;

pub use builder::{JavaCompilationUnit, JavaSourceBuilder};
pub use config::JavaCodeGenConfig;
pub use error::CodeGenError;
pub use imports::ImportManager;

use aj_model::{AssistedInjection, AssistedInjectionModule, InflationInjectionModule};

/// Facade over the individual generators, holding shared configuration.
#[derive(Debug, Default, Clone)]
pub struct JavaCodeGenerator {
    config: JavaCodeGenConfig,
}

impl JavaCodeGenerator {
    pub fn new() -> Self {
        Self::with_config(JavaCodeGenConfig::default())
    }

    pub fn with_config(config: JavaCodeGenConfig) -> Self {
        Self { config }
    }

    pub fn generate_factory(
        &self,
        injection: &AssistedInjection,
    ) -> Result<JavaCompilationUnit, CodeGenError> {
        factory::generate_factory(injection, &self.config)
    }

    pub fn generate_assisted_module(
        &self,
        module: &AssistedInjectionModule,
    ) -> Result<JavaCompilationUnit, CodeGenError> {
        module::generate_assisted_module(module, &self.config)
    }

    pub fn generate_inflation_module(
        &self,
        module: &InflationInjectionModule,
    ) -> Result<JavaCompilationUnit, CodeGenError> {
        module::generate_inflation_module(module, &self.config)
    }
}
