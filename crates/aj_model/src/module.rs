use crate::annotation::Annotation;
use crate::types::ClassName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Generated-module name for the Dagger variant: simple names joined with
/// `_` under an `AssistedInject_` prefix, emitted as a top-level peer.
pub fn assisted_inject_module_name(module: &ClassName) -> ClassName {
    ClassName {
        package: module.package.clone(),
        simple_names: vec![format!("AssistedInject_{}", module.simple_names.join("_"))],
    }
}

/// Generated-module name for the inflation variant.
pub fn inflation_inject_module_name(module: &ClassName) -> ClassName {
    module.peer_with_reflection_nesting(&format!("InflationInject_{}", module.simple_name()))
}

/// The structure of the generated Dagger module: one `@Binds` method per
/// factory, keyed and sorted by target name for reproducible output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistedInjectionModule {
    pub module_name: ClassName,
    pub public: bool,
    /// Target type to user-declared factory interface.
    pub bindings: BTreeMap<ClassName, ClassName>,
    /// Extra markers mirrored onto the generated class, e.g. `@Generated`
    /// or the user module's `@InstallIn`.
    pub extra_annotations: Vec<Annotation>,
}

impl AssistedInjectionModule {
    pub fn generated_type(&self) -> ClassName {
        assisted_inject_module_name(&self.module_name)
    }
}

/// The structure of the generated inflation module: one map binding per
/// injected view, keyed by the view's binary name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationInjectionModule {
    pub module_name: ClassName,
    pub public: bool,
    pub injected_names: Vec<ClassName>,
    pub extra_annotations: Vec<Annotation>,
}

impl InflationInjectionModule {
    pub fn generated_type(&self) -> ClassName {
        inflation_inject_module_name(&self.module_name)
    }
}
