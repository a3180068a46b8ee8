use crate::annotation::Annotation;
use crate::key::{DependencyRequest, NamedKey};
use crate::known;
use crate::types::{ClassName, JavaType};
use serde::{Deserialize, Serialize};

/// The two factory product lines. They share the generation algorithm and
/// differ in naming, file comments, and the module shape built on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flavor {
    AssistedInject,
    InflationInject,
}

impl Flavor {
    pub fn factory_suffix(self) -> &'static str {
        match self {
            Flavor::AssistedInject => "_AssistedFactory",
            Flavor::InflationInject => "_InflationFactory",
        }
    }

    pub fn file_comment(self) -> &'static str {
        match self {
            Flavor::AssistedInject => "Generated by @AssistedInject. Do not modify!",
            Flavor::InflationInject => "Generated by @InflationInject. Do not modify!",
        }
    }

    /// Qualified processor name recorded in the `@Generated` marker.
    pub fn processor_name(self) -> &'static str {
        match self {
            Flavor::AssistedInject => "aj.inject.processor.AssistedInjectProcessor",
            Flavor::InflationInject => "aj.inject.inflation.processor.InflationInjectProcessor",
        }
    }
}

/// Factory class name for a target: a top-level peer with `$`-joined nesting
/// prefixes and the flavor suffix.
pub fn factory_name(target: &ClassName, flavor: Flavor) -> ClassName {
    target.peer_with_reflection_nesting(&format!(
        "{}{}",
        target.simple_name(),
        flavor.factory_suffix()
    ))
}

/// True for a parameterized `javax.inject.Provider` reference.
pub fn is_provider(ty: &JavaType) -> bool {
    match ty {
        JavaType::Declared { name, type_args } => {
            name == &*known::PROVIDER && type_args.len() == 1
        }
        _ => false,
    }
}

/// The validated structure of one assisted injection factory, ready for code
/// generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistedInjection {
    pub flavor: Flavor,
    /// The type instantiated inside the factory.
    pub target_type: JavaType,
    /// One request per constructor parameter, in declaration order. This
    /// order is the argument order of the generated constructor call.
    pub dependency_requests: Vec<DependencyRequest>,
    /// The factory interface being implemented.
    pub factory_type: ClassName,
    /// Name of the factory's single abstract method.
    pub factory_method: String,
    /// Declared return type of the factory method. The target type must be
    /// assignable to it; the generated override keeps the declared type.
    pub return_type: JavaType,
    /// Assisted keys in the factory method's declared parameter order, which
    /// may differ from the constructor's.
    pub assisted_keys: Vec<NamedKey>,
    /// Optional `@Generated` marker mirrored onto the factory class.
    pub generated_annotation: Option<Annotation>,
}

impl AssistedInjection {
    /// Assembles the descriptor. The assisted keys must be exactly the keys
    /// of the assisted dependency requests, order aside.
    pub fn new(
        flavor: Flavor,
        target_type: JavaType,
        dependency_requests: Vec<DependencyRequest>,
        factory_type: ClassName,
        factory_method: &str,
        return_type: JavaType,
        assisted_keys: Vec<NamedKey>,
        generated_annotation: Option<Annotation>,
    ) -> Self {
        let mut request_keys: Vec<NamedKey> = dependency_requests
            .iter()
            .filter(|request| request.is_assisted)
            .map(DependencyRequest::named_key)
            .collect();
        request_keys.sort();
        let mut declared_keys = assisted_keys.clone();
        declared_keys.sort();
        assert!(
            request_keys == declared_keys,
            "assistedKeys must contain the same elements as the assisted dependencyRequests.\n\
             * assistedKeys: {declared_keys:?}\n\
             * assisted dependencyRequests: {request_keys:?}"
        );

        Self {
            flavor,
            target_type,
            dependency_requests,
            factory_type,
            factory_method: factory_method.to_string(),
            return_type,
            assisted_keys,
            generated_annotation,
        }
    }

    /// Name of the class generated from this descriptor.
    pub fn generated_type(&self) -> ClassName {
        let raw = self
            .target_type
            .raw_class_name()
            .expect("target type of a validated injection is always a declared type");
        factory_name(raw, self.flavor)
    }

    /// The container-supplied subset, in constructor order.
    pub fn provided_requests(&self) -> impl Iterator<Item = &DependencyRequest> {
        self.dependency_requests
            .iter()
            .filter(|request| !request.is_assisted)
    }

    /// Field/parameter type for a provided request: the dependency type
    /// wrapped in `Provider` (boxed if primitive), except when the dependency
    /// already is a `Provider`, which is never double-wrapped.
    pub fn provider_type(request: &DependencyRequest) -> JavaType {
        let ty = request.key.ty();
        if is_provider(ty) {
            ty.clone()
        } else {
            JavaType::parameterized(known::PROVIDER.clone(), vec![ty.boxed()])
        }
    }
}
