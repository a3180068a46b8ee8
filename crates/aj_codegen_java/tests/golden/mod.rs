#![allow(dead_code)]

use aj_codegen_java::{JavaCodeGenConfig, JavaCodeGenerator};
use aj_model::{
    known, Annotation, AnnotationArgument, AnnotationValue, AssistedInjection, ClassName,
    DependencyRequest, Flavor, JavaType, Key, Literal, NamedKey,
};

pub fn run_case(name: &str, actual: &str, expected: &str) {
    let actual = actual.trim_end_matches('\n');
    let expected = expected.trim_end_matches('\n');
    assert_eq!(actual, expected, "golden mismatch for {name}");
}

pub fn render_factory(injection: &AssistedInjection) -> String {
    let generator = JavaCodeGenerator::new();
    let unit = generator
        .generate_factory(injection)
        .unwrap_or_else(|err| panic!("failed to render factory: {err}"));
    unit.to_source(&JavaCodeGenConfig::default())
}

pub fn render_assisted_module(module: &aj_model::AssistedInjectionModule) -> String {
    let generator = JavaCodeGenerator::new();
    let unit = generator
        .generate_assisted_module(module)
        .unwrap_or_else(|err| panic!("failed to render module: {err}"));
    unit.to_source(&JavaCodeGenConfig::default())
}

pub fn render_inflation_module(module: &aj_model::InflationInjectionModule) -> String {
    let generator = JavaCodeGenerator::new();
    let unit = generator
        .generate_inflation_module(module)
        .unwrap_or_else(|err| panic!("failed to render module: {err}"));
    unit.to_source(&JavaCodeGenConfig::default())
}

pub fn string_type() -> JavaType {
    JavaType::declared(ClassName::top_level("java.lang", "String"))
}

pub fn long_type() -> JavaType {
    JavaType::declared(ClassName::top_level("java.lang", "Long"))
}

pub fn provided(name: &str, ty: JavaType) -> DependencyRequest {
    DependencyRequest::new(Key::new(ty, None), name, false)
}

pub fn qualified_provided(name: &str, ty: JavaType, qualifier: Annotation) -> DependencyRequest {
    DependencyRequest::new(Key::new(ty, Some(qualifier)), name, false)
}

pub fn assisted(name: &str, ty: JavaType) -> DependencyRequest {
    DependencyRequest::new(Key::new(ty, None), name, true)
}

/// Build an assisted-inject descriptor for `test.Test` with its nested
/// `Factory` interface, deriving the factory keys from the assisted requests
/// in the given order.
pub fn test_injection(
    requests: Vec<DependencyRequest>,
    factory_order: &[&str],
) -> AssistedInjection {
    let target = ClassName::top_level("test", "Test");
    let assisted_keys = factory_keys(&requests, factory_order);
    AssistedInjection::new(
        Flavor::AssistedInject,
        JavaType::declared(target.clone()),
        requests,
        target.nested("Factory"),
        "create",
        JavaType::declared(target),
        assisted_keys,
        None,
    )
}

pub fn factory_keys(requests: &[DependencyRequest], order: &[&str]) -> Vec<NamedKey> {
    order
        .iter()
        .map(|name| {
            requests
                .iter()
                .find(|request| request.is_assisted && request.name == *name)
                .unwrap_or_else(|| panic!("no assisted request named {name}"))
                .named_key()
        })
        .collect()
}

pub fn generated_marker(flavor: Flavor) -> Annotation {
    Annotation::with_arguments(
        known::GENERATED.clone(),
        vec![
            AnnotationArgument::Named {
                name: "value".to_string(),
                value: AnnotationValue::Literal(Literal::String(
                    flavor.processor_name().to_string(),
                )),
            },
            AnnotationArgument::Named {
                name: "comments".to_string(),
                value: AnnotationValue::Literal(Literal::String(
                    "https://github.com/project-jvlang/aj-inject".to_string(),
                )),
            },
        ],
    )
}
