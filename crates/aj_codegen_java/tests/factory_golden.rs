mod golden;

use aj_model::{
    known, Annotation, AssistedInjection, ClassName, Flavor, JavaType, Primitive,
};
use golden::*;

#[test]
fn simple_factory_golden() {
    let injection = test_injection(
        vec![
            provided("foo", long_type()),
            assisted("bar", string_type()),
        ],
        &["bar"],
    );
    run_case(
        "factory_simple",
        &render_factory(&injection),
        include_str!("golden/expected/factory_simple.java"),
    );
}

#[test]
fn qualified_provided_parameter_golden() {
    let injection = test_injection(
        vec![
            qualified_provided(
                "foo",
                string_type(),
                Annotation::marker(ClassName::top_level("test", "Id")),
            ),
            assisted("bar", string_type()),
        ],
        &["bar"],
    );
    run_case(
        "factory_qualified",
        &render_factory(&injection),
        include_str!("golden/expected/factory_qualified.java"),
    );
}

#[test]
fn provider_typed_dependency_is_not_double_wrapped() {
    let provider_of_string =
        JavaType::parameterized(known::PROVIDER.clone(), vec![string_type()]);
    let injection = test_injection(
        vec![
            provided("foo", provider_of_string),
            assisted("bar", string_type()),
        ],
        &["bar"],
    );
    run_case(
        "factory_provider_passthrough",
        &render_factory(&injection),
        include_str!("golden/expected/factory_provider_passthrough.java"),
    );
}

#[test]
fn generic_target_propagates_type_variables() {
    let target = ClassName::top_level("test", "Test");
    let target_type =
        JavaType::parameterized(target.clone(), vec![JavaType::Variable("T".to_string())]);
    let requests = vec![
        provided("foo", long_type()),
        assisted("bar", JavaType::Variable("T".to_string())),
    ];
    let assisted_keys = factory_keys(&requests, &["bar"]);
    let injection = AssistedInjection::new(
        Flavor::AssistedInject,
        target_type.clone(),
        requests,
        target.nested("Factory"),
        "create",
        target_type,
        assisted_keys,
        None,
    );
    run_case(
        "factory_generic",
        &render_factory(&injection),
        include_str!("golden/expected/factory_generic.java"),
    );
}

#[test]
fn constructor_order_wins_over_factory_order() {
    let injection = test_injection(
        vec![
            provided("foo", long_type()),
            assisted("bar", string_type()),
            assisted("baz", long_type()),
        ],
        &["baz", "bar"],
    );
    run_case(
        "factory_parameter_order",
        &render_factory(&injection),
        include_str!("golden/expected/factory_parameter_order.java"),
    );
}

#[test]
fn primitive_dependency_boxes_inside_provider() {
    let injection = test_injection(
        vec![
            provided("count", JavaType::Primitive(Primitive::Int)),
            assisted("bar", string_type()),
        ],
        &["bar"],
    );
    run_case(
        "factory_primitive",
        &render_factory(&injection),
        include_str!("golden/expected/factory_primitive.java"),
    );
}

#[test]
fn nested_target_flattens_with_reflection_nesting() {
    let target = ClassName::top_level("com.example", "Outer").nested("Inner");
    let requests = vec![
        provided("foo", long_type()),
        assisted("bar", string_type()),
    ];
    let assisted_keys = factory_keys(&requests, &["bar"]);
    let injection = AssistedInjection::new(
        Flavor::AssistedInject,
        JavaType::declared(target.clone()),
        requests,
        target.nested("Factory"),
        "create",
        JavaType::declared(target),
        assisted_keys,
        None,
    );
    run_case(
        "factory_nested",
        &render_factory(&injection),
        include_str!("golden/expected/factory_nested.java"),
    );
}

#[test]
fn generated_marker_renders_above_the_class() {
    let target = ClassName::top_level("test", "Test");
    let requests = vec![
        provided("foo", long_type()),
        assisted("bar", string_type()),
    ];
    let assisted_keys = factory_keys(&requests, &["bar"]);
    let injection = AssistedInjection::new(
        Flavor::AssistedInject,
        JavaType::declared(target.clone()),
        requests,
        target.nested("Factory"),
        "create",
        JavaType::declared(target),
        assisted_keys,
        Some(generated_marker(Flavor::AssistedInject)),
    );
    run_case(
        "factory_generated_marker",
        &render_factory(&injection),
        include_str!("golden/expected/factory_generated_marker.java"),
    );
}

#[test]
fn inflation_factory_golden() {
    let target = ClassName::top_level("test", "TestView");
    let requests = vec![
        assisted("context", JavaType::declared(known::CONTEXT.clone())),
        assisted("attrs", JavaType::declared(known::ATTRIBUTE_SET.clone())),
        provided("dep", long_type()),
    ];
    let assisted_keys = factory_keys(&requests, &["context", "attrs"]);
    let injection = AssistedInjection::new(
        Flavor::InflationInject,
        JavaType::declared(target),
        requests,
        known::VIEW_FACTORY.clone(),
        "create",
        JavaType::declared(known::VIEW.clone()),
        assisted_keys,
        None,
    );
    run_case(
        "factory_inflation",
        &render_factory(&injection),
        include_str!("golden/expected/factory_inflation.java"),
    );
}

#[test]
fn covariant_declared_return_is_preserved() {
    let target = ClassName::top_level("test", "Test");
    let base = ClassName::top_level("test", "Base");
    let requests = vec![
        provided("foo", long_type()),
        assisted("bar", string_type()),
    ];
    let assisted_keys = factory_keys(&requests, &["bar"]);
    let injection = AssistedInjection::new(
        Flavor::AssistedInject,
        JavaType::declared(target.clone()),
        requests,
        target.nested("Factory"),
        "create",
        JavaType::declared(base),
        assisted_keys,
        None,
    );
    let rendered = render_factory(&injection);
    assert!(rendered.contains("public Base create(String bar) {"));
    assert!(rendered.contains("return new Test(foo.get(), bar);"));
}

#[test]
fn unresolved_types_refuse_to_render() {
    let injection = test_injection(
        vec![
            provided("foo", JavaType::Error("Missing".to_string())),
            assisted("bar", string_type()),
        ],
        &["bar"],
    );
    let generator = aj_codegen_java::JavaCodeGenerator::new();
    let error = generator.generate_factory(&injection).unwrap_err();
    assert_eq!(
        error,
        aj_codegen_java::CodeGenError::UnresolvedType {
            written: "Missing".to_string()
        }
    );
}
