mod common;

use aj_model::{ClassName, TypeKind};
use aj_processor::{InflationInjectProcessor, ModuleState, RoundInput};
use common::*;

fn generated_module_name() -> ClassName {
    ClassName::top_level("test", "InflationInject_ViewModule")
}

#[test]
fn view_factory_and_module_are_generated_together() {
    let mut processor = InflationInjectProcessor::new();
    let round = RoundInput::new(vec![
        view_class_decl(),
        inflation_target("test", "TestView"),
        inflation_module_decl(
            ClassName::top_level("test", "ViewModule"),
            vec![generated_module_name()],
        ),
    ]);
    let outcome = processor.process_round(&round).expect("round");
    assert!(!outcome.has_errors());
    assert_eq!(outcome.sources.len(), 2);

    let factory = &outcome.sources[0];
    assert_eq!(
        factory.name.canonical_name(),
        "test.TestView_InflationFactory"
    );
    assert!(factory
        .source
        .contains("public final class TestView_InflationFactory implements ViewFactory {"));
    assert!(factory
        .source
        .contains("public View create(Context context, AttributeSet attrs) {"));
    assert!(factory
        .source
        .contains("return new TestView(context, attrs, dep.get());"));

    let module = &outcome.sources[1];
    assert_eq!(
        module.name.canonical_name(),
        "test.InflationInject_ViewModule"
    );
    assert!(module.source.contains("@StringKey(\"test.TestView\")"));
    assert!(module
        .source
        .contains("abstract ViewFactory bind_test_TestView(TestView_InflationFactory factory);"));

    let finish = processor.finish().expect("finish");
    assert!(finish.diagnostics.is_empty());
    assert_eq!(processor.module_state(), &ModuleState::Validated);
}

#[test]
fn non_view_targets_are_rejected() {
    let mut target = inflation_target("test", "NotAView");
    target.supertypes.clear();

    let mut processor = InflationInjectProcessor::new();
    let outcome = processor
        .process_round(&RoundInput::new(vec![view_class_decl(), target]))
        .expect("round");
    assert!(outcome.sources.is_empty());
    assert_eq!(
        outcome.diagnostics[0].message,
        "@InflationInject-using types must be subtypes of View"
    );
}

#[test]
fn wrong_assisted_parameters_are_rejected_with_expected_list() {
    let mut target = inflation_target("test", "TestView");
    // Drop the AttributeSet parameter.
    target.constructors[0].parameters.remove(1);

    let mut processor = InflationInjectProcessor::new();
    let outcome = processor
        .process_round(&RoundInput::new(vec![view_class_decl(), target]))
        .expect("round");
    assert!(outcome.sources.is_empty());
    let message = &outcome.diagnostics[0].message;
    assert!(message
        .starts_with("Inflation injection requires Context and AttributeSet @Assisted parameters."));
    assert!(message.contains("Found:"));
    assert!(message.contains("Expected:"));
    assert!(message.contains("android.util.AttributeSet attrs"));
}

#[test]
fn missing_include_is_reported_at_finish() {
    let mut processor = InflationInjectProcessor::new();
    processor
        .process_round(&RoundInput::new(vec![
            view_class_decl(),
            inflation_target("test", "TestView"),
            inflation_module_decl(ClassName::top_level("test", "ViewModule"), Vec::new()),
        ]))
        .expect("round");
    let finish = processor.finish().expect("finish");
    assert_eq!(finish.diagnostics.len(), 1);
    assert_eq!(
        finish.diagnostics[0].message,
        "@InflationModule's @Module must include InflationInject_ViewModule"
    );
}

#[test]
fn multiple_inflation_modules_fail() {
    let mut processor = InflationInjectProcessor::new();
    let outcome = processor
        .process_round(&RoundInput::new(vec![
            inflation_module_decl(ClassName::top_level("test", "ModuleA"), Vec::new()),
            inflation_module_decl(ClassName::top_level("test", "ModuleB"), Vec::new()),
        ]))
        .expect("round");
    assert_eq!(outcome.diagnostics.len(), 2);
    assert!(outcome.diagnostics.iter().all(|diagnostic| {
        diagnostic.message == "Multiple @InflationModule-annotated modules found."
    }));
}

#[test]
fn structurally_valid_but_mismatched_targets_still_bind_in_the_module() {
    // Matching failed (missing AttributeSet), so no factory is generated,
    // but the structurally valid candidate is still listed in the module.
    let mut broken = inflation_target("test", "BrokenView");
    broken.constructors[0].parameters.remove(1);

    let mut processor = InflationInjectProcessor::new();
    let outcome = processor
        .process_round(&RoundInput::new(vec![
            view_class_decl(),
            broken,
            inflation_module_decl(
                ClassName::top_level("test", "ViewModule"),
                vec![generated_module_name()],
            ),
        ]))
        .expect("round");
    assert_eq!(outcome.sources.len(), 1);
    assert_eq!(
        outcome.sources[0].name.canonical_name(),
        "test.InflationInject_ViewModule"
    );
    assert!(outcome.sources[0].source.contains("bind_test_BrokenView"));
    assert!(outcome.has_errors());
}

#[test]
fn nested_views_are_discovered() {
    let outer_name = ClassName::top_level("test", "Outer");
    let mut outer = empty_type(outer_name.clone(), TypeKind::Class);
    let mut inner = inflation_target("test", "unused");
    inner.name = outer_name.nested("InnerView");
    inner.enclosing_kind = Some(TypeKind::Class);
    inner.modifiers.is_static = true;
    outer.nested.push(inner);

    let mut processor = InflationInjectProcessor::new();
    let outcome = processor
        .process_round(&RoundInput::new(vec![view_class_decl(), outer]))
        .expect("round");
    assert!(!outcome.has_errors());
    assert_eq!(outcome.sources.len(), 1);
    assert_eq!(
        outcome.sources[0].name.canonical_name(),
        "test.Outer$InnerView_InflationFactory"
    );
}
