mod common;

use aj_checker::Severity;
use aj_model::{known, Annotation, ClassName, Constructor, Modifiers, TypeKind};
use aj_processor::{AssistedInjectProcessor, RoundInput};
use common::*;

#[test]
fn simple_round_generates_one_factory() {
    let processor = AssistedInjectProcessor::new();
    let round = RoundInput::new(vec![assisted_target("test", "Test")]);
    let outcome = processor.process_round(&round);

    assert!(!outcome.has_errors());
    assert_eq!(outcome.sources.len(), 1);
    let source = &outcome.sources[0];
    assert_eq!(source.name.canonical_name(), "test.Test_AssistedFactory");
    assert_eq!(
        source.originating,
        vec![ClassName::top_level("test", "Test")]
    );
    assert!(source
        .source
        .contains("public final class Test_AssistedFactory implements Test.Factory {"));
    assert!(source.source.contains("return new Test(foo.get(), bar);"));
}

#[test]
fn constructor_argument_order_is_preserved_regardless_of_factory_order() {
    let class_name = ClassName::top_level("test", "Test");
    let mut target = empty_type(class_name.clone(), TypeKind::Class);
    target.constructors.push(assisted_constructor(vec![
        param("foo", long_type()),
        assisted_param("bar", string_type()),
        assisted_param("baz", long_type()),
    ]));
    target.nested.push(factory_interface(
        &class_name,
        vec![param("baz", long_type()), param("bar", string_type())],
    ));

    let processor = AssistedInjectProcessor::new();
    let outcome = processor.process_round(&RoundInput::new(vec![target]));
    assert!(!outcome.has_errors());
    let source = &outcome.sources[0].source;
    assert!(source.contains("public Test create(Long baz, String bar) {"));
    assert!(source.contains("return new Test(foo.get(), bar, baz);"));
}

#[test]
fn one_invalid_candidate_does_not_block_the_others() {
    let valid = assisted_target("test", "Good");
    let mut invalid = empty_type(ClassName::top_level("test", "Bad"), TypeKind::Class);
    invalid.constructors.push(assisted_constructor(vec![
        assisted_param("bar", string_type()),
    ]));
    // No nested factory: structural error for Bad only.

    let processor = AssistedInjectProcessor::new();
    let outcome = processor.process_round(&RoundInput::new(vec![invalid, valid]));
    assert_eq!(outcome.sources.len(), 1);
    assert_eq!(
        outcome.sources[0].name.canonical_name(),
        "test.Good_AssistedFactory"
    );
    let errors: Vec<_> = outcome
        .diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("No nested @AssistedInject.Factory found."));
}

#[test]
fn generated_factories_do_not_retrigger_generation() {
    let processor = AssistedInjectProcessor::new();
    let first = processor.process_round(&RoundInput::new(vec![assisted_target("test", "Test")]));
    assert_eq!(first.sources.len(), 1);

    // Feed the generated factory back in as a later round's declaration, the
    // way a round-based host would.
    let mut generated = empty_type(
        ClassName::top_level("test", "Test_AssistedFactory"),
        TypeKind::Class,
    );
    generated.constructors.push(Constructor {
        modifiers: Modifiers::default(),
        annotations: vec![Annotation::marker(known::INJECT.clone())],
        parameters: vec![param(
            "foo",
            aj_model::JavaType::parameterized(known::PROVIDER.clone(), vec![long_type()]),
        )],
        span: dummy_span(),
    });

    let second = processor.process_round(&RoundInput::new(vec![generated]));
    assert!(second.sources.is_empty());
    assert!(second.diagnostics.is_empty());
}

#[test]
fn outcome_is_independent_of_input_order() {
    let processor = AssistedInjectProcessor::new();
    let forward = processor.process_round(&RoundInput::new(vec![
        assisted_target("test", "Alpha"),
        assisted_target("test", "Beta"),
        assisted_target("test", "Gamma"),
    ]));
    let backward = processor.process_round(&RoundInput::new(vec![
        assisted_target("test", "Gamma"),
        assisted_target("test", "Beta"),
        assisted_target("test", "Alpha"),
    ]));
    assert_eq!(forward, backward);
    let names: Vec<String> = forward
        .sources
        .iter()
        .map(|source| source.name.canonical_name())
        .collect();
    assert_eq!(
        names,
        vec![
            "test.Alpha_AssistedFactory",
            "test.Beta_AssistedFactory",
            "test.Gamma_AssistedFactory",
        ]
    );
}

#[test]
fn misuse_of_assisted_is_reported_alongside_generation() {
    let mut bystander = empty_type(ClassName::top_level("test", "Bystander"), TypeKind::Class);
    bystander.constructors.push(Constructor {
        modifiers: Modifiers::default(),
        annotations: vec![Annotation::marker(known::INJECT.clone())],
        parameters: vec![assisted_param("bar", string_type())],
        span: dummy_span(),
    });

    let processor = AssistedInjectProcessor::new();
    let outcome = processor.process_round(&RoundInput::new(vec![
        assisted_target("test", "Test"),
        bystander,
    ]));
    assert_eq!(outcome.sources.len(), 1);
    assert!(outcome
        .diagnostics
        .iter()
        .any(|diagnostic| diagnostic.message.contains("does not work with @Inject")));
}
