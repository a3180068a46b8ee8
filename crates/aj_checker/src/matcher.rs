use crate::diagnostics::Diagnostics;
use crate::discovery::Candidate;
use aj_model::{
    known, Annotation, AssistedInjection, Constructor, DependencyRequest, Flavor, JavaType, Key,
    NamedKey, TypeDeclaration, TypeIndex,
};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// The fixed assisted parameter set every inflation-injected view constructor
/// must declare.
static INFLATION_FACTORY_KEYS: Lazy<Vec<NamedKey>> = Lazy::new(|| {
    vec![
        NamedKey::new(
            Key::new(JavaType::declared(known::CONTEXT.clone()), None),
            "context",
        ),
        NamedKey::new(
            Key::new(JavaType::declared(known::ATTRIBUTE_SET.clone()), None),
            "attrs",
        ),
    ]
});

pub fn inflation_factory_keys() -> &'static [NamedKey] {
    &INFLATION_FACTORY_KEYS
}

/// Reconcile a validated candidate's constructor parameters against its
/// factory method and produce the generation descriptor.
///
/// Keys whose type is unique on both sides are renamed to the factory's
/// parameter name before comparison, so cosmetically different names match.
/// When several parameters share a type, no renaming happens and names must
/// match exactly; type alone cannot say which parameter is which.
pub fn match_assisted(
    candidate: &Candidate<'_>,
    index: &TypeIndex,
    generated_annotation: Option<Annotation>,
    diagnostics: &mut Diagnostics,
) -> Option<AssistedInjection> {
    let mut valid = true;
    let constructor_span = Some(candidate.constructor.span.clone());

    let requests: Vec<DependencyRequest> = candidate
        .constructor
        .parameters
        .iter()
        .map(|parameter| DependencyRequest::from_parameter(parameter, index))
        .collect();
    let assisted: Vec<&DependencyRequest> =
        requests.iter().filter(|request| request.is_assisted).collect();
    let provided: Vec<&DependencyRequest> =
        requests.iter().filter(|request| !request.is_assisted).collect();

    if assisted.is_empty() {
        diagnostics.warn(
            "Assisted injection without at least one @Assisted parameter can use @Inject",
            constructor_span.clone(),
        );
    }
    if provided.is_empty() {
        diagnostics.warn(
            "Assisted injection without at least one non-@Assisted parameter doesn't need a factory",
            constructor_span.clone(),
        );
    }
    if report_duplicate_provided(&provided, constructor_span.clone(), diagnostics) {
        valid = false;
    }

    let expected_keys: Vec<NamedKey> = assisted
        .iter()
        .map(|request| request.named_key())
        .collect();
    let factory_keys: Vec<NamedKey> = candidate
        .factory_method
        .parameters
        .iter()
        .map(|parameter| NamedKey::from_parameter(parameter, index))
        .collect();

    // Rename single-occurrence keys to the factory's names so those pairs
    // match regardless of what the constructor called them.
    let single_expected = single_occurrence(&expected_keys);
    let single_factory = single_occurrence(&factory_keys);
    let mut renames: BTreeMap<NamedKey, NamedKey> = BTreeMap::new();
    for expected in single_expected {
        if let Some(matching) = single_factory
            .iter()
            .find(|factory| factory.key == expected.key)
        {
            renames.insert(expected.clone(), (*matching).clone());
        }
    }

    let mut renamed_expected: Vec<NamedKey> = expected_keys
        .iter()
        .map(|key| renames.get(key).cloned().unwrap_or_else(|| key.clone()))
        .collect();
    renamed_expected.sort();
    let renamed_requests: Vec<DependencyRequest> = requests
        .iter()
        .map(|request| match renames.get(&request.named_key()) {
            Some(renamed) => {
                DependencyRequest::new(request.key.clone(), &renamed.name, request.is_assisted)
            }
            None => request.clone(),
        })
        .collect();

    let mut sorted_factory_keys = factory_keys.clone();
    sorted_factory_keys.sort();
    if sorted_factory_keys != renamed_expected {
        let mut message = String::from(
            "Factory method parameters do not match constructor @Assisted parameters. \
             Both parameter type and name must match.",
        );
        let missing = multiset_minus(&renamed_expected, &sorted_factory_keys);
        if !missing.is_empty() {
            message.push_str("\nDeclared by constructor, unmatched in factory method:");
            for key in &missing {
                message.push_str(&format!("\n * {key}"));
            }
        }
        let unknown = multiset_minus(&sorted_factory_keys, &renamed_expected);
        if !unknown.is_empty() {
            message.push_str("\nDeclared by factory method, unmatched in constructor:");
            for key in &unknown {
                message.push_str(&format!("\n * {key}"));
            }
        }
        let span = if candidate.factory_method_is_local() {
            Some(candidate.factory_method.span.clone())
        } else {
            constructor_span
        };
        diagnostics.error(message, span);
        valid = false;
    }

    if !valid {
        return None;
    }

    Some(AssistedInjection::new(
        Flavor::AssistedInject,
        declared_target_type(candidate.target),
        renamed_requests,
        candidate.factory_type.name.clone(),
        &candidate.factory_method.name,
        candidate.factory_method.return_type.clone(),
        factory_keys,
        generated_annotation,
    ))
}

/// Inflation variant of the matcher. There is no user factory method; the
/// assisted set must be exactly `(Context context, AttributeSet attrs)` and
/// the shared `ViewFactory` interface supplies the method shape.
pub fn match_inflation(
    target: &TypeDeclaration,
    constructor: &Constructor,
    index: &TypeIndex,
    generated_annotation: Option<Annotation>,
    diagnostics: &mut Diagnostics,
) -> Option<AssistedInjection> {
    let mut valid = true;
    let constructor_span = Some(constructor.span.clone());

    let requests: Vec<DependencyRequest> = constructor
        .parameters
        .iter()
        .map(|parameter| DependencyRequest::from_parameter(parameter, index))
        .collect();
    let assisted: Vec<&DependencyRequest> =
        requests.iter().filter(|request| request.is_assisted).collect();
    let provided: Vec<&DependencyRequest> =
        requests.iter().filter(|request| !request.is_assisted).collect();

    let mut assisted_keys: Vec<NamedKey> = assisted
        .iter()
        .map(|request| request.named_key())
        .collect();
    assisted_keys.sort();
    let mut expected = INFLATION_FACTORY_KEYS.clone();
    expected.sort();
    if assisted_keys != expected {
        let found: Vec<NamedKey> = assisted.iter().map(|request| request.named_key()).collect();
        diagnostics.error(
            format!(
                "Inflation injection requires Context and AttributeSet @Assisted parameters.\n  Found:\n    {}\n  Expected:\n    {}",
                display_list(&found),
                display_list(&INFLATION_FACTORY_KEYS),
            ),
            constructor_span.clone(),
        );
        valid = false;
    }

    if provided.is_empty() {
        diagnostics.warn(
            "Inflation injection requires at least one non-@Assisted parameter.",
            constructor_span.clone(),
        );
    } else if report_duplicate_provided(&provided, constructor_span, diagnostics) {
        valid = false;
    }

    if !valid {
        return None;
    }

    Some(AssistedInjection::new(
        Flavor::InflationInject,
        declared_target_type(target),
        requests,
        known::VIEW_FACTORY.clone(),
        "create",
        JavaType::declared(known::VIEW.clone()),
        INFLATION_FACTORY_KEYS.clone(),
        generated_annotation,
    ))
}

/// Two same-keyed provided parameters cannot share a factory: the generated
/// class could not tell the providers apart without a qualifier. Returns true
/// when duplicates were reported.
fn report_duplicate_provided(
    provided: &[&DependencyRequest],
    span: Option<aj_model::Span>,
    diagnostics: &mut Diagnostics,
) -> bool {
    let mut by_key: BTreeMap<Key, Vec<&DependencyRequest>> = BTreeMap::new();
    for request in provided.iter().copied() {
        by_key.entry(request.key.clone()).or_default().push(request);
    }
    let duplicates: Vec<&DependencyRequest> = by_key
        .into_values()
        .filter(|group| group.len() > 1)
        .flatten()
        .collect();
    if duplicates.is_empty() {
        return false;
    }
    let mut message =
        String::from("Duplicate non-@Assisted parameters declared. Forget a qualifier annotation?");
    for request in &duplicates {
        message.push_str(&format!("\n * {request}"));
    }
    diagnostics.error(message, span);
    true
}

/// Keys appearing exactly once in `keys`, name aside.
fn single_occurrence(keys: &[NamedKey]) -> Vec<&NamedKey> {
    keys.iter()
        .filter(|named| {
            keys.iter()
                .filter(|other| other.key == named.key)
                .count()
                == 1
        })
        .collect()
}

/// Left minus right as multisets: each right occurrence cancels one left
/// occurrence.
fn multiset_minus(left: &[NamedKey], right: &[NamedKey]) -> Vec<NamedKey> {
    let mut remaining: Vec<&NamedKey> = right.iter().collect();
    left.iter()
        .filter(|item| {
            if let Some(position) = remaining.iter().position(|kept| kept == item) {
                remaining.remove(position);
                false
            } else {
                true
            }
        })
        .cloned()
        .collect()
}

fn display_list(keys: &[NamedKey]) -> String {
    let rendered: Vec<String> = keys.iter().map(NamedKey::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

/// The target as a type reference, carrying its own type parameters when it
/// is generic.
fn declared_target_type(target: &TypeDeclaration) -> JavaType {
    if target.type_parameters.is_empty() {
        JavaType::declared(target.name.clone())
    } else {
        JavaType::parameterized(
            target.name.clone(),
            target
                .type_parameters
                .iter()
                .map(|parameter| JavaType::Variable(parameter.clone()))
                .collect(),
        )
    }
}
