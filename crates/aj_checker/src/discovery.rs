use crate::diagnostics::Diagnostics;
use aj_model::{
    known, Annotated, Constructor, Method, TypeDeclaration, TypeIndex, TypeKind,
};
use std::collections::BTreeMap;

/// The syntactical elements of one assisted-injection candidate, validated
/// but not yet matched.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub target: &'a TypeDeclaration,
    pub constructor: &'a Constructor,
    pub factory_type: &'a TypeDeclaration,
    /// The factory's single abstract method, with inherited signatures
    /// substituted as the factory interface sees them.
    pub factory_method: Method,
}

impl Candidate<'_> {
    /// True when the factory method is declared on the factory interface
    /// itself rather than inherited. Mismatch diagnostics anchor there.
    pub fn factory_method_is_local(&self) -> bool {
        self.factory_type
            .methods
            .iter()
            .any(|method| method.name == self.factory_method.name)
    }
}

/// Find candidate target types in this round's declarations: types with an
/// `@AssistedInject` constructor, union types enclosing an
/// `@AssistedInject.Factory`. Taking the union is what turns a missing half
/// into a precise error instead of a silent skip. Orphaned factory
/// annotations (not nested in a class) are reported here.
pub fn find_candidates<'a>(
    declarations: &'a [TypeDeclaration],
    diagnostics: &mut Diagnostics,
) -> Vec<&'a TypeDeclaration> {
    let mut candidates: BTreeMap<String, &'a TypeDeclaration> = BTreeMap::new();
    collect_candidates(declarations, None, &mut candidates, diagnostics);
    candidates.into_values().collect()
}

fn collect_candidates<'a>(
    declarations: &'a [TypeDeclaration],
    parent: Option<&'a TypeDeclaration>,
    candidates: &mut BTreeMap<String, &'a TypeDeclaration>,
    diagnostics: &mut Diagnostics,
) {
    for declaration in declarations {
        if declaration.has_annotation(&known::ASSISTED_INJECT_FACTORY) {
            match parent {
                Some(enclosing) if enclosing.kind == TypeKind::Class => {
                    candidates.insert(enclosing.name.canonical_name(), enclosing);
                }
                _ => diagnostics.error(
                    "@AssistedInject.Factory must be declared as a nested type.",
                    Some(declaration.span.clone()),
                ),
            }
        }
        if declaration
            .constructors
            .iter()
            .any(|constructor| constructor.has_annotation(&known::ASSISTED_INJECT))
        {
            candidates.insert(declaration.name.canonical_name(), declaration);
        }
        collect_candidates(&declaration.nested, Some(declaration), candidates, diagnostics);
    }
}

/// Validate the structure required to generate a factory for `target`:
/// non-private non-inner type, a single non-private `@AssistedInject`
/// constructor, a single nested non-private `@AssistedInject.Factory`
/// interface, and a single abstract factory method. All violations found in
/// this pass are reported, not just the first.
pub fn validate_candidate<'a>(
    target: &'a TypeDeclaration,
    index: &TypeIndex,
    diagnostics: &mut Diagnostics,
) -> Option<Candidate<'a>> {
    let mut valid = true;

    if target.modifiers.is_private() {
        diagnostics.error(
            "@AssistedInject-using types must not be private",
            Some(target.span.clone()),
        );
        valid = false;
    }
    if target.enclosing_kind == Some(TypeKind::Class) && !target.modifiers.is_static {
        diagnostics.error(
            "Nested @AssistedInject-using types must be static",
            Some(target.span.clone()),
        );
        valid = false;
    }

    let constructors: Vec<&Constructor> = target
        .constructors
        .iter()
        .filter(|constructor| constructor.has_annotation(&known::ASSISTED_INJECT))
        .collect();
    if constructors.is_empty() {
        diagnostics.error(
            "Assisted injection requires an @AssistedInject-annotated constructor \
             with at least one @Assisted parameter.",
            Some(target.span.clone()),
        );
        valid = false;
    } else if constructors.len() > 1 {
        diagnostics.error(
            "Multiple @AssistedInject-annotated constructors found.",
            Some(target.span.clone()),
        );
        valid = false;
    }

    let factory_types: Vec<&TypeDeclaration> = target
        .nested
        .iter()
        .filter(|nested| nested.has_annotation(&known::ASSISTED_INJECT_FACTORY))
        .collect();
    if factory_types.is_empty() {
        diagnostics.error(
            "No nested @AssistedInject.Factory found.",
            Some(target.span.clone()),
        );
        valid = false;
    } else if factory_types.len() > 1 {
        diagnostics.error(
            "Multiple @AssistedInject.Factory types found.",
            Some(target.span.clone()),
        );
        valid = false;
    }

    if !valid {
        return None;
    }

    let constructor = constructors[0];
    if constructor.modifiers.is_private() {
        diagnostics.error(
            "@AssistedInject constructor must not be private.",
            Some(constructor.span.clone()),
        );
        valid = false;
    }

    let factory_type = factory_types[0];
    if factory_type.kind != TypeKind::Interface {
        diagnostics.error(
            "@AssistedInject.Factory must be an interface.",
            Some(factory_type.span.clone()),
        );
        valid = false;
    }
    if factory_type.modifiers.is_private() {
        diagnostics.error(
            "@AssistedInject.Factory must not be private.",
            Some(factory_type.span.clone()),
        );
        valid = false;
    }

    // Default, static, and private interface methods do not count; they are
    // allowed as convenience overloads next to the factory method.
    let factory_methods: Vec<Method> = index
        .methods_of(factory_type)
        .into_iter()
        .filter(|method| {
            !method.modifiers.is_default
                && !method.modifiers.is_static
                && !method.modifiers.is_private()
        })
        .collect();
    if factory_methods.is_empty() {
        diagnostics.error(
            "Factory interface does not define a factory method.",
            Some(factory_type.span.clone()),
        );
        valid = false;
    } else if factory_methods.len() > 1 {
        diagnostics.error(
            "Factory interface defines multiple factory methods.",
            Some(factory_type.span.clone()),
        );
        valid = false;
    }

    if !valid {
        return None;
    }

    Some(Candidate {
        target,
        constructor,
        factory_type,
        factory_method: factory_methods.into_iter().next().expect(
            "validated candidate has exactly one factory method",
        ),
    })
}

/// The syntactical elements of one inflation-injection candidate. There is
/// no per-type factory interface; the shared `ViewFactory` supplies it.
#[derive(Debug, Clone)]
pub struct InflationCandidate<'a> {
    pub target: &'a TypeDeclaration,
    pub constructor: &'a Constructor,
}

/// Find inflation candidates: types with an `@InflationInject` constructor.
pub fn find_inflation_candidates(declarations: &[TypeDeclaration]) -> Vec<&TypeDeclaration> {
    let mut candidates: BTreeMap<String, &TypeDeclaration> = BTreeMap::new();
    collect_inflation_candidates(declarations, &mut candidates);
    candidates.into_values().collect()
}

fn collect_inflation_candidates<'a>(
    declarations: &'a [TypeDeclaration],
    candidates: &mut BTreeMap<String, &'a TypeDeclaration>,
) {
    for declaration in declarations {
        if declaration
            .constructors
            .iter()
            .any(|constructor| constructor.has_annotation(&known::INFLATION_INJECT))
        {
            candidates.insert(declaration.name.canonical_name(), declaration);
        }
        collect_inflation_candidates(&declaration.nested, candidates);
    }
}

/// Validate the structure required to generate an inflation factory:
/// non-private non-inner View subtype with a single non-private
/// `@InflationInject` constructor.
pub fn validate_inflation_candidate<'a>(
    target: &'a TypeDeclaration,
    index: &TypeIndex,
    diagnostics: &mut Diagnostics,
) -> Option<InflationCandidate<'a>> {
    let mut valid = true;

    if target.modifiers.is_private() {
        diagnostics.error(
            "@InflationInject-using types must not be private",
            Some(target.span.clone()),
        );
        valid = false;
    }
    if target.enclosing_kind == Some(TypeKind::Class) && !target.modifiers.is_static {
        diagnostics.error(
            "Nested @InflationInject-using types must be static",
            Some(target.span.clone()),
        );
        valid = false;
    }
    let target_type = aj_model::JavaType::declared(target.name.clone());
    if !index.is_assignable(&target_type, &known::VIEW) {
        diagnostics.error(
            "@InflationInject-using types must be subtypes of View",
            Some(target.span.clone()),
        );
        valid = false;
    }

    let constructors: Vec<&Constructor> = target
        .constructors
        .iter()
        .filter(|constructor| constructor.has_annotation(&known::INFLATION_INJECT))
        .collect();
    if constructors.len() > 1 {
        diagnostics.error(
            "Multiple @InflationInject-annotated constructors found.",
            Some(target.span.clone()),
        );
        valid = false;
    }

    if !valid {
        return None;
    }

    let constructor = constructors[0];
    if constructor.modifiers.is_private() {
        diagnostics.error(
            "@InflationInject constructor must not be private.",
            Some(constructor.span.clone()),
        );
        return None;
    }

    Some(InflationCandidate {
        target,
        constructor,
    })
}

/// Report misuse of `@Assisted` outside a properly annotated constructor.
/// Methods named `copy` are excluded: Kotlin data classes copy constructor
/// parameter annotations onto their generated `copy` method.
pub fn check_assisted_usage(declarations: &[TypeDeclaration], diagnostics: &mut Diagnostics) {
    for declaration in declarations {
        for method in &declaration.methods {
            let uses_assisted = method
                .parameters
                .iter()
                .any(|parameter| parameter.has_annotation(&known::ASSISTED));
            if uses_assisted && method.name != "copy" {
                diagnostics.error(
                    "@Assisted is only supported on constructor parameters",
                    Some(method.span.clone()),
                );
            }
        }
        for constructor in &declaration.constructors {
            let uses_assisted = constructor
                .parameters
                .iter()
                .any(|parameter| parameter.has_annotation(&known::ASSISTED));
            if !uses_assisted {
                continue;
            }
            if constructor.annotations.is_empty() {
                diagnostics.error(
                    "@Assisted parameter use requires a constructor annotation such as \
                     @AssistedInject or @InflationInject",
                    Some(constructor.span.clone()),
                );
            }
            if constructor.has_annotation(&known::INJECT) {
                diagnostics.error(
                    "@Assisted parameter does not work with @Inject! Use @AssistedInject or \
                     @InflationInject",
                    Some(constructor.span.clone()),
                );
            }
        }
        check_assisted_usage(&declaration.nested, diagnostics);
    }
}
