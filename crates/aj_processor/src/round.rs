use aj_checker::Diagnostic;
use aj_model::{
    Annotated, Annotation, AnnotationArgument, AnnotationValue, ClassName, Literal,
    TypeDeclaration,
};
use serde::{Deserialize, Serialize};

/// One round's worth of declarations, as the host was able to resolve them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundInput {
    pub declarations: Vec<TypeDeclaration>,
}

impl RoundInput {
    pub fn new(declarations: Vec<TypeDeclaration>) -> Self {
        Self { declarations }
    }
}

/// A rendered source artifact plus the declarations that originated it, for
/// the host's incremental-rebuild bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSource {
    pub name: ClassName,
    pub source: String,
    pub originating: Vec<ClassName>,
}

/// Everything one round produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub sources: Vec<GeneratedSource>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RoundOutcome {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity == aj_checker::Severity::Error)
    }
}

/// The `@Generated` marker recorded on emitted classes when the host has the
/// annotation type on its classpath.
pub(crate) fn generated_marker(processor_name: &str) -> Annotation {
    Annotation::with_arguments(
        aj_model::known::GENERATED.clone(),
        vec![
            AnnotationArgument::Named {
                name: "value".to_string(),
                value: AnnotationValue::Literal(Literal::String(processor_name.to_string())),
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

/// True when an annotation `includes` value references `generated`, directly
/// or inside an array. Unresolved entries never match; validation runs after
/// the last round precisely so resolved forms are visible.
pub(crate) fn references_generated(
    value: &AnnotationValue,
    generated: &ClassName,
) -> bool {
    match value {
        AnnotationValue::Type(ty) => ty.raw_class_name() == Some(generated),
        AnnotationValue::Array(values) => values
            .iter()
            .any(|value| references_generated(value, generated)),
        _ => false,
    }
}

/// All declarations (nested included) carrying `marker`, in traversal order.
pub(crate) fn collect_annotated<'a>(
    declarations: &'a [TypeDeclaration],
    marker: &ClassName,
) -> Vec<&'a TypeDeclaration> {
    let mut found = Vec::new();
    collect_annotated_into(declarations, marker, &mut found);
    found
}

fn collect_annotated_into<'a>(
    declarations: &'a [TypeDeclaration],
    marker: &ClassName,
    found: &mut Vec<&'a TypeDeclaration>,
) {
    for declaration in declarations {
        if declaration.has_annotation(marker) {
            found.push(declaration);
        }
        collect_annotated_into(&declaration.nested, marker, found);
    }
}
