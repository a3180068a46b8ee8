use crate::error::CodeGenError;
use aj_model::{Annotation, AnnotationArgument, AnnotationValue, ClassName, JavaType};
use std::collections::BTreeMap;

/// Tracks which imports a compilation unit requires and renders type and
/// annotation references against them.
///
/// References to `java.lang` and to the unit's own package stay unimported.
/// Two top-level types sharing a simple name cannot both be imported; the
/// later one renders fully qualified.
#[derive(Debug, Clone)]
pub struct ImportManager {
    current_package: String,
    imported: BTreeMap<String, ClassName>,
}

impl ImportManager {
    pub fn new(current_package: &str) -> Self {
        Self {
            current_package: current_package.to_string(),
            imported: BTreeMap::new(),
        }
    }

    /// Render a class reference, registering an import when one is needed.
    /// Nested types render as their dotted simple-name chain.
    pub fn reference(&mut self, name: &ClassName) -> String {
        let top_level = name.top_level_name();
        let local = name.package == "java.lang" || name.package == self.current_package;
        if local {
            return name.simple_names.join(".");
        }
        match self.imported.get(top_level.simple_name()) {
            Some(existing) if existing == &top_level => name.simple_names.join("."),
            Some(_) => name.canonical_name(),
            None => {
                self.imported
                    .insert(top_level.simple_name().to_string(), top_level);
                name.simple_names.join(".")
            }
        }
    }

    /// Render a type reference in Java source form.
    pub fn render_type(&mut self, ty: &JavaType) -> Result<String, CodeGenError> {
        match ty {
            JavaType::Primitive(primitive) => Ok(primitive.keyword().to_string()),
            JavaType::Declared { name, type_args } => {
                let mut rendered = self.reference(name);
                if !type_args.is_empty() {
                    let args: Result<Vec<String>, CodeGenError> =
                        type_args.iter().map(|arg| self.render_type(arg)).collect();
                    rendered.push('<');
                    rendered.push_str(&args?.join(", "));
                    rendered.push('>');
                }
                Ok(rendered)
            }
            JavaType::Variable(name) => Ok(name.clone()),
            JavaType::Array(component) => Ok(format!("{}[]", self.render_type(component)?)),
            JavaType::Error(written) => Err(CodeGenError::UnresolvedType {
                written: written.clone(),
            }),
        }
    }

    /// Render an annotation use in Java source form.
    pub fn render_annotation(&mut self, annotation: &Annotation) -> String {
        let mut rendered = format!("@{}", self.reference(&annotation.name));
        if annotation.arguments.is_empty() {
            return rendered;
        }
        rendered.push('(');
        let arguments: Vec<String> = annotation
            .arguments
            .iter()
            .map(|argument| match argument {
                AnnotationArgument::Positional { value } => self.render_annotation_value(value),
                AnnotationArgument::Named { name, value } => {
                    format!("{name} = {}", self.render_annotation_value(value))
                }
            })
            .collect();
        rendered.push_str(&arguments.join(", "));
        rendered.push(')');
        rendered
    }

    fn render_annotation_value(&mut self, value: &AnnotationValue) -> String {
        match value {
            AnnotationValue::Literal(literal) => literal.to_string(),
            AnnotationValue::Type(ty) => match self.render_type(ty) {
                Ok(rendered) => format!("{rendered}.class"),
                Err(_) => value.to_string(),
            },
            AnnotationValue::Array(values) => {
                let rendered: Vec<String> = values
                    .iter()
                    .map(|value| self.render_annotation_value(value))
                    .collect();
                format!("{{{}}}", rendered.join(", "))
            }
            AnnotationValue::Error | AnnotationValue::Unmapped => value.to_string(),
        }
    }

    /// Collected imports in sorted order.
    pub fn imports(&self) -> Vec<String> {
        let mut imports: Vec<String> = self
            .imported
            .values()
            .map(ClassName::canonical_name)
            .collect();
        imports.sort();
        imports
    }
}
