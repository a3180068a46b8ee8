use crate::annotation::Annotation;
use crate::known;
use crate::span::Span;
use crate::types::{ClassName, JavaType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declaration kinds the processors care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    Class,
    Interface,
    Annotation,
}

/// Visibility of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    Protected,
    #[default]
    PackagePrivate,
    Private,
}

/// Modifier set shared by types, constructors, and methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
    /// Interface `default` method.
    pub is_default: bool,
}

impl Modifiers {
    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// A type declaration together with everything nested inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub name: ClassName,
    pub kind: TypeKind,
    pub modifiers: Modifiers,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Declared type parameter names, in order.
    #[serde(default)]
    pub type_parameters: Vec<String>,
    /// Superclass and superinterfaces as written, resolved where possible.
    #[serde(default)]
    pub supertypes: Vec<JavaType>,
    #[serde(default)]
    pub constructors: Vec<Constructor>,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub nested: Vec<TypeDeclaration>,
    /// Kind of the directly enclosing declaration, `None` for top level.
    #[serde(default)]
    pub enclosing_kind: Option<TypeKind>,
    pub span: Span,
}

/// A constructor declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constructor {
    pub modifiers: Modifiers,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub span: Span,
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub modifiers: Modifiers,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub return_type: JavaType,
    pub span: Span,
}

/// A formal parameter of a constructor or method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: JavaType,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub span: Span,
}

/// Anything that can carry annotations.
pub trait Annotated {
    fn annotations(&self) -> &[Annotation];

    fn has_annotation(&self, name: &ClassName) -> bool {
        self.annotations()
            .iter()
            .any(|annotation| &annotation.name == name)
    }

    fn get_annotation(&self, name: &ClassName) -> Option<&Annotation> {
        self.annotations()
            .iter()
            .find(|annotation| &annotation.name == name)
    }
}

impl Annotated for TypeDeclaration {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl Annotated for Constructor {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl Annotated for Method {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl Annotated for Parameter {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

/// Qualified-name index over a set of declarations, nested types included.
///
/// This is the type-resolution side of the host contract: name lookup,
/// qualifier detection, assignability, and projection of inherited members
/// as seen from a subtype.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeIndex {
    by_name: BTreeMap<String, TypeDeclaration>,
}

impl TypeIndex {
    pub fn build(declarations: &[TypeDeclaration]) -> Self {
        let mut index = Self::default();
        index.absorb(declarations);
        index
    }

    /// Add another round's declarations. Later declarations of the same name
    /// replace earlier ones, so re-declared symbols resolve to their newest
    /// form.
    pub fn absorb(&mut self, declarations: &[TypeDeclaration]) {
        for declaration in declarations {
            self.by_name
                .insert(declaration.name.canonical_name(), declaration.clone());
            self.absorb(&declaration.nested);
        }
    }

    pub fn get(&self, name: &ClassName) -> Option<&TypeDeclaration> {
        self.by_name.get(&name.canonical_name())
    }

    pub fn contains(&self, name: &ClassName) -> bool {
        self.by_name.contains_key(&name.canonical_name())
    }

    /// All indexed declarations in qualified-name order.
    pub fn declarations(&self) -> impl Iterator<Item = &TypeDeclaration> {
        self.by_name.values()
    }

    /// True when `name` declares an annotation meta-annotated
    /// `javax.inject.Qualifier`.
    pub fn is_qualifier(&self, name: &ClassName) -> bool {
        self.get(name)
            .map(|declaration| declaration.has_annotation(&known::QUALIFIER))
            .unwrap_or(false)
    }

    /// True when `ty` is `target` or reaches it through its supertype chain.
    pub fn is_assignable(&self, ty: &JavaType, target: &ClassName) -> bool {
        let Some(raw) = ty.raw_class_name() else {
            return false;
        };
        if raw == target {
            return true;
        }
        let Some(declaration) = self.get(raw) else {
            return false;
        };
        declaration
            .supertypes
            .iter()
            .any(|supertype| self.is_assignable(supertype, target))
    }

    /// Local and inherited methods of `declaration`, with inherited
    /// signatures substituted as this subtype sees them. A local method
    /// shadows an inherited one with the same name and parameter types.
    pub fn methods_of(&self, declaration: &TypeDeclaration) -> Vec<Method> {
        let mut collected: Vec<Method> = declaration.methods.clone();
        for supertype in &declaration.supertypes {
            let JavaType::Declared { name, type_args } = supertype else {
                continue;
            };
            let Some(superdecl) = self.get(name) else {
                continue;
            };
            let bindings: BTreeMap<String, JavaType> = superdecl
                .type_parameters
                .iter()
                .cloned()
                .zip(type_args.iter().cloned())
                .collect();
            for method in self.methods_of(superdecl) {
                let substituted = substitute_method(&method, &bindings);
                if !collected
                    .iter()
                    .any(|existing| same_signature(existing, &substituted))
                {
                    collected.push(substituted);
                }
            }
        }
        collected
    }
}

fn substitute_method(method: &Method, bindings: &BTreeMap<String, JavaType>) -> Method {
    Method {
        name: method.name.clone(),
        modifiers: method.modifiers,
        annotations: method.annotations.clone(),
        parameters: method
            .parameters
            .iter()
            .map(|parameter| Parameter {
                name: parameter.name.clone(),
                ty: parameter.ty.substitute(bindings),
                annotations: parameter.annotations.clone(),
                span: parameter.span.clone(),
            })
            .collect(),
        return_type: method.return_type.substitute(bindings),
        span: method.span.clone(),
    }
}

fn same_signature(left: &Method, right: &Method) -> bool {
    left.name == right.name
        && left.parameters.len() == right.parameters.len()
        && left
            .parameters
            .iter()
            .zip(&right.parameters)
            .all(|(a, b)| a.ty == b.ty)
}
