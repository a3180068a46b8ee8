use crate::annotation::Annotation;
use crate::declaration::{Parameter, TypeIndex};
use crate::types::JavaType;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A type plus an optional qualifier annotation: the identity of a binding.
///
/// Equality and ordering are defined over the canonical string form, computed
/// once and cached. This keeps keys usable as map and set members even when
/// the underlying type was only partially resolvable this round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Key {
    ty: JavaType,
    qualifier: Option<Annotation>,
    #[serde(skip)]
    canonical: OnceCell<String>,
}

impl Key {
    pub fn new(ty: JavaType, qualifier: Option<Annotation>) -> Self {
        Self {
            ty,
            qualifier,
            canonical: OnceCell::new(),
        }
    }

    /// Build a key from a parameter's type and any qualifier annotation.
    /// Qualifier detection asks the index whether each annotation's type is
    /// meta-annotated `javax.inject.Qualifier`; the first match wins.
    pub fn from_parameter(parameter: &Parameter, index: &TypeIndex) -> Self {
        Self::with_type(parameter, parameter.ty.clone(), index)
    }

    /// Like [`Key::from_parameter`] but with an explicit type, used when the
    /// parameter's declared type has been substituted as seen from a subtype.
    pub fn with_type(parameter: &Parameter, ty: JavaType, index: &TypeIndex) -> Self {
        let qualifier = parameter
            .annotations
            .iter()
            .find(|annotation| index.is_qualifier(&annotation.name))
            .cloned();
        Self::new(ty, qualifier)
    }

    pub fn ty(&self) -> &JavaType {
        &self.ty
    }

    pub fn qualifier(&self) -> Option<&Annotation> {
        self.qualifier.as_ref()
    }

    fn canonical(&self) -> &str {
        self.canonical.get_or_init(|| match &self.qualifier {
            Some(qualifier) => format!("{qualifier} {}", self.ty),
            None => self.ty.to_string(),
        })
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    // Type string first, unqualified before qualified, then qualifier text.
    fn cmp(&self, other: &Self) -> Ordering {
        self.ty
            .to_string()
            .cmp(&other.ty.to_string())
            .then_with(|| match (&self.qualifier, &other.qualifier) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(a), Some(b)) => a.to_string().cmp(&b.to_string()),
            })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

/// A [`Key`] together with the name it was declared under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedKey {
    pub key: Key,
    pub name: String,
}

impl NamedKey {
    pub fn new(key: Key, name: &str) -> Self {
        Self {
            key,
            name: name.to_string(),
        }
    }

    pub fn from_parameter(parameter: &Parameter, index: &TypeIndex) -> Self {
        Self::new(Key::from_parameter(parameter, index), &parameter.name)
    }

    pub fn with_type(parameter: &Parameter, ty: JavaType, index: &TypeIndex) -> Self {
        Self::new(Key::with_type(parameter, ty, index), &parameter.name)
    }
}

impl PartialOrd for NamedKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NamedKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl fmt::Display for NamedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.name)
    }
}

/// One constructor parameter's request: a named key plus whether the caller
/// supplies it through the factory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyRequest {
    pub key: Key,
    pub name: String,
    /// True when fulfilled by the caller, false when fulfilled by a JSR 330
    /// provider.
    pub is_assisted: bool,
}

impl DependencyRequest {
    pub fn new(key: Key, name: &str, is_assisted: bool) -> Self {
        Self {
            key,
            name: name.to_string(),
            is_assisted,
        }
    }

    /// Build a request from a constructor parameter; `@Assisted` marks it as
    /// caller-supplied.
    pub fn from_parameter(parameter: &Parameter, index: &TypeIndex) -> Self {
        use crate::declaration::Annotated;
        Self {
            key: Key::from_parameter(parameter, index),
            name: parameter.name.clone(),
            is_assisted: parameter.has_annotation(&crate::known::ASSISTED),
        }
    }

    pub fn named_key(&self) -> NamedKey {
        NamedKey::new(self.key.clone(), &self.name)
    }
}

impl fmt::Display for DependencyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_assisted {
            write!(f, "@Assisted ")?;
        }
        write!(f, "{} {}", self.key, self.name)
    }
}
