use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Fully qualified class name split into a package and the chain of simple
/// names from the outermost type inward.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassName {
    pub package: String,
    pub simple_names: Vec<String>,
}

impl ClassName {
    pub fn top_level(package: &str, name: &str) -> Self {
        Self {
            package: package.to_string(),
            simple_names: vec![name.to_string()],
        }
    }

    /// Name of a type nested directly inside this one.
    pub fn nested(&self, name: &str) -> Self {
        let mut simple_names = self.simple_names.clone();
        simple_names.push(name.to_string());
        Self {
            package: self.package.clone(),
            simple_names,
        }
    }

    pub fn simple_name(&self) -> &str {
        self.simple_names
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn enclosing(&self) -> Option<ClassName> {
        if self.simple_names.len() <= 1 {
            return None;
        }
        Some(Self {
            package: self.package.clone(),
            simple_names: self.simple_names[..self.simple_names.len() - 1].to_vec(),
        })
    }

    /// The outermost type of the nesting chain.
    pub fn top_level_name(&self) -> ClassName {
        Self {
            package: self.package.clone(),
            simple_names: vec![self.simple_names[0].clone()],
        }
    }

    /// `pkg.Outer.Inner`
    pub fn canonical_name(&self) -> String {
        if self.package.is_empty() {
            self.simple_names.join(".")
        } else {
            format!("{}.{}", self.package, self.simple_names.join("."))
        }
    }

    /// `pkg.Outer$Inner`, the binary-name form.
    pub fn reflection_name(&self) -> String {
        if self.package.is_empty() {
            self.simple_names.join("$")
        } else {
            format!("{}.{}", self.package, self.simple_names.join("$"))
        }
    }

    /// A top-level sibling whose simple name carries the enclosing chain
    /// joined with `$`. `foo.Bar.Baz` with `Fuzz` produces `foo.Baz$Fuzz`.
    pub fn peer_with_reflection_nesting(&self, name: &str) -> ClassName {
        let mut prefix = String::new();
        for enclosing in &self.simple_names[..self.simple_names.len() - 1] {
            prefix.push_str(enclosing);
            prefix.push('$');
        }
        Self {
            package: self.package.clone(),
            simple_names: vec![format!("{prefix}{name}")],
        }
    }

    /// Binding-method name derived from the binary name: `bind_pkg_Outer$Inner`.
    pub fn bind_method_name(&self) -> String {
        format!("bind_{}", self.reflection_name().replace('.', "_"))
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

/// Java primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl Primitive {
    pub fn keyword(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Char => "char",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }

    /// The `java.lang` box type.
    pub fn boxed(self) -> ClassName {
        let name = match self {
            Primitive::Boolean => "Boolean",
            Primitive::Byte => "Byte",
            Primitive::Short => "Short",
            Primitive::Int => "Integer",
            Primitive::Long => "Long",
            Primitive::Char => "Character",
            Primitive::Float => "Float",
            Primitive::Double => "Double",
        };
        ClassName::top_level("java.lang", name)
    }
}

/// Semantic type of a declaration site, after any resolution the host was
/// able to perform. `Error` stands in for references the current round could
/// not resolve; it still equates structurally so keys built from it remain
/// stable within a round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JavaType {
    Primitive(Primitive),
    Declared {
        name: ClassName,
        type_args: Vec<JavaType>,
    },
    /// A type variable as written, e.g. `T`.
    Variable(String),
    Array(Box<JavaType>),
    /// Unresolvable reference, recorded as written in source.
    Error(String),
}

impl JavaType {
    pub fn declared(name: ClassName) -> Self {
        JavaType::Declared {
            name,
            type_args: Vec::new(),
        }
    }

    pub fn parameterized(name: ClassName, type_args: Vec<JavaType>) -> Self {
        JavaType::Declared { name, type_args }
    }

    /// The raw class behind a declared (possibly parameterized) type.
    pub fn raw_class_name(&self) -> Option<&ClassName> {
        match self {
            JavaType::Declared { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Primitives box; everything else is unchanged.
    pub fn boxed(&self) -> JavaType {
        match self {
            JavaType::Primitive(primitive) => JavaType::declared(primitive.boxed()),
            other => other.clone(),
        }
    }

    /// Substitute type variables by name, leaving unmapped variables intact.
    pub fn substitute(&self, bindings: &BTreeMap<String, JavaType>) -> JavaType {
        match self {
            JavaType::Variable(name) => bindings.get(name).cloned().unwrap_or_else(|| self.clone()),
            JavaType::Declared { name, type_args } => JavaType::Declared {
                name: name.clone(),
                type_args: type_args
                    .iter()
                    .map(|arg| arg.substitute(bindings))
                    .collect(),
            },
            JavaType::Array(component) => {
                JavaType::Array(Box::new(component.substitute(bindings)))
            }
            other => other.clone(),
        }
    }

    /// Type variables appearing in this type, in first-occurrence order.
    pub fn type_variables(&self) -> Vec<String> {
        let mut found = Vec::new();
        self.collect_type_variables(&mut found);
        found
    }

    fn collect_type_variables(&self, found: &mut Vec<String>) {
        match self {
            JavaType::Variable(name) => {
                if !found.iter().any(|existing| existing == name) {
                    found.push(name.clone());
                }
            }
            JavaType::Declared { type_args, .. } => {
                for arg in type_args {
                    arg.collect_type_variables(found);
                }
            }
            JavaType::Array(component) => component.collect_type_variables(found),
            _ => {}
        }
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Primitive(primitive) => f.write_str(primitive.keyword()),
            JavaType::Declared { name, type_args } => {
                f.write_str(&name.canonical_name())?;
                if !type_args.is_empty() {
                    write!(f, "<")?;
                    for (index, arg) in type_args.iter().enumerate() {
                        if index > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
            JavaType::Variable(name) => f.write_str(name),
            JavaType::Array(component) => write!(f, "{component}[]"),
            JavaType::Error(written) => f.write_str(written),
        }
    }
}
