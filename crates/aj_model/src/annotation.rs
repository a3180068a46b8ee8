use crate::types::{ClassName, JavaType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single annotation use site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    pub name: ClassName,
    #[serde(default)]
    pub arguments: Vec<AnnotationArgument>,
}

impl Annotation {
    pub fn marker(name: ClassName) -> Self {
        Self {
            name,
            arguments: Vec::new(),
        }
    }

    pub fn with_arguments(name: ClassName, arguments: Vec<AnnotationArgument>) -> Self {
        Self { name, arguments }
    }

    /// Look up a member value by name. A single positional argument answers
    /// for the implicit `value` member.
    pub fn value_of(&self, member: &str) -> Option<&AnnotationValue> {
        for argument in &self.arguments {
            match argument {
                AnnotationArgument::Named { name, value } if name == member => return Some(value),
                AnnotationArgument::Positional { value } if member == "value" => {
                    return Some(value)
                }
                _ => {}
            }
        }
        None
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name.canonical_name())?;
        if self.arguments.is_empty() {
            return Ok(());
        }
        write!(f, "(")?;
        for (index, argument) in self.arguments.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            match argument {
                AnnotationArgument::Positional { value } => write!(f, "{value}")?,
                AnnotationArgument::Named { name, value } => write!(f, "{name} = {value}")?,
            }
        }
        write!(f, ")")
    }
}

/// Positional or named argument of an annotation use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationArgument {
    Positional { value: AnnotationValue },
    Named { name: String, value: AnnotationValue },
}

/// Annotation member values the model can represent. Values the host cannot
/// map land in `Unmapped`; references that failed to resolve land in `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationValue {
    Literal(Literal),
    Type(JavaType),
    Array(Vec<AnnotationValue>),
    Error,
    Unmapped,
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationValue::Literal(literal) => write!(f, "{literal}"),
            AnnotationValue::Type(ty) => write!(f, "{ty}.class"),
            AnnotationValue::Array(values) => {
                write!(f, "{{")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "}}")
            }
            AnnotationValue::Error => f.write_str("<error>"),
            AnnotationValue::Unmapped => f.write_str("<unmapped>"),
        }
    }
}

/// Literal constants usable as annotation member values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Literal {
    String(String),
    /// Numeric literal kept as written for precision.
    Number(String),
    Boolean(bool),
    Character(char),
    Null,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(value) => write!(f, "\"{}\"", escape_java_string(value)),
            Literal::Number(value) => f.write_str(value),
            Literal::Boolean(value) => write!(f, "{value}"),
            Literal::Character(value) => write!(f, "'{value}'"),
            Literal::Null => f.write_str("null"),
        }
    }
}

pub fn escape_java_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}
