use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// A numeric literal, kept as written: whole numbers stay integers so that
/// values round-trip without picking up a fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Numeric {
    Integer(i64),
    Float(f64),
}

/// Any value the format can express. The enum is closed: every consumer
/// matches all six variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Constructable {
        identifier: String,
        arguments: Vec<Value>,
    },
    Dictionary(IndexMap<String, Value>),
    Array(Vec<Value>),
    Bool(bool),
    String(String),
    Numeric(Numeric),
}

/// A single `name = value` pair, either in a tag header or trailing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

/// A bracketed block: `[identifier field...]` followed by zero or more
/// assignment fields up to the next tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    pub identifier: String,
    pub fields: Vec<Field>,
    pub assignments: Vec<Field>,
}

/// A whole parsed document. Tag order mirrors the source text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct File {
    pub tags: Vec<Tag>,
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Numeric(Numeric::Integer(i)) = self {
            Some(*i)
        } else {
            None
        }
    }

    /// Numeric value widened to `f64`, whichever way it was written.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Numeric(Numeric::Float(f)) => Some(*f),
            Value::Numeric(Numeric::Integer(i)) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        if let Value::Array(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_dictionary(&self) -> Option<&IndexMap<String, Value>> {
        if let Value::Dictionary(map) = self {
            Some(map)
        } else {
            None
        }
    }

    pub fn as_constructable(&self) -> Option<(&str, &[Value])> {
        if let Value::Constructable {
            identifier,
            arguments,
        } = self
        {
            Some((identifier, arguments))
        } else {
            None
        }
    }
}

impl Tag {
    /// Look up a field by name across the header and the trailing
    /// assignments. Assignments shadow header fields, and a repeated name
    /// resolves to its last occurrence.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .chain(self.assignments.iter())
            .filter(|f| f.name == name)
            .next_back()
            .map(|f| &f.value)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl File {
    /// Find a tag by identifier. A repeated identifier resolves to its last
    /// occurrence, consistent with field lookup.
    pub fn tag(&self, identifier: &str) -> Option<&Tag> {
        self.tags
            .iter()
            .filter(|t| t.identifier == identifier)
            .next_back()
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Integer(i) => write!(f, "{}", i),
            // Debug formatting keeps the decimal point on whole floats
            Numeric::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Constructable {
                identifier,
                arguments,
            } => {
                write!(f, "{}(", identifier)?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Value::Dictionary(map) => {
                write!(f, "{{")?;
                for (i, (key, val)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "\"{}\":{}", key, val)?;
                }
                write!(f, "}}")
            }
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Bool(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Numeric(n) => write!(f, "{}", n),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.identifier)?;
        for field in &self.fields {
            write!(f, " {}", field)?;
        }
        write!(f, "]")?;
        for field in &self.assignments {
            write!(f, "\n{}", field)?;
        }
        Ok(())
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.tags {
            writeln!(f, "{}", tag)?;
        }
        Ok(())
    }
}
