//! Input documents and safe field access
//!
//! Documents are parsed once into a `serde_json::Value` tree. Extractors walk
//! that tree through [`Node`], which tracks the path it was reached by so that
//! shape errors point at the exact location that did not match.

use crate::error::ExtractError;
use serde_json::Value;
use std::io::Read;

/// Read an entire document from `reader` and parse it
pub fn read_document<R: Read>(mut reader: R) -> Result<Value, ExtractError> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;
    parse_document(&content)
}

/// Parse a complete JSON document
///
/// Nesting beyond serde_json's recursion limit and lone surrogate escapes
/// are parse errors, never a crash or a mangled string.
pub fn parse_document(content: &[u8]) -> Result<Value, ExtractError> {
    Ok(serde_json::from_slice(content)?)
}

/// Truthiness of a JSON value
///
/// `null`, `false`, zero, and empty strings, arrays and objects are falsy;
/// everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(arr) => !arr.is_empty(),
        Value::Object(obj) => !obj.is_empty(),
    }
}

/// A position in a document: a borrowed value plus the path that reached it
#[derive(Debug, Clone)]
pub struct Node<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Node<'a> {
    pub fn root(value: &'a Value) -> Self {
        Node {
            value,
            path: String::new(),
        }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Dotted/indexed path of this node, e.g. `Tags[2].ResourceId`
    pub fn path(&self) -> &str {
        if self.path.is_empty() {
            "<document>"
        } else {
            &self.path
        }
    }

    /// Look up `key`, returning `None` when the key is absent
    ///
    /// Fails only when this node is not an object.
    pub fn get(&self, key: &str) -> Result<Option<Node<'a>>, ExtractError> {
        let obj = self.value.as_object().ok_or_else(|| ExtractError::NotAnObject {
            path: self.path().to_string(),
        })?;

        Ok(obj.get(key).map(|value| Node {
            value,
            path: self.child_path(key),
        }))
    }

    /// Look up a required `key`
    pub fn field(&self, key: &str) -> Result<Node<'a>, ExtractError> {
        self.get(key)?.ok_or_else(|| ExtractError::MissingField {
            path: self.child_path(key),
        })
    }

    /// Elements of this node, in document order
    pub fn elements(&self) -> Result<Vec<Node<'a>>, ExtractError> {
        let arr = self.value.as_array().ok_or_else(|| ExtractError::NotASequence {
            path: self.path().to_string(),
        })?;

        Ok(arr
            .iter()
            .enumerate()
            .map(|(idx, value)| Node {
                value,
                path: format!("{}[{}]", self.path, idx),
            })
            .collect())
    }

    pub fn is_truthy(&self) -> bool {
        is_truthy(self.value)
    }

    /// Render a scalar as an output line
    ///
    /// Strings come out raw, numbers and booleans as their JSON text
    /// (`true`, not `True`). `null` is not rendered as `None`: it is a
    /// `NotAScalar` error like arrays and objects.
    pub fn text(&self) -> Result<String, ExtractError> {
        match self.value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err(ExtractError::NotAScalar {
                path: self.path().to_string(),
            }),
        }
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }
}
