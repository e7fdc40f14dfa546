//! Row representation shared by the generators and writers.
//!
//! After corruption a row is purely positional: field identity is its index,
//! and the only thing that varies between rows is the lexical form of each
//! field and the separators used to serialize it.

use std::fmt;

/// Ordered sequence of already-formatted field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.fields.push(value.into());
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize with a single separator between every field.
    pub fn join(&self, separator: &str) -> String {
        self.fields.join(separator)
    }

    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

impl From<Vec<String>> for Row {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

/// A row already serialized to one output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line(pub String);

impl Line {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split a line on any of the given separators.
///
/// Separators are tried in the order given at every position, so when one
/// separator is a prefix of another the longer one must come first.
pub fn split_any<'a, S: AsRef<str>>(line: &'a str, separators: &[S]) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    'scan: while pos < line.len() {
        for sep in separators {
            let sep = sep.as_ref();
            if !sep.is_empty() && line[pos..].starts_with(sep) {
                tokens.push(&line[start..pos]);
                pos += sep.len();
                start = pos;
                continue 'scan;
            }
        }
        pos += line[pos..].chars().next().map_or(1, char::len_utf8);
    }

    tokens.push(&line[start..]);
    tokens
}
