//! Locator strings for blocks inside a document.
//!
//! A path reads like `content[_key=="s1"].leftColumn[_key=="abc"].content[2]`
//! and is what live-editing tooling uses to map a rendered element back to
//! the field it came from. Paths are plain strings built by appending one
//! segment per level; they are never checked against the document.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path(String);

impl Path {
    /// The empty path of a document root.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// `field`, e.g. a non-list field of the current block.
    pub fn field(&self, name: &str) -> Self {
        self.push(name)
    }

    /// `field[index]`, for purely positional children.
    pub fn index(&self, field: &str, index: usize) -> Self {
        self.push(&format!("{field}[{index}]"))
    }

    /// `field[_key=="key"]`, for children addressed by identity key.
    pub fn keyed(&self, field: &str, key: &str) -> Self {
        self.push(&format!("{field}[_key==\"{}\"]", escape_key(key)))
    }

    /// Keyed locator when the child has a key, positional otherwise.
    pub fn child(&self, field: &str, key: &str, index: usize) -> Self {
        if key.is_empty() {
            self.index(field, index)
        } else {
            self.keyed(field, key)
        }
    }

    fn push(&self, segment: &str) -> Self {
        if self.0.is_empty() {
            Self(segment.to_string())
        } else {
            Self(format!("{}.{segment}", self.0))
        }
    }
}

fn escape_key(key: &str) -> String {
    key.replace('\\', "\\\\").replace('"', "\\\"")
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
