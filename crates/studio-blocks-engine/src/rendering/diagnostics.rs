//! Records of blocks the dispatcher skipped.
//!
//! Skips never abort a render. Each one becomes a [`Diagnostic`] in the
//! returned page and a log line whose level depends on the render mode.

use std::fmt;

use crate::models::KindTag;
use crate::path::Path;
use crate::rendering::RenderMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: Path,
    /// Raw kind name as authored; empty when `_type` was missing.
    pub kind: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    UnrecognizedKind,
    InvalidPayload(String),
    /// A known kind placed where its container does not accept it. `None`
    /// means the document root.
    NotAllowedHere { parent: Option<KindTag> },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.kind.is_empty() {
            "<missing _type>"
        } else {
            &self.kind
        };
        match &self.reason {
            SkipReason::UnrecognizedKind => {
                write!(f, "{}: unrecognized block kind `{kind}`", self.path)
            }
            SkipReason::InvalidPayload(reason) => {
                write!(f, "{}: invalid `{kind}` block: {reason}", self.path)
            }
            SkipReason::NotAllowedHere { parent: Some(parent) } => {
                write!(f, "{}: `{kind}` is not allowed inside `{parent}`", self.path)
            }
            SkipReason::NotAllowedHere { parent: None } => {
                write!(f, "{}: `{kind}` is not allowed at the page root", self.path)
            }
        }
    }
}

/// Accumulator threaded through one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    mode: RenderMode,
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            entries: Vec::new(),
        }
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        match self.mode {
            RenderMode::Development => log::warn!("Skipped block at {diagnostic}"),
            RenderMode::Production => log::debug!("Skipped block at {diagnostic}"),
        }
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}
