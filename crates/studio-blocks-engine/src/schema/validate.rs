use std::collections::HashSet;
use std::fmt;

use crate::models::{Block, BlockKind, Document, KindTag};
use crate::path::Path;

use super::{allowed_at_root, allows};

/// One authoring-time problem found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub path: Path,
    pub kind: ViolationKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// A block kind that is not allowed directly under its parent.
    DisallowedChild {
        parent: Option<KindTag>,
        child: KindTag,
    },
    UnrecognizedKind(String),
    InvalidPayload { kind: KindTag, reason: String },
    MissingKey,
    DuplicateKey(String),
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::DisallowedChild {
                parent: Some(parent),
                child,
            } => write!(f, "{}: `{child}` is not allowed inside `{parent}`", self.path),
            ViolationKind::DisallowedChild {
                parent: None,
                child,
            } => write!(
                f,
                "{}: `{child}` is not allowed at the document root",
                self.path
            ),
            ViolationKind::UnrecognizedKind(kind) if kind.is_empty() => {
                write!(f, "{}: block has no `_type`", self.path)
            }
            ViolationKind::UnrecognizedKind(kind) => {
                write!(f, "{}: unrecognized block kind `{kind}`", self.path)
            }
            ViolationKind::InvalidPayload { kind, reason } => {
                write!(f, "{}: invalid `{kind}` payload: {reason}", self.path)
            }
            ViolationKind::MissingKey => write!(f, "{}: block has no `_key`", self.path),
            ViolationKind::DuplicateKey(key) => {
                write!(f, "{}: duplicate sibling key `{key}`", self.path)
            }
        }
    }
}

/// Check a whole document against the nesting rules.
///
/// Violations are reported in document order. Children of a disallowed
/// block are still checked, so one misplaced container does not hide
/// problems further down.
pub fn validate_document(document: &Document) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();
    check_siblings(
        None,
        "content",
        &document.content,
        &Path::root(),
        &mut violations,
    );
    violations
}

fn check_siblings(
    parent: Option<KindTag>,
    field: &str,
    blocks: &[Block],
    parent_path: &Path,
    violations: &mut Vec<SchemaViolation>,
) {
    let mut seen = HashSet::new();

    for (index, block) in blocks.iter().enumerate() {
        let path = parent_path.child(field, &block.key, index);

        if block.key.is_empty() {
            violations.push(SchemaViolation {
                path: path.clone(),
                kind: ViolationKind::MissingKey,
            });
        } else if !seen.insert(block.key.as_str()) {
            violations.push(SchemaViolation {
                path: parent_path.index(field, index),
                kind: ViolationKind::DuplicateKey(block.key.clone()),
            });
        }

        check_block(parent, block, &path, violations);
    }
}

fn check_block(
    parent: Option<KindTag>,
    block: &Block,
    path: &Path,
    violations: &mut Vec<SchemaViolation>,
) {
    let tag = match &block.kind {
        BlockKind::Unrecognized { kind } => {
            violations.push(SchemaViolation {
                path: path.clone(),
                kind: ViolationKind::UnrecognizedKind(kind.clone()),
            });
            return;
        }
        BlockKind::Invalid { kind, reason } => {
            violations.push(SchemaViolation {
                path: path.clone(),
                kind: ViolationKind::InvalidPayload {
                    kind: *kind,
                    reason: reason.clone(),
                },
            });
            return;
        }
        other => match other.tag() {
            Some(tag) => tag,
            None => return,
        },
    };

    let permitted = match parent {
        Some(parent) => allows(parent, tag),
        None => allowed_at_root(tag),
    };
    if !permitted {
        violations.push(SchemaViolation {
            path: path.clone(),
            kind: ViolationKind::DisallowedChild { parent, child: tag },
        });
    }

    for (field, children) in block.child_slots() {
        check_siblings(Some(tag), field, children, path, violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn doc(content: serde_json::Value) -> Document {
        serde_json::from_value(json!({ "_id": "page-1", "content": content })).unwrap()
    }

    #[test]
    fn test_valid_document_has_no_violations() {
        let document = doc(json!([
            {
                "_type": "section", "_key": "s1", "title": "About",
                "content": [
                    { "_type": "text", "_key": "t1" },
                    {
                        "_type": "two-column-layout", "_key": "cols",
                        "leftColumn": [{ "_type": "card", "_key": "c1", "title": "One" }],
                        "rightColumn": [{ "_type": "responsive-wrapper", "_key": "rw" }]
                    },
                    { "_type": "sub-section", "_key": "ss", "content": [
                        { "_type": "sub-sub-section", "_key": "sss" }
                    ]}
                ]
            }
        ]));

        assert_eq!(validate_document(&document), Vec::new());
    }

    #[test]
    fn test_card_embedding_a_layout_is_rejected() {
        let document = doc(json!([
            { "_type": "section", "_key": "s1", "content": [
                { "_type": "card", "_key": "c1", "title": "Card", "content": [
                    { "_type": "two-column-layout", "_key": "cols" }
                ]}
            ]}
        ]));

        let violations = validate_document(&document);
        assert_eq!(
            violations,
            vec![SchemaViolation {
                path: Path::root()
                    .keyed("content", "s1")
                    .keyed("content", "c1")
                    .keyed("content", "cols"),
                kind: ViolationKind::DisallowedChild {
                    parent: Some(KindTag::Card),
                    child: KindTag::TwoColumnLayout,
                },
            }]
        );
    }

    #[test]
    fn test_bare_content_at_root_is_rejected() {
        let document = doc(json!([{ "_type": "text", "_key": "t1" }]));

        let violations = validate_document(&document);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            r#"content[_key=="t1"]: `text` is not allowed at the document root"#
        );
    }

    #[test]
    fn test_duplicate_and_missing_keys() {
        let document = doc(json!([
            { "_type": "section", "_key": "s1" },
            { "_type": "section", "_key": "s1" },
            { "_type": "content-wrapper" }
        ]));

        let kinds: Vec<_> = validate_document(&document)
            .into_iter()
            .map(|v| v.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                ViolationKind::DuplicateKey("s1".to_string()),
                ViolationKind::MissingKey,
            ]
        );
    }

    #[test]
    fn test_keys_only_need_to_be_unique_among_siblings() {
        let document = doc(json!([
            { "_type": "section", "_key": "a", "content": [{ "_type": "divider", "_key": "a" }] }
        ]));

        assert!(validate_document(&document).is_empty());
    }

    #[test]
    fn test_unknown_and_invalid_blocks_are_reported() {
        let document = doc(json!([
            { "_type": "section", "_key": "s1", "content": [
                { "_type": "hologram", "_key": "h" },
                { "_type": "grid-layout", "_key": "g", "columns": "three" }
            ]}
        ]));

        let violations = validate_document(&document);
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].kind,
            ViolationKind::UnrecognizedKind("hologram".to_string())
        );
        assert!(matches!(
            violations[1].kind,
            ViolationKind::InvalidPayload {
                kind: KindTag::GridLayout,
                ..
            }
        ));
    }

    #[test]
    fn test_children_of_misplaced_blocks_are_still_checked() {
        let document = doc(json!([
            { "_type": "grid-layout", "_key": "g", "items": [
                { "_type": "section", "_key": "inner" }
            ]}
        ]));

        let violations = validate_document(&document);
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[1].path.as_str(),
            r#"content[_key=="g"].items[_key=="inner"]"#
        );
    }
}
