//! Portable-text style rich text as stored by the CMS.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortableBlock {
    #[serde(rename = "_key")]
    pub key: String,
    pub style: Option<String>,
    pub list_item: Option<ListKind>,
    pub level: Option<u8>,
    pub children: Vec<PortableSpan>,
    pub mark_defs: Vec<MarkDef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bullet,
    Number,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PortableSpan {
    #[serde(rename = "_key")]
    pub key: String,
    pub text: String,
    pub marks: Vec<String>,
}

/// Annotation referenced from a span's `marks` by key.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub kind: String,
    pub href: Option<String>,
}

impl PortableBlock {
    /// Concatenated text of every span, ignoring marks.
    pub fn plain_text(&self) -> String {
        self.children.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.children.iter().all(|s| s.text.trim().is_empty())
    }

    /// Single unmarked paragraph, handy for building content in code.
    pub fn paragraph(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            style: Some("normal".to_string()),
            children: vec![PortableSpan {
                key: String::new(),
                text: text.into(),
                marks: Vec::new(),
            }],
            ..Self::default()
        }
    }
}

/// Plain text of a whole rich-text field, paragraphs separated by blank lines.
pub fn plain_text(blocks: &[PortableBlock]) -> String {
    blocks
        .iter()
        .map(PortableBlock::plain_text)
        .filter(|t| !t.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
