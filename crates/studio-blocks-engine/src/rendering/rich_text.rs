//! Rich text projection.
//!
//! Portable-text blocks arrive as a flat sequence where list items are just
//! blocks with a `listItem` marker. Consecutive list items of the same kind
//! are grouped into one list so front ends can emit a single `<ul>`/`<ol>`.

use crate::models::{ListKind, PortableBlock};
use crate::rendering::links::clean_href;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RichText {
    pub blocks: Vec<RichBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RichBlock {
    Paragraph { key: String, spans: Vec<RichSpan> },
    Heading { key: String, level: u8, spans: Vec<RichSpan> },
    BlockQuote { key: String, spans: Vec<RichSpan> },
    List { ordered: bool, items: Vec<RichListItem> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RichListItem {
    pub key: String,
    pub spans: Vec<RichSpan>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RichSpan {
    pub text: String,
    pub marks: Marks,
    /// Link annotation, already validated.
    pub href: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Marks {
    pub strong: bool,
    pub em: bool,
    pub code: bool,
    pub underline: bool,
    pub strike: bool,
}

impl RichText {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Plain text of the whole field, blocks separated by newlines.
    pub fn plain_text(&self) -> String {
        let spans_text =
            |spans: &[RichSpan]| -> String { spans.iter().map(|s| s.text.as_str()).collect() };
        self.blocks
            .iter()
            .map(|block| match block {
                RichBlock::Paragraph { spans, .. }
                | RichBlock::Heading { spans, .. }
                | RichBlock::BlockQuote { spans, .. } => spans_text(spans),
                RichBlock::List { items, .. } => items
                    .iter()
                    .map(|item| spans_text(&item.spans))
                    .collect::<Vec<String>>()
                    .join("\n"),
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

/// Project portable-text blocks into a [`RichText`]. Blank blocks are
/// dropped, so an all-blank field projects to an empty value.
pub fn render_rich_text(blocks: &[PortableBlock]) -> RichText {
    let mut out: Vec<RichBlock> = Vec::new();

    for block in blocks.iter().filter(|b| !b.is_blank()) {
        let spans = render_spans(block);

        if let Some(list_kind) = block.list_item {
            let ordered = list_kind == ListKind::Number;
            let item = RichListItem {
                key: block.key.clone(),
                spans,
            };
            match out.last_mut() {
                Some(RichBlock::List {
                    ordered: current,
                    items,
                }) if *current == ordered => items.push(item),
                _ => out.push(RichBlock::List {
                    ordered,
                    items: vec![item],
                }),
            }
            continue;
        }

        let key = block.key.clone();
        out.push(match block.style.as_deref() {
            Some("h2") => RichBlock::Heading {
                key,
                level: 2,
                spans,
            },
            Some("h3") => RichBlock::Heading {
                key,
                level: 3,
                spans,
            },
            Some("h4") => RichBlock::Heading {
                key,
                level: 4,
                spans,
            },
            Some("blockquote") => RichBlock::BlockQuote { key, spans },
            _ => RichBlock::Paragraph { key, spans },
        });
    }

    RichText { blocks: out }
}

fn render_spans(block: &PortableBlock) -> Vec<RichSpan> {
    block
        .children
        .iter()
        .filter(|span| !span.text.is_empty())
        .map(|span| {
            let mut marks = Marks::default();
            let mut href = None;
            for mark in &span.marks {
                match mark.as_str() {
                    "strong" => marks.strong = true,
                    "em" => marks.em = true,
                    "code" => marks.code = true,
                    "underline" => marks.underline = true,
                    "strike-through" => marks.strike = true,
                    annotation => {
                        href = block
                            .mark_defs
                            .iter()
                            .find(|def| def.key == annotation && def.kind == "link")
                            .and_then(|def| def.href.as_deref())
                            .and_then(clean_href)
                            .or(href);
                    }
                }
            }
            RichSpan {
                text: span.text.clone(),
                marks,
                href,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MarkDef, PortableSpan};
    use pretty_assertions::assert_eq;

    fn span(text: &str, marks: &[&str]) -> PortableSpan {
        PortableSpan {
            key: String::new(),
            text: text.to_string(),
            marks: marks.iter().map(|m| m.to_string()).collect(),
        }
    }

    fn list_item(key: &str, kind: ListKind, text: &str) -> PortableBlock {
        PortableBlock {
            key: key.to_string(),
            list_item: Some(kind),
            children: vec![span(text, &[])],
            ..PortableBlock::default()
        }
    }

    #[test]
    fn test_consecutive_list_items_are_grouped() {
        let blocks = vec![
            PortableBlock::paragraph("p1", "Intro"),
            list_item("l1", ListKind::Bullet, "one"),
            list_item("l2", ListKind::Bullet, "two"),
            list_item("l3", ListKind::Number, "first"),
            PortableBlock::paragraph("p2", "Outro"),
        ];

        let rich = render_rich_text(&blocks);

        assert_eq!(rich.blocks.len(), 4);
        match &rich.blocks[1] {
            RichBlock::List { ordered, items } => {
                assert!(!ordered);
                assert_eq!(items.len(), 2);
            }
            other => panic!("expected bullet list, got {other:?}"),
        }
        assert!(matches!(
            rich.blocks[2],
            RichBlock::List { ordered: true, .. }
        ));
    }

    #[test]
    fn test_marks_and_link_annotations() {
        let block = PortableBlock {
            key: "p".to_string(),
            children: vec![
                span("bold ", &["strong"]),
                span("link", &["em", "lnk1"]),
                span(" broken", &["lnk2"]),
            ],
            mark_defs: vec![
                MarkDef {
                    key: "lnk1".to_string(),
                    kind: "link".to_string(),
                    href: Some("https://example.com".to_string()),
                },
                MarkDef {
                    key: "lnk2".to_string(),
                    kind: "link".to_string(),
                    href: Some("javascript:alert(1)".to_string()),
                },
            ],
            ..PortableBlock::default()
        };

        let rich = render_rich_text(&[block]);
        let RichBlock::Paragraph { spans, .. } = &rich.blocks[0] else {
            panic!("expected paragraph");
        };

        assert!(spans[0].marks.strong);
        assert!(spans[1].marks.em);
        assert_eq!(spans[1].href.as_deref(), Some("https://example.com"));
        assert_eq!(spans[2].href, None);
    }

    #[test]
    fn test_heading_styles_and_blank_blocks() {
        let mut heading = PortableBlock::paragraph("h", "Our process");
        heading.style = Some("h3".to_string());
        let blank = PortableBlock::paragraph("b", "   ");

        let rich = render_rich_text(&[heading, blank]);

        assert_eq!(rich.blocks.len(), 1);
        assert!(matches!(rich.blocks[0], RichBlock::Heading { level: 3, .. }));
        assert_eq!(rich.plain_text(), "Our process");
    }

    #[test]
    fn test_all_blank_field_is_empty() {
        let rich = render_rich_text(&[PortableBlock::paragraph("a", "")]);
        assert!(rich.is_empty());
    }
}
