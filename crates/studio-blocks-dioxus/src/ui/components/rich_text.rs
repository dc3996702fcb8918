use dioxus::prelude::*;
use studio_blocks_engine::rendering::{RichBlock, RichSpan, RichText};

/// Renders projected rich text. Lists arrive already grouped.
#[component]
pub fn RichTextView(text: RichText) -> Element {
    rsx! {
        for block in text.blocks.iter() {
            {render_block(block)}
        }
    }
}

fn render_block(block: &RichBlock) -> Element {
    match block {
        RichBlock::Paragraph { key, spans } => rsx! {
            p { key: "{key}", {render_spans(spans)} }
        },
        RichBlock::BlockQuote { key, spans } => rsx! {
            blockquote { key: "{key}", {render_spans(spans)} }
        },
        RichBlock::Heading { key, level, spans } => match level {
            1 | 2 => rsx! { h2 { key: "{key}", {render_spans(spans)} } },
            3 => rsx! { h3 { key: "{key}", {render_spans(spans)} } },
            4 => rsx! { h4 { key: "{key}", {render_spans(spans)} } },
            5 => rsx! { h5 { key: "{key}", {render_spans(spans)} } },
            _ => rsx! { h6 { key: "{key}", {render_spans(spans)} } },
        },
        RichBlock::List {
            ordered: true,
            items,
        } => rsx! {
            ol {
                for item in items.iter() {
                    li { key: "{item.key}", {render_spans(&item.spans)} }
                }
            }
        },
        RichBlock::List {
            ordered: false,
            items,
        } => rsx! {
            ul {
                for item in items.iter() {
                    li { key: "{item.key}", {render_spans(&item.spans)} }
                }
            }
        },
    }
}

fn render_spans(spans: &[RichSpan]) -> Element {
    rsx! {
        for span in spans.iter() {
            {render_span(span)}
        }
    }
}

/// Wrap the span text in one element per mark, innermost first.
fn render_span(span: &RichSpan) -> Element {
    let marks = span.marks;
    let mut content = rsx! { "{span.text}" };

    if marks.code {
        content = rsx! { code { {content} } };
    }
    if marks.em {
        content = rsx! { em { {content} } };
    }
    if marks.strong {
        content = rsx! { strong { {content} } };
    }
    if marks.underline {
        content = rsx! { u { {content} } };
    }
    if marks.strike {
        content = rsx! { s { {content} } };
    }
    if let Some(href) = &span.href {
        let external = href.starts_with("http://") || href.starts_with("https://");
        content = rsx! {
            a {
                href: "{href}",
                target: external.then_some("_blank"),
                rel: external.then_some("noopener noreferrer"),
                {content}
            }
        };
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use studio_blocks_engine::rendering::RichListItem;
    use studio_blocks_engine::rendering::rich_text::Marks;

    fn span(text: &str) -> RichSpan {
        RichSpan {
            text: text.to_string(),
            ..RichSpan::default()
        }
    }

    fn render_text(blocks: Vec<RichBlock>) -> String {
        let mut dom = VirtualDom::new_with_props(
            RichTextView,
            RichTextViewProps {
                text: RichText { blocks },
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_marks_and_links() {
        let html = render_text(vec![RichBlock::Paragraph {
            key: "p".to_string(),
            spans: vec![
                span("Plain "),
                RichSpan {
                    text: "bold".to_string(),
                    marks: Marks {
                        strong: true,
                        ..Marks::default()
                    },
                    href: None,
                },
                RichSpan {
                    text: "site".to_string(),
                    marks: Marks::default(),
                    href: Some("https://example.com".to_string()),
                },
            ],
        }]);

        assert!(html.contains("<p>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains(r#"href="https://example.com""#));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[test]
    fn test_internal_link_stays_in_tab() {
        let html = render_text(vec![RichBlock::Paragraph {
            key: "p".to_string(),
            spans: vec![RichSpan {
                text: "work".to_string(),
                marks: Marks::default(),
                href: Some("/work".to_string()),
            }],
        }]);

        assert!(html.contains(r#"href="/work""#));
        assert!(!html.contains("_blank"));
    }

    #[test]
    fn test_grouped_list() {
        let html = render_text(vec![RichBlock::List {
            ordered: true,
            items: vec![
                RichListItem {
                    key: "a".to_string(),
                    spans: vec![span("one")],
                },
                RichListItem {
                    key: "b".to_string(),
                    spans: vec![span("two")],
                },
            ],
        }]);

        assert_eq!(html.matches("<ol>").count(), 1);
        assert_eq!(html.matches("<li>").count(), 2);
    }
}
