//! Plain-text outline of a rendered page, one line per node.

use std::fmt::Write;

use crate::rendering::RenderedPage;
use crate::rendering::node::{NodeView, RenderNode};

const LABEL_WIDTH: usize = 40;

/// Indented tree of `<view> <path> "<label>"` lines followed by one `!` line
/// per skipped block.
pub fn outline(page: &RenderedPage) -> String {
    let mut out = String::new();
    for node in &page.nodes {
        write_node(&mut out, node, 0);
    }
    for diagnostic in &page.diagnostics {
        let _ = writeln!(out, "! {diagnostic}");
    }
    out
}

fn write_node(out: &mut String, node: &RenderNode, depth: usize) {
    let _ = write!(out, "{}{} {}", "  ".repeat(depth), node.view_name(), node.path);
    if let Some(label) = label(node) {
        let _ = write!(out, " \"{}\"", truncate(&label));
    }
    out.push('\n');
    for child in node.children() {
        write_node(out, child, depth + 1);
    }
}

fn label(node: &RenderNode) -> Option<String> {
    match &node.view {
        NodeView::Text(text) => Some(text.body.plain_text()),
        NodeView::Statement(statement) => Some(statement.text.clone()),
        NodeView::Quote(quote) => Some(quote.text.clone()),
        NodeView::Button(button) => Some(button.label.clone()),
        NodeView::Callout(callout) => Some(callout.title.clone()),
        NodeView::Card(card) => card.title.clone(),
        NodeView::ServiceCard(card) => Some(card.title.clone()),
        NodeView::Contact(contact) => Some(contact.heading.clone()),
        NodeView::Section(section) => section.title.clone(),
        NodeView::Video(embed) | NodeView::Map(embed) => Some(embed.title.clone()),
        _ => None,
    }
}

fn truncate(label: &str) -> String {
    let single_line = label.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= LABEL_WIDTH {
        single_line
    } else {
        let cut: String = single_line.chars().take(LABEL_WIDTH).collect();
        format!("{}...", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_collapses_whitespace() {
        assert_eq!(truncate("Hello\n\n  world"), "Hello world");
        assert_eq!(
            truncate("We design and build websites for small independent businesses"),
            "We design and build websites for small i..."
        );
    }
}
