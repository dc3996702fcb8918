use crate::models::{Block, BlockKind, KindTag};
use crate::rendering::diagnostics::{Diagnostic, Diagnostics, SkipReason};
use crate::rendering::node::{RenderNode, SectionLevel};
use crate::rendering::{RenderContext, layouts, leaves};
use crate::schema::allowed_children;

/// Render one block located at `ctx.path`.
///
/// Returns `None` when the block renders nothing: its required payload is
/// missing, all of its children were skipped, or its kind is unknown or
/// malformed. Only the last two are reported to `diagnostics`.
pub fn render_block(
    block: &Block,
    ctx: &RenderContext<'_>,
    diagnostics: &mut Diagnostics,
) -> Option<RenderNode> {
    let view = match &block.kind {
        BlockKind::Text(text) => leaves::text(text, ctx),
        BlockKind::Statement(statement) => leaves::statement(statement, ctx),
        BlockKind::Quote(quote) => leaves::quote(quote, ctx),
        BlockKind::Divider(divider) => leaves::divider(divider),
        BlockKind::Image(image) => leaves::image(image, ctx),
        BlockKind::ImageGallery(gallery) => leaves::gallery(gallery, ctx),
        BlockKind::Map(map) => leaves::map(map),
        BlockKind::Video(video) => leaves::video(video),
        BlockKind::ButtonLink(button) => leaves::button(button, ctx),
        BlockKind::CalloutLink(callout) => leaves::callout(callout),
        BlockKind::IconList(list) => leaves::icon_list(list),
        BlockKind::DetailedList(list) => leaves::detailed_list(list),
        BlockKind::StatList(list) => leaves::stat_list(list),
        BlockKind::CheckList(list) => leaves::check_list(list),
        BlockKind::ItemList(list) => leaves::item_list(list),
        BlockKind::ServiceList(list) => leaves::service_list(list),
        BlockKind::FaqList(list) => leaves::faq_list(list),
        BlockKind::CompanyLinks(links) => leaves::company_links(links, ctx),
        BlockKind::ContactSection(contact) => leaves::contact_section(contact, ctx),
        BlockKind::Card(card) => layouts::card(card, ctx, diagnostics),
        BlockKind::ServiceCard(card) => layouts::service_card(card, ctx, diagnostics),
        BlockKind::TwoColumnLayout(layout) => layouts::two_column(layout, ctx, diagnostics),
        BlockKind::GridLayout(grid) => layouts::grid(grid, ctx, diagnostics),
        BlockKind::ResponsiveWrapper(wrapper) => layouts::responsive(wrapper, ctx, diagnostics),
        BlockKind::ExpandingContent(expanding) => {
            layouts::expanding(expanding, ctx, diagnostics)
        }
        BlockKind::Section(section) => {
            layouts::section(SectionLevel::Section, section, ctx, diagnostics)
        }
        BlockKind::SubSection(section) => {
            layouts::section(SectionLevel::SubSection, section, ctx, diagnostics)
        }
        BlockKind::SubSubSection(section) => {
            layouts::section(SectionLevel::SubSubSection, section, ctx, diagnostics)
        }
        BlockKind::ContentWrapper(wrapper) => layouts::content_wrapper(wrapper, ctx, diagnostics),
        BlockKind::Unrecognized { kind } => {
            diagnostics.report(Diagnostic {
                path: ctx.path.clone(),
                kind: kind.clone(),
                reason: SkipReason::UnrecognizedKind,
            });
            None
        }
        BlockKind::Invalid { kind, reason } => {
            diagnostics.report(Diagnostic {
                path: ctx.path.clone(),
                kind: kind.to_string(),
                reason: SkipReason::InvalidPayload(reason.clone()),
            });
            None
        }
    }?;

    Some(RenderNode {
        key: block.key.clone(),
        path: ctx.path.clone(),
        binding: ctx.binding(),
        view,
    })
}

/// Render the children a container keeps in `field`.
pub(super) fn render_children(
    container: KindTag,
    field: &str,
    children: &[Block],
    ctx: &RenderContext<'_>,
    diagnostics: &mut Diagnostics,
) -> Vec<RenderNode> {
    render_sequence(
        Some(container),
        allowed_children(container),
        field,
        children,
        ctx,
        diagnostics,
    )
}

/// Render a block sequence in authored order. Blocks of a kind outside
/// `allowed` are reported and skipped without being visited, so hand-made
/// data cannot nest deeper than the schema permits.
pub(super) fn render_sequence(
    parent: Option<KindTag>,
    allowed: &[KindTag],
    field: &str,
    blocks: &[Block],
    ctx: &RenderContext<'_>,
    diagnostics: &mut Diagnostics,
) -> Vec<RenderNode> {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(index, block)| {
            let child_ctx = ctx.at(ctx.path.child(field, &block.key, index));
            if let Some(tag) = block.tag()
                && !allowed.contains(&tag)
            {
                diagnostics.report(Diagnostic {
                    path: child_ctx.path,
                    kind: block.kind_name().to_string(),
                    reason: SkipReason::NotAllowedHere { parent },
                });
                return None;
            }
            render_block(block, &child_ctx, diagnostics)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Document, SectionBlock, SiteData, StatementBlock, TwoColumnLayoutBlock,
    };
    use crate::path::Path;
    use crate::rendering::{
        CdnImageUrlBuilder, EditingTarget, NodeView, RenderMode, RenderSettings,
    };
    use pretty_assertions::assert_eq;

    fn statement(key: &str, text: &str) -> Block {
        Block::new(
            key,
            BlockKind::Statement(StatementBlock {
                text: Some(text.to_string()),
                ..StatementBlock::default()
            }),
        )
    }

    fn settings() -> RenderSettings {
        RenderSettings::new(CdnImageUrlBuilder::new("p", "d")).with_mode(RenderMode::Production)
    }

    #[test]
    fn test_leaf_node_carries_key_and_path() {
        let document = Document::default();
        let shared = SiteData::default();
        let settings = settings();
        let ctx = RenderContext::for_document(&document, &shared, &settings)
            .at(Path::root().keyed("content", "st1"));
        let mut diagnostics = Diagnostics::new(RenderMode::Production);

        let node = render_block(&statement("st1", "Hello"), &ctx, &mut diagnostics).unwrap();

        assert_eq!(node.key, "st1");
        assert_eq!(node.path.as_str(), r#"content[_key=="st1"]"#);
        assert_eq!(node.binding, None);
        assert!(matches!(node.view, NodeView::Statement(_)));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_missing_payload_is_a_silent_skip() {
        let document = Document::default();
        let shared = SiteData::default();
        let settings = settings();
        let ctx = RenderContext::for_document(&document, &shared, &settings);
        let mut diagnostics = Diagnostics::new(RenderMode::Production);

        assert_eq!(render_block(&statement("x", "   "), &ctx, &mut diagnostics), None);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_disallowed_child_is_reported_not_visited() {
        let nested_layout = Block::new(
            "inner",
            BlockKind::TwoColumnLayout(TwoColumnLayoutBlock {
                left_column: vec![statement("deep", "never rendered")],
                ..TwoColumnLayoutBlock::default()
            }),
        );
        let outer = Block::new(
            "outer",
            BlockKind::TwoColumnLayout(TwoColumnLayoutBlock {
                left_column: vec![nested_layout, statement("ok", "kept")],
                ..TwoColumnLayoutBlock::default()
            }),
        );
        let document = Document::default();
        let shared = SiteData::default();
        let settings = settings();
        let ctx = RenderContext::for_document(&document, &shared, &settings)
            .at(Path::root().keyed("content", "outer"));
        let mut diagnostics = Diagnostics::new(RenderMode::Production);

        let node = render_block(&outer, &ctx, &mut diagnostics).unwrap();

        assert_eq!(node.children().len(), 1);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics.entries()[0].reason,
            SkipReason::NotAllowedHere {
                parent: Some(KindTag::TwoColumnLayout)
            }
        );
        assert_eq!(
            diagnostics.entries()[0].path.as_str(),
            r#"content[_key=="outer"].leftColumn[_key=="inner"]"#
        );
    }

    #[test]
    fn test_binding_attached_when_editing() {
        let document = Document::new("page-1", Vec::new());
        let shared = SiteData::default();
        let settings = settings().with_editing(EditingTarget::new("p", "d", "https://s.test"));
        let section = Block::new(
            "s1",
            BlockKind::Section(SectionBlock {
                content: vec![statement("st", "Hi")],
                ..SectionBlock::default()
            }),
        );
        let ctx = RenderContext::for_document(&document, &shared, &settings)
            .at(Path::root().keyed("content", "s1"));
        let mut diagnostics = Diagnostics::new(RenderMode::Production);

        let node = render_block(&section, &ctx, &mut diagnostics).unwrap();
        let child = node.children()[0];

        assert_eq!(
            child.binding.as_deref(),
            Some(
                r#"id=page-1;type=page;path=content[_key=="s1"].content[_key=="st"];base=https%3A%2F%2Fs.test;projectId=p;dataset=d"#
            )
        );
    }
}
