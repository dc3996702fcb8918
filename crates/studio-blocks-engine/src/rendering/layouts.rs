//! Container kinds. Each one renders its children through the dispatcher and
//! renders nothing itself when all of them were skipped.

use crate::models::{
    Alignment, CardBlock, ContentWrapperBlock, ExpandingContentBlock, GridLayoutBlock, KindTag,
    ResponsiveWrapperBlock, SectionBlock, ServiceCardBlock, TwoColumnLayoutBlock,
};
use crate::rendering::diagnostics::Diagnostics;
use crate::rendering::dispatch::render_children;
use crate::rendering::leaves::THUMBNAIL_WIDTH;
use crate::rendering::links::resolve_destination;
use crate::rendering::node::*;
use crate::rendering::style::{grid_columns, resolve_alignment};
use crate::rendering::{RenderContext, non_blank};

const DEFAULT_EXPAND_LABEL: &str = "Show more";
const DEFAULT_COLLAPSE_LABEL: &str = "Show less";

fn non_empty(children: Vec<RenderNode>) -> Option<Vec<RenderNode>> {
    (!children.is_empty()).then_some(children)
}

/// Cards do not inherit alignment: their own setting applies, left when
/// unset.
pub(super) fn card(
    block: &CardBlock,
    ctx: &RenderContext<'_>,
    diagnostics: &mut Diagnostics,
) -> Option<NodeView> {
    let alignment = resolve_alignment(block.alignment, Alignment::Left);
    let inner = ctx.with_alignment(alignment);
    let children = render_children(KindTag::Card, "content", &block.content, &inner, diagnostics);

    let title = non_blank(block.title.as_deref());
    let body = non_blank(block.body.as_deref());
    let cta = non_blank(block.cta_text.as_deref()).and_then(|label| {
        Some(CtaView {
            label,
            link: resolve_destination(block.link.as_ref(), block.href.as_deref())?,
        })
    });

    if title.is_none() && body.is_none() && cta.is_none() && children.is_empty() {
        return None;
    }

    Some(NodeView::Card(CardView {
        title,
        body,
        image: block
            .image
            .as_ref()
            .and_then(|image| ctx.image(image, Some(THUMBNAIL_WIDTH), false)),
        cta,
        alignment,
        children,
    }))
}

pub(super) fn service_card(
    block: &ServiceCardBlock,
    ctx: &RenderContext<'_>,
    diagnostics: &mut Diagnostics,
) -> Option<NodeView> {
    let title = non_blank(block.title.as_deref())?;
    let alignment = resolve_alignment(block.alignment, Alignment::Left);
    let inner = ctx.with_alignment(alignment);

    Some(NodeView::ServiceCard(ServiceCardView {
        title,
        summary: non_blank(block.summary.as_deref()),
        image: block
            .image
            .as_ref()
            .and_then(|image| ctx.image(image, Some(THUMBNAIL_WIDTH), false)),
        link: resolve_destination(block.link.as_ref(), block.href.as_deref()),
        alignment,
        children: render_children(
            KindTag::ServiceCard,
            "content",
            &block.content,
            &inner,
            diagnostics,
        ),
    }))
}

pub(super) fn two_column(
    block: &TwoColumnLayoutBlock,
    ctx: &RenderContext<'_>,
    diagnostics: &mut Diagnostics,
) -> Option<NodeView> {
    let left = render_children(
        KindTag::TwoColumnLayout,
        "leftColumn",
        &block.left_column,
        ctx,
        diagnostics,
    );
    let right = render_children(
        KindTag::TwoColumnLayout,
        "rightColumn",
        &block.right_column,
        ctx,
        diagnostics,
    );
    if left.is_empty() && right.is_empty() {
        return None;
    }

    Some(NodeView::TwoColumn(TwoColumnView {
        ratio: block.ratio,
        vertically_centered: block.vertically_centered,
        left,
        right,
    }))
}

pub(super) fn grid(
    block: &GridLayoutBlock,
    ctx: &RenderContext<'_>,
    diagnostics: &mut Diagnostics,
) -> Option<NodeView> {
    let items = render_children(KindTag::GridLayout, "items", &block.items, ctx, diagnostics);
    Some(NodeView::Grid(GridView {
        columns: grid_columns(block.columns),
        items: non_empty(items)?,
    }))
}

pub(super) fn responsive(
    block: &ResponsiveWrapperBlock,
    ctx: &RenderContext<'_>,
    diagnostics: &mut Diagnostics,
) -> Option<NodeView> {
    if !block.show_on.any() {
        return None;
    }
    let children = render_children(
        KindTag::ResponsiveWrapper,
        "content",
        &block.content,
        ctx,
        diagnostics,
    );
    Some(NodeView::Responsive(ResponsiveView {
        show_on: block.show_on,
        children: non_empty(children)?,
    }))
}

pub(super) fn expanding(
    block: &ExpandingContentBlock,
    ctx: &RenderContext<'_>,
    diagnostics: &mut Diagnostics,
) -> Option<NodeView> {
    let children = render_children(
        KindTag::ExpandingContent,
        "content",
        &block.content,
        ctx,
        diagnostics,
    );
    Some(NodeView::Expanding(ExpandingView {
        expand_label: non_blank(block.expand_label.as_deref())
            .unwrap_or_else(|| DEFAULT_EXPAND_LABEL.to_string()),
        collapse_label: non_blank(block.collapse_label.as_deref())
            .unwrap_or_else(|| DEFAULT_COLLAPSE_LABEL.to_string()),
        initially_expanded: block.initially_expanded,
        children: non_empty(children)?,
    }))
}

pub(super) fn section(
    level: SectionLevel,
    block: &SectionBlock,
    ctx: &RenderContext<'_>,
    diagnostics: &mut Diagnostics,
) -> Option<NodeView> {
    let container = match level {
        SectionLevel::Section => KindTag::Section,
        SectionLevel::SubSection => KindTag::SubSection,
        SectionLevel::SubSubSection => KindTag::SubSubSection,
    };
    let alignment = resolve_alignment(block.alignment, ctx.alignment);
    let children = render_children(
        container,
        "content",
        &block.content,
        &ctx.with_alignment(alignment),
        diagnostics,
    );

    let title = non_blank(block.title.as_deref());
    let subtitle = non_blank(block.subtitle.as_deref());
    let anchor_id = block.anchor_id.as_deref().and_then(anchor_id);
    // A heading keeps the section alive even when every child was skipped.
    if children.is_empty() && title.is_none() && subtitle.is_none() && anchor_id.is_none() {
        return None;
    }

    Some(NodeView::Section(SectionView {
        level,
        title,
        subtitle,
        anchor_id,
        alignment,
        children,
    }))
}

pub(super) fn content_wrapper(
    block: &ContentWrapperBlock,
    ctx: &RenderContext<'_>,
    diagnostics: &mut Diagnostics,
) -> Option<NodeView> {
    let alignment = resolve_alignment(block.alignment, ctx.alignment);
    let children = render_children(
        KindTag::ContentWrapper,
        "content",
        &block.content,
        &ctx.with_alignment(alignment),
        diagnostics,
    );
    Some(NodeView::Wrapper(WrapperView {
        background: block.background,
        alignment,
        children: non_empty(children)?,
    }))
}

/// Lowercase the authored anchor and replace anything outside
/// `[a-z0-9_-]` with `-`, so it is safe as an element id.
fn anchor_id(raw: &str) -> Option<String> {
    let id: String = raw
        .trim()
        .trim_start_matches('#')
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let id = id.trim_matches('-');
    (!id.is_empty()).then(|| id.to_string())
}
