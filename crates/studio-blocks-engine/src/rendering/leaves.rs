//! Leaf kinds: payload in, view out. Each function returns `None` when the
//! block lacks what it needs to be shown.

use crate::models::{
    ButtonLinkBlock, CalloutLinkBlock, CompanyLinksBlock, ContactSectionBlock, DetailedListBlock,
    DividerBlock, FaqListBlock, IconListBlock, ImageBlock, ImageGalleryBlock, ImageWidth,
    InternalRef, MapBlock, QuoteBlock, ServiceListBlock, StatListBlock, StatementBlock,
    TextBlock, TextListBlock, VideoBlock,
};
use crate::rendering::embeds::{map_embed_url, map_height, video_embed_url};
use crate::rendering::links::{
    email_href, phone_href, resolve_destination, resolve_link, route_for,
};
use crate::rendering::node::*;
use crate::rendering::rich_text::render_rich_text;
use crate::rendering::style::{DEFAULT_GALLERY_COLUMNS, MAX_GRID_COLUMNS, resolve_alignment};
use crate::rendering::{RenderContext, non_blank};

pub(crate) const CONTENT_IMAGE_WIDTH: u32 = 1200;
pub(crate) const THUMBNAIL_WIDTH: u32 = 800;

const DEFAULT_CALLOUT_LABEL: &str = "Learn more";
const DEFAULT_CONTACT_HEADING: &str = "Get in touch";
const DEFAULT_SUBMIT_LABEL: &str = "Send message";
const DEFAULT_SUCCESS_MESSAGE: &str = "Thanks for your message. We'll be in touch soon.";

pub(super) fn text(block: &TextBlock, ctx: &RenderContext<'_>) -> Option<NodeView> {
    let body = render_rich_text(&block.body);
    if body.is_empty() {
        return None;
    }
    Some(NodeView::Text(TextView {
        alignment: resolve_alignment(block.alignment, ctx.alignment),
        body,
    }))
}

pub(super) fn statement(block: &StatementBlock, ctx: &RenderContext<'_>) -> Option<NodeView> {
    Some(NodeView::Statement(StatementView {
        text: non_blank(block.text.as_deref())?,
        alignment: resolve_alignment(block.alignment, ctx.alignment),
    }))
}

pub(super) fn quote(block: &QuoteBlock, ctx: &RenderContext<'_>) -> Option<NodeView> {
    Some(NodeView::Quote(QuoteView {
        text: non_blank(block.text.as_deref())?,
        attribution: non_blank(block.attribution.as_deref()),
        role: non_blank(block.role.as_deref()),
        alignment: resolve_alignment(block.alignment, ctx.alignment),
    }))
}

pub(super) fn divider(block: &DividerBlock) -> Option<NodeView> {
    Some(NodeView::Divider {
        spacing: block.spacing,
    })
}

pub(super) fn image(block: &ImageBlock, ctx: &RenderContext<'_>) -> Option<NodeView> {
    let full_width = block.width == ImageWidth::Full;
    let width = (!full_width).then_some(CONTENT_IMAGE_WIDTH);
    let mut view = ctx.image(block.image.as_ref()?, width, full_width)?;
    if let Some(caption) = non_blank(block.caption.as_deref()) {
        view.caption = Some(caption);
    }
    Some(NodeView::Image(view))
}

pub(super) fn gallery(block: &ImageGalleryBlock, ctx: &RenderContext<'_>) -> Option<NodeView> {
    let images: Vec<_> = block
        .images
        .iter()
        .filter_map(|image| ctx.image(image, Some(THUMBNAIL_WIDTH), false))
        .collect();
    if images.is_empty() {
        return None;
    }
    Some(NodeView::Gallery(GalleryView {
        columns: block
            .columns
            .unwrap_or(DEFAULT_GALLERY_COLUMNS)
            .clamp(1, MAX_GRID_COLUMNS),
        images,
    }))
}

pub(super) fn map(block: &MapBlock) -> Option<NodeView> {
    let src = map_embed_url(block.embed_url.as_deref(), block.address.as_deref())?;
    let title = non_blank(block.title.as_deref())
        .or_else(|| non_blank(block.address.as_deref()).map(|a| format!("Map of {a}")))
        .unwrap_or_else(|| "Map".to_string());
    Some(NodeView::Map(EmbedView {
        src,
        title,
        height: Some(map_height(block.height)),
    }))
}

pub(super) fn video(block: &VideoBlock) -> Option<NodeView> {
    Some(NodeView::Video(EmbedView {
        src: video_embed_url(block.url.as_deref()?)?,
        title: non_blank(block.title.as_deref()).unwrap_or_else(|| "Video".to_string()),
        height: None,
    }))
}

pub(super) fn button(block: &ButtonLinkBlock, ctx: &RenderContext<'_>) -> Option<NodeView> {
    Some(NodeView::Button(ButtonView {
        label: non_blank(block.label.as_deref())?,
        link: resolve_destination(block.link.as_ref(), block.href.as_deref())?,
        variant: block.variant,
        alignment: resolve_alignment(block.alignment, ctx.alignment),
    }))
}

pub(super) fn callout(block: &CalloutLinkBlock) -> Option<NodeView> {
    Some(NodeView::Callout(CalloutView {
        title: non_blank(block.title.as_deref())?,
        body: non_blank(block.body.as_deref()),
        label: non_blank(block.label.as_deref())
            .unwrap_or_else(|| DEFAULT_CALLOUT_LABEL.to_string()),
        link: resolve_destination(block.link.as_ref(), block.href.as_deref())?,
    }))
}

/// `None` for an empty list so the block is skipped as a whole.
fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

pub(super) fn icon_list(block: &IconListBlock) -> Option<NodeView> {
    let items = block
        .items
        .iter()
        .filter_map(|item| {
            Some(IconItemView {
                key: item.key.clone(),
                icon: non_blank(item.icon.as_deref()),
                title: non_blank(item.title.as_deref())?,
                text: non_blank(item.text.as_deref()),
            })
        })
        .collect();
    non_empty(items).map(NodeView::IconList)
}

pub(super) fn detailed_list(block: &DetailedListBlock) -> Option<NodeView> {
    let items = block
        .items
        .iter()
        .filter_map(|item| {
            Some(DetailedItemView {
                key: item.key.clone(),
                title: non_blank(item.title.as_deref())?,
                description: non_blank(item.description.as_deref()),
            })
        })
        .collect();
    non_empty(items).map(NodeView::DetailedList)
}

pub(super) fn stat_list(block: &StatListBlock) -> Option<NodeView> {
    let items = block
        .items
        .iter()
        .filter_map(|item| {
            Some(StatView {
                key: item.key.clone(),
                value: non_blank(item.value.as_deref())?,
                label: non_blank(item.label.as_deref())?,
            })
        })
        .collect();
    non_empty(items).map(NodeView::StatList)
}

fn list_entries(block: &TextListBlock) -> Option<Vec<ListEntryView>> {
    let items = block
        .items
        .iter()
        .filter_map(|item| {
            Some(ListEntryView {
                key: item.key.clone(),
                text: non_blank(item.text.as_deref())?,
            })
        })
        .collect();
    non_empty(items)
}

pub(super) fn check_list(block: &TextListBlock) -> Option<NodeView> {
    list_entries(block).map(NodeView::CheckList)
}

pub(super) fn item_list(block: &TextListBlock) -> Option<NodeView> {
    Some(NodeView::ItemList {
        ordered: block.ordered,
        items: list_entries(block)?,
    })
}

pub(super) fn service_list(block: &ServiceListBlock) -> Option<NodeView> {
    let services = block
        .services
        .iter()
        .filter_map(|service| {
            let link = non_blank(service.slug.as_deref())
                .and_then(|slug| {
                    route_for(&InternalRef {
                        doc_type: "service".to_string(),
                        slug: Some(slug),
                    })
                })
                .map(|href| LinkView {
                    href,
                    new_tab: false,
                });
            Some(ServiceView {
                key: service.key.clone(),
                title: non_blank(service.title.as_deref())?,
                summary: non_blank(service.summary.as_deref()),
                link,
            })
        })
        .collect();
    non_empty(services).map(NodeView::ServiceList)
}

pub(super) fn faq_list(block: &FaqListBlock) -> Option<NodeView> {
    let items = block
        .items
        .iter()
        .filter_map(|item| {
            let answer = render_rich_text(&item.answer);
            if answer.is_empty() {
                return None;
            }
            Some(FaqView {
                key: item.key.clone(),
                question: non_blank(item.question.as_deref())?,
                answer,
            })
        })
        .collect();
    non_empty(items).map(NodeView::FaqList)
}

pub(super) fn company_links(
    block: &CompanyLinksBlock,
    ctx: &RenderContext<'_>,
) -> Option<NodeView> {
    let links = ctx
        .shared
        .company_links
        .as_deref()?
        .iter()
        .filter_map(|company| {
            let platform = non_blank(company.platform.as_deref());
            Some(CompanyLinkView {
                key: company.key.clone(),
                label: non_blank(company.label.as_deref()).or_else(|| platform.clone())?,
                platform,
                link: resolve_link(company.link.as_ref()?)?,
            })
        })
        .collect();
    Some(NodeView::CompanyLinks(CompanyLinksView {
        heading: non_blank(block.heading.as_deref()),
        links: non_empty(links)?,
    }))
}

/// Always renders its heading. Contact lines come from the shared business
/// info and are left out when missing or malformed.
pub(super) fn contact_section(
    block: &ContactSectionBlock,
    ctx: &RenderContext<'_>,
) -> Option<NodeView> {
    let business = ctx.shared.business.as_ref();
    let form = ctx.shared.contact_form.as_ref().map(|form| ContactFormView {
        submit_label: non_blank(form.submit_label.as_deref())
            .unwrap_or_else(|| DEFAULT_SUBMIT_LABEL.to_string()),
        success_message: non_blank(form.success_message.as_deref())
            .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
        show_phone_field: form.show_phone_field,
        subject_options: form
            .subject_options
            .iter()
            .filter_map(|option| non_blank(Some(option.as_str())))
            .collect(),
    });

    Some(NodeView::Contact(ContactView {
        heading: non_blank(block.heading.as_deref())
            .unwrap_or_else(|| DEFAULT_CONTACT_HEADING.to_string()),
        intro: non_blank(block.intro.as_deref()),
        business_name: business.and_then(|b| non_blank(b.name.as_deref())),
        email: business.and_then(|b| contact_line(b.email.as_deref(), email_href)),
        phone: business.and_then(|b| contact_line(b.phone.as_deref(), phone_href)),
        address: business
            .and_then(|b| b.address.as_ref())
            .map(|address| address.lines())
            .unwrap_or_default(),
        opening_hours: business
            .map(|b| {
                b.opening_hours
                    .iter()
                    .filter_map(|line| non_blank(Some(line.as_str())))
                    .collect()
            })
            .unwrap_or_default(),
        form,
    }))
}

fn contact_line(raw: Option<&str>, to_href: fn(&str) -> Option<String>) -> Option<ContactLine> {
    let text = non_blank(raw)?;
    let href = to_href(&text)?;
    Some(ContactLine {
        text,
        link: LinkView {
            href,
            new_tab: false,
        },
    })
}
