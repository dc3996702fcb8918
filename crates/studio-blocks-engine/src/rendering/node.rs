//! Render tree produced by the dispatcher.
//!
//! Nodes are plain data: everything a front end needs has been resolved
//! (hrefs, image URLs, embed URLs, effective alignment), so a view layer
//! only has to map each [`NodeView`] variant to markup.

use crate::models::{Alignment, Background, ButtonVariant, ColumnRatio, ShowOn, Spacing};
use crate::path::Path;
use crate::rendering::rich_text::RichText;

/// One rendered block.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderNode {
    /// Identity key of the source block, for keyed list rendering.
    pub key: String,
    /// Location of the source block in its document.
    pub path: Path,
    /// Encoded live-editing binding, present only when editing is enabled.
    pub binding: Option<String>,
    pub view: NodeView,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeView {
    Text(TextView),
    Statement(StatementView),
    Quote(QuoteView),
    Divider { spacing: Spacing },
    Image(ImageView),
    Gallery(GalleryView),
    Map(EmbedView),
    Video(EmbedView),
    Button(ButtonView),
    Callout(CalloutView),
    Card(CardView),
    IconList(Vec<IconItemView>),
    DetailedList(Vec<DetailedItemView>),
    StatList(Vec<StatView>),
    CheckList(Vec<ListEntryView>),
    ItemList {
        ordered: bool,
        items: Vec<ListEntryView>,
    },
    ServiceCard(ServiceCardView),
    ServiceList(Vec<ServiceView>),
    FaqList(Vec<FaqView>),
    CompanyLinks(CompanyLinksView),
    TwoColumn(TwoColumnView),
    Grid(GridView),
    Responsive(ResponsiveView),
    Expanding(ExpandingView),
    Contact(ContactView),
    Section(SectionView),
    Wrapper(WrapperView),
}

/// A resolved destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub href: String,
    pub new_tab: bool,
}

impl LinkView {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextView {
    pub alignment: Alignment,
    pub body: RichText,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatementView {
    pub text: String,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteView {
    pub text: String,
    pub attribution: Option<String>,
    pub role: Option<String>,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageView {
    pub key: String,
    pub src: String,
    pub alt: String,
    pub caption: Option<String>,
    pub width: u32,
    pub height: u32,
    pub full_width: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    pub columns: u8,
    pub images: Vec<ImageView>,
}

/// An iframe embed (video player or map).
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedView {
    pub src: String,
    pub title: String,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub label: String,
    pub link: LinkView,
    pub variant: ButtonVariant,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalloutView {
    pub title: String,
    pub body: Option<String>,
    pub label: String,
    pub link: LinkView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CtaView {
    pub label: String,
    pub link: LinkView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub title: Option<String>,
    pub body: Option<String>,
    pub image: Option<ImageView>,
    pub cta: Option<CtaView>,
    pub alignment: Alignment,
    pub children: Vec<RenderNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconItemView {
    pub key: String,
    pub icon: Option<String>,
    pub title: String,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailedItemView {
    pub key: String,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatView {
    pub key: String,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListEntryView {
    pub key: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCardView {
    pub title: String,
    pub summary: Option<String>,
    pub image: Option<ImageView>,
    pub link: Option<LinkView>,
    pub alignment: Alignment,
    pub children: Vec<RenderNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceView {
    pub key: String,
    pub title: String,
    pub summary: Option<String>,
    pub link: Option<LinkView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqView {
    pub key: String,
    pub question: String,
    pub answer: RichText,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyLinksView {
    pub heading: Option<String>,
    pub links: Vec<CompanyLinkView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyLinkView {
    pub key: String,
    pub label: String,
    pub platform: Option<String>,
    pub link: LinkView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TwoColumnView {
    pub ratio: ColumnRatio,
    pub vertically_centered: bool,
    pub left: Vec<RenderNode>,
    pub right: Vec<RenderNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridView {
    pub columns: u8,
    pub items: Vec<RenderNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponsiveView {
    pub show_on: ShowOn,
    pub children: Vec<RenderNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpandingView {
    pub expand_label: String,
    pub collapse_label: String,
    pub initially_expanded: bool,
    pub children: Vec<RenderNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactView {
    pub heading: String,
    pub intro: Option<String>,
    pub business_name: Option<String>,
    pub email: Option<ContactLine>,
    pub phone: Option<ContactLine>,
    pub address: Vec<String>,
    pub opening_hours: Vec<String>,
    pub form: Option<ContactFormView>,
}

/// A contact detail shown as text and linked with `mailto:` / `tel:`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactLine {
    pub text: String,
    pub link: LinkView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactFormView {
    pub submit_label: String,
    pub success_message: String,
    pub show_phone_field: bool,
    pub subject_options: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLevel {
    Section,
    SubSection,
    SubSubSection,
}

impl SectionLevel {
    /// Heading rank used for the section title.
    pub fn heading_level(self) -> u8 {
        match self {
            SectionLevel::Section => 2,
            SectionLevel::SubSection => 3,
            SectionLevel::SubSubSection => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub level: SectionLevel,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub anchor_id: Option<String>,
    pub alignment: Alignment,
    pub children: Vec<RenderNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WrapperView {
    pub background: Background,
    pub alignment: Alignment,
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    /// Rendered children in display order; two-column layouts list the left
    /// slot before the right one.
    pub fn children(&self) -> Vec<&RenderNode> {
        match &self.view {
            NodeView::Card(card) => card.children.iter().collect(),
            NodeView::ServiceCard(card) => card.children.iter().collect(),
            NodeView::TwoColumn(cols) => cols.left.iter().chain(cols.right.iter()).collect(),
            NodeView::Grid(grid) => grid.items.iter().collect(),
            NodeView::Responsive(wrapper) => wrapper.children.iter().collect(),
            NodeView::Expanding(expanding) => expanding.children.iter().collect(),
            NodeView::Section(section) => section.children.iter().collect(),
            NodeView::Wrapper(wrapper) => wrapper.children.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Short name of the view, used in outlines and logs.
    pub fn view_name(&self) -> &'static str {
        match &self.view {
            NodeView::Text(_) => "text",
            NodeView::Statement(_) => "statement",
            NodeView::Quote(_) => "quote",
            NodeView::Divider { .. } => "divider",
            NodeView::Image(_) => "image",
            NodeView::Gallery(_) => "gallery",
            NodeView::Map(_) => "map",
            NodeView::Video(_) => "video",
            NodeView::Button(_) => "button",
            NodeView::Callout(_) => "callout",
            NodeView::Card(_) => "card",
            NodeView::IconList(_) => "icon-list",
            NodeView::DetailedList(_) => "detailed-list",
            NodeView::StatList(_) => "stat-list",
            NodeView::CheckList(_) => "check-list",
            NodeView::ItemList { .. } => "item-list",
            NodeView::ServiceCard(_) => "service-card",
            NodeView::ServiceList(_) => "service-list",
            NodeView::FaqList(_) => "faq-list",
            NodeView::CompanyLinks(_) => "company-links",
            NodeView::TwoColumn(_) => "two-column",
            NodeView::Grid(_) => "grid",
            NodeView::Responsive(_) => "responsive",
            NodeView::Expanding(_) => "expanding",
            NodeView::Contact(_) => "contact",
            NodeView::Section(_) => "section",
            NodeView::Wrapper(_) => "wrapper",
        }
    }

    /// This node followed by all of its descendants, depth first.
    pub fn walk(&self) -> Vec<&RenderNode> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.walk());
        }
        out
    }
}
