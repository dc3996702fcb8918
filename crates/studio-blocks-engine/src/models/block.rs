use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::{
    AlignmentSetting, Background, ButtonVariant, ColumnRatio, ImageRef, ImageWidth, KindTag,
    Link, PortableBlock, ShowOn, Spacing,
};

/// One node of a page's content tree.
///
/// `key` is supplied by the content source and is only unique among
/// siblings. A missing key decodes as the empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub key: String,
    pub kind: BlockKind,
}

/// Kind-specific payload of a block.
///
/// Decoding never fails on a single block: an unknown `_type` becomes
/// [`BlockKind::Unrecognized`] and a known `_type` with a payload of the wrong
/// shape becomes [`BlockKind::Invalid`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "_type", rename_all = "kebab-case")]
pub enum BlockKind {
    Text(TextBlock),
    Statement(StatementBlock),
    Quote(QuoteBlock),
    Divider(DividerBlock),
    Image(ImageBlock),
    ImageGallery(ImageGalleryBlock),
    Map(MapBlock),
    Video(VideoBlock),
    ButtonLink(ButtonLinkBlock),
    CalloutLink(CalloutLinkBlock),
    Card(CardBlock),
    IconList(IconListBlock),
    DetailedList(DetailedListBlock),
    StatList(StatListBlock),
    CheckList(TextListBlock),
    ItemList(TextListBlock),
    ServiceCard(ServiceCardBlock),
    ServiceList(ServiceListBlock),
    FaqList(FaqListBlock),
    CompanyLinks(CompanyLinksBlock),
    TwoColumnLayout(TwoColumnLayoutBlock),
    GridLayout(GridLayoutBlock),
    ResponsiveWrapper(ResponsiveWrapperBlock),
    ExpandingContent(ExpandingContentBlock),
    ContactSection(ContactSectionBlock),
    Section(SectionBlock),
    SubSection(SectionBlock),
    SubSubSection(SectionBlock),
    ContentWrapper(ContentWrapperBlock),
    /// `_type` missing or not one of the known kinds.
    #[serde(skip_deserializing)]
    Unrecognized { kind: String },
    /// Known kind whose payload could not be decoded.
    #[serde(skip_deserializing)]
    Invalid { kind: KindTag, reason: String },
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Block::from_value(value))
    }
}

impl Block {
    pub fn new(key: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    /// Decode one block from raw JSON without failing.
    pub fn from_value(value: Value) -> Self {
        let key = value
            .get("_key")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let raw_kind = value
            .get("_type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let kind = match raw_kind.parse::<KindTag>() {
            Err(_) => BlockKind::Unrecognized { kind: raw_kind },
            Ok(tag) => match serde_json::from_value::<BlockKind>(value) {
                Ok(kind) => kind,
                Err(err) => BlockKind::Invalid {
                    kind: tag,
                    reason: err.to_string(),
                },
            },
        };

        Self { key, kind }
    }

    /// The block's kind, or `None` for unrecognized blocks.
    pub fn tag(&self) -> Option<KindTag> {
        self.kind.tag()
    }

    /// Kind name for diagnostics, including unrecognized raw names.
    pub fn kind_name(&self) -> &str {
        match &self.kind {
            BlockKind::Unrecognized { kind } => kind,
            other => other.tag().map(KindTag::as_str).unwrap_or_default(),
        }
    }

    /// Child sequences of a container block, keyed by field name, in
    /// authored order. Leaf blocks have none.
    pub fn child_slots(&self) -> Vec<(&'static str, &[Block])> {
        match &self.kind {
            BlockKind::Card(card) => vec![("content", &card.content)],
            BlockKind::ServiceCard(card) => vec![("content", &card.content)],
            BlockKind::TwoColumnLayout(layout) => vec![
                ("leftColumn", &layout.left_column),
                ("rightColumn", &layout.right_column),
            ],
            BlockKind::GridLayout(grid) => vec![("items", &grid.items)],
            BlockKind::ResponsiveWrapper(wrapper) => vec![("content", &wrapper.content)],
            BlockKind::ExpandingContent(expanding) => vec![("content", &expanding.content)],
            BlockKind::Section(section)
            | BlockKind::SubSection(section)
            | BlockKind::SubSubSection(section) => vec![("content", &section.content)],
            BlockKind::ContentWrapper(wrapper) => vec![("content", &wrapper.content)],
            _ => Vec::new(),
        }
    }
}

impl BlockKind {
    pub fn tag(&self) -> Option<KindTag> {
        Some(match self {
            BlockKind::Text(_) => KindTag::Text,
            BlockKind::Statement(_) => KindTag::Statement,
            BlockKind::Quote(_) => KindTag::Quote,
            BlockKind::Divider(_) => KindTag::Divider,
            BlockKind::Image(_) => KindTag::Image,
            BlockKind::ImageGallery(_) => KindTag::ImageGallery,
            BlockKind::Map(_) => KindTag::Map,
            BlockKind::Video(_) => KindTag::Video,
            BlockKind::ButtonLink(_) => KindTag::ButtonLink,
            BlockKind::CalloutLink(_) => KindTag::CalloutLink,
            BlockKind::Card(_) => KindTag::Card,
            BlockKind::IconList(_) => KindTag::IconList,
            BlockKind::DetailedList(_) => KindTag::DetailedList,
            BlockKind::StatList(_) => KindTag::StatList,
            BlockKind::CheckList(_) => KindTag::CheckList,
            BlockKind::ItemList(_) => KindTag::ItemList,
            BlockKind::ServiceCard(_) => KindTag::ServiceCard,
            BlockKind::ServiceList(_) => KindTag::ServiceList,
            BlockKind::FaqList(_) => KindTag::FaqList,
            BlockKind::CompanyLinks(_) => KindTag::CompanyLinks,
            BlockKind::TwoColumnLayout(_) => KindTag::TwoColumnLayout,
            BlockKind::GridLayout(_) => KindTag::GridLayout,
            BlockKind::ResponsiveWrapper(_) => KindTag::ResponsiveWrapper,
            BlockKind::ExpandingContent(_) => KindTag::ExpandingContent,
            BlockKind::ContactSection(_) => KindTag::ContactSection,
            BlockKind::Section(_) => KindTag::Section,
            BlockKind::SubSection(_) => KindTag::SubSection,
            BlockKind::SubSubSection(_) => KindTag::SubSubSection,
            BlockKind::ContentWrapper(_) => KindTag::ContentWrapper,
            BlockKind::Invalid { kind, .. } => *kind,
            BlockKind::Unrecognized { .. } => return None,
        })
    }
}

// Leaf payloads

#[derive(Deserialize)]
#[serde(untagged)]
enum RichOrPlain {
    Rich(Vec<PortableBlock>),
    Plain(String),
}

fn portable_or_plain<'de, D>(deserializer: D) -> Result<Vec<PortableBlock>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RichOrPlain::deserialize(deserializer)? {
        RichOrPlain::Rich(blocks) => blocks,
        RichOrPlain::Plain(text) => vec![PortableBlock::paragraph("", text)],
    })
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextBlock {
    /// Read from `body` or `content`; a plain string becomes one paragraph.
    #[serde(alias = "content", deserialize_with = "portable_or_plain")]
    pub body: Vec<PortableBlock>,
    pub alignment: AlignmentSetting,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatementBlock {
    pub text: Option<String>,
    pub alignment: AlignmentSetting,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteBlock {
    pub text: Option<String>,
    pub attribution: Option<String>,
    pub role: Option<String>,
    pub alignment: AlignmentSetting,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DividerBlock {
    pub spacing: Spacing,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageBlock {
    pub image: Option<ImageRef>,
    pub caption: Option<String>,
    pub width: ImageWidth,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageGalleryBlock {
    pub images: Vec<ImageRef>,
    pub columns: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapBlock {
    pub embed_url: Option<String>,
    pub address: Option<String>,
    pub title: Option<String>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoBlock {
    pub url: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonLinkBlock {
    pub label: Option<String>,
    pub link: Option<Link>,
    /// Raw destination, used when `link` is absent or does not resolve.
    pub href: Option<String>,
    pub variant: ButtonVariant,
    pub alignment: AlignmentSetting,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalloutLinkBlock {
    pub title: Option<String>,
    pub body: Option<String>,
    pub label: Option<String>,
    pub link: Option<Link>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconListBlock {
    pub items: Vec<IconItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconItem {
    #[serde(rename = "_key")]
    pub key: String,
    pub icon: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailedListBlock {
    pub items: Vec<DetailedItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailedItem {
    #[serde(rename = "_key")]
    pub key: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatListBlock {
    pub items: Vec<StatItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatItem {
    #[serde(rename = "_key")]
    pub key: String,
    pub value: Option<String>,
    pub label: Option<String>,
}

/// Shared payload of `check-list` and `item-list`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextListBlock {
    pub items: Vec<TextItem>,
    /// Numbered rendering; only meaningful for `item-list`.
    pub ordered: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextItem {
    #[serde(rename = "_key")]
    pub key: String,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceListBlock {
    pub services: Vec<ServiceSummary>,
}

/// A service document, already dereferenced by the content source.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceSummary {
    #[serde(rename = "_key")]
    pub key: String,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqListBlock {
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqItem {
    #[serde(rename = "_key")]
    pub key: String,
    pub question: Option<String>,
    pub answer: Vec<PortableBlock>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyLinksBlock {
    pub heading: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSectionBlock {
    pub heading: Option<String>,
    pub intro: Option<String>,
}

// Container payloads

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardBlock {
    pub title: Option<String>,
    pub body: Option<String>,
    pub image: Option<ImageRef>,
    pub cta_text: Option<String>,
    pub link: Option<Link>,
    pub href: Option<String>,
    pub alignment: AlignmentSetting,
    pub content: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceCardBlock {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub image: Option<ImageRef>,
    pub link: Option<Link>,
    pub href: Option<String>,
    pub alignment: AlignmentSetting,
    pub content: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TwoColumnLayoutBlock {
    pub left_column: Vec<Block>,
    pub right_column: Vec<Block>,
    pub ratio: ColumnRatio,
    pub vertically_centered: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridLayoutBlock {
    pub items: Vec<Block>,
    pub columns: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponsiveWrapperBlock {
    pub content: Vec<Block>,
    pub show_on: ShowOn,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpandingContentBlock {
    pub content: Vec<Block>,
    pub expand_label: Option<String>,
    pub collapse_label: Option<String>,
    pub initially_expanded: bool,
}

/// Shared payload of `section`, `sub-section` and `sub-sub-section`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionBlock {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub anchor_id: Option<String>,
    pub alignment: AlignmentSetting,
    pub content: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentWrapperBlock {
    pub background: Background,
    pub alignment: AlignmentSetting,
    pub content: Vec<Block>,
}
