//! Nesting rules for content blocks.
//!
//! Kinds are grouped into tiers. Each container kind accepts children from
//! exactly one set, and the sets shrink as you go deeper: sections hold
//! layouts, layouts hold cards and wrappers, cards hold only pure content.
//! This keeps every content tree finite and shallow.

mod validate;

pub use validate::{SchemaViolation, ViolationKind, validate_document};

use crate::models::KindTag;
use KindTag::*;

/// Pure content: no container of any sort. Safe inside cards.
pub const CONTENT_ONLY_KINDS: &[KindTag] = &[
    Text,
    Statement,
    Quote,
    Divider,
    Image,
    ImageGallery,
    Map,
    Video,
    ButtonLink,
    CalloutLink,
    IconList,
    DetailedList,
    StatList,
    CheckList,
    ItemList,
    ServiceList,
    FaqList,
    CompanyLinks,
];

/// Cards hold only pure content, so they may sit inside wrappers and
/// layouts without opening another level of nesting.
pub const CARD_KINDS: &[KindTag] = &[Card, ServiceCard];

/// Allowed inside wrappers (responsive, expanding): pure content and cards.
pub const WRAPPER_CHILD_KINDS: &[KindTag] = &[
    Text,
    Statement,
    Quote,
    Divider,
    Image,
    ImageGallery,
    Map,
    Video,
    ButtonLink,
    CalloutLink,
    IconList,
    DetailedList,
    StatList,
    CheckList,
    ItemList,
    ServiceList,
    FaqList,
    CompanyLinks,
    Card,
    ServiceCard,
];

/// Allowed inside two-column and grid layouts. Never another layout or a
/// section.
pub const LAYOUT_CHILD_KINDS: &[KindTag] = &[
    Text,
    Statement,
    Quote,
    Divider,
    Image,
    ImageGallery,
    Map,
    Video,
    ButtonLink,
    CalloutLink,
    IconList,
    DetailedList,
    StatList,
    CheckList,
    ItemList,
    ServiceList,
    FaqList,
    CompanyLinks,
    Card,
    ServiceCard,
    ResponsiveWrapper,
    ExpandingContent,
];

/// Allowed at the top level of any section or content wrapper.
pub const STANDARD_KINDS: &[KindTag] = &[
    Text,
    Statement,
    Quote,
    Divider,
    Image,
    ImageGallery,
    Map,
    Video,
    ButtonLink,
    CalloutLink,
    IconList,
    DetailedList,
    StatList,
    CheckList,
    ItemList,
    ServiceList,
    FaqList,
    CompanyLinks,
    Card,
    ServiceCard,
    ResponsiveWrapper,
    ExpandingContent,
    TwoColumnLayout,
    GridLayout,
    ContactSection,
];

const SECTION_KINDS: &[KindTag] = &[
    Text,
    Statement,
    Quote,
    Divider,
    Image,
    ImageGallery,
    Map,
    Video,
    ButtonLink,
    CalloutLink,
    IconList,
    DetailedList,
    StatList,
    CheckList,
    ItemList,
    ServiceList,
    FaqList,
    CompanyLinks,
    Card,
    ServiceCard,
    ResponsiveWrapper,
    ExpandingContent,
    TwoColumnLayout,
    GridLayout,
    ContactSection,
    SubSection,
];

const SUB_SECTION_KINDS: &[KindTag] = &[
    Text,
    Statement,
    Quote,
    Divider,
    Image,
    ImageGallery,
    Map,
    Video,
    ButtonLink,
    CalloutLink,
    IconList,
    DetailedList,
    StatList,
    CheckList,
    ItemList,
    ServiceList,
    FaqList,
    CompanyLinks,
    Card,
    ServiceCard,
    ResponsiveWrapper,
    ExpandingContent,
    TwoColumnLayout,
    GridLayout,
    ContactSection,
    SubSubSection,
];

/// Allowed at the root of a document.
pub const ROOT_KINDS: &[KindTag] = &[Section, ContentWrapper];

/// Kinds a container accepts as children; empty for leaf kinds.
pub fn allowed_children(container: KindTag) -> &'static [KindTag] {
    match container {
        Section => SECTION_KINDS,
        SubSection => SUB_SECTION_KINDS,
        SubSubSection | ContentWrapper => STANDARD_KINDS,
        TwoColumnLayout | GridLayout => LAYOUT_CHILD_KINDS,
        ResponsiveWrapper | ExpandingContent => WRAPPER_CHILD_KINDS,
        Card | ServiceCard => CONTENT_ONLY_KINDS,
        Text | Statement | Quote | Divider | Image | ImageGallery | Map | Video | ButtonLink
        | CalloutLink | IconList | DetailedList | StatList | CheckList | ItemList
        | ServiceList | FaqList | CompanyLinks | ContactSection => &[],
    }
}

pub fn allows(container: KindTag, child: KindTag) -> bool {
    allowed_children(container).contains(&child)
}

pub fn is_container(kind: KindTag) -> bool {
    !allowed_children(kind).is_empty()
}

pub fn allowed_at_root(kind: KindTag) -> bool {
    ROOT_KINDS.contains(&kind)
}
