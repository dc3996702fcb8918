use std::fmt;
use std::str::FromStr;

/// Discriminant of a content block, as carried in the `_type` field.
///
/// This is the closed set of kinds the engine knows how to render. Anything
/// else coming from the content source decodes as an unrecognized block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KindTag {
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
    Card,
    IconList,
    DetailedList,
    StatList,
    CheckList,
    ItemList,
    ServiceCard,
    ServiceList,
    FaqList,
    CompanyLinks,
    TwoColumnLayout,
    GridLayout,
    ResponsiveWrapper,
    ExpandingContent,
    ContactSection,
    Section,
    SubSection,
    SubSubSection,
    ContentWrapper,
}

impl KindTag {
    pub const ALL: [KindTag; 29] = [
        KindTag::Text,
        KindTag::Statement,
        KindTag::Quote,
        KindTag::Divider,
        KindTag::Image,
        KindTag::ImageGallery,
        KindTag::Map,
        KindTag::Video,
        KindTag::ButtonLink,
        KindTag::CalloutLink,
        KindTag::Card,
        KindTag::IconList,
        KindTag::DetailedList,
        KindTag::StatList,
        KindTag::CheckList,
        KindTag::ItemList,
        KindTag::ServiceCard,
        KindTag::ServiceList,
        KindTag::FaqList,
        KindTag::CompanyLinks,
        KindTag::TwoColumnLayout,
        KindTag::GridLayout,
        KindTag::ResponsiveWrapper,
        KindTag::ExpandingContent,
        KindTag::ContactSection,
        KindTag::Section,
        KindTag::SubSection,
        KindTag::SubSubSection,
        KindTag::ContentWrapper,
    ];

    /// The wire name used in `_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            KindTag::Text => "text",
            KindTag::Statement => "statement",
            KindTag::Quote => "quote",
            KindTag::Divider => "divider",
            KindTag::Image => "image",
            KindTag::ImageGallery => "image-gallery",
            KindTag::Map => "map",
            KindTag::Video => "video",
            KindTag::ButtonLink => "button-link",
            KindTag::CalloutLink => "callout-link",
            KindTag::Card => "card",
            KindTag::IconList => "icon-list",
            KindTag::DetailedList => "detailed-list",
            KindTag::StatList => "stat-list",
            KindTag::CheckList => "check-list",
            KindTag::ItemList => "item-list",
            KindTag::ServiceCard => "service-card",
            KindTag::ServiceList => "service-list",
            KindTag::FaqList => "faq-list",
            KindTag::CompanyLinks => "company-links",
            KindTag::TwoColumnLayout => "two-column-layout",
            KindTag::GridLayout => "grid-layout",
            KindTag::ResponsiveWrapper => "responsive-wrapper",
            KindTag::ExpandingContent => "expanding-content",
            KindTag::ContactSection => "contact-section",
            KindTag::Section => "section",
            KindTag::SubSection => "sub-section",
            KindTag::SubSubSection => "sub-sub-section",
            KindTag::ContentWrapper => "content-wrapper",
        }
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown block kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for KindTag {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KindTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tag_round_trips_through_its_wire_name() {
        for tag in KindTag::ALL {
            assert_eq!(tag.as_str().parse::<KindTag>(), Ok(tag));
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "totally-unknown-kind".parse::<KindTag>().unwrap_err();
        assert_eq!(err.to_string(), "unknown block kind: totally-unknown-kind");
    }

    #[test]
    fn test_wire_names_are_unique() {
        let mut names: Vec<_> = KindTag::ALL.iter().map(|t| t.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), KindTag::ALL.len());
    }
}
