use serde::Deserialize;

/// Link descriptor as authored in the CMS.
///
/// Only the field matching `link_type` is consulted when resolving. When
/// `link_type` is absent the first populated field wins, in the order
/// internal, url, email, phone, anchor.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Link {
    pub link_type: Option<LinkType>,
    pub internal: Option<InternalRef>,
    pub url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub anchor: Option<String>,
    pub open_in_new_tab: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Internal,
    External,
    Email,
    Phone,
    Anchor,
}

/// A dereferenced pointer to another document on the site.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct InternalRef {
    #[serde(rename = "_type")]
    pub doc_type: String,
    pub slug: Option<String>,
}

impl Link {
    pub fn external(url: impl Into<String>) -> Self {
        Self {
            link_type: Some(LinkType::External),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn internal(doc_type: impl Into<String>, slug: Option<&str>) -> Self {
        Self {
            link_type: Some(LinkType::Internal),
            internal: Some(InternalRef {
                doc_type: doc_type.into(),
                slug: slug.map(str::to_string),
            }),
            ..Self::default()
        }
    }
}
