use serde::Deserialize;

use crate::models::Block;

/// A page-level document: the root of one content tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    pub title: Option<String>,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub content: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Slug {
    pub current: String,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            id: String::new(),
            doc_type: "page".to_string(),
            title: None,
            slug: None,
            description: None,
            content: Vec::new(),
        }
    }
}

impl Document {
    pub fn new(id: impl Into<String>, content: Vec<Block>) -> Self {
        Self {
            id: id.into(),
            content,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug
            .as_ref()
            .map(|s| s.current.as_str())
            .filter(|s| !s.is_empty())
    }
}
