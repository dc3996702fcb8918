//! Live-editing bindings attached to rendered nodes.
//!
//! The encoded form is a `;`-separated list of `key=value` pairs that visual
//! editing overlays read back to open the right field in the studio.

use crate::path::Path;

/// Where the studio lives. Passed in explicitly with each render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditingTarget {
    pub project_id: Option<String>,
    pub dataset: Option<String>,
    pub studio_url: Option<String>,
}

impl EditingTarget {
    pub fn new(
        project_id: impl Into<String>,
        dataset: impl Into<String>,
        studio_url: impl Into<String>,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            dataset: Some(dataset.into()),
            studio_url: Some(studio_url.into()),
        }
    }
}

pub fn encode_binding(
    target: &EditingTarget,
    document_id: &str,
    document_type: &str,
    path: &Path,
) -> String {
    let mut parts = vec![
        format!("id={document_id}"),
        format!("type={document_type}"),
        format!("path={path}"),
    ];

    let present = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    if let Some(base) = present(&target.studio_url) {
        parts.push(format!("base={}", urlencoding::encode(&base)));
    }
    if let Some(project_id) = present(&target.project_id) {
        parts.push(format!("projectId={project_id}"));
    }
    if let Some(dataset) = present(&target.dataset) {
        parts.push(format!("dataset={dataset}"));
    }

    parts.join(";")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_binding() {
        let target = EditingTarget::new("abc123", "production", "https://studio.example.com/");
        let path = Path::root().keyed("content", "s1");

        assert_eq!(
            encode_binding(&target, "page-about", "page", &path),
            r#"id=page-about;type=page;path=content[_key=="s1"];base=https%3A%2F%2Fstudio.example.com%2F;projectId=abc123;dataset=production"#
        );
    }

    #[test]
    fn test_blank_target_fields_are_omitted() {
        let target = EditingTarget {
            dataset: Some(" ".to_string()),
            ..EditingTarget::default()
        };
        assert_eq!(
            encode_binding(&target, "home", "home", &Path::root().index("content", 0)),
            "id=home;type=home;path=content[0]"
        );
    }
}
