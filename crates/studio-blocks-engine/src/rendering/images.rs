use std::sync::LazyLock;

use regex::Regex;

use crate::models::ImageRef;

static ASSET_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^image-([A-Za-z0-9]+)-(\d+)x(\d+)-([a-z0-9]+)$").expect("asset pattern is valid")
});

/// Output of an [`ImageUrlBuilder`]: a URL plus intrinsic dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

/// Turns an image field into a fetchable URL.
pub trait ImageUrlBuilder {
    /// `None` when the field has no usable asset. `width` requests a
    /// resized rendition.
    fn resolve(&self, image: &ImageRef, width: Option<u32>) -> Option<ResolvedImage>;
}

/// Builds URLs on the CMS image CDN from asset references of the form
/// `image-<id>-<width>x<height>-<format>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdnImageUrlBuilder {
    base_url: String,
    project_id: String,
    dataset: String,
}

impl CdnImageUrlBuilder {
    pub const DEFAULT_BASE_URL: &'static str = "https://cdn.sanity.io";

    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl ImageUrlBuilder for CdnImageUrlBuilder {
    fn resolve(&self, image: &ImageRef, width: Option<u32>) -> Option<ResolvedImage> {
        if self.project_id.trim().is_empty() || self.dataset.trim().is_empty() {
            return None;
        }
        let caps = ASSET_REF.captures(image.asset_ref()?.trim())?;
        let id = &caps[1];
        let intrinsic_width: u32 = caps[2].parse().ok()?;
        let intrinsic_height: u32 = caps[3].parse().ok()?;
        let format = &caps[4];

        let mut src = format!(
            "{}/images/{}/{}/{id}-{intrinsic_width}x{intrinsic_height}.{format}",
            self.base_url, self.project_id, self.dataset
        );
        if let Some(width) = width.filter(|w| *w > 0 && *w < intrinsic_width) {
            src.push_str(&format!("?w={width}&auto=format"));
        }

        Some(ResolvedImage {
            src,
            width: intrinsic_width,
            height: intrinsic_height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn builder() -> CdnImageUrlBuilder {
        CdnImageUrlBuilder::new("abc123", "production")
    }

    #[test]
    fn test_resolves_asset_reference() {
        let image = ImageRef::from_asset("image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg");
        let resolved = builder().resolve(&image, None).unwrap();

        assert_eq!(
            resolved,
            ResolvedImage {
                src: "https://cdn.sanity.io/images/abc123/production/Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000.jpg".to_string(),
                width: 2000,
                height: 3000,
            }
        );
    }

    #[test]
    fn test_width_parameter_only_when_downscaling() {
        let image = ImageRef::from_asset("image-abc-800x600-png");

        let small = builder().resolve(&image, Some(400)).unwrap();
        assert!(small.src.ends_with(".png?w=400&auto=format"));

        let large = builder().resolve(&image, Some(1600)).unwrap();
        assert!(large.src.ends_with(".png"));
    }

    #[test]
    fn test_malformed_or_missing_asset() {
        assert_eq!(builder().resolve(&ImageRef::default(), None), None);
        assert_eq!(
            builder().resolve(&ImageRef::from_asset("file-abc-pdf"), None),
            None
        );
    }

    #[test]
    fn test_unconfigured_project_resolves_nothing() {
        let image = ImageRef::from_asset("image-abc-800x600-jpg");

        assert_eq!(
            CdnImageUrlBuilder::new("", "production").resolve(&image, Some(400)),
            None
        );
        assert_eq!(CdnImageUrlBuilder::new("abc123", " ").resolve(&image, None), None);
    }

    #[test]
    fn test_custom_base_url() {
        let builder = builder().with_base_url("http://localhost:3333/");
        let image = ImageRef::from_asset("image-abc-10x10-webp");
        assert!(
            builder
                .resolve(&image, None)
                .unwrap()
                .src
                .starts_with("http://localhost:3333/images/")
        );
    }
}
