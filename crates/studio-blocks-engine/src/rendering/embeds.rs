//! Embed URLs for video players and maps.

use std::sync::LazyLock;

use regex::Regex;

static YOUTUBE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(?:www\.|m\.)?(?:youtube\.com/(?:watch\?(?:[^#]*&)?v=|embed/|shorts/)|youtu\.be/)([A-Za-z0-9_-]{11})",
    )
    .expect("youtube pattern is valid")
});

static VIMEO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.|player\.)?vimeo\.com/(?:video/)?(\d+)")
        .expect("vimeo pattern is valid")
});

const MAPS_EMBED_PREFIX: &str = "https://www.google.com/maps/embed";

pub const DEFAULT_MAP_HEIGHT: u32 = 400;

/// Privacy-friendly player URL for a YouTube or Vimeo page URL.
pub fn video_embed_url(url: &str) -> Option<String> {
    let url = url.trim();
    if let Some(caps) = YOUTUBE.captures(url) {
        return Some(format!("https://www.youtube-nocookie.com/embed/{}", &caps[1]));
    }
    if let Some(caps) = VIMEO.captures(url) {
        return Some(format!("https://player.vimeo.com/video/{}?dnt=1", &caps[1]));
    }
    None
}

/// A ready-made maps embed URL wins over an address lookup.
pub fn map_embed_url(embed_url: Option<&str>, address: Option<&str>) -> Option<String> {
    if let Some(url) = embed_url.map(str::trim)
        && url.starts_with(MAPS_EMBED_PREFIX)
    {
        return Some(url.to_string());
    }

    let address = address.map(str::trim).filter(|a| !a.is_empty())?;
    Some(format!(
        "https://www.google.com/maps?q={}&output=embed",
        urlencoding::encode(address)
    ))
}

/// Clamp an authored map height into a sensible range.
pub fn map_height(height: Option<u32>) -> u32 {
    height.unwrap_or(DEFAULT_MAP_HEIGHT).clamp(200, 800)
}
