//! Static HTML export of a single page.

use anyhow::{Context, Result};
use dioxus::dioxus_core::VirtualDom;
use relative_path::RelativePath;
use std::fs;
use std::path::Path;
use studio_blocks_config::Config;
use studio_blocks_engine::{page_meta, structured_data};

use crate::preview::{PreparedPage, prepare_page};
use crate::ui::SITE_CSS;
use crate::ui::components::PageView;
use crate::ui::components::page_view::PageViewProps;

pub fn export_page(config: &Config, relative_path: &RelativePath, out: &Path) -> Result<()> {
    let prepared = prepare_page(config, relative_path)
        .with_context(|| format!("Failed to render {relative_path}"))?;

    for diagnostic in &prepared.page.diagnostics {
        log::warn!("Skipped block at {diagnostic}");
    }

    let html = page_html(&prepared, &config.site_url())?;
    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(out, html).with_context(|| format!("Failed to write {}", out.display()))?;

    log::info!("Exported {relative_path} to {}", out.display());
    Ok(())
}

/// Full HTML document: head metadata and JSON-LD around the server-rendered
/// page body.
pub fn page_html(prepared: &PreparedPage, site_url: &str) -> Result<String> {
    let meta = page_meta(&prepared.site, &prepared.document, site_url);
    let json_ld = serde_json::to_string(&structured_data(
        &prepared.site,
        &prepared.document,
        site_url,
    ))?
    // Keep the script element from being closed early by content.
    .replace("</", "<\\/");

    let mut dom = VirtualDom::new_with_props(
        PageView,
        PageViewProps {
            page: prepared.page.clone(),
            show_diagnostics: false,
        },
    );
    dom.rebuild_in_place();
    let body = dioxus_ssr::render(&dom);

    let description = meta
        .description
        .as_deref()
        .map(|d| {
            format!(
                "\n<meta name=\"description\" content=\"{}\">",
                html_escape::encode_double_quoted_attribute(d)
            )
        })
        .unwrap_or_default();

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>{description}
<link rel="canonical" href="{canonical}">
<script type="application/ld+json">{json_ld}</script>
<style>{SITE_CSS}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = html_escape::encode_text(&meta.title),
        canonical = html_escape::encode_double_quoted_attribute(&meta.canonical),
    ))
}
