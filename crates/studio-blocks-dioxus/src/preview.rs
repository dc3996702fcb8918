//! Loading and rendering pages from the configured content directory.

use relative_path::RelativePath;
use studio_blocks_config::{Config, Mode};
use studio_blocks_engine::io::{self, IoError};
use studio_blocks_engine::{
    CdnImageUrlBuilder, Document, EditingTarget, RenderMode, RenderSettings, RenderedPage,
    SiteData, render_document,
};

/// A document rendered together with the site data it was rendered against.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedPage {
    pub document: Document,
    pub site: SiteData,
    pub page: RenderedPage,
}

pub fn render_settings(config: &Config) -> RenderSettings {
    let studio = &config.studio;
    let project_id = studio.project_id.clone().unwrap_or_else(|| {
        log::warn!("No studio project_id configured, images will be skipped");
        String::new()
    });

    let mut settings =
        RenderSettings::new(CdnImageUrlBuilder::new(project_id, studio.dataset.clone()))
            .with_mode(match config.mode {
                Mode::Development => RenderMode::Development,
                Mode::Production => RenderMode::Production,
            });

    if studio.visual_editing {
        settings = settings.with_editing(EditingTarget {
            project_id: studio.project_id.clone(),
            dataset: Some(studio.dataset.clone()),
            studio_url: studio.studio_url.clone(),
        });
    }
    settings
}

pub fn prepare_page(config: &Config, relative_path: &RelativePath) -> Result<PreparedPage, IoError> {
    let document = io::read_document(relative_path, &config.content_path)?;
    let site = io::read_site_data(&config.content_path)?;
    let page = render_document(&document, &site, &render_settings(config));

    log::info!(
        "Rendered {relative_path}: {} nodes, {} diagnostics",
        page.walk().len(),
        page.diagnostics.len()
    );

    Ok(PreparedPage {
        document,
        site,
        page,
    })
}
