//! Turning documents into render trees.
//!
//! [`render_document`] walks a page's content from the root. Every block goes
//! through [`render_block`], which matches on its kind: leaf kinds map their
//! payload to a view, container kinds recurse into their children with an
//! extended [`Path`] and the same shared site data. Nothing in here fails;
//! blocks that cannot be shown are skipped locally and, when the skip is
//! worth knowing about, recorded as a [`Diagnostic`].

pub mod binding;
pub mod diagnostics;
mod dispatch;
pub mod embeds;
pub mod images;
mod layouts;
mod leaves;
pub mod links;
pub mod node;
mod outline;
pub mod rich_text;
pub mod style;

pub use binding::{EditingTarget, encode_binding};
pub use diagnostics::{Diagnostic, Diagnostics, SkipReason};
pub use dispatch::render_block;
pub use images::{CdnImageUrlBuilder, ImageUrlBuilder, ResolvedImage};
pub use node::*;
pub use outline::outline;
pub use rich_text::{RichBlock, RichListItem, RichSpan, RichText, render_rich_text};

use crate::models::{Alignment, Document, ImageRef, SiteData};
use crate::path::Path;
use crate::schema::ROOT_KINDS;

/// How loudly skipped blocks are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Development,
    Production,
}

/// Everything a render needs besides the document and site data.
pub struct RenderSettings {
    pub mode: RenderMode,
    /// Attach live-editing bindings to nodes when set.
    pub editing: Option<EditingTarget>,
    pub images: Box<dyn ImageUrlBuilder>,
}

impl RenderSettings {
    pub fn new(images: impl ImageUrlBuilder + 'static) -> Self {
        Self {
            mode: RenderMode::default(),
            editing: None,
            images: Box::new(images),
        }
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_editing(mut self, target: EditingTarget) -> Self {
        self.editing = Some(target);
        self
    }
}

/// Per-block rendering context. `path` always locates the block currently
/// being rendered; the rest is shared by the whole render.
#[derive(Clone)]
pub struct RenderContext<'a> {
    pub document_id: &'a str,
    pub document_type: &'a str,
    pub path: Path,
    pub shared: &'a SiteData,
    /// Alignment inherited from the nearest enclosing container.
    pub alignment: Alignment,
    pub mode: RenderMode,
    pub editing: Option<&'a EditingTarget>,
    pub images: &'a dyn ImageUrlBuilder,
}

impl<'a> RenderContext<'a> {
    pub fn for_document(
        document: &'a Document,
        shared: &'a SiteData,
        settings: &'a RenderSettings,
    ) -> Self {
        Self {
            document_id: &document.id,
            document_type: &document.doc_type,
            path: Path::root(),
            shared,
            alignment: Alignment::default(),
            mode: settings.mode,
            editing: settings.editing.as_ref(),
            images: settings.images.as_ref(),
        }
    }

    /// Same context, relocated to `path`.
    pub fn at(&self, path: Path) -> Self {
        Self {
            path,
            ..self.clone()
        }
    }

    pub fn with_alignment(&self, alignment: Alignment) -> Self {
        Self {
            alignment,
            ..self.clone()
        }
    }

    /// Encoded editing binding for the current block, when editing is on.
    pub fn binding(&self) -> Option<String> {
        self.editing.map(|target| {
            encode_binding(target, self.document_id, self.document_type, &self.path)
        })
    }

    pub(crate) fn image(
        &self,
        image: &ImageRef,
        width: Option<u32>,
        full_width: bool,
    ) -> Option<ImageView> {
        let resolved = self.images.resolve(image, width)?;
        Some(ImageView {
            key: image.key.clone(),
            src: resolved.src,
            alt: non_blank(image.alt.as_deref()).unwrap_or_default(),
            caption: non_blank(image.caption.as_deref()),
            width: resolved.width,
            height: resolved.height,
            full_width,
        })
    }
}

/// Result of rendering one document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub nodes: Vec<RenderNode>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderedPage {
    /// Every rendered node, depth first.
    pub fn walk(&self) -> Vec<&RenderNode> {
        self.nodes.iter().flat_map(RenderNode::walk).collect()
    }
}

/// Render a document's top-level content. Only root kinds (sections and
/// content wrappers) are accepted at the top level.
pub fn render_document(
    document: &Document,
    shared: &SiteData,
    settings: &RenderSettings,
) -> RenderedPage {
    let ctx = RenderContext::for_document(document, shared, settings);
    let mut diagnostics = Diagnostics::new(settings.mode);

    let nodes = dispatch::render_sequence(
        None,
        ROOT_KINDS,
        "content",
        &document.content,
        &ctx,
        &mut diagnostics,
    );

    log::debug!(
        "Rendered document {} ({} top-level nodes, {} skipped)",
        document.id,
        nodes.len(),
        diagnostics.len()
    );

    RenderedPage {
        nodes,
        diagnostics: diagnostics.into_entries(),
    }
}

/// Trimmed text, or `None` when blank.
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
