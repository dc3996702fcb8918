pub mod io;
pub mod models;
pub mod path;
pub mod rendering;
pub mod schema;
pub mod seo;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::{Block, BlockKind, Document, KindTag, SiteData};
pub use path::Path;
pub use rendering::{
    CdnImageUrlBuilder, Diagnostic, EditingTarget, ImageUrlBuilder, NodeView, RenderMode,
    RenderNode, RenderSettings, RenderedPage, outline, render_block, render_document,
};
pub use schema::{SchemaViolation, validate_document};
pub use seo::{PageMeta, page_meta, structured_data};
