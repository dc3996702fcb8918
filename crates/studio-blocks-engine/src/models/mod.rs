pub mod block;
pub mod document;
pub mod kind;
pub mod link;
pub mod media;
pub mod rich_text;
pub mod settings;
pub mod site;

pub use block::*;
pub use document::{Document, Slug};
pub use kind::{KindTag, UnknownKind};
pub use link::{InternalRef, Link, LinkType};
pub use media::{AssetRef, ImageRef};
pub use rich_text::{ListKind, MarkDef, PortableBlock, PortableSpan};
pub use settings::*;
pub use site::*;
