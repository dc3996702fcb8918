pub mod actions;
pub mod block_node;
pub mod cards;
pub mod contact;
pub mod error_screen;
pub mod layouts;
pub mod lists;
pub mod media;
pub mod page_list;
pub mod page_view;
pub mod rich_text;
pub mod text_blocks;

pub use actions::{Callout, LinkButton};
pub use block_node::{BlockNode, NodeList};
pub use cards::{Card, ServiceCard};
pub use contact::{ContactForm, ContactSection};
pub use error_screen::ErrorScreen;
pub use layouts::{ContentWrapper, Expanding, Grid, Responsive, Section, TwoColumn};
pub use lists::{
    CheckList, CompanyLinks, DetailedList, FaqList, IconList, ItemList, ServiceList, StatList,
};
pub use media::{Embed, Figure, Gallery};
pub use page_list::PageList;
pub use page_view::{DiagnosticsPanel, PageView};
pub use rich_text::RichTextView;
pub use text_blocks::{Divider, Quote, Statement, TextBlock};
