pub mod app;
pub mod components;

pub use app::App;

pub const SITE_CSS: &str = include_str!("../assets/site.css");
