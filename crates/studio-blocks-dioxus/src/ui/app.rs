use crate::preview::prepare_page;
use crate::ui::SITE_CSS;
use crate::ui::components::{ErrorScreen, PageList, PageView};
use dioxus::prelude::*;
use relative_path::RelativePathBuf;
use studio_blocks_config::{Config, Mode};
use studio_blocks_engine::{RenderedPage, io};

#[component]
pub fn App(config: Config) -> Element {
    let page_files = use_signal({
        let content_path = config.content_path.clone();
        move || io::scan_documents(&content_path)
    });
    let mut selected = use_signal(|| None::<RelativePathBuf>);
    let mut current_page = use_signal(|| None::<Result<RenderedPage, String>>);
    let show_diagnostics = config.mode == Mode::Development;

    let pages = match &*page_files.read() {
        Ok(pages) => pages.clone(),
        Err(e) => {
            log::error!("Error scanning content directory: {e}");
            return rsx! {
                style { {SITE_CSS} }
                ErrorScreen {
                    title: "Content Error".to_string(),
                    message: format!("Could not list pages in {}", config.content_path.display()),
                    details: Some(e.to_string()),
                }
            };
        }
    };

    let main_panel = match &*current_page.read() {
        Some(Ok(page)) => rsx! {
            PageView { page: page.clone(), show_diagnostics }
        },
        Some(Err(message)) => rsx! {
            ErrorScreen {
                title: "Could not render page".to_string(),
                message: message.clone(),
                details: None,
            }
        },
        None => rsx! {
            p { class: "placeholder", "Select a page to preview" }
        },
    };

    rsx! {
        style { {SITE_CSS} }
        div {
            class: "app-container",
            div {
                class: "sidebar",
                h2 { "Pages" }
                PageList {
                    pages,
                    selected: selected.read().clone(),
                    on_select: {
                        let config = config.clone();
                        move |relative_path: RelativePathBuf| {
                            let result = prepare_page(&config, &relative_path)
                                .map(|prepared| prepared.page)
                                .map_err(|e| {
                                    log::error!("Error rendering {relative_path}: {e}");
                                    e.to_string()
                                });
                            current_page.set(Some(result));
                            selected.set(Some(relative_path));
                        }
                    },
                }
            }
            div {
                class: "main-content",
                {main_panel}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use tempfile::TempDir;

    #[test]
    fn test_app_lists_pages() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("pages")).unwrap();
        std::fs::write(dir.path().join("pages/home.json"), "{}").unwrap();

        let mut dom = VirtualDom::new_with_props(
            App,
            AppProps {
                config: Config::new(dir.path()),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("home"));
        assert!(html.contains("Select a page to preview"));
    }

    #[test]
    fn test_app_reports_invalid_content_dir() {
        let dir = TempDir::new().unwrap();

        let mut dom = VirtualDom::new_with_props(
            App,
            AppProps {
                config: Config::new(dir.path()),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Content Error"));
        assert!(html.contains("missing `pages` directory"));
    }
}
