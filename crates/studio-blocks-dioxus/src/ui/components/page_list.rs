use dioxus::prelude::*;
use relative_path::RelativePathBuf;

/// Sidebar of page files, relative to the pages directory.
#[component]
pub fn PageList(
    pages: Vec<RelativePathBuf>,
    selected: Option<RelativePathBuf>,
    on_select: EventHandler<RelativePathBuf>,
) -> Element {
    rsx! {
        nav {
            class: "page-list",
            if pages.is_empty() {
                p { class: "page-list-empty", "No pages found" }
            }
            ul {
                for page in pages.iter() {
                    PageItem {
                        key: "{page}",
                        page: page.clone(),
                        is_selected: selected.as_ref() == Some(page),
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn PageItem(
    page: RelativePathBuf,
    is_selected: bool,
    on_select: EventHandler<RelativePathBuf>,
) -> Element {
    let class_name = if is_selected {
        "page-item selected"
    } else {
        "page-item"
    };
    let name = page.with_extension("").to_string();

    rsx! {
        li {
            class: class_name,
            onclick: move |_| on_select.call(page.clone()),
            "{name}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn sidebar() -> Element {
        rsx! {
            PageList {
                pages: vec![
                    RelativePathBuf::from("about.json"),
                    RelativePathBuf::from("services/branding.json"),
                ],
                selected: Some(RelativePathBuf::from("about.json")),
                on_select: |_| {},
            }
        }
    }

    #[test]
    fn test_lists_pages_without_extension_and_marks_selection() {
        let mut dom = VirtualDom::new(sidebar);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains(r#"<li class="page-item selected">about</li>"#));
        assert!(html.contains("services/branding"));
        assert!(!html.contains(".json"));
    }
}
