use crate::ui::components::NodeList;
use dioxus::prelude::*;
use studio_blocks_engine::{Diagnostic, RenderedPage};

/// A rendered page body. Diagnostics are listed underneath when asked for.
#[component]
pub fn PageView(page: RenderedPage, show_diagnostics: bool) -> Element {
    rsx! {
        main {
            class: "page",
            if page.nodes.is_empty() {
                p { class: "empty-page", "This page has no content yet." }
            }
            NodeList { nodes: page.nodes.clone() }
        }
        if show_diagnostics && !page.diagnostics.is_empty() {
            DiagnosticsPanel { diagnostics: page.diagnostics.clone() }
        }
    }
}

#[component]
pub fn DiagnosticsPanel(diagnostics: Vec<Diagnostic>) -> Element {
    let count = diagnostics.len();

    rsx! {
        aside {
            class: "diagnostics",
            h2 { "Skipped blocks ({count})" }
            ul {
                for diagnostic in diagnostics.iter() {
                    li { key: "{diagnostic.path}", code { "{diagnostic}" } }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use studio_blocks_engine::Path;
    use studio_blocks_engine::rendering::SkipReason;

    fn page_with_diagnostic() -> RenderedPage {
        RenderedPage {
            nodes: Vec::new(),
            diagnostics: vec![Diagnostic {
                path: Path::root().keyed("content", "u1"),
                kind: "mystery".to_string(),
                reason: SkipReason::UnrecognizedKind,
            }],
        }
    }

    #[test]
    fn test_diagnostics_shown_in_development() {
        let mut dom = VirtualDom::new_with_props(
            PageView,
            PageViewProps {
                page: page_with_diagnostic(),
                show_diagnostics: true,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("This page has no content yet."));
        assert!(html.contains("Skipped blocks (1)"));
        assert!(html.contains("unrecognized block kind"));
        assert!(html.contains("mystery"));
    }

    #[test]
    fn test_diagnostics_hidden_otherwise() {
        let mut dom = VirtualDom::new_with_props(
            PageView,
            PageViewProps {
                page: page_with_diagnostic(),
                show_diagnostics: false,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(!html.contains("Skipped blocks"));
    }
}
