use crate::ui::components::NodeList;
use dioxus::prelude::*;
use studio_blocks_engine::rendering::style::{
    alignment_class, background_class, column_classes, grid_class, visibility_classes,
};
use studio_blocks_engine::rendering::{
    ExpandingView, GridView, ResponsiveView, SectionView, TwoColumnView, WrapperView,
};

#[component]
pub fn TwoColumn(view: TwoColumnView) -> Element {
    let (left_class, right_class) = column_classes(view.ratio);
    let class_name = if view.vertically_centered {
        "two-column v-center"
    } else {
        "two-column"
    };

    rsx! {
        div {
            class: "{class_name}",
            div { class: "column {left_class}", NodeList { nodes: view.left.clone() } }
            div { class: "column {right_class}", NodeList { nodes: view.right.clone() } }
        }
    }
}

#[component]
pub fn Grid(view: GridView) -> Element {
    let class_name = format!("grid {}", grid_class(view.columns));

    rsx! {
        div { class: "{class_name}", NodeList { nodes: view.items } }
    }
}

#[component]
pub fn Responsive(view: ResponsiveView) -> Element {
    let class_name = format!("responsive {}", visibility_classes(view.show_on));

    rsx! {
        div { class: "{class_name}", NodeList { nodes: view.children } }
    }
}

/// Collapsible region; open state is local to this component.
#[component]
pub fn Expanding(view: ExpandingView) -> Element {
    let mut expanded = use_signal(|| view.initially_expanded);
    let is_open = *expanded.read();
    let (class_name, content_class, label, aria_expanded) = if is_open {
        (
            "expanding open",
            "expanding-content",
            view.collapse_label.clone(),
            "true",
        )
    } else {
        (
            "expanding",
            "expanding-content collapsed",
            view.expand_label.clone(),
            "false",
        )
    };

    // Children stay in the markup when collapsed; only visibility changes.
    rsx! {
        div {
            class: class_name,
            div { class: content_class, NodeList { nodes: view.children.clone() } }
            button {
                class: "expanding-toggle",
                r#type: "button",
                "aria-expanded": aria_expanded,
                onclick: move |_| expanded.set(!is_open),
                "{label}"
            }
        }
    }
}

#[component]
pub fn Section(view: SectionView) -> Element {
    let class_name = format!(
        "section section-level-{} {}",
        view.level.heading_level(),
        alignment_class(view.alignment)
    );
    let heading = view.title.as_ref().map(|title| match view.level.heading_level() {
        2 => rsx! { h2 { class: "section-title", "{title}" } },
        3 => rsx! { h3 { class: "section-title", "{title}" } },
        _ => rsx! { h4 { class: "section-title", "{title}" } },
    });

    rsx! {
        section {
            class: "{class_name}",
            id: view.anchor_id.clone(),
            if let Some(heading) = heading {
                {heading}
            }
            if let Some(subtitle) = &view.subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
            NodeList { nodes: view.children.clone() }
        }
    }
}

#[component]
pub fn ContentWrapper(view: WrapperView) -> Element {
    let class_name = format!(
        "content-wrapper {} {}",
        background_class(view.background),
        alignment_class(view.alignment)
    );

    rsx! {
        div { class: "{class_name}", NodeList { nodes: view.children } }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use studio_blocks_engine::models::{Alignment, ColumnRatio, ShowOn};
    use studio_blocks_engine::rendering::{NodeView, SectionLevel, StatementView};
    use studio_blocks_engine::{Path, RenderNode};

    fn statement(key: &str, text: &str) -> RenderNode {
        RenderNode {
            key: key.to_string(),
            path: Path::root().keyed("content", key),
            binding: None,
            view: NodeView::Statement(StatementView {
                text: text.to_string(),
                alignment: Alignment::Left,
            }),
        }
    }

    #[test]
    fn test_two_column_ratio_classes() {
        let mut dom = VirtualDom::new_with_props(
            TwoColumn,
            TwoColumnProps {
                view: TwoColumnView {
                    ratio: ColumnRatio::SixtyForty,
                    vertically_centered: true,
                    left: vec![statement("l", "left side")],
                    right: vec![statement("r", "right side")],
                },
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("two-column v-center"));
        assert!(html.contains("column col-60"));
        assert!(html.contains("column col-40"));
        assert!(html.find("left side").unwrap() < html.find("right side").unwrap());
    }

    #[test]
    fn test_expanding_starts_collapsed_with_content_in_markup() {
        let mut dom = VirtualDom::new_with_props(
            Expanding,
            ExpandingProps {
                view: ExpandingView {
                    expand_label: "Show more".to_string(),
                    collapse_label: "Show less".to_string(),
                    initially_expanded: false,
                    children: vec![statement("hidden", "hidden detail")],
                },
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Show more"));
        assert!(html.contains(r#"class="expanding-content collapsed""#));
        assert!(html.contains("hidden detail"));
    }

    #[test]
    fn test_expanding_initially_open() {
        let mut dom = VirtualDom::new_with_props(
            Expanding,
            ExpandingProps {
                view: ExpandingView {
                    expand_label: "Show more".to_string(),
                    collapse_label: "Show less".to_string(),
                    initially_expanded: true,
                    children: vec![statement("shown", "visible detail")],
                },
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Show less"));
        assert!(html.contains("visible detail"));
        assert!(!html.contains("collapsed"));
    }

    #[test]
    fn test_responsive_hides_breakpoints() {
        let mut dom = VirtualDom::new_with_props(
            Responsive,
            ResponsiveProps {
                view: ResponsiveView {
                    show_on: ShowOn {
                        mobile: false,
                        tablet: true,
                        desktop: true,
                    },
                    children: vec![statement("s", "desktop only")],
                },
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("responsive hide-mobile"));
    }

    #[test]
    fn test_sub_section_heading_and_anchor() {
        let mut dom = VirtualDom::new_with_props(
            Section,
            SectionProps {
                view: SectionView {
                    level: SectionLevel::SubSection,
                    title: Some("Questions".to_string()),
                    subtitle: None,
                    anchor_id: Some("faq".to_string()),
                    alignment: Alignment::Left,
                    children: vec![statement("s", "answer")],
                },
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains(r#"id="faq""#));
        assert!(html.contains("section-level-3"));
        assert!(html.contains(r#"<h3 class="section-title">Questions</h3>"#));
    }
}
