use dioxus::prelude::*;
use studio_blocks_engine::rendering::style::{alignment_class, button_class};
use studio_blocks_engine::rendering::{ButtonView, CalloutView, LinkView};

/// `target` and `rel` for links that open in a new tab.
pub(crate) fn new_tab_attrs(link: &LinkView) -> (Option<&'static str>, Option<&'static str>) {
    if link.new_tab {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    }
}

#[component]
pub fn LinkButton(view: ButtonView) -> Element {
    let wrapper_class = format!("button-row {}", alignment_class(view.alignment));
    let (target, rel) = new_tab_attrs(&view.link);

    rsx! {
        div {
            class: "{wrapper_class}",
            a {
                class: button_class(view.variant),
                href: "{view.link.href}",
                target,
                rel,
                "{view.label}"
            }
        }
    }
}

#[component]
pub fn Callout(view: CalloutView) -> Element {
    let (target, rel) = new_tab_attrs(&view.link);

    rsx! {
        aside {
            class: "callout",
            h3 { class: "callout-title", "{view.title}" }
            if let Some(body) = &view.body {
                p { "{body}" }
            }
            a {
                class: "callout-link",
                href: "{view.link.href}",
                target,
                rel,
                "{view.label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use studio_blocks_engine::models::{Alignment, ButtonVariant};

    #[test]
    fn test_button_classes_and_new_tab() {
        let mut dom = VirtualDom::new_with_props(
            LinkButton,
            LinkButtonProps {
                view: ButtonView {
                    label: "Book a call".to_string(),
                    link: LinkView {
                        href: "https://cal.example.com".to_string(),
                        new_tab: true,
                    },
                    variant: ButtonVariant::Outline,
                    alignment: Alignment::Center,
                },
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("button button-outline"));
        assert!(html.contains("button-row align-center"));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("Book a call"));
    }

    #[test]
    fn test_callout_without_body() {
        let mut dom = VirtualDom::new_with_props(
            Callout,
            CalloutProps {
                view: CalloutView {
                    title: "Need a refresh?".to_string(),
                    body: None,
                    label: "Learn more".to_string(),
                    link: LinkView {
                        href: "/services".to_string(),
                        new_tab: false,
                    },
                },
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Need a refresh?"));
        assert!(html.contains(r#"href="/services""#));
        assert!(!html.contains("<p>"));
        assert!(!html.contains("target="));
    }
}
