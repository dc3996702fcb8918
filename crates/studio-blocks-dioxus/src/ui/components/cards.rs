use crate::ui::components::actions::new_tab_attrs;
use crate::ui::components::{Figure, NodeList};
use dioxus::prelude::*;
use studio_blocks_engine::rendering::style::alignment_class;
use studio_blocks_engine::rendering::{CardView, ServiceCardView};

#[component]
pub fn Card(view: CardView) -> Element {
    let class_name = format!("card {}", alignment_class(view.alignment));
    let cta = view.cta.as_ref().map(|cta| {
        let (target, rel) = new_tab_attrs(&cta.link);
        rsx! {
            a {
                class: "card-cta",
                href: "{cta.link.href}",
                target,
                rel,
                "{cta.label}"
            }
        }
    });

    rsx! {
        article {
            class: "{class_name}",
            if let Some(image) = &view.image {
                Figure { image: image.clone() }
            }
            if let Some(title) = &view.title {
                h3 { class: "card-title", "{title}" }
            }
            if let Some(body) = &view.body {
                p { class: "card-body", "{body}" }
            }
            if !view.children.is_empty() {
                div {
                    class: "card-content",
                    NodeList { nodes: view.children.clone() }
                }
            }
            if let Some(cta) = cta {
                {cta}
            }
        }
    }
}

#[component]
pub fn ServiceCard(view: ServiceCardView) -> Element {
    let class_name = format!("card service-card {}", alignment_class(view.alignment));

    rsx! {
        article {
            class: "{class_name}",
            if let Some(image) = &view.image {
                Figure { image: image.clone() }
            }
            h3 {
                class: "card-title",
                if let Some(link) = &view.link {
                    a { href: "{link.href}", "{view.title}" }
                } else {
                    "{view.title}"
                }
            }
            if let Some(summary) = &view.summary {
                p { class: "card-body", "{summary}" }
            }
            if !view.children.is_empty() {
                div {
                    class: "card-content",
                    NodeList { nodes: view.children.clone() }
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
    use studio_blocks_engine::models::Alignment;
    use studio_blocks_engine::rendering::{CtaView, LinkView};

    #[test]
    fn test_card_with_cta() {
        let mut dom = VirtualDom::new_with_props(
            Card,
            CardProps {
                view: CardView {
                    title: Some("Branding".to_string()),
                    body: Some("Logos and type.".to_string()),
                    image: None,
                    cta: Some(CtaView {
                        label: "See work".to_string(),
                        link: LinkView {
                            href: "/work".to_string(),
                            new_tab: false,
                        },
                    }),
                    alignment: Alignment::Left,
                    children: Vec::new(),
                },
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("card align-left"));
        assert!(html.contains("Branding"));
        assert!(html.contains(r#"href="/work""#));
        assert!(!html.contains("card-content"));
    }

    #[test]
    fn test_service_card_title_links_to_service() {
        let mut dom = VirtualDom::new_with_props(
            ServiceCard,
            ServiceCardProps {
                view: ServiceCardView {
                    title: "Websites".to_string(),
                    summary: None,
                    image: None,
                    link: Some(LinkView {
                        href: "/services/websites".to_string(),
                        new_tab: false,
                    }),
                    alignment: Alignment::Center,
                    children: Vec::new(),
                },
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains(r#"<a href="/services/websites">Websites</a>"#));
    }
}
