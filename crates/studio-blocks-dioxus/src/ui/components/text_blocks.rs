use crate::ui::components::RichTextView;
use dioxus::prelude::*;
use studio_blocks_engine::models::Spacing;
use studio_blocks_engine::rendering::style::{alignment_class, spacing_class};
use studio_blocks_engine::rendering::{QuoteView, StatementView, TextView};

#[component]
pub fn TextBlock(view: TextView) -> Element {
    let class_name = format!("text {}", alignment_class(view.alignment));

    rsx! {
        div {
            class: "{class_name}",
            RichTextView { text: view.body }
        }
    }
}

#[component]
pub fn Statement(view: StatementView) -> Element {
    let class_name = format!("statement {}", alignment_class(view.alignment));

    rsx! {
        p { class: "{class_name}", "{view.text}" }
    }
}

#[component]
pub fn Quote(view: QuoteView) -> Element {
    let class_name = format!("quote {}", alignment_class(view.alignment));

    rsx! {
        figure {
            class: "{class_name}",
            blockquote { p { "{view.text}" } }
            if view.attribution.is_some() || view.role.is_some() {
                figcaption {
                    if let Some(attribution) = &view.attribution {
                        cite { "{attribution}" }
                    }
                    if let Some(role) = &view.role {
                        span { class: "quote-role", "{role}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Divider(spacing: Spacing) -> Element {
    let class_name = format!("divider {}", spacing_class(spacing));

    rsx! {
        hr { class: "{class_name}" }
    }
}
