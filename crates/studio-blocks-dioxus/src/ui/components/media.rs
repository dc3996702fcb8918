use dioxus::prelude::*;
use studio_blocks_engine::rendering::style::grid_class;
use studio_blocks_engine::rendering::{EmbedView, GalleryView, ImageView};

#[component]
pub fn Figure(image: ImageView) -> Element {
    let class_name = if image.full_width {
        "figure full-width"
    } else {
        "figure"
    };

    rsx! {
        figure {
            class: "{class_name}",
            img {
                src: "{image.src}",
                alt: "{image.alt}",
                width: "{image.width}",
                height: "{image.height}",
                "loading": "lazy",
            }
            if let Some(caption) = &image.caption {
                figcaption { "{caption}" }
            }
        }
    }
}

#[component]
pub fn Gallery(view: GalleryView) -> Element {
    let class_name = format!("gallery {}", grid_class(view.columns));

    rsx! {
        div {
            class: "{class_name}",
            for image in view.images.iter() {
                Figure { key: "{image.key}", image: image.clone() }
            }
        }
    }
}

/// Video player or map iframe. `kind` becomes the wrapper's class.
#[component]
pub fn Embed(embed: EmbedView, kind: &'static str) -> Element {
    let class_name = format!("embed embed-{kind}");

    rsx! {
        div {
            class: "{class_name}",
            iframe {
                src: "{embed.src}",
                title: "{embed.title}",
                height: embed.height.map(|h| h.to_string()),
                "loading": "lazy",
                "allow": "fullscreen; picture-in-picture",
            }
        }
    }
}
