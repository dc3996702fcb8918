use crate::ui::components::*;
use dioxus::prelude::*;
use studio_blocks_engine::{NodeView, RenderNode};

/// Wraps one rendered block, tagging it with its kind and live-editing
/// binding, and hands the view to the matching component.
#[component]
pub fn BlockNode(node: RenderNode) -> Element {
    let class_name = format!("block block-{}", node.view_name());

    let content = match node.view {
        NodeView::Text(view) => rsx! { TextBlock { view } },
        NodeView::Statement(view) => rsx! { Statement { view } },
        NodeView::Quote(view) => rsx! { Quote { view } },
        NodeView::Divider { spacing } => rsx! { Divider { spacing } },
        NodeView::Image(image) => rsx! { Figure { image } },
        NodeView::Gallery(view) => rsx! { Gallery { view } },
        NodeView::Map(embed) => rsx! { Embed { embed, kind: "map" } },
        NodeView::Video(embed) => rsx! { Embed { embed, kind: "video" } },
        NodeView::Button(view) => rsx! { LinkButton { view } },
        NodeView::Callout(view) => rsx! { Callout { view } },
        NodeView::Card(view) => rsx! { Card { view } },
        NodeView::IconList(items) => rsx! { IconList { items } },
        NodeView::DetailedList(items) => rsx! { DetailedList { items } },
        NodeView::StatList(items) => rsx! { StatList { items } },
        NodeView::CheckList(items) => rsx! { CheckList { items } },
        NodeView::ItemList { ordered, items } => rsx! { ItemList { ordered, items } },
        NodeView::ServiceCard(view) => rsx! { ServiceCard { view } },
        NodeView::ServiceList(services) => rsx! { ServiceList { services } },
        NodeView::FaqList(items) => rsx! { FaqList { items } },
        NodeView::CompanyLinks(view) => rsx! { CompanyLinks { view } },
        NodeView::TwoColumn(view) => rsx! { TwoColumn { view } },
        NodeView::Grid(view) => rsx! { Grid { view } },
        NodeView::Responsive(view) => rsx! { Responsive { view } },
        NodeView::Expanding(view) => rsx! { Expanding { view } },
        NodeView::Contact(view) => rsx! { ContactSection { view } },
        NodeView::Section(view) => rsx! { Section { view } },
        NodeView::Wrapper(view) => rsx! { ContentWrapper { view } },
    };

    rsx! {
        div {
            class: "{class_name}",
            "data-sanity": node.binding,
            {content}
        }
    }
}

/// Renders sibling nodes in order, keyed by their document path.
#[component]
pub fn NodeList(nodes: Vec<RenderNode>) -> Element {
    rsx! {
        for node in nodes.iter() {
            BlockNode { key: "{node.path}", node: node.clone() }
        }
    }
}
