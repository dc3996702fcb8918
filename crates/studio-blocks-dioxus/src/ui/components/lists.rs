use crate::ui::components::RichTextView;
use dioxus::prelude::*;
use studio_blocks_engine::rendering::{
    CompanyLinksView, DetailedItemView, FaqView, IconItemView, ListEntryView, ServiceView,
    StatView,
};

#[component]
pub fn IconList(items: Vec<IconItemView>) -> Element {
    rsx! {
        ul {
            class: "icon-list",
            for item in items.iter() {
                li {
                    key: "{item.key}",
                    if let Some(icon) = &item.icon {
                        span { class: "icon icon-{icon}", "aria-hidden": "true" }
                    }
                    div {
                        strong { "{item.title}" }
                        if let Some(text) = &item.text {
                            p { "{text}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn DetailedList(items: Vec<DetailedItemView>) -> Element {
    rsx! {
        dl {
            class: "detailed-list",
            for item in items.iter() {
                div {
                    key: "{item.key}",
                    dt { "{item.title}" }
                    if let Some(description) = &item.description {
                        dd { "{description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn StatList(items: Vec<StatView>) -> Element {
    rsx! {
        div {
            class: "stat-list",
            for stat in items.iter() {
                div {
                    key: "{stat.key}",
                    class: "stat",
                    span { class: "stat-value", "{stat.value}" }
                    span { class: "stat-label", "{stat.label}" }
                }
            }
        }
    }
}

#[component]
pub fn CheckList(items: Vec<ListEntryView>) -> Element {
    rsx! {
        ul {
            class: "check-list",
            for item in items.iter() {
                li { key: "{item.key}", "{item.text}" }
            }
        }
    }
}

#[component]
pub fn ItemList(ordered: bool, items: Vec<ListEntryView>) -> Element {
    if ordered {
        rsx! {
            ol {
                class: "item-list",
                for item in items.iter() {
                    li { key: "{item.key}", "{item.text}" }
                }
            }
        }
    } else {
        rsx! {
            ul {
                class: "item-list",
                for item in items.iter() {
                    li { key: "{item.key}", "{item.text}" }
                }
            }
        }
    }
}

#[component]
pub fn ServiceList(services: Vec<ServiceView>) -> Element {
    rsx! {
        ul {
            class: "service-list",
            for service in services.iter() {
                li {
                    key: "{service.key}",
                    if let Some(link) = &service.link {
                        a { href: "{link.href}", "{service.title}" }
                    } else {
                        span { "{service.title}" }
                    }
                    if let Some(summary) = &service.summary {
                        p { "{summary}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn FaqList(items: Vec<FaqView>) -> Element {
    rsx! {
        div {
            class: "faq-list",
            for item in items.iter() {
                details {
                    key: "{item.key}",
                    summary { "{item.question}" }
                    div { class: "faq-answer", RichTextView { text: item.answer.clone() } }
                }
            }
        }
    }
}

#[component]
pub fn CompanyLinks(view: CompanyLinksView) -> Element {
    rsx! {
        nav {
            class: "company-links",
            if let Some(heading) = &view.heading {
                h3 { "{heading}" }
            }
            ul {
                for link in view.links.iter() {
                    li {
                        key: "{link.key}",
                        a {
                            class: "company-link",
                            "data-platform": link.platform.clone(),
                            href: "{link.link.href}",
                            target: link.link.new_tab.then_some("_blank"),
                            rel: link.link.new_tab.then_some("noopener noreferrer"),
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
