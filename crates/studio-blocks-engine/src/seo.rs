//! Page metadata and JSON-LD structured data.

use serde_json::{Map, Value, json};

use crate::models::rich_text::plain_text;
use crate::models::{BlockKind, Document, SiteData};
use crate::rendering::non_blank;

/// Title, description and canonical URL for a page's `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
    pub canonical: String,
}

/// Document fields first, site-wide SEO defaults second.
pub fn page_meta(site: &SiteData, document: &Document, site_url: &str) -> PageMeta {
    let seo = site.seo.as_ref();
    let site_title = seo
        .and_then(|s| non_blank(s.site_title.as_deref()))
        .or_else(|| site.business.as_ref().and_then(|b| non_blank(b.name.as_deref())));

    let title = match (non_blank(document.title.as_deref()), site_title) {
        (Some(page), Some(site_title)) => {
            // `%s` in the template stands for the page title.
            seo.and_then(|s| non_blank(s.title_template.as_deref()))
                .unwrap_or_else(|| format!("%s | {site_title}"))
                .replace("%s", &page)
        }
        (Some(page), None) => page,
        (None, Some(site_title)) => site_title,
        (None, None) => String::new(),
    };

    PageMeta {
        title,
        description: non_blank(document.description.as_deref())
            .or_else(|| seo.and_then(|s| non_blank(s.default_description.as_deref()))),
        canonical: page_url(site_url, document),
    }
}

/// Absolute URL of a page: the site root for home pages and slug-less
/// documents, `<site>/<slug>` otherwise.
pub fn page_url(site_url: &str, document: &Document) -> String {
    let base = site_url.trim().trim_end_matches('/');
    match document.slug() {
        Some(slug) if document.doc_type != "home" => {
            format!("{base}/{}", slug.trim_matches('/'))
        }
        _ => format!("{base}/"),
    }
}

/// JSON-LD `@graph` describing the business, the page, and its FAQs.
pub fn structured_data(site: &SiteData, document: &Document, site_url: &str) -> Value {
    let meta = page_meta(site, document, site_url);
    let base = site_url.trim().trim_end_matches('/');
    let mut graph = Vec::new();

    if let Some(business) = &site.business
        && let Some(name) = non_blank(business.name.as_deref())
    {
        let mut node = Map::new();
        node.insert("@type".into(), json!("ProfessionalService"));
        node.insert("@id".into(), json!(format!("{base}/#business")));
        node.insert("name".into(), json!(name));
        node.insert("url".into(), json!(format!("{base}/")));
        if let Some(email) = non_blank(business.email.as_deref()) {
            node.insert("email".into(), json!(email));
        }
        if let Some(phone) = non_blank(business.phone.as_deref()) {
            node.insert("telephone".into(), json!(phone));
        }
        if let Some(address) = &business.address {
            let mut postal = Map::new();
            postal.insert("@type".into(), json!("PostalAddress"));
            for (field, value) in [
                ("streetAddress", &address.street),
                ("addressLocality", &address.locality),
                ("addressRegion", &address.region),
                ("postalCode", &address.postal_code),
                ("addressCountry", &address.country),
            ] {
                if let Some(value) = non_blank(value.as_deref()) {
                    postal.insert(field.into(), json!(value));
                }
            }
            if postal.len() > 1 {
                node.insert("address".into(), Value::Object(postal));
            }
        }
        let hours: Vec<_> = business
            .opening_hours
            .iter()
            .filter_map(|line| non_blank(Some(line.as_str())))
            .collect();
        if !hours.is_empty() {
            node.insert("openingHours".into(), json!(hours));
        }
        graph.push(Value::Object(node));
    }

    let mut page = Map::new();
    page.insert("@type".into(), json!("WebPage"));
    page.insert("@id".into(), json!(format!("{}#webpage", meta.canonical)));
    page.insert("url".into(), json!(meta.canonical));
    page.insert("name".into(), json!(meta.title));
    if let Some(description) = meta.description {
        page.insert("description".into(), json!(description));
    }
    graph.push(Value::Object(page));

    let questions = faq_entries(document);
    if !questions.is_empty() {
        graph.push(json!({
            "@type": "FAQPage",
            "mainEntity": questions,
        }));
    }

    json!({
        "@context": "https://schema.org",
        "@graph": graph,
    })
}

/// Every answered question anywhere in the document, in reading order.
fn faq_entries(document: &Document) -> Vec<Value> {
    let mut entries = Vec::new();
    let mut stack: Vec<_> = document.content.iter().rev().collect();

    while let Some(block) = stack.pop() {
        if let BlockKind::FaqList(list) = &block.kind {
            for item in &list.items {
                let answer = plain_text(&item.answer);
                if let Some(question) = non_blank(item.question.as_deref())
                    && !answer.is_empty()
                {
                    entries.push(json!({
                        "@type": "Question",
                        "name": question,
                        "acceptedAnswer": { "@type": "Answer", "text": answer },
                    }));
                }
            }
        }
        for (_, children) in block.child_slots().into_iter().rev() {
            stack.extend(children.iter().rev());
        }
    }

    entries
}
