//! Link resolution: CMS link descriptors to hrefs.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{InternalRef, Link, LinkType};
use crate::rendering::node::LinkView;

static ALLOWED_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://[^\s]+|mailto:[^\s]+|tel:\+?[0-9]+|/[^\s]*|#[A-Za-z][\w-]*)$")
        .expect("href pattern is valid")
});

/// Trim and accept only hrefs a site should ever emit: http(s), mail, phone,
/// site-relative and in-page anchors.
pub fn clean_href(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    ALLOWED_HREF
        .is_match(trimmed)
        .then(|| trimmed.to_string())
}

/// Site route for an internal document.
pub fn route_for(reference: &InternalRef) -> Option<String> {
    let slug = reference
        .slug
        .as_deref()
        .map(|s| s.trim().trim_matches('/'))
        .filter(|s| !s.is_empty());

    match (reference.doc_type.as_str(), slug) {
        ("home", _) => Some("/".to_string()),
        ("page", Some(slug)) => Some(format!("/{slug}")),
        ("service", Some(slug)) => Some(format!("/services/{slug}")),
        ("service", None) => Some("/services".to_string()),
        ("contact", _) => Some("/contact".to_string()),
        _ => None,
    }
}

pub fn resolve_link(link: &Link) -> Option<LinkView> {
    let href = match link.link_type {
        Some(LinkType::Internal) => link.internal.as_ref().and_then(route_for),
        Some(LinkType::External) => link.url.as_deref().and_then(external_href),
        Some(LinkType::Email) => link.email.as_deref().and_then(email_href),
        Some(LinkType::Phone) => link.phone.as_deref().and_then(phone_href),
        Some(LinkType::Anchor) => link.anchor.as_deref().and_then(anchor_href),
        None => link
            .internal
            .as_ref()
            .and_then(route_for)
            .or_else(|| link.url.as_deref().and_then(external_href))
            .or_else(|| link.email.as_deref().and_then(email_href))
            .or_else(|| link.phone.as_deref().and_then(phone_href))
            .or_else(|| link.anchor.as_deref().and_then(anchor_href)),
    }?;

    Some(LinkView {
        href,
        new_tab: link.open_in_new_tab,
    })
}

/// Resolve a block's destination: the structured link first, then the raw
/// `href` field.
pub fn resolve_destination(link: Option<&Link>, href: Option<&str>) -> Option<LinkView> {
    link.and_then(resolve_link).or_else(|| {
        href.and_then(clean_href).map(|href| LinkView {
            href,
            new_tab: false,
        })
    })
}

fn external_href(url: &str) -> Option<String> {
    clean_href(url).filter(|href| href.starts_with("http://") || href.starts_with("https://"))
}

pub(crate) fn email_href(email: &str) -> Option<String> {
    let email = email.trim().trim_start_matches("mailto:");
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || !domain.contains('.') || email.contains(char::is_whitespace) {
        return None;
    }
    Some(format!("mailto:{email}"))
}

pub(crate) fn phone_href(phone: &str) -> Option<String> {
    let phone = phone.trim().trim_start_matches("tel:");
    let digits: String = phone
        .chars()
        .enumerate()
        .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
        .map(|(_, c)| c)
        .collect();
    (digits.chars().filter(char::is_ascii_digit).count() >= 5).then(|| format!("tel:{digits}"))
}

fn anchor_href(anchor: &str) -> Option<String> {
    clean_href(&format!("#{}", anchor.trim().trim_start_matches('#')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://example.com/work", Some("https://example.com/work"))]
    #[case("  /about  ", Some("/about"))]
    #[case("#contact", Some("#contact"))]
    #[case("mailto:hi@example.com", Some("mailto:hi@example.com"))]
    #[case("", None)]
    #[case("   ", None)]
    #[case("javascript:alert(1)", None)]
    #[case("example.com", None)]
    fn test_clean_href(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(clean_href(raw).as_deref(), expected);
    }

    #[rstest]
    #[case("home", None, Some("/"))]
    #[case("page", Some("about"), Some("/about"))]
    #[case("page", Some("/about/"), Some("/about"))]
    #[case("page", None, None)]
    #[case("service", Some("branding"), Some("/services/branding"))]
    #[case("service", None, Some("/services"))]
    #[case("post", Some("x"), None)]
    fn test_route_for(
        #[case] doc_type: &str,
        #[case] slug: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let reference = InternalRef {
            doc_type: doc_type.to_string(),
            slug: slug.map(str::to_string),
        };
        assert_eq!(route_for(&reference).as_deref(), expected);
    }

    #[test]
    fn test_typed_link_only_consults_its_own_field() {
        let link = Link {
            link_type: Some(LinkType::Email),
            url: Some("https://example.com".to_string()),
            ..Link::default()
        };
        assert_eq!(resolve_link(&link), None);
    }

    #[test]
    fn test_untyped_link_falls_through_fields() {
        let link = Link {
            phone: Some("+44 117 496 0000".to_string()),
            ..Link::default()
        };
        assert_eq!(
            resolve_link(&link).map(|l| l.href),
            Some("tel:+441174960000".to_string())
        );
    }

    #[test]
    fn test_new_tab_flag_is_carried() {
        let mut link = Link::external("https://example.com");
        link.open_in_new_tab = true;
        let view = resolve_link(&link).unwrap();
        assert!(view.new_tab);
        assert!(view.is_external());
    }

    #[test]
    fn test_destination_falls_back_to_raw_href() {
        let broken = Link::internal("page", None);
        let view = resolve_destination(Some(&broken), Some("/work")).unwrap();
        assert_eq!(view.href, "/work");
        assert_eq!(resolve_destination(None, Some("")), None);
    }

    #[rstest]
    #[case("hello@studio.test", Some("mailto:hello@studio.test"))]
    #[case("not-an-email", None)]
    #[case("a@b", None)]
    fn test_email_href(#[case] email: &str, #[case] expected: Option<&str>) {
        assert_eq!(email_href(email).as_deref(), expected);
    }
}
