use serde::Deserialize;

use crate::models::{ImageRef, Link};

/// Cross-cutting content fetched once per request, before any rendering.
///
/// Every part is optional; renderers that depend on a missing part degrade
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteData {
    pub seo: Option<SeoSettings>,
    pub business: Option<BusinessInfo>,
    pub company_links: Option<Vec<CompanyLink>>,
    pub contact_form: Option<ContactFormConfig>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoSettings {
    pub site_title: Option<String>,
    pub title_template: Option<String>,
    pub default_description: Option<String>,
    pub share_image: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub opening_hours: Vec<String>,
    pub logo: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl Address {
    /// Populated address parts in postal order.
    pub fn lines(&self) -> Vec<String> {
        [
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
        .into_iter()
        .flatten()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyLink {
    #[serde(rename = "_key")]
    pub key: String,
    pub label: Option<String>,
    pub platform: Option<String>,
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFormConfig {
    pub submit_label: Option<String>,
    pub success_message: Option<String>,
    pub show_phone_field: bool,
    pub subject_options: Vec<String>,
}
