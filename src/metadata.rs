use serde::Serialize;
use web_sys::{Document, Element};

use crate::components::logo::LOGO_SRC;
use crate::config::{SITE_NAME, SITE_TITLE, SITE_URL};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: &'static str,
}

const fn name(key: &'static str, content: &'static str) -> MetaTag {
    MetaTag { key: MetaKey::Name(key), content }
}

const fn property(key: &'static str, content: &'static str) -> MetaTag {
    MetaTag { key: MetaKey::Property(key), content }
}

const SHARE_DESCRIPTION: &str = "Leading pharmaceutical innovation with over 25 years of excellence in research, manufacturing, and healthcare solutions.";

pub const META_TAGS: &[MetaTag] = &[
    name("description", "C Life Pharmaceuticals is a leading pharmaceutical company committed to improving global health through innovative medicines, cutting-edge research, and sustainable practices. Serving 50+ countries worldwide."),
    name("keywords", "pharmaceuticals, healthcare, medicine, drugs, research, innovation, cardiovascular, diabetes, respiratory, oncology, sustainable pharma, clinical trials"),
    property("og:title", SITE_TITLE),
    property("og:description", SHARE_DESCRIPTION),
    property("og:type", "website"),
    name("twitter:card", "summary_large_image"),
    name("twitter:title", SITE_TITLE),
    name("twitter:description", SHARE_DESCRIPTION),
    name("author", SITE_NAME),
    name("robots", "index, follow"),
    name("viewport", "width=device-width, initial-scale=1.0"),
];

impl MetaTag {
    fn attribute(&self) -> (&'static str, &'static str) {
        match self.key {
            MetaKey::Name(value) => ("name", value),
            MetaKey::Property(value) => ("property", value),
        }
    }

    pub fn selector(&self) -> String {
        let (attribute, value) = self.attribute();
        format!("meta[{}=\"{}\"]", attribute, value)
    }

    /// Updates the matching tag in `<head>`, or appends a new one.
    fn upsert(&self, document: &Document) {
        if let Ok(Some(existing)) = document.query_selector(&self.selector()) {
            let _ = existing.set_attribute("content", self.content);
            return;
        }
        let (Ok(meta), Some(head)) = (document.create_element("meta"), document.head()) else {
            return;
        };
        let (attribute, value) = self.attribute();
        let _ = meta.set_attribute(attribute, value);
        let _ = meta.set_attribute("content", self.content);
        let _ = head.append_child(&meta);
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    kind: &'static str,
    telephone: &'static str,
    contact_type: &'static str,
    area_served: &'static str,
    available_language: Vec<&'static str>,
}

/// schema.org `Organization` record embedded as JSON-LD.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    description: &'static str,
    url: String,
    logo: String,
    founding_date: &'static str,
    contact_point: ContactPoint,
    same_as: Vec<&'static str>,
}

pub fn organization() -> Organization {
    Organization {
        context: "https://schema.org",
        kind: "Organization",
        name: SITE_NAME,
        description: "A leading pharmaceutical company committed to improving global health",
        url: SITE_URL.to_string(),
        logo: format!("{}{}", SITE_URL, LOGO_SRC),
        founding_date: "1999",
        contact_point: ContactPoint {
            kind: "ContactPoint",
            telephone: "+1-555-123-4567",
            contact_type: "Customer Service",
            area_served: "Worldwide",
            available_language: vec!["English"],
        },
        same_as: vec![
            "https://www.facebook.com/clifepharma",
            "https://www.twitter.com/clifepharma",
            "https://www.linkedin.com/company/clifepharma",
        ],
    }
}

/// Sets the title and meta tags and appends the JSON-LD script.
///
/// Returns the script element so the caller can remove it on unmount.
pub fn install() -> Option<Element> {
    let document = web_sys::window()?.document()?;
    document.set_title(SITE_TITLE);
    for tag in META_TAGS {
        tag.upsert(&document);
    }

    let json = serde_json::to_string(&organization()).ok()?;
    let script = document.create_element("script").ok()?;
    let _ = script.set_attribute("type", "application/ld+json");
    script.set_text_content(Some(&json));
    document.head()?.append_child(&script).ok()?;
    Some(script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_use_name_or_property() {
        assert_eq!(META_TAGS[0].selector(), "meta[name=\"description\"]");
        assert_eq!(
            property("og:title", SITE_TITLE).selector(),
            "meta[property=\"og:title\"]"
        );
    }

    #[test]
    fn every_tag_key_is_unique() {
        let mut selectors: Vec<_> = META_TAGS.iter().map(MetaTag::selector).collect();
        selectors.sort();
        selectors.dedup();
        assert_eq!(selectors.len(), META_TAGS.len());
    }

    #[test]
    fn organization_serializes_as_json_ld() {
        let value = serde_json::to_value(organization()).expect("serializable");
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Organization");
        assert_eq!(value["foundingDate"], "1999");
        assert_eq!(value["contactPoint"]["@type"], "ContactPoint");
        assert_eq!(value["contactPoint"]["availableLanguage"][0], "English");
        assert_eq!(value["sameAs"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["url"], "https://www.clifepharma.com");
        assert_eq!(value["logo"], "https://www.clifepharma.com/assets/logo.png");
    }
}
