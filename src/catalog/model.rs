//! Deserializable representation of `content/site_content.json`.
//!
//! The types mirror `schema/site_content.schema.json`. Use `ContentCatalog`
//! for validated access and slug lookup; these structs are the raw document.

use crate::catalog::identity::{SchemaVersion, ServiceId, Slug};
use crate::icons::IconName;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Full content document as stored on disk.
pub struct SiteContent {
    pub schema_version: SchemaVersion,
    pub site: SiteSettings,
    pub services: Vec<ServiceRecord>,
    pub team: Team,
    #[serde(default)]
    pub footer_links: Vec<FooterLinkColumn>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Site-wide settings used by every page (footer contact block, socials).
pub struct SiteSettings {
    pub title: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// Opaque analytics configuration handed to the page's analytics hook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Value>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// One service offering, rendered at `/services/<slug>`.
pub struct ServiceRecord {
    pub id: ServiceId,
    pub slug: Slug,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub icon: IconName,
    pub image: String,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub leadership: Vec<LeadershipMember>,
    #[serde(default)]
    pub board: Vec<BoardMember>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LeadershipMember {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
    pub bio: String,
    pub image: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BoardMember {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl BoardMember {
    /// Monogram shown in place of a photo: first letter of each name part.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Heading plus ordered links for one footer column.
pub struct FooterLinkColumn {
    pub column_name: String,
    pub links: Vec<FooterLink>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub title: String,
    pub href: String,
}

/// Read and parse a content document from disk without additional validation.
pub fn load_content_from_path(path: &Path) -> Result<SiteContent> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let content: SiteContent =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn initials_take_first_letter_of_each_word() {
        let member = BoardMember {
            name: "Casey  Ann Whitfield".to_string(),
            title: "Board Chair".to_string(),
            company: None,
        };
        assert_eq!(member.initials(), "CAW");

        let single = BoardMember {
            name: "Riley".to_string(),
            title: "Board Member".to_string(),
            company: None,
        };
        assert_eq!(single.initials(), "R");
    }

    #[test]
    fn service_record_rejects_unknown_icon() {
        let value = json!({
            "id": "svc-x",
            "slug": "x",
            "title": "X",
            "short_description": "",
            "long_description": "",
            "icon": "Rocket",
            "image": "/x.jpg"
        });
        let err = serde_json::from_value::<ServiceRecord>(value).unwrap_err();
        assert!(err.to_string().contains("Rocket"));
    }

    #[test]
    fn optional_member_fields_default_to_none() {
        let leader: LeadershipMember = serde_json::from_value(json!({
            "name": "Morgan Reyes",
            "title": "COO",
            "bio": "Runs operations.",
            "image": "/m.jpg"
        }))
        .unwrap();
        assert!(leader.credentials.is_none());

        let serialized = serde_json::to_value(&leader).unwrap();
        assert!(serialized.get("credentials").is_none());
    }
}
