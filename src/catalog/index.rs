//! Validated, immutable view of the site content.
//!
//! `ContentCatalog` is built once at startup and then only read. Loading
//! enforces the schema version and the structural invariants page generation
//! relies on: at least one service, URL-safe slugs, and unique ids and slugs.

use crate::catalog::identity::{ServiceId, Slug};
use crate::catalog::model::{
    BoardMember, FooterLinkColumn, LeadershipMember, ServiceRecord, SiteContent, SiteSettings,
};
use crate::schema_loader::ContentSchema;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Document version this build understands.
pub const SCHEMA_VERSION: &str = "site_content_v1";

pub(crate) const BUNDLED_CONTENT: &str = include_str!("../../content/site_content.json");
pub(crate) const BUNDLED_SCHEMA: &str = include_str!("../../schema/site_content.schema.json");

const SCHEMA_FILE: &str = "schema/site_content.schema.json";

#[derive(Debug)]
/// Read-only content catalog shared by the resolver and the site builder.
pub struct ContentCatalog {
    content: SiteContent,
}

impl ContentCatalog {
    /// Load and validate a content document from disk.
    ///
    /// The schema is looked up beside the content directory first, then in
    /// the crate's own `schema/` directory.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let value: Value = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing {}", path.display()))?;

        let schema_path = resolve_schema_path(path);
        let schema = ContentSchema::from_path(&schema_path)?;
        let label = format!("content {}", path.display());
        Self::from_value(&schema, value, &label)
            .with_context(|| format!("loading {}", path.display()))
    }

    /// The content compiled into this binary.
    pub fn bundled() -> Result<Self> {
        let schema = ContentSchema::from_json_str(BUNDLED_SCHEMA)?;
        let value: Value =
            serde_json::from_str(BUNDLED_CONTENT).context("parsing bundled content")?;
        Self::from_value(&schema, value, "bundled content")
    }

    /// Build a catalog from an already-parsed document.
    ///
    /// Skips JSON Schema validation but still enforces the version and the
    /// service invariants.
    pub fn from_content(content: SiteContent) -> Result<Self> {
        validate_schema_version(&content.schema_version.0, SCHEMA_VERSION)?;
        validate_services(&content.services)?;
        validate_footer(&content.footer_links)?;

        tracing::info!(
            services = content.services.len(),
            leadership = content.team.leadership.len(),
            board = content.team.board.len(),
            footer_columns = content.footer_links.len(),
            "content catalog loaded"
        );
        Ok(Self { content })
    }

    fn from_value(schema: &ContentSchema, value: Value, label: &str) -> Result<Self> {
        let declared = value
            .get("schema_version")
            .and_then(Value::as_str)
            .unwrap_or_default();
        validate_schema_version(declared, &schema.schema_version)?;
        schema.validate(&value, label)?;

        let content: SiteContent =
            serde_json::from_value(value).with_context(|| format!("decoding {label}"))?;
        Self::from_content(content)
    }

    /// Every service in declaration order.
    pub fn all_services(&self) -> &[ServiceRecord] {
        &self.content.services
    }

    pub fn leadership(&self) -> &[LeadershipMember] {
        &self.content.team.leadership
    }

    pub fn board(&self) -> &[BoardMember] {
        &self.content.team.board
    }

    pub fn footer_links(&self) -> &[FooterLinkColumn] {
        &self.content.footer_links
    }

    pub fn site(&self) -> &SiteSettings {
        &self.content.site
    }

    /// The underlying document.
    pub fn content(&self) -> &SiteContent {
        &self.content
    }
}

fn validate_schema_version(declared: &str, expected: &str) -> Result<()> {
    if declared.is_empty() {
        bail!("schema_version must not be empty");
    }
    if declared != expected {
        bail!("schema_version '{declared}' is not supported (expected '{expected}')");
    }
    Ok(())
}

fn validate_services(services: &[ServiceRecord]) -> Result<()> {
    if services.is_empty() {
        bail!("content contains no services");
    }

    let mut ids: BTreeSet<&ServiceId> = BTreeSet::new();
    let mut slugs: BTreeSet<&Slug> = BTreeSet::new();
    for service in services {
        if service.id.0.trim().is_empty() {
            bail!("encountered service with no id");
        }
        if !service.slug.is_url_safe() {
            bail!(
                "service {} has slug '{}' which is not URL-safe",
                service.id.0,
                service.slug
            );
        }
        if !ids.insert(&service.id) {
            bail!("duplicate service id {}", service.id.0);
        }
        if !slugs.insert(&service.slug) {
            bail!("duplicate service slug {}", service.slug);
        }
    }
    Ok(())
}

fn validate_footer(columns: &[FooterLinkColumn]) -> Result<()> {
    for column in columns {
        if column.column_name.trim().is_empty() {
            bail!("footer_links must not contain a column without a name");
        }
        if let Some(link) = column.links.iter().find(|link| link.href.trim().is_empty()) {
            bail!(
                "footer column {} has link '{}' with an empty href",
                column.column_name,
                link.title
            );
        }
    }
    Ok(())
}

fn resolve_schema_path(content_path: &Path) -> PathBuf {
    if let Some(base) = content_path.parent().and_then(|p| p.parent()) {
        let candidate = base.join(SCHEMA_FILE);
        if candidate.exists() {
            return candidate;
        }
    }

    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(SCHEMA_FILE)
}
