//! Content catalog wiring.
//!
//! This module wraps the JSON document under `content/site_content.json` so
//! the resolver and site builder share one validated, immutable snapshot.
//! Types here mirror the schema fields; callers hold a `ContentCatalog` and
//! pass it by reference.

pub mod identity;
pub mod index;
pub mod model;

pub use identity::{SchemaVersion, ServiceId, Slug};
pub use index::{ContentCatalog, SCHEMA_VERSION};
pub use model::{
    BoardMember, Feature, FooterLink, FooterLinkColumn, LeadershipMember, ServiceRecord,
    SiteContent, SiteSettings, Team,
};

pub use model::load_content_from_path;
