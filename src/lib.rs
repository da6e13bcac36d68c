//! Content engine for the Congruity HR marketing site.
//!
//! The crate loads the declarative site content (services, team rosters,
//! footer links) into an immutable [`ContentCatalog`], resolves route slugs to
//! service records through [`PageResolver`], and renders the static pages with
//! [`SiteBuilder`]. The repository discovery helpers here are used by the `site`
//! binary to find the content document.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod catalog;
pub mod error;
pub mod icons;
pub mod logging;
pub mod resolver;
mod schema_loader;
pub mod site;

pub use catalog::{
    BoardMember, ContentCatalog, Feature, FooterLink, FooterLinkColumn, LeadershipMember,
    SCHEMA_VERSION, ServiceId, ServiceRecord, SiteContent, SiteSettings, Slug,
    load_content_from_path,
};
pub use error::RecordNotFound;
pub use icons::{DEFAULT_ICON, Icon, IconName, icon_for};
pub use resolver::{NOT_FOUND_TITLE, PageMetadata, PageResolver, RouteParams, ServiceSource};
pub use site::{BuildReport, Page, SiteBuilder};

const CONTENT_FILE: &str = "content/site_content.json";
const MANIFEST: &str = "Cargo.toml";

/// Environment variable naming the repository root explicitly.
pub const ROOT_ENV: &str = "CONGRUITY_SITE_ROOT";

/// Returns true when `candidate` holds the content document and a manifest.
fn is_repo_root(candidate: &Path) -> bool {
    candidate.join(CONTENT_FILE).is_file() && candidate.join(MANIFEST).is_file()
}

fn repo_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_repo_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_repo_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the repository root.
///
/// Honors `CONGRUITY_SITE_ROOT` when it points at a real root, then climbs up
/// from the current executable, then falls back to the build-time hint.
pub fn find_repo_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var(ROOT_ENV) {
        if let Some(root) = repo_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(hint) = option_env!("CONGRUITY_SITE_ROOT_HINT") {
        if let Some(root) = repo_root_from_hint(hint) {
            return Ok(root);
        }
    }

    bail!("Unable to locate the site repository root. Set {ROOT_ENV} to the checkout.");
}

/// The content document shipped with the repository.
pub fn default_content_path(repo_root: &Path) -> PathBuf {
    repo_root.join(CONTENT_FILE)
}

/// Resolve an optional user-supplied content path.
///
/// Relative overrides are taken relative to `repo_root`.
pub fn resolve_content_path(repo_root: &Path, override_path: Option<&Path>) -> PathBuf {
    match override_path {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => repo_root.join(path),
        None => default_content_path(repo_root),
    }
}
