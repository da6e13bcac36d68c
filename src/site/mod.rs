//! Static site generation over the content catalog.
//!
//! The route table is derived from the catalog: fixed pages plus one
//! `/services/<slug>` page per entry of `PageResolver::enumerate_slugs`.
//! `write_to` renders every route into an output directory, one
//! `index.html` per route.

pub mod html;
mod pages;

use crate::catalog::ContentCatalog;
use crate::resolver::{PageMetadata, PageResolver};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const HOME_ROUTE: &str = "/";
pub const SERVICES_ROUTE: &str = "/services";
pub const TEAM_ROUTE: &str = "/about/meet-the-team";
pub const NOT_FOUND_ROUTE: &str = "/404";

const SERVICE_PREFIX: &str = "/services/";

#[derive(Clone, Debug)]
/// One rendered page.
pub struct Page {
    pub route: String,
    /// HTTP status a server should answer with (200 or 404).
    pub status: u16,
    pub metadata: PageMetadata,
    pub html: String,
}

impl Page {
    /// Location of this page relative to the output directory.
    pub fn output_path(&self) -> PathBuf {
        if self.route == NOT_FOUND_ROUTE {
            return PathBuf::from("404.html");
        }
        let mut path = PathBuf::new();
        for segment in self.route.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.join("index.html")
    }
}

#[derive(Clone, Debug, Serialize)]
/// Summary of a completed `write_to` run.
pub struct BuildReport {
    pub pages: usize,
    pub written: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug)]
pub struct SiteBuilder<'a> {
    catalog: &'a ContentCatalog,
    resolver: PageResolver<'a>,
}

impl<'a> SiteBuilder<'a> {
    pub fn new(catalog: &'a ContentCatalog) -> Self {
        Self {
            catalog,
            resolver: PageResolver::new(catalog),
        }
    }

    /// Every route to pre-generate, in output order.
    pub fn routes(&self) -> Vec<String> {
        let mut routes = vec![HOME_ROUTE.to_string(), SERVICES_ROUTE.to_string()];
        routes.extend(
            self.resolver
                .enumerate_slugs()
                .into_iter()
                .map(|slug| format!("{SERVICE_PREFIX}{slug}")),
        );
        routes.push(TEAM_ROUTE.to_string());
        routes.push(NOT_FOUND_ROUTE.to_string());
        routes
    }

    /// Render every route.
    pub fn pages(&self) -> Vec<Page> {
        self.routes()
            .iter()
            .map(|route| self.render_route(route))
            .collect()
    }

    /// Render the page for a request path; anything unknown gets the 404 page.
    ///
    /// Paths are matched verbatim: the slug segment is handed to the resolver
    /// without trimming or case folding.
    pub fn render_route(&self, path: &str) -> Page {
        match path {
            HOME_ROUTE => self.page(
                path,
                PageMetadata {
                    title: self.catalog.site().title.clone(),
                    description: Some(self.catalog.site().description.clone()),
                },
                pages::home(self.catalog.all_services()),
            ),
            SERVICES_ROUTE => self.page(
                path,
                PageMetadata {
                    title: "Services".to_string(),
                    description: Some(
                        "Comprehensive HR solutions including PEO, ASO, HR consulting, employee benefits, and compliance services."
                            .to_string(),
                    ),
                },
                pages::services_index(self.catalog.all_services()),
            ),
            TEAM_ROUTE => self.page(
                path,
                PageMetadata {
                    title: "Meet the Team".to_string(),
                    description: Some(
                        "Meet the leadership team at Congruity HR. Our experienced professionals bring decades of HR, payroll, and benefits expertise."
                            .to_string(),
                    ),
                },
                pages::team(self.catalog.leadership(), self.catalog.board()),
            ),
            _ => match path.strip_prefix(SERVICE_PREFIX) {
                Some(slug) if !slug.contains('/') => match self.resolver.resolve(slug) {
                    Ok(service) => self.page(
                        path,
                        self.resolver.metadata(slug),
                        pages::service_detail(service, &self.resolver.related_services(slug)),
                    ),
                    Err(_) => self.not_found(),
                },
                _ => self.not_found(),
            },
        }
    }

    fn page(&self, route: &str, metadata: PageMetadata, body: String) -> Page {
        let html = html::document(
            self.catalog.site(),
            &metadata,
            self.catalog.footer_links(),
            &body,
        );
        Page {
            route: route.to_string(),
            status: 200,
            metadata,
            html,
        }
    }

    fn not_found(&self) -> Page {
        let mut page = self.page(
            NOT_FOUND_ROUTE,
            PageMetadata {
                title: "Page Not Found".to_string(),
                description: None,
            },
            pages::not_found(),
        );
        page.status = 404;
        page
    }

    /// Render every page into `out_dir`, replacing files atomically.
    pub fn write_to(&self, out_dir: &Path) -> Result<BuildReport> {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("creating output dir {}", out_dir.display()))?;

        let mut written = Vec::new();
        for page in self.pages() {
            let target = out_dir.join(page.output_path());
            write_atomic(&target, page.html.as_bytes())?;
            tracing::debug!(route = %page.route, path = %target.display(), "page written");
            written.push(target);
        }

        tracing::info!(pages = written.len(), out = %out_dir.display(), "site build complete");
        Ok(BuildReport {
            pages: written.len(),
            written,
        })
    }
}

fn write_atomic(target: &Path, data: &[u8]) -> Result<()> {
    let parent = target
        .parent()
        .with_context(|| format!("{} has no parent directory", target.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;

    let mut file = NamedTempFile::new_in(parent)
        .with_context(|| format!("allocating temp file in {}", parent.display()))?;
    file.write_all(data)
        .with_context(|| format!("writing {}", target.display()))?;
    file.persist(target)
        .with_context(|| format!("persisting {}", target.display()))?;
    Ok(())
}
