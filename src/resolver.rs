//! Slug resolution for service pages.
//!
//! `PageResolver` is a borrowed view over a [`ServiceSource`]; every method is
//! a pure read, so one resolver (or many) can be used from any number of
//! threads while pages are generated.

use crate::catalog::{ContentCatalog, ServiceRecord, Slug};
use crate::error::RecordNotFound;
use serde::Serialize;

/// Title used for the metadata of a slug that matches nothing.
pub const NOT_FOUND_TITLE: &str = "Service Not Found";

/// Ordered service records a resolver can search.
pub trait ServiceSource {
    fn services(&self) -> &[ServiceRecord];
}

impl ServiceSource for ContentCatalog {
    fn services(&self) -> &[ServiceRecord] {
        self.all_services()
    }
}

impl ServiceSource for [ServiceRecord] {
    fn services(&self) -> &[ServiceRecord] {
        self
    }
}

impl ServiceSource for Vec<ServiceRecord> {
    fn services(&self) -> &[ServiceRecord] {
        self
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
/// Route parameters for one pre-generated service page.
pub struct RouteParams {
    pub slug: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
/// Title and description for a service page's `<head>`.
pub struct PageMetadata {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug)]
pub struct PageResolver<'a, S: ServiceSource + ?Sized = ContentCatalog> {
    source: &'a S,
}

impl<S: ServiceSource + ?Sized> Clone for PageResolver<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ServiceSource + ?Sized> Copy for PageResolver<'_, S> {}

impl<'a, S: ServiceSource + ?Sized> PageResolver<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    fn services(&self) -> &'a [ServiceRecord] {
        self.source.services()
    }

    /// Find the service whose slug equals `slug` exactly.
    ///
    /// No trimming or case folding is applied. The catalog guarantees unique
    /// slugs; should a source hold duplicates anyway, the first one in
    /// catalog order wins.
    pub fn resolve(&self, slug: &str) -> Result<&'a ServiceRecord, RecordNotFound> {
        match self.services().iter().find(|service| service.slug == *slug) {
            Some(service) => Ok(service),
            None => {
                tracing::debug!(slug, "no service matches slug");
                Err(RecordNotFound::new(slug))
            }
        }
    }

    /// Every slug in catalog order; each one resolves via [`Self::resolve`].
    pub fn enumerate_slugs(&self) -> Vec<&'a Slug> {
        self.services().iter().map(|service| &service.slug).collect()
    }

    /// Services other than `slug`, in catalog order.
    ///
    /// A slug that matches nothing excludes nothing, so the full list comes
    /// back.
    pub fn related_services(&self, slug: &str) -> Vec<&'a ServiceRecord> {
        self.services()
            .iter()
            .filter(|service| service.slug != *slug)
            .collect()
    }

    /// One parameter set per service page to pre-generate.
    pub fn static_params(&self) -> Vec<RouteParams> {
        self.enumerate_slugs()
            .into_iter()
            .map(|slug| RouteParams {
                slug: slug.0.clone(),
            })
            .collect()
    }

    /// Page metadata for `slug`, with a fixed title when nothing matches.
    pub fn metadata(&self, slug: &str) -> PageMetadata {
        match self.resolve(slug) {
            Ok(service) => PageMetadata {
                title: service.title.clone(),
                description: Some(service.short_description.clone()),
            },
            Err(_) => PageMetadata {
                title: NOT_FOUND_TITLE.to_string(),
                description: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ServiceId;
    use crate::icons::IconName;

    fn service(id: &str, slug: &str) -> ServiceRecord {
        ServiceRecord {
            id: ServiceId(id.to_string()),
            slug: Slug(slug.to_string()),
            title: format!("{id} title"),
            short_description: format!("{id} short"),
            long_description: String::new(),
            icon: IconName::Shield,
            image: String::new(),
            features: Vec::new(),
            benefits: Vec::new(),
        }
    }

    fn sample() -> Vec<ServiceRecord> {
        vec![
            service("peo", "peo"),
            service("aso", "aso"),
            service("benefits", "benefits"),
        ]
    }

    #[test]
    fn resolve_is_exact_and_case_sensitive() {
        let services = sample();
        let resolver = PageResolver::new(&services);
        assert_eq!(resolver.resolve("aso").unwrap().id.0, "aso");
        for miss in ["ASO", " aso", "as", "aso/", "", "payroll"] {
            assert_eq!(resolver.resolve(miss), Err(RecordNotFound::new(miss)));
        }
    }

    #[test]
    fn duplicate_slugs_resolve_to_first_declared() {
        let services = vec![service("first", "dup"), service("second", "dup")];
        let resolver = PageResolver::new(services.as_slice());
        assert_eq!(resolver.resolve("dup").unwrap().id.0, "first");
    }

    #[test]
    fn related_excludes_only_the_requested_slug() {
        let services = sample();
        let resolver = PageResolver::new(&services);
        let related: Vec<_> = resolver
            .related_services("aso")
            .iter()
            .map(|s| s.slug.as_str())
            .collect();
        assert_eq!(related, ["peo", "benefits"]);

        assert_eq!(resolver.related_services("unknown-slug").len(), 3);
    }

    #[test]
    fn static_params_follow_slug_order() {
        let services = sample();
        let resolver = PageResolver::new(&services);
        let params: Vec<_> = resolver.static_params().into_iter().map(|p| p.slug).collect();
        assert_eq!(params, ["peo", "aso", "benefits"]);
        let json = serde_json::to_value(RouteParams { slug: "peo".into() }).unwrap();
        assert_eq!(json, serde_json::json!({"slug": "peo"}));
    }

    #[test]
    fn metadata_falls_back_for_missing_slug() {
        let services = sample();
        let resolver = PageResolver::new(&services);
        assert_eq!(
            resolver.metadata("peo"),
            PageMetadata {
                title: "peo title".to_string(),
                description: Some("peo short".to_string()),
            }
        );
        let missing = resolver.metadata("payroll");
        assert_eq!(missing.title, NOT_FOUND_TITLE);
        assert!(missing.description.is_none());
    }
}
