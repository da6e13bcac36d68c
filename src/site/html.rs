//! HTML scaffolding shared by every page: escaping, `<head>`, footer.

use crate::catalog::{FooterLinkColumn, SiteSettings};
use crate::resolver::PageMetadata;

/// Escape text for element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Wrap a page body in the document shell.
pub(crate) fn document(
    site: &SiteSettings,
    metadata: &PageMetadata,
    footer_links: &[FooterLinkColumn],
    body: &str,
) -> String {
    let title = if metadata.title == site.title {
        escape(&site.title)
    } else {
        format!("{} | {}", escape(&metadata.title), escape(&site.title))
    };
    let mut head = format!("<meta charset=\"utf-8\">\n<title>{title}</title>\n");
    if let Some(description) = &metadata.description {
        head.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape(description)
        ));
    }
    head.push_str(&analytics_block(site));

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n{head}</head>\n<body>\n<main>\n{body}</main>\n{}</body>\n</html>\n",
        footer(site, footer_links)
    )
}

// The config is JSON inside <script>; only "</" can terminate the element.
fn analytics_block(site: &SiteSettings) -> String {
    match &site.analytics {
        Some(config) => format!(
            "<script type=\"application/json\" id=\"analytics-config\">{}</script>\n",
            config.to_string().replace("</", "<\\/")
        ),
        None => String::new(),
    }
}

fn footer(site: &SiteSettings, columns: &[FooterLinkColumn]) -> String {
    let mut out = String::from("<footer>\n<section class=\"footer-brand\">\n");
    out.push_str(&format!("<p>{}</p>\n<ul class=\"contact\">\n", escape(&site.description)));
    out.push_str(&format!(
        "<li><a href=\"tel:{}\">{}</a></li>\n",
        escape(&site.phone.replace('-', "")),
        escape(&site.phone)
    ));
    out.push_str(&format!(
        "<li><a href=\"mailto:{0}\">{0}</a></li>\n",
        escape(&site.email)
    ));
    out.push_str(&format!("<li>{}</li>\n</ul>\n</section>\n", escape(&site.location)));

    for column in columns {
        out.push_str(&format!(
            "<nav aria-label=\"{0}\">\n<h4>{0}</h4>\n<ul>\n",
            escape(&column.column_name)
        ));
        for link in &column.links {
            out.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                escape(&link.href),
                escape(&link.title)
            ));
        }
        out.push_str("</ul>\n</nav>\n");
    }

    out.push_str(&format!(
        "<p class=\"copyright\">&copy; {}. All rights reserved.</p>\n",
        escape(&site.title)
    ));
    if let Some(linkedin) = &site.linkedin {
        out.push_str(&format!(
            "<a href=\"{}\" rel=\"noopener noreferrer\" aria-label=\"LinkedIn\">Follow us on LinkedIn</a>\n",
            escape(linkedin)
        ));
    }
    out.push_str("</footer>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FooterLink;
    use serde_json::json;

    fn settings() -> SiteSettings {
        SiteSettings {
            title: "Congruity HR".to_string(),
            description: "HR & payroll".to_string(),
            phone: "844-247-4100".to_string(),
            email: "info@example.com".to_string(),
            location: "NC".to_string(),
            linkedin: None,
            analytics: None,
        }
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn document_carries_metadata_and_footer() {
        let metadata = PageMetadata {
            title: "PEO".to_string(),
            description: Some("Co-employment".to_string()),
        };
        let columns = vec![FooterLinkColumn {
            column_name: "Company".to_string(),
            links: vec![FooterLink {
                title: "About".to_string(),
                href: "/about".to_string(),
            }],
        }];
        let html = document(&settings(), &metadata, &columns, "<h1>PEO</h1>\n");
        assert!(html.contains("<title>PEO | Congruity HR</title>"));
        assert!(html.contains("content=\"Co-employment\""));
        assert!(html.contains("<h4>Company</h4>"));
        assert!(html.contains("<a href=\"/about\">About</a>"));
        assert!(html.contains("href=\"tel:8442474100\""));
        assert!(html.contains("HR &amp; payroll"));
        assert!(!html.contains("LinkedIn"));
        assert!(!html.contains("analytics-config"));
    }

    #[test]
    fn analytics_config_cannot_close_script() {
        let mut site = settings();
        site.analytics = Some(json!({"domain": "</script><b>"}));
        site.linkedin = Some("https://linkedin.example".to_string());
        let metadata = PageMetadata {
            title: site.title.clone(),
            description: None,
        };
        let html = document(&site, &metadata, &[], "");
        assert!(html.contains("<title>Congruity HR</title>"));
        assert!(html.contains("<\\/script><b>"));
        assert_eq!(html.matches("</script>").count(), 1);
        assert!(html.contains("Follow us on LinkedIn"));
    }
}
