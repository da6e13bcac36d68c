//! Page bodies. Each function returns the markup placed inside `<main>`.

use super::html::escape;
use crate::catalog::{BoardMember, LeadershipMember, ServiceRecord};
use crate::icons::icon_for;

// Card accents rotate through the palette in catalog order.
const CARD_ACCENTS: [&str; 3] = ["primary", "success", "accent"];

const CHECK_ICON: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"16\" height=\"16\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" aria-hidden=\"true\"><path d=\"M20 6 9 17l-5-5\"/></svg>";

pub(crate) fn service_href(service: &ServiceRecord) -> String {
    format!("/services/{}", service.slug)
}

fn service_icon(service: &ServiceRecord, class: &str) -> String {
    icon_for(service.icon.as_str()).to_svg(class)
}

fn cta(title: &str, description: &str) -> String {
    format!(
        "<section class=\"cta\">\n<h2>{}</h2>\n<p>{}</p>\n<a class=\"btn\" href=\"/book-demo\">Book a Demo</a>\n<a class=\"btn btn-outline\" href=\"/contact\">Contact Us</a>\n</section>\n",
        escape(title),
        escape(description)
    )
}

pub(crate) fn home(services: &[ServiceRecord]) -> String {
    let mut out = String::from(
        "<section class=\"hero\">\n<h1>Your complete HR partner.</h1>\n<p>From payroll and benefits to risk management and compliance, Congruity HR delivers the tools and expertise to help your business thrive and your employees succeed.</p>\n<a class=\"btn\" href=\"/book-demo\">Get started today</a>\n</section>\n",
    );
    out.push_str("<section class=\"services-overview\">\n<h2>What we do</h2>\n<ul>\n");
    for service in services {
        out.push_str(&format!(
            "<li><a href=\"{}\">{}{}</a></li>\n",
            service_href(service),
            service_icon(service, "icon"),
            escape(&service.title)
        ));
    }
    out.push_str("</ul>\n</section>\n");
    out
}

pub(crate) fn services_index(services: &[ServiceRecord]) -> String {
    let mut out = String::from(
        "<section class=\"hero\">\n<span class=\"badge\">Our Services</span>\n<h1>Comprehensive HR Solutions for Your Business</h1>\n</section>\n<section class=\"services-grid\">\n",
    );
    for (index, service) in services.iter().enumerate() {
        let accent = CARD_ACCENTS[index % CARD_ACCENTS.len()];
        out.push_str(&format!(
            "<a class=\"card card-{accent}\" href=\"{}\">\n{}\n<h2>{}</h2>\n<p>{}</p>\n<span>Learn more</span>\n</a>\n",
            service_href(service),
            service_icon(service, "icon"),
            escape(&service.title),
            escape(&service.short_description)
        ));
    }
    out.push_str("</section>\n");
    out.push_str(&cta(
        "Not sure which service is right for you?",
        "Our experts can help you find the perfect HR solution for your business needs.",
    ));
    out
}

pub(crate) fn service_detail(service: &ServiceRecord, related: &[&ServiceRecord]) -> String {
    let mut out = format!(
        "<section class=\"hero\" data-image=\"{}\">\n<a href=\"/services\">Back to Services</a>\n{}\n<h1>{}</h1>\n<p>{}</p>\n</section>\n",
        escape(&service.image),
        service_icon(service, "icon icon-lg"),
        escape(&service.title),
        escape(&service.long_description)
    );

    out.push_str("<section class=\"features\">\n<h2>What We Offer</h2>\n");
    for feature in &service.features {
        out.push_str(&format!(
            "<article>\n<h3>{}</h3>\n<p>{}</p>\n</article>\n",
            escape(&feature.title),
            escape(&feature.description)
        ));
    }
    out.push_str("</section>\n");

    out.push_str("<section class=\"benefits\">\n<h2>Key Benefits</h2>\n<ul>\n");
    for benefit in &service.benefits {
        out.push_str(&format!("<li>{CHECK_ICON}{}</li>\n", escape(benefit)));
    }
    out.push_str("</ul>\n</section>\n");

    out.push_str("<aside class=\"other-services\">\n<h3>Other Services</h3>\n<ul>\n");
    for other in related {
        out.push_str(&format!(
            "<li><a href=\"{}\">{}{}</a></li>\n",
            service_href(other),
            service_icon(other, "icon icon-sm"),
            escape(&other.title)
        ));
    }
    out.push_str("</ul>\n</aside>\n");

    out.push_str(&cta(
        &format!("Ready to transform your HR with {}?", service.title),
        "Take the first step toward building your dream team with Congruity HR.",
    ));
    out
}

pub(crate) fn team(leadership: &[LeadershipMember], board: &[BoardMember]) -> String {
    let mut out = String::from(
        "<section class=\"hero\">\n<a href=\"/about\">Back to About</a>\n<span class=\"badge\">Our Team</span>\n<h1>Meet the Leadership</h1>\n</section>\n",
    );

    out.push_str("<section class=\"leadership\">\n<h2>Leadership Team</h2>\n");
    for member in leadership {
        out.push_str(&format!(
            "<article>\n<img src=\"{}\" alt=\"{}\">\n<h3>{}</h3>\n<p class=\"role\">{}</p>\n",
            escape(&member.image),
            escape(&member.name),
            escape(&member.name),
            escape(&member.title)
        ));
        if let Some(credentials) = &member.credentials {
            out.push_str(&format!("<p class=\"credentials\">{}</p>\n", escape(credentials)));
        }
        out.push_str(&format!("<p>{}</p>\n</article>\n", escape(&member.bio)));
    }
    out.push_str("</section>\n");

    if !board.is_empty() {
        out.push_str("<section class=\"board\">\n<h2>Board of Directors</h2>\n");
        for member in board {
            out.push_str(&format!(
                "<article>\n<span class=\"avatar\">{}</span>\n<h3>{}</h3>\n<p class=\"role\">{}</p>\n",
                escape(&member.initials()),
                escape(&member.name),
                escape(&member.title)
            ));
            if let Some(company) = &member.company {
                out.push_str(&format!("<p class=\"company\">{}</p>\n", escape(company)));
            }
            out.push_str("</article>\n");
        }
        out.push_str("</section>\n");
    }

    out.push_str(&cta(
        "Ready to work with our team?",
        "Talk with the people who will support your business every day.",
    ));
    out
}

pub(crate) fn not_found() -> String {
    String::from(
        "<section class=\"not-found\">\n<h1>Page not found</h1>\n<p>The page you are looking for does not exist.</p>\n<a href=\"/\">Back to home</a>\n</section>\n",
    )
}
