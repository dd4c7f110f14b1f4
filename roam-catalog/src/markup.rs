//! HTML for package pages and the destination gallery.
//!
//! All text and attribute values coming from package documents are escaped.
//! Page chrome (navbar, contact block) is supplied by the caller as raw
//! fragments and placed above and below the content.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt::Write;

use crate::gallery::DestinationGallery;
use crate::itinerary::{DaySection, ItinerarySection, PackageView, NO_ITINERARY, NO_PLANS};
use crate::screen::Screen;

/// Display collaborators surrounding the projected content.
#[derive(Debug, Clone, Default)]
pub struct Chrome {
    pub header: String,
    pub footer: String,
}

impl Chrome {
    pub fn new(header: impl Into<String>, footer: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            footer: footer.into(),
        }
    }

    /// Wrap `content` in a full document.
    pub fn page(&self, title: &str, content: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n{}\n{}\n</body>\n</html>\n",
            text(title),
            self.header,
            content,
            self.footer
        )
    }
}

/// Markup for any package screen, including the placeholder states.
pub fn render_screen(screen: &Screen) -> String {
    match screen {
        Screen::Package(view) => render_package(view),
        Screen::Error(_) => format!(
            "<div class=\"error-message\"><p>{}</p></div>",
            text(&screen.message().unwrap_or_default())
        ),
        Screen::Loading | Screen::NotFound => format!(
            "<p class=\"loading-text\">{}</p>",
            text(&screen.message().unwrap_or_default())
        ),
    }
}

pub fn render_package(view: &PackageView) -> String {
    let mut out = String::new();

    let _ = write!(
        out,
        "<div class=\"package-container\">\n<header class=\"hero-header\" style=\"background-image: {}\">\n<div class=\"hero-overlay\"><h1 class=\"hero-title\">{}</h1></div>\n</header>\n",
        attr(&css_url(&view.hero_image)),
        text(&view.title)
    );

    out.push_str("<div class=\"package-content\">\n<h2 class=\"section-title\">Package Overview</h2>\n<div class=\"package-info\">\n");
    for line in &view.overview {
        let _ = writeln!(
            out,
            "<p>{}: <span>{}</span></p>",
            text(&line.label),
            text(&line.value)
        );
    }
    out.push_str("</div>\n<h2 class=\"section-title\">Itinerary</h2>\n<div class=\"itinerary-grid\">\n");

    match &view.itinerary {
        ItinerarySection::Unavailable => {
            let _ = writeln!(out, "<p>{}</p>", NO_ITINERARY);
        }
        ItinerarySection::Plans(plans) => {
            for plan in plans {
                let _ = writeln!(
                    out,
                    "<div class=\"itinerary-day-set\">\n<h3 class=\"itinerary-day-set-title\">{}</h3>",
                    text(&plan.label)
                );
                match &plan.days {
                    DaySection::Unavailable => {
                        let _ = writeln!(out, "<p>{}</p>", NO_PLANS);
                    }
                    DaySection::Days(days) => {
                        for day in days {
                            let _ = writeln!(
                                out,
                                "<div class=\"itinerary-day\">\n<h4 class=\"day-title\">{}</h4>\n<p><strong>Highlights:</strong> {}</p>",
                                text(&day.title),
                                text(&day.highlights)
                            );
                            render_list(&mut out, "activities", "Activities:", &day.activities);
                            render_list(&mut out, "locations", "Locations:", &day.locations);
                            out.push_str("</div>\n");
                        }
                    }
                }
                out.push_str("</div>\n");
            }
        }
    }

    out.push_str("</div>\n</div>\n</div>");
    out
}

/// Quoted CSS `url()` value. Quotes, brackets, backslashes and control
/// characters become CSS hex escapes so the URL cannot close the string.
fn css_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len() + 7);
    out.push_str("url('");
    for c in url.chars() {
        match c {
            '\'' | '"' | '\\' | '(' | ')' | '<' | '>' => {
                let _ = write!(out, "\\{:x} ", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\{:x} ", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push_str("')");
    out
}

fn render_list(out: &mut String, class: &str, heading: &str, items: &[String]) {
    let _ = write!(
        out,
        "<div class=\"{class}-section\">\n<h5>{heading}</h5>\n<ul class=\"{class}-list\">\n"
    );
    for item in items {
        let _ = writeln!(out, "<li>{}</li>", text(item));
    }
    out.push_str("</ul>\n</div>\n");
}

pub fn render_gallery(gallery: &DestinationGallery) -> String {
    let mut out = format!(
        "<div class=\"popular\">\n<div class=\"popular-heading\">{}</div>\n<div class=\"popular-cards-container\">\n",
        text(gallery.heading())
    );
    for place in gallery.destinations() {
        let _ = writeln!(
            out,
            "<div class=\"popular-card\">\n<div class=\"popular-card-image\" style=\"background-image: {}\">\n<div class=\"popular-card-title\">{}</div>\n</div>\n<div class=\"popular-card-content\"><p class=\"popular-card-description\">{}</p></div>\n</div>",
            attr(&css_url(&place.image)),
            text(&place.title),
            text(&place.description)
        );
    }
    out.push_str("</div>\n</div>");
    out
}
