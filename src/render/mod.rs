//! Slide dispatcher.
//!
//! Every [`SlideData`] variant has exactly one view. The `match` in
//! [`render_slide`] has no wildcard arm, so a new variant does not compile
//! until it has a view here.

mod views;

use crate::slides::{SlideData, SlideKind};

/// HTML fragment for one slide, tagged with the variant that produced it
#[derive(Debug, Clone)]
pub struct RenderedSlide {
    pub kind: SlideKind,
    pub html: String,
}

/// Render a slide with its variant-specific view
pub fn render_slide(slide: &SlideData) -> RenderedSlide {
    let year = current_year();
    let html = match slide {
        SlideData::Intro(data) => views::intro(data, year),
        SlideData::StatsOverview(data) => views::stats_overview(data),
        SlideData::TopPrompts(data) => views::top_prompts(data),
        SlideData::Quotes(data) => views::quotes(data),
        SlideData::Summary(data) => views::summary(data, year),
    };

    RenderedSlide {
        kind: slide.kind(),
        html,
    }
}

fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap slide content in the shared container markup
fn container(class: &str, body: &str) -> String {
    format!(r#"<div class="slide-container {}">{}</div>"#, class, body)
}
