use super::{container, escape};
use crate::slides::types::{
    IntroSlide, QuotesSlide, StatsOverviewSlide, SummarySlide, TopPromptsSlide,
};
use std::fmt::Write;

const STAT_ACCENTS: [&str; 6] = [
    "var(--color-primary)",
    "var(--color-accent-purple)",
    "var(--color-accent-pink)",
    "var(--color-accent-blue)",
    "var(--color-accent-teal)",
    "var(--color-accent-orange)",
];

const PROMPT_ACCENTS: [&str; 3] = [
    "var(--color-primary)",
    "var(--color-accent-purple)",
    "var(--color-accent-pink)",
];

const DECORATION: &str = r#"<div class="decor"></div><div class="decor"></div><div class="decor"></div>"#;

pub(super) fn intro(data: &IntroSlide, current_year: i32) -> String {
    let year = data.year.unwrap_or(current_year);
    let tagline = data.tagline.as_deref().unwrap_or("Your Year in Music");

    let body = format!(
        r#"<div class="content">
  <div class="badge"><span class="badge-text">{year}</span></div>
  <h1 class="title">{name}&#39;s <span class="highlight">Wrapped</span></h1>
  <p class="tagline">{tagline}</p>
  <div class="decorative-elements">{decor}</div>
</div>
<div class="footer"><p class="footer-text">Swipe to explore your musical journey</p></div>"#,
        year = year,
        name = escape(&data.user_name),
        tagline = escape(tagline),
        decor = DECORATION,
    );

    container("intro-slide", &body)
}

pub(super) fn stats_overview(data: &StatsOverviewSlide) -> String {
    let title = data.title.as_deref().unwrap_or("Your Year by Numbers");

    let mut cards = String::new();
    for (index, stat) in data.stats.iter().enumerate() {
        let unit = match stat.unit.as_deref() {
            Some(unit) if !unit.is_empty() => {
                format!(r#"<span class="unit">{}</span>"#, escape(unit))
            }
            _ => String::new(),
        };
        let _ = write!(
            cards,
            r#"<div class="stat-card" style="--accent-color: {accent}"><div class="stat-value">{value}{unit}</div><div class="stat-label">{label}</div></div>"#,
            accent = STAT_ACCENTS[index % STAT_ACCENTS.len()],
            value = escape(&stat.value.to_string()),
            unit = unit,
            label = escape(&stat.label),
        );
    }

    let body = format!(
        r#"<div class="header"><h2 class="title">{}</h2></div>
<div class="stats-grid">{}</div>"#,
        escape(title),
        cards
    );

    container("stats-slide", &body)
}

pub(super) fn top_prompts(data: &TopPromptsSlide) -> String {
    let title = data.title.as_deref().unwrap_or("Top Questions");

    let mut items = String::new();
    for (index, prompt) in data.prompts.iter().enumerate() {
        let _ = write!(
            items,
            r#"<div class="prompt-item" style="--prompt-color: {accent}"><div class="prompt-number">{number}</div><div class="prompt-content"><h3 class="prompt-question">{question}</h3><p class="prompt-answer">{answer}</p></div></div>"#,
            accent = PROMPT_ACCENTS[index % PROMPT_ACCENTS.len()],
            number = index + 1,
            question = escape(&prompt.question),
            answer = escape(&prompt.answer),
        );
    }

    let body = format!(
        r#"<div class="header"><h2 class="title">{}</h2><p class="subtitle">How you answered defines your year</p></div>
<div class="prompts-list">{}</div>"#,
        escape(title),
        items
    );

    container("prompts-slide", &body)
}

pub(super) fn quotes(data: &QuotesSlide) -> String {
    let title = data.title.as_deref().unwrap_or("Words That Moved You");

    let mut cards = String::new();
    for (index, quote) in data.quotes.iter().enumerate() {
        let author = quote
            .author
            .as_deref()
            .map(|author| format!(r#"<p class="quote-author">&mdash; {}</p>"#, escape(author)))
            .unwrap_or_default();
        let _ = write!(
            cards,
            r#"<div class="quote-card" style="--gradient-seed: {seed}deg"><span class="quote-mark">&ldquo;</span><p class="quote-text">{text}</p>{author}<span class="quote-mark">&rdquo;</span></div>"#,
            seed = index * 60,
            text = escape(&quote.text),
            author = author,
        );
    }

    let body = format!(
        r#"<div class="header"><h2 class="title">{}</h2></div>
<div class="quotes-carousel">{}</div>"#,
        escape(title),
        cards
    );

    container("quotes-slide", &body)
}

pub(super) fn summary(data: &SummarySlide, current_year: i32) -> String {
    let year = data.year.unwrap_or(current_year);
    let message = data
        .message
        .as_deref()
        .unwrap_or("Thank you for an amazing year");

    let mut share = String::new();
    for network in ["X", "Instagram", "Facebook"] {
        let _ = write!(
            share,
            r#"<button class="share-button"><span>Share on</span> {}</button>"#,
            network
        );
    }

    let body = format!(
        r#"<div class="content">
  <div class="decorative-top">{decor}</div>
  <h1 class="title">{name}, your {year} was unforgettable</h1>
  <p class="message">{message}</p>
  <div class="share-section"><p class="share-text">Share your wrapped story</p><div class="share-buttons">{share}</div></div>
  <div class="decorative-bottom">{decor}</div>
</div>"#,
        decor = DECORATION,
        name = escape(&data.user_name),
        year = year,
        message = escape(message),
        share = share,
    );

    container("summary-slide", &body)
}
