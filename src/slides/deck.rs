use crate::error::{AppError, Result};
use crate::slides::types::*;
use std::path::Path;
use std::sync::Arc;

/// Load the deck named in config, or fall back to the built-in demo deck
///
/// The file may be YAML or JSON; it must contain a non-empty list of slides.
///
/// # Errors
///
/// Returns error if the file cannot be read, does not parse, or is empty
pub fn load(path: Option<&Path>) -> Result<Arc<[SlideData]>> {
    let slides = match path {
        Some(path) => {
            let shown = path.display().to_string();
            let raw = std::fs::read_to_string(path).map_err(|source| AppError::DeckIo {
                path: shown.clone(),
                source,
            })?;
            let slides: Vec<SlideData> =
                serde_yaml::from_str(&raw).map_err(|source| AppError::DeckParse {
                    path: shown.clone(),
                    source,
                })?;
            tracing::info!("Loaded {} slides from {}", slides.len(), shown);
            slides
        }
        None => demo_deck(),
    };

    if slides.is_empty() {
        return Err(AppError::EmptyDeck);
    }

    Ok(slides.into())
}

/// Fixed mock recap used when no deck file is configured
pub fn demo_deck() -> Vec<SlideData> {
    vec![
        SlideData::Intro(IntroSlide {
            user_name: "Alex".to_string(),
            year: Some(2024),
            tagline: Some("Your Year in Music".to_string()),
        }),
        SlideData::StatsOverview(StatsOverviewSlide {
            title: Some("Your Year by Numbers".to_string()),
            stats: vec![
                stat("Total Minutes Listened", StatValue::Number(45820u64.into()), Some("min")),
                stat("Top Artists Discovered", StatValue::Number(127u64.into()), None),
                stat("Songs Added to Favorites", StatValue::Number(342u64.into()), None),
                stat("Playlists Created", StatValue::Number(24u64.into()), None),
                stat(
                    "Days You Were Most Active",
                    StatValue::Text("Fridays".to_string()),
                    Some(""),
                ),
                stat(
                    "Peak Listening Hour",
                    StatValue::Text("10 PM".to_string()),
                    Some(""),
                ),
            ],
        }),
        SlideData::TopPrompts(TopPromptsSlide {
            title: Some("Questions That Defined Your Year".to_string()),
            prompts: vec![
                prompt(
                    "What was your favorite moment this year?",
                    "Discovering new music genres and expanding my taste",
                ),
                prompt(
                    "Which artist surprised you the most?",
                    "An indie artist with incredible emotional depth",
                ),
                prompt(
                    "What song captures your 2024?",
                    "A timeless classic that brings back memories",
                ),
            ],
        }),
        SlideData::Quotes(QuotesSlide {
            title: Some("Words That Moved You".to_string()),
            quotes: vec![
                quote(
                    "Music is the universal language of mankind.",
                    "Henry Wadsworth Longfellow",
                ),
                quote("Where words fail, music speaks.", "Hans Christian Andersen"),
                quote(
                    "Music gives a soul to the universe, wings to the mind, flight to the imagination, and life to everything.",
                    "Plato",
                ),
            ],
        }),
        SlideData::Summary(SummarySlide {
            user_name: "Alex".to_string(),
            year: Some(2024),
            message: Some(
                "Thanks for streaming with us. Cheers to another year of great music.".to_string(),
            ),
        }),
    ]
}

fn stat(label: &str, value: StatValue, unit: Option<&str>) -> StatItem {
    StatItem {
        label: label.to_string(),
        value,
        unit: unit.map(str::to_string),
    }
}

fn prompt(question: &str, answer: &str) -> Prompt {
    Prompt {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

fn quote(text: &str, author: &str) -> Quote {
    Quote {
        text: text.to_string(),
        author: Some(author.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        let unique = format!(
            "wrapped-deck-{}-{}-{}",
            std::process::id(),
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos(),
            name
        );
        path.push(unique);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_demo_deck_covers_every_variant_in_order() {
        let kinds: Vec<_> = demo_deck().iter().map(SlideData::kind).collect();
        assert_eq!(
            kinds,
            vec![
                SlideKind::Intro,
                SlideKind::StatsOverview,
                SlideKind::TopPrompts,
                SlideKind::Quotes,
                SlideKind::Summary,
            ]
        );
    }

    #[test]
    fn test_load_without_path_uses_demo_deck() {
        let deck = load(None).unwrap();
        assert_eq!(deck.len(), 5);
    }

    #[test]
    fn test_load_yaml_deck() {
        let path = temp_file(
            "deck.yaml",
            r#"
- type: intro
  userName: Sam
- type: summary
  userName: Sam
  message: See you next year
"#,
        );

        let deck = load(Some(&path)).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck[1].kind(), SlideKind::Summary);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_load_json_deck() {
        let path = temp_file(
            "deck.json",
            r#"[{"type": "quotes", "quotes": [{"text": "Where words fail, music speaks."}]}]"#,
        );

        let deck = load(Some(&path)).unwrap();
        assert_eq!(deck[0].kind(), SlideKind::Quotes);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_empty_deck_is_rejected() {
        let path = temp_file("empty.yaml", "[]");
        assert!(matches!(load(Some(&path)), Err(AppError::EmptyDeck)));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_deck_file() {
        let path = std::env::temp_dir().join("wrapped-deck-does-not-exist.yaml");
        assert!(matches!(load(Some(&path)), Err(AppError::DeckIo { .. })));
    }

    #[test]
    fn test_unknown_slide_type_fails_to_parse() {
        let path = temp_file("bad.yaml", "- type: outro\n  userName: Sam\n");
        assert!(matches!(load(Some(&path)), Err(AppError::DeckParse { .. })));
        let _ = std::fs::remove_file(path);
    }
}
