use serde::{Deserialize, Serialize};
use std::fmt;

/// One slide of the presentation, tagged on the wire by its `type` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SlideData {
    Intro(IntroSlide),
    StatsOverview(StatsOverviewSlide),
    TopPrompts(TopPromptsSlide),
    Quotes(QuotesSlide),
    Summary(SummarySlide),
}

/// Variant tag without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideKind {
    Intro,
    StatsOverview,
    TopPrompts,
    Quotes,
    Summary,
}

impl SlideData {
    pub fn kind(&self) -> SlideKind {
        match self {
            SlideData::Intro(_) => SlideKind::Intro,
            SlideData::StatsOverview(_) => SlideKind::StatsOverview,
            SlideData::TopPrompts(_) => SlideKind::TopPrompts,
            SlideData::Quotes(_) => SlideKind::Quotes,
            SlideData::Summary(_) => SlideKind::Summary,
        }
    }
}

impl SlideKind {
    /// Wire name, identical to the `type` tag
    pub fn as_str(self) -> &'static str {
        match self {
            SlideKind::Intro => "intro",
            SlideKind::StatsOverview => "stats-overview",
            SlideKind::TopPrompts => "top-prompts",
            SlideKind::Quotes => "quotes",
            SlideKind::Summary => "summary",
        }
    }
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroSlide {
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsOverviewSlide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub stats: Vec<StatItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatItem {
    pub label: String,
    pub value: StatValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// A stat is either a number or a free-form value such as "10 PM"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{}", n),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPromptsSlide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub prompts: Vec<Prompt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotesSlide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub quotes: Vec<Quote>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarySlide {
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
