// news.rs
use chrono::NaiveDateTime;

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsCategory {
    News,
    Sentiment,
    Filing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewsItem {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub sentiment: Sentiment,
    pub source: &'static str,
    /// Local publication time, `YYYY-MM-DDTHH:MM`.
    pub time: &'static str,
    pub category: NewsCategory,
}

impl Sentiment {
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl NewsCategory {
    pub fn label(self) -> &'static str {
        match self {
            NewsCategory::News => "Market Update",
            NewsCategory::Sentiment => "Sentiment Insight",
            NewsCategory::Filing => "Regulatory Filing",
        }
    }
}

impl NewsItem {
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.time, TIME_FORMAT).ok()
    }

    /// "12 Sep 2024, 07:30", or the raw string if it does not parse.
    pub fn display_time(&self) -> String {
        self.published_at()
            .map(|dt| dt.format("%d %b %Y, %H:%M").to_string())
            .unwrap_or_else(|| self.time.to_string())
    }
}
