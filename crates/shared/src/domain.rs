use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Login,
    Menu,
    Brief,
}

impl Screen {
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Menu => "menu",
            Self::Brief => "brief",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

/// One entry of the daily brief. `time` is a free-form label such as "3h ago".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub summary: String,
    pub source: String,
    pub time: String,
}

impl NewsItem {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        source: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            source: source.into(),
            time: time.into(),
        }
    }
}

/// Heading shown above the brief, e.g. `Fri Oct 16 2026`.
pub fn brief_heading(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Date phrase used when asking the model for today's items.
pub fn prompt_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
