use std::{sync::Arc, time::Duration};

use chrono::NaiveDate;
use shared::domain::{prompt_date, NewsItem};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::{error::BriefError, extract::extract_json_array, BriefSource};

pub const DEFAULT_BRIEF_TIMEOUT: Duration = Duration::from_secs(20);
pub const BRIEF_ITEM_COUNT: usize = 5;

/// The single item shown whenever the live brief cannot be loaded.
pub fn fallback_brief() -> Vec<NewsItem> {
    vec![NewsItem::new(
        "Tesla cuts Model Y price",
        "Tesla lowers pricing amid competition",
        "EV Insider",
        "3h ago",
    )]
}

pub fn brief_prompt(today: NaiveDate) -> String {
    format!(
        "Generate {BRIEF_ITEM_COUNT} automotive news items for {} as a JSON array of objects \
         with the fields title, summary, source and time.",
        prompt_date(today)
    )
}

/// Parses the first bracketed array in `text` into news items.
pub fn parse_news_items(text: &str) -> Result<Vec<NewsItem>, BriefError> {
    let array = extract_json_array(text).ok_or(BriefError::MissingArray)?;
    let items: Vec<NewsItem> = serde_json::from_str(array)?;
    if items.is_empty() {
        return Err(BriefError::NoItems);
    }
    Ok(items)
}

/// Fetches the daily brief and publishes a loading flag while a request is
/// in flight. Callers must not run two fetches on one fetcher concurrently.
pub struct BriefFetcher {
    source: Arc<dyn BriefSource>,
    timeout: Duration,
    loading: watch::Sender<bool>,
}

impl BriefFetcher {
    pub fn new(source: Arc<dyn BriefSource>) -> Self {
        let (loading, _) = watch::channel(false);
        Self {
            source,
            timeout: DEFAULT_BRIEF_TIMEOUT,
            loading,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Never fails: any error is logged and replaced by [`fallback_brief`].
    pub async fn fetch_brief(&self, today: NaiveDate) -> Vec<NewsItem> {
        let _loading = LoadingGuard::engage(&self.loading);

        match self.try_fetch(today).await {
            Ok(items) => {
                info!(count = items.len(), %today, "brief: loaded live items");
                items
            }
            Err(err) => {
                warn!(error = %err, %today, "brief: unavailable, showing fallback item");
                fallback_brief()
            }
        }
    }

    async fn try_fetch(&self, today: NaiveDate) -> Result<Vec<NewsItem>, BriefError> {
        let prompt = brief_prompt(today);
        let text = tokio::time::timeout(self.timeout, self.source.generate_text(&prompt))
            .await
            .map_err(|_| BriefError::Timeout(self.timeout))??;
        parse_news_items(&text)
    }
}

/// Holds the loading flag up until dropped, including when the fetch future
/// itself is dropped mid-request.
struct LoadingGuard<'a> {
    flag: &'a watch::Sender<bool>,
}

impl<'a> LoadingGuard<'a> {
    fn engage(flag: &'a watch::Sender<bool>) -> Self {
        flag.send_replace(true);
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.send_replace(false);
    }
}

#[cfg(test)]
#[path = "tests/brief_tests.rs"]
mod tests;
