use async_trait::async_trait;

pub mod brief;
pub mod error;
pub mod extract;
pub mod gemini;
pub mod session;

pub use brief::{fallback_brief, parse_news_items, BriefFetcher, DEFAULT_BRIEF_TIMEOUT};
pub use error::BriefError;
pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{NavigationError, Session, ADMIN_EMAIL};

/// Remote text generator that answers a single prompt with free text.
#[async_trait]
pub trait BriefSource: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String, BriefError>;
}

#[cfg(test)]
#[path = "tests/mock_gemini.rs"]
mod mock_gemini;
