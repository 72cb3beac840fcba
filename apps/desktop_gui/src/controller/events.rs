//! Backend-to-UI events and error modeling for the desktop controller.

use shared::domain::NewsItem;

pub enum UiEvent {
    Info(String),
    Error(UiError),
    BriefLoaded {
        request_id: u64,
        items: Vec<NewsItem>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Runtime,
    Queue,
    Navigation,
    Unknown,
}

impl UiErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Runtime => "Runtime",
            Self::Queue => "Command queue",
            Self::Navigation => "Navigation",
            Self::Unknown => "Unexpected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Dispatch,
    Navigation,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("queue")
            || message_lower.contains("disconnected")
            || message_lower.contains("full")
        {
            UiErrorCategory::Queue
        } else if message_lower.contains("startup")
            || message_lower.contains("runtime")
            || message_lower.contains("worker")
        {
            UiErrorCategory::Runtime
        } else if message_lower.contains("logged out")
            || message_lower.contains("navigation target")
        {
            UiErrorCategory::Navigation
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// One-line form for the status line.
    pub fn status_line(&self) -> String {
        format!("{} error: {}", self.category.label(), self.message)
    }
}
