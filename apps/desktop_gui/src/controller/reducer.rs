//! Application model and the reducer-like transitions the UI drives it with.

use chrono::NaiveDate;
use client_core::Session;
use shared::domain::{NewsItem, Screen};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Everything rendering code may ask for. Session changes only happen here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Login { email: String },
    Logout,
    OpenBrief,
    BackToMenu,
}

/// State of the brief screen for the current visit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BriefView {
    date: Option<NaiveDate>,
    items: Vec<NewsItem>,
    pending_request: Option<u64>,
}

impl BriefView {
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.pending_request.is_some()
    }
}

pub struct AppModel {
    session: Session,
    brief: BriefView,
    next_request_id: u64,
    status: String,
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            brief: BriefView::default(),
            next_request_id: 0,
            status: "Not logged in".to_string(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn brief(&self) -> &BriefView {
        &self.brief
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut String {
        &mut self.status
    }

    /// Applies a user action. Entering the brief screen yields the fetch
    /// command the caller must queue.
    pub fn apply_action(&mut self, action: UiAction, today: NaiveDate) -> Option<BackendCommand> {
        match action {
            UiAction::Login { email } => {
                self.session.login(&email);
                self.brief = BriefView::default();
                self.status = match self.session.user() {
                    Some(user) => format!("Signed in as {}", user.name),
                    None => "Signed in".to_string(),
                };
                None
            }
            UiAction::Logout => {
                self.session.logout();
                self.brief = BriefView::default();
                self.status = "Signed out".to_string();
                None
            }
            UiAction::OpenBrief => {
                if let Err(err) = self.session.navigate(Screen::Brief) {
                    self.report_navigation_error(err);
                    return None;
                }
                self.next_request_id += 1;
                let request_id = self.next_request_id;
                self.brief = BriefView {
                    date: Some(today),
                    items: Vec::new(),
                    pending_request: Some(request_id),
                };
                Some(BackendCommand::FetchBrief { request_id, today })
            }
            UiAction::BackToMenu => {
                if let Err(err) = self.session.navigate(Screen::Menu) {
                    self.report_navigation_error(err);
                    return None;
                }
                self.brief = BriefView::default();
                None
            }
        }
    }

    pub fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => self.status = message,
            UiEvent::Error(err) => {
                tracing::error!(
                    category = ?err.category(),
                    context = ?err.context(),
                    "{}",
                    err.message()
                );
                self.status = err.status_line();
            }
            UiEvent::BriefLoaded { request_id, items } => {
                let on_brief = self.session.visible_screen() == Screen::Brief;
                if !on_brief || self.brief.pending_request != Some(request_id) {
                    tracing::debug!(
                        request_id,
                        pending = ?self.brief.pending_request,
                        "discarding stale brief result"
                    );
                    return;
                }
                self.brief.items = items;
                self.brief.pending_request = None;
            }
        }
    }

    fn report_navigation_error(&mut self, err: client_core::NavigationError) {
        let err = UiError::from_message(UiErrorContext::Navigation, err.to_string());
        tracing::warn!("{}", err.message());
        self.status = err.status_line();
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
