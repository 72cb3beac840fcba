//! Backend commands queued from UI to backend worker.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    FetchBrief { request_id: u64, today: NaiveDate },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchBrief { .. } => "fetch_brief",
        }
    }
}
