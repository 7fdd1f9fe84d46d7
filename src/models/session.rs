use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The console only distinguishes finished sessions from everything else.
/// The backend reports finer-grained states ("active", "interrupted");
/// all of them fold into `InProgress`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    Completed,
    #[serde(other)]
    InProgress,
}

impl SessionStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, SessionStatus::Completed)
    }
}

/// One cleaning run. Immutable once completed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CleaningSession {
    pub id: String,
    pub start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Minutes of runtime, reported by the appliance.
    #[serde(default)]
    pub duration: u32,
    pub status: SessionStatus,
    pub items_detected: u32,
    pub valuables_saved: u32,
    pub trash_collected: u32,
    pub area_cleaned_sq_ft: f64,
}
