//! Detected-item models.
//!
//! Items are minted by the detection pipeline on the appliance; the console
//! only ever reads them back and attaches human feedback.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Valuable,
    Trash,
    Unknown,
    #[serde(other)]
    Other,
}

/// Which physical bin the item was routed to. `Pending` items sit in the
/// review chamber awaiting a classification the appliance trusts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemChamber {
    Valuables,
    Trash,
    Pending,
    #[serde(other)]
    Other,
}

/// A human verdict on one classification result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackVote {
    Correct,
    Incorrect,
}

/// The label implied by an "incorrect" vote. Deliberately binary: the
/// backend reclassifies the item as one of the two bins, never back to
/// unknown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CorrectedLabel {
    Valuable,
    Trash,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetectedItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub category: String,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    pub location: String,
    pub chamber: ItemChamber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_feedback: Option<FeedbackVote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrected_type: Option<CorrectedLabel>,
}

impl DetectedItem {
    /// Whether the feedback actions should be offered for this item.
    /// Feedback is write-once: the console never resubmits or clears it.
    pub fn accepts_feedback(&self) -> bool {
        self.user_feedback.is_none()
    }
}
