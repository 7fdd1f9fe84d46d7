use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Aggregate counters computed remotely. The console treats these as an
/// opaque snapshot and never derives them locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_items_detected: u64,
    pub valuables_saved: u64,
    pub total_sessions: u64,
    pub accuracy_rate: f64,
    pub avg_confidence: f64,
    pub top_categories: Vec<CategoryCount>,
}
