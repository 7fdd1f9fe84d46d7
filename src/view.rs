//! Render-time derivations.
//!
//! Pure and total: remote data is not schema-validated on the way in, so
//! every function here has an explicit answer for unmapped input instead
//! of a failure path.

use chrono::{DateTime, Utc};

use crate::models::{ItemType, VacuumMode};

/// Style key for an item's classification badge. Unrecognized types take
/// the trash style.
pub fn type_badge(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::Valuable => "valuable",
        ItemType::Trash => "trash",
        ItemType::Unknown => "unknown",
        ItemType::Other => "trash",
    }
}

/// Icon key for the appliance's mode indicator. Unrecognized or absent
/// modes take the idle icon.
pub fn mode_icon(mode: Option<VacuumMode>) -> &'static str {
    match mode {
        Some(VacuumMode::Cleaning) => "play",
        Some(VacuumMode::Idle) => "pause",
        Some(VacuumMode::Returning) => "home",
        Some(VacuumMode::Charging) => "battery",
        Some(VacuumMode::Other) | None => "pause",
    }
}

/// Confidence as a whole percentage for "N% confident" labels.
pub fn confidence_percent(confidence: f64) -> u32 {
    (confidence * 100.0).round() as u32
}

/// Relative-age label for feed timestamps. Buckets are floor-divided, so
/// each boundary belongs to the larger unit: exactly one hour is
/// "1h ago", never "60m ago". Future timestamps (clock skew) read as
/// "Just now".
pub fn format_relative_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age_ms = (now - timestamp).num_milliseconds();
    let minutes = age_ms / 60_000;
    let hours = age_ms / 3_600_000;
    let days = age_ms / 86_400_000;

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{days}d ago")
    }
}
