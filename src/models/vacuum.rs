use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating mode as reported by the appliance. The backend is free to grow
/// new modes; anything unrecognized decodes to `Other` so a status read
/// never fails on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VacuumMode {
    Cleaning,
    Idle,
    Returning,
    Charging,
    #[serde(other)]
    Other,
}

/// Live appliance state. `mode` and `is_active` are reported independently
/// by the backend; the console does not enforce any correlation between
/// them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VacuumStatus {
    pub id: String,
    pub is_active: bool,
    pub battery: u8,
    pub location: String,
    pub mode: VacuumMode,
    pub valuables_bin_count: u32,
    pub dust_bin_level: u8,
    pub last_cleaned: DateTime<Utc>,
    pub total_area_cleaned: f64,
}

/// Control verbs accepted by the appliance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ControlAction {
    Start,
    Stop,
    Return,
}

impl ControlAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlAction::Start => "start",
            ControlAction::Stop => "stop",
            ControlAction::Return => "return",
        }
    }
}

impl fmt::Display for ControlAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
