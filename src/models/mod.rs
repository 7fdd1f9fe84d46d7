pub mod item;
pub mod notification;
pub mod session;
pub mod stats;
pub mod vacuum;

pub use item::{CorrectedLabel, DetectedItem, FeedbackVote, ItemChamber, ItemType};
pub use notification::{Notification, NotificationKind};
pub use session::{CleaningSession, SessionStatus};
pub use stats::{CategoryCount, Stats};
pub use vacuum::{ControlAction, VacuumMode, VacuumStatus};
