//! Clock port

use chrono::{DateTime, Utc};

/// Source of the time stamped on endpoint history entries.
pub trait Clock: Send + Sync {
    /// Current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
