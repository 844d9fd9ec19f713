//! Clock port - Source of the current instant

use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;

/// Port for reading wall-clock time
#[cfg_attr(test, automock)]
pub trait ClockPort: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}
