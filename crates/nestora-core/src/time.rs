use chrono::{DateTime, Utc};

/// Source of the timestamp stamped on recorded payments. Tests pin it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
