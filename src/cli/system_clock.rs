use chrono::{DateTime, Utc};

use nestora_core::Clock;

/// Wall clock used to stamp recorded payments.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
