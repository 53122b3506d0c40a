// src/infrastructure/time.rs
use crate::application::ports::time::Clock;
use chrono::{DateTime, SubsecRound, Utc};

/// Postgres stores `TIMESTAMPTZ` with microsecond precision.
const STORED_SUBSEC_DIGITS: u16 = 6;

/// Wall clock truncated to what the store can hold, so a timestamp returned
/// from a write equals the one read back later.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(STORED_SUBSEC_DIGITS)
    }
}
