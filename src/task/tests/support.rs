//! Shared helpers for task engine tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// An arbitrary stable base instant for deterministic timestamps.
pub(crate) const BASE_MS: i64 = 1_700_000_000_000;
/// One hour in milliseconds.
pub(crate) const HOUR_MS: i64 = 3_600_000;
/// One day in milliseconds.
pub(crate) const DAY_MS: i64 = 86_400_000;

/// A clock pinned to a settable instant.
///
/// Letting tests advance the instant between operations makes creation
/// and mutation timestamps fully deterministic.
#[derive(Debug)]
pub(crate) struct FixedClock {
    now_ms: AtomicI64,
}

impl FixedClock {
    pub(crate) fn at(now_ms: i64) -> Self {
        Self {
            now_ms: AtomicI64::new(now_ms),
        }
    }

    pub(crate) fn set(&self, now_ms: i64) {
        self.now_ms.store(now_ms, Ordering::Relaxed);
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.now_ms.load(Ordering::Relaxed))
            .single()
            .expect("valid fixed timestamp")
    }
}
