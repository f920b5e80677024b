//! Wall-clock source for date and time checks.
//!
//! Validation compares against the visitor's local calendar, so the clock
//! hands out naive local timestamps. When a visitor reports their UTC offset
//! the wall time is taken at that offset instead of the server's. Tests pin
//! it with [`FixedClock`].

use std::fmt::Debug;
use std::sync::Mutex;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Browsers report `Date.getTimezoneOffset()` in minutes, positive west of UTC.
/// Real offsets stay within UTC-12..UTC+14.
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

pub trait Clock: Send + Sync + Debug {
    /// Current local wall time.
    fn now(&self) -> NaiveDateTime;

    fn now_utc(&self) -> DateTime<Utc>;

    /// Wall time for a visitor whose browser reported `offset_minutes`.
    /// Without a usable offset this is the server's local time.
    fn now_for(&self, offset_minutes: Option<i32>) -> NaiveDateTime {
        match offset_minutes.and_then(visitor_offset) {
            Some(offset) => self.now_utc().with_timezone(&offset).naive_local(),
            None => self.now(),
        }
    }

    /// Today's date in local time.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }

    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

fn visitor_offset(minutes: i32) -> Option<FixedOffset> {
    if minutes.abs() > MAX_OFFSET_MINUTES {
        return None;
    }
    FixedOffset::west_opt(minutes * 60)
}

/// Clock that only moves when told to. Its time doubles as UTC.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        if let Ok(mut guard) = self.now.lock() {
            *guard = now;
        }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut guard) = self.now.lock() {
            *guard += by;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
            .lock()
            .map(|guard| *guard)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }

    fn now_utc(&self) -> DateTime<Utc> {
        self.now().and_utc()
    }
}
