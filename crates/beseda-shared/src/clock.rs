//! Time source used to stamp new messages.
//!
//! The store never reads the system clock directly; it asks a [`Clock`] for a
//! ready-made `HH:MM` label.  [`SystemClock`] is used by the running client,
//! [`FixedClock`] by tests and by hosts that want deterministic labels.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use chrono::{Local, NaiveTime, Timelike};

use crate::constants::TIME_LABEL_FORMAT;
use crate::error::ClockError;

/// Supplies the time label for a message created "now".
///
/// Implementations must be synchronous and infallible.
pub trait Clock: Send + Sync {
    /// Current time as a zero-padded 24-hour `HH:MM` string.
    fn now_label(&self) -> String;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_label(&self) -> String {
        Local::now().format(TIME_LABEL_FORMAT).to_string()
    }
}

/// A clock frozen at a given time of day.
///
/// Clones share the same time, so a test can keep one handle and move the
/// clock forward while the store owns another.
#[derive(Debug, Clone)]
pub struct FixedClock {
    // minutes since midnight
    minutes: Arc<AtomicU32>,
}

impl FixedClock {
    pub fn at(hour: u32, minute: u32) -> Result<Self, ClockError> {
        let time = validate(hour, minute)?;
        Ok(Self {
            minutes: Arc::new(AtomicU32::new(time.hour() * 60 + time.minute())),
        })
    }

    /// Move the clock to another time of day.
    pub fn set(&self, hour: u32, minute: u32) -> Result<(), ClockError> {
        let time = validate(hour, minute)?;
        self.minutes
            .store(time.hour() * 60 + time.minute(), Ordering::SeqCst);
        Ok(())
    }

    fn time(&self) -> NaiveTime {
        let minutes = self.minutes.load(Ordering::SeqCst);
        NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl Clock for FixedClock {
    fn now_label(&self) -> String {
        self.time().format(TIME_LABEL_FORMAT).to_string()
    }
}

fn validate(hour: u32, minute: u32) -> Result<NaiveTime, ClockError> {
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(ClockError::InvalidTime { hour, minute })
}
