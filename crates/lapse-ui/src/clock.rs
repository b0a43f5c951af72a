//! Countdown clock model.
//!
//! Holds the remaining duration and derives the displayed time fields from
//! it. The clock neither clamps at zero nor decides completion — the render
//! loop watches for the remaining value going negative and owns that policy.

const ONE_HOUR: i64 = 1000 * 60 * 60;
const ONE_MINUTE: i64 = 1000 * 60;
const ONE_SECOND: i64 = 1000;

/// Displayed hour/minute/second fields.
///
/// `hour` is the hour-of-day of the remaining duration (wraps at 24);
/// `minute` and `second` are in `[0, 59]`. Non-positive durations derive the
/// zero face.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TimeFields {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeFields {
    fn from_millis(millis: i64) -> Self {
        let total_seconds = millis.max(0) / ONE_SECOND;
        Self {
            hour: ((total_seconds / 3600) % 24) as u32,
            minute: ((total_seconds / 60) % 60) as u32,
            second: (total_seconds % 60) as u32,
        }
    }

    /// Two-digit zero-padded labels.
    pub fn hour_label(&self) -> String {
        two_digits(self.hour)
    }

    pub fn minute_label(&self) -> String {
        two_digits(self.minute)
    }

    pub fn second_label(&self) -> String {
        two_digits(self.second)
    }
}

#[inline]
fn two_digits(value: u32) -> String {
    format!("{value:02}")
}

/// Remaining-duration state for one countdown.
#[derive(Debug, Clone)]
pub struct CountdownClock {
    remaining_millis: i64,
}

impl CountdownClock {
    pub fn new(total_millis: i64) -> Self {
        Self { remaining_millis: total_millis }
    }

    /// Converts an hour/minute/second triple to total milliseconds.
    pub fn millis_from_parts(hour: u32, minute: u32, second: u32) -> i64 {
        hour as i64 * ONE_HOUR + minute as i64 * ONE_MINUTE + second as i64 * ONE_SECOND
    }

    /// Current remaining duration. May be negative once the countdown has
    /// run out.
    #[inline]
    pub fn remaining_millis(&self) -> i64 {
        self.remaining_millis
    }

    /// Fields derived from the current remaining duration, without mutating.
    #[inline]
    pub fn fields(&self) -> TimeFields {
        TimeFields::from_millis(self.remaining_millis)
    }

    /// Subtracts exactly one second and returns the new fields.
    pub fn tick(&mut self) -> TimeFields {
        self.remaining_millis -= ONE_SECOND;
        self.fields()
    }

    /// Replaces the remaining duration.
    pub fn reset(&mut self, total_millis: i64) {
        self.remaining_millis = total_millis;
    }

    /// Adds paused wall-clock time back into the remaining duration.
    pub fn compensate(&mut self, paused_millis: i64) {
        self.remaining_millis += paused_millis;
    }
}
