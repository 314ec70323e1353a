/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Rate limit class of an HTTP verb
///
/// The server counts reads and writes against separate limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateClass {
    /// GET and other safe verbs
    Read,
    /// POST, PUT, DELETE and any other verb
    Write,
}

impl RateClass {
    /// Classifies an HTTP method
    #[must_use]
    pub fn from_method(method: &Method) -> Self {
        if *method == Method::GET || *method == Method::HEAD || *method == Method::OPTIONS {
            RateClass::Read
        } else {
            RateClass::Write
        }
    }
}

/// Rate limit snapshot as declared by the server in the `dbg_info` block
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct Rate {
    /// Reads counted in the current window
    pub reads: u32,
    /// Maximum reads allowed per window
    pub read_limit: u32,
    /// Length of the read window in seconds
    pub read_limit_seconds: u32,
    /// Writes counted in the current window
    pub writes: u32,
    /// Maximum writes allowed per window
    pub write_limit: u32,
    /// Length of the write window in seconds
    pub write_limit_seconds: u32,
    /// Server side processing time reported with the snapshot
    pub time: f64,
    /// Local time at which the current read window started counting
    #[serde(skip, default = "Utc::now")]
    pub read_window_start: DateTime<Utc>,
    /// Local time at which the current write window started counting
    #[serde(skip, default = "Utc::now")]
    pub write_window_start: DateTime<Utc>,
}

impl Default for Rate {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            reads: 0,
            read_limit: 0,
            read_limit_seconds: 0,
            writes: 0,
            write_limit: 0,
            write_limit_seconds: 0,
            time: 0.0,
            read_window_start: now,
            write_window_start: now,
        }
    }
}

impl Rate {
    /// Returns `(count, limit, limit_seconds)` for a class
    #[must_use]
    pub fn counters(&self, class: RateClass) -> (u32, u32, u32) {
        match class {
            RateClass::Read => (self.reads, self.read_limit, self.read_limit_seconds),
            RateClass::Write => (self.writes, self.write_limit, self.write_limit_seconds),
        }
    }

    /// Local start of the current window of a class
    #[must_use]
    pub fn window_start(&self, class: RateClass) -> DateTime<Utc> {
        match class {
            RateClass::Read => self.read_window_start,
            RateClass::Write => self.write_window_start,
        }
    }

    /// Sets the local start of the current window of a class
    pub fn set_window_start(&mut self, class: RateClass, at: DateTime<Utc>) {
        match class {
            RateClass::Read => self.read_window_start = at,
            RateClass::Write => self.write_window_start = at,
        }
    }

    /// True when this snapshot counts in the same server window as `previous`
    ///
    /// Counters only grow within a window, so a drop in the count, or a
    /// change of limit or window length, means a new window began.
    #[must_use]
    pub fn continues_window(&self, previous: &Rate, class: RateClass) -> bool {
        let (count, limit, limit_seconds) = self.counters(class);
        let (previous_count, previous_limit, previous_seconds) = previous.counters(class);
        limit > 0
            && limit == previous_limit
            && limit_seconds == previous_seconds
            && count >= previous_count
    }

    /// Keeps the window starts of `previous` for every class still in the same window
    pub fn carry_windows(&mut self, previous: &Rate) {
        for class in [RateClass::Read, RateClass::Write] {
            if self.continues_window(previous, class) {
                self.set_window_start(class, previous.window_start(class));
            }
        }
    }

    /// True when no limit has been declared for the class yet
    #[must_use]
    pub fn is_unlimited(&self, class: RateClass) -> bool {
        let (_, limit, _) = self.counters(class);
        limit == 0
    }

    /// True when the class has used up its allowance for the current window
    #[must_use]
    pub fn is_exhausted(&self, class: RateClass) -> bool {
        let (count, limit, _) = self.counters(class);
        limit > 0 && count >= limit
    }

    /// Time to wait before the next request with `method`
    #[must_use]
    pub fn wait_duration(&self, method: &Method) -> Duration {
        self.wait_duration_at(method, Utc::now())
    }

    /// Same as [`Rate::wait_duration`] evaluated at a given instant
    ///
    /// Zero when the class has no declared limit or is still under it,
    /// otherwise the remainder of the window, never negative.
    #[must_use]
    pub fn wait_duration_at(&self, method: &Method, now: DateTime<Utc>) -> Duration {
        let class = RateClass::from_method(method);
        if !self.is_exhausted(class) {
            return Duration::ZERO;
        }

        let (_, _, limit_seconds) = self.counters(class);
        let window_ms = i64::from(limit_seconds) * 1000;
        let elapsed_ms = (now - self.window_start(class)).num_milliseconds().max(0);
        let remaining_ms = (window_ms - elapsed_ms).max(0);

        Duration::from_millis(remaining_ms as u64)
    }

    /// Starts a fresh local window for a class once the old one has been waited out
    pub fn reset_class(&mut self, class: RateClass, now: DateTime<Utc>) {
        match class {
            RateClass::Read => self.reads = 0,
            RateClass::Write => self.writes = 0,
        }
        self.set_window_start(class, now);
    }
}
