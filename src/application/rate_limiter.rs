/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Rate limiter module for controlling API request rates
//!
//! AppNexus reports its read and write limits in the `dbg_info` block of every
//! response. The limiter keeps the latest snapshot and holds back a request
//! whose verb class has used up its allowance until the window ends.

use crate::model::rate::{Rate, RateClass};
use chrono::Utc;
use reqwest::Method;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::warn;

/// Rate limiter driven by server declared limits
#[derive(Debug, Default)]
pub struct RateLimiter {
    rate: RwLock<Rate>,
}

impl RateLimiter {
    /// Creates a limiter with no known limits
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a limiter seeded with a snapshot
    #[must_use]
    pub fn with_rate(rate: Rate) -> Self {
        Self {
            rate: RwLock::new(rate),
        }
    }

    /// Waits until a request with `method` may be sent
    ///
    /// Returns the time waited. After waiting, the counter of the class is
    /// zeroed so later calls go through until the next snapshot arrives.
    pub async fn wait(&self, method: &Method) -> Duration {
        let wait = self.rate.read().await.wait_duration(method);
        if wait.is_zero() {
            return wait;
        }

        let class = RateClass::from_method(method);
        warn!(
            "{:?} rate limit reached, waiting {:.3}s before {}",
            class,
            wait.as_secs_f64(),
            method
        );
        tokio::time::sleep(wait).await;

        self.rate.write().await.reset_class(class, Utc::now());
        wait
    }

    /// Checks if a request with `method` can be sent without waiting
    pub async fn check(&self, method: &Method) -> bool {
        self.rate.read().await.wait_duration(method).is_zero()
    }

    /// Replaces the snapshot with the one from the latest response
    ///
    /// Each class keeps its window start while the server is still counting
    /// in the same window, so waits cover only the rest of that window.
    pub async fn update(&self, mut rate: Rate) {
        let mut current = self.rate.write().await;
        rate.carry_windows(&current);
        *current = rate;
    }

    /// Copy of the current snapshot
    pub async fn snapshot(&self) -> Rate {
        self.rate.read().await.clone()
    }
}
