//! services/api/src/adapters/latency.rs
//!
//! Concrete implementations of the `LatencyPolicy` port. The simulated policy
//! mirrors the round-trip times the storefront was built against; the no-op
//! policy lets tests run without waiting.

use async_trait::async_trait;
use course_catalog_core::ports::{CatalogOperation, LatencyPolicy};
use std::time::Duration;
use tracing::trace;

/// Suspends each call for a fixed, per-operation delay.
#[derive(Clone, Debug)]
pub struct SimulatedLatency {
    percent: u32,
}

impl SimulatedLatency {
    /// `percent` scales every base delay; `100` keeps them unchanged.
    pub fn new(percent: u32) -> Self {
        Self { percent }
    }

    /// The unscaled delay for an operation.
    pub fn base_delay(operation: CatalogOperation) -> Duration {
        let millis = match operation {
            CatalogOperation::List => 800,
            CatalogOperation::Featured => 500,
            CatalogOperation::Get => 300,
            CatalogOperation::UserCourses => 800,
            CatalogOperation::Categories => 200,
            CatalogOperation::Search => 400,
            CatalogOperation::Create => 1000,
            CatalogOperation::Update => 800,
            CatalogOperation::Delete => 600,
            CatalogOperation::Enroll => 800,
        };
        Duration::from_millis(millis)
    }

    pub fn delay_for(&self, operation: CatalogOperation) -> Duration {
        Self::base_delay(operation) * self.percent / 100
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(100)
    }
}

#[async_trait]
impl LatencyPolicy for SimulatedLatency {
    async fn pause(&self, operation: CatalogOperation) {
        let delay = self.delay_for(operation);
        trace!(operation = operation.as_str(), ?delay, "simulating latency");
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Resolves immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLatency;

#[async_trait]
impl LatencyPolicy for NoLatency {
    async fn pause(&self, _operation: CatalogOperation) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_scale_by_percent() {
        let half = SimulatedLatency::new(50);
        assert_eq!(half.delay_for(CatalogOperation::Create), Duration::from_millis(500));
        assert_eq!(half.delay_for(CatalogOperation::Categories), Duration::from_millis(100));

        let off = SimulatedLatency::new(0);
        assert!(off.delay_for(CatalogOperation::List).is_zero());
    }

    #[tokio::test(start_paused = true)]
    async fn pause_waits_for_the_configured_delay() {
        let latency = SimulatedLatency::default();
        let started = tokio::time::Instant::now();
        latency.pause(CatalogOperation::Get).await;
        assert!(started.elapsed() >= Duration::from_millis(300));
    }
}
