//! Simulated Network Latency
//!
//! Every mock service call waits a fixed delay before touching its fixtures,
//! so loading states in the UI behave as they would against a real API.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    millis: u32,
}

impl Latency {
    pub const NONE: Latency = Latency::fixed(0);
    pub const FAST: Latency = Latency::fixed(300);
    pub const STANDARD: Latency = Latency::fixed(400);
    pub const SLOW: Latency = Latency::fixed(500);

    pub const fn fixed(millis: u32) -> Self {
        Self { millis }
    }

    pub fn millis(&self) -> u32 {
        self.millis
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.millis))
    }

    /// Wait for the configured delay
    pub async fn simulate(&self) {
        if self.millis == 0 {
            return;
        }
        sleep(self.millis).await;
    }
}

impl Default for Latency {
    fn default() -> Self {
        Latency::STANDARD
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(millis: u32) {
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(millis: u32) {
    tokio::time::sleep(Duration::from_millis(u64::from(millis))).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_latency_returns_immediately() {
        let started = std::time::Instant::now();
        Latency::NONE.simulate().await;
        assert!(started.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_latency_waits() {
        let started = tokio::time::Instant::now();
        Latency::FAST.simulate().await;
        assert!(started.elapsed() >= Duration::from_millis(300));
    }

    #[test]
    fn test_default_is_in_band() {
        let ms = Latency::default().millis();
        assert!((300..=500).contains(&ms));
    }
}
