use async_trait::async_trait;
use curio_core::ports::{CatalogOperation, LatencyPort, LatencyProfile};
use tokio::time::sleep;
use tracing::trace;

/// Simulated network latency backed by `tokio::time::sleep`.
pub struct TokioLatency {
    profile: LatencyProfile,
}

impl TokioLatency {
    pub fn new(profile: LatencyProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &LatencyProfile {
        &self.profile
    }
}

#[async_trait]
impl LatencyPort for TokioLatency {
    async fn simulate(&self, op: CatalogOperation) {
        let delay = self.profile.delay_for(op);
        if delay.is_zero() {
            return;
        }
        trace!(%op, delay_ms = delay.as_millis() as u64, "simulating latency");
        sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tokio::time::{advance, Duration};

    #[tokio::test]
    async fn resolves_only_after_configured_delay() {
        tokio::time::pause();
        let latency = Arc::new(TokioLatency::new(LatencyProfile::default()));
        let done = Arc::new(AtomicBool::new(false));

        let task = {
            let latency = latency.clone();
            let done = done.clone();
            tokio::spawn(async move {
                latency.simulate(CatalogOperation::Purchase).await;
                done.store(true, Ordering::SeqCst);
            })
        };
        // Let the task register its sleep before moving time.
        tokio::task::yield_now().await;

        advance(Duration::from_millis(299)).await;
        tokio::task::yield_now().await;
        assert!(!done.load(Ordering::SeqCst));

        advance(Duration::from_millis(1)).await;
        task.await.unwrap();
        assert!(done.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn zero_profile_does_not_suspend_on_timer() {
        tokio::time::pause();
        let latency = TokioLatency::new(LatencyProfile::none());
        let before = tokio::time::Instant::now();

        latency.simulate(CatalogOperation::FetchAll).await;

        assert_eq!(tokio::time::Instant::now(), before);
    }
}
