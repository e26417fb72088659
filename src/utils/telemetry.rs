// file: src/utils/telemetry.rs
// description: stage timing and throughput reporting for pipeline runs
// reference: tracing spans and instant-based timers

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{info, warn};

pub struct StageTimer {
    stage: String,
    start: Instant,
}

impl StageTimer {
    pub fn new(stage: &str) -> Self {
        info!("Starting stage: {}", stage);
        Self {
            stage: stage.to_string(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        info!(
            "Completed stage: {} in {:.3}s",
            self.stage,
            elapsed.as_secs_f64()
        );
        elapsed
    }

    pub fn finish_with_count(self, count: usize) -> ThroughputMetrics {
        let metrics = ThroughputMetrics::new(&self.stage, count, self.elapsed());
        info!("Completed stage: {}", metrics.format());
        metrics
    }

    pub fn warn_if_slow(&self, threshold: Duration) {
        let elapsed = self.elapsed();
        if elapsed > threshold {
            warn!(
                "Slow stage [{}]: {:.2}s (threshold: {:.2}s)",
                self.stage,
                elapsed.as_secs_f64(),
                threshold.as_secs_f64()
            );
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThroughputMetrics {
    pub stage: String,
    pub count: usize,
    pub duration_ms: u64,
    pub per_second: f64,
}

impl ThroughputMetrics {
    pub fn new(stage: &str, count: usize, duration: Duration) -> Self {
        let secs = duration.as_secs_f64();
        let per_second = if secs > 0.0 { count as f64 / secs } else { 0.0 };

        Self {
            stage: stage.to_string(),
            count,
            duration_ms: duration.as_millis() as u64,
            per_second,
        }
    }

    pub fn format(&self) -> String {
        format!(
            "{}: {} cases in {}ms ({:.0} cases/sec)",
            self.stage, self.count, self.duration_ms, self.per_second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput_metrics() {
        let metrics = ThroughputMetrics::new("verify", 3000, Duration::from_secs(2));
        assert_eq!(metrics.count, 3000);
        assert_eq!(metrics.duration_ms, 2000);
        assert_eq!(metrics.per_second, 1500.0);
        assert_eq!(metrics.format(), "verify: 3000 cases in 2000ms (1500 cases/sec)");
    }

    #[test]
    fn test_zero_duration_throughput() {
        let metrics = ThroughputMetrics::new("verify", 10, Duration::ZERO);
        assert_eq!(metrics.per_second, 0.0);
    }

    #[test]
    fn test_stage_timer() {
        let timer = StageTimer::new("test");
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.finish();
        assert!(elapsed >= Duration::from_millis(10));
    }
}
