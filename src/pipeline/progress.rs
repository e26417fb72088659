// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for batch verification
// reference: uses indicatif for progress bars and tracks per-case outcomes

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct BatchStats {
    pub cases_passed: usize,
    pub cases_failed: usize,
    pub cases_errored: usize,
    pub duration_ms: u64,
}

pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    cases_passed: Arc<AtomicUsize>,
    cases_failed: Arc<AtomicUsize>,
    cases_errored: Arc<AtomicUsize>,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn with_color(total_cases: usize, colored: bool) -> Self {
        Self::build(MultiProgress::new(), total_cases, colored)
    }

    /// Tracker that counts but never draws.
    pub fn hidden(total_cases: usize) -> Self {
        Self::build(
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            total_cases,
            false,
        )
    }

    fn build(multi_progress: MultiProgress, total_cases: usize, colored: bool) -> Self {
        let main_bar = create_progress_bar(&multi_progress, total_cases as u64, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
            cases_passed: Arc::new(AtomicUsize::new(0)),
            cases_failed: Arc::new(AtomicUsize::new(0)),
            cases_errored: Arc::new(AtomicUsize::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_passed(&self) {
        self.cases_passed.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn inc_failed(&self) {
        self.cases_failed.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn inc_errored(&self) {
        self.cases_errored.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn finish(&self) {
        self.main_bar.finish_with_message("Verification complete");
        self.detail_bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> BatchStats {
        BatchStats {
            cases_passed: self.cases_passed.load(Ordering::SeqCst),
            cases_failed: self.cases_failed.load(Ordering::SeqCst),
            cases_errored: self.cases_errored.load(Ordering::SeqCst),
            duration_ms: self.start_time.elapsed().as_millis() as u64,
        }
    }

    fn update_detail_bar(&self) {
        let failed = self.cases_failed.load(Ordering::SeqCst);
        let errored = self.cases_errored.load(Ordering::SeqCst);

        self.detail_bar
            .set_message(format!("Failed: {} | Errored: {}", failed, errored));
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    if colored {
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} cases {msg}",
                )
                .expect("Failed to create progress bar template")
                .progress_chars("█▓▒░"),
        );
    } else {
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} cases {msg}")
                .expect("Failed to create progress bar template")
                .progress_chars("=>-"),
        );
    }
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    let style = ProgressStyle::default_bar()
        .template("{msg}")
        .expect("Failed to create detail bar template");
    bar.set_style(style);
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_tracker_counts() {
        let tracker = ProgressTracker::hidden(10);

        tracker.inc_passed();
        tracker.inc_passed();
        tracker.inc_failed();
        tracker.inc_errored();

        let stats = tracker.get_stats();
        assert_eq!(stats.cases_passed, 2);
        assert_eq!(stats.cases_failed, 1);
        assert_eq!(stats.cases_errored, 1);
    }
}
