use std::path::{Path, PathBuf};
use std::time::Instant;

/// Cross-cutting logger for batch orchestration events.
///
/// Decouples the coordinator from specific output mechanisms so callers can
/// observe batch behavior without changing the orchestration code. Workers
/// never touch this directly: outcomes flow to the coordinator thread, which
/// is the only writer.
pub trait BatchLogger: Send {
    /// Report job-level progress as outcomes arrive.
    fn progress(&mut self, current: usize, total: usize);

    /// Record that a source already has a transcript and was not dispatched.
    fn skipped(&mut self, source: &Path);

    /// Record a successfully transcribed source.
    fn completed(&mut self, source: &Path, segments: usize);

    /// Record a failed job with the offending path and error message.
    fn failed(&mut self, source: &Path, message: &str);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-batch summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events. Used by tests where logger
/// output is irrelevant.
pub struct NullBatchLogger;

impl BatchLogger for NullBatchLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn skipped(&mut self, _source: &Path) {}
    fn completed(&mut self, _source: &Path, _segments: usize) {}
    fn failed(&mut self, _source: &Path, _message: &str) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger that routes events through the `log` facade and
/// keeps counts for an end-of-batch summary.
pub struct StdoutBatchLogger {
    start_time: Instant,
    completed: usize,
    skipped: usize,
    failures: Vec<(PathBuf, String)>,
}

impl StdoutBatchLogger {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            completed: 0,
            skipped: 0,
            failures: Vec::new(),
        }
    }

    /// Returns the formatted summary string, or `None` if nothing happened.
    pub fn summary_string(&self) -> Option<String> {
        if self.completed == 0 && self.skipped == 0 && self.failures.is_empty() {
            return None;
        }

        let elapsed = self.start_time.elapsed().as_secs_f64();
        let mut lines = vec![format!(
            "Batch summary ({elapsed:.1}s): {} transcribed, {} skipped, {} failed",
            self.completed,
            self.skipped,
            self.failures.len()
        )];

        for (path, message) in &self.failures {
            lines.push(format!("  failed: {} ({message})", path.display()));
        }

        Some(lines.join("\n"))
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

impl Default for StdoutBatchLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchLogger for StdoutBatchLogger {
    fn progress(&mut self, current: usize, total: usize) {
        log::info!("Progress: {current}/{total} jobs");
    }

    fn skipped(&mut self, source: &Path) {
        self.skipped += 1;
        log::info!(
            "Transcript already exists for {}, skipping",
            source.display()
        );
    }

    fn completed(&mut self, source: &Path, segments: usize) {
        self.completed += 1;
        log::info!("Transcribed {} ({segments} segments)", source.display());
    }

    fn failed(&mut self, source: &Path, message: &str) {
        self.failures.push((source.to_path_buf(), message.to_string()));
        log::warn!("Failed to transcribe {}: {message}", source.display());
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("{text}");
        }
    }
}
