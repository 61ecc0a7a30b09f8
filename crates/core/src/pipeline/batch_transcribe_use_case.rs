use std::path::Path;

use crate::batch::audio_scanner::scan_audio_files;
use crate::batch::job_outcome::JobStatus;
use crate::batch::transcription_job::TranscriptionJob;

use super::batch_executor::{BatchExecutor, WorkerFactory};
use super::batch_logger::BatchLogger;

/// Observational run summary. Failures are visible here and in the log, not
/// in the process exit code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub discovered: usize,
    pub skipped: usize,
    pub completed: usize,
    pub failed: usize,
}

/// Half the available processing units, floored at 1. Executors additionally
/// cap the pool at the job count.
pub fn default_worker_count() -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    (cores / 2).max(1)
}

/// Orchestrates one batch run over a directory.
///
/// Scans once, skips sources whose transcript already exists, and hands the
/// remaining fixed job list to a `BatchExecutor`. No retries and no mid-run
/// rescan; outcomes are logged as they arrive.
pub struct BatchTranscribeUseCase {
    executor: Box<dyn BatchExecutor>,
    factory: WorkerFactory,
    logger: Box<dyn BatchLogger>,
}

impl BatchTranscribeUseCase {
    pub fn new(
        executor: Box<dyn BatchExecutor>,
        factory: WorkerFactory,
        logger: Box<dyn BatchLogger>,
    ) -> Self {
        Self {
            executor,
            factory,
            logger,
        }
    }

    pub fn execute(&mut self, scan_dir: &Path) -> Result<BatchReport, Box<dyn std::error::Error>> {
        let candidates = scan_audio_files(scan_dir)?;
        let discovered = candidates.len();

        let mut pending = Vec::new();
        let mut skipped = 0usize;
        for source in &candidates {
            let Some(job) = TranscriptionJob::plan(scan_dir, source) else {
                continue;
            };
            if job.is_complete() {
                self.logger.skipped(&job.source);
                skipped += 1;
            } else {
                pending.push(job);
            }
        }

        let total = pending.len();
        self.logger.info(&format!(
            "{discovered} audio files found, {skipped} already transcribed, {total} to transcribe"
        ));

        let logger = self.logger.as_mut();
        let mut processed = 0usize;
        let outcomes = self.executor.execute(pending, &self.factory, &mut |outcome| {
            processed += 1;
            match &outcome.status {
                JobStatus::Completed { segments } => {
                    logger.completed(&outcome.job.source, *segments)
                }
                JobStatus::Failed { message } => logger.failed(&outcome.job.source, message),
            }
            logger.progress(processed, total);
        });
        logger.summary();

        let completed = outcomes.iter().filter(|o| o.succeeded()).count();
        Ok(BatchReport {
            discovered,
            skipped,
            completed,
            failed: outcomes.len() - completed,
        })
    }
}
