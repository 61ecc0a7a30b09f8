use crate::batch::job_outcome::{JobOutcome, JobStatus};
use crate::batch::transcription_job::TranscriptionJob;

use super::transcribe_file_use_case::TranscribeFileUseCase;

/// Builds one worker. Executors call this lazily, at most once per pool
/// worker, so an expensive model load is amortized across all the jobs that
/// worker is assigned.
pub type WorkerFactory = Box<dyn Fn() -> Result<TranscribeFileUseCase, String> + Send + Sync>;

/// Abstracts how the fixed job list is executed.
///
/// This is a port (application-layer interface). Infrastructure provides
/// concrete strategies (sequential, thread pool). `on_outcome` is invoked on
/// the calling thread as each job finishes, in completion order; the
/// returned vector holds every outcome. Executors never fail as a whole:
/// per-job errors become `JobStatus::Failed` outcomes.
pub trait BatchExecutor: Send {
    fn execute(
        &self,
        jobs: Vec<TranscriptionJob>,
        factory: &WorkerFactory,
        on_outcome: &mut dyn FnMut(&JobOutcome),
    ) -> Vec<JobOutcome>;
}

/// Run one job against a lazily-built worker, mapping any error to a
/// `Failed` status. A factory failure is not cached: the slot stays empty
/// and the next job retries the build.
pub(crate) fn run_job(
    worker: &mut Option<TranscribeFileUseCase>,
    factory: &WorkerFactory,
    job: &TranscriptionJob,
) -> JobStatus {
    let worker = match worker {
        Some(w) => w,
        None => match factory() {
            Ok(built) => worker.insert(built),
            Err(message) => return JobStatus::Failed { message },
        },
    };

    match worker.run(job) {
        Ok(segments) => JobStatus::Completed { segments },
        Err(e) => JobStatus::Failed {
            message: e.to_string(),
        },
    }
}
