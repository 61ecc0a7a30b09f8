use crate::batch::job_outcome::JobOutcome;
use crate::batch::transcription_job::TranscriptionJob;
use crate::pipeline::batch_executor::{run_job, BatchExecutor, WorkerFactory};

/// Executes jobs one at a time on the calling thread.
///
/// The single worker is built on the first job and reused for the rest, so
/// the model is loaded once for the whole batch.
pub struct SerialBatchExecutor;

impl BatchExecutor for SerialBatchExecutor {
    fn execute(
        &self,
        jobs: Vec<TranscriptionJob>,
        factory: &WorkerFactory,
        on_outcome: &mut dyn FnMut(&JobOutcome),
    ) -> Vec<JobOutcome> {
        let mut worker = None;
        let mut outcomes = Vec::with_capacity(jobs.len());

        for job in jobs {
            let status = run_job(&mut worker, factory, &job);
            let outcome = JobOutcome { job, status };
            on_outcome(&outcome);
            outcomes.push(outcome);
        }

        outcomes
    }
}
