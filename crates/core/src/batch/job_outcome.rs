use super::transcription_job::TranscriptionJob;

/// How one dispatched job ended. Failures carry a message instead of an
/// error trait object so outcomes can cross thread boundaries untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobStatus {
    Completed { segments: usize },
    Failed { message: String },
}

/// Per-job result reported back to the coordinator. One outcome per
/// dispatched job; skipped jobs never reach an executor and have none.
#[derive(Clone, Debug)]
pub struct JobOutcome {
    pub job: TranscriptionJob,
    pub status: JobStatus,
}

impl JobOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self.status, JobStatus::Completed { .. })
    }
}
