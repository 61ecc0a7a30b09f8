use crate::batch::job_outcome::JobOutcome;
use crate::batch::transcription_job::TranscriptionJob;
use crate::pipeline::batch_executor::{run_job, BatchExecutor, WorkerFactory};

/// Executes jobs on a fixed-size pool of worker threads.
///
/// Layout: `job queue → N workers → outcome queue → calling thread`
///
/// Workers pull from a shared job channel and push `JobOutcome`s to a single
/// consumer drained on the calling thread, so there is no shared mutable
/// state beyond the filesystem. Each worker builds its own
/// `TranscribeFileUseCase` lazily on its first job and keeps it for the rest
/// of the run: one model load per pool worker, not per file. Jobs complete
/// in no particular order.
pub struct ThreadedBatchExecutor {
    max_workers: usize,
}

impl ThreadedBatchExecutor {
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers: max_workers.max(1),
        }
    }
}

impl BatchExecutor for ThreadedBatchExecutor {
    fn execute(
        &self,
        jobs: Vec<TranscriptionJob>,
        factory: &WorkerFactory,
        on_outcome: &mut dyn FnMut(&JobOutcome),
    ) -> Vec<JobOutcome> {
        if jobs.is_empty() {
            return Vec::new();
        }

        let pool_size = self.max_workers.min(jobs.len());
        let total = jobs.len();

        let (job_tx, job_rx) = crossbeam_channel::unbounded::<TranscriptionJob>();
        let (outcome_tx, outcome_rx) = crossbeam_channel::unbounded::<JobOutcome>();

        for job in jobs {
            // Receiver is alive until the scope below ends.
            let _ = job_tx.send(job);
        }
        drop(job_tx);

        std::thread::scope(|s| {
            for _ in 0..pool_size {
                let job_rx = job_rx.clone();
                let outcome_tx = outcome_tx.clone();
                s.spawn(move || worker_loop(&job_rx, &outcome_tx, factory));
            }
            drop(outcome_tx);
            drop(job_rx);

            let mut outcomes = Vec::with_capacity(total);
            for outcome in outcome_rx.iter() {
                on_outcome(&outcome);
                outcomes.push(outcome);
            }
            outcomes
        })
    }
}

fn worker_loop(
    job_rx: &crossbeam_channel::Receiver<TranscriptionJob>,
    outcome_tx: &crossbeam_channel::Sender<JobOutcome>,
    factory: &WorkerFactory,
) {
    let mut worker = None;
    for job in job_rx.iter() {
        let status = run_job(&mut worker, factory, &job);
        if outcome_tx.send(JobOutcome { job, status }).is_err() {
            break;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests_support {
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tempfile::TempDir;

    use crate::audio::domain::audio_decoder::AudioDecoder;
    use crate::audio::domain::audio_segment::AudioSegment;
    use crate::batch::transcription_job::TranscriptionJob;
    use crate::pipeline::batch_executor::WorkerFactory;
    use crate::pipeline::transcribe_file_use_case::TranscribeFileUseCase;
    use crate::transcription::domain::speech_recognizer::SpeechRecognizer;
    use crate::transcription::domain::transcript_segment::TranscriptSegment;
    use crate::transcription::infrastructure::text_transcript_writer::TextTranscriptWriter;

    struct StubDecoder;

    impl AudioDecoder for StubDecoder {
        fn decode(
            &self,
            _: &Path,
            sample_rate: u32,
        ) -> Result<AudioSegment, Box<dyn std::error::Error>> {
            Ok(AudioSegment::new(vec![0.0; 160], sample_rate))
        }
    }

    struct StubRecognizer;

    impl SpeechRecognizer for StubRecognizer {
        fn transcribe(
            &self,
            _: &AudioSegment,
        ) -> Result<Vec<TranscriptSegment>, Box<dyn std::error::Error>> {
            Ok(vec![TranscriptSegment {
                start_time: 0.0,
                end_time: 2.5,
                text: "hello".to_string(),
            }])
        }
    }

    /// Plans one job per name, creating the source files in `tmp`.
    pub(crate) fn plan_jobs(tmp: &TempDir, names: &[&str]) -> Vec<TranscriptionJob> {
        names
            .iter()
            .map(|name| {
                let source = tmp.path().join(name);
                std::fs::write(&source, b"fake audio").unwrap();
                TranscriptionJob::plan(tmp.path(), &source).unwrap()
            })
            .collect()
    }

    /// Factory whose workers always succeed; `builds` counts invocations.
    pub(crate) fn stub_factory(builds: Arc<AtomicUsize>) -> WorkerFactory {
        Box::new(move || {
            builds.fetch_add(1, Ordering::SeqCst);
            Ok(TranscribeFileUseCase::new(
                Box::new(StubDecoder),
                Box::new(StubRecognizer),
                Box::new(TextTranscriptWriter),
            ))
        })
    }

    /// Factory that never produces a worker.
    pub(crate) fn failing_factory(message: &str) -> WorkerFactory {
        let message = message.to_string();
        Box::new(move || Err(message.clone()))
    }
}
