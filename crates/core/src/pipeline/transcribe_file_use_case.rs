use std::fs;

use crate::audio::domain::audio_decoder::AudioDecoder;
use crate::batch::transcription_job::TranscriptionJob;
use crate::shared::constants::WHISPER_SAMPLE_RATE;
use crate::transcription::domain::speech_recognizer::SpeechRecognizer;
use crate::transcription::domain::transcript_writer::TranscriptWriter;

/// Transcribes one audio file end to end: decode, run inference, write the
/// transcript. Reusable across jobs; a pool worker holds one instance for
/// its whole lifetime so the recognizer's model load is paid once.
pub struct TranscribeFileUseCase {
    decoder: Box<dyn AudioDecoder>,
    recognizer: Box<dyn SpeechRecognizer>,
    writer: Box<dyn TranscriptWriter>,
}

impl TranscribeFileUseCase {
    pub fn new(
        decoder: Box<dyn AudioDecoder>,
        recognizer: Box<dyn SpeechRecognizer>,
        writer: Box<dyn TranscriptWriter>,
    ) -> Self {
        Self {
            decoder,
            recognizer,
            writer,
        }
    }

    /// Run the job and return the number of segments written.
    ///
    /// The output directory is created only after inference succeeds, so a
    /// failed job leaves neither a directory nor a partial file: on a rerun
    /// it is indistinguishable from a never-attempted one.
    pub fn run(&self, job: &TranscriptionJob) -> Result<usize, Box<dyn std::error::Error>> {
        let audio = self.decoder.decode(&job.source, WHISPER_SAMPLE_RATE)?;
        let segments = self.recognizer.transcribe(&audio)?;

        fs::create_dir_all(&job.output_dir)?;
        self.writer.write(&job.output_file, &segments)?;

        Ok(segments.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::domain::audio_segment::AudioSegment;
    use crate::transcription::domain::transcript_segment::TranscriptSegment;
    use crate::transcription::infrastructure::text_transcript_writer::TextTranscriptWriter;
    use std::path::Path;
    use tempfile::TempDir;

    // --- Stubs ---

    struct StubDecoder {
        fail: bool,
    }

    impl AudioDecoder for StubDecoder {
        fn decode(
            &self,
            path: &Path,
            sample_rate: u32,
        ) -> Result<AudioSegment, Box<dyn std::error::Error>> {
            if self.fail {
                return Err(format!("no audio stream in {}", path.display()).into());
            }
            Ok(AudioSegment::new(vec![0.0; 16000], sample_rate))
        }
    }

    struct StubRecognizer {
        result: Result<Vec<TranscriptSegment>, String>,
    }

    impl SpeechRecognizer for StubRecognizer {
        fn transcribe(
            &self,
            _: &AudioSegment,
        ) -> Result<Vec<TranscriptSegment>, Box<dyn std::error::Error>> {
            self.result.clone().map_err(Into::into)
        }
    }

    fn use_case(decoder_fails: bool, result: Result<Vec<TranscriptSegment>, String>) -> TranscribeFileUseCase {
        TranscribeFileUseCase::new(
            Box::new(StubDecoder {
                fail: decoder_fails,
            }),
            Box::new(StubRecognizer { result }),
            Box::new(TextTranscriptWriter),
        )
    }

    fn plan_job(tmp: &TempDir, name: &str) -> TranscriptionJob {
        let source = tmp.path().join(name);
        std::fs::write(&source, b"fake audio").unwrap();
        TranscriptionJob::plan(tmp.path(), &source).unwrap()
    }

    #[test]
    fn test_run_writes_one_line_per_segment() {
        let tmp = TempDir::new().unwrap();
        let job = plan_job(&tmp, "a.mp3");
        let uc = use_case(
            false,
            Ok(vec![
                TranscriptSegment {
                    start_time: 0.0,
                    end_time: 2.5,
                    text: "hello".to_string(),
                },
                TranscriptSegment {
                    start_time: 2.5,
                    end_time: 4.0,
                    text: "world".to_string(),
                },
            ]),
        );

        let count = uc.run(&job).unwrap();
        assert_eq!(count, 2);

        let content = std::fs::read_to_string(&job.output_file).unwrap();
        assert_eq!(content, "[0.00 - 2.50] hello\n[2.50 - 4.00] world\n");
    }

    #[test]
    fn test_run_with_no_segments_writes_empty_file() {
        let tmp = TempDir::new().unwrap();
        let job = plan_job(&tmp, "b.wav");
        let uc = use_case(false, Ok(vec![]));

        let count = uc.run(&job).unwrap();
        assert_eq!(count, 0);
        assert!(job.output_file.exists());
        assert_eq!(std::fs::read_to_string(&job.output_file).unwrap(), "");
    }

    #[test]
    fn test_decode_failure_leaves_no_output_dir() {
        let tmp = TempDir::new().unwrap();
        let job = plan_job(&tmp, "a.mp3");
        let uc = use_case(true, Ok(vec![]));

        let result = uc.run(&job);
        assert!(result.is_err());
        assert!(!job.output_dir.exists());
        assert!(!job.output_file.exists());
    }

    #[test]
    fn test_inference_failure_leaves_no_output_dir() {
        let tmp = TempDir::new().unwrap();
        let job = plan_job(&tmp, "a.mp3");
        let uc = use_case(false, Err("inference exploded".to_string()));

        let result = uc.run(&job);
        assert!(result.is_err());
        assert!(!job.output_dir.exists());
        assert!(!job.output_file.exists());
    }

    #[test]
    fn test_run_overwrites_stale_transcript() {
        // The worker itself truncates; the skip-if-done check lives in the
        // coordinator, not here.
        let tmp = TempDir::new().unwrap();
        let job = plan_job(&tmp, "a.mp3");
        std::fs::create_dir_all(&job.output_dir).unwrap();
        std::fs::write(&job.output_file, "stale").unwrap();

        let uc = use_case(
            false,
            Ok(vec![TranscriptSegment {
                start_time: 0.0,
                end_time: 1.0,
                text: "fresh".to_string(),
            }]),
        );
        uc.run(&job).unwrap();

        assert_eq!(
            std::fs::read_to_string(&job.output_file).unwrap(),
            "[0.00 - 1.00] fresh\n"
        );
    }
}
