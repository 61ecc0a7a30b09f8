use crate::audio::domain::audio_segment::AudioSegment;

use super::transcript_segment::TranscriptSegment;

/// Domain interface for speech-to-text transcription.
///
/// Implementations run inference on decoded audio and return segments in
/// time order. Ordering and non-overlap are the model's responsibility and
/// are not re-verified here.
pub trait SpeechRecognizer: Send {
    fn transcribe(
        &self,
        audio: &AudioSegment,
    ) -> Result<Vec<TranscriptSegment>, Box<dyn std::error::Error>>;
}
