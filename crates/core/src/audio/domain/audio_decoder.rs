use std::path::Path;

use super::audio_segment::AudioSegment;

/// Domain interface for decoding an audio file to PCM.
pub trait AudioDecoder: Send {
    /// Decode the file to a mono PCM AudioSegment at the given sample rate.
    /// A file with no audio stream is an error.
    fn decode(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<AudioSegment, Box<dyn std::error::Error>>;
}
