use std::path::Path;

use super::transcript_segment::TranscriptSegment;

/// Domain interface for persisting a transcript.
pub trait TranscriptWriter: Send {
    /// Write all segments to `path`, truncating any prior content.
    fn write(
        &self,
        path: &Path,
        segments: &[TranscriptSegment],
    ) -> Result<(), Box<dyn std::error::Error>>;
}
