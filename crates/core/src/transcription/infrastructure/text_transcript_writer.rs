use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::transcription::domain::transcript_segment::TranscriptSegment;
use crate::transcription::domain::transcript_writer::TranscriptWriter;

/// Writes transcripts as plain UTF-8 text, one `[start - end] text` line per
/// segment, in the order the segments were produced.
pub struct TextTranscriptWriter;

impl TranscriptWriter for TextTranscriptWriter {
    fn write(
        &self,
        path: &Path,
        segments: &[TranscriptSegment],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let file = fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        for segment in segments {
            writeln!(writer, "{}", segment.format_line())?;
        }
        writer.flush()?;
        Ok(())
    }
}
