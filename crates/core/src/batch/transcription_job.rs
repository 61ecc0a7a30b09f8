use std::path::{Path, PathBuf};

use crate::shared::constants::{TRANSCRIPT_DIR_SUFFIX, TRANSCRIPT_FILENAME};

/// One unit of work: transcribe a single audio file.
///
/// Output paths are derived deterministically from the source: `name.ext`
/// gets a sibling directory `name_transcripts/` holding `transcript.txt`.
/// The existence of `output_file` is the job's sole completion marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptionJob {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub output_file: PathBuf,
}

impl TranscriptionJob {
    /// Derive the job for `source` inside `scan_dir`. Returns `None` for
    /// paths without a file stem, which the scanner never produces.
    pub fn plan(scan_dir: &Path, source: &Path) -> Option<Self> {
        let stem = source.file_stem()?;
        let mut dir_name = stem.to_os_string();
        dir_name.push(TRANSCRIPT_DIR_SUFFIX);

        let output_dir = scan_dir.join(dir_name);
        let output_file = output_dir.join(TRANSCRIPT_FILENAME);
        Some(Self {
            source: source.to_path_buf(),
            output_dir,
            output_file,
        })
    }

    /// Whether the completion marker exists right now. The check is not
    /// repeated after planning; two batches racing on the same directory may
    /// both transcribe a file (accepted, documented behavior).
    pub fn is_complete(&self) -> bool {
        self.output_file.exists()
    }
}
