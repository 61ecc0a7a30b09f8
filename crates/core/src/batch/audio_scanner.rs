use std::fs;
use std::path::{Path, PathBuf};

use crate::shared::constants::AUDIO_EXTENSIONS;

/// List the audio files directly inside `dir` (no recursion), sorted by path
/// for a stable job order across runs.
///
/// Extension matching is case-sensitive: `a.mp3` is selected, `a.MP3` is not.
pub fn scan_audio_files(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if is_audio_file(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}
