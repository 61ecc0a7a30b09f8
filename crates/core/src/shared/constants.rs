pub const WHISPER_MODEL_NAME: &str = "ggml-medium.en.bin";
pub const WHISPER_MODEL_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-medium.en.bin";

/// Whisper expects 16 kHz mono input.
pub const WHISPER_SAMPLE_RATE: u32 = 16000;

/// Extensions selected by the directory scan. Matching is case-sensitive.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a"];

/// Per-source output directory is `<stem>_transcripts` next to the source.
pub const TRANSCRIPT_DIR_SUFFIX: &str = "_transcripts";

pub const TRANSCRIPT_FILENAME: &str = "transcript.txt";
