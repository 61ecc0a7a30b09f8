pub mod audio_scanner;
pub mod job_outcome;
pub mod transcription_job;
