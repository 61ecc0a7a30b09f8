pub mod audio;
pub mod batch;
pub mod pipeline;
pub mod shared;
pub mod transcription;
