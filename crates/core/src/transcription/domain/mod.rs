pub mod speech_recognizer;
pub mod transcript_segment;
pub mod transcript_writer;
