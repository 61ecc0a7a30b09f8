pub mod text_transcript_writer;
pub mod whisper_recognizer;
