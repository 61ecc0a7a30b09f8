pub mod batch_executor;
pub mod batch_logger;
pub mod batch_transcribe_use_case;
pub mod infrastructure;
pub mod transcribe_file_use_case;
