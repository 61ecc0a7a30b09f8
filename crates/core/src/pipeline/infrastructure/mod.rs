pub mod serial_batch_executor;
pub mod threaded_batch_executor;
