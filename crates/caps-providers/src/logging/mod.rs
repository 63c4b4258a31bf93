//! Logger providers

pub mod null;
pub mod recording;
pub mod tracing_logger;

pub use null::NullLogger;
pub use recording::{LogRecord, RecordingLogger};
pub use tracing_logger::TracingLogger;
