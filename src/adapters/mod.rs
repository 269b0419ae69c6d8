// Adapters layer: concrete implementations of the domain ports.

pub mod log;

pub use log::{ConsoleLog, LogSink, MemoryLog, NullLog, TracingLog};
