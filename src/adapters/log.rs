use crate::domain::ports::Log;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Accepts every message and does nothing with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl Log for NullLog {
    fn info(&self, _message: &str) {}
}

/// Prints each message on its own line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLog;

impl Log for ConsoleLog {
    fn info(&self, message: &str) {
        println!("{}", message);
    }
}

/// Forwards messages to the installed `tracing` subscriber at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl Log for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!(target: "null_account::account", "{}", message);
    }
}

/// Keeps every message in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemoryLog {
    messages: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn len(&self) -> usize {
        self.messages().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Log for MemoryLog {
    fn info(&self, message: &str) {
        let mut messages = match self.messages.lock() {
            Ok(messages) => messages,
            Err(poisoned) => poisoned.into_inner(),
        };
        messages.push(message.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogSink {
    Null,
    #[default]
    Console,
    Tracing,
}

impl LogSink {
    pub fn build(self) -> Box<dyn Log> {
        match self {
            LogSink::Null => Box::new(NullLog),
            LogSink::Console => Box::new(ConsoleLog),
            LogSink::Tracing => Box::new(TracingLog),
        }
    }
}
