//! Unit tests for the logger port defaults

use caps_domain::ports::{LogLevel, Logger};
use std::sync::Mutex;

#[derive(Default)]
struct CollectingLogger {
    records: Mutex<Vec<(LogLevel, String)>>,
}

impl Logger for CollectingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.records
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }

    fn provider_name(&self) -> &str {
        "collecting"
    }
}

#[test]
fn test_level_helpers_delegate_to_log() {
    let logger = CollectingLogger::default();
    logger.debug("d");
    logger.info("i");
    logger.warn("w");
    logger.error("e");

    let records = logger.records.lock().unwrap();
    let levels: Vec<LogLevel> = records.iter().map(|(level, _)| *level).collect();
    assert_eq!(
        levels,
        vec![LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error]
    );
}

#[test]
fn test_log_level_display_and_serde() {
    assert_eq!(LogLevel::Warn.to_string(), "warn");
    assert_eq!(serde_json::to_value(LogLevel::Info).unwrap(), "info");
    assert!(LogLevel::Debug < LogLevel::Error);
}
