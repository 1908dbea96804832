use chrono::{DateTime, Local};

use crate::Level;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

pub fn timestamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// `[<timestamp>] [<channel>] [<LEVEL>: <body>]`
pub fn format_record(timestamp: &str, channel: &str, level: Level, body: &str) -> String {
    format!("[{timestamp}] [{channel}] [{level}: {body}]")
}
