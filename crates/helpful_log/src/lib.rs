//! # helpful_log
//!
//! Leveled logging where every record is routed through a channel named
//! after the call site that produced it:
//!
//! ```text
//! [2024-03-09 07:05:01,123] [Location >> main.rs:10, function/method name: "run"] [WARNING: Message >> disk almost full]
//! ```
//!
//! [`StreamLogger`] writes to the console. [`FileLogger`] appends to a file
//! that is opened for each record and closed immediately afterwards.
//!
//! The `logger_*!` macros capture the enclosing function name as well; the
//! plain methods capture file and line through `#[track_caller]`.

pub mod call_site;
mod channel;
mod error;
mod level;
mod logger;
mod macros;
mod message;
mod record;
mod sink;


pub use call_site::CallSite;
pub use channel::{Channel, ScopedSink, channel, channel_count};
pub use error::{Error, Result};
pub use level::Level;
pub use logger::{Console, Destination, FileLogger, LogFile, Logger, StreamLogger};
pub use message::Message;
pub use record::format_record;
pub use sink::{ConsoleSink, FileSink, MemorySink, Sink, Stream};
