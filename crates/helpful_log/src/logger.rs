use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::channel::{Channel, channel};
use crate::sink::{ConsoleSink, FileSink, Sink, Stream};
use crate::{CallSite, Level, Message, Result};

/// Where a [`Logger`] sends its records and how it names its channels.
pub trait Destination {
    fn channel_name(&self, site: &CallSite) -> String;

    fn emit(&self, channel: &Arc<Channel>, level: Level, body: &str) -> Result<()>;
}

/// Console output. The sink is created once per logger and attached to the
/// call-site channel only while a record is being emitted.
pub struct Console {
    sink: Arc<dyn Sink>,
}

impl Destination for Console {
    fn channel_name(&self, site: &CallSite) -> String {
        site.channel_name(site.base_name())
    }

    fn emit(&self, channel: &Arc<Channel>, level: Level, body: &str) -> Result<()> {
        let _attached = channel.attach_scoped(self.sink.clone());
        channel.emit(level, body)
    }
}

/// A log file that is opened for each record and closed right after it.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
}

impl Destination for LogFile {
    fn channel_name(&self, site: &CallSite) -> String {
        site.channel_name(&site.qualified_file())
    }

    fn emit(&self, channel: &Arc<Channel>, level: Level, body: &str) -> Result<()> {
        let sink = FileSink::open(&self.path)?;
        let _attached = channel.attach_scoped(Arc::new(sink));
        channel.emit(level, body)
    }
}

/// Leveled logger that names each record's channel after its call site.
///
/// The level methods capture file and line through `#[track_caller]` but not
/// the calling function, which renders as `<unknown>` in the channel name.
/// Use [`logger_debug!`], [`logger_info!`], [`logger_warning!`],
/// [`logger_error!`] or [`logger_critical!`] when the routine name matters.
///
/// [`logger_debug!`]: crate::logger_debug
/// [`logger_info!`]: crate::logger_info
/// [`logger_warning!`]: crate::logger_warning
/// [`logger_error!`]: crate::logger_error
/// [`logger_critical!`]: crate::logger_critical
pub struct Logger<D> {
    level: Level,
    destination: D,
}

/// Writes records to the console, standard error by default.
pub type StreamLogger = Logger<Console>;

/// Appends records to a file, one open/close per record.
pub type FileLogger = Logger<LogFile>;

impl Logger<Console> {
    /// `level` is one of `CRITICAL`, `ERROR`, `WARNING`, `INFO`, `DEBUG`;
    /// anything else behaves as `DEBUG`.
    pub fn new(level: &str) -> Self {
        Self::to_stream(level, Stream::default())
    }

    pub fn to_stream(level: &str, stream: Stream) -> Self {
        Self::with_sink(level, ConsoleSink::new(stream))
    }

    pub fn with_sink(level: &str, sink: impl Sink + 'static) -> Self {
        Self {
            level: Level::from_label(level),
            destination: Console { sink: Arc::new(sink) },
        }
    }
}

impl Default for Logger<Console> {
    fn default() -> Self {
        Self::new(Level::Debug.as_ref())
    }
}

impl Logger<LogFile> {
    /// The destination is not touched until the first record is written.
    pub fn new(destination: impl Into<PathBuf>, level: &str) -> Self {
        Self {
            level: Level::from_label(level),
            destination: LogFile { path: destination.into() },
        }
    }

    pub fn path(&self) -> &Path {
        &self.destination.path
    }
}

impl<D: Destination> Logger<D> {
    pub fn level(&self) -> Level {
        self.level
    }

    /// Emits `message` at `level` through the channel named after `site`.
    ///
    /// The `logger_*!` macros call this with a site that includes the
    /// enclosing function name.
    pub fn log_at(&self, site: CallSite, level: Level, message: impl Into<Message>) -> Result<()> {
        let body = message.into().render();
        let channel = channel(&self.destination.channel_name(&site));
        channel.set_threshold(self.level);
        self.destination.emit(&channel, level, &body)
    }

    /// Routine name renders as `<unknown>`; see [`Logger::log_at`].
    #[track_caller]
    pub fn log(&self, level: Level, message: impl Into<Message>) -> Result<()> {
        self.log_at(CallSite::caller(), level, message)
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<Message>) -> Result<()> {
        self.log_at(CallSite::caller(), Level::Debug, message)
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<Message>) -> Result<()> {
        self.log_at(CallSite::caller(), Level::Info, message)
    }

    #[track_caller]
    pub fn warning(&self, message: impl Into<Message>) -> Result<()> {
        self.log_at(CallSite::caller(), Level::Warning, message)
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<Message>) -> Result<()> {
        self.log_at(CallSite::caller(), Level::Error, message)
    }

    #[track_caller]
    pub fn critical(&self, message: impl Into<Message>) -> Result<()> {
        self.log_at(CallSite::caller(), Level::Critical, message)
    }
}
