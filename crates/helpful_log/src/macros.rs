//! Logging macros that record the enclosing function along with file and
//! line.
//!
//! ```rust,ignore
//! let log = StreamLogger::new("INFO");
//! logger_info!(log, "copied {} files", count)?;
//! logger_warning!(log, ("a", "b"))?;
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $level:expr, $fmt:literal, $($arg:tt)+) => {
        $logger.log_at(
            $crate::call_site!(),
            $level,
            $crate::Message::text(::std::format!($fmt, $($arg)+)),
        )
    };
    ($logger:expr, $level:expr, $msg:expr $(,)?) => {
        $logger.log_at($crate::call_site!(), $level, $msg)
    };
}

#[macro_export]
macro_rules! logger_debug {
    ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! logger_info {
    ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! logger_warning {
    ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::Level::Warning, $($arg)+) };
}

#[macro_export]
macro_rules! logger_error {
    ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::Level::Error, $($arg)+) };
}

#[macro_export]
macro_rules! logger_critical {
    ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::Level::Critical, $($arg)+) };
}
