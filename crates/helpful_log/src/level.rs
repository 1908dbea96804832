use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Severity of a record, ordered from most to least verbose.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Level {
    #[default]
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// Maps a configuration label onto a level.
    ///
    /// Only the exact upper-case labels are recognised. Anything else falls
    /// back to [`Level::Debug`], the most permissive threshold.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    /// Whether a record at this level passes a channel set to `threshold`.
    pub fn enabled(self, threshold: Level) -> bool {
        self >= threshold
    }
}
