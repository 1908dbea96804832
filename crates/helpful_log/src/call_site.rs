use std::panic::Location;
use std::path::Path;

const UNKNOWN_ROUTINE: &str = "<unknown>";

/// Source location a logging operation was invoked from.
///
/// Built fresh for every call and only used to name the channel the record
/// goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub function: Option<&'static str>,
}

impl CallSite {
    pub fn new(file: &'static str, line: u32, function: Option<&'static str>) -> Self {
        Self { file, line, function }
    }

    /// Location of whoever called the enclosing `#[track_caller]` function.
    ///
    /// The routine name is not recoverable this way; use [`call_site!`] when
    /// it matters.
    ///
    /// [`call_site!`]: crate::call_site
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line(), None)
    }

    pub fn function(&self) -> &'static str {
        self.function.unwrap_or(UNKNOWN_ROUTINE)
    }

    /// Final component of the source path.
    pub fn base_name(&self) -> &'static str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }

    /// Directory of the source path joined back with its base name.
    pub fn qualified_file(&self) -> String {
        match Path::new(self.file).parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                dir.join(self.base_name()).display().to_string()
            }
            _ => self.base_name().to_string(),
        }
    }

    /// Channel identifier for this site, with `file` standing in for the
    /// source path.
    pub fn channel_name(&self, file: &str) -> String {
        format!(
            "Location >> {}:{}, function/method name: \"{}\"",
            file,
            self.line,
            self.function()
        )
    }
}

/// Reduces a fully qualified item path to the name of the routine that
/// contains it. Closure and async-block frames resolve to their parent.
#[doc(hidden)]
pub fn routine_name(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::__here").unwrap_or(path);
    while let Some(parent) = path.strip_suffix("::{{closure}}") {
        path = parent;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Captures the current file, line, and enclosing function as a [`CallSite`].
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(
            ::std::file!(),
            ::std::line!(),
            ::std::option::Option::Some($crate::__routine_name!()),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __routine_name {
    () => {{
        fn __here() {}
        $crate::call_site::routine_name(::std::any::type_name_of_val(&__here))
    }};
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_macro_captures_enclosing_function() {
        let actual = crate::call_site!();
        assert_eq!(actual.function(), "test_macro_captures_enclosing_function");
        assert_eq!(actual.line, line!() - 2);
        assert_eq!(actual.base_name(), "call_site.rs");
    }

    #[test]
    fn test_macro_inside_closure_reports_parent() {
        let site = || crate::call_site!();
        let actual = site();
        assert_eq!(actual.function(), "test_macro_inside_closure_reports_parent");
    }

    #[test]
    fn test_caller_reports_invoking_line() {
        #[track_caller]
        fn locate() -> CallSite {
            CallSite::caller()
        }

        let expected = line!() + 1;
        let actual = locate();
        assert_eq!(actual.line, expected);
        assert_eq!(actual.function(), "<unknown>");
        assert_eq!(actual.base_name(), "call_site.rs");
    }

    #[test]
    fn test_channel_name_format() {
        let fixture = CallSite::new("src/pkg/a.rs", 10, Some("f"));
        let actual = fixture.channel_name(fixture.base_name());
        let expected = "Location >> a.rs:10, function/method name: \"f\"";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_qualified_file_keeps_directory() {
        let fixture = CallSite::new("src/pkg/a.rs", 1, None);
        let expected = Path::new("src/pkg").join("a.rs").display().to_string();
        assert_eq!(fixture.qualified_file(), expected);

        let bare = CallSite::new("a.rs", 1, None);
        assert_eq!(bare.qualified_file(), "a.rs");
    }

    #[test]
    fn test_routine_name_strips_closures_and_paths() {
        assert_eq!(routine_name("my_crate::module::run::__here"), "run");
        assert_eq!(
            routine_name("my_crate::Worker::step::{{closure}}::{{closure}}::__here"),
            "step"
        );
        assert_eq!(routine_name("main::__here"), "main");
    }
}
