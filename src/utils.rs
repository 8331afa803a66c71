//! Utility functions for error reporting and log file handling.

use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io;

/// Render an error and every `source()` beneath it, one per line.
///
/// Used by the top-level handler so the log carries the whole cause chain
/// rather than only the outermost message.
///
/// # Examples
///
/// ```ignore
/// // "failed to parse feed: unexpected end of input\n  caused by: ..."
/// let text = error_chain(&*err);
/// ```
pub fn error_chain(e: &(dyn Error + 'static)) -> String {
    let mut out = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        out.push_str("\n  caused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

/// Open `path` for appending, creating it if needed.
pub fn open_append(path: &str) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::io::Write;

    #[derive(Debug)]
    struct Outer(io::Error);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "save failed")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_error_chain_single() {
        let e: Box<dyn Error> = "boom".into();
        assert_eq!(error_chain(&*e), "boom");
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let e = Outer(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        assert_eq!(error_chain(&e), "save failed\n  caused by: read-only");
    }

    #[test]
    fn test_open_append_keeps_existing_content() {
        let path = std::env::temp_dir().join(format!("feed_news_append_{}.log", std::process::id()));
        let path_str = path.to_str().unwrap();
        std::fs::write(&path, "first\n").unwrap();

        let mut file = open_append(path_str).unwrap();
        file.write_all(b"second\n").unwrap();
        drop(file);

        let raw = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(raw, "first\nsecond\n");
    }
}
