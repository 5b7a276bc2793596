//! Rendering a resolved path into the text that is printed and copied.
//!
//! Steps always run in the same order: separators, then backslash escaping,
//! then quote wrapping.

use std::path::{Path, MAIN_SEPARATOR};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Forward slashes regardless of platform.
    pub posix: bool,
    pub escape_backslash: bool,
    pub wrap_quote: bool,
}

pub fn render(path: &Path, opts: &FormatOptions) -> String {
    render_native(&path.to_string_lossy(), opts)
}

/// Same as [`render`], starting from the native string form of a path.
pub fn render_native(native: &str, opts: &FormatOptions) -> String {
    let mut out = if opts.posix && MAIN_SEPARATOR != '/' {
        native.replace(MAIN_SEPARATOR, "/")
    } else {
        native.to_owned()
    };
    if opts.escape_backslash {
        out = out.replace('\\', "\\\\");
    }
    if opts.wrap_quote {
        out = format!("\"{out}\"");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const NATIVE: FormatOptions = FormatOptions {
        posix: false,
        escape_backslash: false,
        wrap_quote: false,
    };

    #[test]
    fn test_no_flags_returns_native_string() {
        let path = std::env::temp_dir().join("some").join("file.txt");
        assert_eq!(render(&path, &NATIVE), path.to_string_lossy());
    }

    #[test]
    fn test_posix_on_unix_is_unchanged() {
        let opts = FormatOptions {
            posix: true,
            ..NATIVE
        };
        if cfg!(unix) {
            assert_eq!(render(Path::new("/home/u/subdir"), &opts), "/home/u/subdir");
        } else {
            assert_eq!(render(&PathBuf::from(r"C:\Users\u"), &opts), "C:/Users/u");
        }
    }

    #[test]
    fn test_quote_and_escape() {
        let opts = FormatOptions {
            posix: false,
            escape_backslash: true,
            wrap_quote: true,
        };
        assert_eq!(render_native(r"C:\Users\u", &opts), r#""C:\\Users\\u""#);
    }

    #[test]
    fn test_escape_doubles_backslash_count() {
        let opts = FormatOptions {
            escape_backslash: true,
            ..NATIVE
        };
        for s in [r"", r"\", r"a\b\\c", r"\\server\share\", "no slashes", r"\\\"] {
            let before = s.matches('\\').count();
            let after = render_native(s, &opts).matches('\\').count();
            assert_eq!(after, before * 2, "input {s:?}");
        }
    }

    #[test]
    fn test_quote_only_wraps() {
        let opts = FormatOptions {
            wrap_quote: true,
            ..NATIVE
        };
        assert_eq!(render_native("/tmp/a b", &opts), "\"/tmp/a b\"");
    }

    #[test]
    fn test_escape_runs_before_quote() {
        // Quoting after escaping must not touch the quote characters.
        let opts = FormatOptions {
            posix: false,
            escape_backslash: true,
            wrap_quote: true,
        };
        let out = render_native(r"a\b", &opts);
        assert!(out.starts_with('"') && out.ends_with('"'));
        assert_eq!(&out[1..out.len() - 1], r"a\\b");
    }
}
