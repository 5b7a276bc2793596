use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::errors::{AppError, Result};
use crate::options::{Options, DEFAULT_SEGMENT};
use crate::search::Searcher;
use crate::select::Selector;

/// Outcome of path resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub path: PathBuf,
    /// The search candidate that was used, when resolved through search.
    pub found: Option<String>,
}

/// Resolve the invocation's segment, either by joining it with `cwd` or by
/// asking `searcher` for it. Exactly one of the two runs.
pub fn resolve(
    options: &Options,
    cwd: &Path,
    searcher: &dyn Searcher,
    selector: &dyn Selector,
) -> Result<Resolution> {
    if !options.search_mode {
        return Ok(Resolution {
            path: absolutize(cwd, Path::new(&options.segment)),
            found: None,
        });
    }

    if options.segment == DEFAULT_SEGMENT {
        return Err(AppError::InvalidSearchTarget(options.segment.clone()));
    }

    let mut candidates = searcher.search(&options.segment)?;
    let chosen = match candidates.len() {
        0 => return Err(AppError::SearchNotFound(options.segment.clone())),
        1 => candidates.remove(0),
        n => {
            debug!("{n} candidates for '{}', prompting", options.segment);
            let index = selector.select(&candidates)?;
            if index >= n {
                return Err(AppError::SelectionCancelled);
            }
            candidates.swap_remove(index)
        }
    };

    Ok(Resolution {
        path: absolutize(cwd, Path::new(&chosen)),
        found: Some(chosen),
    })
}

/// Absolute, symlink-resolved form of `cwd.join(path)`.
///
/// Works for paths that do not exist: every prefix that exists is
/// canonicalized, missing components are appended as-is, `.` is dropped and
/// `..` pops a component. A `..` that climbs out of a missing component lands
/// back on disk, so links after it are still followed.
pub fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    let joined = cwd.join(path);
    let mut resolved = PathBuf::new();

    for component in joined.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                if let Ok(canonical) = std::fs::canonicalize(&resolved) {
                    resolved = strip_verbatim(canonical);
                }
            }
        }
    }
    resolved
}

/// Parent directory if `path` is not a directory, `None` if it is unchanged.
///
/// Missing paths count as "not a directory". A root has no parent and is kept.
pub fn reduce_to_folder(path: &Path) -> Option<PathBuf> {
    if path.is_dir() {
        return None;
    }
    path.parent().map(Path::to_path_buf)
}

// `canonicalize` returns `\\?\C:\...` and `\\?\UNC\server\share\...` on
// Windows; keep the plain drive and UNC forms.
#[cfg(windows)]
fn strip_verbatim(path: PathBuf) -> PathBuf {
    match path.to_str().and_then(plain_form) {
        Some(plain) => PathBuf::from(plain),
        None => path,
    }
}

#[cfg(not(windows))]
fn strip_verbatim(path: PathBuf) -> PathBuf {
    path
}

/// Non-verbatim spelling of a `\\?\` path, if it has one.
#[cfg_attr(not(windows), allow(dead_code))]
fn plain_form(text: &str) -> Option<String> {
    let rest = text.strip_prefix(r"\\?\")?;
    if let Some(unc) = rest.strip_prefix(r"UNC\") {
        return Some(format!(r"\\{unc}"));
    }
    (rest.as_bytes().get(1) == Some(&b':')).then(|| rest.to_owned())
}
