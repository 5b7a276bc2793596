use std::io::Write;
use std::path::Path;

use crate::clipboard::ClipboardSink;
use crate::errors::Result;
use crate::format;
use crate::options::Options;
use crate::report::Reporter;
use crate::resolve;
use crate::search::Searcher;
use crate::select::Selector;
use crate::terminal::{self, Keystrokes};

/// External side effects of one invocation.
pub struct Collaborators<'a> {
    pub searcher: &'a dyn Searcher,
    pub selector: &'a dyn Selector,
    pub clipboard: &'a mut dyn ClipboardSink,
    pub keystrokes: &'a mut dyn Keystrokes,
}

/// Resolve, render, report, copy and optionally `cd`. Returns the rendered path.
pub fn run<O: Write, E: Write>(
    options: &Options,
    cwd: &Path,
    deps: &mut Collaborators<'_>,
    reporter: &mut Reporter<O, E>,
) -> Result<String> {
    let resolution = resolve::resolve(options, cwd, deps.searcher, deps.selector)?;
    let mut path = resolution.path;

    if let Some(found) = &resolution.found {
        let message = format!("Found {}", reporter.em(found));
        reporter.info(&message);
    }

    if options.folder_mode {
        if let Some(parent) = resolve::reduce_to_folder(&path) {
            let message = format!(
                "Removed file component {}",
                reporter.em(&path.file_name().unwrap_or_default().to_string_lossy())
            );
            reporter.info(&message);
            path = parent;
        }
    }

    let rendered = format::render(&path, &options.format());

    if reporter.is_verbose() {
        let styled = reporter.styled_path(&rendered);
        let message = if options.no_copy {
            format!("Not copying to clipboard {}", reporter.em("(--no-copy)"))
        } else {
            format!("Copying to clipboard: {styled}")
        };
        reporter.info(&message);
    }
    reporter.path(&rendered)?;

    if !options.no_copy {
        deps.clipboard.copy_text(&rendered)?;
    }

    if options.change_dir_mode {
        if path.is_dir() {
            let message = format!("Preparing {}...", reporter.em(&terminal::cd_command(&path)));
            reporter.info(&message);
        }
        // Our own output must be on screen before keystrokes land in the terminal.
        reporter.flush()?;
        terminal::change_directory(deps.keystrokes, &path)?;
    }

    Ok(rendered)
}
