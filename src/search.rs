use std::process::{Command, Stdio};

use log::debug;

use crate::errors::{AppError, Result};

/// Locates a named target, e.g. an executable on `PATH`.
pub trait Searcher {
    /// Candidate locations for `query`, in the order the tool reported them.
    /// Never returns an empty list: "nothing found" is `SearchNotFound`.
    fn search(&self, query: &str) -> Result<Vec<String>>;
}

/// Runs an external `where`/`which`-style program with the query appended.
pub struct CommandSearcher {
    command: Vec<String>,
}

impl CommandSearcher {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl Searcher for CommandSearcher {
    fn search(&self, query: &str) -> Result<Vec<String>> {
        let Some((program, args)) = self.command.split_first() else {
            return Err(AppError::Config("search_command is empty".to_owned()));
        };
        debug!("searching: {program} {} {query}", args.join(" "));

        let output = Command::new(program)
            .args(args)
            .arg(query)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                debug!("failed to spawn '{program}': {e}");
                AppError::SearchNotFound(query.to_owned())
            })?;

        if !output.status.success() {
            debug!(
                "search exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Err(AppError::SearchNotFound(query.to_owned()));
        }

        let candidates = parse_candidates(&String::from_utf8_lossy(&output.stdout));
        debug!("search returned {} candidate(s)", candidates.len());
        if candidates.is_empty() {
            return Err(AppError::SearchNotFound(query.to_owned()));
        }
        Ok(candidates)
    }
}

/// One candidate per non-blank line, trimmed, first occurrence kept.
pub fn parse_candidates(stdout: &str) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    for line in stdout.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if !candidates.iter().any(|c| c == line) {
            candidates.push(line.to_owned());
        }
    }
    candidates
}
