use serde::Deserialize;

/// Search program used when the config does not name one.
#[cfg(windows)]
const DEFAULT_SEARCH_PROGRAM: &str = "where";
#[cfg(not(windows))]
const DEFAULT_SEARCH_PROGRAM: &str = "which";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Program plus leading arguments; the search term is appended.
    pub search_command: Vec<String>,
    pub color: bool,
    /// Separator style when neither `--posix` nor `--no-posix` is given.
    pub posix: Option<bool>,
    pub copy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_command: vec![DEFAULT_SEARCH_PROGRAM.to_owned()],
            color: true,
            posix: None,
            copy: true,
        }
    }
}

impl Config {
    /// Validate configuration values.
    /// Returns `Ok(())` if valid, or `Err` with a list of error messages.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match self.search_command.first() {
            None => errors.push("search_command must not be empty".to_owned()),
            Some(program) if program.trim().is_empty() => {
                errors.push("search_command program name must not be blank".to_owned());
            }
            Some(_) => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
