use crate::cli::Cli;
use crate::config::Config;
use crate::format::FormatOptions;

/// The "no argument" segment: the cwd itself.
pub const DEFAULT_SEGMENT: &str = ".";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Silent,
    Normal,
    Verbose,
}

/// Everything one invocation needs, built once from the command line and config.
#[derive(Debug, Clone)]
pub struct Options {
    pub segment: String,
    pub search_mode: bool,
    pub folder_mode: bool,
    pub change_dir_mode: bool,
    pub escape_backslash: bool,
    pub wrap_quote: bool,
    pub no_copy: bool,
    pub no_color: bool,
    pub posix_style: bool,
    pub verbosity: Verbosity,
    pub search_command: Vec<String>,
}

impl Options {
    pub fn new(cli: Cli, config: &Config) -> Self {
        let posix_style = cli
            .posix_override()
            .or(config.posix)
            .unwrap_or(cfg!(unix));
        let verbosity = if cli.silent {
            Verbosity::Silent
        } else if cli.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        let no_color = cli.no_color || !config.color || no_color_env();

        Self {
            segment: cli.segment,
            search_mode: cli.from_where,
            folder_mode: cli.folder,
            change_dir_mode: cli.change_directory,
            escape_backslash: cli.escape_backslash,
            wrap_quote: cli.wrap_quote,
            no_copy: cli.no_copy || !config.copy,
            no_color,
            posix_style,
            verbosity,
            search_command: config.search_command.clone(),
        }
    }

    pub fn format(&self) -> FormatOptions {
        FormatOptions {
            posix: self.posix_style,
            escape_backslash: self.escape_backslash,
            wrap_quote: self.wrap_quote,
        }
    }
}

/// https://no-color.org: any non-empty value disables color.
fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
impl Options {
    /// Plain invocation with every flag off.
    pub fn for_segment(segment: &str) -> Self {
        Self {
            segment: segment.to_owned(),
            search_mode: false,
            folder_mode: false,
            change_dir_mode: false,
            escape_backslash: false,
            wrap_quote: false,
            no_copy: false,
            no_color: true,
            posix_style: cfg!(unix),
            verbosity: Verbosity::Normal,
            search_command: Config::default().search_command,
        }
    }
}
