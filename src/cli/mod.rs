use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "here",
    version,
    about = "Copy 'here' path to clipboard",
    disable_version_flag = true
)]
pub struct Cli {
    /// Relative path to join with the current working directory (search term with -w)
    #[arg(default_value = ".")]
    pub segment: String,

    /// Reduce the result to its enclosing folder if it is not a directory
    #[arg(short, long)]
    pub folder: bool,

    /// Locate the segment with `where`/`which` instead of joining it with the cwd
    #[arg(short = 'w', long)]
    pub from_where: bool,

    /// Type a `cd` into the result in the active terminal
    #[arg(short = 'd', long)]
    pub change_directory: bool,

    /// Double every backslash in the output
    #[arg(short, long)]
    pub escape_backslash: bool,

    /// Wrap the output in double quotes
    #[arg(short = 'q', long)]
    pub wrap_quote: bool,

    /// Do not copy the result to the clipboard
    #[arg(short, long)]
    pub no_copy: bool,

    /// Disable colored output
    #[arg(short = 'c', long)]
    pub no_color: bool,

    /// Use forward slashes as separators
    #[arg(long, overrides_with = "no_posix")]
    pub posix: bool,

    /// Use the platform's native separator
    #[arg(long, overrides_with = "posix")]
    pub no_posix: bool,

    /// Narrate every step
    #[arg(long, conflicts_with = "silent")]
    pub verbose: bool,

    /// Print nothing, not even errors
    #[arg(long)]
    pub silent: bool,

    /// Path to config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

impl Cli {
    /// Explicit separator choice from `--posix`/`--no-posix`, if any.
    pub fn posix_override(&self) -> Option<bool> {
        match (self.posix, self.no_posix) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
