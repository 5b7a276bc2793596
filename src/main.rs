mod app;
mod cli;
mod clipboard;
mod config;
mod errors;
mod format;
mod options;
mod report;
mod resolve;
mod search;
mod select;
mod terminal;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::debug;

use app::Collaborators;
use cli::Cli;
use clipboard::serve::SERVE_ARG;
use clipboard::SystemClipboard;
use errors::{EXIT_FAILURE, EXIT_USAGE};
use options::Options;
use report::Reporter;
use search::CommandSearcher;
use select::DialoguerSelector;
use terminal::SystemKeystrokes;

fn main() -> ExitCode {
    // Fast path: the clipboard server needs no config or argument parsing.
    if std::env::args().nth(1).as_deref() == Some(SERVE_ARG) {
        return match clipboard::serve::run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::from(EXIT_FAILURE),
        };
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();
    debug!("here starting");

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let silent = cli.silent;
    let (options, cwd) = match setup(cli) {
        Ok(ready) => ready,
        Err(e) => {
            if !silent {
                eprintln!("error: {e:#}");
            }
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let mut reporter = Reporter::stdio(options.verbosity, !options.no_color);
    let searcher = CommandSearcher::new(options.search_command.clone());
    let mut clipboard = SystemClipboard;
    let mut keystrokes = SystemKeystrokes::default();
    let mut deps = Collaborators {
        searcher: &searcher,
        selector: &DialoguerSelector,
        clipboard: &mut clipboard,
        keystrokes: &mut keystrokes,
    };

    let code = match app::run(&options, &cwd, &mut deps, &mut reporter) {
        Ok(rendered) => {
            debug!("done: {rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("failed: {e}");
            reporter.failure(&e);
            ExitCode::from(e.exit_code())
        }
    };
    if let Err(e) = reporter.flush() {
        debug!("failed to flush output: {e}");
    }
    code
}

fn setup(cli: Cli) -> anyhow::Result<(Options, std::path::PathBuf)> {
    let config = config::load_config(cli.config.as_deref()).context("failed to load config")?;
    debug!("config loaded: {config:?}");

    let options = Options::new(cli, &config);
    debug!("options: {options:?}");

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok((options, cwd))
}
