use std::io;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use taskline::cli::args::Cli;
use taskline::cli::repl::Session;
use taskline::config::{Config, Paths};
use taskline::error::TasklineError;
use taskline::storage::TaskFile;
use taskline::task::TaskList;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TasklineError> {
    let cli = Cli::parse();
    let config = Config::load()?;
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);
    let data_file = match cli.data_file.or_else(|| config.general.data_file.clone()) {
        Some(path) => path,
        None => {
            let paths = Paths::new()?;
            paths.ensure_dirs()?;
            paths.data_file
        }
    };

    let file = TaskFile::new(data_file);
    let outcome = file.load()?;
    for (number, error) in &outcome.skipped {
        eprintln!(
            "{}: skipped line {} of {}: {}",
            "warning".yellow().bold(),
            number,
            file.path().display(),
            error
        );
    }

    let mut session = Session::new(TaskList::from_tasks(outcome.tasks), file, format);
    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout())
}
