use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use todo::config::{Config, DIR_ENV};
use todo::error::{Result, TodoError};
use todo::output::Format;

#[derive(Parser)]
#[command(name = "todo", version, about = "Menu-driven to-do list in the terminal")]
struct Cli {
    /// Directory holding the `tasks` file (falls back to $GOPATH)
    #[arg(long, global = true, env = DIR_ENV)]
    dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty task file
    Init,
    /// Print the task list sorted by due date and exit
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "pretty")]
        format: Format,
    },
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.dir)?;
    let tasks_path = config.tasks_path();

    match cli.command {
        None => todo::commands::session::run(&tasks_path),
        Some(Commands::Init) => todo::commands::init::run(&tasks_path),
        Some(Commands::List { format }) => todo::commands::list::run(&tasks_path, format),
    }
}

fn main() -> ExitCode {
    todo::logging::init();

    let matches = Cli::command()
        .long_version(todo::build_info::long_version())
        .get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    match run(cli) {
        Ok(()) | Err(TodoError::Aborted) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.code(), "exiting with error");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
