use std::io::{self, IsTerminal};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use todo_core::{TodoApi, TodoClient};
use tracing::info;

mod args;
mod display;
mod error;
mod input;
mod logging;
mod transport;

use args::{Args, Command};
use error::CliError;
use transport::UreqTransport;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let api = TodoApi::new(
        TodoClient::new(&args.url),
        UreqTransport::new(args.timeout.map(Duration::from_secs)),
    );

    match args.command() {
        Command::Add(words) => {
            let task = input::read_task(io::stdin().lock(), &words)?;
            api.add(&task)?;
            info!(task, "added todo");
        }
        Command::Complete(position) => match api.complete(position)? {
            Some(todo) => info!(position, id = %todo.id, "completed todo"),
            None => info!(position, "no todo at position"),
        },
        Command::Delete(position) => match api.delete(position)? {
            Some(todo) => info!(position, id = %todo.id, "deleted todo"),
            None => info!(position, "no todo at position"),
        },
        Command::List => {
            let todos = api.list()?;
            println!("{}", display::render(&todos, io::stdout().is_terminal()));
        }
        Command::Invalid => println!("invalid command"),
    }
    Ok(())
}
