//! Console front end
//!
//! Thin wrapper around the command pipeline: print a prompt, read one
//! line, run fetch -> execute -> outcome, and render the outcome framed
//! by divider lines. The loop stays alive across any single command's
//! failure and stops on the exit command or end of input.

use std::io::{self, BufRead, Write};
use tracing::info;

use crate::command::{Command, CommandRegistry, Outcome};
use crate::task::TaskList;

const LINE_PREFIX: &str = "> ";
const LINE_DIVIDER: &str =
    "--------------------------------------------------------------------";
const LINE_INDENT: &str = "    ";

const BANNER: &str = r"
  _            _    _ _
 | |_ __ _ ___| | _| (_)_ __   ___
 | __/ _` / __| |/ / | | '_ \ / _ \
 | || (_| \__ \   <| | | | | |  __/
  \__\__,_|___/_|\_\_|_|_| |_|\___|
";

pub struct ConsoleUi {
    registry: CommandRegistry,
    tasks: TaskList,
}

impl ConsoleUi {
    pub fn new(registry: CommandRegistry, tasks: TaskList) -> Self {
        Self { registry, tasks }
    }

    /// Print the banner and welcome message.
    pub fn greet(&self) {
        println!("{BANNER}");
        self.display(&Outcome::Success(vec![
            "Hello! What needs doing?".to_string(),
        ]));
    }

    /// Read and handle lines until the exit command or end of input.
    pub fn run_loop(&mut self) -> io::Result<()> {
        info!("console loop started");
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        loop {
            write!(stdout, "{LINE_PREFIX}")?;
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            if self.handle_line(line.trim_end_matches(['\r', '\n'])) {
                break;
            }
        }
        info!("console loop finished");
        Ok(())
    }

    /// Dispatch one input line and render its outcome. Returns true when
    /// the loop should stop.
    pub fn handle_line(&mut self, line: &str) -> bool {
        match self.registry.fetch(line) {
            Ok(command) => {
                let command = CommandRegistry::execute(command, &mut self.tasks);
                if command.is_none() {
                    // Blank input: nothing happened, print nothing.
                    return false;
                }
                self.display(&CommandRegistry::outcome_of(command.as_ref()));
                command.as_ref().is_some_and(Command::requests_exit)
            }
            Err(err) => {
                self.display(&Outcome::Error(err));
                false
            }
        }
    }

    fn display(&self, outcome: &Outcome) {
        println!("{LINE_DIVIDER}");
        match outcome.lines() {
            Ok(lines) => {
                for line in lines {
                    println!("{LINE_INDENT}{line}");
                }
            }
            Err(err) => println!("{LINE_INDENT}{err}"),
        }
        println!("{LINE_DIVIDER}");
        println!();
    }
}
