use std::io::{self, BufRead, Write};
use clap::{Parser, Subcommand};
use crate::commands::*;
use crate::config::Config;
use crate::store::TaskStore;

/// One line typed into the shell.
#[derive(Parser, Debug, PartialEq)]
#[command(name = "tasktally", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ShellCommand {
    /// Add a new task
    #[command(disable_help_flag = true)]
    Add {
        /// Task description
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Mark the task at a list position as complete
    Complete {
        /// Row number from `list`
        #[arg(allow_hyphen_values = true)]
        position: i64,
    },
    /// Remove the task at a list position
    Remove {
        /// Row number from `list`
        #[arg(allow_hyphen_values = true)]
        position: i64,
    },
    /// Clear all tasks (history is kept)
    Clear,
    /// Show the task list
    List,
    /// Show completed tasks
    History,
    /// Show the progress chart
    Chart,
    /// Print the session as JSON
    Export,
    /// About this app
    About,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// A line-oriented session over one in-memory store.
pub struct Shell {
    pub store: TaskStore,
    pub config: Config,
}

impl Shell {
    pub fn new(store: TaskStore, config: Config) -> Shell {
        Shell { store, config }
    }

    /// Runs one input line. Returns `false` once the session should end.
    pub fn handle_line(&mut self, line: &str) -> bool {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            return true;
        }
        match ShellLine::try_parse_from(tokens) {
            Ok(parsed) => self.execute(parsed.command),
            Err(e) => {
                let _ = e.print();
                true
            }
        }
    }

    /// Applies a parsed command. Returns `false` for `quit`.
    pub fn execute(&mut self, command: ShellCommand) -> bool {
        tracing::debug!(?command, "shell command");
        match command {
            ShellCommand::Add { words } => cmd_add(&mut self.store, &words.join(" "), false),
            ShellCommand::Complete { position } => cmd_complete(&mut self.store, position, false),
            ShellCommand::Remove { position } => cmd_remove(&mut self.store, position, false),
            ShellCommand::Clear => cmd_clear(&mut self.store, false),
            ShellCommand::List => cmd_list(&self.store),
            ShellCommand::History => cmd_history(&self.store),
            ShellCommand::Chart => cmd_chart(&self.store, &self.config),
            ShellCommand::Export => cmd_export(&self.store),
            ShellCommand::About => cmd_about(),
            ShellCommand::Quit => return false,
        }
        true
    }

    /// Reads commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        println!("Type 'help' for commands, 'quit' to leave. Tasks are not saved.");
        let mut lines = input.lines();
        loop {
            print!("> ");
            io::stdout().flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };
            if !self.handle_line(&line) {
                break;
            }
        }
        tracing::info!(
            active = self.store.active().len(),
            completed = self.store.completed().len(),
            "shell session ended"
        );
        Ok(())
    }
}

/// Starts an interactive shell on stdin.
pub fn run_shell(config: Config) -> io::Result<()> {
    tracing::info!("shell session started");
    let mut shell = Shell::new(TaskStore::new(), config);
    shell.run(io::stdin().lock())
}
