//! # Tasktally
//!
//! A small terminal to-do list for a single working session. Add tasks,
//! complete or remove them, and keep an eye on a progress chart while you go.
//!
//! ## Features
//!
//! *   **Session list**: tasks are kept in memory and discarded on exit.
//! *   **Timestamps**: every task records when it was added and when it was
//!     completed, shown as `YYYY-MM-DD HH:MM:SS`.
//! *   **History**: completed tasks stay visible in their own page.
//! *   **Progress chart**: completed versus remaining tasks as two bars.
//! *   **Two front ends**:
//!     *   **TUI**: interactive pages for the list, the history and an about screen.
//!     *   **Shell**: a line-oriented prompt for scripting or plain terminals.
//!
//! ## Usage
//!
//! ```bash
//! tasktally          # open the TUI
//! tasktally shell    # line-oriented session
//! tasktally about
//! tasktally completions zsh
//! ```
//!
//! #### TUI Key Bindings
//!
//! *   `Tab` / `Shift-Tab` or `1` `2` `3`: switch page
//! *   `a`: Add new task
//! *   `Space` / `c`: Mark selected task as completed
//! *   `d`: Remove selected task
//! *   `C`: Clear all tasks (history is kept)
//! *   `q`: Quit
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/tasktally/config.json` (or the path in
//! `TASKTALLY_CONFIG`, or `--config`). Logging is controlled by
//! `TASKTALLY_LOG` or the `log_filter` key.

use std::io;
use std::path::PathBuf;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tasktally::commands::cmd_about;
use tasktally::config::{load_config, Config};
use tasktally::logging::{self, LogTarget};
use tasktally::shell::run_shell;
use tasktally::tui::run_tui;

#[derive(Parser)]
#[command(name = "tasktally")]
#[command(about = "Session to-do list with a progress chart", long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open interactive TUI
    Ui,
    /// Start a line-oriented session on stdin
    Shell,
    /// Describe the app
    About,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}

fn init_logging(target: LogTarget<'_>, config: &Config) {
    if let Err(e) = logging::init(target, config.log_filter.as_deref()) {
        eprintln!("Logging disabled: {}", e);
    }
}

fn main() {
    let cli = Cli::parse();
    let (config, config_err) = load_config(cli.config.as_deref());
    if let Some(e) = &config_err {
        eprintln!("Using default settings: {}", e);
    }

    match cli.command {
        Some(Commands::Shell) => {
            init_logging(LogTarget::Stderr, &config);
            if let Err(e) = run_shell(config) {
                eprintln!("Error running shell: {}", e);
            }
        }
        Some(Commands::About) => cmd_about(),
        Some(Commands::Completions { shell }) => {
            let shell_enum = match shell.as_str() {
                "bash" => Shell::Bash,
                "zsh" => Shell::Zsh,
                "fish" => Shell::Fish,
                "powershell" => Shell::PowerShell,
                "elvish" => Shell::Elvish,
                _ => {
                    eprintln!("Unsupported shell: {}", shell);
                    return;
                }
            };
            let mut cmd = Cli::command();
            generate(shell_enum, &mut cmd, "tasktally", &mut io::stdout());
        }
        Some(Commands::Ui) | None => {
            // The TUI owns the terminal, so it only logs to a file.
            if let Some(path) = config.log_file.clone() {
                init_logging(LogTarget::File(&path), &config);
            }
            if let Err(e) = run_tui(config) {
                eprintln!("Error running TUI: {}", e);
            }
        }
    }
}
