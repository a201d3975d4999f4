use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use scratchpad::{commands, diagnostics};

#[derive(Parser)]
#[command(name = "scratchpad", about = "Scratch pad for code snippets with clickable path:line references")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy file selections into a scratch pane and print it
    Copy {
        /// Selections as `path:line` or `path:start-end` (one-based, inclusive)
        #[arg(required = true)]
        selections: Vec<String>,
        /// Replay a click at this character offset
        #[arg(long = "click")]
        clicks: Vec<usize>,
        /// Replay a pointer move to this character offset
        #[arg(long = "hover")]
        hovers: Vec<usize>,
        /// Print a JSON report instead of the rendered pane
        #[arg(long)]
        json: bool,
    },
    /// Resolve a character offset to the link covering it
    Hit {
        /// Character offset into the text
        offset: usize,
        /// Text file to index (stdin when omitted)
        file: Option<PathBuf>,
        /// Also navigate to the link
        #[arg(long)]
        open: bool,
    },
    /// List every path:line link in a text
    Links {
        /// Text file to index (stdin when omitted)
        file: Option<PathBuf>,
        /// Print links as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Copy { selections, clicks, hovers, json } => {
            commands::copy(&selections, &hovers, &clicks, json).map(|()| return ExitCode::SUCCESS)
        },
        Commands::Hit { offset, file, open } => commands::hit(offset, file.as_deref(), open),
        Commands::Links { file, json } => {
            commands::links(file.as_deref(), json).map(|()| return ExitCode::SUCCESS)
        },
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::from(2)
        },
    }
}
