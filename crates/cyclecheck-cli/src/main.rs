mod cli;
mod cmd;
mod error;
mod format;
mod io;
mod logging;

use clap::Parser;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use error::CliError;
use format::FormatterConfig;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        if let Some(msg) = e.message() {
            eprintln!("{msg}");
        }
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = FormatterConfig::from_flags(cli.format, cli.no_color, cli.quiet, cli.verbose);

    match &cli.command {
        Command::Check { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::check::run(&content, &config)
        }
        Command::Eval { from, to } => cmd::eval::run(from, to, &config),
        Command::Showcase => cmd::showcase::run(&config),
    }
}
