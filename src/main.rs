use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};
use tracing_subscriber::EnvFilter;

use contact_book::cli::{commands_help, Repl};
use contact_book::config::settings::{Settings, DEFAULT_BIRTHDAY_WINDOW};

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Interactive contact manager with birthday reminders",
    long_about = "Starts an interactive session that keeps contacts (names, phone \
                  numbers and birthdays) in memory. Type commands at the prompt; \
                  nothing is saved when the session ends."
)]
struct Cli {
    /// Days ahead the `birthdays` command looks
    #[arg(
        long,
        default_value_t = DEFAULT_BIRTHDAY_WINDOW,
        allow_negative_numbers = true
    )]
    birthday_window: i64,

    /// Log filter for stderr output (e.g. "debug"); RUST_LOG is used when unset
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let matches = Cli::command().after_help(commands_help()).get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    // Logs go to stderr; stdout belongs to the session
    let filter = cli
        .log_level
        .as_deref()
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::with_birthday_window(cli.birthday_window)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Repl::new(settings).run(stdin.lock(), stdout.lock())?;

    Ok(())
}
