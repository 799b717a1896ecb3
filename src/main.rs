use clap::Parser;
use tido::libs::messages::macros::is_debug_mode;
use tido::libs::repl::Repl;
use tracing_subscriber::EnvFilter;

/// Interactive command-line todo list manager.
///
/// Takes no flags or subcommands; the whole interaction is the line-oriented
/// command protocol of the session loop.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    Cli::parse();

    // In normal mode all output goes straight to the console; the subscriber
    // is only installed when debug mode routes messages through tracing.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .init();
    }

    Repl::new().run()
}
