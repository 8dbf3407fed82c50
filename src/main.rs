use anyhow::Result;
use clap::Parser;
use taskline::{CommandRegistry, ConsoleUi, TaskList};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "taskline")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A line-oriented task manager driven by short text commands")]
struct Args {
    /// Maximum number of tasks the list may hold
    #[arg(short = 'c', long = "capacity", default_value_t = taskline::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; the console loop owns stdout.
    let filter = if args.verbose {
        "taskline=debug"
    } else {
        "taskline=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(capacity = args.capacity, "starting taskline");

    let registry = CommandRegistry::standard();
    let tasks = TaskList::with_capacity(args.capacity);
    let mut ui = ConsoleUi::new(registry, tasks);
    ui.greet();
    ui.run_loop()?;
    Ok(())
}
