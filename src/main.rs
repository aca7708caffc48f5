//! Demo CLI: prints a sample computation made with the calculator.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use calculator_demo::demo::{self, DemoOptions};

#[derive(Debug, Parser)]
#[command(name = "calculator-demo", version)]
#[command(about = "Prints a sample computation made with the calculator")]
struct Cli {
    /// Also print the result of dividing 10 by 2
    #[arg(long)]
    with_division: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl From<&Cli> for DemoOptions {
    fn from(cli: &Cli) -> Self {
        DemoOptions {
            with_division: cli.with_division,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    demo::run(&mut stdout.lock(), DemoOptions::from(&cli))
}
