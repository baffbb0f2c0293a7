use std::{fs::OpenOptions, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Target};
use member_fixture::{walkthrough, Console};

/// Sample object model covering common member patterns
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Run every fixture operation once, printing to stdout
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    if cli.demo {
        walkthrough::run(&Console::stdout());
    }

    Ok(())
}

fn init_logging() -> Result<()> {
    let mut builder = Builder::from_default_env();

    if let Ok(log_location) = std::env::var("LOG_LOCATION") {
        let path = PathBuf::from(&*shellexpand::tilde(&log_location));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        builder.target(Target::Pipe(Box::new(
            OpenOptions::new().create(true).append(true).open(path)?,
        )));
    }

    builder.init();
    Ok(())
}
