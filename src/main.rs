//! CLI entry point for the tile-grid text cipher

use clap::Parser;
use stretchr::io::cli::{Cli, CommandRunner};

fn main() -> stretchr::Result<()> {
    let cli = Cli::parse();
    let runner = CommandRunner::new(cli);
    runner.run()
}
