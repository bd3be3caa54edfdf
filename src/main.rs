#![forbid(unsafe_code)]

use argpeel::cli::{self, Cli};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    cli::init_logger(cli.verbose);
    std::process::exit(cli::run(&cli));
}
