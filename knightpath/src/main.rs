//! Print every shortest knight-move path between two squares.

use std::io;
use std::process;

use clap::Parser;
use knightpath_lib::{Args, logging, run};

fn main() {
    logging::init_logging();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&args, &mut out) {
        eprintln!("{e}");
        process::exit(e.exit_code());
    }
}
