//! # basic
//!
//! Interactive prompt for the line-numbered BASIC interpreter.

use clap::Parser;
use std::path::PathBuf;

mod term;

/// A line-numbered BASIC interpreter.
#[derive(Parser, Debug)]
#[command(name = "basic", version, about)]
pub struct Args {
    /// Program to load, one numbered line per line of the file
    pub file: Option<PathBuf>,

    /// Run the loaded program before showing the prompt
    #[arg(long, requires = "file")]
    pub run: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    term::main(Args::parse());
}
