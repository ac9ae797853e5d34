use crate::Args;
use ansi_term::Style;
use basic::error;
use basic::lang::Error;
use basic::mach::{Listing, Runtime};
use linefeed::{
    Completer, Completion, DefaultTerminal, Interface, Prompter, ReadResult, Signal, Terminal,
};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::sync::Arc;

pub fn main(args: Args) {
    if let Err(error) = main_loop(args) {
        eprintln!("{}", error);
    }
}

fn main_loop(args: Args) -> std::io::Result<()> {
    let command = Arc::new(Interface::new("BASIC")?);
    command.set_prompt("> ")?;
    command.set_report_signal(Signal::Interrupt, true);
    let sink = command.clone();
    let mut runtime = Runtime::new(move |s: &str| {
        if let Err(error) = sink.write_fmt(format_args!("{}", s)) {
            warn!("output lost: {}", error);
        }
    });

    if let Some(path) = &args.file {
        match load(path) {
            Ok(listing) => {
                debug!("loaded {} lines from {}", listing.len(), path.display());
                runtime.set_listing(listing);
                if args.run {
                    if let Err(error) = runtime.run() {
                        print_error(&command, &error)?;
                    }
                }
            }
            Err(error) => print_error(&command, &error)?,
        }
    }

    loop {
        command.set_completer(Arc::new(LineCompleter::new(runtime.get_listing())));
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if string.trim().is_empty() {
            continue;
        }
        command.add_history_unique(string.clone());
        if let Err(error) = runtime.enter(&string) {
            print_error(&command, &error)?;
        }
    }
    Ok(())
}

fn print_error(interface: &Interface<DefaultTerminal>, error: &Error) -> std::io::Result<()> {
    interface.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(error.to_string())
    ))
}

/// Tab after a bare line number brings back the stored line for editing.
struct LineCompleter {
    listing: Listing,
}

impl LineCompleter {
    fn new(listing: Listing) -> LineCompleter {
        LineCompleter { listing }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let number = prompter.buffer().trim().parse::<u16>().ok()?;
        let line = self.listing.line(number)?;
        let mut comp = Completion::simple(line.to_string());
        comp.suffix = linefeed::complete::Suffix::None;
        Some(vec![comp])
    }
}

fn load(path: &Path) -> Result<Listing, Error> {
    let mut listing = Listing::default();
    let reader = match File::open(path) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = format!("{}: {}", path.display(), error);
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg)),
                _ => return Err(error!(InternalError; msg)),
            }
        }
    };
    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(error) => return Err(error!(InternalError; error.to_string())),
        };
        if let Err(error) = listing.load_str(&line) {
            let detail = if error.detail().is_empty() {
                format!("LINE {} OF FILE", index + 1)
            } else {
                format!("{} IN LINE {} OF FILE", error.detail(), index + 1)
            };
            return Err(Error::new(error.code()).message(detail));
        }
    }
    Ok(listing)
}
