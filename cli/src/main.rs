use std::io::{self, Write};
use std::process;

use clap::Parser;
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

mod args;
mod convert;

fn main() {
    if let Err(msg) = run() {
        print_error(&msg).unwrap();
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = args::Args::parse();
    let script = convert::convert_(&args.input)?;
    print!("{script}");
    Ok(())
}

fn print_error(msg: &str) -> io::Result<()> {
    let mut w = StandardStream::stderr(ColorChoice::Always);

    let mut color = ColorSpec::new();
    color.set_fg(Some(termcolor::Color::Red));
    color.set_bold(true);
    w.set_color(&color)?;
    write!(w, "error")?;

    w.reset()?;
    writeln!(w, ": {msg}.")
}
