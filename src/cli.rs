use anyhow::{bail, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};

use paged_text_viewer::{logging, Args, PagedReader};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Next,
    Previous,
    Open(String),
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(input: &str) -> Command {
    let input = input.trim();
    match input {
        "" | "n" | "next" => Command::Next,
        "p" | "prev" | "previous" => Command::Previous,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => match input.split_once(char::is_whitespace) {
            Some(("o" | "open", path)) if !path.trim().is_empty() => {
                Command::Open(path.trim().to_string())
            }
            _ => Command::Unknown(input.to_string()),
        },
    }
}

fn main() -> Result<()> {
    logging::init();

    let args = Args::parse();
    let Some(path) = args.file.clone() else {
        bail!("Usage: paged-text-cli <FILE> [--page-size N] [--encoding E] [--paging MODE]");
    };

    let mut reader = args.build_reader()?;
    reader.load(&path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let page = reader.current_page();
    print_page(&mut out, &reader, &page)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Command::Next => {
                let page = reader.next_page();
                print_page(&mut out, &reader, &page)?;
            }
            Command::Previous => {
                let page = reader.previous_page();
                print_page(&mut out, &reader, &page)?;
            }
            Command::Open(path) => match reader.load(&path) {
                Ok(()) => {
                    let page = reader.current_page();
                    print_page(&mut out, &reader, &page)?;
                }
                Err(e) => eprintln!("Error opening file: {:#}", e),
            },
            Command::Help => print_usage(&mut out)?,
            Command::Quit => break,
            Command::Unknown(input) => {
                eprintln!("Unknown command: {}", input);
                print_usage(&mut out)?;
            }
        }
    }

    Ok(())
}

fn print_usage(out: &mut impl Write) -> Result<()> {
    writeln!(out, "COMMANDS:")?;
    writeln!(out, "    <Enter>, n       Next page")?;
    writeln!(out, "    p                Previous page")?;
    writeln!(out, "    o <file>         Open another file")?;
    writeln!(out, "    h                Show this help")?;
    writeln!(out, "    q                Quit")?;
    out.flush()?;
    Ok(())
}

fn print_page(out: &mut impl Write, reader: &PagedReader, page: &str) -> Result<()> {
    let name = reader
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    writeln!(
        out,
        "--- {} | page {} / {} ---",
        name,
        reader.page_number(),
        reader.page_count()
    )?;
    write!(out, "{}", page)?;
    if !page.is_empty() && !page.ends_with(['\n', '\r']) {
        writeln!(out)?;
    }
    match reader.progress() {
        Ok(progress) => writeln!(out, "--- {:.2}% ---", f64::from(progress))?,
        Err(e) => writeln!(out, "--- progress unavailable: {:#} ---", e)?,
    }
    out.flush()?;
    Ok(())
}
