use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use linklist::{List, Node};
use log::{debug, LevelFilter};

/// Builds sample lists, prints them and drains them one node at a time.
#[derive(Parser, Debug)]
#[command(name = "clist", version)]
struct Cli {
    /// Comma separated values to insert at the front, in order, instead of
    /// the built-in samples
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    values: Option<Vec<i64>>,

    /// Log list activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn drain(label: &str, list: &mut List<i64>, out: &mut dyn Write) -> io::Result<()> {
    write!(out, "{label}: ")?;
    list.write_to(out)?;

    while !list.is_empty() {
        list.delete_at_front();
        write!(out, "{label} after removing an item: ")?;
        list.write_to(out)?;
    }
    Ok(())
}

fn run_samples(out: &mut dyn Write) -> io::Result<()> {
    // seeded with a node built outside the list
    let mut first = List::from_node(Node::new(100));
    first.insert_at_front(200);
    first.insert_at_front(50);
    drain("List 1", &mut first, out)?;

    let mut second = List::new();
    for value in [3000, 600, 475] {
        second.insert_at_front(value);
    }
    drain("List 2", &mut second, out)
}

fn run_values(values: &[i64], out: &mut dyn Write) -> io::Result<()> {
    let mut list = List::new();
    for &value in values {
        list.insert_at_front(value);
    }
    drain("List", &mut list, out)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
    debug!("{cli:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = match &cli.values {
        Some(values) => run_values(values, &mut out),
        None => run_samples(&mut out),
    };
    written.context("failed to write list output")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
