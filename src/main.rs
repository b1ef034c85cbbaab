//! Builds a tree from the given values and reports on it: its size, whether
//! it's empty, whether it holds the first value, its height, and finally every
//! value in the requested order, each followed by a space.

use std::error::Error;
use std::io::{self, Write};

use bst::{Tree, TraversalOrder};
use clap::Parser;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

#[derive(Debug, Parser)]
#[command(version, about = "Fill a binary search tree and walk it")]
struct Opts {
    /// Order to print the values in: pre, in, post, or level.
    #[arg(short, long, default_value = "pre")]
    order: TraversalOrder,

    /// Log verbosity. `RUST_LOG` takes precedence when set.
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,

    /// Values to add, in order. Defaults to A through L.
    values: Vec<char>,
}

impl Opts {
    fn values(&self) -> Vec<char> {
        if self.values.is_empty() {
            ('A'..='L').collect()
        } else {
            self.values.clone()
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let opts = Opts::parse();
    SimpleLogger::new()
        .with_level(opts.log_level)
        .env()
        .init()?;
    info!("{:?}", opts);

    let stdout = io::stdout();
    run(&opts.values(), opts.order, &mut stdout.lock())?;
    Ok(())
}

fn run(values: &[char], order: TraversalOrder, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let mut tree = Tree::new();
    for value in values {
        if !tree.add(*value) {
            info!("skipping duplicate {:?}", value);
        }
    }

    writeln!(out, "{}", tree.size())?;
    writeln!(out, "{}", tree.is_empty())?;
    writeln!(out, "{}", tree.contains(values.first().unwrap_or(&'A')))?;
    writeln!(out, "{}", tree.height())?;

    let mut traversal = tree.traverse(order);
    while traversal.has_next(&tree)? {
        write!(out, "{} ", traversal.advance(&tree)?)?;
    }
    writeln!(out)?;

    Ok(())
}
