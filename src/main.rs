use clap::Parser;
use std::io::{self, BufRead};

use anyhow::{Result, bail};

use rexgen::{build, render_html, synthesize};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sample strings to generalize (read from stdin, one per line, if omitted)
    #[arg(value_name = "SAMPLE")]
    samples: Vec<String>,

    /// Emit annotated HTML markup instead of a plain pattern
    #[arg(long)]
    html: bool,

    /// Dump the pattern tree instead of rendering it
    #[arg(long)]
    tree: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let samples = if args.samples.is_empty() {
        io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
    } else {
        args.samples
    };
    if samples.is_empty() {
        bail!("no sample strings given");
    }

    let tree = build(&samples);
    if args.tree {
        println!("{tree:#?}");
    } else if args.html {
        println!("{}", render_html(&tree));
    } else {
        println!("{}", synthesize(&tree));
    }
    Ok(())
}
