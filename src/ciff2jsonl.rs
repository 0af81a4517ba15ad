//! This program dumps a Common Index Format (v1) file as JSON lines, one record per line.

#![warn(
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::default_trait_access)]

use anyhow::Context;
use ciff_pisa::{CiffToJsonl, Framing};
use env_logger::Env;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "ciff2jsonl",
    about = "Convert a Common Index Format [v1] file into a jsonl file"
)]
struct Args {
    #[structopt(short, long, help = "Path to CIFF file")]
    input: PathBuf,
    #[structopt(short, long, help = "Output jsonl file")]
    output: PathBuf,
    #[structopt(long, help = "Input frames are tagged envelopes instead of standard CIFF")]
    tagged: bool,
}

fn run(args: Args) -> anyhow::Result<()> {
    let framing = if args.tagged {
        Framing::Tagged
    } else {
        Framing::Positional
    };
    CiffToJsonl::default()
        .input_path(&args.input)
        .output_path(&args.output)
        .framing(framing)
        .convert()
        .with_context(|| format!("Unable to convert {}", args.input.display()))
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if let Err(error) = run(Args::from_args()) {
        eprintln!("ERROR: {:#}", error);
        std::process::exit(1);
    }
}
