//! This program generates a PISA index from a Common Index Format (v1)
//! Refer to [`osirrc/ciff`](https://github.com/osirrc/ciff) on Github
//! for more detailed information about the format.

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
use ciff_pisa::{CiffToPisa, Framing};
use env_logger::Env;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "ciff2pisa",
    about = "Generates a PISA index from a Common Index Format [v1]"
)]
struct Args {
    #[structopt(short, long, help = "Path to ciff export file")]
    ciff_file: PathBuf,
    #[structopt(short, long, help = "Output basename")]
    output: PathBuf,
    #[structopt(short, long, help = "Generate lexicon files?")]
    generate_lexicons: bool,
    #[structopt(long, help = "Input frames are tagged envelopes instead of standard CIFF")]
    tagged: bool,
}

fn run(args: Args) -> anyhow::Result<()> {
    let framing = if args.tagged {
        Framing::Tagged
    } else {
        Framing::Positional
    };
    CiffToPisa::default()
        .input_path(&args.ciff_file)
        .output_paths(&args.output)
        .framing(framing)
        .generate_lexicons(args.generate_lexicons)
        .convert()
        .with_context(|| {
            format!(
                "Unable to convert {} to a PISA index at {}",
                args.ciff_file.display(),
                args.output.display()
            )
        })
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if let Err(error) = run(Args::from_args()) {
        eprintln!("ERROR: {:#}", error);
        std::process::exit(1);
    }
}
