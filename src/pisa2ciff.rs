//! This program converts a PISA index to a Common Index Format (v1)
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
use ciff_pisa::{Framing, PisaToCiff};
use env_logger::Env;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "pisa2ciff",
    about = "Convert a PISA index to a Common Index Format [v1]"
)]
struct Args {
    #[structopt(short, long, help = "Binary collection (uncompressed) basename")]
    collection: PathBuf,
    #[structopt(short, long, help = "Path to terms text file")]
    terms: PathBuf,
    #[structopt(short, long, help = "Path to documents text file")]
    documents: PathBuf,
    #[structopt(short, long, help = "Output filename")]
    output: PathBuf,
    #[structopt(long, help = "Index description")]
    description: Option<String>,
    #[structopt(long, help = "Write tagged envelopes instead of standard CIFF")]
    tagged: bool,
}

fn run(args: Args) -> anyhow::Result<()> {
    let framing = if args.tagged {
        Framing::Tagged
    } else {
        Framing::Positional
    };
    PisaToCiff::default()
        .description(args.description.clone().unwrap_or_default())
        .index_paths(&args.collection)
        .terms_path(&args.terms)
        .titles_path(&args.documents)
        .output_path(&args.output)
        .framing(framing)
        .convert()
        .with_context(|| {
            format!(
                "Unable to convert {} to CIFF at {}",
                args.collection.display(),
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
