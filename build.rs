//! Generates the CIFF protobuf bindings into `src/proto` before compiling the crate.
use std::fs::{read_to_string, File};
use std::io::{BufWriter, Write};

const PROTO: &str = "proto/common-index-format-v1.proto";
const GENERATED: &str = "src/proto/common_index_format_v1.rs";

fn main() {
    println!("cargo:rerun-if-changed={}", PROTO);
    protobuf_codegen_pure::Codegen::new()
        .out_dir("src/proto")
        .inputs(&[PROTO])
        .include("proto")
        .run()
        .expect("Codegen failed.");
    let code = read_to_string(GENERATED).expect("Failed to read generated file");
    let mut writer =
        BufWriter::new(File::create(GENERATED).expect("Failed to open generated file"));
    writer
        .write_all(b"#![allow(clippy::pedantic)]\n")
        .and_then(|_| writer.write_all(code.as_bytes()))
        .expect("Failed to write to generated file");
}
