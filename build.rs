//! Build script to embed the puzzle archive
//!
//! Reads `data/puzzles/YYYY-MM-DD.json` files and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const PUZZLE_DIR: &str = "data/puzzles";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_puzzle_table(
        PUZZLE_DIR,
        &Path::new(&out_dir).join("puzzles.rs"),
        "PUZZLES",
        "Daily puzzles embedded at build time as (date, JSON) pairs",
    );

    // Rebuild if the archive changes
    println!("cargo:rerun-if-changed={PUZZLE_DIR}");
}

fn generate_puzzle_table(input_dir: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let entries = fs::read_dir(input_dir)
        .unwrap_or_else(|e| panic!("Failed to read {input_dir}: {e}"));

    let mut puzzles: Vec<(String, String)> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .filter_map(|path| {
            let date = path.file_stem()?.to_str()?.to_string();
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
            println!("cargo:rerun-if-changed={}", path.display());
            Some((date, content))
        })
        .collect();

    // Newest first, matching the archive order
    puzzles.sort_by(|a, b| b.0.cmp(&a.0));
    let count = puzzles.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated puzzle table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for (date, content) in &puzzles {
        writeln!(output, "    ({date:?}, {content:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of puzzles in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
