//! `make-dictionary` — build the merged symbol dictionary JSON.
//!
//! Usage:
//!   make-dictionary [table] [patch] [output]
//!
//! Defaults match the repository layout: `./dictionary.txt`,
//! `./dictionary_patch.json`, `./dictionary.json`. A source path ending in
//! `.json` is treated as an already-built dictionary tree to patch instead
//! of a symbol table.

use std::fs;
use std::process;

use mathlog_dict::dict_cli::{build_dictionary, patch_dictionary};

fn read(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{path}: {e}");
            process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let source_path = args.get(1).map(String::as_str).unwrap_or("./dictionary.txt");
    let patch_path = args
        .get(2)
        .map(String::as_str)
        .unwrap_or("./dictionary_patch.json");
    let output_path = args.get(3).map(String::as_str).unwrap_or("./dictionary.json");

    let source = read(source_path);
    let patch = read(patch_path);

    let result = if source_path.ends_with(".json") {
        patch_dictionary(&source, &patch)
    } else {
        build_dictionary(&source, &patch)
    };

    match result {
        Ok(mut document) => {
            document.push('\n');
            if let Err(e) = fs::write(output_path, document) {
                eprintln!("{output_path}: {e}");
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
