//! jsontree CLI.
//!
//! Reads a JSON document from a file or standard input, parses it, and
//! prints the resulting value tree. The tree is shown in Debug form; this
//! tool inspects documents, it does not re-encode them.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "jsontree")]
#[command(about = "Parse a JSON document and print its value tree", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a JSON file. Reads standard input when omitted.
    file: Option<PathBuf>,
}

fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let input = match read_input(cli.file.as_deref()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match jsontree::parse(&input) {
        Ok(value) => {
            println!("{value:#?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
