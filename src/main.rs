use std::fs;

use clap::Parser;

/// azeng is an interpreter for a small scripting language with Indonesian
/// keywords.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the script file to run.
    script: String,
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(i32::from(e.use_stderr()));
    });

    let source = fs::read_to_string(&args.script).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  &args.script);
        std::process::exit(1);
    });

    if let Err(e) = azeng::run_script(&source) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
