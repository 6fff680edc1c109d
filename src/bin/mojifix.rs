//! mojifix - repair double UTF-8 mojibake in place

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mojikit::repair::repair_file;

/// Repair "double UTF-8" mojibake corruption in text files.
#[derive(Parser, Debug)]
#[command(name = "mojifix")]
#[command(
    author,
    version,
    about,
    long_about = r#"mojifix assumes each FILE holds valid UTF-8 that encodes Latin-1
code points which were themselves mis-decoded UTF-8 (the classic
double-encoding bug), and restores the originally intended text.

The original bytes are copied verbatim to FILE.bak before the file is
rewritten. A failure on one file never stops processing of the rest;
the exit status is nonzero if any file failed.

Examples:
    mojifix notes.txt
    mojifix src/a.md src/b.md
"#
)]
struct Cli {
    /// Files to repair.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        eprintln!("Usage: mojifix <FILE>...");
        return ExitCode::FAILURE;
    }

    let mut all_ok = true;
    for path in &cli.files {
        if !path.is_file() {
            eprintln!("Error: {} is not a valid file", path.display());
            all_ok = false;
            continue;
        }

        match repair_file(path) {
            Ok(backup) => {
                println!("Backup created at {}", backup.display());
                println!("Fixed encoding in {}", path.display());
            }
            Err(err) => {
                eprintln!("Error processing {}: {}", path.display(), err);
                all_ok = false;
            }
        }
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
