//! mojiscan - flag files whose text encoding cannot be confirmed

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use mojikit::report;
use mojikit::scan::scan_directory;

/// Scan a directory tree for files with suspect text encodings.
#[derive(Parser, Debug)]
#[command(name = "mojiscan")]
#[command(
    author,
    version,
    about,
    long_about = r#"mojiscan walks DIR, classifies each file as text or binary, and probes
every text file against a fixed list of candidate encodings
(utf-8, big5, gbk, gb2312, utf-16, utf-16le, utf-16be).

A file is flagged when it decodes under none of the candidates. Files that
are valid UTF-8 but contain no CJK ideographs are accepted as-is.

Dependency caches, VCS metadata, and build output directories
(node_modules, .git, .next, dist) are never descended into.

Examples:
    mojiscan .
    mojiscan path/to/project --json
"#
)]
struct Cli {
    /// Directory to scan.
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Emit the report as pretty-printed JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

fn run(cli: &Cli, dir: &PathBuf) -> Result<()> {
    if cli.json {
        let report = scan_directory(dir);
        println!("{}", report::render_json(&report)?);
    } else {
        report::print_banner(dir);
        let report = scan_directory(dir);
        report::print_report(&report);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => {
            eprintln!("Usage: mojiscan <DIR>");
            return ExitCode::FAILURE;
        }
    };

    if !dir.is_dir() {
        eprintln!("Error: {} is not a valid directory", dir.display());
        return ExitCode::FAILURE;
    }

    match run(&cli, &dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
