//! manifest-images: print the container images a piped manifest declares.
//!
//! Reads a manifest from standard input, extracts the reference on every
//! `image:` / `.image:` line, and optionally retargets it at another
//! registry host.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use colored::Colorize;
use manifest_images::{extractor, input, output, rewriter};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if output::is_broken_pipe(&err) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let stdin = io::stdin();
    input::ensure_piped(stdin.is_terminal())?;
    let lines = input::read_lines(stdin.lock())?;

    let mut refs = extractor::extract_images(&lines);
    if args.verbose {
        eprintln!(
            "{} Read {} lines, found {} image references",
            "info:".blue().bold(),
            lines.len(),
            refs.len()
        );
        for image_ref in refs.iter().filter(|r| r.image.is_empty()) {
            eprintln!(
                "{} Line {}: image marker with no reference",
                "warn:".yellow().bold(),
                image_ref.line
            );
        }
    }

    if let Some(registry) = &args.registry {
        rewriter::retarget(&mut refs, registry);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        output::write_json(&mut out, &refs)?;
    } else {
        output::write_plain(&mut out, &refs)?;
    }

    if args.demo
        && let Some(registry) = &args.registry
    {
        output::write_demo(&mut out, registry)?;
    }

    Ok(())
}
