//! Command-line interface definitions.
//!
//! The tool reads its manifest from standard input; flags only choose the
//! output form and the optional target registry.

use clap::Parser;

/// Extract container image references from a manifest piped on stdin.
///
/// Lines whose trimmed text starts with `image:` or contains `.image:` are
/// treated as image declarations. The text after the last `image:` marker
/// is printed, one reference per line.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Rewrite each reference to pull from this registry host.
    /// Only bare IP-literal registries are recognized and replaced; any
    /// other reference is prefixed.
    #[arg(short, long, value_name = "HOST", value_parser = parse_registry)]
    pub registry: Option<String>,

    /// Emit JSON instead of one reference per line.
    #[arg(long)]
    pub json: bool,

    /// After the manifest output, show how sample references are rewritten.
    #[arg(long, requires = "registry", conflicts_with = "json")]
    pub demo: bool,

    /// Print additional diagnostics to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_registry(s: &str) -> Result<String, String> {
    let host = s.trim().trim_end_matches('/');
    if host.is_empty() {
        return Err(format!("Invalid registry host '{}': must not be empty", s));
    }
    if host.chars().any(char::is_whitespace) {
        return Err(format!("Invalid registry host '{}': contains whitespace", s));
    }
    Ok(host.to_string())
}
