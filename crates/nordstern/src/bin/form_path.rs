//! `form-path` - read or update a JSON document by form path.
//!
//! Usage:
//!   form-path get <path>
//!   form-path set <path> [<json-value>]
//!
//! The document is read from stdin. `set` without a value removes the
//! addressed member.

use nordstern::cli::{lookup_path, update_path, CliError};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: form-path get <path> | form-path set <path> [<json-value>]";

fn read_doc() -> Result<String, CliError> {
    let mut doc = String::new();
    io::stdin().read_to_string(&mut doc)?;
    Ok(doc)
}

fn run() -> Result<String, CliError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [cmd, path] if cmd == "get" => lookup_path(read_doc()?.trim(), path),
        [cmd, path, rest @ ..] if cmd == "set" && rest.len() <= 1 => {
            update_path(read_doc()?.trim(), path, rest.first().map(String::as_str))
        }
        _ => Err(CliError::Usage(USAGE.to_string())),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
