//! `form-parse` - structure a urlencoded form body into JSON.
//!
//! Usage:
//!   form-parse [--options '<json>']
//!
//! The body is read from stdin. Options use the camelCase keys of
//! `ParseOptions`, e.g. `{"duplicateKeys": "last", "maxIndex": 100}`.
//! Set `RUST_LOG=debug` to trace how entries are folded.

use nordstern::cli::{parse_body, parse_options, CliError};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

fn run() -> Result<String, CliError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options_json = match args.as_slice() {
        [] => None,
        [flag, json] if flag == "--options" => Some(json.as_str()),
        _ => return Err(CliError::Usage("Usage: form-parse [--options '<json>']".to_string())),
    };
    let options = parse_options(options_json)?;

    let mut body = String::new();
    io::stdin().read_to_string(&mut body)?;
    parse_body(&body, &options)
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
