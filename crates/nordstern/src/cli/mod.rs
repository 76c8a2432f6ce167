//! Core of the command-line tools.
//!
//! - `form-parse` structures a urlencoded body into a JSON document
//! - `form-path` reads or updates a JSON document by form path

use nordstern_form_data::{parse_with, FormData, ParseError, ParseOptions};
use nordstern_form_path::{get_path, set_path, PathError};
use nordstern_form_value::FormValue;
use serde_json::Value;
use tracing::debug;

#[derive(Debug)]
pub enum CliError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Options(serde_json::Error),
    Parse(ParseError),
    Path(PathError),
    NotFound(String),
    Usage(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "{e}"),
            CliError::Json(e) => write!(f, "{e}"),
            CliError::Options(e) => write!(f, "Invalid options: {e}"),
            CliError::Parse(e) => write!(f, "{e}"),
            CliError::Path(e) => write!(f, "{e}"),
            CliError::NotFound(path) => write!(f, "NOT_FOUND: {path}"),
            CliError::Usage(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<PathError> for CliError {
    fn from(e: PathError) -> Self {
        CliError::Path(e)
    }
}

/// Read `--options '<json>'` into [`ParseOptions`]; defaults when absent.
pub fn parse_options(json: Option<&str>) -> Result<ParseOptions, CliError> {
    match json {
        Some(s) => serde_json::from_str(s).map_err(CliError::Options),
        None => Ok(ParseOptions::default()),
    }
}

/// Structure an `application/x-www-form-urlencoded` body.
///
/// Returns the structured value as a pretty-printed JSON string.
pub fn parse_body(body: &str, options: &ParseOptions) -> Result<String, CliError> {
    let form = FormData::from_urlencoded(body.trim())?;
    let value = parse_with(&form, options)?;
    debug!(entries = form.len(), "parsed body");
    Ok(serde_json::to_string_pretty(&Value::from(&value))?)
}

/// Look up a form path in a JSON document.
pub fn lookup_path(doc_json: &str, path: &str) -> Result<String, CliError> {
    let doc = FormValue::from(serde_json::from_str::<Value>(doc_json)?);
    match get_path(&doc, path)? {
        Some(value) => Ok(serde_json::to_string_pretty(&Value::from(value))?),
        None => Err(CliError::NotFound(path.to_string())),
    }
}

/// Set a form path in a JSON document.
///
/// With no value, or a JSON `null`, the addressed member is removed.
pub fn update_path(doc_json: &str, path: &str, value_json: Option<&str>) -> Result<String, CliError> {
    let doc = FormValue::from(serde_json::from_str::<Value>(doc_json)?);
    let value = match value_json {
        Some(s) => FormValue::from(serde_json::from_str::<Value>(s)?),
        None => FormValue::Undefined,
    };
    let next = set_path(&doc, path, value)?;
    Ok(serde_json::to_string_pretty(&Value::from(&next))?)
}
