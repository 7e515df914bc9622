//! Command logic behind the `dotgraph` binary.
//!
//! Every command takes the document as a JSON string and returns the text to
//! print:
//! - `probe <path>`                 — `true` or `false`
//! - `tap <path> [default-json]`    — the value at `path`
//! - `collect <path>...`            — a JSON array, unresolved paths as `null`
//! - `extract <path>...`            — a JSON object keyed by path
//! - `plant <path> <value-json>`    — the document with `value` planted
//! - `snip <path>` / `purge <path>` — the document with `path` removed

use dotgraph::{read, wrap, PathResolutionError};
use serde_json::{Map, Value};
use tracing::debug;

pub const USAGE: &str =
    "usage: dotgraph <probe|tap|collect|extract|plant|snip|purge> <path>... [json] < document.json";

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    Path(PathResolutionError),
    Usage(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e)  => write!(f, "{e}"),
            CliError::Path(e)  => write!(f, "{e}"),
            CliError::Usage(e) => write!(f, "{e}\n{USAGE}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self { CliError::Json(e) }
}

impl From<PathResolutionError> for CliError {
    fn from(e: PathResolutionError) -> Self { CliError::Path(e) }
}

// ── Commands ──────────────────────────────────────────────────────────────

/// Run `command` with `args` against the JSON document `doc_json`.
pub fn run(command: &str, args: &[String], doc_json: &str) -> Result<String, CliError> {
    let mut doc: Value = serde_json::from_str(doc_json)?;
    debug!(command, ?args, "running command");
    match command {
        "probe" => {
            let path = single_path(command, args)?;
            Ok(read(&doc).probe(path).to_string())
        }
        "tap" => {
            let (path, default) = match args {
                [path] => (path, None),
                [path, default] => (path, Some(serde_json::from_str::<Value>(default)?)),
                _ => return Err(CliError::Usage("tap takes a path and an optional default".into())),
            };
            let reader = read(&doc);
            let value = match &default {
                Some(default) => reader.tap_or(path, default),
                None => reader.tap(path)?,
            };
            Ok(serde_json::to_string_pretty(value)?)
        }
        "collect" => {
            let values: Vec<Value> = read(&doc)
                .collect(args)
                .into_iter()
                .map(|v| v.cloned().unwrap_or(Value::Null))
                .collect();
            Ok(serde_json::to_string_pretty(&values)?)
        }
        "extract" => {
            let values: Map<String, Value> = read(&doc)
                .extract(args)
                .into_iter()
                .map(|(path, v)| (path, v.cloned().unwrap_or(Value::Null)))
                .collect();
            Ok(serde_json::to_string_pretty(&values)?)
        }
        "plant" => {
            let [path, value] = args else {
                return Err(CliError::Usage("plant takes a path and a JSON value".into()));
            };
            let value: Value = serde_json::from_str(value)?;
            wrap(&mut doc).plant(path, value);
            Ok(serde_json::to_string_pretty(&doc)?)
        }
        "snip" => {
            let path = single_path(command, args)?;
            wrap(&mut doc).snip(path)?;
            Ok(serde_json::to_string_pretty(&doc)?)
        }
        "purge" => {
            let path = single_path(command, args)?;
            wrap(&mut doc).purge(path)?;
            Ok(serde_json::to_string_pretty(&doc)?)
        }
        other => Err(CliError::Usage(format!("unknown command: {other}"))),
    }
}

fn single_path<'a>(command: &str, args: &'a [String]) -> Result<&'a str, CliError> {
    match args {
        [path] => Ok(path.as_str()),
        _ => Err(CliError::Usage(format!("{command} takes exactly one path"))),
    }
}
