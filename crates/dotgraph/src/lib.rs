//! Dot-path traversal and mutation for nested JSON values.
//!
//! Paths are dot-delimited strings such as `address.city` or
//! `phoneNumber.1.type`. Each segment must be an own key of the node reached
//! so far: an object key, or a canonical index into an array.
//!
//! # Example
//!
//! ```
//! use dotgraph::{read, wrap};
//! use serde_json::json;
//!
//! let mut doc = json!({
//!     "firstName": "John",
//!     "address": {"city": "New York", "state": "NY"},
//!     "phoneNumber": [{"type": "home"}, {"type": "fax"}]
//! });
//!
//! let reader = read(&doc);
//! assert_eq!(reader.tap("phoneNumber.1.type").unwrap(), "fax");
//! assert!(!reader.probe("phoneNumber.2"));
//! assert_eq!(
//!     reader.collect(["firstName", "address.zip"]),
//!     vec![Some(&json!("John")), None]
//! );
//!
//! let mut graph = wrap(&mut doc);
//! graph.plant("address.zip", "10021");
//! graph.purge("phoneNumber.1.type").unwrap();
//! assert_eq!(doc["address"]["zip"], "10021");
//! assert_eq!(doc["phoneNumber"], json!([{"type": "home"}]));
//! ```

use std::fmt;

use serde_json::Value;
use thiserror::Error;

pub mod path;
pub use path::{format_path, parse_path, Path, PathStep, SEPARATOR};

mod reader;
pub use reader::PathReader;

mod writer;
pub use writer::Graph;

mod walk;

/// Wrap a value for reading and writing along dot paths.
pub fn wrap(obj: &mut Value) -> Graph<'_> {
    Graph::new(obj)
}

/// Wrap a value for reading along dot paths.
pub fn read(obj: &Value) -> PathReader<'_> {
    PathReader::new(obj)
}

/// The operation that failed to resolve a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Tap,
    Snip,
    Purge,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Tap => "tap",
            Operation::Snip => "snip",
            Operation::Purge => "purge",
        })
    }
}

/// A path did not resolve.
///
/// `failed_at` is the dot path up to and including the first segment that
/// was not found.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("graph detection failed at \"{failed_at}\" ({operation})")]
pub struct PathResolutionError {
    operation: Operation,
    failed_at: String,
}

impl PathResolutionError {
    pub(crate) fn new(operation: Operation, path: &[String], failed_index: usize) -> Self {
        Self {
            operation,
            failed_at: path::prefix(path, failed_index + 1),
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn failed_at(&self) -> &str {
        &self.failed_at
    }
}
