use dotgraph_util::{has_own_property_value, is_truthy, own_len};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::trace;

use crate::path::parse_path;
use crate::walk::descend;
use crate::{Operation, PathResolutionError};

/// Read-only view over a JSON value, addressed by dot paths.
///
/// Every method that takes a list of paths or property names accepts any
/// `IntoIterator` of string-likes: arrays, slices, vectors or iterators.
#[derive(Debug, Clone, Copy)]
pub struct PathReader<'a> {
    obj: &'a Value,
}

impl<'a> PathReader<'a> {
    pub fn new(obj: &'a Value) -> Self {
        Self { obj }
    }

    /// The wrapped value.
    pub fn obj(&self) -> &'a Value {
        self.obj
    }

    /// Whether `path` resolves. An empty path never does.
    pub fn probe(&self, path: &str) -> bool {
        self.tap(path).is_ok()
    }

    /// The value at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PathResolutionError`] when a segment is not an own key of
    /// the node reached before it.
    pub fn tap(&self, path: &str) -> Result<&'a Value, PathResolutionError> {
        let steps = parse_path(path);
        if steps.is_empty() {
            return Err(PathResolutionError::new(Operation::Tap, &steps, 0));
        }
        descend(self.obj, &steps).map_err(|idx| {
            let err = PathResolutionError::new(Operation::Tap, &steps, idx);
            trace!(path, failed_at = err.failed_at(), "path did not resolve");
            err
        })
    }

    /// The value at `path`, or `default` when the path does not resolve.
    ///
    /// A resolved `null` is a value and is returned as is, the same as in
    /// [`collect_with`](Self::collect_with). The returned reference is
    /// `default` itself, never a copy.
    ///
    /// ```
    /// use dotgraph::read;
    /// use serde_json::json;
    ///
    /// let doc = json!({"a": null, "b": 0});
    /// let fallback = json!("none");
    /// assert_eq!(read(&doc).tap_or("a", &fallback), &json!(null));
    /// assert_eq!(read(&doc).tap_or("b", &fallback), 0);
    /// assert_eq!(read(&doc).tap_or("c.d", &fallback), "none");
    /// ```
    pub fn tap_or<'d>(&self, path: &str, default: &'d Value) -> &'d Value
    where
        'a: 'd,
    {
        self.tap(path).unwrap_or(default)
    }

    /// Values at each path, in input order. Unresolved paths yield `None`.
    pub fn collect<I, S>(&self, paths: I) -> Vec<Option<&'a Value>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .map(|path| self.tap(path.as_ref()).ok())
            .collect()
    }

    /// Values at each path of `defaults`, in map order. An unresolved path
    /// yields its default; a resolved `null` is kept.
    pub fn collect_with<'d>(&self, defaults: &'d Map<String, Value>) -> Vec<&'d Value>
    where
        'a: 'd,
    {
        defaults
            .iter()
            .map(|(path, default)| self.tap(path).unwrap_or(default))
            .collect()
    }

    /// Like [`collect`](Self::collect), keyed by path.
    pub fn extract<I, S>(&self, paths: I) -> IndexMap<String, Option<&'a Value>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .map(|path| {
                let path = path.as_ref();
                (path.to_string(), self.tap(path).ok())
            })
            .collect()
    }

    /// Like [`collect_with`](Self::collect_with), keyed by path.
    pub fn extract_with<'d>(&self, defaults: &'d Map<String, Value>) -> IndexMap<String, &'d Value>
    where
        'a: 'd,
    {
        defaults
            .iter()
            .map(|(path, default)| (path.clone(), self.tap(path).unwrap_or(default)))
            .collect()
    }

    /// Number of own top-level keys.
    pub fn len(&self) -> usize {
        own_len(self.obj)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every name is an own top-level key.
    pub fn has_all_properties<I, S>(&self, properties: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        properties
            .into_iter()
            .all(|property| has_own_property_value(self.obj, property.as_ref()))
    }

    /// Whether at least one name is an own top-level key.
    pub fn has_any_properties<I, S>(&self, properties: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        properties
            .into_iter()
            .any(|property| has_own_property_value(self.obj, property.as_ref()))
    }

    /// Whether every path resolves.
    pub fn probe_all<I, S>(&self, paths: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths.into_iter().all(|path| self.probe(path.as_ref()))
    }

    /// Whether at least one path resolves.
    pub fn probe_any<I, S>(&self, paths: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths.into_iter().any(|path| self.probe(path.as_ref()))
    }

    /// Whether every path resolves to a truthy value.
    ///
    /// `null`, `false`, `0` and `""` are falsy; arrays and objects are
    /// always truthy.
    pub fn truthy<I, S>(&self, paths: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .all(|path| self.tap(path.as_ref()).is_ok_and(is_truthy))
    }
}
