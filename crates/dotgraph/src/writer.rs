use dotgraph_util::is_empty_container;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::path::{format_path, parse_path};
use crate::reader::PathReader;
use crate::walk;
use crate::{Operation, PathResolutionError};

/// Read-write view over a JSON value, addressed by dot paths.
///
/// Writes go straight to the wrapped value. Reads are the ones of
/// [`PathReader`], available through [`reader`](Self::reader) or the
/// delegating methods of the same name.
#[derive(Debug)]
pub struct Graph<'a> {
    obj: &'a mut Value,
}

impl<'a> Graph<'a> {
    pub fn new(obj: &'a mut Value) -> Self {
        Self { obj }
    }

    pub fn obj(&self) -> &Value {
        &*self.obj
    }

    pub fn reader(&self) -> PathReader<'_> {
        PathReader::new(&*self.obj)
    }

    /// Set `value` at `path`, creating missing containers along the way.
    ///
    /// Intermediate segments that are missing, `null` or scalars are replaced
    /// by empty objects. An array takes an existing index or appends at its
    /// length; any other segment turns it into an object keyed by its
    /// indices. An empty path does nothing.
    pub fn plant(&mut self, path: &str, value: impl Into<Value>) {
        let steps = parse_path(path);
        trace!(path, "plant");
        walk::plant(&mut *self.obj, &steps, value.into());
    }

    /// Delete the value at `path`. An empty path does nothing.
    ///
    /// Other array elements keep their indices: removing the last element
    /// pops it, removing any other turns the array into an index-keyed
    /// object.
    ///
    /// # Errors
    ///
    /// Returns [`PathResolutionError`] when the path does not resolve.
    pub fn snip(&mut self, path: &str) -> Result<(), PathResolutionError> {
        self.delete(path, Operation::Snip)
    }

    /// Like [`snip`](Self::snip), ignoring unresolved paths. Returns whether
    /// anything was removed.
    pub fn snip_if_present(&mut self, path: &str) -> bool {
        self.delete(path, Operation::Snip).is_ok() && !path.is_empty()
    }

    /// Delete the value at `path`, then every ancestor container left empty.
    ///
    /// Pruning stops at the first ancestor that still holds keys. The root is
    /// never removed. An empty path does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PathResolutionError`] when the path does not resolve.
    pub fn purge(&mut self, path: &str) -> Result<(), PathResolutionError> {
        self.delete(path, Operation::Purge)
    }

    /// Like [`purge`](Self::purge), ignoring unresolved paths. Returns whether
    /// anything was removed.
    pub fn purge_if_present(&mut self, path: &str) -> bool {
        self.delete(path, Operation::Purge).is_ok() && !path.is_empty()
    }

    fn delete(&mut self, path: &str, operation: Operation) -> Result<(), PathResolutionError> {
        let steps = parse_path(path);
        if steps.is_empty() {
            return Ok(());
        }
        trace!(path, %operation, "delete");
        walk::remove(&mut *self.obj, &steps)
            .map_err(|idx| PathResolutionError::new(operation, &steps, idx))?;
        if operation == Operation::Purge {
            self.prune(&steps);
        }
        Ok(())
    }

    fn prune(&mut self, steps: &[String]) {
        let mut depth = steps.len() - 1;
        while depth > 0 {
            let ancestor = &steps[..depth];
            match walk::descend(&*self.obj, ancestor) {
                Ok(node) if is_empty_container(node) => {}
                _ => break,
            }
            debug!(path = %format_path(ancestor), "pruning empty container");
            let removed = walk::remove(&mut *self.obj, ancestor);
            debug_assert!(removed.is_ok(), "resolved ancestor must be removable");
            depth -= 1;
        }
    }

    pub fn probe(&self, path: &str) -> bool {
        self.reader().probe(path)
    }

    pub fn tap(&self, path: &str) -> Result<&Value, PathResolutionError> {
        self.reader().tap(path)
    }

    pub fn tap_or<'s, 'd>(&'s self, path: &str, default: &'d Value) -> &'d Value
    where
        's: 'd,
    {
        self.reader().tap_or(path, default)
    }

    pub fn collect<I, S>(&self, paths: I) -> Vec<Option<&Value>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reader().collect(paths)
    }

    pub fn collect_with<'s, 'd>(&'s self, defaults: &'d Map<String, Value>) -> Vec<&'d Value>
    where
        's: 'd,
    {
        self.reader().collect_with(defaults)
    }

    pub fn extract<I, S>(&self, paths: I) -> IndexMap<String, Option<&Value>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reader().extract(paths)
    }

    pub fn extract_with<'s, 'd>(
        &'s self,
        defaults: &'d Map<String, Value>,
    ) -> IndexMap<String, &'d Value>
    where
        's: 'd,
    {
        self.reader().extract_with(defaults)
    }

    pub fn len(&self) -> usize {
        self.reader().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reader().is_empty()
    }

    pub fn has_all_properties<I, S>(&self, properties: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reader().has_all_properties(properties)
    }

    pub fn has_any_properties<I, S>(&self, properties: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reader().has_any_properties(properties)
    }

    pub fn probe_all<I, S>(&self, paths: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reader().probe_all(paths)
    }

    pub fn probe_any<I, S>(&self, paths: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reader().probe_any(paths)
    }

    pub fn truthy<I, S>(&self, paths: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reader().truthy(paths)
    }
}
