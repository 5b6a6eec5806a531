use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Mapping from fully-qualified scope path to the calls recorded inside
/// that scope, in source order.
///
/// Keys are kept in first-insertion order so serialized output follows
/// the source file top to bottom; a scope with no recorded calls never
/// appears.
#[derive(Debug, Default, Clone)]
pub struct CallGraph {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl CallGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, scope_path: &str, call: String) {
        match self.index.get(scope_path) {
            Some(&i) => self.entries[i].1.push(call),
            None => {
                self.index.insert(scope_path.to_string(), self.entries.len());
                self.entries.push((scope_path.to_string(), vec![call]));
            }
        }
    }

    #[allow(dead_code)]
    pub fn calls_for(&self, scope_path: &str) -> Option<&[String]> {
        self.index
            .get(scope_path)
            .map(|&i| self.entries[i].1.as_slice())
    }

    /// Visit every recorded call mutably, with its scope path. Used by
    /// the normalizer pass.
    pub fn for_each_call_mut(&mut self, mut f: impl FnMut(&str, &mut String)) {
        for (scope, calls) in &mut self.entries {
            for call in calls {
                f(scope, call);
            }
        }
    }

    /// Fold another graph in, appending calls under existing keys.
    pub fn merge(&mut self, other: CallGraph) {
        for (scope, calls) in other.entries {
            for call in calls {
                self.record(&scope, call);
            }
        }
    }

    pub fn scope_count(&self) -> usize {
        self.entries.len()
    }

    pub fn call_count(&self) -> usize {
        self.entries.iter().map(|(_, calls)| calls.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CallGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (scope, calls) in &self.entries {
            map.serialize_entry(scope, calls)?;
        }
        map.end()
    }
}
