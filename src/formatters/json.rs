use anyhow::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

use crate::core::CallGraph;

/// Writes a call graph as a pretty-printed JSON object, 4-space
/// indented, keys in scope insertion order.
pub struct JsonGraphFormatter;

impl JsonGraphFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_to_file(&self, graph: &CallGraph, output_path: &Path) -> Result<()> {
        let json_content = self.format_graph(graph)?;
        fs::write(output_path, json_content)?;
        Ok(())
    }

    pub fn format_graph(&self, graph: &CallGraph) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        graph.serialize(&mut serializer)?;
        Ok(String::from_utf8(buf)?)
    }
}

impl Default for JsonGraphFormatter {
    fn default() -> Self {
        Self::new()
    }
}
