// micrograd-core/src/viz.rs

//! Graphviz export of a computation graph.
//!
//! Only the inspection API of [`Value`] is used: the exporter never changes
//! data, gradients or structure.

use crate::error::MicrogradError;
use crate::value::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Builds a DOT description of every node reachable from a root.
///
/// Each value becomes a record `label | data | grad`, and each non-leaf gets
/// a small op node in front of it: `operand -> op -> result`.
#[derive(Debug, Clone)]
pub struct DotBuilder {
    rankdir: String,
    precision: usize,
}

impl Default for DotBuilder {
    fn default() -> Self {
        DotBuilder {
            rankdir: "LR".to_string(),
            precision: 4,
        }
    }
}

impl DotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph direction, e.g. "LR" (default) or "TB".
    pub fn rankdir(mut self, rankdir: impl Into<String>) -> Self {
        self.rankdir = rankdir.into();
        self
    }

    /// Number of decimals printed for data and gradients.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Renders the graph rooted at `root` as a DOT string.
    pub fn to_dot_string(&self, root: &Value) -> String {
        let nodes = root.topological_order();
        let mut out = String::from("digraph G {\n");
        out.push_str(&format!("    rankdir=\"{}\";\n", escape(&self.rankdir)));

        for node in &nodes {
            let name = node_name(node);
            let label = node.label().map(|l| escape(&l)).unwrap_or_default();
            out.push_str(&format!(
                "    {} [shape=record, label=\"{{ {} | data {:.p$} | grad {:.p$} }}\"];\n",
                name,
                label,
                node.data(),
                node.grad(),
                p = self.precision
            ));

            if node.is_leaf() {
                continue;
            }
            let op_name = format!("{}_op", name);
            out.push_str(&format!(
                "    {} [label=\"{}\"];\n",
                op_name,
                escape(node.op_kind().symbol())
            ));
            out.push_str(&format!("    {} -> {};\n", op_name, name));
            for operand in node.operands() {
                out.push_str(&format!("    {} -> {};\n", node_name(&operand), op_name));
            }
        }

        out.push_str("}\n");
        out
    }

    /// Writes the DOT description to `writer`.
    pub fn write<W: Write>(&self, root: &Value, writer: &mut W) -> Result<(), MicrogradError> {
        writer.write_all(self.to_dot_string(root).as_bytes())?;
        Ok(())
    }

    /// Creates (or truncates) `path` and writes the DOT description into it.
    pub fn write_to_file(&self, root: &Value, path: impl AsRef<Path>) -> Result<(), MicrogradError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write(root, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

fn node_name(node: &Value) -> String {
    format!("n{}", node.id())
}

/// Escapes characters that are special inside a quoted record label.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '"' | '\\' | '{' | '}' | '|' | '<' | '>') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
#[path = "viz_test.rs"]
mod tests;
