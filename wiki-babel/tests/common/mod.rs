//! Shared helpers for the integration tests.

use std::path::PathBuf;
use wiki_babel::ir::nodes::Node;

/// Read a fixture from `tests/fixtures`.
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// Node type names, in order.
pub fn type_names(nodes: &[Node]) -> Vec<&'static str> {
    nodes.iter().map(Node::type_name).collect()
}
