//! Text extraction helpers for markup nodes.

use roxmltree::Node;

/// Returns the first text child of `node`, or an empty string if there is none.
///
/// Only direct children are considered: `<answer><b>x</b></answer>` yields `""`.
pub fn first_text(node: Node) -> String {
    node.children()
        .find(|child| child.is_text())
        .and_then(|child| child.text())
        .unwrap_or_default()
        .to_string()
}
