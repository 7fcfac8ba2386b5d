//! Main description block (`div.block`).

use crate::dom::{self, Node};
use crate::text;

/// Inner HTML of the first description block under `parent`, with line
/// breaks removed. Undocumented members have no block; that yields "".
pub fn extract_body(parent: Node) -> String {
    parent
        .find_first(&dom::BLOCK)
        .map(|block| text::strip_line_breaks(&block.inner_html()))
        .unwrap_or_default()
}
