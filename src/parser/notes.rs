//! `dl.notes` block: Parameters / Throws / Returns / Overrides.
//!
//! The list is flat `<dt>`/`<dd>` pairs, where one `<dt>` label owns the run
//! of `<dd>` siblings that follows it. Only the layout emitted by the JDK 17
//! standard doclet has been checked; other doclets may break the run early.

use crate::dom::{self, Node};
use crate::model::DocNotes;

const PARAMETERS: &str = "Parameters:";
const THROWS: &str = "Throws:";
const RETURNS: &str = "Returns:";
const OVERRIDES: &str = "Overrides:";

pub fn extract_notes(notes: Node) -> DocNotes {
    let returns = find_label(notes, RETURNS)
        .and_then(following_value)
        .map(|dd| dd.text())
        .filter(|text| !text.is_empty());

    DocNotes {
        parameters: find_label(notes, PARAMETERS).map(value_run).unwrap_or_default(),
        throws: find_label(notes, THROWS).map(value_run).unwrap_or_default(),
        returns,
        overrides: find_label(notes, OVERRIDES).is_some(),
    }
}

/// First `<dt>` whose text is exactly `label`.
fn find_label<'a>(notes: Node<'a>, label: &str) -> Option<Node<'a>> {
    notes
        .children(&dom::NOTE_LABEL)
        .into_iter()
        .find(|dt| dt.text().trim() == label)
}

/// Text of every consecutive `<dd>` right after `label`.
fn value_run(label: Node) -> Vec<String> {
    let mut values = Vec::new();
    let mut sibling = label.next_element_sibling();
    while let Some(node) = sibling {
        if node.tag_name() != "dd" {
            break;
        }
        values.push(node.text());
        sibling = node.next_element_sibling();
    }
    values
}

/// The first `<dd>` somewhere after `label` among its siblings.
fn following_value(label: Node) -> Option<Node> {
    let mut sibling = label.next_element_sibling();
    while let Some(node) = sibling {
        if node.tag_name() == "dd" {
            return Some(node);
        }
        sibling = node.next_element_sibling();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn notes_of(markup: &str) -> DocNotes {
        let html = Html::parse_document(markup);
        let root = Node::new(html.root_element());
        extract_notes(root.require(&dom::NOTES).unwrap())
    }

    #[test]
    fn full_notes_block() {
        let notes = notes_of(
            r#"<dl class="notes">
<dt>Overrides:</dt>
<dd><code>toString</code>&nbsp;in class&nbsp;<code>Object</code></dd>
<dt>Parameters:</dt>
<dd><code>path</code> - where to read from</dd>
<dd><code>limit</code> - maximum bytes</dd>
<dt>Returns:</dt>
<dd>the bytes read</dd>
<dt>Throws:</dt>
<dd><code>IOException</code> - if read fails</dd>
</dl>"#,
        );
        assert_eq!(
            notes.parameters,
            vec!["path - where to read from", "limit - maximum bytes"]
        );
        assert_eq!(notes.returns.as_deref(), Some("the bytes read"));
        assert_eq!(notes.throws, vec!["IOException - if read fails"]);
        assert!(notes.overrides);
    }

    #[test]
    fn empty_block_is_all_defaults() {
        let notes = notes_of(r#"<dl class="notes"></dl>"#);
        assert_eq!(notes, DocNotes::default());
    }

    #[test]
    fn run_stops_at_next_label() {
        let notes = notes_of(
            r#"<dl class="notes"><dt>Parameters:</dt><dd>a - first</dd><dt>See Also:</dt><dd>other</dd></dl>"#,
        );
        assert_eq!(notes.parameters, vec!["a - first"]);
        assert!(notes.throws.is_empty());
        assert!(!notes.overrides);
    }

    #[test]
    fn type_parameters_label_is_not_parameters() {
        let notes = notes_of(
            r#"<dl class="notes"><dt>Type Parameters:</dt><dd>T - element type</dd></dl>"#,
        );
        assert!(notes.parameters.is_empty());
    }

    #[test]
    fn returns_takes_a_single_value() {
        let notes = notes_of(
            r#"<dl class="notes"><dt>Returns:</dt><dd>first</dd><dd>second</dd></dl>"#,
        );
        assert_eq!(notes.returns.as_deref(), Some("first"));
    }

    #[test]
    fn overrides_only_needs_the_label() {
        let notes = notes_of(r#"<dl class="notes"><dt>Overrides:</dt></dl>"#);
        assert!(notes.overrides);
        assert!(notes.parameters.is_empty());
        assert_eq!(notes.returns, None);
    }
}
