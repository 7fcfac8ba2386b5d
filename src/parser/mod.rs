//! Extraction of a javadoc class page into a [`Document`].
//!
//! The class description section is mandatory; the field, constructor and
//! method sections each contribute nothing when absent.

pub mod body;
pub mod class;
pub mod field;
pub mod method;
pub mod notes;

use crate::dom::{self, Marker, Node};
use crate::error::ExtractError;
use crate::model::Document;
use crate::text;
use scraper::Html;

/// Parse page source and extract every part the stub needs.
pub fn parse_document(source: &str) -> Result<Document, ExtractError> {
    let html = Html::parse_document(source);
    let root = Node::new(html.root_element());

    let class = class::extract_class(root.require(&dom::CLASS_DESCRIPTION)?)?;

    let fields = member_items(root, &dom::FIELD_DETAILS)?
        .into_iter()
        .map(field::extract_field)
        .collect::<Result<Vec<_>, _>>()?;

    let constructors = member_items(root, &dom::CONSTRUCTOR_DETAILS)?
        .into_iter()
        .map(method::extract_method)
        .collect::<Result<Vec<_>, _>>()?;

    let methods = member_items(root, &dom::METHOD_DETAILS)?
        .into_iter()
        .map(method::extract_method)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Document {
        class,
        fields,
        constructors,
        methods,
    })
}

/// Top-level `li` items of a details section's member list.
fn member_items<'a>(root: Node<'a>, section: &Marker) -> Result<Vec<Node<'a>>, ExtractError> {
    let Some(section) = root.find_first(section) else {
        return Ok(Vec::new());
    };
    Ok(section.require(&dom::MEMBER_LIST)?.children(&dom::LIST_ITEM))
}

/// Trimmed, nbsp-free text of a required span.
fn required_text(parent: Node, marker: &Marker) -> Result<String, ExtractError> {
    Ok(span_text(parent.require(marker)?))
}

/// Like [`required_text`], but an absent or blank span is `None`.
fn optional_text(parent: Node, marker: &Marker) -> Option<String> {
    parent
        .find_first(marker)
        .map(span_text)
        .filter(|text| !text.is_empty())
}

fn span_text(span: Node) -> String {
    text::strip_non_breaking_spaces(&span.text()).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"<section class="class-description">
<div class="type-signature"><span class="modifiers">public class </span><span class="element-name type-name-label">Counter</span></div>
</section>"#;

    #[test]
    fn header_only_page() {
        let doc = parse_document(HEADER).unwrap();
        assert_eq!(doc.class.name, "Counter");
        assert!(doc.fields.is_empty());
        assert!(doc.constructors.is_empty());
        assert!(doc.methods.is_empty());
    }

    #[test]
    fn members_in_document_order() {
        let page = format!(
            r#"{HEADER}
<section class="method-details"><ul class="member-list">
<li><div class="member-signature"><span class="modifiers">public</span>&nbsp;<span class="return-type">void</span>&nbsp;<span class="element-name">reset</span>()</div></li>
<li><div class="member-signature"><span class="modifiers">public</span>&nbsp;<span class="return-type">int</span>&nbsp;<span class="element-name">value</span>()</div></li>
</ul></section>"#
        );
        let doc = parse_document(&page).unwrap();
        let names: Vec<_> = doc.methods.iter().map(|m| m.signature.name.as_str()).collect();
        assert_eq!(names, ["reset", "value"]);
    }

    #[test]
    fn missing_class_description_fails() {
        let err = parse_document("<html><body><h1>Nothing</h1></body></html>").unwrap_err();
        assert!(matches!(err, ExtractError::MissingMarker { what: "class description", .. }));
    }

    #[test]
    fn section_without_member_list_fails() {
        let page = format!(r#"{HEADER}<section class="field-details"><h2>Field Details</h2></section>"#);
        let err = parse_document(&page).unwrap_err();
        assert!(matches!(err, ExtractError::MissingMarker { what: "member list", .. }));
    }
}
