//! Thin query layer over the parsed HTML tree.
//!
//! Extractors only ever need three moves: find the first descendant matching
//! a marker, list direct children matching a marker, and step to the next
//! element sibling. [`Node`] exposes exactly that on top of `scraper`.

use crate::error::ExtractError;
use scraper::{ElementRef, Selector};
use std::sync::OnceLock;

/// A named CSS selector for one of the javadoc layout's structural markers.
pub struct Marker {
    pub what: &'static str,
    pub css: &'static str,
    selector: OnceLock<Selector>,
}

impl Marker {
    pub const fn new(what: &'static str, css: &'static str) -> Self {
        Self {
            what,
            css,
            selector: OnceLock::new(),
        }
    }

    fn selector(&self) -> &Selector {
        self.selector.get_or_init(|| Selector::parse(self.css).unwrap())
    }
}

// -- Javadoc layout markers ---------------------------------------------------

pub static CLASS_DESCRIPTION: Marker = Marker::new("class description", "section.class-description");
pub static TYPE_SIGNATURE: Marker = Marker::new("class signature", "div.type-signature");
pub static TYPE_NAME: Marker = Marker::new("class name", "span.element-name.type-name-label");
pub static EXTENDS_IMPLEMENTS: Marker = Marker::new("extends/implements", "span.extends-implements");

pub static FIELD_DETAILS: Marker = Marker::new("field details", "section.field-details");
pub static CONSTRUCTOR_DETAILS: Marker = Marker::new("constructor details", "section.constructor-details");
pub static METHOD_DETAILS: Marker = Marker::new("method details", "section.method-details");
pub static MEMBER_LIST: Marker = Marker::new("member list", "ul.member-list");
pub static LIST_ITEM: Marker = Marker::new("list item", "li");

pub static MEMBER_SIGNATURE: Marker = Marker::new("member signature", "div.member-signature");
pub static MODIFIERS: Marker = Marker::new("modifiers", "span.modifiers");
pub static TYPE_PARAMETERS: Marker = Marker::new("type parameters", "span.type-parameters");
pub static RETURN_TYPE: Marker = Marker::new("type", "span.return-type");
pub static ELEMENT_NAME: Marker = Marker::new("member name", "span.element-name");
pub static PARAMETERS: Marker = Marker::new("parameter list", "span.parameters");

pub static BLOCK: Marker = Marker::new("description block", "div.block");
pub static NOTES: Marker = Marker::new("notes", "dl.notes");
pub static NOTE_LABEL: Marker = Marker::new("notes label", "dt");

/// Read-only view of one element in the parsed page.
#[derive(Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    pub fn new(element: ElementRef<'a>) -> Self {
        Self(element)
    }

    /// First descendant matching `marker`, in document order.
    pub fn find_first(&self, marker: &Marker) -> Option<Node<'a>> {
        self.0.select(marker.selector()).next().map(Node)
    }

    /// Like [`find_first`](Self::find_first), but absence is a structural error.
    pub fn require(&self, marker: &Marker) -> Result<Node<'a>, ExtractError> {
        self.find_first(marker).ok_or(ExtractError::MissingMarker {
            what: marker.what,
            selector: marker.css,
        })
    }

    /// Direct element children matching `marker`.
    pub fn children(&self, marker: &Marker) -> Vec<Node<'a>> {
        let selector = marker.selector();
        self.0
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|child| selector.matches(child))
            .map(Node)
            .collect()
    }

    /// The next sibling that is an element, skipping text and comments.
    pub fn next_element_sibling(&self) -> Option<Node<'a>> {
        self.0.next_siblings().find_map(ElementRef::wrap).map(Node)
    }

    pub fn tag_name(&self) -> &str {
        self.0.value().name()
    }

    /// Concatenated text content, untrimmed.
    pub fn text(&self) -> String {
        self.0.text().collect()
    }

    /// Inner markup serialized back to HTML.
    pub fn inner_html(&self) -> String {
        self.0.inner_html()
    }

    /// Text content with `<br>` read as a break and every whitespace run
    /// (including non-breaking spaces) reduced to a single space.
    pub fn spaced_text(&self) -> String {
        let mut raw = String::new();
        for node in self.0.descendants() {
            match node.value() {
                scraper::Node::Text(text) => raw.push_str(text),
                scraper::Node::Element(element) if element.name() == "br" => raw.push(' '),
                _ => {}
            }
        }
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
