//! Renderer module — turns an extracted [`Document`] into source text.

pub mod java;

use crate::model::Document;

/// Trait for rendering a Document into a source file.
pub trait Renderer {
    fn render(&self, doc: &Document) -> String;
    fn file_extension(&self) -> &str;
}
