//! The class's own header from `section.class-description`.

use super::{body::extract_body, required_text};
use crate::dom::{self, Node};
use crate::error::ExtractError;
use crate::model::ClassDoc;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Every class extends Object; javadoc still prints it.
static RE_DEFAULT_SUPERCLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bextends (?:java\.lang\.)?Object\b").unwrap());

pub fn extract_class(section: Node) -> Result<ClassDoc, ExtractError> {
    let signature = section.require(&dom::TYPE_SIGNATURE)?;

    let extends_implements = signature
        .find_first(&dom::EXTENDS_IMPLEMENTS)
        .map(|span| strip_default_superclass(&span.spaced_text()))
        .filter(|rest| !rest.is_empty());

    let class = ClassDoc {
        body: extract_body(section),
        modifiers: required_text(signature, &dom::MODIFIERS)?,
        name: required_text(signature, &dom::TYPE_NAME)?,
        extends_implements,
    };
    debug!(name = %class.name, "extracted class header");
    Ok(class)
}

/// Drop `extends Object` and keep whatever else the clause lists.
fn strip_default_superclass(clause: &str) -> String {
    RE_DEFAULT_SUPERCLASS
        .replace(clause, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
