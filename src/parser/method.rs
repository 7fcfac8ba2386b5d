//! One `li` of the constructor or method details list.
//!
//! Four sources feed a single member: the signature spans, the description
//! block, the notes list, and the throws entries inside the notes list (which
//! supply both the `throws` clause and the `@throws` lines).

use super::{body::extract_body, notes::extract_notes, optional_text, required_text};
use crate::dom::{self, Node};
use crate::error::ExtractError;
use crate::model::{DocNotes, MemberSignature, MethodDoc};
use crate::text;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

// Java identifier, optionally package-qualified
static RE_EXCEPTION_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*)*").unwrap()
});

/// Constructors come through here too; they simply have no return type.
pub fn extract_method(item: Node) -> Result<MethodDoc, ExtractError> {
    let signature_div = item.require(&dom::MEMBER_SIGNATURE)?;

    let parameters = signature_div
        .find_first(&dom::PARAMETERS)
        .map(|span| {
            text::strip_line_breaks(&text::strip_non_breaking_spaces(span.text().trim()))
        })
        .unwrap_or_else(|| "()".to_string());

    let notes = item
        .find_first(&dom::NOTES)
        .map(extract_notes)
        .unwrap_or_default();

    let name = required_text(signature_div, &dom::ELEMENT_NAME)?;
    let throws = exception_names(&name, &notes);

    let signature = MemberSignature {
        modifiers: required_text(signature_div, &dom::MODIFIERS)?,
        type_parameters: optional_text(signature_div, &dom::TYPE_PARAMETERS),
        return_type: optional_text(signature_div, &dom::RETURN_TYPE),
        name,
        parameters,
        throws,
    };
    debug!(
        name = %signature.name,
        params = notes.parameters.len(),
        throws = notes.throws.len(),
        overrides = notes.overrides,
        "extracted method"
    );

    Ok(MethodDoc {
        body: extract_body(item),
        signature,
        notes,
    })
}

/// Exception type names for the `throws` clause, one per Throws entry that
/// starts with an identifier.
fn exception_names(member: &str, notes: &DocNotes) -> Vec<String> {
    notes
        .throws
        .iter()
        .filter_map(|raw| {
            let name = exception_name(raw);
            if name.is_none() {
                warn!(member, entry = %raw.trim(), "throws entry has no exception type");
            }
            name
        })
        .collect()
}

/// Leading identifier of a Throws entry: `"IOException - if read fails"`
/// → `"IOException"`. The rest is prose for the `@throws` line.
pub fn exception_name(raw: &str) -> Option<String> {
    RE_EXCEPTION_NAME
        .find(raw.trim_start())
        .map(|m| text::normalize_note(m.as_str()))
}
