//! One `li` of the field details list.

use super::{body::extract_body, required_text};
use crate::dom::{self, Node};
use crate::error::ExtractError;
use crate::model::FieldDoc;
use tracing::debug;

/// Every field signature has modifiers, type and name; a missing span is a
/// structural error.
pub fn extract_field(item: Node) -> Result<FieldDoc, ExtractError> {
    let signature = item.require(&dom::MEMBER_SIGNATURE)?;

    let field = FieldDoc {
        body: extract_body(item),
        modifiers: required_text(signature, &dom::MODIFIERS)?,
        field_type: required_text(signature, &dom::RETURN_TYPE)?,
        name: required_text(signature, &dom::ELEMENT_NAME)?,
    };
    debug!(name = %field.name, "extracted field");
    Ok(field)
}
