//! Java stub renderer.
//!
//! Keeps the layout of stubs produced by earlier tooling: two-space closing
//! brace, a `// TODO: Implement` marker, and a trailing space on blank comment
//! lines. The file itself ends with a newline.

use crate::model::*;
use crate::render::Renderer;
use crate::text;

pub struct JavaRenderer;

const PLACEHOLDER: &str = "    // TODO: Implement\n";
const OVERRIDE: &str = "@Override";

impl Renderer for JavaRenderer {
    fn render(&self, doc: &Document) -> String {
        let mut output = class_header(&doc.class);

        let fields = doc.fields.iter().map(field_unit);
        let callables = doc.constructors.iter().chain(&doc.methods).map(method_unit);
        for unit in fields.chain(callables) {
            output.push_str(&unit.to_string());
            output.push_str("\n\n");
        }

        output.push_str("}\n");
        output
    }

    fn file_extension(&self) -> &str {
        "java"
    }
}

/// Doc comment, declaration line and the opening brace. The class is left
/// open; [`JavaRenderer::render`] closes it after the members.
pub fn class_header(class: &ClassDoc) -> String {
    let mut declaration = format!("{} {}", class.modifiers, class.name);
    if let Some(ref rest) = class.extends_implements {
        declaration.push(' ');
        declaration.push_str(rest);
    }
    format!("/**\n * {}\n */\n{} {{\n\n", class.body, declaration)
}

pub fn field_unit(field: &FieldDoc) -> MemberUnit {
    let signature = [
        field.modifiers.as_str(),
        field.field_type.as_str(),
        field.name.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ");

    MemberUnit {
        doc_comment: format!("/**\n * {}\n */\n", field.body),
        annotation: None,
        signature,
        body: ";".to_string(),
    }
}

pub fn method_unit(method: &MethodDoc) -> MemberUnit {
    MemberUnit {
        doc_comment: method_comment(method),
        annotation: method.notes.overrides.then_some(OVERRIDE),
        signature: method_signature(&method.signature),
        body: placeholder_body(method.signature.return_type.as_deref()),
    }
}

/// Description first, then the @param, @return and @throws groups, each
/// preceded by a blank comment line and only when non-empty.
fn method_comment(method: &MethodDoc) -> String {
    let notes = &method.notes;
    let mut comment = format!("/**\n * {}\n", method.body);

    if !notes.parameters.is_empty() {
        comment.push_str(" * \n");
        for param in &notes.parameters {
            comment.push_str(&format!(" * @param {}\n", text::normalize_note(param)));
        }
    }

    if let Some(ref returns) = notes.returns {
        comment.push_str(&format!(" * \n * @return {}\n", text::normalize_note(returns)));
    }

    if !notes.throws.is_empty() {
        comment.push_str(" * \n");
        for throw in &notes.throws {
            comment.push_str(&format!(" * @throws {}\n", text::normalize_note(throw)));
        }
    }

    comment.push_str(" */\n");
    comment
}

fn method_signature(sig: &MemberSignature) -> String {
    let mut parts = vec![sig.modifiers.as_str()];
    parts.extend(sig.type_parameters.as_deref());
    parts.extend(sig.return_type.as_deref());
    parts.push(&sig.name);
    parts.retain(|part| !part.is_empty());

    let mut signature = parts.join(" ");
    signature.push_str(&sig.parameters);
    if !sig.throws.is_empty() {
        signature.push_str(" throws ");
        signature.push_str(&sig.throws.join(", "));
    }
    signature
}

/// Braces around the placeholder marker, plus a default `return` for
/// non-void methods. Constructors have no return type and get none.
fn placeholder_body(return_type: Option<&str>) -> String {
    let mut body = format!(" {{\n{PLACEHOLDER}\n");
    if let Some(default) = return_type.and_then(DefaultReturn::for_return_type) {
        body.push_str(&format!(
            "    return {}; // default return statement\n",
            default.literal()
        ));
    }
    body.push_str("  }");
    body
}
