//! Data model for one javadoc class page. Independent of both HTML and Java
//! text; the parser fills it in and the renderer reads it.

use std::fmt;

/// Everything extracted from one page.
#[derive(Debug, Default)]
pub struct Document {
    pub class: ClassDoc,
    pub fields: Vec<FieldDoc>,
    pub constructors: Vec<MethodDoc>,
    pub methods: Vec<MethodDoc>,
}

/// The class's own header.
#[derive(Debug, Default)]
pub struct ClassDoc {
    /// Description block as inner HTML, line breaks removed
    pub body: String,
    /// e.g. "public final class"
    pub modifiers: String,
    /// e.g. "Box<T>"
    pub name: String,
    /// Whatever extends/implements text is left once the implicit
    /// `extends Object` is dropped
    pub extends_implements: Option<String>,
}

impl ClassDoc {
    /// Class name without type parameters: "Box<T>" → "Box".
    pub fn simple_name(&self) -> &str {
        self.name
            .split('<')
            .next()
            .unwrap_or(&self.name)
            .trim()
    }
}

#[derive(Debug, Default)]
pub struct FieldDoc {
    pub body: String,
    pub modifiers: String,
    pub field_type: String,
    pub name: String,
}

/// A constructor or method.
#[derive(Debug, Default)]
pub struct MethodDoc {
    pub body: String,
    pub signature: MemberSignature,
    pub notes: DocNotes,
}

#[derive(Debug, Default)]
pub struct MemberSignature {
    pub modifiers: String,
    /// Generic parameters declared on the member, e.g. "<T>"
    pub type_parameters: Option<String>,
    /// None for constructors
    pub return_type: Option<String>,
    pub name: String,
    /// Normalized, parentheses included
    pub parameters: String,
    /// Exception type names for the `throws` clause, in document order
    pub throws: Vec<String>,
}

/// Raw fragments from a member's `dl.notes` block.
#[derive(Debug, Default, PartialEq)]
pub struct DocNotes {
    /// One entry per `<dd>` under "Parameters:"
    pub parameters: Vec<String>,
    /// One entry per `<dd>` under "Throws:"
    pub throws: Vec<String>,
    pub returns: Option<String>,
    /// "Overrides:" label present
    pub overrides: bool,
}

/// Literal used in a generated placeholder `return` statement.
///
/// Only the eight exact primitive spellings map to a primitive family;
/// every other name, including arrays and boxed types, is a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultReturn {
    Integral,
    Long,
    Float,
    Double,
    Char,
    Boolean,
    Reference,
}

impl DefaultReturn {
    /// `None` for `void`, which gets no return statement at all.
    pub fn for_return_type(type_name: &str) -> Option<Self> {
        let kind = match type_name {
            "void" => return None,
            "byte" | "short" | "int" => Self::Integral,
            "long" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            "char" => Self::Char,
            "boolean" => Self::Boolean,
            _ => Self::Reference,
        };
        Some(kind)
    }

    pub fn literal(self) -> &'static str {
        match self {
            Self::Integral => "0",
            Self::Long => "0L",
            Self::Float => "0.0f",
            Self::Double => "0.0d",
            Self::Char => r"'\u0000'",
            Self::Boolean => "false",
            Self::Reference => "null",
        }
    }
}

/// One rendered field, constructor or method: doc comment, optional
/// annotation line, declaration, and body (`;` for fields).
#[derive(Debug)]
pub struct MemberUnit {
    pub doc_comment: String,
    pub annotation: Option<&'static str>,
    pub signature: String,
    pub body: String,
}

impl fmt::Display for MemberUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.doc_comment)?;
        if let Some(annotation) = self.annotation {
            writeln!(f, "{annotation}")?;
        }
        write!(f, "{}{}", self.signature, self.body)
    }
}
