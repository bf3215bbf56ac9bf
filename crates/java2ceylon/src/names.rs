//! Identifier and type mapping.
//!
//! Pure, context-free helpers shared by every translator: identifier
//! escaping, primitive renaming and array specialization, and rendering of
//! type references.

use crate::ast::{BoundKind, ClassType, PrimitiveType, TypeArg, TypeParam, TypeRef};
use std::borrow::Cow;

/// Prefix that forces Ceylon to read a token as an initial-lowercase identifier.
pub const ESCAPE_MARKER: &str = "\\i";

/// Ceylon keywords that cannot be used as identifiers.
pub const RESERVED_KEYWORDS: &[&str] = &[
    "assembly",
    "abstracts",
    "alias",
    "assert",
    "assign",
    "break",
    "case",
    "catch",
    "class",
    "continue",
    "dynamic",
    "else",
    "exists",
    "extends",
    "finally",
    "for",
    "function",
    "given",
    "if",
    "import",
    "in",
    "interface",
    "is",
    "module",
    "nonempty",
    "object",
    "of",
    "out",
    "outer",
    "package",
    "return",
    "satisfies",
    "super",
    "switch",
    "then",
    "this",
    "throw",
    "try",
    "value",
    "void",
    "while",
];

pub fn is_reserved(name: &str) -> bool {
    RESERVED_KEYWORDS.contains(&name)
}

/// Escape `name` for use as a Ceylon identifier.
///
/// Reserved words are always prefixed with [`ESCAPE_MARKER`]. When
/// `must_be_lowercase_leading` is set, so are names that don't start with a
/// lowercase letter (Ceylon requires that of attributes, methods and locals).
pub fn escape(name: &str, must_be_lowercase_leading: bool) -> Cow<'_, str> {
    let needs_marker = is_reserved(name)
        || (must_be_lowercase_leading
            && name.chars().next().is_some_and(|c| !c.is_lowercase()));
    if needs_marker {
        Cow::Owned(format!("{ESCAPE_MARKER}{name}"))
    } else {
        Cow::Borrowed(name)
    }
}

/// Property name for a JavaBean accessor: `getName` and `isName` give
/// `name`, `getX` gives `x`. Returns `None` for anything else.
pub fn getter_property(method: &str) -> Option<String> {
    let suffix = method
        .strip_prefix("get")
        .or_else(|| method.strip_prefix("is"))?;
    let mut chars = suffix.chars();
    let first = chars.next().filter(char::is_ascii_uppercase)?;
    let rest = chars.as_str();
    if !rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    let mut property = String::with_capacity(suffix.len());
    property.push(first.to_ascii_lowercase());
    property.push_str(rest);
    Some(property)
}

fn primitive_from_name(name: &str) -> Option<PrimitiveType> {
    Some(match name {
        "byte" => PrimitiveType::Byte,
        "short" => PrimitiveType::Short,
        "int" => PrimitiveType::Int,
        "long" => PrimitiveType::Long,
        "char" => PrimitiveType::Char,
        "float" => PrimitiveType::Float,
        "double" => PrimitiveType::Double,
        "boolean" => PrimitiveType::Boolean,
        _ => return None,
    })
}

/// Ceylon type for a Java primitive.
pub fn ceylon_primitive(p: PrimitiveType) -> &'static str {
    match p {
        PrimitiveType::Int | PrimitiveType::Long | PrimitiveType::Short => "Integer",
        PrimitiveType::Float | PrimitiveType::Double => "Float",
        PrimitiveType::Boolean => "Boolean",
        PrimitiveType::Byte => "Byte",
        PrimitiveType::Char => "Character",
    }
}

/// Map a Java primitive type name to its Ceylon type; other names pass through.
pub fn map_primitive_type(name: &str) -> &str {
    match primitive_from_name(name) {
        Some(p) => ceylon_primitive(p),
        None => name,
    }
}

/// Specialized Java array class for a primitive element type.
pub fn primitive_array(p: PrimitiveType) -> &'static str {
    match p {
        PrimitiveType::Int => "IntArray",
        PrimitiveType::Short => "ShortArray",
        PrimitiveType::Boolean => "BooleanArray",
        PrimitiveType::Byte => "ByteArray",
        PrimitiveType::Long => "LongArray",
        PrimitiveType::Float => "FloatArray",
        PrimitiveType::Double => "DoubleArray",
        PrimitiveType::Char => "CharArray",
    }
}

/// Ceylon array type for an array of `element`.
///
/// Used for both array-typed declarations and array-creation expressions, so
/// the two spellings always agree. Only the innermost element type decides
/// the result; extra dimensions don't nest.
pub fn map_array_type(element: &TypeRef) -> String {
    match element {
        TypeRef::Primitive(p) => primitive_array(*p).to_string(),
        TypeRef::Class(class) => format!("ObjectArray<{}>", render_class_type(class)),
        TypeRef::Array { element, .. } => map_array_type(element),
    }
}

/// Render a type reference as Ceylon.
pub fn render_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Primitive(p) => ceylon_primitive(*p).to_string(),
        TypeRef::Class(class) => render_class_type(class),
        TypeRef::Array { element, .. } => map_array_type(element),
    }
}

/// Render `a.b.C<T>`; names are kept as written.
pub fn render_class_type(class: &ClassType) -> String {
    let mut out = String::new();
    for (i, segment) in class.segments.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push_str(&segment.name);
        if !segment.args.is_empty() {
            out.push('<');
            for (j, arg) in segment.args.iter().enumerate() {
                if j > 0 {
                    out.push_str(", ");
                }
                out.push_str(&render_type_arg(arg));
            }
            out.push('>');
        }
    }
    out
}

/// Wildcards become variance annotations: `? extends T` is `out T`,
/// `? super T` is `in T`.
fn render_type_arg(arg: &TypeArg) -> String {
    match arg {
        TypeArg::Type(ty) => render_type(ty),
        TypeArg::Wildcard {
            bound: Some((BoundKind::Extends, ty)),
        } => format!("out {}", render_type(ty)),
        TypeArg::Wildcard {
            bound: Some((BoundKind::Super, ty)),
        } => format!("in {}", render_type(ty)),
        TypeArg::Wildcard { bound: None } => "out Anything".to_string(),
    }
}

/// `<T, U>`, or nothing for an empty list.
pub fn render_type_params(params: &[TypeParam]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    format!("<{}>", names.join(", "))
}

/// ` given T satisfies A & B` for every bounded parameter.
pub fn render_type_constraints(params: &[TypeParam]) -> String {
    let mut out = String::new();
    for param in params.iter().filter(|p| !p.bounds.is_empty()) {
        let bounds: Vec<String> = param.bounds.iter().map(render_class_type).collect();
        out.push_str(&format!(
            " given {} satisfies {}",
            param.name,
            bounds.join(" & ")
        ));
    }
    out
}
