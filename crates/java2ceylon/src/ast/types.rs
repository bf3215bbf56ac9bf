//! Type references.

use serde::{Deserialize, Serialize};

/// A Java primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Boolean,
}

impl PrimitiveType {
    /// Java spelling of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Char => "char",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Boolean => "boolean",
        }
    }
}

/// One `Name<Args>` segment of a (possibly qualified) class type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSegment {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<TypeArg>,
}

/// A class, interface or type-variable reference such as `java.util.List<T>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassType {
    pub segments: Vec<TypeSegment>,
}

impl ClassType {
    /// A single-segment type without arguments.
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            segments: vec![TypeSegment {
                name: name.into(),
                args: Vec::new(),
            }],
        }
    }

    /// A single-segment type with type arguments.
    pub fn generic(name: impl Into<String>, args: Vec<TypeArg>) -> Self {
        Self {
            segments: vec![TypeSegment {
                name: name.into(),
                args,
            }],
        }
    }

    /// Name of the last segment.
    pub fn name(&self) -> &str {
        self.segments.last().map(|s| s.name.as_str()).unwrap_or("")
    }
}

/// A type as written in a declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    Primitive(PrimitiveType),
    Class(ClassType),
    /// `element[]...[]`; `element` is never itself an array.
    Array { element: Box<TypeRef>, dims: usize },
}

impl TypeRef {
    pub fn primitive(p: PrimitiveType) -> Self {
        TypeRef::Primitive(p)
    }

    pub fn class(name: impl Into<String>) -> Self {
        TypeRef::Class(ClassType::simple(name))
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeArg>) -> Self {
        TypeRef::Class(ClassType::generic(name, args))
    }

    /// Wrap `element` in `dims` array dimensions.
    pub fn array(element: TypeRef, dims: usize) -> Self {
        match element {
            TypeRef::Array {
                element,
                dims: inner,
            } => TypeRef::Array {
                element,
                dims: inner + dims,
            },
            other => TypeRef::Array {
                element: Box::new(other),
                dims,
            },
        }
    }
}

/// Bound direction of a wildcard type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundKind {
    /// `? extends T`
    Extends,
    /// `? super T`
    Super,
}

/// A type argument inside `<...>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeArg {
    Type(TypeRef),
    Wildcard {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bound: Option<(BoundKind, TypeRef)>,
    },
}

impl TypeArg {
    pub fn of(ty: TypeRef) -> Self {
        TypeArg::Type(ty)
    }

    pub fn extends(ty: TypeRef) -> Self {
        TypeArg::Wildcard {
            bound: Some((BoundKind::Extends, ty)),
        }
    }

    pub fn super_of(ty: TypeRef) -> Self {
        TypeArg::Wildcard {
            bound: Some((BoundKind::Super, ty)),
        }
    }

    pub fn unbounded() -> Self {
        TypeArg::Wildcard { bound: None }
    }
}

/// A declared type parameter, `T extends A & B`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeParam {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bounds: Vec<ClassType>,
}

impl TypeParam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn bounded(name: impl Into<String>, bounds: Vec<ClassType>) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }
}
