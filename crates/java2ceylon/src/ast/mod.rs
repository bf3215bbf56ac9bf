//! Java abstract syntax tree handed over by the parsing front end.
//!
//! The tree is read-only input to the translator: each node owns its
//! children, and nothing here is mutated during translation. Parentheses are
//! kept as explicit [`Expr::Paren`] nodes so the emitted text keeps the
//! grouping the source had.
//!
//! Every type derives `Serialize`/`Deserialize`, so a front end written in
//! any language can hand a unit over as JSON (see [`crate::input::json`]).

mod expr;
mod stmt;
mod structure_eq;
mod types;

pub use expr::{AssignOp, BinaryOp, Expr, Literal, Precedence, UnaryOp};
pub use stmt::{
    Block, CatchClause, ConstructorTarget, ForInit, LocalVarDecl, Resource, Stmt, SwitchGroup,
    SwitchLabel, VarDeclarator,
};
pub use structure_eq::StructureEq;
pub use types::{BoundKind, ClassType, PrimitiveType, TypeArg, TypeParam, TypeRef, TypeSegment};

use serde::{Deserialize, Serialize};

/// One parsed `.java` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default)]
    pub imports: Vec<Import>,
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

impl CompilationUnit {
    pub fn new(imports: Vec<Import>, types: Vec<TypeDecl>) -> Self {
        Self {
            package: None,
            imports,
            types,
        }
    }
}

/// What an import directive brings into scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportMember {
    /// `import pkg.Name;`
    Single(String),
    /// `import pkg.*;`
    Wildcard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    pub package: String,
    pub member: ImportMember,
}

impl Import {
    pub fn single(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            member: ImportMember::Single(name.into()),
        }
    }

    pub fn wildcard(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            member: ImportMember::Wildcard,
        }
    }
}

/// Declaration modifiers, including the `@Override` annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
    Default,
    Override,
    Synchronized,
    Native,
    Transient,
    Volatile,
    Strictfp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDecl {
    Class(ClassDecl),
    Interface(InterfaceDecl),
    Enum(EnumDecl),
}

impl TypeDecl {
    pub fn name(&self) -> &str {
        match self {
            TypeDecl::Class(c) => &c.name,
            TypeDecl::Interface(i) => &i.name,
            TypeDecl::Enum(e) => &e.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<TypeParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<ClassType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<ClassType>,
    #[serde(default)]
    pub body: Vec<Member>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>, body: Vec<Member>) -> Self {
        Self {
            modifiers: Vec::new(),
            name: name.into(),
            type_params: Vec::new(),
            superclass: None,
            interfaces: Vec::new(),
            body,
        }
    }

    pub fn has_constructor(&self) -> bool {
        self.body
            .iter()
            .any(|m| matches!(m, Member::Constructor(_)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDecl {
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<TypeParam>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<ClassType>,
    #[serde(default)]
    pub body: Vec<Member>,
}

impl InterfaceDecl {
    pub fn new(name: impl Into<String>, body: Vec<Member>) -> Self {
        Self {
            modifiers: Vec::new(),
            name: name.into(),
            type_params: Vec::new(),
            extends: Vec::new(),
            body,
        }
    }
}

/// `NAME` or `NAME(args)` in an enum body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumConstant {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Expr>,
}

impl EnumConstant {
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDecl {
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<ClassType>,
    pub constants: Vec<EnumConstant>,
    #[serde(default)]
    pub body: Vec<Member>,
}

impl EnumDecl {
    pub fn new(name: impl Into<String>, constants: Vec<EnumConstant>) -> Self {
        Self {
            modifiers: Vec::new(),
            name: name.into(),
            interfaces: Vec::new(),
            constants,
            body: Vec::new(),
        }
    }
}

/// A declaration inside a class, interface or enum body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
    Constructor(ConstructorDecl),
    Type(TypeDecl),
    /// Instance or static initializer block.
    Initializer(Block),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub ty: TypeRef,
    pub declarators: Vec<VarDeclarator>,
}

impl FieldDecl {
    pub fn new(
        modifiers: Vec<Modifier>,
        ty: TypeRef,
        name: impl Into<String>,
        init: Option<Expr>,
    ) -> Self {
        Self {
            modifiers,
            ty,
            declarators: vec![VarDeclarator::new(name, init)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub ty: TypeRef,
    pub name: String,
    /// `Type... name`
    #[serde(default)]
    pub varargs: bool,
}

impl Param {
    pub fn new(ty: TypeRef, name: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            ty,
            name: name.into(),
            varargs: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<TypeParam>,
    /// `None` for `void`.
    #[serde(default)]
    pub result: Option<TypeRef>,
    pub name: String,
    #[serde(default)]
    pub params: Vec<Param>,
    /// `None` when declared without a body (`abstract`, interface methods).
    #[serde(default)]
    pub body: Option<Block>,
}

impl MethodDecl {
    pub fn new(
        modifiers: Vec<Modifier>,
        result: Option<TypeRef>,
        name: impl Into<String>,
        params: Vec<Param>,
        body: Option<Block>,
    ) -> Self {
        Self {
            modifiers,
            type_params: Vec::new(),
            result,
            name: name.into(),
            params,
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDecl {
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    pub name: String,
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub body: Block,
}

impl ConstructorDecl {
    pub fn new(
        modifiers: Vec<Modifier>,
        name: impl Into<String>,
        params: Vec<Param>,
        body: Block,
    ) -> Self {
        Self {
            modifiers,
            name: name.into(),
            params,
            body,
        }
    }
}
