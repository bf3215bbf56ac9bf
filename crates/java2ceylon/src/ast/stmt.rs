//! Statement nodes.

use super::{Expr, Modifier, TypeRef};
use serde::{Deserialize, Serialize};

/// `{ stmts }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }
}

/// One `name = init` part of a variable declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDeclarator {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init: Option<Expr>,
}

impl VarDeclarator {
    pub fn new(name: impl Into<String>, init: Option<Expr>) -> Self {
        Self {
            name: name.into(),
            init,
        }
    }
}

/// `Type a = 1, b;` in a block or a `for` header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalVarDecl {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub ty: TypeRef,
    pub declarators: Vec<VarDeclarator>,
}

/// The initializer clause of a counting `for`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForInit {
    Decl(LocalVarDecl),
    Exprs(Vec<Expr>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchLabel {
    Case(Expr),
    Default,
}

/// Labels sharing one statement list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchGroup {
    pub labels: Vec<SwitchLabel>,
    pub body: Vec<Stmt>,
}

impl SwitchGroup {
    pub fn case(label: Expr, body: Vec<Stmt>) -> Self {
        Self {
            labels: vec![SwitchLabel::Case(label)],
            body,
        }
    }

    pub fn default(body: Vec<Stmt>) -> Self {
        Self {
            labels: vec![SwitchLabel::Default],
            body,
        }
    }

    /// Whether any label of the group is `default`.
    pub fn is_default(&self) -> bool {
        self.labels.iter().any(|l| matches!(l, SwitchLabel::Default))
    }

    /// The first `case` label, which keys the translated arm.
    pub fn first_case(&self) -> Option<&Expr> {
        self.labels.iter().find_map(|l| match l {
            SwitchLabel::Case(e) => Some(e),
            SwitchLabel::Default => None,
        })
    }
}

/// `Type name = init` inside `try (...)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub ty: TypeRef,
    pub name: String,
    pub init: Expr,
}

/// `catch (A | B name) { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    pub types: Vec<TypeRef>,
    pub name: String,
    pub body: Block,
}

/// Which constructor an explicit constructor invocation delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructorTarget {
    This,
    Super,
}

impl ConstructorTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            ConstructorTarget::This => "this",
            ConstructorTarget::Super => "super",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stmt {
    Block(Block),

    LocalVar(LocalVarDecl),

    Expr(Expr),

    If {
        cond: Expr,
        then: Box<Stmt>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        otherwise: Option<Box<Stmt>>,
    },

    While {
        cond: Expr,
        body: Box<Stmt>,
    },

    DoWhile {
        body: Box<Stmt>,
        cond: Expr,
    },

    For {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        init: Option<ForInit>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cond: Option<Expr>,
        #[serde(default)]
        update: Vec<Expr>,
        body: Box<Stmt>,
    },

    ForEach {
        ty: TypeRef,
        name: String,
        iterable: Expr,
        body: Box<Stmt>,
    },

    Switch {
        selector: Expr,
        groups: Vec<SwitchGroup>,
    },

    /// `break;` or `break label;`
    Break(Option<String>),

    /// `continue;` or `continue label;`
    Continue(Option<String>),

    /// `label: stmt`
    Labeled {
        label: String,
        body: Box<Stmt>,
    },

    /// `synchronized (lock) { ... }`
    Synchronized {
        lock: Expr,
        body: Block,
    },

    /// `this(args);` or `super(args);` at the start of a constructor body.
    ConstructorCall {
        target: ConstructorTarget,
        #[serde(default)]
        args: Vec<Expr>,
    },

    Return(Option<Expr>),

    Throw(Expr),

    Try {
        #[serde(default)]
        resources: Vec<Resource>,
        body: Block,
        #[serde(default)]
        catches: Vec<CatchClause>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        finally: Option<Block>,
    },

    Empty,
}

impl Stmt {
    pub fn block(stmts: Vec<Stmt>) -> Self {
        Stmt::Block(Block::new(stmts))
    }

    pub fn expr(expr: Expr) -> Self {
        Stmt::Expr(expr)
    }

    /// Single-declarator local variable.
    pub fn local(ty: TypeRef, name: impl Into<String>, init: Option<Expr>) -> Self {
        Stmt::LocalVar(LocalVarDecl {
            modifiers: Vec::new(),
            ty,
            declarators: vec![VarDeclarator::new(name, init)],
        })
    }

    pub fn if_stmt(cond: Expr, then: Stmt, otherwise: Option<Stmt>) -> Self {
        Stmt::If {
            cond,
            then: Box::new(then),
            otherwise: otherwise.map(Box::new),
        }
    }

    pub fn while_loop(cond: Expr, body: Stmt) -> Self {
        Stmt::While {
            cond,
            body: Box::new(body),
        }
    }

    pub fn do_while(body: Stmt, cond: Expr) -> Self {
        Stmt::DoWhile {
            body: Box::new(body),
            cond,
        }
    }

    pub fn for_loop(
        init: Option<ForInit>,
        cond: Option<Expr>,
        update: Vec<Expr>,
        body: Stmt,
    ) -> Self {
        Stmt::For {
            init,
            cond,
            update,
            body: Box::new(body),
        }
    }

    pub fn for_each(ty: TypeRef, name: impl Into<String>, iterable: Expr, body: Stmt) -> Self {
        Stmt::ForEach {
            ty,
            name: name.into(),
            iterable,
            body: Box::new(body),
        }
    }

    pub fn switch(selector: Expr, groups: Vec<SwitchGroup>) -> Self {
        Stmt::Switch { selector, groups }
    }

    pub fn return_stmt(value: Option<Expr>) -> Self {
        Stmt::Return(value)
    }

    pub fn labeled(label: impl Into<String>, body: Stmt) -> Self {
        Stmt::Labeled {
            label: label.into(),
            body: Box::new(body),
        }
    }
}
