//! Expression nodes.

use super::{ClassType, Member, TypeRef};
use serde::{Deserialize, Serialize};

/// Literal values. Lexemes are kept as written so numeric suffixes and
/// escape sequences survive translation untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    Null,
    Bool(bool),
    /// Integer or floating point lexeme, e.g. `42`, `0x1F`, `1.5e3`.
    Number(String),
    /// Character literal body without the quotes, e.g. `a` or `\n`.
    Char(String),
    /// String literal body without the quotes.
    String(String),
}

/// Binary operators, listed from lowest to highest precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    Shl,
    Shr,
    UShr,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::BitAnd => "&",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::UShr => ">>>",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
        }
    }

    /// Precedence level; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => Precedence::OR,
            BinaryOp::And => Precedence::AND,
            BinaryOp::BitOr => Precedence::BIT_OR,
            BinaryOp::BitXor => Precedence::BIT_XOR,
            BinaryOp::BitAnd => Precedence::BIT_AND,
            BinaryOp::Eq | BinaryOp::Ne => Precedence::EQUALITY,
            BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge => Precedence::RELATIONAL,
            BinaryOp::Shl | BinaryOp::Shr | BinaryOp::UShr => Precedence::SHIFT,
            BinaryOp::Add | BinaryOp::Sub => Precedence::ADDITIVE,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => Precedence::MULTIPLICATIVE,
        }
    }
}

/// Precedence levels of the Java expression grammar.
pub struct Precedence;

impl Precedence {
    pub const ASSIGNMENT: u8 = 1;
    pub const CONDITIONAL: u8 = 2;
    pub const OR: u8 = 3;
    pub const AND: u8 = 4;
    pub const BIT_OR: u8 = 5;
    pub const BIT_XOR: u8 = 6;
    pub const BIT_AND: u8 = 7;
    pub const EQUALITY: u8 = 8;
    pub const RELATIONAL: u8 = 9;
    pub const SHIFT: u8 = 10;
    pub const ADDITIVE: u8 = 11;
    pub const MULTIPLICATIVE: u8 = 12;
    pub const UNARY: u8 = 13;
    pub const POSTFIX: u8 = 14;
    pub const PRIMARY: u8 = 15;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
    /// `~x`
    Complement,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::Not => "!",
            UnaryOp::Complement => "~",
            UnaryOp::PreIncrement | UnaryOp::PostIncrement => "++",
            UnaryOp::PreDecrement | UnaryOp::PostDecrement => "--",
        }
    }

    /// `++`/`--` in either position.
    pub fn is_increment(self) -> bool {
        matches!(
            self,
            UnaryOp::PreIncrement
                | UnaryOp::PreDecrement
                | UnaryOp::PostIncrement
                | UnaryOp::PostDecrement
        )
    }

    pub fn is_postfix(self) -> bool {
        matches!(self, UnaryOp::PostIncrement | UnaryOp::PostDecrement)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    UShr,
}

impl AssignOp {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::Add => "+=",
            AssignOp::Sub => "-=",
            AssignOp::Mul => "*=",
            AssignOp::Div => "/=",
            AssignOp::Rem => "%=",
            AssignOp::BitAnd => "&=",
            AssignOp::BitOr => "|=",
            AssignOp::BitXor => "^=",
            AssignOp::Shl => "<<=",
            AssignOp::Shr => ">>=",
            AssignOp::UShr => ">>>=",
        }
    }

    /// The binary operator a compound assignment applies.
    pub fn binary(self) -> Option<BinaryOp> {
        Some(match self {
            AssignOp::Assign => return None,
            AssignOp::Add => BinaryOp::Add,
            AssignOp::Sub => BinaryOp::Sub,
            AssignOp::Mul => BinaryOp::Mul,
            AssignOp::Div => BinaryOp::Div,
            AssignOp::Rem => BinaryOp::Rem,
            AssignOp::BitAnd => BinaryOp::BitAnd,
            AssignOp::BitOr => BinaryOp::BitOr,
            AssignOp::BitXor => BinaryOp::BitXor,
            AssignOp::Shl => BinaryOp::Shl,
            AssignOp::Shr => BinaryOp::Shr,
            AssignOp::UShr => BinaryOp::UShr,
        })
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    Literal(Literal),

    /// A simple or dotted ambiguous name, e.g. `x` or `System.out`.
    Name(String),

    This,

    Super,

    Paren(Box<Expr>),

    FieldAccess {
        target: Box<Expr>,
        name: String,
    },

    Call {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<Box<Expr>>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        type_args: Vec<TypeRef>,
        name: String,
        #[serde(default)]
        args: Vec<Expr>,
    },

    /// `new T(args)`, optionally with an anonymous class body.
    New {
        ty: ClassType,
        #[serde(default)]
        args: Vec<Expr>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        body: Option<Vec<Member>>,
    },

    /// `new element[d0][d1]...[]`, or `new element[]{..}` when `init` is set.
    NewArray {
        element: TypeRef,
        #[serde(default)]
        dims: Vec<Expr>,
        /// Number of trailing unsized `[]`. Ceylon array constructors only
        /// take the sized dimensions, so this is carried for round-tripping
        /// the tree and not read by the writer.
        #[serde(default)]
        extra_dims: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        init: Option<Vec<Expr>>,
    },

    /// `{a, b}` array initializer, as in `int[] xs = {1, 2};`
    ArrayInit(Vec<Expr>),

    ArrayAccess {
        array: Box<Expr>,
        index: Box<Expr>,
    },

    Assign {
        target: Box<Expr>,
        op: AssignOp,
        value: Box<Expr>,
    },

    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },

    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },

    InstanceOf {
        expr: Box<Expr>,
        ty: TypeRef,
    },

    Conditional {
        cond: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },

    Cast {
        ty: TypeRef,
        expr: Box<Expr>,
    },
}

impl Expr {
    pub fn null() -> Self {
        Expr::Literal(Literal::Null)
    }

    pub fn bool(value: bool) -> Self {
        Expr::Literal(Literal::Bool(value))
    }

    pub fn number(lexeme: impl Into<String>) -> Self {
        Expr::Literal(Literal::Number(lexeme.into()))
    }

    pub fn string(body: impl Into<String>) -> Self {
        Expr::Literal(Literal::String(body.into()))
    }

    pub fn char(body: impl Into<String>) -> Self {
        Expr::Literal(Literal::Char(body.into()))
    }

    pub fn name(name: impl Into<String>) -> Self {
        Expr::Name(name.into())
    }

    pub fn paren(inner: Expr) -> Self {
        Expr::Paren(Box::new(inner))
    }

    pub fn field(target: Expr, name: impl Into<String>) -> Self {
        Expr::FieldAccess {
            target: Box::new(target),
            name: name.into(),
        }
    }

    /// Unqualified call `name(args)`.
    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            target: None,
            type_args: Vec::new(),
            name: name.into(),
            args,
        }
    }

    /// Qualified call `target.name(args)`.
    pub fn method(target: Expr, name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            target: Some(Box::new(target)),
            type_args: Vec::new(),
            name: name.into(),
            args,
        }
    }

    pub fn new_instance(ty: ClassType, args: Vec<Expr>) -> Self {
        Expr::New {
            ty,
            args,
            body: None,
        }
    }

    pub fn anonymous(ty: ClassType, args: Vec<Expr>, body: Vec<Member>) -> Self {
        Expr::New {
            ty,
            args,
            body: Some(body),
        }
    }

    pub fn new_array(element: TypeRef, dims: Vec<Expr>) -> Self {
        Expr::NewArray {
            element,
            dims,
            extra_dims: 0,
            init: None,
        }
    }

    /// `new element[]{elements}`
    pub fn new_array_init(element: TypeRef, elements: Vec<Expr>) -> Self {
        Expr::NewArray {
            element,
            dims: Vec::new(),
            extra_dims: 1,
            init: Some(elements),
        }
    }

    pub fn index(array: Expr, index: Expr) -> Self {
        Expr::ArrayAccess {
            array: Box::new(array),
            index: Box::new(index),
        }
    }

    pub fn assign(target: Expr, value: Expr) -> Self {
        Expr::Assign {
            target: Box::new(target),
            op: AssignOp::Assign,
            value: Box::new(value),
        }
    }

    pub fn compound(target: Expr, op: AssignOp, value: Expr) -> Self {
        Expr::Assign {
            target: Box::new(target),
            op,
            value: Box::new(value),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::binary(left, BinaryOp::And, right)
    }

    pub fn instance_of(expr: Expr, ty: TypeRef) -> Self {
        Expr::InstanceOf {
            expr: Box::new(expr),
            ty,
        }
    }

    pub fn conditional(cond: Expr, then: Expr, otherwise: Expr) -> Self {
        Expr::Conditional {
            cond: Box::new(cond),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    pub fn cast(ty: TypeRef, expr: Expr) -> Self {
        Expr::Cast {
            ty,
            expr: Box::new(expr),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Expr::Literal(Literal::Null))
    }

    /// Strip any number of enclosing parentheses.
    pub fn unparenthesized(&self) -> &Expr {
        let mut expr = self;
        while let Expr::Paren(inner) = expr {
            expr = inner;
        }
        expr
    }

    /// Precedence level of this node in the Java grammar.
    pub fn precedence(&self) -> u8 {
        match self {
            Expr::Assign { .. } => Precedence::ASSIGNMENT,
            Expr::Conditional { .. } => Precedence::CONDITIONAL,
            Expr::Binary { op, .. } => op.precedence(),
            Expr::InstanceOf { .. } => Precedence::RELATIONAL,
            Expr::Unary { op, .. } if op.is_postfix() => Precedence::POSTFIX,
            Expr::Unary { .. } | Expr::Cast { .. } => Precedence::UNARY,
            _ => Precedence::PRIMARY,
        }
    }
}
