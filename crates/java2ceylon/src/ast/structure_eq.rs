//! Structural equality for expressions.
//!
//! `structure_eq` compares expression trees ignoring "surface hints" - nodes
//! that capture how the source was spelled but don't change what it denotes.
//!
//! # Hint Nodes (normalized during comparison)
//!
//! - `Expr::Paren` - `(x)` and `x` denote the same operand
//!
//! # Core Fields (must match exactly)
//!
//! - All names, literals, operators
//! - Types
//! - Expression trees

use super::Expr;

/// Trait for structural equality comparison.
///
/// Unlike `PartialEq`, this ignores surface hint nodes that may differ
/// between spellings but don't affect which value is denoted.
pub trait StructureEq {
    /// Compare two values for structural equality.
    fn structure_eq(&self, other: &Self) -> bool;
}

impl StructureEq for Expr {
    fn structure_eq(&self, other: &Self) -> bool {
        match (self.unparenthesized(), other.unparenthesized()) {
            (Expr::Literal(a), Expr::Literal(b)) => a == b,
            (Expr::Name(a), Expr::Name(b)) => a == b,
            (Expr::This, Expr::This) | (Expr::Super, Expr::Super) => true,

            (
                Expr::FieldAccess {
                    target: t1,
                    name: n1,
                },
                Expr::FieldAccess {
                    target: t2,
                    name: n2,
                },
            ) => n1 == n2 && t1.structure_eq(t2),

            (
                Expr::Call {
                    target: t1,
                    type_args: ta1,
                    name: n1,
                    args: a1,
                },
                Expr::Call {
                    target: t2,
                    type_args: ta2,
                    name: n2,
                    args: a2,
                },
            ) => {
                n1 == n2
                    && ta1 == ta2
                    && match (t1, t2) {
                        (None, None) => true,
                        (Some(a), Some(b)) => a.structure_eq(b),
                        _ => false,
                    }
                    && vec_structure_eq(a1, a2)
            }

            (
                Expr::ArrayAccess {
                    array: a1,
                    index: i1,
                },
                Expr::ArrayAccess {
                    array: a2,
                    index: i2,
                },
            ) => a1.structure_eq(a2) && i1.structure_eq(i2),

            (
                Expr::Unary {
                    op: o1,
                    operand: e1,
                },
                Expr::Unary {
                    op: o2,
                    operand: e2,
                },
            ) => o1 == o2 && e1.structure_eq(e2),

            (
                Expr::Binary {
                    left: l1,
                    op: o1,
                    right: r1,
                },
                Expr::Binary {
                    left: l2,
                    op: o2,
                    right: r2,
                },
            ) => o1 == o2 && l1.structure_eq(l2) && r1.structure_eq(r2),

            (Expr::InstanceOf { expr: e1, ty: t1 }, Expr::InstanceOf { expr: e2, ty: t2 })
            | (Expr::Cast { ty: t1, expr: e1 }, Expr::Cast { ty: t2, expr: e2 }) => {
                t1 == t2 && e1.structure_eq(e2)
            }

            (
                Expr::Conditional {
                    cond: c1,
                    then: t1,
                    otherwise: o1,
                },
                Expr::Conditional {
                    cond: c2,
                    then: t2,
                    otherwise: o2,
                },
            ) => c1.structure_eq(c2) && t1.structure_eq(t2) && o1.structure_eq(o2),

            // Creation and assignment expressions produce fresh values or side
            // effects; two occurrences never denote the same operand.
            _ => false,
        }
    }
}

fn vec_structure_eq(a: &[Expr], b: &[Expr]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.structure_eq(y))
}
