//! Traversal context.
//!
//! Statements that change how their descendants translate push a [`Frame`]
//! on entry and pop it on exit. Translators ask the stack instead of
//! inspecting the shape of their ancestors.

use crate::ast::{BinaryOp, Expr, StructureEq, TypeRef};

/// A type test `operand instanceof ty` that holds inside an if branch.
#[derive(Debug, Clone, Copy)]
pub struct Narrowing<'a> {
    pub operand: &'a Expr,
    pub ty: &'a TypeRef,
}

/// What a `continue` must re-emit before jumping, because the loop was
/// desugared into `while` and the jump would otherwise skip it.
#[derive(Debug, Clone, Copy)]
pub enum LoopTail<'a> {
    /// Native loop; nothing to repeat.
    None,
    /// Update expressions of a counting `for`.
    Update(&'a [Expr]),
    /// Exit guard condition of a `do`/`while`.
    Guard(&'a Expr),
}

#[derive(Debug, Clone)]
pub enum Frame<'a> {
    /// Branch of an `if`, with the type tests its condition guarantees.
    /// Else branches carry none.
    Branch(Vec<Narrowing<'a>>),
    /// Body of a loop.
    Loop(LoopTail<'a>),
}

/// Per-run mutable state threaded through the translators.
#[derive(Debug, Default)]
pub struct TranslationContext<'a> {
    frames: Vec<Frame<'a>>,
    temps: usize,
}

impl<'a> TranslationContext<'a> {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            temps: 0,
        }
    }

    pub fn push(&mut self, frame: Frame<'a>) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) {
        self.frames.pop();
    }

    /// Whether an enclosing if already proved `operand` to be a `ty`.
    pub fn is_narrowed(&self, operand: &Expr, ty: &TypeRef) -> bool {
        self.frames.iter().rev().any(|frame| match frame {
            Frame::Branch(tests) => tests
                .iter()
                .any(|t| t.ty == ty && t.operand.structure_eq(operand)),
            _ => false,
        })
    }

    /// Tail of the innermost enclosing loop.
    pub fn loop_tail(&self) -> Option<LoopTail<'a>> {
        self.frames.iter().rev().find_map(|frame| match frame {
            Frame::Loop(tail) => Some(*tail),
            _ => None,
        })
    }

    /// Suffix for a new set of temporaries, unique within the unit.
    pub fn next_temp(&mut self) -> usize {
        let n = self.temps;
        self.temps += 1;
        n
    }
}

/// Type tests that hold whenever `cond` is true: the `instanceof` operands
/// of its top-level `&&` chain.
pub fn narrowings(cond: &Expr) -> Vec<Narrowing<'_>> {
    let mut out = Vec::new();
    collect_narrowings(cond, &mut out);
    out
}

fn collect_narrowings<'a>(cond: &'a Expr, out: &mut Vec<Narrowing<'a>>) {
    match cond {
        Expr::Binary {
            left,
            op: BinaryOp::And,
            right,
        } => {
            collect_narrowings(left, out);
            collect_narrowings(right, out);
        }
        Expr::InstanceOf { expr, ty } => out.push(Narrowing { operand: expr, ty }),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrowings_from_conjunction() {
        let cond = Expr::and(
            Expr::instance_of(Expr::name("a"), TypeRef::class("Foo")),
            Expr::and(
                Expr::name("ready"),
                Expr::instance_of(Expr::name("b"), TypeRef::class("Bar")),
            ),
        );
        let found = narrowings(&cond);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].operand, &Expr::name("a"));
        assert_eq!(found[1].ty, &TypeRef::class("Bar"));
    }

    #[test]
    fn test_no_narrowing_under_or_or_not() {
        let cond = Expr::binary(
            Expr::instance_of(Expr::name("a"), TypeRef::class("Foo")),
            BinaryOp::Or,
            Expr::name("b"),
        );
        assert!(narrowings(&cond).is_empty());
        let paren = Expr::paren(Expr::instance_of(Expr::name("a"), TypeRef::class("Foo")));
        assert!(narrowings(&paren).is_empty());
    }

    #[test]
    fn test_is_narrowed_searches_enclosing_frames() {
        let operand = Expr::name("shape");
        let ty = TypeRef::class("Circle");
        let mut ctx = TranslationContext::new();
        ctx.push(Frame::Branch(vec![Narrowing {
            operand: &operand,
            ty: &ty,
        }]));
        ctx.push(Frame::Loop(LoopTail::None));
        assert!(ctx.is_narrowed(&Expr::paren(Expr::name("shape")), &ty));
        assert!(!ctx.is_narrowed(&operand, &TypeRef::class("Square")));
        ctx.pop();
        ctx.pop();
        assert!(!ctx.is_narrowed(&operand, &ty));
    }

    #[test]
    fn test_loop_tail_is_innermost_loop() {
        let update = vec![Expr::name("i")];
        let mut ctx = TranslationContext::new();
        ctx.push(Frame::Loop(LoopTail::Update(&update)));
        ctx.push(Frame::Branch(Vec::new()));
        assert!(matches!(ctx.loop_tail(), Some(LoopTail::Update(u)) if u.len() == 1));
        ctx.push(Frame::Loop(LoopTail::None));
        assert!(matches!(ctx.loop_tail(), Some(LoopTail::None)));
        ctx.pop();
        ctx.pop();
        ctx.pop();
        assert!(ctx.loop_tail().is_none());
    }

    #[test]
    fn test_temps_are_numbered_per_context() {
        let mut ctx = TranslationContext::new();
        assert_eq!(ctx.next_temp(), 0);
        assert_eq!(ctx.next_temp(), 1);
        assert_eq!(TranslationContext::new().next_temp(), 0);
    }
}
