//! Expressions.
//!
//! Operators keep their Java spelling except where Ceylon differs:
//!
//! - `c ? a : b` is `if (c) then a else b`
//! - `x != null` / `x == null` are `exists x` / `!exists x`
//! - `a[i]` reads are `a.get(i)`, writes are `a.set(i, v)`
//! - array initializers `{a, b}` are `Array { a, b }`
//! - `~x` is `x.not`
//! - casts are erased
//! - `new T(..)` loses the `new`, and anonymous classes become `object`s
//!
//! Inside an `if` condition (statement or ternary) the top-level `&&` chain
//! is written as a Ceylon condition list and `instanceof` items become
//! narrowing `is T x` conditions. Parentheses, `||` and every other operator
//! leave condition position, so below them the plain forms are used.

use super::CeylonWriter;
use super::decl::Owner;
use crate::ast::{
    AssignOp, BinaryOp, ClassType, Expr, Literal, Member, Precedence, TypeRef, UnaryOp,
};
use crate::config::Config;
use crate::error::Result;
use crate::names::{escape, getter_property, map_array_type, render_class_type, render_type};
use std::io::Write;
use tracing::trace;

/// `System.out`, as a dotted name or a field access.
fn is_system_out(expr: &Expr) -> bool {
    match expr.unparenthesized() {
        Expr::Name(name) => name == "System.out",
        Expr::FieldAccess { target, name } => {
            name == "out" && matches!(target.unparenthesized(), Expr::Name(n) if n == "System")
        }
        _ => false,
    }
}

/// A single identifier that `exists` can narrow in place.
fn is_simple_name(expr: &Expr) -> bool {
    match expr.unparenthesized() {
        Expr::Name(name) => !name.contains('.'),
        Expr::This => true,
        _ => false,
    }
}

/// First token of `expr` as written, skipping parentheses and casts.
fn leftmost_token(expr: &Expr) -> Option<&str> {
    match expr {
        Expr::Paren(inner)
        | Expr::Cast { expr: inner, .. }
        | Expr::InstanceOf { expr: inner, .. }
        | Expr::Unary { operand: inner, .. }
        | Expr::FieldAccess { target: inner, .. }
        | Expr::ArrayAccess { array: inner, .. }
        | Expr::Binary { left: inner, .. }
        | Expr::Assign { target: inner, .. }
        | Expr::Conditional { cond: inner, .. } => leftmost_token(inner),
        Expr::Call {
            target: Some(target),
            ..
        } => leftmost_token(target),
        Expr::Call { name, .. } | Expr::Name(name) => Some(name.as_str()),
        Expr::This => Some("this"),
        Expr::Super => Some("super"),
        Expr::New { ty, .. } => ty.segments.first().map(|s| s.name.as_str()),
        Expr::NewArray { .. } | Expr::ArrayInit(_) => None,
        Expr::Literal(Literal::Number(text) | Literal::Char(text) | Literal::String(text)) => {
            Some(text.as_str())
        }
        Expr::Literal(_) => None,
    }
}

/// Whether evaluating `expr` twice has the same effect as evaluating it once.
fn is_pure(expr: &Expr) -> bool {
    match expr {
        Expr::Literal(_) | Expr::Name(_) | Expr::This | Expr::Super => true,
        Expr::Paren(inner)
        | Expr::FieldAccess { target: inner, .. }
        | Expr::Cast { expr: inner, .. }
        | Expr::InstanceOf { expr: inner, .. } => is_pure(inner),
        Expr::ArrayAccess { array, index } => is_pure(array) && is_pure(index),
        Expr::Unary { op, operand } => !op.is_increment() && is_pure(operand),
        Expr::Binary { left, right, .. } => is_pure(left) && is_pure(right),
        Expr::Conditional {
            cond,
            then,
            otherwise,
        } => is_pure(cond) && is_pure(then) && is_pure(otherwise),
        _ => false,
    }
}

/// Sign a prefix operand starts with once written, if any.
fn leading_sign(expr: &Expr) -> Option<char> {
    match expr {
        Expr::Unary { op, operand } => match op {
            UnaryOp::Plus | UnaryOp::PreIncrement => Some('+'),
            UnaryOp::Minus | UnaryOp::PreDecrement => Some('-'),
            UnaryOp::Not => None,
            _ => leading_sign(operand),
        },
        Expr::Cast { expr, .. } => leading_sign(expr),
        Expr::Literal(Literal::Number(text)) => {
            text.chars().next().filter(|c| matches!(c, '+' | '-'))
        }
        _ => None,
    }
}

/// Parts of `a[i] op= v` when `op` is a compound operator.
fn compound_element_assign(expr: &Expr) -> Option<(&Expr, &Expr, BinaryOp, &Expr)> {
    let Expr::Assign { target, op, value } = expr else {
        return None;
    };
    let Expr::ArrayAccess { array, index } = target.unparenthesized() else {
        return None;
    };
    Some((&**array, &**index, op.binary()?, &**value))
}

/// Where an element update reads its array or index from.
enum Slot<'a> {
    Inline(&'a Expr),
    Temp { name: String, init: &'a Expr },
}

/// Operands of a compound element update `a[i] op= v`.
struct ElementSlots<'a> {
    array: Slot<'a>,
    index: Slot<'a>,
}

impl<'a> ElementSlots<'a> {
    fn temps(&self) -> Vec<(&str, &'a Expr)> {
        [&self.array, &self.index]
            .into_iter()
            .filter_map(|slot| match slot {
                Slot::Temp { name, init } => Some((name.as_str(), *init)),
                Slot::Inline(_) => None,
            })
            .collect()
    }
}

/// Name bound by `exists n = a.b.c`: the first character of the compound
/// expression, lowercased. Not guaranteed to be unique in scope.
pub(crate) fn binding_name(expr: &Expr) -> String {
    leftmost_token(expr)
        .and_then(|token| token.chars().next())
        .filter(|c| c.is_alphabetic() || *c == '_')
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_else(|| "x".to_string())
}

impl<'a, W: Write> CeylonWriter<'a, W> {
    pub(super) fn write_expr(&mut self, cfg: &Config, expr: &'a Expr) -> Result<()> {
        match expr {
            Expr::Literal(literal) => self.write_literal(literal),
            Expr::Name(name) => self.sink.write(&escape(name, false)),
            Expr::This => self.sink.write("this"),
            Expr::Super => self.sink.write("super"),
            Expr::Paren(inner) => {
                self.sink.write("(")?;
                self.write_expr(cfg, inner)?;
                self.sink.write(")")
            }
            Expr::FieldAccess { target, name } => {
                self.write_operand(cfg, target, Precedence::POSTFIX)?;
                self.sink.write(".")?;
                self.sink.write(&escape(name, true))
            }
            Expr::Call {
                target,
                type_args,
                name,
                args,
            } => self.write_call(cfg, target.as_deref(), type_args, name, args),
            Expr::New { ty, args, body } => match body {
                None => {
                    self.sink.write(&render_class_type(ty))?;
                    self.sink.write("(")?;
                    self.write_args(cfg, args)?;
                    self.sink.write(")")
                }
                Some(members) => self.write_object(cfg, ty, args, members),
            },
            Expr::NewArray {
                init: Some(elements),
                ..
            }
            | Expr::ArrayInit(elements) => self.write_array_init(cfg, elements),
            Expr::NewArray { element, dims, .. } => {
                // Every dimension goes to the one constructor.
                self.sink.write(&map_array_type(element))?;
                self.sink.write("(")?;
                self.write_args(cfg, dims)?;
                self.sink.write(")")
            }
            Expr::ArrayAccess { array, index } => {
                trace!("array read becomes get");
                self.write_operand(cfg, array, Precedence::POSTFIX)?;
                self.sink.write(".get(")?;
                self.write_expr(cfg, index)?;
                self.sink.write(")")
            }
            Expr::Assign { target, op, value } => self.write_assign(cfg, target, *op, value),
            Expr::Unary { op, operand } => self.write_unary(cfg, *op, operand),
            Expr::Binary { left, op, right } => self.write_binary(cfg, left, *op, right),
            Expr::InstanceOf { expr, ty } => {
                self.write_operand(cfg, expr, Precedence::RELATIONAL)?;
                self.sink.write(" is ")?;
                self.sink.write(&render_type(ty))
            }
            Expr::Conditional {
                cond,
                then,
                otherwise,
            } => {
                trace!("ternary becomes if expression");
                self.sink.write("if (")?;
                self.write_condition(cfg, cond)?;
                self.sink.write(") then ")?;
                self.write_expr(cfg, then)?;
                self.sink.write(" else ")?;
                self.write_expr(cfg, otherwise)
            }
            Expr::Cast { expr, .. } => self.write_operand(cfg, expr, Precedence::UNARY),
        }
    }

    /// Write `expr` as an `if` condition.
    pub(super) fn write_condition(&mut self, cfg: &Config, expr: &'a Expr) -> Result<()> {
        match expr {
            Expr::Binary {
                left,
                op: BinaryOp::And,
                right,
            } => {
                self.write_condition(cfg, left)?;
                self.sink.write(", ")?;
                self.write_condition(cfg, right)
            }
            Expr::InstanceOf { expr, ty } => {
                trace!("instanceof becomes narrowing condition");
                self.sink.write("is ")?;
                self.sink.write(&render_type(ty))?;
                self.sink.write(" ")?;
                self.write_expr(cfg, expr)
            }
            other => self.write_expr(cfg, other),
        }
    }

    /// Write `expr`, parenthesized when it binds looser than `min`.
    fn write_operand(&mut self, cfg: &Config, expr: &'a Expr, min: u8) -> Result<()> {
        if expr.precedence() < min {
            self.sink.write("(")?;
            self.write_expr(cfg, expr)?;
            self.sink.write(")")
        } else {
            self.write_expr(cfg, expr)
        }
    }

    /// An expression statement. Side-effecting operands of a compound
    /// element update are bound to values on the lines before.
    pub(super) fn write_expr_stmt(&mut self, cfg: &Config, expr: &'a Expr) -> Result<()> {
        let Some((array, index, binary, value)) = compound_element_assign(expr) else {
            self.write_expr(cfg, expr)?;
            return self.sink.write(";");
        };
        let slots = self.element_slots(array, index);
        for (name, init) in slots.temps() {
            self.sink.write("value ")?;
            self.sink.write(name)?;
            self.sink.write(" = ")?;
            self.write_expr(cfg, init)?;
            self.sink.write(";")?;
            self.sink.newline()?;
        }
        self.write_element_update(cfg, &slots, binary, value)?;
        self.sink.write(";")
    }

    pub(super) fn write_args(&mut self, cfg: &Config, args: &'a [Expr]) -> Result<()> {
        self.write_separated(args, ", ", |w, arg| w.write_expr(cfg, arg))
    }

    fn write_literal(&mut self, literal: &Literal) -> Result<()> {
        match literal {
            Literal::Null => self.sink.write("null"),
            Literal::Bool(true) => self.sink.write("true"),
            Literal::Bool(false) => self.sink.write("false"),
            Literal::Number(text) => self.sink.write(text),
            Literal::Char(text) => {
                self.sink.write("'")?;
                self.sink.write(text)?;
                self.sink.write("'")
            }
            Literal::String(text) => {
                self.sink.write("\"")?;
                self.sink.write(text)?;
                self.sink.write("\"")
            }
        }
    }

    fn write_binary(
        &mut self,
        cfg: &Config,
        left: &'a Expr,
        op: BinaryOp,
        right: &'a Expr,
    ) -> Result<()> {
        if matches!(op, BinaryOp::Eq | BinaryOp::Ne) && right.unparenthesized().is_null() {
            return self.write_null_check(cfg, left, op == BinaryOp::Ne);
        }
        let precedence = op.precedence();
        self.write_operand(cfg, left, precedence)?;
        self.sink.write(" ")?;
        self.sink.write(op.as_str())?;
        self.sink.write(" ")?;
        self.write_operand(cfg, right, precedence + 1)
    }

    /// `exists x`, or `exists n = a.b` when the operand isn't a plain name.
    fn write_null_check(&mut self, cfg: &Config, operand: &'a Expr, exists: bool) -> Result<()> {
        trace!(exists, "null comparison becomes existence check");
        if !exists {
            self.sink.write("!")?;
        }
        self.sink.write("exists ")?;
        if !is_simple_name(operand) {
            self.sink.write(&binding_name(operand))?;
            self.sink.write(" = ")?;
        }
        self.write_expr(cfg, operand)
    }

    fn write_unary(&mut self, cfg: &Config, op: UnaryOp, operand: &'a Expr) -> Result<()> {
        match op {
            UnaryOp::Complement => {
                self.write_operand(cfg, operand, Precedence::PRIMARY)?;
                self.sink.write(".not")
            }
            op if op.is_postfix() => {
                self.write_operand(cfg, operand, Precedence::POSTFIX)?;
                self.sink.write(op.as_str())
            }
            op => {
                self.sink.write(op.as_str())?;
                if leading_sign(operand) == op.as_str().chars().next() {
                    // `-(-x)` must not become `--x`.
                    self.sink.write("(")?;
                    self.write_expr(cfg, operand)?;
                    return self.sink.write(")");
                }
                self.write_operand(cfg, operand, Precedence::UNARY)
            }
        }
    }

    /// Element writes become `set`; compound ones read the element back
    /// with `get` first, binding side-effecting operands in a `let` so they
    /// run once.
    fn write_assign(
        &mut self,
        cfg: &Config,
        target: &'a Expr,
        op: AssignOp,
        value: &'a Expr,
    ) -> Result<()> {
        let Expr::ArrayAccess { array, index } = target.unparenthesized() else {
            self.write_expr(cfg, target)?;
            self.sink.write(" ")?;
            self.sink.write(op.as_str())?;
            self.sink.write(" ")?;
            return self.write_expr(cfg, value);
        };

        trace!("array write becomes set");
        let Some(binary) = op.binary() else {
            self.write_operand(cfg, array, Precedence::POSTFIX)?;
            self.sink.write(".set(")?;
            self.write_expr(cfg, index)?;
            self.sink.write(", ")?;
            self.write_expr(cfg, value)?;
            return self.sink.write(")");
        };

        let slots = self.element_slots(array, index);
        let temps = slots.temps();
        if !temps.is_empty() {
            self.sink.write("let (")?;
            for (i, (name, init)) in temps.into_iter().enumerate() {
                if i > 0 {
                    self.sink.write(", ")?;
                }
                self.sink.write(name)?;
                self.sink.write(" = ")?;
                self.write_expr(cfg, init)?;
            }
            self.sink.write(") ")?;
        }
        self.write_element_update(cfg, &slots, binary, value)
    }

    /// Temporaries for whichever of `array` and `index` has side effects.
    fn element_slots(&mut self, array: &'a Expr, index: &'a Expr) -> ElementSlots<'a> {
        if is_pure(array) && is_pure(index) {
            return ElementSlots {
                array: Slot::Inline(array),
                index: Slot::Inline(index),
            };
        }
        let n = self.ctx.next_temp();
        trace!(n, "binding element update operands");
        let slot = |expr: &'a Expr, base: &str| {
            if is_pure(expr) {
                Slot::Inline(expr)
            } else {
                Slot::Temp {
                    name: format!("{base}{n}"),
                    init: expr,
                }
            }
        };
        ElementSlots {
            array: slot(array, "array"),
            index: slot(index, "index"),
        }
    }

    fn write_slot(&mut self, cfg: &Config, slot: &Slot<'a>, min: u8) -> Result<()> {
        match *slot {
            Slot::Inline(expr) => self.write_operand(cfg, expr, min),
            Slot::Temp { ref name, .. } => self.sink.write(name),
        }
    }

    /// `a.set(i, a.get(i) op v)`
    fn write_element_update(
        &mut self,
        cfg: &Config,
        slots: &ElementSlots<'a>,
        binary: BinaryOp,
        value: &'a Expr,
    ) -> Result<()> {
        self.write_slot(cfg, &slots.array, Precedence::POSTFIX)?;
        self.sink.write(".set(")?;
        self.write_slot(cfg, &slots.index, 0)?;
        self.sink.write(", ")?;
        self.write_slot(cfg, &slots.array, Precedence::POSTFIX)?;
        self.sink.write(".get(")?;
        self.write_slot(cfg, &slots.index, 0)?;
        self.sink.write(") ")?;
        self.sink.write(binary.as_str())?;
        self.sink.write(" ")?;
        self.write_operand(cfg, value, binary.precedence() + 1)?;
        self.sink.write(")")
    }

    /// `Array { a, b }`
    fn write_array_init(&mut self, cfg: &Config, elements: &'a [Expr]) -> Result<()> {
        trace!("array initializer becomes Array enumeration");
        if elements.is_empty() {
            return self.sink.write("Array {}");
        }
        self.sink.write("Array { ")?;
        self.write_args(cfg, elements)?;
        self.sink.write(" }")
    }

    fn write_call(
        &mut self,
        cfg: &Config,
        target: Option<&'a Expr>,
        type_args: &'a [TypeRef],
        name: &'a str,
        args: &'a [Expr],
    ) -> Result<()> {
        if name == "println" && target.is_some_and(is_system_out) {
            self.sink.write("print(")?;
            self.write_args(cfg, args)?;
            return self.sink.write(")");
        }

        if let Some(target) = target {
            self.write_operand(cfg, target, Precedence::POSTFIX)?;
            self.sink.write(".")?;
        }

        if cfg.convert_getters && args.is_empty() {
            if let Some(property) = getter_property(name) {
                trace!(method = name, %property, "getter call becomes attribute read");
                return self.sink.write(&escape(&property, true));
            }
        }

        self.sink.write(&escape(name, true))?;
        if !type_args.is_empty() {
            let rendered: Vec<String> = type_args.iter().map(render_type).collect();
            self.sink.write("<")?;
            self.sink.write(&rendered.join(", "))?;
            self.sink.write(">")?;
        }
        self.sink.write("(")?;
        self.write_args(cfg, args)?;
        self.sink.write(")")
    }

    /// Anonymous class: `object satisfies T {..}` without constructor
    /// arguments, `object extends T(args) {..}` with them.
    fn write_object(
        &mut self,
        cfg: &Config,
        ty: &'a ClassType,
        args: &'a [Expr],
        members: &'a [Member],
    ) -> Result<()> {
        if args.is_empty() {
            self.sink.write("object satisfies ")?;
            self.sink.write(&render_class_type(ty))?;
        } else {
            self.sink.write("object extends ")?;
            self.sink.write(&render_class_type(ty))?;
            self.sink.write("(")?;
            self.write_args(cfg, args)?;
            self.sink.write(")")?;
        }
        self.sink.write(" ")?;
        self.write_body(cfg, members, Owner::Class)
    }
}
