//! Statements.
//!
//! Ceylon has no `do`/`while`, no three-clause `for` and no falling-through
//! `switch`, so those are rebuilt from `while (true)`, plain `while` and
//! `case`/`else` arms. Loops push a frame so that a `continue` further down
//! knows what the desugared loop must re-run first. A `break` is dropped
//! only when it is a statement of the case body itself.
//!
//! Ceylon has no statement labels or `synchronized`: labels are dropped and
//! the labeled statement kept, and a synchronized body becomes a plain block.

use super::CeylonWriter;
use crate::ast::{CatchClause, Expr, ForInit, LocalVarDecl, Resource, Stmt, SwitchGroup};
use crate::config::Config;
use crate::error::Result;
use crate::names::{escape, render_type};
use crate::output::context::{Frame, LoopTail, narrowings};
use std::io::Write;
use tracing::trace;

/// Statements of a branch or loop body; a lone statement is its own list.
fn body_stmts(stmt: &Stmt) -> &[Stmt] {
    match stmt {
        Stmt::Block(block) => &block.stmts,
        other => std::slice::from_ref(other),
    }
}

impl<'a, W: Write> CeylonWriter<'a, W> {
    pub(super) fn write_stmts(&mut self, cfg: &Config, stmts: &'a [Stmt]) -> Result<()> {
        for stmt in stmts {
            self.write_stmt(cfg, stmt)?;
        }
        Ok(())
    }

    /// `{ stmts }`, without a trailing newline.
    pub(super) fn write_block(&mut self, cfg: &Config, stmts: &'a [Stmt]) -> Result<()> {
        self.sink.write("{")?;
        self.sink.newline()?;
        self.sink.indent();
        self.write_stmts(cfg, stmts)?;
        self.sink.dedent();
        self.sink.write("}")
    }

    /// Write one statement, ending its last line.
    pub(super) fn write_stmt(&mut self, cfg: &Config, stmt: &'a Stmt) -> Result<()> {
        match stmt {
            Stmt::Block(block) => self.write_block(cfg, &block.stmts)?,
            Stmt::LocalVar(decl) => return self.write_local_var(cfg, decl),
            Stmt::Expr(expr) => self.write_expr_stmt(cfg, expr)?,
            Stmt::If {
                cond,
                then,
                otherwise,
            } => self.write_if(cfg, cond, then, otherwise.as_deref())?,
            Stmt::While { cond, body } => {
                self.sink.write("while (")?;
                self.write_expr(cfg, cond)?;
                self.sink.write(") ")?;
                self.ctx.push(Frame::Loop(LoopTail::None));
                self.write_block(cfg, body_stmts(body))?;
                self.ctx.pop();
            }
            Stmt::DoWhile { body, cond } => self.write_do_while(cfg, body, cond)?,
            Stmt::For {
                init,
                cond,
                update,
                body,
            } => self.write_for(cfg, init.as_ref(), cond.as_ref(), update, body)?,
            Stmt::ForEach {
                ty,
                name,
                iterable,
                body,
            } => {
                self.sink.write("for (")?;
                self.sink.write(&render_type(ty))?;
                self.sink.write(" ")?;
                self.sink.write(&escape(name, true))?;
                self.sink.write(" in ")?;
                self.write_expr(cfg, iterable)?;
                self.sink.write(") ")?;
                self.ctx.push(Frame::Loop(LoopTail::None));
                self.write_block(cfg, body_stmts(body))?;
                self.ctx.pop();
            }
            Stmt::Switch { selector, groups } => return self.write_switch(cfg, selector, groups),
            Stmt::Break(label) => {
                if let Some(label) = label {
                    trace!(%label, "dropping break label");
                }
                self.sink.write("break;")?;
            }
            Stmt::Continue(label) => {
                if let Some(label) = label {
                    trace!(%label, "dropping continue label");
                }
                if let Some(tail) = self.ctx.loop_tail() {
                    self.write_loop_tail(cfg, tail)?;
                }
                self.sink.write("continue;")?;
            }
            Stmt::Labeled { label, body } => {
                trace!(%label, "dropping statement label");
                return self.write_stmt(cfg, body);
            }
            Stmt::Synchronized { body, .. } => {
                trace!("synchronized block becomes plain block");
                self.write_block(cfg, &body.stmts)?;
            }
            Stmt::ConstructorCall { target, args } => {
                self.sink.write(target.as_str())?;
                self.sink.write("(")?;
                self.write_args(cfg, args)?;
                self.sink.write(");")?;
            }
            Stmt::Return(value) => {
                self.sink.write("return")?;
                if let Some(value) = value {
                    self.sink.write(" ")?;
                    self.write_expr(cfg, value)?;
                }
                self.sink.write(";")?;
            }
            Stmt::Throw(value) => {
                self.sink.write("throw ")?;
                self.write_expr(cfg, value)?;
                self.sink.write(";")?;
            }
            Stmt::Try {
                resources,
                body,
                catches,
                finally,
            } => {
                self.write_try(cfg, resources, &body.stmts, catches)?;
                if let Some(finally) = finally {
                    self.sink.write(" finally ")?;
                    self.write_block(cfg, &finally.stmts)?;
                }
            }
            Stmt::Empty => return Ok(()),
        }
        self.sink.newline()
    }

    /// The then-branch is written under the type tests its condition
    /// proves; `else if` chains stay on the closing-brace line.
    fn write_if(
        &mut self,
        cfg: &Config,
        cond: &'a Expr,
        then: &'a Stmt,
        otherwise: Option<&'a Stmt>,
    ) -> Result<()> {
        self.sink.write("if (")?;
        self.write_condition(cfg, cond)?;
        self.sink.write(") ")?;
        self.ctx.push(Frame::Branch(narrowings(cond)));
        self.write_block(cfg, body_stmts(then))?;
        self.ctx.pop();

        let Some(otherwise) = otherwise else {
            return Ok(());
        };
        self.sink.write(" else ")?;
        match otherwise {
            Stmt::If {
                cond,
                then,
                otherwise,
            } => self.write_if(cfg, cond, then, otherwise.as_deref()),
            other => {
                self.ctx.push(Frame::Branch(Vec::new()));
                self.write_block(cfg, body_stmts(other))?;
                self.ctx.pop();
                Ok(())
            }
        }
    }

    /// One line per declarator. An initializer that is a cast becomes an
    /// `assert (is T x = ...)`, unless an enclosing `if` already tested the
    /// cast operand against that type.
    fn write_local_var(&mut self, cfg: &Config, decl: &'a LocalVarDecl) -> Result<()> {
        let ty = render_type(&decl.ty);
        for var in &decl.declarators {
            let asserted = match var.init.as_ref().map(Expr::unparenthesized) {
                Some(Expr::Cast { ty: cast, expr }) => !self.ctx.is_narrowed(expr, cast),
                _ => false,
            };
            if asserted {
                trace!(name = %var.name, "cast initializer becomes an assertion");
                self.sink.write("assert (is ")?;
            } else if cfg.declare_mutable_by_default {
                self.sink.write("variable ")?;
            }
            self.sink.write(&ty)?;
            self.sink.write(" ")?;
            self.sink.write(&escape(&var.name, true))?;
            if let Some(init) = &var.init {
                self.sink.write(" = ")?;
                self.write_expr(cfg, init)?;
            }
            if asserted {
                self.sink.write(")")?;
            }
            self.sink.write(";")?;
            self.sink.newline()?;
        }
        Ok(())
    }

    fn write_do_while(&mut self, cfg: &Config, body: &'a Stmt, cond: &'a Expr) -> Result<()> {
        trace!("do/while becomes while (true) with a break guard");
        self.sink.write("while (true) {")?;
        self.sink.newline()?;
        self.sink.indent();
        self.ctx.push(Frame::Loop(LoopTail::Guard(cond)));
        self.write_stmts(cfg, body_stmts(body))?;
        self.ctx.pop();
        self.write_loop_tail(cfg, LoopTail::Guard(cond))?;
        self.sink.dedent();
        self.sink.write("}")
    }

    /// Initializers go before the loop and updates at the end of its body.
    fn write_for(
        &mut self,
        cfg: &Config,
        init: Option<&'a ForInit>,
        cond: Option<&'a Expr>,
        update: &'a [Expr],
        body: &'a Stmt,
    ) -> Result<()> {
        match init {
            Some(ForInit::Decl(decl)) => self.write_local_var(cfg, decl)?,
            Some(ForInit::Exprs(exprs)) => {
                for expr in exprs {
                    self.write_expr(cfg, expr)?;
                    self.sink.write(";")?;
                    self.sink.newline()?;
                }
            }
            None => {}
        }

        self.sink.write("while (")?;
        match cond {
            Some(cond) => self.write_expr(cfg, cond)?,
            None => self.sink.write("true")?,
        }
        self.sink.write(") {")?;
        self.sink.newline()?;
        self.sink.indent();
        self.ctx.push(Frame::Loop(LoopTail::Update(update)));
        self.write_stmts(cfg, body_stmts(body))?;
        self.ctx.pop();
        self.write_loop_tail(cfg, LoopTail::Update(update))?;
        self.sink.dedent();
        self.sink.write("}")
    }

    /// What a desugared loop runs at the end of each iteration.
    fn write_loop_tail(&mut self, cfg: &Config, tail: LoopTail<'a>) -> Result<()> {
        match tail {
            LoopTail::None => Ok(()),
            LoopTail::Update(update) => {
                for expr in update {
                    self.write_expr(cfg, expr)?;
                    self.sink.write(";")?;
                    self.sink.newline()?;
                }
                Ok(())
            }
            LoopTail::Guard(cond) => {
                self.sink.write("if (")?;
                self.write_expr(cfg, cond)?;
                self.sink.write(") {break;}")?;
                self.sink.newline()
            }
        }
    }

    /// Each group becomes a `case` arm keyed on its first label. The
    /// default group always comes last as `else`, and an empty `else` is
    /// added when there is none.
    fn write_switch(
        &mut self,
        cfg: &Config,
        selector: &'a Expr,
        groups: &'a [SwitchGroup],
    ) -> Result<()> {
        self.sink.write("switch (")?;
        self.write_expr(cfg, selector)?;
        self.sink.write(")")?;
        self.sink.newline()?;

        for group in groups.iter().filter(|g| !g.is_default()) {
            let Some(label) = group.first_case() else {
                continue;
            };
            self.sink.write("case (")?;
            self.write_expr(cfg, label)?;
            self.sink.write(") ")?;
            self.write_case_body(cfg, group)?;
            self.sink.newline()?;
        }

        match groups.iter().find(|g| g.is_default()) {
            Some(group) => {
                self.sink.write("else ")?;
                self.write_case_body(cfg, group)?;
            }
            None => {
                trace!("adding empty else to switch without default");
                self.sink.write("else {}")?;
            }
        }
        self.sink.newline()
    }

    /// Case arms don't fall through, so an unlabeled `break` directly in
    /// the case body is dropped. Nested ones are left alone.
    fn write_case_body(&mut self, cfg: &Config, group: &'a SwitchGroup) -> Result<()> {
        self.sink.write("{")?;
        self.sink.newline()?;
        self.sink.indent();
        for stmt in &group.body {
            if matches!(stmt, Stmt::Break(None)) {
                trace!("dropping break that ends a switch case");
                continue;
            }
            self.write_stmt(cfg, stmt)?;
        }
        self.sink.dedent();
        self.sink.write("}")
    }

    fn write_try(
        &mut self,
        cfg: &Config,
        resources: &'a [Resource],
        body: &'a [Stmt],
        catches: &'a [CatchClause],
    ) -> Result<()> {
        self.sink.write("try ")?;
        if !resources.is_empty() {
            self.sink.write("(")?;
            self.write_separated(resources, "; ", |w, resource| {
                w.sink.write(&render_type(&resource.ty))?;
                w.sink.write(" ")?;
                w.sink.write(&escape(&resource.name, true))?;
                w.sink.write(" = ")?;
                w.write_expr(cfg, &resource.init)
            })?;
            self.sink.write(") ")?;
        }
        self.write_block(cfg, body)?;

        for catch in catches {
            let types: Vec<String> = catch.types.iter().map(render_type).collect();
            self.sink.write(" catch (")?;
            self.sink.write(&types.join("|"))?;
            self.sink.write(" ")?;
            self.sink.write(&escape(&catch.name, true))?;
            self.sink.write(") ")?;
            self.write_block(cfg, &catch.body.stmts)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        AssignOp, BinaryOp, Block, ConstructorTarget, PrimitiveType, SwitchLabel, TypeRef, UnaryOp,
        VarDeclarator,
    };

    fn emit_with(cfg: Config, stmts: &[Stmt]) -> String {
        let mut writer = CeylonWriter::new(Vec::new());
        writer.write_stmts(&cfg, stmts).unwrap();
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    fn emit(stmts: &[Stmt]) -> String {
        emit_with(Config::default(), stmts)
    }

    fn call(name: &str) -> Stmt {
        Stmt::expr(Expr::call(name, vec![]))
    }

    fn int() -> TypeRef {
        TypeRef::primitive(PrimitiveType::Int)
    }

    fn lt(name: &str, bound: &str) -> Expr {
        Expr::binary(Expr::name(name), BinaryOp::Lt, Expr::number(bound))
    }

    fn incr(name: &str) -> Expr {
        Expr::unary(UnaryOp::PostIncrement, Expr::name(name))
    }

    #[test]
    fn test_do_while() {
        let stmt = Stmt::do_while(Stmt::block(vec![call("step")]), Expr::name("more"));
        assert_eq!(
            emit(&[stmt]),
            "while (true) {\n    step();\n    if (more) {break;}\n}\n"
        );
    }

    #[test]
    fn test_do_while_continue_repeats_guard() {
        let stmt = Stmt::do_while(
            Stmt::block(vec![
                Stmt::if_stmt(Expr::name("skip"), Stmt::Continue(None), None),
                call("step"),
            ]),
            Expr::name("more"),
        );
        assert_eq!(
            emit(&[stmt]),
            "while (true) {\n    if (skip) {\n        \
             if (more) {break;}\n        continue;\n    }\n    \
             step();\n    if (more) {break;}\n}\n"
        );
    }

    #[test]
    fn test_counting_for() {
        let stmt = Stmt::for_loop(
            Some(ForInit::Decl(LocalVarDecl {
                modifiers: vec![],
                ty: int(),
                declarators: vec![VarDeclarator::new("i", Some(Expr::number("0")))],
            })),
            Some(lt("i", "10")),
            vec![incr("i")],
            call("tick"),
        );
        assert_eq!(
            emit(&[stmt]),
            "Integer i = 0;\nwhile (i < 10) {\n    tick();\n    i++;\n}\n"
        );
    }

    #[test]
    fn test_for_without_clauses() {
        let stmt = Stmt::for_loop(None, None, vec![], Stmt::block(vec![Stmt::Break(None)]));
        assert_eq!(emit(&[stmt]), "while (true) {\n    break;\n}\n");
    }

    #[test]
    fn test_for_continue_runs_update_first() {
        let stmt = Stmt::for_loop(
            Some(ForInit::Exprs(vec![Expr::assign(
                Expr::name("i"),
                Expr::number("0"),
            )])),
            Some(lt("i", "3")),
            vec![incr("i")],
            Stmt::block(vec![Stmt::Continue(None)]),
        );
        assert_eq!(
            emit(&[stmt]),
            "i = 0;\nwhile (i < 3) {\n    i++;\n    continue;\n    i++;\n}\n"
        );
    }

    #[test]
    fn test_continue_in_nested_for_each_is_plain() {
        let stmt = Stmt::for_loop(
            None,
            None,
            vec![incr("i")],
            Stmt::for_each(
                TypeRef::class("String"),
                "s",
                Expr::name("items"),
                Stmt::Continue(None),
            ),
        );
        assert_eq!(
            emit(&[stmt]),
            "while (true) {\n    for (String s in items) {\n        continue;\n    }\n    i++;\n}\n"
        );
    }

    #[test]
    fn test_for_each() {
        let stmt = Stmt::for_each(
            TypeRef::class("String"),
            "line",
            Expr::name("lines"),
            Stmt::expr(Expr::call("print", vec![Expr::name("line")])),
        );
        assert_eq!(
            emit(&[stmt]),
            "for (String line in lines) {\n    print(line);\n}\n"
        );
    }

    #[test]
    fn test_while_wraps_single_statement() {
        let stmt = Stmt::while_loop(Expr::name("running"), call("poll"));
        assert_eq!(emit(&[stmt]), "while (running) {\n    poll();\n}\n");
    }

    #[test]
    fn test_switch_without_default() {
        let stmt = Stmt::switch(
            Expr::name("n"),
            vec![
                SwitchGroup::case(
                    Expr::number("1"),
                    vec![call("one"), Stmt::Break(None)],
                ),
                SwitchGroup::case(
                    Expr::number("2"),
                    vec![call("two"), Stmt::Break(None)],
                ),
            ],
        );
        assert_eq!(
            emit(&[stmt]),
            "switch (n)\ncase (1) {\n    one();\n}\ncase (2) {\n    two();\n}\nelse {}\n"
        );
    }

    #[test]
    fn test_switch_default_moves_last() {
        let stmt = Stmt::switch(
            Expr::name("n"),
            vec![
                SwitchGroup::default(vec![call("other")]),
                SwitchGroup::case(Expr::number("1"), vec![call("one")]),
            ],
        );
        assert_eq!(
            emit(&[stmt]),
            "switch (n)\ncase (1) {\n    one();\n}\nelse {\n    other();\n}\n"
        );
    }

    #[test]
    fn test_switch_shared_labels_use_first() {
        let group = SwitchGroup {
            labels: vec![
                SwitchLabel::Case(Expr::name("A")),
                SwitchLabel::Case(Expr::name("B")),
            ],
            body: vec![call("ab")],
        };
        let stmt = Stmt::switch(Expr::name("e"), vec![group]);
        assert_eq!(
            emit(&[stmt]),
            "switch (e)\ncase (A) {\n    ab();\n}\nelse {}\n"
        );
    }

    #[test]
    fn test_nested_break_in_switch_case_is_kept() {
        let stmt = Stmt::switch(
            Expr::name("n"),
            vec![SwitchGroup::case(
                Expr::number("1"),
                vec![Stmt::while_loop(Expr::bool(true), Stmt::Break(None))],
            )],
        );
        assert_eq!(
            emit(&[stmt]),
            "switch (n)\ncase (1) {\n    while (true) {\n        break;\n    }\n}\nelse {}\n"
        );
    }

    #[test]
    fn test_if_else_chain() {
        let stmt = Stmt::if_stmt(
            Expr::name("a"),
            call("x"),
            Some(Stmt::if_stmt(
                Expr::name("b"),
                Stmt::block(vec![call("y")]),
                Some(call("z")),
            )),
        );
        assert_eq!(
            emit(&[stmt]),
            "if (a) {\n    x();\n} else if (b) {\n    y();\n} else {\n    z();\n}\n"
        );
    }

    #[test]
    fn test_cast_initializer_becomes_assert() {
        let stmt = Stmt::local(
            TypeRef::class("Circle"),
            "c",
            Some(Expr::cast(TypeRef::class("Circle"), Expr::name("shape"))),
        );
        assert_eq!(emit(&[stmt]), "assert (is Circle c = shape);\n");
    }

    #[test]
    fn test_cast_after_matching_instanceof_stays_plain() {
        let decl = Stmt::local(
            TypeRef::class("Circle"),
            "c",
            Some(Expr::cast(TypeRef::class("Circle"), Expr::name("shape"))),
        );
        let stmt = Stmt::if_stmt(
            Expr::instance_of(Expr::name("shape"), TypeRef::class("Circle")),
            Stmt::block(vec![decl.clone()]),
            Some(Stmt::block(vec![decl])),
        );
        assert_eq!(
            emit(&[stmt]),
            "if (is Circle shape) {\n    Circle c = shape;\n} else {\n    \
             assert (is Circle c = shape);\n}\n"
        );
    }

    #[test]
    fn test_cast_after_other_instanceof_asserts() {
        let stmt = Stmt::if_stmt(
            Expr::instance_of(Expr::name("other"), TypeRef::class("Circle")),
            Stmt::local(
                TypeRef::class("Circle"),
                "c",
                Some(Expr::cast(TypeRef::class("Circle"), Expr::name("shape"))),
            ),
            None,
        );
        assert_eq!(
            emit(&[stmt]),
            "if (is Circle other) {\n    assert (is Circle c = shape);\n}\n"
        );
    }

    #[test]
    fn test_local_variables() {
        let stmt = Stmt::LocalVar(LocalVarDecl {
            modifiers: vec![],
            ty: int(),
            declarators: vec![
                VarDeclarator::new("a", Some(Expr::number("1"))),
                VarDeclarator::new("b", None),
            ],
        });
        assert_eq!(emit(&[stmt.clone()]), "Integer a = 1;\nInteger b;\n");
        assert_eq!(
            emit_with(Config::new(false, true), &[stmt]),
            "variable Integer a = 1;\nvariable Integer b;\n"
        );
    }

    #[test]
    fn test_try_with_resources_and_multi_catch() {
        let stmt = Stmt::Try {
            resources: vec![
                Resource {
                    ty: TypeRef::class("Reader"),
                    name: "r".into(),
                    init: Expr::call("open", vec![]),
                },
                Resource {
                    ty: TypeRef::class("Writer"),
                    name: "w".into(),
                    init: Expr::call("create", vec![]),
                },
            ],
            body: Block::new(vec![call("copy")]),
            catches: vec![CatchClause {
                types: vec![
                    TypeRef::class("IOException"),
                    TypeRef::class("RuntimeException"),
                ],
                name: "e".into(),
                body: Block::new(vec![Stmt::Throw(Expr::name("e"))]),
            }],
            finally: Some(Block::new(vec![call("done")])),
        };
        assert_eq!(
            emit(&[stmt]),
            "try (Reader r = open(); Writer w = create()) {\n    copy();\n} \
             catch (IOException|RuntimeException e) {\n    throw e;\n} finally {\n    done();\n}\n"
        );
    }

    #[test]
    fn test_return_forms() {
        assert_eq!(emit(&[Stmt::return_stmt(None)]), "return;\n");
        assert_eq!(
            emit(&[Stmt::return_stmt(Some(Expr::name("x")))]),
            "return x;\n"
        );
    }

    #[test]
    fn test_empty_statement_writes_nothing() {
        assert_eq!(emit(&[Stmt::Empty, call("go")]), "go();\n");
    }

    #[test]
    fn test_compound_assignment_statement() {
        let stmt = Stmt::expr(Expr::compound(
            Expr::name("total"),
            AssignOp::Add,
            Expr::name("x"),
        ));
        assert_eq!(emit(&[stmt]), "total += x;\n");
    }

    #[test]
    fn test_only_direct_case_breaks_are_dropped() {
        let attempt = Stmt::Try {
            resources: vec![],
            body: Block::new(vec![call("foo"), Stmt::Break(None)]),
            catches: vec![CatchClause {
                types: vec![TypeRef::class("E")],
                name: "e".into(),
                body: Block::default(),
            }],
            finally: None,
        };
        let stmt = Stmt::switch(
            Expr::name("n"),
            vec![SwitchGroup::case(
                Expr::number("1"),
                vec![
                    attempt,
                    Stmt::block(vec![Stmt::Break(None)]),
                    call("baz"),
                    Stmt::Break(None),
                ],
            )],
        );
        assert_eq!(
            emit(&[stmt]),
            "switch (n)\ncase (1) {\n    try {\n        foo();\n        break;\n    } \
             catch (E e) {\n    }\n    {\n        break;\n    }\n    baz();\n}\nelse {}\n"
        );
    }

    #[test]
    fn test_labels_are_dropped() {
        let stmt = Stmt::labeled(
            "outer",
            Stmt::for_each(
                TypeRef::class("String"),
                "s",
                Expr::name("items"),
                Stmt::block(vec![
                    Stmt::Continue(Some("outer".into())),
                    Stmt::Break(Some("outer".into())),
                ]),
            ),
        );
        assert_eq!(
            emit(&[stmt]),
            "for (String s in items) {\n    continue;\n    break;\n}\n"
        );
    }

    #[test]
    fn test_labeled_break_in_case_is_kept() {
        let stmt = Stmt::switch(
            Expr::name("n"),
            vec![SwitchGroup::case(
                Expr::number("1"),
                vec![Stmt::Break(Some("outer".into()))],
            )],
        );
        assert_eq!(
            emit(&[stmt]),
            "switch (n)\ncase (1) {\n    break;\n}\nelse {}\n"
        );
    }

    #[test]
    fn test_synchronized_body_is_plain_block() {
        let stmt = Stmt::Synchronized {
            lock: Expr::This,
            body: Block::new(vec![call("go")]),
        };
        assert_eq!(emit(&[stmt]), "{\n    go();\n}\n");
    }

    #[test]
    fn test_explicit_constructor_calls() {
        let sup = Stmt::ConstructorCall {
            target: ConstructorTarget::Super,
            args: vec![Expr::name("x")],
        };
        let this = Stmt::ConstructorCall {
            target: ConstructorTarget::This,
            args: vec![],
        };
        assert_eq!(emit(&[sup, this]), "super(x);\nthis();\n");
    }

    #[test]
    fn test_side_effecting_element_update_binds_values() {
        let update = |array: Expr, index: Expr| {
            Stmt::expr(Expr::compound(
                Expr::index(array, index),
                AssignOp::Add,
                Expr::number("1"),
            ))
        };
        let stmts = [
            update(Expr::call("arr", vec![]), incr("i")),
            update(Expr::name("a"), Expr::call("next", vec![])),
            update(Expr::name("a"), Expr::name("k")),
        ];
        assert_eq!(
            emit(&stmts),
            "value array0 = arr();\nvalue index0 = i++;\n\
             array0.set(index0, array0.get(index0) + 1);\n\
             value index1 = next();\na.set(index1, a.get(index1) + 1);\n\
             a.set(k, a.get(k) + 1);\n"
        );
    }
}
