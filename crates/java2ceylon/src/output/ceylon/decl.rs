//! Type and member declarations.

use super::CeylonWriter;
use crate::ast::{
    ClassDecl, ClassType, ConstructorDecl, EnumConstant, EnumDecl, FieldDecl, InterfaceDecl,
    Member, MethodDecl, Modifier, Param, TypeDecl,
};
use crate::config::Config;
use crate::error::Result;
use crate::names::{
    escape, render_class_type, render_type, render_type_constraints, render_type_params,
};
use std::io::Write;
use tracing::{debug, trace};

/// The kind of body a member list belongs to.
#[derive(Debug, Clone, Copy)]
pub(super) enum Owner<'a> {
    Class,
    Interface,
    /// Enum body; carries the enum's name for the per-variant initializers.
    Enum(&'a str),
}

fn has(modifiers: &[Modifier], modifier: Modifier) -> bool {
    modifiers.contains(&modifier)
}

impl<'a, W: Write> CeylonWriter<'a, W> {
    pub(super) fn write_type_decl(&mut self, cfg: &Config, decl: &'a TypeDecl) -> Result<()> {
        debug!(name = decl.name(), "translating type declaration");
        match decl {
            TypeDecl::Class(class) => self.write_class(cfg, class),
            TypeDecl::Interface(interface) => self.write_interface(cfg, interface),
            TypeDecl::Enum(decl) => self.write_enum(cfg, decl),
        }
    }

    fn write_class(&mut self, cfg: &Config, class: &'a ClassDecl) -> Result<()> {
        if has(&class.modifiers, Modifier::Public) {
            self.sink.write("shared ")?;
        }
        if has(&class.modifiers, Modifier::Abstract) {
            self.sink.write("abstract ")?;
        }
        self.sink.write("class ")?;
        self.sink.write(&class.name)?;
        self.sink.write(&render_type_params(&class.type_params))?;
        // Ceylon declares the initializer parameters inline.
        if !class.has_constructor() {
            self.sink.write("()")?;
        }
        if let Some(superclass) = &class.superclass {
            self.sink.write(" extends ")?;
            self.sink.write(&render_class_type(superclass))?;
            self.sink.write("()")?;
        }
        self.write_satisfies(&class.interfaces)?;
        self.sink.write(&render_type_constraints(&class.type_params))?;
        self.sink.write(" ")?;
        self.write_body(cfg, &class.body, Owner::Class)?;
        self.sink.newline()
    }

    fn write_interface(&mut self, cfg: &Config, interface: &'a InterfaceDecl) -> Result<()> {
        if has(&interface.modifiers, Modifier::Public) {
            self.sink.write("shared ")?;
        }
        self.sink.write("interface ")?;
        self.sink.write(&interface.name)?;
        self.sink.write(&render_type_params(&interface.type_params))?;
        self.write_satisfies(&interface.extends)?;
        self.sink.write(&render_type_constraints(&interface.type_params))?;
        self.sink.write(" ")?;
        self.write_body(cfg, &interface.body, Owner::Interface)?;
        self.sink.newline()
    }

    /// An enum becomes a class whose cases are named constructors, each
    /// recording the constant's name in `string`.
    fn write_enum(&mut self, cfg: &Config, decl: &'a EnumDecl) -> Result<()> {
        if has(&decl.modifiers, Modifier::Public) {
            self.sink.write("shared ")?;
        }
        self.sink.write("class ")?;
        self.sink.write(&decl.name)?;
        self.write_satisfies(&decl.interfaces)?;
        self.sink.write(" {")?;
        self.sink.newline()?;
        self.sink.indent();

        self.sink.write("shared actual String string;")?;
        self.sink.newline()?;
        if !decl.body.is_empty() {
            self.sink.newline()?;
            self.write_members(cfg, &decl.body, Owner::Enum(&decl.name))?;
        }
        if !decl.constants.is_empty() {
            self.sink.newline()?;
            for constant in &decl.constants {
                self.write_enum_constant(cfg, &decl.name, constant)?;
            }
        }

        self.sink.dedent();
        self.sink.write("}")?;
        self.sink.newline()
    }

    fn write_enum_constant(
        &mut self,
        cfg: &Config,
        enum_name: &str,
        constant: &'a EnumConstant,
    ) -> Result<()> {
        trace!(constant = %constant.name, "enum constant becomes a named constructor");
        self.sink.write("shared new _")?;
        self.sink.write(&constant.name)?;
        if constant.args.is_empty() {
            self.sink.write(" { string = \"")?;
            self.sink.write(&constant.name)?;
            self.sink.write("\"; }")?;
        } else {
            self.sink.write(" extends _")?;
            self.sink.write(enum_name)?;
            self.sink.write("(\"")?;
            self.sink.write(&constant.name)?;
            self.sink.write("\", ")?;
            self.write_args(cfg, &constant.args)?;
            self.sink.write(") { }")?;
        }
        self.sink.newline()
    }

    /// Enum constructors take the constant name first and store it.
    fn write_enum_constructor(
        &mut self,
        cfg: &Config,
        enum_name: &str,
        ctor: &'a ConstructorDecl,
    ) -> Result<()> {
        self.sink.write("abstract new _")?;
        self.sink.write(enum_name)?;
        self.sink.write("(String string")?;
        for param in &ctor.params {
            self.sink.write(", ")?;
            self.write_param(cfg, param)?;
        }
        self.sink.write(") {")?;
        self.sink.newline()?;
        self.sink.indent();
        self.sink.write("this.string = string;")?;
        self.sink.newline()?;
        self.write_stmts(cfg, &ctor.body.stmts)?;
        self.sink.dedent();
        self.sink.write("}")?;
        self.sink.newline()
    }

    fn write_satisfies(&mut self, types: &[ClassType]) -> Result<()> {
        if types.is_empty() {
            return Ok(());
        }
        let rendered: Vec<String> = types.iter().map(render_class_type).collect();
        self.sink.write(" satisfies ")?;
        self.sink.write(&rendered.join(" & "))
    }

    /// `{ members }`, without a trailing newline.
    pub(super) fn write_body(
        &mut self,
        cfg: &Config,
        members: &'a [Member],
        owner: Owner<'a>,
    ) -> Result<()> {
        self.sink.write("{")?;
        self.sink.newline()?;
        self.sink.indent();
        self.write_members(cfg, members, owner)?;
        self.sink.dedent();
        self.sink.write("}")
    }

    /// Members one after another; consecutive fields stay together, anything
    /// else gets a blank line before it.
    fn write_members(
        &mut self,
        cfg: &Config,
        members: &'a [Member],
        owner: Owner<'a>,
    ) -> Result<()> {
        let mut previous: Option<&Member> = None;
        for member in members {
            if let Some(previous) = previous {
                let fields =
                    matches!(previous, Member::Field(_)) && matches!(member, Member::Field(_));
                if !fields {
                    self.sink.newline()?;
                }
            }
            self.write_member(cfg, member, owner)?;
            previous = Some(member);
        }
        Ok(())
    }

    fn write_member(&mut self, cfg: &Config, member: &'a Member, owner: Owner<'a>) -> Result<()> {
        match member {
            Member::Field(field) => self.write_field(cfg, field),
            Member::Method(method) => self.write_method(cfg, method, owner),
            Member::Constructor(ctor) => match owner {
                Owner::Enum(name) => self.write_enum_constructor(cfg, name, ctor),
                Owner::Class | Owner::Interface => self.write_constructor(cfg, ctor),
            },
            Member::Type(decl) => self.write_type_decl(cfg, decl),
            // The class body is the initializer.
            Member::Initializer(block) => self.write_stmts(cfg, &block.stmts),
        }
    }

    fn write_field(&mut self, cfg: &Config, field: &'a FieldDecl) -> Result<()> {
        let ty = render_type(&field.ty);
        for var in &field.declarators {
            if has(&field.modifiers, Modifier::Public) {
                self.sink.write("shared ")?;
            }
            if cfg.declare_mutable_by_default {
                self.sink.write("variable ")?;
            }
            self.sink.write(&ty)?;
            self.sink.write(" ")?;
            self.sink.write(&escape(&var.name, true))?;
            if let Some(init) = &var.init {
                self.sink.write(" = ")?;
                self.write_expr(cfg, init)?;
            }
            self.sink.write(";")?;
            self.sink.newline()?;
        }
        Ok(())
    }

    /// Modifiers come out as visibility, then `actual`, then `formal` or
    /// `default`. Interface members are always shared, and only methods
    /// marked `default` keep their body.
    fn write_method(
        &mut self,
        cfg: &Config,
        method: &'a MethodDecl,
        owner: Owner<'a>,
    ) -> Result<()> {
        let in_interface = matches!(owner, Owner::Interface);
        if in_interface || has(&method.modifiers, Modifier::Public) {
            self.sink.write("shared ")?;
        }
        if has(&method.modifiers, Modifier::Override) {
            self.sink.write("actual ")?;
        }

        let body = if in_interface {
            if has(&method.modifiers, Modifier::Default) {
                self.sink.write("default ")?;
                method.body.as_ref()
            } else {
                self.sink.write("formal ")?;
                None
            }
        } else if has(&method.modifiers, Modifier::Abstract) {
            self.sink.write("formal ")?;
            None
        } else {
            method.body.as_ref()
        };

        match &method.result {
            Some(ty) => self.sink.write(&render_type(ty))?,
            None => self.sink.write("void")?,
        }
        self.sink.write(" ")?;
        self.sink.write(&escape(&method.name, true))?;
        self.sink.write(&render_type_params(&method.type_params))?;
        self.sink.write("(")?;
        self.write_params(cfg, &method.params)?;
        self.sink.write(")")?;
        self.sink.write(&render_type_constraints(&method.type_params))?;

        match body {
            Some(block) => {
                self.sink.write(" ")?;
                self.write_block(cfg, &block.stmts)?;
            }
            None => self.sink.write(";")?,
        }
        self.sink.newline()
    }

    fn write_constructor(&mut self, cfg: &Config, ctor: &'a ConstructorDecl) -> Result<()> {
        if has(&ctor.modifiers, Modifier::Public) {
            self.sink.write("shared ")?;
        }
        self.sink.write("new (")?;
        self.write_params(cfg, &ctor.params)?;
        self.sink.write(") ")?;
        self.write_block(cfg, &ctor.body.stmts)?;
        self.sink.newline()
    }

    fn write_params(&mut self, cfg: &Config, params: &'a [Param]) -> Result<()> {
        self.write_separated(params, ", ", |w, param| w.write_param(cfg, param))
    }

    fn write_param(&mut self, cfg: &Config, param: &Param) -> Result<()> {
        if cfg.declare_mutable_by_default {
            self.sink.write("variable ")?;
        }
        self.sink.write(&render_type(&param.ty))?;
        if param.varargs {
            self.sink.write("*")?;
        }
        self.sink.write(" ")?;
        self.sink.write(&escape(&param.name, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        Block, EnumConstant, Expr, PrimitiveType, Stmt, TypeArg, TypeParam, TypeRef,
    };

    fn emit_with(cfg: Config, decl: &TypeDecl) -> String {
        let mut writer = CeylonWriter::new(Vec::new());
        writer.write_type_decl(&cfg, decl).unwrap();
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    fn emit(decl: &TypeDecl) -> String {
        emit_with(Config::default(), decl)
    }

    fn int() -> TypeRef {
        TypeRef::primitive(PrimitiveType::Int)
    }

    #[test]
    fn test_class_header() {
        let mut class = ClassDecl::new("Shape", vec![]);
        class.modifiers = vec![Modifier::Public, Modifier::Abstract];
        class.type_params = vec![TypeParam::bounded(
            "T",
            vec![ClassType::generic(
                "Comparable",
                vec![TypeArg::of(TypeRef::class("T"))],
            )],
        )];
        class.superclass = Some(ClassType::simple("Base"));
        class.interfaces = vec![ClassType::simple("A"), ClassType::simple("B")];
        assert_eq!(
            emit(&TypeDecl::Class(class)),
            "shared abstract class Shape<T>() extends Base() satisfies A & B \
             given T satisfies Comparable<T> {\n}\n"
        );
    }

    #[test]
    fn test_private_class_is_not_shared() {
        let mut class = ClassDecl::new("Hidden", vec![]);
        class.modifiers = vec![Modifier::Private, Modifier::Final];
        assert_eq!(emit(&TypeDecl::Class(class)), "class Hidden() {\n}\n");
    }

    #[test]
    fn test_explicit_constructor_suppresses_parameter_list() {
        let class = ClassDecl::new(
            "Point",
            vec![
                Member::Field(FieldDecl::new(vec![Modifier::Private], int(), "x", None)),
                Member::Constructor(ConstructorDecl::new(
                    vec![Modifier::Public],
                    "Point",
                    vec![Param::new(int(), "x")],
                    Block::new(vec![Stmt::expr(Expr::assign(
                        Expr::field(Expr::This, "x"),
                        Expr::name("x"),
                    ))]),
                )),
            ],
        );
        assert_eq!(
            emit(&TypeDecl::Class(class)),
            "class Point {\n    Integer x;\n\n    \
             shared new (Integer x) {\n        this.x = x;\n    }\n}\n"
        );
    }

    #[test]
    fn test_method_modifier_order() {
        let method = MethodDecl::new(
            vec![Modifier::Override, Modifier::Public],
            Some(int()),
            "size",
            vec![],
            Some(Block::new(vec![Stmt::return_stmt(Some(Expr::name("n")))])),
        );
        let class = ClassDecl::new("Box", vec![Member::Method(method)]);
        assert_eq!(
            emit(&TypeDecl::Class(class)),
            "class Box() {\n    shared actual Integer size() {\n        return n;\n    }\n}\n"
        );
    }

    #[test]
    fn test_abstract_method_is_formal() {
        let method = MethodDecl::new(
            vec![Modifier::Public, Modifier::Abstract],
            None,
            "draw",
            vec![],
            None,
        );
        let mut class = ClassDecl::new("Shape", vec![Member::Method(method)]);
        class.modifiers = vec![Modifier::Abstract];
        assert_eq!(
            emit(&TypeDecl::Class(class)),
            "abstract class Shape() {\n    shared formal void draw();\n}\n"
        );
    }

    #[test]
    fn test_interface_methods() {
        let greet = MethodDecl::new(
            vec![],
            None,
            "greet",
            vec![Param::new(TypeRef::class("String"), "name")],
            None,
        );
        let hello = MethodDecl::new(
            vec![Modifier::Default],
            None,
            "hello",
            vec![],
            Some(Block::new(vec![Stmt::expr(Expr::call(
                "greet",
                vec![Expr::string("x")],
            ))])),
        );
        let mut interface =
            InterfaceDecl::new("Greeter", vec![Member::Method(greet), Member::Method(hello)]);
        interface.modifiers = vec![Modifier::Public];
        interface.extends = vec![ClassType::simple("Named")];
        assert_eq!(
            emit(&TypeDecl::Interface(interface)),
            "shared interface Greeter satisfies Named {\n    \
             shared formal void greet(String name);\n\n    \
             shared default void hello() {\n        greet(\"x\");\n    }\n}\n"
        );
    }

    #[test]
    fn test_interface_method_with_body_but_no_default_is_formal() {
        let method = MethodDecl::new(
            vec![Modifier::Static],
            Some(int()),
            "zero",
            vec![],
            Some(Block::new(vec![Stmt::return_stmt(Some(Expr::number("0")))])),
        );
        let interface = InterfaceDecl::new("Util", vec![Member::Method(method)]);
        assert_eq!(
            emit(&TypeDecl::Interface(interface)),
            "interface Util {\n    shared formal Integer zero();\n}\n"
        );
    }

    #[test]
    fn test_simple_enum() {
        let decl = EnumDecl::new(
            "Color",
            vec![
                EnumConstant::new("Red", vec![]),
                EnumConstant::new("Green", vec![]),
            ],
        );
        assert_eq!(
            emit(&TypeDecl::Enum(decl)),
            "class Color {\n    shared actual String string;\n\n    \
             shared new _Red { string = \"Red\"; }\n    \
             shared new _Green { string = \"Green\"; }\n}\n"
        );
    }

    #[test]
    fn test_enum_with_constructor() {
        let double = TypeRef::primitive(PrimitiveType::Double);
        let mut decl = EnumDecl::new(
            "Planet",
            vec![EnumConstant::new("MERCURY", vec![Expr::number("3.3")])],
        );
        decl.modifiers = vec![Modifier::Public];
        decl.body = vec![
            Member::Field(FieldDecl::new(
                vec![Modifier::Private, Modifier::Final],
                double.clone(),
                "mass",
                None,
            )),
            Member::Constructor(ConstructorDecl::new(
                vec![],
                "Planet",
                vec![Param::new(double, "mass")],
                Block::new(vec![Stmt::expr(Expr::assign(
                    Expr::field(Expr::This, "mass"),
                    Expr::name("mass"),
                ))]),
            )),
        ];
        assert_eq!(
            emit(&TypeDecl::Enum(decl)),
            "shared class Planet {\n    shared actual String string;\n\n    \
             Float mass;\n\n    \
             abstract new _Planet(String string, Float mass) {\n        \
             this.string = string;\n        this.mass = mass;\n    }\n\n    \
             shared new _MERCURY extends _Planet(\"MERCURY\", 3.3) { }\n}\n"
        );
    }

    #[test]
    fn test_declare_mutable_by_default() {
        let method = MethodDecl::new(
            vec![],
            None,
            "set",
            vec![Param::new(int(), "value")],
            Some(Block::default()),
        );
        let class = ClassDecl::new(
            "Cell",
            vec![
                Member::Field(FieldDecl::new(
                    vec![Modifier::Public, Modifier::Final],
                    int(),
                    "count",
                    Some(Expr::number("0")),
                )),
                Member::Method(method),
            ],
        );
        assert_eq!(
            emit_with(Config::new(false, true), &TypeDecl::Class(class)),
            "class Cell() {\n    shared variable Integer count = 0;\n\n    \
             void set(variable Integer \\ivalue) {\n    }\n}\n"
        );
    }

    #[test]
    fn test_varargs_and_generic_method() {
        let mut method = MethodDecl::new(
            vec![Modifier::Public, Modifier::Static],
            Some(TypeRef::class("T")),
            "first",
            vec![Param {
                varargs: true,
                ..Param::new(TypeRef::class("T"), "items")
            }],
            None,
        );
        method.type_params = vec![TypeParam::new("T")];
        let class = ClassDecl::new("Lists", vec![Member::Method(method)]);
        assert_eq!(
            emit(&TypeDecl::Class(class)),
            "class Lists() {\n    shared T first<T>(T* items);\n}\n"
        );
    }

    #[test]
    fn test_initializer_block_inlines_into_body() {
        let class = ClassDecl::new(
            "Boot",
            vec![Member::Initializer(Block::new(vec![Stmt::expr(Expr::call(
                "start",
                vec![],
            ))]))],
        );
        assert_eq!(
            emit(&TypeDecl::Class(class)),
            "class Boot() {\n    start();\n}\n"
        );
    }
}
