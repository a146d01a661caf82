//! Haxe extern generator
//!
//! Walks a declaration tree and writes Haxe extern declarations:
//!
//! - classes and interfaces become `extern class`
//! - enums become `@:fakeEnum(Int) extern enum`
//! - bare object types become `typedef`
//! - global variables and functions of one namespace level are collected
//!   into a single `extern class Globals` with static members
//! - namespaces are flattened into `@:native("a.b.Name")` annotations

use crate::codegen::keywords::{escape_ident, escape_package, is_keyword};
use crate::codegen::writer::HaxeWriter;
use crate::config::RenderOptions;
use crate::ir::{
    haxe_type_name, Declaration, DeclarationKind, Module, Parameter, Property, Statement,
    TypeKind, TypeRef,
};
use tracing::{debug, trace, warn};

/// Name of the synthetic class holding global variables and functions
pub const GLOBALS_CLASS: &str = "Globals";

/// Generator for Haxe extern declarations
pub struct HaxeGenerator<'a> {
    module: &'a Module,
    options: &'a RenderOptions,
}

impl<'a> HaxeGenerator<'a> {
    /// Create a new Haxe generator for a module
    pub fn new(module: &'a Module, options: &'a RenderOptions) -> Self {
        Self { module, options }
    }

    /// Generate the complete extern source
    pub fn generate(&self) -> String {
        debug!(
            statements = self.module.statements.len(),
            "hxweld.render_module"
        );
        let mut ctx = RenderContext::new(self.options);
        ctx.module(self.module);
        ctx.out.finish()
    }
}

/// Where a member is being written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemberPosition {
    /// Inside a class body: `var a :T;`, `function f(..) :R;`
    Body,
    /// Inside an anonymous structure: `a :T,`, `f :(A -> R),`
    Structural,
}

/// Per-render state: the output buffer and the open namespace path
struct RenderContext<'a> {
    out: HaxeWriter<'a>,
    namespaces: Vec<&'a str>,
    options: &'a RenderOptions,
}

impl<'a> RenderContext<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            out: HaxeWriter::new(&options.indent),
            namespaces: Vec::new(),
            options,
        }
    }

    fn module(&mut self, module: &'a Module) {
        let mut globals = Vec::new();
        let mut package_written = false;

        for statement in &module.statements {
            match statement {
                Statement::Namespace { name, body } => {
                    trace!(namespace = %name, "hxweld.enter_namespace");
                    self.namespaces.push(name);
                    self.module(body);
                    self.namespaces.pop();
                }
                Statement::Global(prop) => globals.push(prop),
                Statement::Declaration(decl) => {
                    self.package_header(&mut package_written);
                    self.declaration(decl);
                    self.out.newline();
                    self.out.newline();
                }
            }
        }

        if globals.is_empty() {
            return;
        }

        self.package_header(&mut package_written);
        if !self.namespaces.is_empty() {
            let path = self.namespaces.join(".");
            self.native(&path);
        }
        self.out.write_line(&format!("extern class {}", GLOBALS_CLASS));
        self.out.write_line("{");
        self.out.indent();
        for prop in globals {
            self.property(prop, Some("static "), MemberPosition::Body);
            self.out.write_line(";");
        }
        self.out.dedent();
        self.out.write("}");
        self.out.newline();
        self.out.newline();
    }

    /// Writes the package line once per namespace level
    fn package_header(&mut self, written: &mut bool) {
        if *written || !self.options.emit_packages || self.namespaces.is_empty() {
            return;
        }
        *written = true;
        let path: Vec<String> = self.namespaces.iter().map(|s| escape_package(s)).collect();
        self.out.write_line(&format!("package {};", path.join(".")));
        self.out.newline();
    }

    fn native(&mut self, name: &str) {
        self.out.write_line(&format!("@:native(\"{}\")", name));
    }

    fn declaration(&mut self, decl: &Declaration) {
        debug!(declaration = %decl.name, kind = ?decl.kind, "hxweld.render_declaration");

        if !self.namespaces.is_empty() {
            let path = format!("{}.{}", self.namespaces.join("."), decl.name);
            self.native(&path);
        }

        match decl.kind {
            DeclarationKind::Class => self.class(decl),
            DeclarationKind::Enum => {
                self.out.write("@:fakeEnum(Int) extern enum ");
                self.ident(&decl.name);
                self.out.write_line(" {");
                self.out.indent();
                for value in &decl.values {
                    self.out.write_line(&format!("{};", value));
                }
                self.out.dedent();
                self.out.write("}");
            }
            DeclarationKind::Structural => {
                self.out.write("typedef ");
                self.ident(&decl.name);
                self.out.write(" = ");
                self.anonymous_type(&decl.members);
            }
        }
    }

    fn class(&mut self, decl: &Declaration) {
        self.out.write("extern class ");
        self.ident(&decl.name);
        if let Some(ref supertype) = decl.extends {
            self.out.write(" extends ");
            self.ident(supertype);
        }

        // Haxe externs cannot implement TS interfaces structurally
        if !decl.implements.is_empty() {
            self.out.newline();
            self.out.indent();
            for (i, iface) in decl.implements.iter().enumerate() {
                if i > 0 {
                    self.out.newline();
                }
                self.out.write("// implements ");
                self.ident(iface);
            }
            self.out.dedent();
        }

        self.out.newline();
        self.out.write_line("{");
        self.out.indent();
        for prop in &decl.members {
            self.property(prop, None, MemberPosition::Body);
            self.out.write_line(";");
        }
        self.out.dedent();
        self.out.write("}");
    }

    fn property(&mut self, prop: &Property, modifiers: Option<&str>, position: MemberPosition) {
        if prop.constructor {
            self.out.write("function new ");
            self.params(prop.parameters());
            self.out.write(" :Void");
            return;
        }

        if prop.name.is_empty() {
            warn!("hxweld.unsupported_member");
            self.out.write("// UNSUPPORTED: ");
        }

        if is_keyword(&prop.name) {
            self.native(&prop.name);
        }
        if let Some(modifiers) = modifiers {
            self.out.write(modifiers);
        }
        if prop.is_static {
            self.out.write("static ");
        }

        match (&prop.params, position) {
            (Some(params), MemberPosition::Structural) => {
                self.ident(&prop.name);
                self.out.write(" :");
                self.function_type(params, prop.ty.as_ref());
                return;
            }
            (Some(params), MemberPosition::Body) => {
                self.out.write("function ");
                self.ident(&prop.name);
                self.out.write(" ");
                self.params(params);
            }
            (None, MemberPosition::Body) => {
                self.out.write("var ");
                self.ident(&prop.name);
            }
            (None, MemberPosition::Structural) => self.ident(&prop.name),
        }

        self.out.write(" :");
        if prop.name == "new" {
            self.out.write("Void");
        } else if prop.optional {
            self.out.write("Null<");
            self.type_ref(prop.ty.as_ref(), false);
            self.out.write(">");
        } else {
            self.type_ref(prop.ty.as_ref(), false);
        }
    }

    fn params(&mut self, params: &[Parameter]) {
        self.out.write("(");
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.out.write(", ");
            }
            self.param(param);
        }
        self.out.write(")");
    }

    fn param(&mut self, param: &Parameter) {
        if param.varargs {
            for n in 1..=self.options.varargs_arity {
                if n > 1 {
                    self.out.write(", ");
                }
                self.out.write("?");
                self.ident(&format!("{}{}", param.name, n));
                self.out.write(" :");
                self.type_ref(param.ty.as_ref(), true);
            }
            return;
        }

        if param.optional {
            self.out.write("?");
        }
        self.ident(&param.name);
        self.out.write(" :");
        self.type_ref(param.ty.as_ref(), false);
    }

    fn ident(&mut self, ident: &str) {
        self.out.write(&escape_ident(ident));
    }

    fn type_ref(&mut self, ty: Option<&TypeRef>, skip_array_level: bool) {
        let Some(ty) = ty else {
            self.out.write("Dynamic");
            return;
        };

        let depth = ty.effective_array_depth(skip_array_level);
        for _ in 0..depth {
            self.out.write("Array<");
        }

        match &ty.kind {
            TypeKind::Function { params, returns } => self.function_type(params, returns.as_deref()),
            TypeKind::Named { name } => self.out.write(&haxe_type_name(name)),
            TypeKind::Structural { members } => self.anonymous_type(members),
        }

        for _ in 0..depth {
            self.out.write(">");
        }
    }

    fn function_type(&mut self, params: &[Parameter], returns: Option<&TypeRef>) {
        self.out.write("(");
        if params.is_empty() {
            self.out.write("Void");
        } else {
            for (i, param) in params.iter().enumerate() {
                if i > 0 {
                    self.out.write(" -> ");
                }
                if param.optional {
                    self.out.write("?");
                }
                self.type_ref(param.ty.as_ref(), false);
            }
        }
        self.out.write(" -> ");
        self.type_ref(returns, false);
        self.out.write(")");
    }

    fn anonymous_type(&mut self, members: &[Property]) {
        match members {
            [call] if call.invoke => self.function_type(call.parameters(), call.ty.as_ref()),
            [index] if index.dictionary => {
                self.out.write("Dynamic<");
                self.type_ref(index.ty.as_ref(), false);
                self.out.write(">");
            }
            _ => {
                self.out.indent();
                self.out.write_line("{");
                for prop in members.iter().filter(|p| !p.is_signature()) {
                    self.property(prop, None, MemberPosition::Structural);
                    self.out.write_line(",");
                }
                self.out.dedent();
                self.out.write("}");
            }
        }
    }
}
