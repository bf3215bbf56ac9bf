//! Ceylon writer.
//!
//! One depth-first pass over a [`CompilationUnit`]. Declarations drive
//! statements, statements drive expressions; every rewrite decides from the
//! node at hand plus the [`TranslationContext`] stack, and text goes straight
//! to the [`Sink`] without ever being revisited.
//!
//! The translators are split by node family:
//!
//! - `decl` - types, members, enum desugaring
//! - `stmt` - statements and loop/switch desugaring
//! - `expr` - expressions and the context-sensitive rewrites

mod decl;
mod expr;
mod stmt;

use crate::ast::CompilationUnit;
use crate::config::Config;
use crate::error::Result;
use crate::imports::ImportTable;
use crate::output::context::TranslationContext;
use crate::output::sink::Sink;
use std::io::Write;
use tracing::debug;

/// Writes one compilation unit as Ceylon source.
///
/// A writer is single-use per unit: it owns the sink and the traversal
/// stack, and nothing in it outlives the run. Configuration is passed to
/// every call rather than stored.
pub struct CeylonWriter<'a, W: Write> {
    sink: Sink<W>,
    ctx: TranslationContext<'a>,
}

impl<'a, W: Write> CeylonWriter<'a, W> {
    pub fn new(out: W) -> Self {
        Self {
            sink: Sink::new(out),
            ctx: TranslationContext::new(),
        }
    }

    /// Write imports followed by every type declaration of `unit`.
    pub fn write_unit(&mut self, cfg: &Config, unit: &'a CompilationUnit) -> Result<()> {
        debug!(
            imports = unit.imports.len(),
            types = unit.types.len(),
            "translating compilation unit"
        );

        let imports = ImportTable::from_imports(&unit.imports);
        self.write_imports(&imports)?;

        for (i, decl) in unit.types.iter().enumerate() {
            if i > 0 {
                self.sink.newline()?;
            }
            self.write_type_decl(cfg, decl)?;
        }
        Ok(())
    }

    /// Flush and hand back the underlying target.
    pub fn finish(mut self) -> Result<W> {
        self.sink.flush()?;
        Ok(self.sink.into_inner())
    }

    fn write_imports(&mut self, imports: &ImportTable) -> Result<()> {
        if imports.is_empty() {
            return Ok(());
        }
        for (package, entry) in imports.iter() {
            self.sink.write("import ")?;
            self.sink.write(package)?;
            self.sink.write(" {")?;
            self.sink.newline()?;
            self.sink.indent();
            let members = entry.members();
            for (i, member) in members.iter().enumerate() {
                self.sink.write(member)?;
                if i + 1 < members.len() {
                    self.sink.write(",")?;
                }
                self.sink.newline()?;
            }
            self.sink.dedent();
            self.sink.write("}")?;
            self.sink.newline()?;
        }
        self.sink.newline()
    }

    /// Write `items` separated by `sep`.
    fn write_separated<T>(
        &mut self,
        items: &'a [T],
        sep: &str,
        mut each: impl FnMut(&mut Self, &'a T) -> Result<()>,
    ) -> Result<()> {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.sink.write(sep)?;
            }
            each(self, item)?;
        }
        Ok(())
    }
}
