//! Textual printer
//!
//! One printing channel serves every renderable value: modules print their
//! canonical text form, error types print their diagnostic. Anything that
//! can appear in an output pane implements [`Printable`].

use crate::ir::Module;

const INDENT: &str = "  ";

/// A value that can be rendered by the [`Printer`]
pub trait Printable {
    /// Write this value into the printer
    fn print(&self, printer: &mut Printer);
}

/// Text printer with indentation tracking
#[derive(Debug, Default)]
pub struct Printer {
    output: String,
    indent: usize,
}

impl Printer {
    /// Create a new printer
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a value and return the produced text
    pub fn print(mut self, value: &dyn Printable) -> String {
        value.print(&mut self);
        self.output
    }

    /// Increase the indentation level for subsequent lines
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease the indentation level
    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write raw text without indentation or newline
    pub fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Write an indented line terminated by a newline
    pub fn write_line(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.output.push_str(INDENT);
        }
        self.output.push_str(line);
        self.output.push('\n');
    }
}

impl Printable for Module {
    fn print(&self, printer: &mut Printer) {
        printer.write_line("module {");
        printer.indent();
        for op in &self.operations {
            printer.write_line(&op.to_string());
        }
        printer.dedent();
        printer.write_line("}");
    }
}
