//! Indentation-aware text sink for generated code

use std::ops::{Deref, DerefMut};

/// Accumulates generated lines and tracks the current nesting depth.
///
/// Depth only changes through [`CodeWriter::indent`] / [`CodeWriter::dedent`] or the
/// [`Scope`] guards handed out by [`CodeWriter::scope`].
#[derive(Debug, Clone)]
pub struct CodeWriter {
    buf: String,
    depth: usize,
    unit: String,
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::with_indent_width(2)
    }

    pub fn with_indent_width(width: usize) -> Self {
        Self {
            buf: String::new(),
            depth: 0,
            unit: " ".repeat(width),
        }
    }

    /// Append one line at the current depth. Embedded newlines produce several
    /// lines, each indented.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.blank();
            return;
        }
        for line in text.lines() {
            if line.trim().is_empty() {
                self.blank();
                continue;
            }
            for _ in 0..self.depth {
                self.buf.push_str(&self.unit);
            }
            self.buf.push_str(line);
            self.buf.push('\n');
        }
    }

    /// Append an empty line (never indented)
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Write `open`, indent, and return a guard that dedents and writes `close`
    /// when dropped.
    pub fn scope(&mut self, open: impl AsRef<str>, close: impl Into<String>) -> Scope<'_> {
        self.line(open);
        self.indent();
        Scope {
            writer: self,
            close: close.into(),
        }
    }

    /// `class <name> {` ... `};`
    pub fn class_scope(&mut self, name: &str) -> Scope<'_> {
        self.scope(format!("class {} {{", name), "};")
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// An open class or function body. Closing happens on drop.
#[derive(Debug)]
pub struct Scope<'w> {
    writer: &'w mut CodeWriter,
    close: String,
}

impl Scope<'_> {
    /// Close the body now
    pub fn close(self) {}
}

impl Deref for Scope<'_> {
    type Target = CodeWriter;

    fn deref(&self) -> &CodeWriter {
        self.writer
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut CodeWriter {
        self.writer
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        let close = std::mem::take(&mut self.close);
        self.writer.dedent();
        self.writer.line(close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_scopes_restore_depth() {
        let mut w = CodeWriter::new();
        {
            let mut class = w.class_scope("Motor");
            class.line("public:");
            {
                let mut body = class.scope("bool Motor::writeOutput(const int speed) {", "}");
                body.line("return true;");
                assert_eq!(body.depth(), 2);
            }
            assert_eq!(class.depth(), 1);
        }
        assert_eq!(w.depth(), 0);
        assert_eq!(
            w.finish(),
            "class Motor {\n  public:\n  bool Motor::writeOutput(const int speed) {\n    return true;\n  }\n};\n"
        );
    }

    #[test]
    fn test_explicit_close() {
        let mut w = CodeWriter::with_indent_width(4);
        let mut body = w.scope("void f() {", "}");
        body.line("x();");
        body.close();
        w.line("y();");
        assert_eq!(w.as_str(), "void f() {\n    x();\n}\ny();\n");
    }

    #[test]
    fn test_multiline_and_blank_lines() {
        let mut w = CodeWriter::new();
        w.indent();
        w.line("// first\n\n// second");
        w.blank();
        w.line("");
        assert_eq!(w.as_str(), "  // first\n\n  // second\n\n\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut w = CodeWriter::new();
        w.dedent();
        assert_eq!(w.depth(), 0);
        w.line("x");
        assert_eq!(w.as_str(), "x\n");
    }
}
