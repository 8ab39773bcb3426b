//! Output writer with indentation tracking
//!
//! Text backends build their output through [`SourceWriter`] so indentation is driven by structure, not by
//! literal whitespace in format strings.

/// Writer that tracks indentation and builds source text
pub struct SourceWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Spaces per indentation level
    indent_width: usize,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl SourceWriter {
    /// Create a new writer with the given indentation width
    pub fn new(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_width,
            at_line_start: true,
        }
    }

    /// Get the written source
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write indentation if at line start
    fn write_indent(&mut self) {
        if self.at_line_start {
            self.output.push_str(&" ".repeat(self.indent_level * self.indent_width));
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write multiple blank lines (for spacing between members)
    pub fn blank_lines(&mut self, count: usize) {
        for _ in 0..count {
            self.newline();
        }
    }

    /// Write `open`, then run `body` one level deeper, then write `close`.
    pub fn block(&mut self, open: &str, close: &str, body: impl FnOnce(&mut Self)) {
        self.writeln(open);
        self.indent();
        body(self);
        self.dedent();
        self.writeln(close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer() -> SourceWriter {
        SourceWriter::new(4)
    }

    #[test]
    fn test_new_writer_empty_output() {
        assert_eq!(writer().finish(), "");
    }

    #[test]
    fn test_write_empty_string() {
        let mut w = writer();
        w.indent();
        w.write("");
        assert_eq!(w.finish(), "");
    }

    #[test]
    fn test_writeln_multiple() {
        let mut w = writer();
        w.writeln("<?php");
        w.writeln("");
        assert_eq!(w.finish(), "<?php\n\n");
    }

    #[test]
    fn test_dedent_at_zero_stays_zero() {
        let mut w = writer();
        w.dedent();
        w.indent();
        w.writeln("x");
        assert_eq!(w.finish(), "    x\n");
    }

    #[test]
    fn test_indent_width_2() {
        let mut w = SourceWriter::new(2);
        w.indent();
        w.writeln("x");
        assert_eq!(w.finish(), "  x\n");
    }

    #[test]
    fn test_blank_lines_do_not_indent() {
        let mut w = writer();
        w.indent();
        w.writeln("a");
        w.blank_lines(1);
        w.writeln("b");
        assert_eq!(w.finish(), "    a\n\n    b\n");
    }

    #[test]
    fn test_nested_blocks() {
        let mut w = writer();
        w.writeln("class A");
        w.block("{", "}", |w| {
            w.writeln("public function f()");
            w.block("{", "}", |w| w.writeln("return 1;"));
        });
        assert_eq!(
            w.finish(),
            "class A\n{\n    public function f()\n    {\n        return 1;\n    }\n}\n"
        );
    }
}
