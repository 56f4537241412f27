//! Output writer with indentation tracking

/// Writer that tracks indentation and builds line-oriented output
pub struct RenderWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Spaces per indentation level
    indent_width: usize,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl RenderWriter {
    /// Create a new writer indenting by `indent_width` spaces per level
    pub fn new(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_width,
            at_line_start: true,
        }
    }

    /// Get the output
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
            let indent = " ".repeat(self.indent_level * self.indent_width);
            self.output.push_str(&indent);
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_writer_empty_output() {
        assert_eq!(RenderWriter::new(2).finish(), "");
    }

    #[test]
    fn test_write_empty_string() {
        let mut writer = RenderWriter::new(2);
        writer.write("");
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_indent_applies_at_line_start_only() {
        let mut writer = RenderWriter::new(3);
        writer.writeln("set");
        writer.indent();
        writer.write("A");
        writer.write("B");
        writer.newline();
        writer.dedent();
        writer.writeln("C");
        assert_eq!(writer.finish(), "set\n   AB\nC\n");
    }

    #[test]
    fn test_dedent_saturates_at_zero() {
        let mut writer = RenderWriter::new(2);
        writer.dedent();
        writer.writeln("x");
        assert_eq!(writer.finish(), "x\n");
    }
}
