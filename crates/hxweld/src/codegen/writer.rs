//! Indentation-aware text accumulator
//!
//! Indentation is inserted lazily: the first write after a line break is
//! prefixed with the current indent, so nesting can change between
//! writes on the same line without affecting it. The first line of the
//! buffer is never indented.

/// Output buffer for generated Haxe source
#[derive(Debug)]
pub struct HaxeWriter<'a> {
    output: String,
    indent_unit: &'a str,
    depth: usize,
    at_line_start: bool,
}

impl<'a> HaxeWriter<'a> {
    /// Create an empty writer using `indent_unit` per nesting level
    pub fn new(indent_unit: &'a str) -> Self {
        Self {
            output: String::new(),
            indent_unit,
            depth: 0,
            at_line_start: false,
        }
    }

    /// Append text, indenting first if at the start of a line
    pub fn write(&mut self, text: &str) {
        if self.at_line_start {
            for _ in 0..self.depth {
                self.output.push_str(self.indent_unit);
            }
            self.at_line_start = false;
        }
        self.output.push_str(text);
    }

    /// Append text followed by a line break
    pub fn write_line(&mut self, text: &str) {
        if !text.is_empty() {
            self.write(text);
        }
        self.newline();
    }

    /// Append a line break
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Increase nesting by one level
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decrease nesting by one level
    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Current nesting level
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Consume the writer, returning the accumulated text
    pub fn finish(self) -> String {
        self.output
    }
}
