// ============================================================================
// CodeWriter: indentation-aware line printer
// ============================================================================

/// Accumulates generated source text line by line.
///
/// Each artifact gets its own writer; nothing is shared between them.
/// The writer does not look at what it prints.
#[derive(Debug, Clone)]
pub struct CodeWriter {
    out: String,
    level: usize,
    indent_unit: String,
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::with_indent_unit("    ")
    }

    pub fn with_indent_unit(unit: &str) -> Self {
        Self {
            out: String::new(),
            level: 0,
            indent_unit: unit.to_string(),
        }
    }

    /// Print the concatenation of `parts` at the current indentation.
    pub fn print_line<I, S>(&mut self, parts: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for _ in 0..self.level {
            self.out.push_str(&self.indent_unit);
        }
        for part in parts {
            self.out.push_str(part.as_ref());
        }
        self.out.push('\n');
    }

    /// Print a single piece of text at the current indentation.
    pub fn line(&mut self, text: &str) {
        self.print_line([text]);
    }

    /// Empty line, never indented.
    pub fn blank_line(&mut self) {
        self.out.push('\n');
    }

    pub fn indent(&mut self) {
        self.level += 1;
    }

    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Print `header`, then a braced body one level deeper.
    pub fn block<F>(&mut self, header: &str, body: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(header);
        self.line("{");
        self.indent();
        body(self);
        self.dedent();
        self.line("}");
    }

    pub fn render(&self) -> String {
        self.out.clone()
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
