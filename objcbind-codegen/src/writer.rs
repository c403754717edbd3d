//! Line-oriented source writers.
//!
//! Emitted source is kept as a sequence of finished lines. Indentation is
//! applied when a line is written, so callers never format leading
//! whitespace by hand.

/// Append-only source buffer with indentation tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceWriter {
    lines: Vec<String>,
    indent_level: usize,
    indent_unit: String,
}

impl SourceWriter {
    /// Creates an empty writer using `indent_unit` per indentation level.
    #[must_use]
    pub fn new(indent_unit: impl Into<String>) -> Self {
        Self {
            lines: Vec::new(),
            indent_level: 0,
            indent_unit: indent_unit.into(),
        }
    }

    /// Writes one line at the current indentation.
    pub fn write_line(&mut self, text: &str) {
        let mut line = self.indent_unit.repeat(self.indent_level);
        line.push_str(text);
        self.lines.push(line);
    }

    /// Writes an empty line.
    pub fn blank_line(&mut self) {
        self.lines.push(String::new());
    }

    /// Increases indentation by one level.
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decreases indentation by one level.
    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Current indentation level.
    #[must_use]
    pub const fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Lines written so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Moves every line of `other` onto the end of this writer.
    ///
    /// Lines keep the indentation they were written with.
    pub fn append(&mut self, other: Self) {
        self.lines.extend(other.lines);
    }

    /// Joins the lines into source text, each terminated by `\n`.
    #[must_use]
    pub fn to_source(&self) -> String {
        let mut source = String::new();
        for line in &self.lines {
            source.push_str(line);
            source.push('\n');
        }
        source
    }
}

/// The declaration (header) and definition (implementation) streams of one
/// generation pass.
///
/// Streams are borrowed mutably by one property at a time; the order lines
/// are appended in is the order they appear in the emitted files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputStreams {
    /// Header declarations.
    pub declarations: SourceWriter,
    /// Implementation definitions.
    pub definitions: SourceWriter,
}

impl OutputStreams {
    /// Creates an empty stream pair.
    #[must_use]
    pub fn new(indent_unit: &str) -> Self {
        Self {
            declarations: SourceWriter::new(indent_unit),
            definitions: SourceWriter::new(indent_unit),
        }
    }

    /// Returns true if neither stream has any lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.definitions.is_empty()
    }

    /// Appends a staged stream pair onto this one.
    pub fn commit(&mut self, staged: Self) {
        self.declarations.append(staged.declarations);
        self.definitions.append(staged.definitions);
    }
}
