//! Collaborator contracts for program input and output.
//!
//! The runtime never touches stdin or stdout itself. A host (CLI, test
//! harness, embedding interpreter) implements these traits and hands them
//! to compiled code.

use crate::value::{parse_leading_int, Primitive};

/// Supplies lines of text on request.
///
/// Implementations return the line with its terminator removed and escape
/// sequences already decoded. Each call returns a freshly owned `String`.
pub trait LineSource {
    /// Display `prompt` (if non-empty) and read one line.
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Read one line and parse its leading integer.
    ///
    /// End of input, an empty line, or a line without leading digits all
    /// yield `0`.
    fn read_int(&mut self, prompt: &str) -> i64 {
        self.read_line(prompt)
            .map_or(0, |line| parse_leading_int(&line))
    }
}

/// Accepts primitive values for unidirectional output.
pub trait Printer {
    /// Emit a single value. No separator or newline is added.
    fn print(&mut self, value: Primitive<'_>);
}
