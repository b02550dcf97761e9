//! Test utilities and mock collaborators for Arx runtime development.
//!
//! Provides in-memory implementations of the collaborator traits
//! ([`LineSource`], [`Printer`]) and a few list fixtures for building test
//! scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::VecDeque;

use arx_core::{LineSource, Primitive, Printer};

/// Mock implementation of [`LineSource`].
///
/// Serves pre-loaded lines in order, then reports end of input. Every
/// prompt it was asked to show is recorded for later assertions.
pub struct ScriptedLineSource {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedLineSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order. Empty prompts are not recorded.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedLineSource {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        if !prompt.is_empty() {
            self.prompts.push(prompt.to_owned());
        }
        self.lines.pop_front()
    }
}

/// Mock implementation of [`Printer`].
///
/// Renders every value with its `Display` form and keeps both the rendered
/// text and a count of printed values.
#[derive(Default)]
pub struct RecordingPrinter {
    output: String,
    count: usize,
}

impl RecordingPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything printed so far, concatenated.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of values printed.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Printer for RecordingPrinter {
    fn print(&mut self, value: Primitive<'_>) {
        use std::fmt::Write;
        // Writing to a String cannot fail.
        let _ = write!(self.output, "{value}");
        self.count += 1;
    }
}
