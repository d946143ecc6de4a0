//! Registered test cases and structural reports.

use std::cell::OnceCell;
use std::fmt;

use crate::diff::Mismatch;
use crate::format::{FormatOptions, format};
use crate::shape::Shape;

/// One registered case: private copies of its inputs and expected output.
///
/// Formatted texts are computed on first use and kept until the formatting
/// options change.
pub struct TestCase<I, I2, O> {
    input: I,
    input2: I2,
    expected: O,
    input_text: OnceCell<String>,
    input2_text: OnceCell<String>,
    expected_text: OnceCell<String>,
}

impl<I: Shape, I2: Shape, O: Shape> TestCase<I, I2, O> {
    /// Deep-copies the given values, so the case never shares storage with
    /// the caller.
    pub fn new(input: &I, input2: &I2, expected: &O) -> Self {
        Self {
            input: input.deep_copy(),
            input2: input2.deep_copy(),
            expected: expected.deep_copy(),
            input_text: OnceCell::new(),
            input2_text: OnceCell::new(),
            expected_text: OnceCell::new(),
        }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input2(&self) -> &I2 {
        &self.input2
    }

    pub fn expected(&self) -> &O {
        &self.expected
    }

    /// A fresh copy of the input for a solution to consume or mutate.
    pub fn scratch_input(&self) -> I {
        self.input.deep_copy()
    }

    pub fn scratch_input2(&self) -> I2 {
        self.input2.deep_copy()
    }

    pub fn input_text(&self, options: &FormatOptions) -> &str {
        self.input_text.get_or_init(|| format(&self.input, options))
    }

    pub fn input2_text(&self, options: &FormatOptions) -> &str {
        self.input2_text.get_or_init(|| format(&self.input2, options))
    }

    pub fn expected_text(&self, options: &FormatOptions) -> &str {
        self.expected_text.get_or_init(|| format(&self.expected, options))
    }

    /// Drops cached texts so the next read uses new options.
    pub fn clear_text(&mut self) {
        self.input_text.take();
        self.input2_text.take();
        self.expected_text.take();
    }
}

impl<I, I2, O> fmt::Debug for TestCase<I, I2, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("input_text", &self.input_text.get())
            .field("input2_text", &self.input2_text.get())
            .field("expected_text", &self.expected_text.get())
            .finish_non_exhaustive()
    }
}

/// Structural result of one case for one solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub function_name: String,
    pub input: String,
    pub expected: String,
    pub mismatches: Vec<Mismatch>,
}

impl Report {
    pub fn new(function_name: impl Into<String>, input: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            input: input.into(),
            expected: expected.into(),
            mismatches: Vec::new(),
        }
    }

    pub fn add_mismatch(&mut self, mismatch: Mismatch) {
        self.mismatches.push(mismatch);
    }

    pub fn is_ok(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mismatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Mismatch> {
        self.mismatches.get(index)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}({}) -> {}", self.function_name, self.input, self.expected)?;
        if self.is_ok() {
            return f.write_str("OK!");
        }
        for (i, mismatch) in self.mismatches.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{mismatch}")?;
        }
        Ok(())
    }
}
