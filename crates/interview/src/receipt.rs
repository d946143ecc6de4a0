//! Receipts: the formatted outcome of running one solution over every case.

use std::fmt;
use std::io::Write;

use crate::render::{LineGroup, render_receipt, render_receipt_collection};

/// Formatted texts of one case run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub input: String,
    /// Second input, for two-input harnesses.
    pub input2: Option<String>,
    pub actual: String,
    pub expected: String,
}

impl ReceiptLine {
    pub fn new(input: impl Into<String>, actual: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            input2: None,
            actual: actual.into(),
            expected: expected.into(),
        }
    }

    pub fn with_second_input(mut self, input2: impl Into<String>) -> Self {
        self.input2 = Some(input2.into());
        self
    }

    /// True when the actual text equals the expected text.
    pub fn is_match(&self) -> bool {
        self.actual == self.expected
    }

    pub fn group(&self) -> LineGroup<'_> {
        LineGroup::new(&self.input, self.input2.as_deref(), &self.actual, &self.expected)
    }

    /// Appends the aligned line to `out`. Returns true when it spans more
    /// than one row.
    pub fn write_to(&self, out: &mut String) -> bool {
        self.group().write_to(out)
    }
}

impl fmt::Display for ReceiptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_to(&mut out);
        f.write_str(&out)
    }
}

/// Every line produced by one solution, in case registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub name: String,
    pub lines: Vec<ReceiptLine>,
}

impl Receipt {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: ReceiptLine) {
        self.lines.push(line);
    }

    /// Number of lines whose actual output matched.
    pub fn passed(&self) -> usize {
        self.lines.iter().filter(|l| l.is_match()).count()
    }

    pub fn all_passed(&self) -> bool {
        self.lines.iter().all(ReceiptLine::is_match)
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = self.lines.iter().map(ToString::to_string).collect();
        f.write_str(&render_receipt(&self.name, &groups))
    }
}

/// Receipts of several solutions, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReceiptCollection {
    receipts: Vec<Receipt>,
}

impl ReceiptCollection {
    pub fn new(mut receipts: Vec<Receipt>) -> Self {
        receipts.sort_by(|a, b| a.name.cmp(&b.name));
        Self { receipts }
    }

    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    pub fn get(&self, name: &str) -> Option<&Receipt> {
        self.receipts.iter().find(|r| r.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.receipts.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Receipt> {
        self.receipts.iter()
    }

    /// Writes the rendered collection followed by a newline.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{self}")
    }
}

impl fmt::Display for ReceiptCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.receipts.iter().map(|r| (r.name.as_str(), r.to_string()));
        f.write_str(&render_receipt_collection(rendered, false))
    }
}

impl<'a> IntoIterator for &'a ReceiptCollection {
    type Item = &'a Receipt;
    type IntoIter = std::slice::Iter<'a, Receipt>;

    fn into_iter(self) -> Self::IntoIter {
        self.receipts.iter()
    }
}
