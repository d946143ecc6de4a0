//! Line-aligned receipt rendering.
//!
//! A receipt line joins up to four multi-line text blocks side by side:
//!
//! ```text
//! (  ) [1 2], [5 6] -> [5 12]  != [5 12]
//!      [3 4]  [7 8]    [21 32]    [21 33]
//! ```
//!
//! Each block is padded to its widest line and centered vertically against
//! the tallest block. Separator glyphs appear only on the center row; other
//! rows get blanks of the same width so the columns stay aligned.

/// Marker for a line whose actual output equals the expected one.
pub const OK_MARKER: &str = "(OK) ";
/// Marker for a failing line.
pub const FAIL_MARKER: &str = "(  ) ";
/// Written when a receipt has no lines.
pub const NO_CASES: &str = "(no cases registered)";
/// Written when a collection has no receipts.
pub const NO_SOLUTIONS: &str = "(no solutions registered)";

const CONTINUATION: &str = "     ";
const INPUT_SEPARATOR: &str = ", ";
const ARROW: &str = " -> ";
const NOT_EQUAL: &str = " != ";

/// One text block of a receipt line.
#[derive(Debug, Clone)]
pub struct Column<'a> {
    lines: Vec<&'a str>,
    width: usize,
    start_at: usize,
}

impl<'a> Column<'a> {
    /// Splits `text` on newlines. Empty text is one empty line.
    pub fn new(text: &'a str) -> Self {
        let lines: Vec<&str> = text.split('\n').collect();
        let width = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
        Self {
            lines,
            width,
            start_at: 0,
        }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn align(&mut self, max_height: usize) {
        self.start_at = max_height.saturating_sub(self.height()) / 2;
    }

    /// Text shown on `row`, empty above and below the block.
    fn segment(&self, row: usize) -> &'a str {
        row.checked_sub(self.start_at)
            .and_then(|r| self.lines.get(r))
            .copied()
            .unwrap_or("")
    }

    /// Rows above the block are always filled to the column width. Content
    /// rows are right-padded unless the column is `last`.
    fn write_row(&self, out: &mut String, row: usize, last: bool) {
        if row < self.start_at {
            out.extend(std::iter::repeat_n(' ', self.width));
            return;
        }
        let content = self.segment(row);
        out.push_str(content);
        if !last {
            let padding = self.width.saturating_sub(visible_width(content));
            for _ in 0..padding {
                out.push(' ');
            }
        }
    }
}

/// The aligned blocks of one receipt line.
#[derive(Debug, Clone)]
pub struct LineGroup<'a> {
    input: Column<'a>,
    input2: Option<Column<'a>>,
    actual: Column<'a>,
    expected: Column<'a>,
    ok: bool,
    max_height: usize,
}

impl<'a> LineGroup<'a> {
    /// Builds a group. The line is OK when `actual` and `expected` are the
    /// same text.
    pub fn new(input: &'a str, input2: Option<&'a str>, actual: &'a str, expected: &'a str) -> Self {
        let mut input = Column::new(input);
        let mut input2 = input2.map(Column::new);
        let mut actual_col = Column::new(actual);
        let mut expected_col = Column::new(expected);

        let max_height = [
            input.height(),
            input2.as_ref().map_or(0, Column::height),
            actual_col.height(),
            expected_col.height(),
        ]
        .into_iter()
        .max()
        .unwrap_or(1);

        input.align(max_height);
        if let Some(col) = input2.as_mut() {
            col.align(max_height);
        }
        actual_col.align(max_height);
        expected_col.align(max_height);

        Self {
            input,
            input2,
            actual: actual_col,
            expected: expected_col,
            ok: actual == expected,
            max_height,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Number of output rows.
    pub fn height(&self) -> usize {
        self.max_height
    }

    /// Row that carries the separator glyphs. Even heights use the upper
    /// of the two middle rows.
    pub fn center_row(&self) -> usize {
        let h = self.max_height;
        (h - (1 - h % 2)) / 2
    }

    /// Appends the rendered group to `out`. Returns true when it spans more
    /// than one row.
    pub fn write_to(&self, out: &mut String) -> bool {
        out.push_str(if self.ok { OK_MARKER } else { FAIL_MARKER });
        let center = self.center_row();

        for row in 0..self.max_height {
            if row > 0 {
                out.push('\n');
                out.push_str(CONTINUATION);
            }
            let glyph = |g: &'static str| if row == center { g } else { blank(g) };

            self.input.write_row(out, row, false);
            if let Some(input2) = &self.input2 {
                out.push_str(glyph(INPUT_SEPARATOR));
                input2.write_row(out, row, false);
            }
            out.push_str(glyph(ARROW));
            self.actual.write_row(out, row, self.ok);
            if !self.ok {
                out.push_str(glyph(NOT_EQUAL));
                self.expected.write_row(out, row, true);
            }
        }

        self.max_height > 1
    }
}

fn blank(glyph: &'static str) -> &'static str {
    match glyph.len() {
        2 => "  ",
        _ => "    ",
    }
}

/// Renders a single receipt line.
pub fn render_line_group(input: &str, input2: Option<&str>, actual: &str, expected: &str) -> String {
    let mut out = String::new();
    LineGroup::new(input, input2, actual, expected).write_to(&mut out);
    out
}

/// Renders a receipt: the name, an `=` underline with one `=` per character
/// of the name, then the groups.
///
/// Groups are separated by a newline, or by a blank line when either
/// neighbor spans several rows.
pub fn render_receipt<S: AsRef<str>>(name: &str, groups: &[S]) -> String {
    let mut out = String::new();
    out.push_str(name);
    out.push('\n');
    out.push_str(&"=".repeat(name.chars().count()));

    if groups.is_empty() {
        out.push('\n');
        out.push_str(NO_CASES);
        return out;
    }

    let mut previous_multi = false;
    for (i, group) in groups.iter().enumerate() {
        let group = group.as_ref();
        let multi = group.contains('\n');
        out.push('\n');
        if i > 0 && (previous_multi || multi) {
            out.push('\n');
        }
        out.push_str(group);
        previous_multi = multi;
    }
    out
}

/// Joins rendered receipts with blank lines, optionally ordered by name.
pub fn render_receipt_collection<I, N, R>(receipts: I, sort_by_name: bool) -> String
where
    I: IntoIterator<Item = (N, R)>,
    N: AsRef<str>,
    R: AsRef<str>,
{
    let mut receipts: Vec<(N, R)> = receipts.into_iter().collect();
    if receipts.is_empty() {
        return NO_SOLUTIONS.to_string();
    }
    if sort_by_name {
        receipts.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));
    }
    receipts
        .iter()
        .map(|(_, text)| text.as_ref())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Display width of `s`, ignoring ANSI escape sequences.
pub fn visible_width(s: &str) -> usize {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Normal,
        Esc,
        Csi,
        Osc,
    }

    let mut width = 0;
    let mut state = State::Normal;
    for c in s.chars() {
        match state {
            State::Normal => {
                if c == '\x1b' {
                    state = State::Esc;
                } else {
                    width += unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
                }
            }
            State::Esc => {
                state = match c {
                    '[' => State::Csi,
                    ']' => State::Osc,
                    _ => State::Normal,
                };
            }
            State::Csi => {
                if ('@'..='~').contains(&c) {
                    state = State::Normal;
                }
            }
            State::Osc => {
                if c == '\x07' {
                    state = State::Normal;
                } else if c == '\x1b' {
                    state = State::Esc;
                }
            }
        }
    }
    width
}
