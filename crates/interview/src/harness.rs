//! The interview harness: register cases and solutions, run, print receipts.
//!
//! [`Interview`] drives single-input solutions (`fn(I) -> O`) and
//! [`Interview2`] drives two-input solutions (`fn(I, I2) -> O`). Both wrap the
//! same harness, so formatting, running and printing behave identically.

use std::any::type_name;
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::case::{Report, TestCase};
use crate::copy::hidden_field;
use crate::data::{from_text, read_data};
use crate::diff::find_mismatches;
use crate::error::{InterviewError, Result};
use crate::format::{FormatOptions, format};
use crate::receipt::{Receipt, ReceiptCollection, ReceiptLine};
use crate::shape::{Kind, Shape, short_type_name};

/// Builds a `(name, fn)` pair for `add_solutions`, named after the function.
///
/// ```rust
/// use interview::{Interview, solution};
///
/// fn double(n: u32) -> u32 {
///     n * 2
/// }
///
/// let mut interview = Interview::<u32, u32>::new();
/// interview.add_solutions(&[solution!(double)]);
/// assert_eq!(interview.solution_names(), vec!["double"]);
/// ```
#[macro_export]
macro_rules! solution {
    ($f:path) => {
        ($crate::harness::solution_name(stringify!($f)), $f)
    };
}

/// Last segment of a stringified function path.
#[doc(hidden)]
pub fn solution_name(path: &'static str) -> &'static str {
    path.rsplit("::").next().map_or(path, str::trim)
}

enum Solution<I, I2, O> {
    Single(Box<dyn Fn(I) -> O>),
    Double(Box<dyn Fn(I, I2) -> O>),
}

impl<I: Shape, I2: Shape, O: Shape> Solution<I, I2, O> {
    /// Runs against fresh copies of the case inputs.
    fn call(&self, case: &TestCase<I, I2, O>) -> O {
        match self {
            Self::Single(f) => f(case.scratch_input()),
            Self::Double(f) => f(case.scratch_input(), case.scratch_input2()),
        }
    }
}

/// Resolves `[begin, end)` over equally long case lists.
fn case_range(
    inputs: usize,
    inputs2: Option<usize>,
    expected: usize,
    begin: usize,
    end: Option<usize>,
) -> Result<Range<usize>> {
    if inputs != expected || inputs2.is_some_and(|n| n != expected) {
        warn!(inputs, ?inputs2, expected, "case list lengths differ");
        return Err(InterviewError::LengthMismatch {
            inputs,
            inputs2,
            expected,
        });
    }
    let end = end.map_or(inputs, |end| end.min(inputs));
    Ok(begin.min(end)..end)
}

/// Boxed values are checked per value: each may hold a different type.
fn ensure_boxed_visible<T: Shape>(value: &T, role: &'static str) -> Result<()> {
    if T::KIND != Kind::Boxed {
        return Ok(());
    }
    match value.boxed_hidden_field() {
        Some(path) => {
            let type_name = value.type_name();
            warn!(role, type_name = %type_name, path = %path, "boxed case value has a hidden field");
            Err(InterviewError::HiddenField {
                role,
                type_name,
                path,
            })
        }
        None => Ok(()),
    }
}

fn ensure_visible<T: Shape>(role: &'static str) -> Result<()> {
    match hidden_field::<T>() {
        Some(path) => {
            let type_name = short_type_name(type_name::<T>());
            warn!(role, type_name = %type_name, path = %path, "case type has a hidden field");
            Err(InterviewError::HiddenField {
                role,
                type_name,
                path,
            })
        }
        None => Ok(()),
    }
}

struct Harness<I, I2, O> {
    cases: Vec<TestCase<I, I2, O>>,
    solutions: HashMap<String, Solution<I, I2, O>>,
    options: FormatOptions,
    data_dir: PathBuf,
    two_inputs: bool,
}

impl<I: Shape, I2: Shape, O: Shape> Harness<I, I2, O> {
    fn new(two_inputs: bool) -> Self {
        Self {
            cases: Vec::new(),
            solutions: HashMap::new(),
            options: FormatOptions::default(),
            data_dir: PathBuf::from("."),
            two_inputs,
        }
    }

    fn push_cases<'c>(&mut self, cases: impl IntoIterator<Item = (&'c I, &'c I2, &'c O)>) -> Result<()>
    where
        I: 'c,
        I2: 'c,
        O: 'c,
    {
        let cases: Vec<_> = cases.into_iter().collect();
        if self.cases.is_empty() && !cases.is_empty() {
            ensure_visible::<I>("input")?;
            if self.two_inputs {
                ensure_visible::<I2>("second input")?;
            }
            ensure_visible::<O>("expected output")?;
        }
        for &(input, input2, expected) in &cases {
            ensure_boxed_visible(input, "input")?;
            if self.two_inputs {
                ensure_boxed_visible(input2, "second input")?;
            }
            ensure_boxed_visible(expected, "expected output")?;
        }
        for (input, input2, expected) in cases {
            self.cases.push(TestCase::new(input, input2, expected));
        }
        debug!(cases = self.cases.len(), "registered cases");
        Ok(())
    }

    fn add_solution(&mut self, name: String, solution: Solution<I, I2, O>) {
        debug!(name = %name, "registered solution");
        if self.solutions.insert(name.clone(), solution).is_some() {
            warn!(name = %name, "replaced a solution with the same name");
        }
    }

    fn set_options(&mut self, options: FormatOptions) {
        debug!(?options, "format options changed");
        self.options = options;
        for case in &mut self.cases {
            case.clear_text();
        }
    }

    fn data_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.data_dir.join(relative)
    }

    fn solution(&self, name: &str) -> Result<&Solution<I, I2, O>> {
        self.solutions.get(name).ok_or_else(|| {
            warn!(name, "solution not found");
            InterviewError::SolutionNotFound {
                name: name.to_string(),
            }
        })
    }

    fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.solutions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn receipt(&self, name: &str, solution: &Solution<I, I2, O>) -> Receipt {
        let mut receipt = Receipt::new(name);
        for case in &self.cases {
            let actual = solution.call(case);
            let mut line = ReceiptLine::new(
                case.input_text(&self.options),
                format(&actual, &self.options),
                case.expected_text(&self.options),
            );
            if self.two_inputs {
                line = line.with_second_input(case.input2_text(&self.options));
            }
            receipt.push(line);
        }
        debug!(
            solution = name,
            passed = receipt.passed(),
            total = receipt.lines.len(),
            "ran solution"
        );
        receipt
    }

    fn run_solution(&self, name: &str) -> Result<Receipt> {
        let solution = self.solution(name)?;
        Ok(self.receipt(name, solution))
    }

    fn run_all_solutions(&self) -> ReceiptCollection {
        info!(
            solutions = self.solutions.len(),
            cases = self.cases.len(),
            "running all solutions"
        );
        let receipts = self
            .sorted_names()
            .into_iter()
            .filter_map(|name| self.solutions.get(name).map(|s| self.receipt(name, s)))
            .collect();
        ReceiptCollection::new(receipts)
    }

    fn check_solution(&self, name: &str) -> Result<Vec<Report>> {
        let solution = self.solution(name)?;
        let reports = self
            .cases
            .iter()
            .map(|case| {
                let actual = solution.call(case);
                let input = if self.two_inputs {
                    format!(
                        "{}, {}",
                        case.input_text(&self.options),
                        case.input2_text(&self.options)
                    )
                } else {
                    case.input_text(&self.options).to_string()
                };
                let mut report = Report::new(name, input, case.expected_text(&self.options));
                for mismatch in find_mismatches(&actual, case.expected()) {
                    report.add_mismatch(mismatch);
                }
                report
            })
            .collect();
        Ok(reports)
    }
}

// Methods with identical signatures on both front-ends.
macro_rules! harness_methods {
    () => {
        /// Renders bytes, `i32` and `char` sequences as text.
        pub fn show_bytes_as_text(&mut self) -> &mut Self {
            let options = self
                .harness
                .options
                .bytes_as_text(true)
                .codepoints_as_text(true);
            self.harness.set_options(options);
            self
        }

        /// Prefixes aggregate fields with their names.
        pub fn show_field_names(&mut self) -> &mut Self {
            let options = self.harness.options.show_field_names(true);
            self.harness.set_options(options);
            self
        }

        /// Renders nested sequences one row per line.
        pub fn show_matrix_rows(&mut self) -> &mut Self {
            let options = self.harness.options.matrix_rows(true);
            self.harness.set_options(options);
            self
        }

        /// Replaces the formatting options.
        pub fn with_options(&mut self, options: FormatOptions) -> &mut Self {
            self.harness.set_options(options);
            self
        }

        pub fn options(&self) -> &FormatOptions {
            &self.harness.options
        }

        /// Directory that `read_case*` paths are relative to.
        pub fn with_data_dir(&mut self, dir: impl Into<PathBuf>) -> &mut Self {
            self.harness.data_dir = dir.into();
            self
        }

        pub fn case_count(&self) -> usize {
            self.harness.cases.len()
        }

        /// Registered solution names, sorted.
        pub fn solution_names(&self) -> Vec<&str> {
            self.harness.sorted_names()
        }

        /// Runs one solution over every case.
        ///
        /// # Errors
        ///
        /// Returns [`InterviewError::SolutionNotFound`] for an unknown name.
        pub fn run_solution(&self, name: &str) -> Result<Receipt> {
            self.harness.run_solution(name)
        }

        /// Runs every solution, ordered by name.
        pub fn run_all_solutions(&self) -> ReceiptCollection {
            self.harness.run_all_solutions()
        }

        /// Compares one solution's outputs structurally, one report per case.
        pub fn check_solution(&self, name: &str) -> Result<Vec<Report>> {
            self.harness.check_solution(name)
        }

        pub fn all_solutions_to_string(&self) -> String {
            self.run_all_solutions().to_string()
        }

        pub fn write_all_solutions<W: Write>(&self, writer: &mut W) -> Result<()> {
            self.run_all_solutions().write_to(writer)?;
            Ok(())
        }

        /// Prints every receipt to stdout.
        pub fn print(&self) -> Result<()> {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            self.write_all_solutions(&mut lock)
        }
    };
}

/// Harness for solutions taking one input.
///
/// ```rust
/// use interview::Interview;
///
/// let mut interview = Interview::<u64, u64>::new();
/// interview
///     .add_cases(&[1, 2, 3], &[1, 4, 9])
///     .unwrap()
///     .add_solution("square", |n| n * n);
/// assert_eq!(
///     interview.all_solutions_to_string(),
///     "square\n======\n(OK) 1 -> 1\n(OK) 2 -> 4\n(OK) 3 -> 9"
/// );
/// ```
pub struct Interview<I, O> {
    harness: Harness<I, (), O>,
}

impl<I: Shape + 'static, O: Shape + 'static> Interview<I, O> {
    pub fn new() -> Self {
        Self {
            harness: Harness::new(false),
        }
    }

    /// Registers a case. The first case checks both types for hidden fields.
    pub fn add_case(&mut self, input: I, expected: O) -> Result<&mut Self> {
        self.harness.push_cases([(&input, &(), &expected)])?;
        Ok(self)
    }

    /// Registers one case per position of the two lists.
    pub fn add_cases(&mut self, inputs: &[I], expected: &[O]) -> Result<&mut Self> {
        self.add_cases_slice(inputs, expected, 0, None)
    }

    /// Registers the cases in `[begin, end)`. `None` runs to the end, and an
    /// `end` past the lists is clamped.
    pub fn add_cases_slice(
        &mut self,
        inputs: &[I],
        expected: &[O],
        begin: usize,
        end: Option<usize>,
    ) -> Result<&mut Self> {
        let range = case_range(inputs.len(), None, expected.len(), begin, end)?;
        self.harness
            .push_cases(range.map(|i| (&inputs[i], &(), &expected[i])))?;
        Ok(self)
    }

    /// Registers a case from text; see [`from_text`] for the accepted types.
    pub fn add_case_text(&mut self, input: &str, expected: &str) -> Result<&mut Self> {
        let input = from_text::<I>(input)?;
        let expected = from_text::<O>(expected)?;
        self.add_case(input, expected)
    }

    pub fn add_solution<F>(&mut self, name: impl Into<String>, solution: F) -> &mut Self
    where
        F: Fn(I) -> O + 'static,
    {
        self.harness
            .add_solution(name.into(), Solution::Single(Box::new(solution)));
        self
    }

    /// Registers named function pointers, usually built with [`solution!`].
    pub fn add_solutions(&mut self, solutions: &[(&str, fn(I) -> O)]) -> &mut Self {
        for (name, f) in solutions {
            self.add_solution(*name, *f);
        }
        self
    }

    harness_methods!();
}

impl<I: Shape + DeserializeOwned + 'static, O: Shape + DeserializeOwned + 'static> Interview<I, O> {
    /// Loads one case from two JSON files under the data directory.
    pub fn read_case(&mut self, input: impl AsRef<Path>, expected: impl AsRef<Path>) -> Result<&mut Self> {
        let input: I = read_data(self.harness.data_path(input))?;
        let expected: O = read_data(self.harness.data_path(expected))?;
        self.add_case(input, expected)
    }

    /// Loads cases from two JSON arrays.
    pub fn read_cases(&mut self, inputs: impl AsRef<Path>, expected: impl AsRef<Path>) -> Result<&mut Self> {
        self.read_cases_slice(inputs, expected, 0, None)
    }

    pub fn read_cases_slice(
        &mut self,
        inputs: impl AsRef<Path>,
        expected: impl AsRef<Path>,
        begin: usize,
        end: Option<usize>,
    ) -> Result<&mut Self> {
        let inputs: Vec<I> = read_data(self.harness.data_path(inputs))?;
        let expected: Vec<O> = read_data(self.harness.data_path(expected))?;
        self.add_cases_slice(&inputs, &expected, begin, end)
    }
}

impl<I, O> fmt::Debug for Interview<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interview")
            .field("cases", &self.harness.cases.len())
            .finish_non_exhaustive()
    }
}

impl<I: Shape + 'static, O: Shape + 'static> Default for Interview<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

/// Harness for solutions taking two inputs.
pub struct Interview2<I, I2, O> {
    harness: Harness<I, I2, O>,
}

impl<I, I2, O> fmt::Debug for Interview2<I, I2, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interview2")
            .field("cases", &self.harness.cases.len())
            .finish_non_exhaustive()
    }
}

impl<I: Shape + 'static, I2: Shape + 'static, O: Shape + 'static> Interview2<I, I2, O> {
    pub fn new() -> Self {
        Self {
            harness: Harness::new(true),
        }
    }

    pub fn add_case(&mut self, input: I, input2: I2, expected: O) -> Result<&mut Self> {
        self.harness.push_cases([(&input, &input2, &expected)])?;
        Ok(self)
    }

    pub fn add_cases(&mut self, inputs: &[I], inputs2: &[I2], expected: &[O]) -> Result<&mut Self> {
        self.add_cases_slice(inputs, inputs2, expected, 0, None)
    }

    pub fn add_cases_slice(
        &mut self,
        inputs: &[I],
        inputs2: &[I2],
        expected: &[O],
        begin: usize,
        end: Option<usize>,
    ) -> Result<&mut Self> {
        let range = case_range(inputs.len(), Some(inputs2.len()), expected.len(), begin, end)?;
        self.harness
            .push_cases(range.map(|i| (&inputs[i], &inputs2[i], &expected[i])))?;
        Ok(self)
    }

    pub fn add_case_text(&mut self, input: &str, input2: &str, expected: &str) -> Result<&mut Self> {
        let input = from_text::<I>(input)?;
        let input2 = from_text::<I2>(input2)?;
        let expected = from_text::<O>(expected)?;
        self.add_case(input, input2, expected)
    }

    pub fn add_solution<F>(&mut self, name: impl Into<String>, solution: F) -> &mut Self
    where
        F: Fn(I, I2) -> O + 'static,
    {
        self.harness
            .add_solution(name.into(), Solution::Double(Box::new(solution)));
        self
    }

    pub fn add_solutions(&mut self, solutions: &[(&str, fn(I, I2) -> O)]) -> &mut Self {
        for (name, f) in solutions {
            self.add_solution(*name, *f);
        }
        self
    }

    harness_methods!();
}

impl<I, I2, O> Interview2<I, I2, O>
where
    I: Shape + DeserializeOwned + 'static,
    I2: Shape + DeserializeOwned + 'static,
    O: Shape + DeserializeOwned + 'static,
{
    pub fn read_case(
        &mut self,
        input: impl AsRef<Path>,
        input2: impl AsRef<Path>,
        expected: impl AsRef<Path>,
    ) -> Result<&mut Self> {
        let input: I = read_data(self.harness.data_path(input))?;
        let input2: I2 = read_data(self.harness.data_path(input2))?;
        let expected: O = read_data(self.harness.data_path(expected))?;
        self.add_case(input, input2, expected)
    }

    pub fn read_cases(
        &mut self,
        inputs: impl AsRef<Path>,
        inputs2: impl AsRef<Path>,
        expected: impl AsRef<Path>,
    ) -> Result<&mut Self> {
        self.read_cases_slice(inputs, inputs2, expected, 0, None)
    }

    pub fn read_cases_slice(
        &mut self,
        inputs: impl AsRef<Path>,
        inputs2: impl AsRef<Path>,
        expected: impl AsRef<Path>,
        begin: usize,
        end: Option<usize>,
    ) -> Result<&mut Self> {
        let inputs: Vec<I> = read_data(self.harness.data_path(inputs))?;
        let inputs2: Vec<I2> = read_data(self.harness.data_path(inputs2))?;
        let expected: Vec<O> = read_data(self.harness.data_path(expected))?;
        self.add_cases_slice(&inputs, &inputs2, &expected, begin, end)
    }
}

impl<I: Shape + 'static, I2: Shape + 'static, O: Shape + 'static> Default for Interview2<I, I2, O> {
    fn default() -> Self {
        Self::new()
    }
}
