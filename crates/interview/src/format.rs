//! Value formatting.
//!
//! Two renderings share one recursive writer over [`View`]:
//!
//! - [`format`] honors [`FormatOptions`] and is what receipts show.
//! - [`display`] is the plain structural form (`{1 2}`, `[1 2]`, `map[k:v]`)
//!   used for mismatch values.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::shape::{Inspect, Kind, Scalar, ScalarKind, View};

/// Token written for an absent reference.
pub const ABSENT: &str = "nil";

/// Formatting switches for receipt values.
///
/// All switches are off by default. Options can be built with the setter
/// chain or loaded from TOML:
///
/// ```rust
/// use interview::FormatOptions;
///
/// let options = FormatOptions::from_toml_str("show_field_names = true").unwrap();
/// assert_eq!(options, FormatOptions::new().show_field_names(true));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Render `u8` sequences as text, one character per byte.
    pub bytes_as_text: bool,
    /// Render `i32` and `char` sequences as text, one character per codepoint.
    pub codepoints_as_text: bool,
    /// Prefix aggregate fields with `Name: `.
    pub show_field_names: bool,
    /// Render a sequence of sequences one row per line.
    pub matrix_rows: bool,
}

impl FormatOptions {
    /// Creates options with every switch off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a TOML table. Missing keys default to off.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn bytes_as_text(mut self, enabled: bool) -> Self {
        self.bytes_as_text = enabled;
        self
    }

    pub fn codepoints_as_text(mut self, enabled: bool) -> Self {
        self.codepoints_as_text = enabled;
        self
    }

    pub fn show_field_names(mut self, enabled: bool) -> Self {
        self.show_field_names = enabled;
        self
    }

    pub fn matrix_rows(mut self, enabled: bool) -> Self {
        self.matrix_rows = enabled;
        self
    }
}

#[derive(Clone, Copy)]
enum Mode<'o> {
    Plain,
    Configured(&'o FormatOptions),
}

/// Formats a value for a receipt column.
pub fn format<T: Inspect + ?Sized>(value: &T, options: &FormatOptions) -> String {
    let mut out = String::new();
    write_view(&mut out, value.view(), Mode::Configured(options));
    out
}

/// Formats a value in the plain structural form.
pub fn display<T: Inspect + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    write_view(&mut out, value.view(), Mode::Plain);
    out
}

fn write_view(out: &mut String, view: View<'_>, mode: Mode<'_>) {
    match view {
        View::Scalar(scalar) => {
            let _ = write!(out, "{scalar}");
        }
        View::Absent => out.push_str(ABSENT),
        View::Reference(inner) | View::Boxed(inner) => write_view(out, inner.view(), mode),
        View::Aggregate(fields) => {
            let show_names = matches!(mode, Mode::Configured(o) if o.show_field_names);
            let separator = match mode {
                Mode::Plain => " ",
                Mode::Configured(_) => ", ",
            };
            out.push('{');
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    out.push_str(separator);
                }
                if show_names {
                    out.push_str(field.name);
                    out.push_str(": ");
                }
                write_view(out, field.value.view(), mode);
            }
            out.push('}');
        }
        View::Sequence { elem, items } | View::Array { elem, items } => {
            write_list(out, elem, &items, mode);
        }
        View::Map(entries) => {
            out.push_str("map[");
            for (i, (key, value)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_view(out, key.view(), mode);
                out.push(':');
                write_view(out, value.view(), mode);
            }
            out.push(']');
        }
    }
}

fn write_list(out: &mut String, elem: Kind, items: &[&dyn Inspect], mode: Mode<'_>) {
    if let Mode::Configured(options) = mode {
        match elem {
            Kind::Scalar(ScalarKind::Byte) if options.bytes_as_text => {
                out.extend(items.iter().map(|item| byte_char(*item)));
                return;
            }
            Kind::Scalar(ScalarKind::Codepoint | ScalarKind::Char)
                if options.codepoints_as_text =>
            {
                out.extend(items.iter().map(|item| codepoint_char(*item)));
                return;
            }
            elem if options.matrix_rows && elem.is_list() && !items.is_empty() => {
                for (i, row) in items.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    write_view(out, row.view(), mode);
                }
                return;
            }
            _ => {}
        }
    }

    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_view(out, item.view(), mode);
    }
    out.push(']');
}

// Bytes map to the first 256 codepoints, one char each.
fn byte_char(item: &dyn Inspect) -> char {
    match item.view() {
        View::Scalar(Scalar::Unsigned(b)) => u8::try_from(b).map_or(char::REPLACEMENT_CHARACTER, char::from),
        _ => char::REPLACEMENT_CHARACTER,
    }
}

fn codepoint_char(item: &dyn Inspect) -> char {
    match item.view() {
        View::Scalar(Scalar::Char(c)) => c,
        View::Scalar(Scalar::Signed(cp)) => u32::try_from(cp)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER),
        _ => char::REPLACEMENT_CHARACTER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_scalars() {
        let options = FormatOptions::new();
        assert_eq!(format(&42i64, &options), "42");
        assert_eq!(format(&-7i8, &options), "-7");
        assert_eq!(format(&true, &options), "true");
        assert_eq!(format(&1.5f32, &options), "1.5");
        assert_eq!(format(&"plain".to_string(), &options), "plain");
    }

    #[test]
    fn test_sequences_are_space_separated() {
        let options = FormatOptions::new();
        assert_eq!(format(&vec![1u64, 2, 3], &options), "[1 2 3]");
        assert_eq!(format(&Vec::<i64>::new(), &options), "[]");
        assert_eq!(format(&[vec![1i8], vec![2, 3]], &options), "[[1] [2 3]]");
    }

    #[test]
    fn test_bytes_as_text() {
        let bytes = b"helloWORLD".to_vec();
        assert_eq!(
            format(&bytes, &FormatOptions::new()),
            "[104 101 108 108 111 87 79 82 76 68]"
        );
        assert_eq!(format(&bytes, &FormatOptions::new().bytes_as_text(true)), "helloWORLD");
        assert_eq!(format(&Vec::<u8>::new(), &FormatOptions::new().bytes_as_text(true)), "");
    }

    #[test]
    fn test_bytes_as_text_uses_one_char_per_byte() {
        let options = FormatOptions::new().bytes_as_text(true);
        assert_eq!(format(&vec![0xe9u8], &options), "\u{e9}");
    }

    #[test]
    fn test_codepoints_as_text() {
        let options = FormatOptions::new().codepoints_as_text(true);
        let runes: Vec<i32> = "héllo".chars().map(|c| c as i32).collect();
        assert_eq!(format(&runes, &options), "héllo");
        assert_eq!(format(&vec!['o', 'k'], &options), "ok");
        assert_eq!(format(&vec![-1i32, 0x41], &options), "\u{fffd}A");
    }

    #[test]
    fn test_text_switches_do_not_leak_into_other_sequences() {
        let options = FormatOptions::new().bytes_as_text(true).codepoints_as_text(true);
        assert_eq!(format(&vec![104u16, 105], &options), "[104 105]");
        assert_eq!(format(&vec![104i64, 105], &options), "[104 105]");
    }

    #[test]
    fn test_matrix_rows() {
        let matrix = vec![vec![1i8, 2], vec![3, 4]];
        assert_eq!(format(&matrix, &FormatOptions::new()), "[[1 2] [3 4]]");
        assert_eq!(
            format(&matrix, &FormatOptions::new().matrix_rows(true)),
            "[1 2]\n[3 4]"
        );
        assert_eq!(
            format(&Vec::<Vec<i8>>::new(), &FormatOptions::new().matrix_rows(true)),
            "[]"
        );
    }

    #[test]
    fn test_aggregates() {
        let pair = (1u8, "two".to_string());
        assert_eq!(format(&pair, &FormatOptions::new()), "{1, two}");
        assert_eq!(
            format(&pair, &FormatOptions::new().show_field_names(true)),
            "{0: 1, 1: two}"
        );
        assert_eq!(display(&pair), "{1 two}");
    }

    #[test]
    fn test_maps_and_absent() {
        let map: BTreeMap<String, i64> =
            [("b".to_string(), 2), ("a".to_string(), 1)].into_iter().collect();
        assert_eq!(format(&map, &FormatOptions::new()), "map[a:1 b:2]");
        assert_eq!(display(&None::<i32>), "nil");
        assert_eq!(display(&Some(Box::new(5u32))), "5");
    }

    #[test]
    fn test_display_ignores_text_options() {
        assert_eq!(display(&b"hi".to_vec()), "[104 105]");
    }

    #[test]
    fn test_options_from_toml() {
        let options = FormatOptions::from_toml_str(
            "bytes_as_text = true\ncodepoints_as_text = true\nmatrix_rows = true",
        )
        .unwrap();
        assert!(options.bytes_as_text);
        assert!(options.codepoints_as_text);
        assert!(options.matrix_rows);
        assert!(!options.show_field_names);
        assert_eq!(FormatOptions::from_toml_str("").unwrap(), FormatOptions::default());
    }

    #[test]
    fn test_options_from_invalid_toml() {
        let err = FormatOptions::from_toml_str("bytes_as_text = \"yes\"").unwrap_err();
        assert!(err.to_string().contains("invalid format options"));
    }
}
