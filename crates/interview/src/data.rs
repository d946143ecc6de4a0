//! Case data loading: JSON files and raw text.

use std::any::{Any, TypeId, type_name};
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{InterviewError, Result};
use crate::shape::short_type_name;

/// Reads a JSON file into `T`. Windows line endings are normalized first.
pub fn read_data<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| InterviewError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = content.replace("\r\n", "\n");

    let value = serde_json::from_str(&content).map_err(|source| InterviewError::InvalidData {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "loaded case data");
    Ok(value)
}

/// Converts text into a byte or codepoint value.
///
/// Supported targets are `Vec<u8>` (UTF-8 bytes), `Vec<i32>` and `Vec<char>`
/// (one element per codepoint) and `String`. Anything else is a
/// [`InterviewError::ShapeConversion`].
pub fn from_text<T: 'static>(text: &str) -> Result<T> {
    let target = TypeId::of::<T>();
    let value: Box<dyn Any> = if target == TypeId::of::<Vec<u8>>() {
        Box::new(text.as_bytes().to_vec())
    } else if target == TypeId::of::<Vec<i32>>() {
        Box::new(text.chars().map(|c| c as i32).collect::<Vec<i32>>())
    } else if target == TypeId::of::<Vec<char>>() {
        Box::new(text.chars().collect::<Vec<char>>())
    } else if target == TypeId::of::<String>() {
        Box::new(text.to_string())
    } else {
        return Err(conversion_error::<T>());
    };

    value
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| conversion_error::<T>())
}

fn conversion_error<T>() -> InterviewError {
    InterviewError::ShapeConversion {
        type_name: short_type_name(type_name::<T>()),
    }
}
