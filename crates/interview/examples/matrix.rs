//! Element-wise matrix products loaded from JSON, one row per line.
//!
//! ## Running
//!
//! ```bash
//! cargo run --example matrix
//! ```

use interview::prelude::*;
use tracing_subscriber::EnvFilter;

type Matrix = Vec<Vec<i32>>;

fn hadamard(a: Matrix, b: Matrix) -> Matrix {
    a.iter()
        .zip(&b)
        .map(|(ra, rb)| ra.iter().zip(rb).map(|(x, y)| x * y).collect())
        .collect()
}

fn transposed_product(a: Matrix, b: Matrix) -> Matrix {
    (0..a.len())
        .map(|i| (0..a[i].len()).map(|j| a[i][j] * b[j][i]).collect())
        .collect()
}

fn main() -> Result<(), InterviewError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut interview = Interview2::<Matrix, Matrix, Matrix>::new();
    interview
        .with_data_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/examples/data"))
        .read_cases("matrix_a.json", "matrix_b.json", "matrix_product.json")?
        .add_solution("hadamard", hadamard)
        .add_solution("transposed_product", transposed_product)
        .show_matrix_rows();

    interview.print()
}
