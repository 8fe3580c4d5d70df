use serde::{Deserialize, Serialize};

/// Number of entries in a 3×3 matrix, row-major.
pub const CELL_COUNT: usize = 9;

/// The 3×3 identity matrix as string tokens, row-major.
pub const IDENTITY_TOKENS: [&str; CELL_COUNT] = ["1", "0", "0", "0", "1", "0", "0", "0", "1"];

/// One practice item: a pair of matrices and the precomputed product the
/// learner is asked to reproduce.
///
/// Entries are string tokens (integers or simple fractions such as `"1/3"`),
/// compared by exact string equality. `"1"` and `"1.0"` are different tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    matrix_a: [String; CELL_COUNT],
    matrix_b: [String; CELL_COUNT],
    expected_product: [String; CELL_COUNT],
    is_inverse: bool,
}

impl ProblemRecord {
    /// Build a record from token arrays. `is_inverse` is derived from the
    /// product, so it is true exactly when the product is the identity.
    #[must_use]
    pub fn new(
        matrix_a: [&str; CELL_COUNT],
        matrix_b: [&str; CELL_COUNT],
        expected_product: [&str; CELL_COUNT],
    ) -> Self {
        let is_inverse = expected_product
            .iter()
            .zip(IDENTITY_TOKENS.iter())
            .all(|(token, identity)| token == identity);

        Self {
            matrix_a: matrix_a.map(str::to_string),
            matrix_b: matrix_b.map(str::to_string),
            expected_product: expected_product.map(str::to_string),
            is_inverse,
        }
    }

    #[must_use]
    pub fn matrix_a(&self) -> &[String; CELL_COUNT] {
        &self.matrix_a
    }

    #[must_use]
    pub fn matrix_b(&self) -> &[String; CELL_COUNT] {
        &self.matrix_b
    }

    #[must_use]
    pub fn expected_product(&self) -> &[String; CELL_COUNT] {
        &self.expected_product
    }

    /// True iff A×B is the 3×3 identity, i.e. A and B are inverses.
    #[must_use]
    pub fn is_inverse(&self) -> bool {
        self.is_inverse
    }
}
