//! Discrete field: one-hot encoding over a fixed vocabulary.
//!
//! The vocabulary order fixes the one-hot column order for both directions.
//! Unknown categories encode to an all-zero row instead of failing; decoding
//! always returns some vocabulary entry (arg-max, lowest index on ties), so
//! it is not a perfect inverse for out-of-vocabulary or noisy input.

use crate::error::FieldError;
use crate::field::FieldCodec;
use crate::output::OutputDescriptor;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One-hot codec over a fixed, ordered vocabulary.
///
/// # Example
/// ```
/// use fieldcodec::{DiscreteField, FieldCodec};
///
/// let field = DiscreteField::new("proto", vec!["tcp".into(), "udp".into(), "icmp".into()])?;
/// assert_eq!(field.one_hot("udp"), vec![0.0, 1.0, 0.0]);
/// assert_eq!(field.denormalize(&[0.0, 1.0, 0.0])?, "udp");
/// # Ok::<(), fieldcodec::FieldError>(())
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiscreteField {
    name: String,
    vocabulary: Vec<String>,
}

impl DiscreteField {
    /// Create a field over `vocabulary`; its order fixes the column order.
    ///
    /// # Errors
    /// Returns [`FieldError::InvalidParameter`] if the vocabulary is empty or
    /// contains duplicate labels.
    pub fn new(name: impl Into<String>, vocabulary: Vec<String>) -> Result<Self, FieldError> {
        if vocabulary.is_empty() {
            return Err(FieldError::InvalidParameter(
                "vocabulary must not be empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for label in &vocabulary {
            if !seen.insert(label.as_str()) {
                return Err(FieldError::InvalidParameter(format!(
                    "duplicate vocabulary label '{}'",
                    label
                )));
            }
        }
        Ok(Self {
            name: name.into(),
            vocabulary,
        })
    }

    /// The ordered vocabulary labels.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// One-hot row for `value` in vocabulary order; all zeros for a label
    /// not in the vocabulary.
    pub fn one_hot(&self, value: &str) -> Vec<f64> {
        let mut row = vec![0.0; self.vocabulary.len()];
        if let Some(idx) = self.vocabulary.iter().position(|label| label == value) {
            row[idx] = 1.0;
        }
        row
    }

    /// One-hot matrix for a sequence of values, one row per value.
    pub fn normalize_batch<S: AsRef<str>>(&self, values: &[S]) -> Array2<f64> {
        let width = self.vocabulary.len();
        let mut matrix = Array2::zeros((values.len(), width));
        for (row, value) in values.iter().enumerate() {
            if let Some(idx) = self
                .vocabulary
                .iter()
                .position(|label| label == value.as_ref())
            {
                matrix[[row, idx]] = 1.0;
            }
        }
        matrix
    }

    /// Decode a matrix of encoded rows back to labels.
    pub fn denormalize_batch(
        &self,
        encoded: ndarray::ArrayView2<'_, f64>,
    ) -> Result<Vec<String>, FieldError> {
        if encoded.ncols() != self.vocabulary.len() {
            return Err(FieldError::DimensionMismatch {
                expected: self.vocabulary.len(),
                got: encoded.ncols(),
            });
        }
        encoded
            .rows()
            .into_iter()
            .map(|row| {
                let slice: Vec<f64> = row.iter().copied().collect();
                self.decode(&slice).map(str::to_owned)
            })
            .collect()
    }

    /// Decode one encoded row: arg-max column, ties broken by lowest index,
    /// mapped through the vocabulary.
    pub fn decode(&self, encoded: &[f64]) -> Result<&str, FieldError> {
        if encoded.len() != self.vocabulary.len() {
            return Err(FieldError::DimensionMismatch {
                expected: self.vocabulary.len(),
                got: encoded.len(),
            });
        }
        let mut best = 0;
        for (idx, &value) in encoded.iter().enumerate() {
            if value > encoded[best] {
                best = idx;
            }
        }
        Ok(&self.vocabulary[best])
    }
}

impl FieldCodec for DiscreteField {
    type Native = String;

    fn name(&self) -> &str {
        &self.name
    }

    fn width(&self) -> usize {
        self.vocabulary.len()
    }

    fn normalize(&self, value: &Self::Native) -> Result<Vec<f64>, FieldError> {
        Ok(self.one_hot(value))
    }

    fn denormalize(&self, encoded: &[f64]) -> Result<Self::Native, FieldError> {
        self.decode(encoded).map(str::to_owned)
    }

    fn describe(&self) -> Vec<OutputDescriptor> {
        vec![OutputDescriptor::discrete(self.vocabulary.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputKind;
    use ndarray::array;

    fn abc_field() -> DiscreteField {
        DiscreteField::new("label", vec!["a".into(), "b".into(), "c".into()]).unwrap()
    }

    #[test]
    fn test_one_hot_column_order_follows_vocabulary() {
        let field = abc_field();
        assert_eq!(field.one_hot("a"), vec![1.0, 0.0, 0.0]);
        assert_eq!(field.one_hot("b"), vec![0.0, 1.0, 0.0]);
        assert_eq!(field.one_hot("c"), vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_unknown_category_encodes_to_zero_row() {
        let field = abc_field();
        assert_eq!(field.one_hot("z"), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_normalize_batch() {
        let field = abc_field();
        let matrix = field.normalize_batch(&["a", "c"]);
        assert_eq!(matrix, array![[1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
    }

    #[test]
    fn test_normalize_batch_with_unknown_row() {
        let field = abc_field();
        let matrix = field.normalize_batch(&["z", "b"]);
        assert_eq!(matrix, array![[0.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    }

    #[test]
    fn test_denormalize_arg_max() {
        let field = abc_field();
        assert_eq!(field.denormalize(&[0.0, 1.0, 0.0]).unwrap(), "b");
        assert_eq!(field.denormalize(&[0.1, 0.2, 0.7]).unwrap(), "c");
    }

    #[test]
    fn test_denormalize_tie_takes_lowest_index() {
        let field = abc_field();
        assert_eq!(field.denormalize(&[0.5, 0.5, 0.0]).unwrap(), "a");
        // All-zero row (unknown at encode time) still decodes to some entry.
        assert_eq!(field.denormalize(&[0.0, 0.0, 0.0]).unwrap(), "a");
    }

    #[test]
    fn test_denormalize_dimension_mismatch() {
        let field = abc_field();
        let result = field.denormalize(&[0.0, 1.0]);
        assert!(matches!(
            result,
            Err(FieldError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn test_denormalize_batch() {
        let field = abc_field();
        let encoded = array![[1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        let labels = field.denormalize_batch(encoded.view()).unwrap();
        assert_eq!(labels, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_empty_vocabulary_rejected() {
        let result = DiscreteField::new("label", vec![]);
        assert!(matches!(result, Err(FieldError::InvalidParameter(_))));
    }

    #[test]
    fn test_duplicate_vocabulary_rejected() {
        let result = DiscreteField::new("label", vec!["a".into(), "b".into(), "a".into()]);
        assert!(matches!(result, Err(FieldError::InvalidParameter(_))));
    }

    #[test]
    fn test_describe() {
        let field = abc_field();
        let descs = field.describe();
        assert_eq!(descs.len(), 1);
        assert_eq!(descs[0].kind(), OutputKind::Discrete);
        assert_eq!(descs[0].width(), 3);
        assert_eq!(descs[0].normalization(), None);
    }

    #[test]
    fn test_round_trip_all_labels() {
        let field = abc_field();
        for label in field.vocabulary().to_vec() {
            let encoded = field.one_hot(&label);
            assert_eq!(field.denormalize(&encoded).unwrap(), label);
        }
    }
}
