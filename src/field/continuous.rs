//! Continuous field: affine range scaling.
//!
//! Maps real-valued vectors from `[min_value, max_value]` into `[0, 1]` or
//! `[-1, 1]` and back:
//! ```text
//! ZeroOne:      y = (x - min) / (max - min)
//! MinusOneOne:  y = 2 * (x - min) / (max - min) - 1
//! ```
//! Values outside the range extrapolate linearly; clamping is the caller's
//! choice.

use crate::error::FieldError;
use crate::field::FieldCodec;
use crate::output::{Normalization, OutputDescriptor};
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

/// Range-scaling codec for real-valued vectors of fixed width.
///
/// # Example
/// ```
/// use fieldcodec::{ContinuousField, FieldCodec, Normalization};
///
/// let field = ContinuousField::new("pkt_len", 0.0, 10.0, Normalization::ZeroOne)?;
/// let encoded = field.normalize(&vec![5.0])?;
/// assert_eq!(encoded, vec![0.5]);
/// assert_eq!(field.denormalize(&encoded)?, vec![5.0]);
/// # Ok::<(), fieldcodec::FieldError>(())
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContinuousField {
    name: String,
    min_value: f64,
    max_value: f64,
    normalization: Normalization,
    width: usize,
}

impl ContinuousField {
    /// Create a field encoding a single scalar channel (`width == 1`).
    ///
    /// # Errors
    /// Returns [`FieldError::DegenerateRange`] unless `max_value > min_value`;
    /// an empty or inverted range would make the forward scale divide by zero.
    pub fn new(
        name: impl Into<String>,
        min_value: f64,
        max_value: f64,
        normalization: Normalization,
    ) -> Result<Self, FieldError> {
        // NaN bounds fail the comparison and are rejected with the range error.
        if !(max_value > min_value) {
            return Err(FieldError::DegenerateRange {
                min: min_value,
                max: max_value,
            });
        }
        Ok(Self {
            name: name.into(),
            min_value,
            max_value,
            normalization,
            width: 1,
        })
    }

    /// Set the number of scalar channels encoded together.
    ///
    /// # Errors
    /// Returns [`FieldError::InvalidParameter`] if `width` is zero.
    pub fn with_width(mut self, width: usize) -> Result<Self, FieldError> {
        if width == 0 {
            return Err(FieldError::InvalidParameter(
                "continuous field width must be positive".to_string(),
            ));
        }
        self.width = width;
        Ok(self)
    }

    /// Lower bound of the native domain.
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Upper bound of the native domain.
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Normalization mode of the encoded range.
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    fn range(&self) -> f64 {
        self.max_value - self.min_value
    }

    fn check_trailing_dim(&self, got: usize) -> Result<(), FieldError> {
        if got != self.width {
            return Err(FieldError::DimensionMismatch {
                expected: self.width,
                got,
            });
        }
        Ok(())
    }

    fn scale_forward(&self, x: f64) -> f64 {
        match self.normalization {
            Normalization::ZeroOne => (x - self.min_value) / self.range(),
            Normalization::MinusOneOne => 2.0 * (x - self.min_value) / self.range() - 1.0,
        }
    }

    fn scale_inverse(&self, y: f64) -> f64 {
        match self.normalization {
            Normalization::ZeroOne => y * self.range() + self.min_value,
            Normalization::MinusOneOne => (y + 1.0) / 2.0 * self.range() + self.min_value,
        }
    }

    /// Encode a batch of samples; rows are samples, the trailing axis must
    /// equal the field width.
    pub fn normalize_batch(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>, FieldError> {
        self.check_trailing_dim(x.ncols())?;
        Ok(x.mapv(|v| self.scale_forward(v)))
    }

    /// Decode a batch of encoded samples; same shape contract as
    /// [`normalize_batch`](Self::normalize_batch).
    pub fn denormalize_batch(&self, y: ArrayView2<'_, f64>) -> Result<Array2<f64>, FieldError> {
        self.check_trailing_dim(y.ncols())?;
        Ok(y.mapv(|v| self.scale_inverse(v)))
    }
}

impl FieldCodec for ContinuousField {
    type Native = Vec<f64>;

    fn name(&self) -> &str {
        &self.name
    }

    fn width(&self) -> usize {
        self.width
    }

    fn normalize(&self, value: &Self::Native) -> Result<Vec<f64>, FieldError> {
        self.check_trailing_dim(value.len())?;
        Ok(value.iter().map(|&v| self.scale_forward(v)).collect())
    }

    fn denormalize(&self, encoded: &[f64]) -> Result<Self::Native, FieldError> {
        self.check_trailing_dim(encoded.len())?;
        Ok(encoded.iter().map(|&v| self.scale_inverse(v)).collect())
    }

    fn describe(&self) -> Vec<OutputDescriptor> {
        vec![OutputDescriptor::continuous(self.width, self.normalization)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputKind;
    use ndarray::array;

    fn zero_one_field() -> ContinuousField {
        ContinuousField::new("len", 0.0, 10.0, Normalization::ZeroOne).unwrap()
    }

    #[test]
    fn test_zero_one_boundary_scaling() {
        let field = zero_one_field();
        assert_eq!(field.normalize(&vec![0.0]).unwrap(), vec![0.0]);
        assert_eq!(field.normalize(&vec![10.0]).unwrap(), vec![1.0]);
        assert_eq!(field.normalize(&vec![5.0]).unwrap(), vec![0.5]);
    }

    #[test]
    fn test_minus_one_one_boundary_scaling() {
        let field =
            ContinuousField::new("len", 0.0, 10.0, Normalization::MinusOneOne).unwrap();
        assert_eq!(field.normalize(&vec![0.0]).unwrap(), vec![-1.0]);
        assert_eq!(field.normalize(&vec![10.0]).unwrap(), vec![1.0]);
        assert_eq!(field.normalize(&vec![5.0]).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_round_trip_both_modes() {
        for mode in [Normalization::ZeroOne, Normalization::MinusOneOne] {
            let field = ContinuousField::new("ts", -3.5, 17.25, mode).unwrap();
            for x in [-3.5, -1.0, 0.0, 4.2, 17.25] {
                let encoded = field.normalize(&vec![x]).unwrap();
                let decoded = field.denormalize(&encoded).unwrap();
                assert!(
                    (decoded[0] - x).abs() < 1e-9,
                    "mode {:?}: expected {}, got {}",
                    mode,
                    x,
                    decoded[0]
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_extrapolates() {
        let field = zero_one_field();
        assert_eq!(field.normalize(&vec![20.0]).unwrap(), vec![2.0]);
        assert_eq!(field.normalize(&vec![-10.0]).unwrap(), vec![-1.0]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let field = zero_one_field().with_width(2).unwrap();
        let result = field.normalize(&vec![1.0]);
        assert!(matches!(
            result,
            Err(FieldError::DimensionMismatch {
                expected: 2,
                got: 1
            })
        ));

        let result = field.denormalize(&[0.1, 0.2, 0.3]);
        assert!(matches!(
            result,
            Err(FieldError::DimensionMismatch {
                expected: 2,
                got: 3
            })
        ));
    }

    #[test]
    fn test_degenerate_range_rejected() {
        let result = ContinuousField::new("c", 5.0, 5.0, Normalization::ZeroOne);
        assert!(matches!(result, Err(FieldError::DegenerateRange { .. })));

        let result = ContinuousField::new("c", 7.0, 2.0, Normalization::ZeroOne);
        assert!(matches!(result, Err(FieldError::DegenerateRange { .. })));
    }

    #[test]
    fn test_nan_bound_rejected() {
        let result = ContinuousField::new("c", f64::NAN, 1.0, Normalization::ZeroOne);
        assert!(matches!(result, Err(FieldError::DegenerateRange { .. })));
    }

    #[test]
    fn test_zero_width_rejected() {
        let result = zero_one_field().with_width(0);
        assert!(matches!(result, Err(FieldError::InvalidParameter(_))));
    }

    #[test]
    fn test_multi_channel_normalize() {
        let field = zero_one_field().with_width(3).unwrap();
        let encoded = field.normalize(&vec![0.0, 5.0, 10.0]).unwrap();
        assert_eq!(encoded, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_batch_normalize() {
        let field = zero_one_field().with_width(2).unwrap();
        let x = array![[0.0, 10.0], [5.0, 2.5]];
        let encoded = field.normalize_batch(x.view()).unwrap();
        assert_eq!(encoded, array![[0.0, 1.0], [0.5, 0.25]]);

        let decoded = field.denormalize_batch(encoded.view()).unwrap();
        for (a, b) in decoded.iter().zip(x.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_batch_dimension_mismatch() {
        let field = zero_one_field().with_width(2).unwrap();
        let x = array![[0.0, 1.0, 2.0]];
        assert!(matches!(
            field.normalize_batch(x.view()),
            Err(FieldError::DimensionMismatch {
                expected: 2,
                got: 3
            })
        ));
    }

    #[test]
    fn test_describe() {
        let field = ContinuousField::new("ts", 0.0, 1.0, Normalization::MinusOneOne)
            .unwrap()
            .with_width(4)
            .unwrap();
        let descs = field.describe();
        assert_eq!(descs.len(), 1);
        assert_eq!(descs[0].kind(), OutputKind::Continuous);
        assert_eq!(descs[0].width(), 4);
        assert_eq!(descs[0].normalization(), Some(Normalization::MinusOneOne));
    }

    #[test]
    fn test_serde_round_trip() {
        let field = zero_one_field().with_width(2).unwrap();
        let bytes = bincode::serialize(&field).unwrap();
        let restored: ContinuousField = bincode::deserialize(&bytes).unwrap();
        assert_eq!(restored.name(), "len");
        assert_eq!(restored.width(), 2);
        assert_eq!(restored.min_value(), 0.0);
        assert_eq!(restored.max_value(), 10.0);
    }
}
