//! Bit field: fixed-width integers as per-bit one-hot pairs.
//!
//! Each of the `num_bits` binary digits (most-significant first) expands to a
//! 2-wide one-hot pair: bit 0 → `[1, 0]`, bit 1 → `[0, 1]`. The model layer
//! treats every bit as an independent categorical channel, so `describe`
//! returns `num_bits` separate width-2 descriptors rather than one fused one.

use crate::error::FieldError;
use crate::field::FieldCodec;
use crate::output::OutputDescriptor;
use serde::{Deserialize, Serialize};

/// Codec for non-negative integers below `2^num_bits`.
///
/// # Example
/// ```
/// use fieldcodec::{BitField, FieldCodec};
///
/// let field = BitField::new("port_hi", 4)?;
/// // 5 is 0101 in 4 bits, MSB first.
/// let encoded = field.normalize(&5)?;
/// assert_eq!(encoded, vec![1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0]);
/// assert_eq!(field.denormalize(&encoded)?, 5);
/// # Ok::<(), fieldcodec::FieldError>(())
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BitField {
    name: String,
    num_bits: usize,
}

impl BitField {
    /// Maximum representable bit width; the native domain is `u64`.
    pub const MAX_BITS: usize = 64;

    /// Create a field over the integer domain `[0, 2^num_bits)`.
    ///
    /// # Errors
    /// Returns [`FieldError::InvalidParameter`] if `num_bits` is zero or
    /// exceeds [`MAX_BITS`](Self::MAX_BITS).
    pub fn new(name: impl Into<String>, num_bits: usize) -> Result<Self, FieldError> {
        if num_bits == 0 || num_bits > Self::MAX_BITS {
            return Err(FieldError::InvalidParameter(format!(
                "num_bits must be in 1..={}, got {}",
                Self::MAX_BITS,
                num_bits
            )));
        }
        Ok(Self {
            name: name.into(),
            num_bits,
        })
    }

    /// Number of binary digits in the encoding.
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    fn fits(&self, value: u64) -> bool {
        self.num_bits >= Self::MAX_BITS || value >> self.num_bits == 0
    }
}

impl FieldCodec for BitField {
    type Native = u64;

    fn name(&self) -> &str {
        &self.name
    }

    fn width(&self) -> usize {
        2 * self.num_bits
    }

    fn normalize(&self, value: &Self::Native) -> Result<Vec<f64>, FieldError> {
        if !self.fits(*value) {
            return Err(FieldError::ValueOutOfRange {
                value: *value,
                num_bits: self.num_bits,
            });
        }
        let mut encoded = Vec::with_capacity(2 * self.num_bits);
        for shift in (0..self.num_bits).rev() {
            if (value >> shift) & 1 == 0 {
                encoded.extend([1.0, 0.0]);
            } else {
                encoded.extend([0.0, 1.0]);
            }
        }
        Ok(encoded)
    }

    fn denormalize(&self, encoded: &[f64]) -> Result<Self::Native, FieldError> {
        if encoded.len() != 2 * self.num_bits {
            return Err(FieldError::LengthMismatch {
                expected: 2 * self.num_bits,
                got: encoded.len(),
            });
        }
        let mut value = 0u64;
        for pair in encoded.chunks_exact(2) {
            // Arg-max over the pair; a tie decodes as bit 0.
            let bit = u64::from(pair[1] > pair[0]);
            value = (value << 1) | bit;
        }
        Ok(value)
    }

    fn describe(&self) -> Vec<OutputDescriptor> {
        (0..self.num_bits)
            .map(|_| OutputDescriptor::discrete(2))
            .collect()
    }
}
