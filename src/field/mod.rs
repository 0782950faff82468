//! Field codecs between native tabular values and numeric encodings.
//!
//! A field is a named, immutable codec for one dataset column. Each concrete
//! field owns a deterministic, bidirectional mapping between its native
//! domain and a fixed-width numeric encoding:
//!
//! - [`ContinuousField`]: affine range scaling for real-valued vectors.
//! - [`DiscreteField`]: one-hot encoding over a fixed, ordered vocabulary.
//! - [`BitField`]: fixed-width integers expanded to per-bit one-hot pairs.
//!
//! Fields never change after construction, so `normalize`/`denormalize` are
//! pure functions of the input and safe to call concurrently.

mod bits;
mod continuous;
mod discrete;

pub use bits::BitField;
pub use continuous::ContinuousField;
pub use discrete::DiscreteField;

use crate::error::FieldError;
use crate::output::OutputDescriptor;

/// Contract shared by all field codecs.
///
/// `normalize` and `denormalize` are inverses over the field's native domain:
/// encoding a valid native value and decoding the result reconstructs the
/// value (exactly for discrete and bit fields, up to floating-point rounding
/// for continuous fields).
pub trait FieldCodec {
    /// Native value type this field encodes.
    type Native;

    /// Field name; used by callers for column lookup, never interpreted here.
    fn name(&self) -> &str;

    /// Total number of numeric slots one encoded sample occupies.
    fn width(&self) -> usize;

    /// Encode a native value into a flat numeric vector of length `width()`.
    fn normalize(&self, value: &Self::Native) -> Result<Vec<f64>, FieldError>;

    /// Decode a flat numeric vector of length `width()` back to a native value.
    fn denormalize(&self, encoded: &[f64]) -> Result<Self::Native, FieldError>;

    /// Shape metadata for the model layer: one descriptor per encoded
    /// channel, in encoding order.
    fn describe(&self) -> Vec<OutputDescriptor>;
}
