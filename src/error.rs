//! Error types for field encoding and decoding.

use std::fmt;

/// Error type for field codec operations.
#[derive(Debug)]
pub enum FieldError {
    /// Input trailing dimension does not match the field's declared width.
    DimensionMismatch { expected: usize, got: usize },
    /// Flat encoding has the wrong total length (bit decoding, record splitting).
    LengthMismatch { expected: usize, got: usize },
    /// Integer input does not fit in the field's bit width.
    ValueOutOfRange { value: u64, num_bits: usize },
    /// Continuous range with `max <= min`; scaling would divide by zero.
    DegenerateRange { min: f64, max: f64 },
    /// Invalid construction parameter (empty or duplicated vocabulary, zero width).
    InvalidParameter(String),
    /// A native value of the wrong variant was handed to a field.
    TypeMismatch {
        field: String,
        expected: &'static str,
    },
    /// Serialization or deserialization error.
    SerializationError(String),
    /// I/O error during file operations.
    IoError(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::DimensionMismatch { expected, got } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, got)
            }
            FieldError::LengthMismatch { expected, got } => {
                write!(f, "Length mismatch: expected {}, got {}", expected, got)
            }
            FieldError::ValueOutOfRange { value, num_bits } => {
                write!(f, "Value out of range: {} does not fit in {} bits", value, num_bits)
            }
            FieldError::DegenerateRange { min, max } => {
                write!(f, "Degenerate range: min {} is not below max {}", min, max)
            }
            FieldError::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {}", msg)
            }
            FieldError::TypeMismatch { field, expected } => {
                write!(
                    f,
                    "Type mismatch: field '{}' expects a {} value",
                    field, expected
                )
            }
            FieldError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            FieldError::IoError(msg) => {
                write!(f, "I/O error: {}", msg)
            }
        }
    }
}

impl std::error::Error for FieldError {}

impl From<std::io::Error> for FieldError {
    fn from(err: std::io::Error) -> Self {
        FieldError::IoError(err.to_string())
    }
}

impl From<bincode::Error> for FieldError {
    fn from(err: bincode::Error) -> Self {
        FieldError::SerializationError(err.to_string())
    }
}
