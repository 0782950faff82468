//! Schema: an ordered collection of uniquely-named fields.
//!
//! A schema holds one [`Field`] per dataset column in column order. Records
//! normalize to the concatenation of their fields' encodings; model output
//! vectors split back into native values by field width. Fitted schemas can
//! be saved to and loaded from disk for reuse across preprocessing runs.

use crate::error::FieldError;
use crate::field::{BitField, ContinuousField, DiscreteField, FieldCodec};
use crate::output::OutputDescriptor;
use serde::{Deserialize, Serialize};

/// Native value for one field of a record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Real-valued vector for a continuous field.
    Continuous(Vec<f64>),
    /// Category label for a discrete field.
    Categorical(String),
    /// Non-negative integer for a bit field.
    Integer(u64),
}

/// A column codec: one of the three concrete field variants.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Field {
    /// Affine range-scaling codec.
    Continuous(ContinuousField),
    /// One-hot codec over a fixed vocabulary.
    Discrete(DiscreteField),
    /// Fixed-width integer codec.
    Bit(BitField),
}

impl Field {
    /// Field name.
    pub fn name(&self) -> &str {
        match self {
            Field::Continuous(f) => f.name(),
            Field::Discrete(f) => f.name(),
            Field::Bit(f) => f.name(),
        }
    }

    /// Total number of numeric slots one encoded sample occupies.
    pub fn width(&self) -> usize {
        match self {
            Field::Continuous(f) => f.width(),
            Field::Discrete(f) => f.width(),
            Field::Bit(f) => f.width(),
        }
    }

    /// Shape metadata in encoding order.
    pub fn describe(&self) -> Vec<OutputDescriptor> {
        match self {
            Field::Continuous(f) => f.describe(),
            Field::Discrete(f) => f.describe(),
            Field::Bit(f) => f.describe(),
        }
    }

    /// Encode a native value; the value variant must match the field variant.
    pub fn normalize(&self, value: &Value) -> Result<Vec<f64>, FieldError> {
        match (self, value) {
            (Field::Continuous(f), Value::Continuous(x)) => f.normalize(x),
            (Field::Discrete(f), Value::Categorical(x)) => f.normalize(x),
            (Field::Bit(f), Value::Integer(x)) => f.normalize(x),
            (field, _) => Err(FieldError::TypeMismatch {
                field: field.name().to_string(),
                expected: field.expected_value(),
            }),
        }
    }

    /// Decode a flat encoding of length `width()` back to a native value.
    pub fn denormalize(&self, encoded: &[f64]) -> Result<Value, FieldError> {
        match self {
            Field::Continuous(f) => f.denormalize(encoded).map(Value::Continuous),
            Field::Discrete(f) => f.denormalize(encoded).map(Value::Categorical),
            Field::Bit(f) => f.denormalize(encoded).map(Value::Integer),
        }
    }

    fn expected_value(&self) -> &'static str {
        match self {
            Field::Continuous(_) => "continuous",
            Field::Discrete(_) => "categorical",
            Field::Bit(_) => "integer",
        }
    }
}

impl From<ContinuousField> for Field {
    fn from(field: ContinuousField) -> Self {
        Field::Continuous(field)
    }
}

impl From<DiscreteField> for Field {
    fn from(field: DiscreteField) -> Self {
        Field::Discrete(field)
    }
}

impl From<BitField> for Field {
    fn from(field: BitField) -> Self {
        Field::Bit(field)
    }
}

/// Ordered collection of uniquely-named fields.
///
/// # Example
/// ```
/// use fieldcodec::{ContinuousField, DiscreteField, Normalization, Schema, Value};
///
/// let mut schema = Schema::new();
/// schema.push(ContinuousField::new("len", 0.0, 10.0, Normalization::ZeroOne)?)?;
/// schema.push(DiscreteField::new("proto", vec!["tcp".into(), "udp".into()])?)?;
///
/// let record = [Value::Continuous(vec![5.0]), Value::Categorical("udp".into())];
/// let encoded = schema.normalize_record(&record)?;
/// assert_eq!(encoded, vec![0.5, 0.0, 1.0]);
/// assert_eq!(schema.denormalize_record(&encoded)?, record);
/// # Ok::<(), fieldcodec::FieldError>(())
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field in column order.
    ///
    /// # Errors
    /// Returns [`FieldError::InvalidParameter`] if a field with the same name
    /// is already present.
    pub fn push(&mut self, field: impl Into<Field>) -> Result<(), FieldError> {
        let field = field.into();
        if self.fields.iter().any(|f| f.name() == field.name()) {
            return Err(FieldError::InvalidParameter(format!(
                "duplicate field name '{}'",
                field.name()
            )));
        }
        self.fields.push(field);
        Ok(())
    }

    /// Fields in column order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Sum of all field widths: the length of one encoded record.
    pub fn total_width(&self) -> usize {
        self.fields.iter().map(Field::width).sum()
    }

    /// Descriptors for every encoded channel, in field order.
    pub fn describe(&self) -> Vec<OutputDescriptor> {
        self.fields.iter().flat_map(Field::describe).collect()
    }

    /// Encode one record: the concatenation of each field's encoding.
    ///
    /// # Errors
    /// Returns [`FieldError::LengthMismatch`] if the record does not have one
    /// value per field, or any per-field encoding error.
    pub fn normalize_record(&self, record: &[Value]) -> Result<Vec<f64>, FieldError> {
        if record.len() != self.fields.len() {
            return Err(FieldError::LengthMismatch {
                expected: self.fields.len(),
                got: record.len(),
            });
        }
        let mut encoded = Vec::with_capacity(self.total_width());
        for (field, value) in self.fields.iter().zip(record) {
            encoded.extend(field.normalize(value)?);
        }
        Ok(encoded)
    }

    /// Decode one encoded record, splitting by field widths.
    ///
    /// # Errors
    /// Returns [`FieldError::LengthMismatch`] if `encoded` is not exactly
    /// [`total_width`](Self::total_width) long, or any per-field decode error.
    pub fn denormalize_record(&self, encoded: &[f64]) -> Result<Vec<Value>, FieldError> {
        if encoded.len() != self.total_width() {
            return Err(FieldError::LengthMismatch {
                expected: self.total_width(),
                got: encoded.len(),
            });
        }
        let mut values = Vec::with_capacity(self.fields.len());
        let mut offset = 0;
        for field in &self.fields {
            let end = offset + field.width();
            values.push(field.denormalize(&encoded[offset..end])?);
            offset = end;
        }
        Ok(values)
    }

    /// Save the schema to a file.
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), FieldError> {
        let bytes = bincode::serialize(self)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load a schema from a file.
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, FieldError> {
        let bytes = std::fs::read(path)?;
        Ok(bincode::deserialize(&bytes)?)
    }
}
