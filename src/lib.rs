//! # fieldcodec
//!
//! Field-level codecs between heterogeneous tabular values and the uniform
//! numeric encoding a downstream generative model consumes, and back again.
//!
//! ## Core Design Principles
//!
//! - **Bidirectional by contract**: every field owns a deterministic
//!   `normalize`/`denormalize` pair; decoding an encoding of a valid native
//!   value reconstructs it (exactly for discrete and bit fields, up to
//!   floating-point rounding for continuous fields).
//! - **Immutable configuration**: fields never change after construction, so
//!   every operation is a pure function and safe to run concurrently.
//! - **Typed failures**: dimension, length, range, and configuration problems
//!   surface as [`FieldError`] variants, never as NaN/Inf results or silent
//!   truncation.
//! - **Shape metadata up front**: `describe()` reports each encoded channel's
//!   kind and width so a model-construction layer can size its output heads
//!   before seeing any data.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcodec::{
//!     BitField, ContinuousField, DiscreteField, FieldCodec, Normalization, Schema, Value,
//! };
//!
//! // One field per dataset column.
//! let mut schema = Schema::new();
//! schema.push(ContinuousField::new("pkt_len", 0.0, 1500.0, Normalization::ZeroOne)?)?;
//! schema.push(DiscreteField::new("proto", vec!["tcp".into(), "udp".into(), "icmp".into()])?)?;
//! schema.push(BitField::new("tos", 8)?)?;
//!
//! // Model-construction time: learn output shapes.
//! let descriptors = schema.describe();
//! assert_eq!(descriptors.iter().map(|d| d.width()).sum::<usize>(), schema.total_width());
//!
//! // Preprocessing: native record -> model-ready vector -> native record.
//! let record = [
//!     Value::Continuous(vec![750.0]),
//!     Value::Categorical("udp".into()),
//!     Value::Integer(0b1010_0001),
//! ];
//! let encoded = schema.normalize_record(&record)?;
//! assert_eq!(schema.denormalize_record(&encoded)?, record);
//! # Ok::<(), fieldcodec::FieldError>(())
//! ```
//!
//! ## Module Structure
//!
//! - `field` — the [`FieldCodec`] contract and the three concrete codecs
//! - `output` — [`OutputDescriptor`] shape metadata for the model layer
//! - `schema` — ordered field collections, record codecs, persistence
//! - `error` — the [`FieldError`] enum

/// Error types for field encoding and decoding.
pub mod error;

/// Field codecs between native tabular values and numeric encodings.
pub mod field;

/// Output descriptors consumed by the model-construction layer.
pub mod output;

/// Schemas: ordered field collections and record-level codecs.
pub mod schema;

pub use error::FieldError;
pub use field::{BitField, ContinuousField, DiscreteField, FieldCodec};
pub use output::{Normalization, OutputDescriptor, OutputKind};
pub use schema::{Field, Schema, Value};
