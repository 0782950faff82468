//! Output descriptors consumed by the model-construction layer.
//!
//! Every field reports the shape of its encoding through one or more
//! [`OutputDescriptor`] values. The model layer uses them to size its output
//! heads; this module carries no behavior beyond construction and accessors.

use serde::{Deserialize, Serialize};

/// Target range of a continuous encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Normalization {
    /// Scale into `[0, 1]`.
    ZeroOne,
    /// Scale into `[-1, 1]`.
    MinusOneOne,
}

/// Kind of numeric channel a descriptor covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputKind {
    /// Real-valued channel produced by range scaling.
    Continuous,
    /// One-hot categorical channel.
    Discrete,
}

/// Shape metadata for one encoded channel.
///
/// Immutable value constructed fresh on each `describe()` call. The
/// normalization mode is present exactly when the channel is continuous.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputDescriptor {
    kind: OutputKind,
    width: usize,
    normalization: Option<Normalization>,
}

impl OutputDescriptor {
    /// Descriptor for a continuous channel of `width` scalar slots.
    pub fn continuous(width: usize, normalization: Normalization) -> Self {
        Self {
            kind: OutputKind::Continuous,
            width,
            normalization: Some(normalization),
        }
    }

    /// Descriptor for a one-hot channel over `width` categories.
    pub fn discrete(width: usize) -> Self {
        Self {
            kind: OutputKind::Discrete,
            width,
            normalization: None,
        }
    }

    /// Channel kind.
    pub fn kind(&self) -> OutputKind {
        self.kind
    }

    /// Number of numeric slots this channel occupies.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Normalization mode; `Some` only for continuous channels.
    pub fn normalization(&self) -> Option<Normalization> {
        self.normalization
    }
}
