#![forbid(unsafe_code)]

//! The row data model.
//!
//! The engine itself only ever needs a row's stable identity and ordinal
//! position; [`Row`] is the concrete record hosts typically display, with
//! the price kept as a decimal string (display data, never arithmetic).

/// Stable row identity, assigned once at creation and never reused.
///
/// Hosts use this as the rendering key so a reused display node tracks
/// the same logical row across window shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowId(pub u64);

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable row record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    /// Stable identity.
    pub id: RowId,
    /// Free-form description text.
    pub description: String,
    /// Price as a decimal string, e.g. `"12.50"`.
    pub price: String,
}

impl Row {
    /// Create a row record.
    #[must_use]
    pub fn new(id: RowId, description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            price: price.into(),
        }
    }
}
