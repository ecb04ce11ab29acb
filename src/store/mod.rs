//! Gesture store - the user's trained exemplar set
//!
//! An ordered list of (label, template) pairs. Labels are free text and may
//! repeat: saving the same gesture from several angles stores several
//! exemplars under one label, which the matcher treats independently.

mod codec;

use crate::recognizer::NormalizedPose;
use thiserror::Error;

/// One trained gesture template
#[derive(Clone, Debug, PartialEq)]
pub struct Exemplar {
    pub label: String,
    pub template: NormalizedPose,
}

/// Store operation failures, surfaced to the UI layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("gesture index {index} out of range ({len} saved)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid gesture data: {0}")]
    Validation(String),
}

/// In-memory exemplar store. Insertion order is preserved for display and
/// index-based deletion; persistence happens outside via `to_json`.
#[derive(Default)]
pub struct GestureStore {
    exemplars: Vec<Exemplar>,
}

impl GestureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.exemplars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exemplars.is_empty()
    }

    pub fn exemplars(&self) -> &[Exemplar] {
        &self.exemplars
    }

    /// Labels in insertion order (for the saved-gestures panel)
    pub fn labels(&self) -> Vec<String> {
        self.exemplars.iter().map(|e| e.label.clone()).collect()
    }

    /// Append a new exemplar. Duplicate labels are allowed.
    pub fn add(&mut self, label: &str, template: NormalizedPose) {
        self.exemplars.push(Exemplar {
            label: label.to_string(),
            template,
        });
    }

    /// Remove the exemplar at `index`, returning it. The store is left
    /// unchanged when the index is out of range.
    pub fn delete_at(&mut self, index: usize) -> Result<Exemplar, StoreError> {
        if index >= self.exemplars.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.exemplars.len(),
            });
        }
        Ok(self.exemplars.remove(index))
    }

    /// Replace the whole exemplar set (used by import).
    pub fn replace_all(&mut self, exemplars: Vec<Exemplar>) {
        self.exemplars = exemplars;
    }

    /// Serialize to the portable JSON form shared by persistence and export.
    pub fn to_json(&self) -> Result<String, StoreError> {
        codec::encode(&self.exemplars)
    }

    /// Decode and atomically replace the exemplar set. One malformed record
    /// rejects the whole batch and leaves the current set untouched.
    pub fn import_json(&mut self, json: &str) -> Result<usize, StoreError> {
        let exemplars = codec::decode(json)?;
        let count = exemplars.len();
        self.replace_all(exemplars);
        Ok(count)
    }

    /// Build a store from serialized data.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(Self {
            exemplars: codec::decode(json)?,
        })
    }
}
