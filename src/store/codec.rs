//! JSON codec for the gesture store
//!
//! Wire format, shared by persistence, export and import:
//! `[{"label": "...", "landmarks": [{"x": 0.1, "y": 0.2}, ...]}]`
//! Each record needs exactly 21 finite landmark points; import rejects the
//! whole batch on the first malformed record so a failed import never leaves
//! a half-replaced store behind.

use super::{Exemplar, StoreError};
use crate::recognizer::{LandmarkPoint, NormalizedPose, POINT_COUNT};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct GestureRecord {
    label: String,
    landmarks: Vec<LandmarkPoint>,
}

pub fn encode(exemplars: &[Exemplar]) -> Result<String, StoreError> {
    let records: Vec<GestureRecord> = exemplars
        .iter()
        .map(|e| GestureRecord {
            label: e.label.clone(),
            landmarks: e.template.points().to_vec(),
        })
        .collect();
    serde_json::to_string(&records).map_err(|e| StoreError::Validation(e.to_string()))
}

pub fn decode(json: &str) -> Result<Vec<Exemplar>, StoreError> {
    let records: Vec<GestureRecord> =
        serde_json::from_str(json).map_err(|e| StoreError::Validation(e.to_string()))?;

    let mut exemplars = Vec::with_capacity(records.len());
    for (i, record) in records.into_iter().enumerate() {
        if record.landmarks.len() != POINT_COUNT {
            return Err(StoreError::Validation(format!(
                "gesture {} (\"{}\") has {} landmark points, expected {}",
                i,
                record.label,
                record.landmarks.len(),
                POINT_COUNT
            )));
        }
        if record
            .landmarks
            .iter()
            .any(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(StoreError::Validation(format!(
                "gesture {} (\"{}\") has non-finite landmark coordinates",
                i, record.label
            )));
        }
        let mut points = [LandmarkPoint::default(); POINT_COUNT];
        points.copy_from_slice(&record.landmarks);
        exemplars.push(Exemplar {
            label: record.label,
            template: NormalizedPose::from_points(points),
        });
    }
    Ok(exemplars)
}
