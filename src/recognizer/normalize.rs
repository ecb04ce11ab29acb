//! Pose normalization - translation and scale invariant hand poses
//!
//! Raw MediaPipe landmarks arrive in image coordinates, so the same gesture
//! looks different depending on where the hand sits in the frame and how far
//! it is from the camera. Normalization removes both effects:
//! - Translate so the wrist (landmark 0) is the origin
//! - Scale so the farthest landmark sits at distance 1 from the wrist

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of landmarks in the MediaPipe hand topology
pub const POINT_COUNT: usize = 21;

/// Wrist landmark index (the normalization root)
pub const WRIST: usize = 0;

/// A single 2D landmark point (normalized image coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
}

impl LandmarkPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from the origin
    pub fn norm(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// One detected hand in one frame, in raw image coordinates.
/// Landmark order is anatomical and must never be reordered.
pub type Pose = [LandmarkPoint; POINT_COUNT];

/// A pose with translation and scale removed.
///
/// Guaranteed by construction: point 0 is exactly (0,0) and the maximum
/// distance from the origin over all points is 1 (up to f32 rounding).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedPose {
    points: Pose,
}

impl NormalizedPose {
    /// Wrap already-validated points (used by the store codec after it has
    /// checked point count and finiteness of imported data).
    pub fn from_points(points: Pose) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &Pose {
        &self.points
    }
}

/// Rejected landmark input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PoseError {
    #[error("landmark coordinates are not finite")]
    NonFinite,
    #[error("degenerate pose: all landmarks coincide with the wrist")]
    ZeroScale,
}

/// Scales below this are treated as a single-pixel degenerate detection
const MIN_SCALE: f32 = 1e-6;

/// Normalize a raw pose into a position- and size-invariant one.
///
/// Degenerate input (non-finite coordinates, or every landmark on top of the
/// wrist) is rejected here rather than letting NaN/Infinity flow into the
/// matcher. Callers skip the frame on error.
pub fn normalize(pose: &Pose) -> Result<NormalizedPose, PoseError> {
    if pose.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(PoseError::NonFinite);
    }

    let root = pose[WRIST];
    let mut translated = [LandmarkPoint::default(); POINT_COUNT];
    let mut scale = 0.0f32;
    for (i, p) in pose.iter().enumerate() {
        let t = LandmarkPoint::new(p.x - root.x, p.y - root.y);
        translated[i] = t;
        scale = scale.max(t.norm());
    }

    if scale < MIN_SCALE {
        return Err(PoseError::ZeroScale);
    }

    for p in translated.iter_mut() {
        p.x /= scale;
        p.y /= scale;
    }

    Ok(NormalizedPose { points: translated })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spread_pose() -> Pose {
        let mut pose = [LandmarkPoint::default(); POINT_COUNT];
        for (i, p) in pose.iter_mut().enumerate() {
            p.x = 0.3 + 0.01 * i as f32;
            p.y = 0.5 - 0.02 * i as f32;
        }
        pose
    }

    #[test]
    fn test_wrist_maps_to_origin() {
        let norm = normalize(&spread_pose()).unwrap();
        assert_eq!(norm.points()[WRIST], LandmarkPoint::new(0.0, 0.0));
    }

    #[test]
    fn test_max_norm_is_one() {
        let norm = normalize(&spread_pose()).unwrap();
        let max = norm
            .points()
            .iter()
            .map(LandmarkPoint::norm)
            .fold(0.0f32, f32::max);
        assert!((max - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_translation_invariant() {
        let pose = spread_pose();
        let mut shifted = pose;
        for p in shifted.iter_mut() {
            p.x += 0.17;
            p.y -= 0.23;
        }
        let a = normalize(&pose).unwrap();
        let b = normalize(&shifted).unwrap();
        for (pa, pb) in a.points().iter().zip(b.points().iter()) {
            assert!((pa.x - pb.x).abs() < 1e-6);
            assert!((pa.y - pb.y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_scale_invariant() {
        let pose = spread_pose();
        let mut scaled = pose;
        for p in scaled.iter_mut() {
            p.x *= 3.5;
            p.y *= 3.5;
        }
        let a = normalize(&pose).unwrap();
        let b = normalize(&scaled).unwrap();
        for (pa, pb) in a.points().iter().zip(b.points().iter()) {
            assert!((pa.x - pb.x).abs() < 1e-5);
            assert!((pa.y - pb.y).abs() < 1e-5);
        }
    }

    #[test]
    fn test_degenerate_pose_rejected() {
        let pose = [LandmarkPoint::new(0.4, 0.4); POINT_COUNT];
        assert_eq!(normalize(&pose), Err(PoseError::ZeroScale));
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut pose = spread_pose();
        pose[7].y = f32::NAN;
        assert_eq!(normalize(&pose), Err(PoseError::NonFinite));
    }
}
