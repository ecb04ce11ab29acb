//! Pose dissimilarity - RMS distance between corresponding landmarks
//!
//! Lower is more similar; 0 means identical poses. Point counts always
//! agree because both operands are fixed-length normalized poses.

use super::normalize::{NormalizedPose, POINT_COUNT};

/// Root-mean-square Euclidean distance between corresponding points:
/// `sqrt(mean_i((ax_i-bx_i)² + (ay_i-by_i)²))`
pub fn rms_distance(a: &NormalizedPose, b: &NormalizedPose) -> f32 {
    let mut total = 0.0f32;
    for (pa, pb) in a.points().iter().zip(b.points().iter()) {
        let dx = pa.x - pb.x;
        let dy = pa.y - pb.y;
        total += dx * dx + dy * dy;
    }
    (total / POINT_COUNT as f32).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::normalize::{normalize, LandmarkPoint, Pose};

    fn pose(step_x: f32, step_y: f32) -> NormalizedPose {
        let mut raw: Pose = [LandmarkPoint::default(); POINT_COUNT];
        for (i, p) in raw.iter_mut().enumerate() {
            p.x = 0.5 + step_x * i as f32;
            p.y = 0.5 + step_y * i as f32;
        }
        normalize(&raw).unwrap()
    }

    #[test]
    fn test_self_distance_is_zero() {
        let a = pose(0.01, -0.015);
        assert_eq!(rms_distance(&a, &a), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = pose(0.01, -0.015);
        let b = pose(-0.012, 0.008);
        assert!((rms_distance(&a, &b) - rms_distance(&b, &a)).abs() < 1e-7);
    }

    #[test]
    fn test_known_offset() {
        // Two poses differing by a constant (0.1, 0.0) at every point
        // have RMS distance exactly 0.1.
        let a = pose(0.01, -0.015);
        let mut shifted = *a.points();
        for p in shifted.iter_mut() {
            p.x += 0.1;
        }
        let b = NormalizedPose::from_points(shifted);
        assert!((rms_distance(&a, &b) - 0.1).abs() < 1e-6);
    }
}
