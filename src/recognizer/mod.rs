//! Recognizer module - pose normalization and gesture matching
//!
//! Re-exports only. All logic in submodules.

mod distance;
mod history;
mod matcher;
mod normalize;

pub use distance::rms_distance;
pub use history::{RecognitionHistory, HISTORY_LEN};
pub use matcher::{
    best_match, BestMatch, MatchConfig, DEFAULT_COMMIT_THRESHOLD, DEFAULT_HINT_THRESHOLD,
};
pub use normalize::{normalize, LandmarkPoint, NormalizedPose, Pose, PoseError, POINT_COUNT, WRIST};
