//! Best-match gesture lookup over the trained exemplar set
//!
//! Linear scan with a running minimum - the exemplar sets are user-trained
//! and small (tens of entries), so no index structure is needed. Ties break
//! toward the earliest-inserted exemplar: iteration follows store order and
//! the comparison is strict `<`, so the first best score wins.

use super::distance::rms_distance;
use super::normalize::NormalizedPose;
use crate::store::Exemplar;

/// Default score bound for a confident recognition (eligible to commit)
pub const DEFAULT_COMMIT_THRESHOLD: f32 = 0.2;

/// Default score bound for surfacing a "best guess" hint to the user
pub const DEFAULT_HINT_THRESHOLD: f32 = 0.5;

/// The winning exemplar of one matching pass
#[derive(Clone, Debug, PartialEq)]
pub struct BestMatch<'a> {
    /// Label of the closest exemplar
    pub label: &'a str,
    /// RMS distance to that exemplar (lower = closer)
    pub score: f32,
}

/// Find the exemplar closest to the live pose, if any exist.
pub fn best_match<'a>(live: &NormalizedPose, exemplars: &'a [Exemplar]) -> Option<BestMatch<'a>> {
    let mut best: Option<BestMatch<'a>> = None;
    for exemplar in exemplars {
        let score = rms_distance(live, &exemplar.template);
        let closer = match &best {
            Some(b) => score < b.score,
            None => true,
        };
        if closer {
            best = Some(BestMatch {
                label: &exemplar.label,
                score,
            });
        }
    }
    best
}

/// Score thresholds for turning a best match into a recognition.
///
/// Scores in [0, commit) are confident recognitions; scores in [0, hint)
/// additionally surface a best-guess hint. Invariant: commit < hint.
#[derive(Clone, Copy, Debug)]
pub struct MatchConfig {
    pub commit_threshold: f32,
    pub hint_threshold: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            commit_threshold: DEFAULT_COMMIT_THRESHOLD,
            hint_threshold: DEFAULT_HINT_THRESHOLD,
        }
    }
}

impl MatchConfig {
    /// Would this score count as a confident recognition?
    pub fn is_commit(&self, score: f32) -> bool {
        score < self.commit_threshold
    }

    /// Would this score surface a best-guess hint?
    pub fn is_hint(&self, score: f32) -> bool {
        score < self.hint_threshold
    }

    /// Replace both thresholds, keeping the commit < hint invariant.
    /// Returns false (and changes nothing) for invalid values.
    pub fn set_thresholds(&mut self, commit: f32, hint: f32) -> bool {
        if !commit.is_finite() || !hint.is_finite() || commit <= 0.0 || commit >= hint {
            return false;
        }
        self.commit_threshold = commit;
        self.hint_threshold = hint;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::normalize::{normalize, LandmarkPoint, Pose, POINT_COUNT};

    // Landmarks on a curve whose bend depends on `shape`, so different
    // shapes survive normalization as genuinely different poses.
    fn pose(shape: f32) -> NormalizedPose {
        let mut raw: Pose = [LandmarkPoint::default(); POINT_COUNT];
        for (i, p) in raw.iter_mut().enumerate() {
            let t = i as f32 / (POINT_COUNT - 1) as f32;
            p.x = 0.5 + 0.25 * t;
            p.y = 0.5 + 0.25 * (shape * t).sin();
        }
        normalize(&raw).unwrap()
    }

    fn exemplar(label: &str, template: &NormalizedPose) -> Exemplar {
        Exemplar {
            label: label.to_string(),
            template: template.clone(),
        }
    }

    #[test]
    fn test_empty_store_has_no_match() {
        let live = pose(2.0);
        assert_eq!(best_match(&live, &[]), None);
    }

    #[test]
    fn test_closest_exemplar_wins() {
        let live = pose(2.0);
        let near = pose(2.2);
        let far = pose(5.0);
        let store = vec![exemplar("B", &far), exemplar("A", &near)];

        let best = best_match(&live, &store).unwrap();
        assert_eq!(best.label, "A");
        assert!(best.score > 0.0);
        let expected = rms_distance(&live, &near);
        assert!((best.score - expected).abs() < 1e-7);
    }

    #[test]
    fn test_exact_match_scores_zero() {
        let live = pose(2.0);
        let store = vec![exemplar("fist", &live)];
        let best = best_match(&live, &store).unwrap();
        assert_eq!(best.label, "fist");
        assert_eq!(best.score, 0.0);
    }

    #[test]
    fn test_tie_breaks_to_first_inserted() {
        let live = pose(2.0);
        let template = pose(2.5);
        // Identical templates under two labels: insertion order decides.
        let store = vec![exemplar("first", &template), exemplar("second", &template)];
        assert_eq!(best_match(&live, &store).unwrap().label, "first");
    }

    #[test]
    fn test_threshold_bands() {
        let config = MatchConfig::default();
        assert!(config.is_commit(0.19) && config.is_hint(0.19));
        assert!(!config.is_commit(0.2));
        assert!(config.is_hint(0.49));
        assert!(!config.is_hint(0.5));
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let mut config = MatchConfig::default();
        assert!(!config.set_thresholds(0.5, 0.2));
        assert!(!config.set_thresholds(0.3, 0.3));
        assert!(!config.set_thresholds(f32::NAN, 0.5));
        assert!((config.commit_threshold - DEFAULT_COMMIT_THRESHOLD).abs() < 1e-7);
        assert!(config.set_thresholds(0.15, 0.4));
        assert!((config.hint_threshold - 0.4).abs() < 1e-7);
    }
}
