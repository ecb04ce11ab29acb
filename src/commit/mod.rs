//! Commit controller - turns per-frame recognitions into sentence entries
//!
//! A recognized label only enters the sentence when all of these hold:
//! - it differs from the last committed label (a held gesture fires once)
//! - the debounce window since the last commit has elapsed
//! - the user is holding the activation key (deliberate composition, not
//!   browsing or testing gestures)
//!
//! Evaluated once per processed frame with the frame's recognition result
//! and timestamp. Clearing the sentence intentionally leaves the last
//! committed label and timestamp alone, so debounce and repeat suppression
//! stay continuous across a clear.

/// Minimum time between two commits, regardless of label
pub const DEFAULT_DEBOUNCE_MS: f64 = 1000.0;

/// Outcome of feeding one frame into the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitDecision {
    /// Label appended to the sentence
    Committed,
    /// Nothing was recognized this frame
    NoGesture,
    /// Same label as the last commit
    RepeatedLabel,
    /// Inside the debounce window since the last commit
    Debounced,
    /// Activation key not held
    HoldInactive,
}

/// Per-session commit state machine. Owns the sentence buffer.
pub struct CommitController {
    last_label: String,
    last_commit_ms: f64,
    hold_active: bool,
    debounce_ms: f64,
    sentence: Vec<String>,
}

impl CommitController {
    pub fn new() -> Self {
        Self {
            last_label: String::new(),
            last_commit_ms: f64::NEG_INFINITY,
            hold_active: false,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            sentence: Vec::new(),
        }
    }

    /// Feed one frame's recognition result. Rules apply in order; the first
    /// that matches decides the frame.
    pub fn observe(&mut self, recognized: Option<&str>, now_ms: f64) -> CommitDecision {
        let label = match recognized {
            Some(label) => label,
            None => return CommitDecision::NoGesture,
        };
        if label == self.last_label {
            return CommitDecision::RepeatedLabel;
        }
        if now_ms - self.last_commit_ms < self.debounce_ms {
            return CommitDecision::Debounced;
        }
        if !self.hold_active {
            return CommitDecision::HoldInactive;
        }

        self.sentence.push(label.to_string());
        self.last_label = label.to_string();
        self.last_commit_ms = now_ms;
        CommitDecision::Committed
    }

    /// Level of the hold-to-commit key, toggled by press/release events
    pub fn set_hold(&mut self, active: bool) {
        self.hold_active = active;
    }

    pub fn hold_active(&self) -> bool {
        self.hold_active
    }

    pub fn sentence(&self) -> &[String] {
        &self.sentence
    }

    /// Space-joined sentence (what the speech synthesizer reads)
    pub fn sentence_text(&self) -> String {
        self.sentence.join(" ")
    }

    /// Empty the sentence. Does NOT reset commit state: an immediately
    /// re-recognized gesture is still treated as a repeat.
    pub fn clear_sentence(&mut self) {
        self.sentence.clear();
    }

    pub fn set_debounce_ms(&mut self, ms: f64) -> bool {
        if !ms.is_finite() || ms < 0.0 {
            return false;
        }
        self.debounce_ms = ms;
        true
    }
}

impl Default for CommitController {
    fn default() -> Self {
        Self::new()
    }
}
