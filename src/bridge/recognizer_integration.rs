//! Recognizer integration - per-frame pipeline and session state
//!
//! Runs normalize -> match -> commit once per video frame and exposes the
//! frame's outputs (display label, best-guess hint, history, sentence) for
//! the page to render. One frame is fully processed before the next arrives,
//! so plain thread-local state is enough.

use crate::commit::CommitController;
use crate::recognizer::{best_match, normalize, MatchConfig, RecognitionHistory};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::landmarks::latest_pose;
use super::store_io::with_store;

/// Display label when nothing is recognized confidently
const UNKNOWN_LABEL: &str = "Unknown";

struct RecognizerState {
    config: MatchConfig,
    controller: CommitController,
    history: RecognitionHistory,
    current_label: String,
    hint_label: String,
    hint_score: f32,
}

impl Default for RecognizerState {
    fn default() -> Self {
        Self {
            config: MatchConfig::default(),
            controller: CommitController::new(),
            history: RecognitionHistory::new(),
            current_label: UNKNOWN_LABEL.to_string(),
            hint_label: String::new(),
            hint_score: 0.0,
        }
    }
}

thread_local! {
    static RECOGNIZER_STATE: RefCell<RecognizerState> = RefCell::new(RecognizerState::default());
}

// ============================================================================
// FRAME PIPELINE
// ============================================================================

/// Process the latest pose through the full pipeline. Called once per frame
/// after `update_hand_landmarks`; returns the display label.
///
/// Degenerate poses (estimation noise) skip the frame without touching any
/// state - they must never stall the loop.
#[wasm_bindgen]
pub fn process_frame() -> String {
    let pose = match latest_pose() {
        Some(pose) => pose,
        // No hand this frame: nothing to process.
        None => return current_state_label(),
    };

    let live = match normalize(&pose) {
        Ok(live) => live,
        Err(e) => {
            web_sys::console::warn_1(&format!("Skipping frame: {}", e).into());
            return current_state_label();
        }
    };

    let now = js_sys::Date::now();

    RECOGNIZER_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();

        let best = with_store(|store| {
            best_match(&live, store.exemplars())
                .map(|b| (b.label.to_string(), b.score))
        });

        let mut recognized: Option<String> = None;
        state.hint_label.clear();
        state.hint_score = 0.0;
        if let Some((label, score)) = best {
            if state.config.is_hint(score) {
                state.hint_label = label.clone();
                state.hint_score = score;
            }
            if state.config.is_commit(score) {
                recognized = Some(label);
            }
        }

        state.controller.observe(recognized.as_deref(), now);

        let display = recognized.unwrap_or_else(|| UNKNOWN_LABEL.to_string());
        state.history.push(&display);
        state.current_label = display.clone();
        display
    })
}

fn current_state_label() -> String {
    RECOGNIZER_STATE.with(|state_cell| state_cell.borrow().current_label.clone())
}

// ============================================================================
// HOLD-TO-COMMIT SIGNAL
// ============================================================================

/// Level of the activation key, driven by keydown/keyup on the page
#[wasm_bindgen]
pub fn set_hold_active(active: bool) {
    RECOGNIZER_STATE.with(|state_cell| {
        state_cell.borrow_mut().controller.set_hold(active);
    });
}

#[wasm_bindgen]
pub fn is_hold_active() -> bool {
    RECOGNIZER_STATE.with(|state_cell| state_cell.borrow().controller.hold_active())
}

// ============================================================================
// FRAME OUTPUTS
// ============================================================================

/// Display label of the most recently processed frame
#[wasm_bindgen]
pub fn get_current_label() -> String {
    current_state_label()
}

/// Best-guess label under the hint threshold, empty when there is none
#[wasm_bindgen]
pub fn get_hint_label() -> String {
    RECOGNIZER_STATE.with(|state_cell| state_cell.borrow().hint_label.clone())
}

/// Score of the current best guess (only meaningful when a hint label is set)
#[wasm_bindgen]
pub fn get_hint_score() -> f32 {
    RECOGNIZER_STATE.with(|state_cell| state_cell.borrow().hint_score)
}

/// Last 5 display labels, most recent first
#[wasm_bindgen]
pub fn get_history() -> Vec<String> {
    RECOGNIZER_STATE.with(|state_cell| state_cell.borrow().history.labels())
}

/// Committed labels in order
#[wasm_bindgen]
pub fn get_sentence_words() -> Vec<String> {
    RECOGNIZER_STATE.with(|state_cell| state_cell.borrow().controller.sentence().to_vec())
}

/// Space-joined sentence for speech synthesis and the clipboard
#[wasm_bindgen]
pub fn get_sentence_text() -> String {
    RECOGNIZER_STATE.with(|state_cell| state_cell.borrow().controller.sentence_text())
}

/// Empty the sentence. Commit debounce state deliberately survives this.
#[wasm_bindgen]
pub fn clear_sentence() {
    RECOGNIZER_STATE.with(|state_cell| {
        state_cell.borrow_mut().controller.clear_sentence();
    });
}

// ============================================================================
// TUNING
// ============================================================================

/// Adjust the recognition thresholds. Invalid pairs (commit >= hint,
/// non-finite, non-positive) are ignored with a console warning.
#[wasm_bindgen]
pub fn set_match_thresholds(commit: f32, hint: f32) {
    RECOGNIZER_STATE.with(|state_cell| {
        if !state_cell.borrow_mut().config.set_thresholds(commit, hint) {
            web_sys::console::warn_1(
                &format!("Ignoring invalid thresholds: commit={} hint={}", commit, hint).into(),
            );
        }
    });
}

/// Adjust the minimum time between two commits
#[wasm_bindgen]
pub fn set_debounce_ms(ms: f64) {
    RECOGNIZER_STATE.with(|state_cell| {
        if !state_cell.borrow_mut().controller.set_debounce_ms(ms) {
            web_sys::console::warn_1(&format!("Ignoring invalid debounce: {} ms", ms).into());
        }
    });
}
