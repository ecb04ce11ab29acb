//! SignSpeak Web - custom hand-gesture recognition core
//!
//! WASM module behind the SignSpeak page: MediaPipe hand landmarks come in
//! from JavaScript, recognized gesture labels and the composed sentence go
//! back out. Entry points live in `bridge`; the recognition math, gesture
//! store and commit logic are plain Rust and testable off the browser.

mod bridge;
pub mod commit;
pub mod recognizer;
pub mod store;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    clear_hand_landmarks, clear_sentence, delete_gesture, export_gestures, gesture_count,
    gesture_labels, get_current_label, get_hint_label, get_hint_score, get_history,
    get_sentence_text, get_sentence_words, hand_near_edge, import_gestures, is_hold_active,
    load_saved_gestures, process_frame, save_gesture, set_debounce_ms, set_hold_active,
    set_match_thresholds, update_hand_landmarks,
};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!("SignSpeak core ready");
}
