//! Bridge module - JS <-> Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod recognizer_integration;
mod store_io;

pub use landmarks::{
    // WASM entry points
    update_hand_landmarks,
    clear_hand_landmarks,
    hand_near_edge,
    // Internal API
    latest_pose,
};

pub use recognizer_integration::{
    process_frame,
    set_hold_active,
    is_hold_active,
    get_current_label,
    get_hint_label,
    get_hint_score,
    get_history,
    get_sentence_words,
    get_sentence_text,
    clear_sentence,
    set_match_thresholds,
    set_debounce_ms,
};

pub use store_io::{
    save_gesture,
    delete_gesture,
    gesture_labels,
    gesture_count,
    export_gestures,
    import_gestures,
    load_saved_gestures,
    // Internal API
    with_store,
};
