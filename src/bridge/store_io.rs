//! Store I/O - save/delete/import/export of trained gestures
//!
//! The store lives here for the session; JavaScript persists the serialized
//! form (optionally encrypted with WebCrypto) after every mutation and feeds
//! it back through `load_saved_gestures` on startup. Export and persistence
//! share one JSON format, so downloaded gesture files import cleanly.

use crate::recognizer::normalize;
use crate::store::GestureStore;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::landmarks::latest_pose;

thread_local! {
    static STORE: RefCell<GestureStore> = RefCell::new(GestureStore::new());
}

/// Read access for the frame pipeline
pub fn with_store<R>(f: impl FnOnce(&GestureStore) -> R) -> R {
    STORE.with(|store_cell| f(&store_cell.borrow()))
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Save the currently visible hand pose under `label`.
/// Fails when the label is blank, no hand is visible, or the pose is too
/// degenerate to normalize.
#[wasm_bindgen]
pub fn save_gesture(label: &str) -> Result<(), JsValue> {
    let label = label.trim();
    if label.is_empty() {
        return Err(JsValue::from_str("gesture name is empty"));
    }
    let pose = latest_pose().ok_or_else(|| JsValue::from_str("no hand visible"))?;
    let template = normalize(&pose).map_err(|e| JsValue::from_str(&e.to_string()))?;

    STORE.with(|store_cell| {
        store_cell.borrow_mut().add(label, template);
    });
    web_sys::console::log_1(&format!("Saved gesture \"{}\"", label).into());
    Ok(())
}

/// Delete the gesture at `index` (as listed by `gesture_labels`).
/// Returns the removed label for the confirmation toast.
#[wasm_bindgen]
pub fn delete_gesture(index: usize) -> Result<String, JsValue> {
    STORE.with(|store_cell| {
        store_cell
            .borrow_mut()
            .delete_at(index)
            .map(|e| e.label)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

/// Labels in insertion order, for the saved-gestures panel
#[wasm_bindgen]
pub fn gesture_labels() -> Vec<String> {
    STORE.with(|store_cell| store_cell.borrow().labels())
}

#[wasm_bindgen]
pub fn gesture_count() -> usize {
    STORE.with(|store_cell| store_cell.borrow().len())
}

/// Serialize the store. Used for both persistence and file download.
#[wasm_bindgen]
pub fn export_gestures() -> Result<String, JsValue> {
    STORE.with(|store_cell| {
        store_cell
            .borrow()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

/// Replace the store with an uploaded gesture file. Strict and atomic: one
/// malformed record rejects the whole file and the current set is kept.
/// Returns the number of gestures imported.
#[wasm_bindgen]
pub fn import_gestures(json: &str) -> Result<usize, JsValue> {
    STORE.with(|store_cell| {
        store_cell
            .borrow_mut()
            .import_json(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

/// Startup load from persistence. Lenient: corrupted or tampered data logs a
/// warning and the session continues with an empty store rather than failing.
/// Returns the number of gestures loaded.
#[wasm_bindgen]
pub fn load_saved_gestures(json: &str) -> usize {
    STORE.with(|store_cell| {
        match GestureStore::from_json(json) {
            Ok(store) => {
                let count = store.len();
                *store_cell.borrow_mut() = store;
                web_sys::console::log_1(&format!("Loaded {} saved gestures", count).into());
                count
            }
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("Failed to load saved gestures, starting empty: {}", e).into(),
                );
                0
            }
        }
    })
}
