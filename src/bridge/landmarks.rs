//! Landmark intake - receives MediaPipe hand landmarks from JavaScript
//!
//! JS runs MediaPipe Hands and forwards each frame's 21 landmarks as a flat
//! Float32Array of 42 values (x,y pairs in [0,1] image coordinates). The
//! latest pose is held here for the frame pipeline and for "save gesture".

use crate::recognizer::{LandmarkPoint, Pose, POINT_COUNT};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

/// Expected length of the flat landmark array (21 landmarks x 2 coordinates)
const FLAT_LEN: usize = POINT_COUNT * 2;

/// Margin of the frame considered "too close to the edge" for good tracking
const EDGE_MARGIN: f32 = 0.1;

struct PoseSlot {
    pose: Pose,
    valid: bool,
}

impl Default for PoseSlot {
    fn default() -> Self {
        Self {
            pose: [LandmarkPoint::default(); POINT_COUNT],
            valid: false,
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static LATEST_POSE: RefCell<PoseSlot> = RefCell::new(PoseSlot::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript once per frame with a detected hand.
/// Expects 42 floats: x,y for each of the 21 landmarks, in topology order.
#[wasm_bindgen]
pub fn update_hand_landmarks(data: &[f32]) {
    if data.len() != FLAT_LEN {
        web_sys::console::warn_1(
            &format!(
                "Invalid landmark data length: {} (expected {})",
                data.len(),
                FLAT_LEN
            )
            .into(),
        );
        return;
    }

    LATEST_POSE.with(|slot_cell| {
        let mut slot = slot_cell.borrow_mut();
        for i in 0..POINT_COUNT {
            slot.pose[i] = LandmarkPoint::new(data[i * 2], data[i * 2 + 1]);
        }
        slot.valid = true;
    });
}

/// Called from JavaScript when no hand was detected this frame.
#[wasm_bindgen]
pub fn clear_hand_landmarks() {
    LATEST_POSE.with(|slot_cell| {
        slot_cell.borrow_mut().valid = false;
    });
}

/// True when the latest hand's bounding box leaves the central band of the
/// frame - the page toasts an "adjust hand position" hint off this.
#[wasm_bindgen]
pub fn hand_near_edge() -> bool {
    LATEST_POSE.with(|slot_cell| {
        let slot = slot_cell.borrow();
        if !slot.valid {
            return false;
        }
        slot.pose.iter().any(|p| {
            p.x < EDGE_MARGIN
                || p.x > 1.0 - EDGE_MARGIN
                || p.y < EDGE_MARGIN
                || p.y > 1.0 - EDGE_MARGIN
        })
    })
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Latest raw pose, if a hand is currently detected
pub fn latest_pose() -> Option<Pose> {
    LATEST_POSE.with(|slot_cell| {
        let slot = slot_cell.borrow();
        if slot.valid {
            Some(slot.pose)
        } else {
            None
        }
    })
}
