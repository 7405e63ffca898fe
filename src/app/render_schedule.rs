//! Pure functions for calculating animation deadlines.
//!
//! The event loop sleeps until the returned instant and then sends a Tick.

use std::time::{Duration, Instant};

use crate::input_mode::InputMode;
use crate::state::AppState;

const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Returns `None` when nothing on screen changes without input.
pub fn next_animation_deadline(state: &AppState, now: Instant) -> Option<Instant> {
    let message = state.messages.expires_at();
    let blink = has_blinking_cursor(state).then(|| now + CURSOR_BLINK_INTERVAL);

    match (message, blink) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn has_blinking_cursor(state: &AppState) -> bool {
    state.input_mode() == InputMode::TextEntry
}
