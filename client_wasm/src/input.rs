//! Keyboard input handling

use game_core::{Control, InputState};
use web_sys::KeyboardEvent;

/// Handle key down event. Returns true if the key is a game control.
pub fn handle_key_down(key: &str, input: &mut InputState) -> bool {
    set_key(key, input, true)
}

/// Handle key up event. Returns true if the key is a game control.
pub fn handle_key_up(key: &str, input: &mut InputState) -> bool {
    set_key(key, input, false)
}

fn set_key(key: &str, input: &mut InputState, pressed: bool) -> bool {
    match Control::from_key(key) {
        Some(control) => {
            input.set_pressed(control, pressed);
            true
        }
        None => false,
    }
}

/// Extract key from keyboard event
pub fn get_key_from_event(event: &KeyboardEvent) -> String {
    event.key()
}
