//! Keyboard input handling

use std::collections::BTreeSet;

use crate::{Buttons, FrameClock, Match, Side};

/// Game-level meaning of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
    Heading,
    PowerKick,
    Tackle,
    Ultimate,
    Pause,
}

/// Map a browser-style key name to its game meaning
pub fn key_from_name(name: &str) -> Option<Key> {
    match name {
        "ArrowLeft" | "a" | "A" => Some(Key::Left),
        "ArrowRight" | "d" | "D" => Some(Key::Right),
        "ArrowUp" | "w" | "W" => Some(Key::Jump),
        " " | "Space" => Some(Key::Heading),
        "r" | "R" => Some(Key::PowerKick),
        "f" | "F" => Some(Key::Tackle),
        "t" | "T" => Some(Key::Ultimate),
        "Escape" => Some(Key::Pause),
        _ => None,
    }
}

/// What a key event asks of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Held buttons changed
    Buttons(Buttons),
    TogglePause,
    Ignored,
}

/// Held keys of the local player
///
/// Keys are tracked one by one, so releasing one alias of a button leaves it
/// held while another alias is still down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyState {
    held: BTreeSet<String>,
}

/// Identity of a physical key: letter case follows Shift, not the key
fn physical_key(name: &str) -> String {
    if name.chars().count() == 1 {
        name.to_lowercase()
    } else {
        name.to_owned()
    }
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buttons held by any key currently down
    pub fn buttons(&self) -> Buttons {
        let mut buttons = Buttons::default();
        for key in self.held.iter().filter_map(|name| key_from_name(name)) {
            match key {
                Key::Left => buttons.left = true,
                Key::Right => buttons.right = true,
                Key::Jump => buttons.jump = true,
                Key::Heading => buttons.heading = true,
                Key::PowerKick => buttons.power_kick = true,
                Key::Tackle => buttons.tackle = true,
                Key::Ultimate => buttons.ultimate = true,
                Key::Pause => {}
            }
        }
        buttons
    }

    /// Handle key down (`pressed`) or key up
    pub fn handle_key(&mut self, name: &str, pressed: bool) -> InputOutcome {
        let Some(key) = key_from_name(name) else {
            return InputOutcome::Ignored;
        };
        if key == Key::Pause {
            return if pressed {
                InputOutcome::TogglePause
            } else {
                InputOutcome::Ignored
            };
        }

        let before = self.buttons();
        let physical = physical_key(name);
        if pressed {
            self.held.insert(physical);
        } else {
            self.held.remove(&physical);
        }

        // Key repeat, or another key already holds the button
        let after = self.buttons();
        if after == before {
            return InputOutcome::Ignored;
        }
        InputOutcome::Buttons(after)
    }
}

/// Route a local key event to the match and the frame clock
pub fn route_key(
    m: &mut Match,
    clock: &mut FrameClock,
    keys: &mut KeyState,
    side: Side,
    name: &str,
    pressed: bool,
) -> InputOutcome {
    let outcome = keys.handle_key(name, pressed);
    match outcome {
        InputOutcome::Buttons(buttons) => m.set_buttons(side, buttons),
        InputOutcome::TogglePause => {
            clock.toggle_pause();
        }
        InputOutcome::Ignored => {}
    }
    outcome
}
