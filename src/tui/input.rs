// Input handling system with configurable key behaviors
//
// Terminals differ in whether they deliver key release events; without
// them a held key arrives as a stream of Press events. Each key is
// therefore classified: action keys trigger once per press (with a
// debounce for release-less terminals), navigation keys repeat while
// held after an initial delay.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Debounce window for state-change keys on release-less terminals
const STATE_CHANGE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Trigger once per press. Use for: Enter, Esc, copy, quit.
    StateChange,

    /// Trigger on press, then repeat after an initial delay.
    /// Use for: arrows, paging, vim navigation.
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Standard navigation key behavior (like arrow keys)
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(500),
            repeat_interval: Duration::from_millis(50),
        }
    }

    /// Fast navigation (for PageUp/PageDown)
    pub fn fast_navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(300),
            repeat_interval: Duration::from_millis(30),
        }
    }
}

/// Tracks the press state of a single key
#[derive(Debug, Default)]
struct KeyState {
    is_pressed: bool,
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
}

/// Input handler that manages key behaviors
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    /// Configure multiple keys with the same behavior
    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.key_behaviors.insert(*key, behavior);
        }
    }

    /// Handle a key press event.
    /// Returns true if the action should be triggered.
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        let now = Instant::now();
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);

        let state = self.key_states.entry(key).or_default();

        if !state.is_pressed {
            // New press always triggers
            state.is_pressed = true;
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            return true;
        }

        // Key still held (or terminal never sent a release)
        match behavior {
            KeyBehavior::StateChange => {
                // Re-trigger only after the debounce window, which covers
                // terminals that report holds as repeated presses
                if let Some(last) = state.last_triggered {
                    if now.duration_since(last) >= STATE_CHANGE_DEBOUNCE {
                        state.last_triggered = Some(now);
                        return true;
                    }
                }
                false
            }
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => {
                if let (Some(press_start), Some(last_trigger)) =
                    (state.press_started, state.last_triggered)
                {
                    if now.duration_since(press_start) >= initial_delay
                        && now.duration_since(last_trigger) >= repeat_interval
                    {
                        state.last_triggered = Some(now);
                        return true;
                    }
                }
                false
            }
        }
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            *state = KeyState::default();
        }
    }

    /// Key configuration for the card browser
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        // Selection / scroll movement - repeatable
        handler.configure_keys(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
            ],
            KeyBehavior::navigation(),
        );

        // Paging - fast repeatable
        handler.configure_keys(
            &[
                KeyCode::PageUp,
                KeyCode::PageDown,
                KeyCode::Home,
                KeyCode::End,
            ],
            KeyBehavior::fast_navigation(),
        );

        // Action keys - trigger once per press
        handler.configure_keys(
            &[
                KeyCode::Enter,
                KeyCode::Esc,
                KeyCode::Tab,
                KeyCode::Char(' '),
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
                KeyCode::Char('y'),
            ],
            KeyBehavior::StateChange,
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn state_change_triggers_once_per_press() {
        let mut handler = InputHandler::new();
        handler.configure_keys(&[KeyCode::Enter], KeyBehavior::StateChange);

        assert!(handler.handle_key_press(KeyCode::Enter));
        assert!(!handler.handle_key_press(KeyCode::Enter));
        assert!(!handler.handle_key_press(KeyCode::Enter));

        handler.handle_key_release(KeyCode::Enter);
        assert!(handler.handle_key_press(KeyCode::Enter));
    }

    #[test]
    fn repeatable_waits_for_initial_delay() {
        let mut handler = InputHandler::new();
        handler.configure_keys(
            &[KeyCode::Down],
            KeyBehavior::Repeatable {
                initial_delay: Duration::from_millis(50),
                repeat_interval: Duration::from_millis(20),
            },
        );

        assert!(handler.handle_key_press(KeyCode::Down));
        assert!(!handler.handle_key_press(KeyCode::Down));

        thread::sleep(Duration::from_millis(60));
        assert!(handler.handle_key_press(KeyCode::Down));

        thread::sleep(Duration::from_millis(30));
        assert!(handler.handle_key_press(KeyCode::Down));
    }

    #[test]
    fn unconfigured_key_defaults_to_state_change() {
        let mut handler = InputHandler::new();
        assert!(handler.handle_key_press(KeyCode::Char('z')));
        assert!(!handler.handle_key_press(KeyCode::Char('z')));
    }
}
