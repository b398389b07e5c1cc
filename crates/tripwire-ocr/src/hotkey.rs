use device_query::{DeviceQuery, DeviceState, Keycode};
use tripwire_core::StopSignal;

/// Polls global keyboard and cursor state
pub struct KeyWatcher {
    device: DeviceState,
}

impl KeyWatcher {
    pub fn new() -> Self {
        Self {
            device: DeviceState::new(),
        }
    }

    /// Check if `key` is held right now (non-blocking)
    pub fn is_pressed(&self, key: Keycode) -> bool {
        self.device.get_keys().contains(&key)
    }

    pub fn cursor_position(&self) -> (i32, i32) {
        self.device.get_mouse().coords
    }
}

impl Default for KeyWatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Stop signal raised by the Escape key
pub struct EscapeStop {
    keys: KeyWatcher,
}

impl EscapeStop {
    pub fn new(keys: KeyWatcher) -> Self {
        Self { keys }
    }
}

impl StopSignal for EscapeStop {
    fn should_stop(&mut self) -> bool {
        self.keys.is_pressed(Keycode::Escape)
    }
}
