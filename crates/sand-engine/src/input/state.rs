use super::types::{ButtonState, InputCode, InputEvent, INPUT_CODE_COUNT};

/// Per-code input flags for one window.
///
/// `down` tracks whether a key/button is held. `consumed` marks that the
/// current press was already acted upon; releasing clears both.
#[derive(Debug, Clone)]
pub struct InputTable {
    down: [bool; INPUT_CODE_COUNT],
    consumed: [bool; INPUT_CODE_COUNT],
}

impl Default for InputTable {
    fn default() -> Self {
        Self {
            down: [false; INPUT_CODE_COUNT],
            consumed: [false; INPUT_CODE_COUNT],
        }
    }
}

impl InputTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an input event. Events without an input slot are ignored.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        if let InputEvent::Focused(false) = ev {
            // Releases are not delivered to an unfocused window.
            self.clear();
            return;
        }

        match ev.transition() {
            Some((code, ButtonState::Pressed)) => self.press(code),
            Some((code, ButtonState::Released)) => self.release(code),
            None => {}
        }
    }

    pub fn press(&mut self, code: InputCode) {
        self.down[code.index()] = true;
    }

    pub fn release(&mut self, code: InputCode) {
        self.down[code.index()] = false;
        self.consumed[code.index()] = false;
    }

    #[inline]
    pub fn is_down(&self, code: InputCode) -> bool {
        self.down[code.index()]
    }

    #[inline]
    pub fn is_consumed(&self, code: InputCode) -> bool {
        self.consumed[code.index()]
    }

    /// Returns `true` once per press: the first call while held marks it consumed.
    pub fn take_press(&mut self, code: InputCode) -> bool {
        let i = code.index();
        if self.down[i] && !self.consumed[i] {
            self.consumed[i] = true;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.down = [false; INPUT_CODE_COUNT];
        self.consumed = [false; INPUT_CODE_COUNT];
    }
}
