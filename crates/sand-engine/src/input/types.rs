/// Number of input slots. Holds every keyboard key and mouse button code.
pub const INPUT_CODE_COUNT: usize = 349;

/// Index into the input table.
///
/// Numbering follows GLFW: mouse buttons `0..8`, printable keys at their ASCII
/// value, named keys from 256 up to 348.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct InputCode(u16);

impl InputCode {
    pub const MOUSE_LEFT: Self = Self(0);
    pub const MOUSE_RIGHT: Self = Self(1);
    pub const MOUSE_MIDDLE: Self = Self(2);
    pub const MOUSE_BACK: Self = Self(3);
    pub const MOUSE_FORWARD: Self = Self(4);
    const MOUSE_LAST: u16 = 7;

    pub const SPACE: Self = Self(32);
    pub const ESCAPE: Self = Self(256);

    /// Returns `None` when `raw` is outside the table.
    #[inline]
    pub const fn new(raw: u16) -> Option<Self> {
        if (raw as usize) < INPUT_CODE_COUNT {
            Some(Self(raw))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Keyboard key identifier, one variant per GLFW key.
///
/// Keys without a variant arrive as `Unknown` and have no input slot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Space,
    Apostrophe,
    Comma,
    Minus,
    Period,
    Slash,
    Semicolon,
    Equal,
    BracketLeft,
    Backslash,
    BracketRight,
    Backquote,
    /// The extra key next to left Shift on ISO layouts.
    World1,

    Escape,
    Enter,
    Tab,
    Backspace,
    Insert,
    Delete,
    ArrowRight,
    ArrowLeft,
    ArrowDown,
    ArrowUp,
    PageUp,
    PageDown,
    Home,
    End,

    CapsLock,
    ScrollLock,
    NumLock,
    PrintScreen,
    Pause,

    NumpadDecimal,
    NumpadDivide,
    NumpadMultiply,
    NumpadSubtract,
    NumpadAdd,
    NumpadEnter,
    NumpadEqual,

    ShiftLeft,
    ControlLeft,
    AltLeft,
    SuperLeft,
    ShiftRight,
    ControlRight,
    AltRight,
    SuperRight,
    Menu,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,

    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13,
    F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24, F25,

    /// Platform key with no variant. The payload is a platform code when one exists.
    Unknown(u32),
}

impl Key {
    const LETTERS: [Key; 26] = [
        Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
        Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
        Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
    ];

    const DIGITS: [Key; 10] = [
        Key::Digit0, Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4,
        Key::Digit5, Key::Digit6, Key::Digit7, Key::Digit8, Key::Digit9,
    ];

    const NUMPAD_DIGITS: [Key; 10] = [
        Key::Numpad0, Key::Numpad1, Key::Numpad2, Key::Numpad3, Key::Numpad4,
        Key::Numpad5, Key::Numpad6, Key::Numpad7, Key::Numpad8, Key::Numpad9,
    ];

    const FUNCTION: [Key; 25] = [
        Key::F1, Key::F2, Key::F3, Key::F4, Key::F5, Key::F6, Key::F7, Key::F8, Key::F9,
        Key::F10, Key::F11, Key::F12, Key::F13, Key::F14, Key::F15, Key::F16, Key::F17,
        Key::F18, Key::F19, Key::F20, Key::F21, Key::F22, Key::F23, Key::F24, Key::F25,
    ];

    /// Input slot for this key, `None` for `Unknown`.
    pub fn code(self) -> Option<InputCode> {
        let raw = match self {
            Key::Space => 32,
            Key::Apostrophe => 39,
            Key::Comma => 44,
            Key::Minus => 45,
            Key::Period => 46,
            Key::Slash => 47,
            Key::Semicolon => 59,
            Key::Equal => 61,
            Key::BracketLeft => 91,
            Key::Backslash => 92,
            Key::BracketRight => 93,
            Key::Backquote => 96,
            Key::World1 => 161,

            Key::Escape => 256,
            Key::Enter => 257,
            Key::Tab => 258,
            Key::Backspace => 259,
            Key::Insert => 260,
            Key::Delete => 261,
            Key::ArrowRight => 262,
            Key::ArrowLeft => 263,
            Key::ArrowDown => 264,
            Key::ArrowUp => 265,
            Key::PageUp => 266,
            Key::PageDown => 267,
            Key::Home => 268,
            Key::End => 269,

            Key::CapsLock => 280,
            Key::ScrollLock => 281,
            Key::NumLock => 282,
            Key::PrintScreen => 283,
            Key::Pause => 284,

            Key::NumpadDecimal => 330,
            Key::NumpadDivide => 331,
            Key::NumpadMultiply => 332,
            Key::NumpadSubtract => 333,
            Key::NumpadAdd => 334,
            Key::NumpadEnter => 335,
            Key::NumpadEqual => 336,

            Key::ShiftLeft => 340,
            Key::ControlLeft => 341,
            Key::AltLeft => 342,
            Key::SuperLeft => 343,
            Key::ShiftRight => 344,
            Key::ControlRight => 345,
            Key::AltRight => 346,
            Key::SuperRight => 347,
            Key::Menu => 348,

            Key::Unknown(_) => return None,
            other => {
                let offset = |table: &[Key]| table.iter().position(|k| *k == other);
                if let Some(i) = offset(&Self::LETTERS) {
                    65 + i as u16
                } else if let Some(i) = offset(&Self::DIGITS) {
                    48 + i as u16
                } else if let Some(i) = offset(&Self::NUMPAD_DIGITS) {
                    320 + i as u16
                } else {
                    290 + offset(&Self::FUNCTION)? as u16
                }
            }
        };
        InputCode::new(raw)
    }
}

/// Press/release transition, shared by keys and mouse buttons.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

impl MouseButton {
    /// Input slot for this button. Buttons past the eighth have none.
    pub fn code(self) -> Option<InputCode> {
        match self {
            MouseButton::Left => Some(InputCode::MOUSE_LEFT),
            MouseButton::Right => Some(InputCode::MOUSE_RIGHT),
            MouseButton::Middle => Some(InputCode::MOUSE_MIDDLE),
            MouseButton::Back => Some(InputCode::MOUSE_BACK),
            MouseButton::Forward => Some(InputCode::MOUSE_FORWARD),
            MouseButton::Other(n) if n <= InputCode::MOUSE_LAST => InputCode::new(n),
            MouseButton::Other(_) => None,
        }
    }
}

/// Platform-agnostic input events.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: ButtonState,
        /// True for OS key-repeat presses.
        repeat: bool,
    },

    MouseButton {
        button: MouseButton,
        state: ButtonState,
    },

    /// Window focus change.
    Focused(bool),
}

impl InputEvent {
    /// Input slot and transition carried by this event, if any.
    pub fn transition(&self) -> Option<(InputCode, ButtonState)> {
        match *self {
            InputEvent::Key { key, state, .. } => key.code().map(|c| (c, state)),
            InputEvent::MouseButton { button, state } => button.code().map(|c| (c, state)),
            InputEvent::Focused(_) => None,
        }
    }
}
