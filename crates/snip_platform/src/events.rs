/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keyboard modifier state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
        alt: false,
    };
}

/// Virtual key code (platform-agnostic key identifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const C: KeyCode = KeyCode(0x43);
    pub const T: KeyCode = KeyCode(0x54);
}

/// Platform-agnostic input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Mouse moved.
    MouseMove { x: i32, y: i32 },
    /// Mouse button pressed.
    MouseDown { x: i32, y: i32, button: MouseButton },
    /// Mouse button released.
    MouseUp { x: i32, y: i32, button: MouseButton },
    /// Key pressed.
    KeyDown { key: KeyCode, modifiers: Modifiers },
}
