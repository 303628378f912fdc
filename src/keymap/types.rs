//! Core types for the keymap system: Keystroke, Modifiers, KeyCode

use std::fmt;

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win on Windows

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if shift {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        if meta {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & 0b1000 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        if self.alt() {
            parts.push("Alt");
        }
        if self.meta() {
            parts.push("Cmd");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key code representing a physical or logical key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),

    // Named keys
    Enter,
    Escape,
    Space,

    // Arrows
    Left,
    Right,
    Up,
    Down,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,
}

impl KeyCode {
    /// Parse a key name as used in keymap.yaml (e.g. "ArrowLeft", "h")
    pub fn parse(name: &str) -> Option<KeyCode> {
        match name {
            "Enter" => Some(KeyCode::Enter),
            "Escape" => Some(KeyCode::Escape),
            "Space" => Some(KeyCode::Space),
            "ArrowLeft" | "Left" => Some(KeyCode::Left),
            "ArrowRight" | "Right" => Some(KeyCode::Right),
            "ArrowUp" | "Up" => Some(KeyCode::Up),
            "ArrowDown" | "Down" => Some(KeyCode::Down),
            "Home" => Some(KeyCode::Home),
            "End" => Some(KeyCode::End),
            "PageUp" => Some(KeyCode::PageUp),
            "PageDown" => Some(KeyCode::PageDown),
            s => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(KeyCode::Char(c.to_ascii_lowercase())),
                    _ => None,
                }
            }
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Space => write!(f, "Space"),
            KeyCode::Left => write!(f, "ArrowLeft"),
            KeyCode::Right => write!(f, "ArrowRight"),
            KeyCode::Up => write!(f, "ArrowUp"),
            KeyCode::Down => write!(f, "ArrowDown"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::PageUp => write!(f, "PageUp"),
            KeyCode::PageDown => write!(f, "PageDown"),
        }
    }
}

/// A single keystroke: a key code plus modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub modifiers: Modifiers,
    pub key: KeyCode,
}

impl Keystroke {
    pub const fn new(modifiers: Modifiers, key: KeyCode) -> Self {
        Self { modifiers, key }
    }

    /// A keystroke with no modifiers
    pub const fn plain(key: KeyCode) -> Self {
        Self {
            modifiers: Modifiers::NONE,
            key,
        }
    }

    /// Parse a keystroke spec like "ArrowRight", "Shift+ArrowRight", "q"
    pub fn parse(spec: &str) -> Option<Keystroke> {
        let mut modifiers = Modifiers::NONE;
        let mut key = None;

        for part in spec.split('+') {
            match part {
                "Ctrl" => modifiers = modifiers | Modifiers::CTRL,
                "Shift" => modifiers = modifiers | Modifiers::SHIFT,
                "Alt" | "Option" => modifiers = modifiers | Modifiers::ALT,
                "Cmd" | "Meta" => modifiers = modifiers | Modifiers::META,
                name => {
                    if key.is_some() {
                        return None;
                    }
                    key = KeyCode::parse(name);
                    key?;
                }
            }
        }

        key.map(|key| Keystroke { modifiers, key })
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}
