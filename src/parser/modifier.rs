//! Modifier keys tracked per keypress.
//!
//! logkeys writes held modifiers as bracketed tokens in front of the key they
//! apply to, e.g. `<lshft>a`. Only these nine tokens count as modifiers;
//! every other bracketed name is an ordinary key.

use std::fmt;

/// A modifier key that can be held while another key is pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    LeftShift,
    RightShift,
    LeftCtrl,
    RightCtrl,
    LeftMeta,
    RightMeta,
    LeftAlt,
    RightAlt,
    AltGr,
}

impl Modifier {
    /// Every modifier, in the order they appear in reports
    pub const ALL: [Modifier; 9] = [
        Modifier::LeftShift,
        Modifier::RightShift,
        Modifier::LeftCtrl,
        Modifier::RightCtrl,
        Modifier::LeftMeta,
        Modifier::RightMeta,
        Modifier::LeftAlt,
        Modifier::RightAlt,
        Modifier::AltGr,
    ];

    /// The bracketed token logkeys writes for this modifier
    pub fn token(self) -> &'static str {
        match self {
            Self::LeftShift => "<lshft>",
            Self::RightShift => "<rshft>",
            Self::LeftCtrl => "<lctrl>",
            Self::RightCtrl => "<rctrl>",
            Self::LeftMeta => "<lmeta>",
            Self::RightMeta => "<rmeta>",
            Self::LeftAlt => "<lalt>",
            Self::RightAlt => "<ralt>",
            Self::AltGr => "<altgr>",
        }
    }

    /// Map a token back to a modifier
    ///
    /// Matching is exact: callers case-fold the line before tokenizing, so
    /// `<LShft>` never reaches this point.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "<lshft>" => Some(Self::LeftShift),
            "<rshft>" => Some(Self::RightShift),
            "<lctrl>" => Some(Self::LeftCtrl),
            "<rctrl>" => Some(Self::RightCtrl),
            "<lmeta>" => Some(Self::LeftMeta),
            "<rmeta>" => Some(Self::RightMeta),
            "<lalt>" => Some(Self::LeftAlt),
            "<ralt>" => Some(Self::RightAlt),
            "<altgr>" => Some(Self::AltGr),
            _ => None,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
