//! Text attribute bitset and the 8-color palette.
//!
//! Kept as an explicit [`bitflags`] set on purpose: individual style flags
//! (bold, dim, underline, ...) are never stored as independent booleans, and
//! the `BRIGHT` bit coexists with the 3-bit color index rather than folding
//! into it. See spark-tui's renderer attribute bitset for the same shape.

use bitflags::bitflags;

bitflags! {
    /// Text style flags applied to a [`crate::Cell`].
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct AttrFlags: u16 {
        const BOLD             = 1 << 0;
        const DIM               = 1 << 1;
        const ITALIC            = 1 << 2;
        const UNDERLINE         = 1 << 3;
        const DOUBLE_UNDERLINE  = 1 << 4;
        const SLOW_BLINK        = 1 << 5;
        const FAST_BLINK        = 1 << 6;
        const INVERT            = 1 << 7;
        const HIDDEN            = 1 << 8;
        const STRIKE            = 1 << 9;
        const SUPERSCRIPT       = 1 << 10;
        const UNDERSCRIPT       = 1 << 11;
        const BRIGHT            = 1 << 12;
    }
}

/// One of the 8 base terminal colors. There is no "default" variant here on
/// purpose: the sentinel default color (SGR index 9) is never stored, it
/// resolves to [`Attribute::default`]'s fg/bg at the point SGR is applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl Color {
    /// Maps an SGR color digit (already reduced mod 8) to a [`Color`].
    pub(crate) fn from_index(index: u32) -> Color {
        match index % 8 {
            0 => Color::Black,
            1 => Color::Red,
            2 => Color::Green,
            3 => Color::Yellow,
            4 => Color::Blue,
            5 => Color::Magenta,
            6 => Color::Cyan,
            _ => Color::White,
        }
    }
}

/// `{ attr, fg, bg }`, applied verbatim to a cell on write. Attribute
/// changes never retroactively alter previously written cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub attr: AttrFlags,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Attribute {
    /// `{attr=0, fg=WHITE, bg=BLACK}` — the state SGR reset restores.
    fn default() -> Self {
        Attribute {
            attr: AttrFlags::empty(),
            fg: Color::White,
            bg: Color::Black,
        }
    }
}
