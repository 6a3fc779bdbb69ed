use bitflags::bitflags;

bitflags! {
    /// Screen-mode flags. Kept as a bitset rather than two booleans so a
    /// future flag doesn't force a field rename across the crate.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ModeFlags: u8 {
        const COLOR  = 1 << 0;
        const SCROLL = 1 << 1;
    }
}

/// The runtime configuration surface: screen dimensions plus flags.
/// There is no separate config file — changing the active [`Mode`] *is*
/// reconfiguration, dispatched through `CSI <n> h` with prefix `=`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mode {
    pub scr_w: usize,
    pub scr_h: usize,
    pub flags: ModeFlags,
}

impl Default for Mode {
    /// 80x25 with COLOR and SCROLL enabled, the documented startup mode.
    fn default() -> Self {
        Mode {
            scr_w: 80,
            scr_h: 25,
            flags: ModeFlags::COLOR.union(ModeFlags::SCROLL),
        }
    }
}

/// The four legacy modes selectable via `CSI <n> = h`. Anything outside
/// `0..=3` resolves to mode 0.
pub(crate) fn legacy_mode(arg: u32) -> Mode {
    match arg {
        1 => Mode {
            scr_w: 40,
            scr_h: 25,
            flags: ModeFlags::SCROLL.union(ModeFlags::COLOR),
        },
        2 => Mode {
            scr_w: 80,
            scr_h: 25,
            flags: ModeFlags::SCROLL,
        },
        3 => Mode {
            scr_w: 80,
            scr_h: 25,
            flags: ModeFlags::SCROLL.union(ModeFlags::COLOR),
        },
        _ => Mode {
            scr_w: 40,
            scr_h: 25,
            flags: ModeFlags::SCROLL,
        },
    }
}
