//! `m` — Select Graphic Rendition.

use crate::attribute::{AttrFlags, Attribute, Color};
use crate::vterm::Vterm;

impl Vterm {
    /// Iterates every *completed* argument slot `argv[0..argp)`: a missing
    /// slot or an explicit `0` resets to the default attribute; anything
    /// else updates flags and/or color. Because the final byte always
    /// completes one slot (present-or-not), a bare `CSI m` still resets —
    /// its lone slot is simply never marked present.
    pub(crate) fn csi_sgr(&mut self) {
        for i in 0..self.parser().arg_count() {
            let (value, present) = self.parser().raw_arg(i);
            if !present || value == 0 {
                *self.current_attrib_mut() = Attribute::default();
                continue;
            }
            self.apply_sgr_arg(value);
        }
    }

    fn apply_sgr_arg(&mut self, arg: u32) {
        let attr = &mut self.current_attrib_mut().attr;
        match arg {
            1 => attr.insert(AttrFlags::BOLD),
            2 => {
                attr.remove(AttrFlags::BOLD);
                attr.insert(AttrFlags::DIM);
            }
            3 => attr.insert(AttrFlags::ITALIC),
            4 => attr.insert(AttrFlags::UNDERLINE),
            5 => {
                attr.remove(AttrFlags::FAST_BLINK);
                attr.insert(AttrFlags::SLOW_BLINK);
            }
            6 => {
                attr.remove(AttrFlags::SLOW_BLINK);
                attr.insert(AttrFlags::FAST_BLINK);
            }
            7 => attr.insert(AttrFlags::INVERT),
            8 => attr.insert(AttrFlags::HIDDEN),
            9 => attr.insert(AttrFlags::STRIKE),
            21 => attr.insert(AttrFlags::UNDERLINE | AttrFlags::DOUBLE_UNDERLINE),
            22 => attr.remove(AttrFlags::BOLD | AttrFlags::DIM),
            23 => attr.remove(AttrFlags::ITALIC),
            24 => attr.remove(AttrFlags::UNDERLINE | AttrFlags::DOUBLE_UNDERLINE),
            25 => attr.remove(AttrFlags::SLOW_BLINK | AttrFlags::FAST_BLINK),
            27 => attr.remove(AttrFlags::INVERT),
            28 => attr.remove(AttrFlags::HIDDEN),
            29 => attr.remove(AttrFlags::STRIKE),
            _ => {}
        }

        if (90..=107).contains(&arg) {
            self.current_attrib_mut().attr.insert(AttrFlags::BRIGHT);
        }

        let color_digit = arg % 10;
        let reset_color = color_digit == 9;
        let color = Color::from_index(color_digit);
        match arg / 10 {
            3 | 9 => {
                self.current_attrib_mut().fg = if reset_color {
                    Attribute::default().fg
                } else {
                    color
                };
            }
            4 | 10 => {
                self.current_attrib_mut().bg = if reset_color {
                    Attribute::default().bg
                } else {
                    color
                };
            }
            _ => {}
        }
    }
}
