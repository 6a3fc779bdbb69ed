//! Per-byte handling for the non-escape path: C0 control codes and
//! printable writes. `impl Vterm` rather than a free struct, for the same
//! reason as `grid.rs`'s clear/scroll/newline — it needs the callbacks.

use crate::c0;
use crate::cell::Cell;

impl crate::Vterm {
    pub(crate) fn print_byte(&mut self, chr: u8) {
        match chr {
            c0::BEL | c0::DEL => self.emit_ascii(chr),
            c0::BS => {
                if self.cursor().x >= 1 {
                    self.cursor_mut().x -= 1;
                    self.emit_set_cursor();
                }
            }
            c0::HT => {
                let tab = 4 - (self.cursor().x % 4);
                for _ in 0..tab {
                    self.print_byte(b' ');
                }
            }
            c0::LF => self.newline(true),
            c0::VT => self.newline(false),
            c0::FF => {
                self.clear_full_screen();
                self.cursor_mut().x = 0;
                self.cursor_mut().y = 0;
                self.emit_set_cursor();
            }
            c0::CR => {
                self.cursor_mut().x = 0;
                self.emit_set_cursor();
            }
            other => {
                if self.cursor().x >= self.scr_w() {
                    self.newline(true);
                }
                let (x, y) = (self.cursor().x, self.cursor().y);
                let attrib = self.current_attrib();
                self.grid_mut().set_cell(x, y, Cell { chr: other, attrib });
                // set_cursor is emitted at the pre-increment position,
                // then draw_cell fires and x advances, matching the
                // original's emission order exactly.
                self.emit_set_cursor();
                self.emit_draw_cell(other, x, y, attrib);
                self.cursor_mut().x += 1;
            }
        }
    }
}
