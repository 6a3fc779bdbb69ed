//! ED (`J`), EL (`K`) and SD (`T`) — erase and scroll-up commands.

use crate::vterm::Vterm;

impl Vterm {
    /// `J` (ED). `arg(0)` default 0: 0 clears cursor..end of screen, 1
    /// clears start..cursor, 2 clears the entire screen.
    pub(crate) fn csi_ed(&mut self) {
        let arg = self.parser().arg(0, 0);
        let (cx, cy) = (self.cursor().x, self.cursor().y);
        let (scr_w, scr_h) = (self.scr_w(), self.scr_h());
        match arg {
            0 => self.clear(cx, cy, scr_w, scr_h - 1),
            1 => self.clear(0, 0, cx, cy),
            2 => self.clear(0, 0, scr_w, scr_h - 1),
            _ => {}
        }
    }

    /// `K` (EL). `arg(0)` default 0: 0 clears cursor..end of line, 1
    /// clears start..cursor, 2 clears the entire line.
    pub(crate) fn csi_el(&mut self) {
        let arg = self.parser().arg(0, 0);
        let (cx, cy) = (self.cursor().x, self.cursor().y);
        let scr_w = self.scr_w();
        match arg {
            0 => self.clear(cx, cy, scr_w, cy),
            1 => self.clear(0, cy, cx, cy),
            2 => self.clear(0, cy, scr_w, cy),
            _ => {}
        }
    }

    /// `T` (SD): scroll up by `arg(0)` default 1.
    pub(crate) fn csi_sd(&mut self) {
        let arg = match self.parser().arg(0, 1) {
            0 => 1,
            n => n,
        } as usize;
        self.scroll(arg);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Callbacks, Cursor, Vterm};

    fn test_vterm() -> Vterm {
        let callbacks = Callbacks::new()
            .with_mem_alloc(|n| Some(vec![Default::default(); n]))
            .with_mem_free(|_| {});
        Vterm::init(callbacks).unwrap()
    }

    #[test]
    fn full_clear_then_home_leaves_empty_grid_and_cursor_at_origin() {
        let mut vt = test_vterm();
        vt.write(b"hello\x1b[2J\x1b[H");
        assert_eq!(vt.cursor(), Cursor { x: 0, y: 0 });
        for y in 0..vt.grid().height() {
            for x in 0..vt.grid().width() {
                assert_eq!(vt.grid().cell(x, y).chr, 0);
            }
        }
    }

    #[test]
    fn scroll_past_scr_h_is_equivalent_to_full_clear() {
        let mut vt = test_vterm();
        vt.write(b"AB");
        let h = vt.grid().height();
        vt.write(format!("\x1b[{}T", h + 50).as_bytes());
        assert_eq!(vt.cursor().y, 0);
        assert_eq!(vt.grid().cell(0, 0).chr, 0);
    }
}
