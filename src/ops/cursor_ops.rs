//! CUU/CUD/CUF/CUB, CHA and CUP — the cursor-motion CSI commands.

use crate::vterm::Vterm;

impl Vterm {
    /// `A`/`B`/`C`/`D`: move the cursor by `arg(0)` (default 1) cells.
    /// `A`/`B` act on `y`, `C`/`D` on `x`; `B`/`C` add, `A`/`D` subtract.
    /// Clamped to `[0, scr_h]` or `[0, scr_w]` respectively.
    pub(crate) fn csi_cursor_move(&mut self, final_byte: u8) {
        let vertical = matches!(final_byte, b'A' | b'B');
        let direction: i64 = if matches!(final_byte, b'B' | b'C') { 1 } else { -1 };
        let distance = match self.parser().arg(0, 1) {
            0 => 1,
            n => n,
        } as i64;
        let max = if vertical { self.scr_h() } else { self.scr_w() } as i64;
        let cur = if vertical { self.cursor().y } else { self.cursor().x } as i64;
        let value = (cur + direction * distance).clamp(0, max) as usize;
        if vertical {
            self.cursor_mut().y = value;
        } else {
            self.cursor_mut().x = value;
        }
        self.emit_set_cursor();
    }

    /// `G` (CHA): `x = arg(0)` default 1. If the argument is `>= scr_w`,
    /// clamp to `scr_h - 1` rather than `scr_w - 1` — a preserved quirk,
    /// not a typo.
    pub(crate) fn csi_cha(&mut self) {
        let arg = match self.parser().arg(0, 1) {
            0 => 1,
            n => n,
        } as usize;
        let x = if arg >= self.scr_w() {
            self.scr_h() - 1
        } else {
            arg
        };
        self.cursor_mut().x = x;
        self.emit_set_cursor();
    }

    /// `H` (CUP): 1-based `x = arg(0)` default 1, `y = arg(1)` default 1;
    /// clamp `x <= scr_w` (not `scr_w - 1`, permitting the transient
    /// pending-wrap state) and `y < scr_h` (via `y >= scr_h => y = scr_h`
    /// before the `- 1`). Stores `x - 1, y - 1`.
    pub(crate) fn csi_cup(&mut self) {
        let mut x = match self.parser().arg(0, 1) {
            0 => 1,
            n => n,
        } as usize;
        let mut y = match self.parser().arg(1, 1) {
            0 => 1,
            n => n,
        } as usize;
        if x > self.scr_w() {
            x = self.scr_w();
        }
        if y >= self.scr_h() {
            y = self.scr_h();
        }
        self.cursor_mut().x = x - 1;
        self.cursor_mut().y = y - 1;
        self.emit_set_cursor();
    }
}
