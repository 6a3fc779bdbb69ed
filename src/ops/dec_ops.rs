//! `7`/`s` and `8`/`u` — DEC cursor save/restore.

use crate::vterm::Vterm;

impl Vterm {
    /// DECSC: push the current cursor. Silently discarded if the 8-deep
    /// save stack is already full.
    pub(crate) fn csi_decsc(&mut self) {
        let cursor = self.cursor();
        self.cursor_stack_mut().push(cursor);
    }

    /// DECRC: pop and apply, emitting `set_cursor`. A no-op (no emission)
    /// if the stack is empty.
    pub(crate) fn csi_decrc(&mut self) {
        if let Some(saved) = self.cursor_stack_mut().pop() {
            *self.cursor_mut() = saved;
            self.emit_set_cursor();
        }
    }
}
