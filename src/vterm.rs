use crate::attribute::Attribute;
use crate::callbacks::{Callbacks, InitError};
use crate::cursor::{Cursor, CursorStack};
use crate::grid::Grid;
use crate::mode::{Mode, ModeFlags};
use crate::ops;
use crate::parser::{Parser, StepOutcome};

/// The terminal instance: grid, cursor, save stack, current attribute,
/// parser state and the host callback record, all owned together. There is
/// exactly one of these per emulated terminal; it is never aliased or
/// shared, matching the "cell buffer is exclusively owned" lifecycle rule.
pub struct Vterm {
    mode: Mode,
    grid: Grid,
    cursor: Cursor,
    cursor_stack: CursorStack,
    current_attrib: Attribute,
    parser: Parser,
    callbacks: Callbacks,
}

impl Vterm {
    /// Initializes a terminal in the default 80x25 mode, allocating the
    /// cell buffer through `callbacks.mem_alloc`. Fails only if
    /// `mem_alloc`/`mem_free` are missing, or if the allocator refuses the
    /// very first allocation.
    pub fn init(mut callbacks: Callbacks) -> Result<Vterm, InitError> {
        if !callbacks.has_required() {
            return Err(InitError::MissingRequiredCallback);
        }
        let mode = Mode::default();
        let default_attrib = Attribute::default();
        let grid = {
            let alloc = callbacks
                .mem_alloc
                .as_mut()
                .expect("checked by has_required");
            Grid::new(mode.scr_w, mode.scr_h, default_attrib, alloc.as_mut())
                .ok_or(InitError::AllocationFailed)?
        };
        Ok(Vterm {
            mode,
            grid,
            cursor: Cursor::default(),
            cursor_stack: CursorStack::new(),
            current_attrib: default_attrib,
            parser: Parser::new(),
            callbacks,
        })
    }

    /// Feeds `bytes` one at a time through the parser.
    pub fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.feed_byte(b);
        }
    }

    /// Frees the buffer through `callbacks.mem_free`. `self` is dropped
    /// immediately after; there is no further use of the instance.
    pub fn shutdown(mut self) {
        self.free_current_buffer();
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current_attrib(&self) -> Attribute {
        self.current_attrib
    }

    fn feed_byte(&mut self, b: u8) {
        match self.parser.step(b) {
            StepOutcome::Consumed => {}
            StepOutcome::ForwardToPrinter(c) => self.print_byte(c),
            StepOutcome::Dispatch(final_byte) => {
                ops::dispatch(self, final_byte);
                self.parser.finish_dispatch();
            }
        }
    }

    fn free_current_buffer(&mut self) {
        let mem_free = match self.callbacks.mem_free.as_mut() {
            Some(f) => f,
            None => return,
        };
        // Swap out a zero-sized placeholder so ownership of the real
        // buffer can move into the host's free callback.
        let placeholder = Grid::new(0, 0, self.current_attrib, &mut |_| Some(Vec::new()))
            .expect("zero-size allocation never fails");
        let old = std::mem::replace(&mut self.grid, placeholder);
        mem_free(old.into_cells());
    }

    /// Reallocates the buffer for `new_mode`, clears it, and resets the
    /// cursor to `(0, 0)`. On allocator failure the previous buffer and
    /// mode are left intact and the failure is only logged: tearing down
    /// a running instance over one failed reallocation would be a worse
    /// outcome than staying in the old mode.
    pub(crate) fn try_apply_mode(&mut self, new_mode: Mode) {
        let default_attrib = Attribute::default();
        let new_grid = {
            let mem_alloc = match self.callbacks.mem_alloc.as_mut() {
                Some(f) => f,
                None => return,
            };
            Grid::new(new_mode.scr_w, new_mode.scr_h, default_attrib, mem_alloc.as_mut())
        };
        let new_grid = match new_grid {
            Some(g) => g,
            None => {
                tracing::error!(
                    scr_w = new_mode.scr_w,
                    scr_h = new_mode.scr_h,
                    "mem_alloc returned None during mode change; keeping previous buffer"
                );
                return;
            }
        };
        let old_grid = std::mem::replace(&mut self.grid, new_grid);
        if let Some(mem_free) = self.callbacks.mem_free.as_mut() {
            mem_free(old_grid.into_cells());
        }
        self.mode = new_mode;
        self.current_attrib = default_attrib;
        self.cursor = Cursor::default();
        if let Some(mode_change) = self.callbacks.mode_change.as_mut() {
            mode_change(new_mode);
        }
        self.emit_set_cursor();
    }

    pub(crate) fn emit_draw_cell(&mut self, chr: u8, x: usize, y: usize, attrib: Attribute) {
        if let Some(draw_cell) = self.callbacks.draw_cell.as_mut() {
            draw_cell(chr, x, y, attrib);
        }
    }

    pub(crate) fn emit_set_cursor(&mut self) {
        if let Some(set_cursor) = self.callbacks.set_cursor.as_mut() {
            set_cursor(self.cursor);
        }
    }

    pub(crate) fn emit_response_byte(&mut self, byte: u8) {
        if let Some(response) = self.callbacks.response.as_mut() {
            response(byte);
        }
    }

    pub(crate) fn emit_ascii(&mut self, byte: u8) {
        if let Some(ascii) = self.callbacks.ascii.as_mut() {
            ascii(byte);
        }
    }

    pub(crate) fn emit_misc_sequence(&mut self, final_byte: u8) {
        tracing::debug!(
            prefix = ?self.parser.prefix_chr,
            final_byte = final_byte as char,
            "unrecognized CSI final byte"
        );
        if let Some(misc_sequence) = self.callbacks.misc_sequence.as_mut() {
            misc_sequence(self.parser.prefix_chr, final_byte);
        }
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub(crate) fn scr_w(&self) -> usize {
        self.mode.scr_w
    }

    pub(crate) fn scr_h(&self) -> usize {
        self.mode.scr_h
    }

    pub(crate) fn flags(&self) -> ModeFlags {
        self.mode.flags
    }

    pub(crate) fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    pub(crate) fn cursor_stack_mut(&mut self) -> &mut CursorStack {
        &mut self.cursor_stack
    }

    pub(crate) fn current_attrib_mut(&mut self) -> &mut Attribute {
        &mut self.current_attrib
    }

    pub(crate) fn parser(&self) -> &Parser {
        &self.parser
    }
}
