//! The host contract.
//!
//! The original design models this as a record of function pointers rather
//! than an interface, so that's what this module builds too — but as a
//! struct of `Option<Box<dyn FnMut>>` fields, not a trait. A trait would
//! need a method per callback either way, and it can't express "detect a
//! missing callback at runtime" the way [`Vterm::init`](crate::Vterm::init)
//! must: a missing trait method is a compile error, not an [`InitError`].
//! The `vt`/`user_context` parameters of the original contract are dropped
//! throughout — a Rust closure already owns whatever context it captures.

use crate::attribute::Attribute;
use crate::cell::Cell;
use crate::cursor::Cursor;
use crate::mode::Mode;

/// Failure modes for [`Vterm::init`](crate::Vterm::init).
#[derive(thiserror::Error, Debug)]
pub enum InitError {
    /// `mem_alloc` or `mem_free` was not supplied. The single documented
    /// init failure path (spec "Configuration error").
    #[error("mem_alloc and mem_free callbacks are both required")]
    MissingRequiredCallback,

    /// The host allocator returned `None` while building the initial
    /// buffer. Treated as fatal to `init` specifically, since there is no
    /// previous buffer to fall back to.
    #[error("host allocator returned None while allocating the initial cell buffer")]
    AllocationFailed,
}

/// A record of optional host callbacks. All fields are optional except
/// `mem_alloc`/`mem_free`, which [`Vterm::init`](crate::Vterm::init)
/// checks for before doing anything else.
#[derive(Default)]
pub struct Callbacks {
    pub(crate) mem_alloc: Option<Box<dyn FnMut(usize) -> Option<Vec<Cell>>>>,
    pub(crate) mem_free: Option<Box<dyn FnMut(Vec<Cell>)>>,
    pub(crate) draw_cell: Option<Box<dyn FnMut(u8, usize, usize, Attribute)>>,
    pub(crate) set_cursor: Option<Box<dyn FnMut(Cursor)>>,
    pub(crate) mode_change: Option<Box<dyn FnMut(Mode)>>,
    pub(crate) response: Option<Box<dyn FnMut(u8)>>,
    pub(crate) ascii: Option<Box<dyn FnMut(u8)>>,
    pub(crate) misc_sequence: Option<Box<dyn FnMut(Option<char>, u8)>>,
}

impl Callbacks {
    pub fn new() -> Self {
        Callbacks::default()
    }

    /// Required. Allocates `n` cells for the buffer; `None` signals
    /// allocation failure.
    pub fn with_mem_alloc(
        mut self,
        f: impl FnMut(usize) -> Option<Vec<Cell>> + 'static,
    ) -> Self {
        self.mem_alloc = Some(Box::new(f));
        self
    }

    /// Required. Releases a buffer previously returned by `mem_alloc`.
    pub fn with_mem_free(mut self, f: impl FnMut(Vec<Cell>) + 'static) -> Self {
        self.mem_free = Some(Box::new(f));
        self
    }

    /// Invoked for every cell whose visible state changed.
    pub fn with_draw_cell(
        mut self,
        f: impl FnMut(u8, usize, usize, Attribute) + 'static,
    ) -> Self {
        self.draw_cell = Some(Box::new(f));
        self
    }

    /// Invoked after every cursor mutation.
    pub fn with_set_cursor(mut self, f: impl FnMut(Cursor) + 'static) -> Self {
        self.set_cursor = Some(Box::new(f));
        self
    }

    /// Reserved for mode transitions; may go unused.
    pub fn with_mode_change(mut self, f: impl FnMut(Mode) + 'static) -> Self {
        self.mode_change = Some(Box::new(f));
        self
    }

    /// Invoked one byte at a time to deliver an outgoing response (DSR).
    pub fn with_response(mut self, f: impl FnMut(u8) + 'static) -> Self {
        self.response = Some(Box::new(f));
        self
    }

    /// Invoked for BEL and DEL with the literal byte.
    pub fn with_ascii(mut self, f: impl FnMut(u8) + 'static) -> Self {
        self.ascii = Some(Box::new(f));
        self
    }

    /// Invoked for unrecognized CSI final bytes, along with any prefix
    /// character that had been accumulated.
    pub fn with_misc_sequence(
        mut self,
        f: impl FnMut(Option<char>, u8) + 'static,
    ) -> Self {
        self.misc_sequence = Some(Box::new(f));
        self
    }

    pub(crate) fn has_required(&self) -> bool {
        self.mem_alloc.is_some() && self.mem_free.is_some()
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("mem_alloc", &self.mem_alloc.is_some())
            .field("mem_free", &self.mem_free.is_some())
            .field("draw_cell", &self.draw_cell.is_some())
            .field("set_cursor", &self.set_cursor.is_some())
            .field("mode_change", &self.mode_change.is_some())
            .field("response", &self.response.is_some())
            .field("ascii", &self.ascii.is_some())
            .field("misc_sequence", &self.misc_sequence.is_some())
            .finish()
    }
}
