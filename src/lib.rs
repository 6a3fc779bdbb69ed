/*
 *   Copyright (c) 2026 vterm_core Contributors
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! # vterm_core
//!
//! An embeddable byte-stream terminal emulator core. Feed it raw bytes
//! (printable characters, C0 control codes, and a small VT100/ANSI subset of
//! CSI escape sequences) and it maintains a 2D cell grid, a cursor, and a
//! bounded cursor save stack, emitting render events to a [`Callbacks`]
//! record as it goes.
//!
//! ## What's in the core
//!
//! - [`parser`]: the 4-state escape-sequence state machine (`ESCAPE` ->
//!   `BRACKET` -> `ATTRIB` -> `ENDVAL`) that recognizes `ESC '[' ... final`
//!   CSI sequences and the small set of CSI commands this core implements
//!   (cursor motion, erase, SGR, mode-set, device status report, scroll,
//!   DEC save/restore).
//! - [`grid`]: the flat cell buffer plus clear/scroll/newline.
//! - [`cursor`]: cursor coordinates and the bounded save/restore stack.
//! - [`printer`]: the C0 control code table and printable-character writes.
//! - [`callbacks`]: the host contract, expressed as a record of optional
//!   closures rather than a trait — see the module docs for why.
//!
//! ## What's explicitly not in here
//!
//! Glyph/font rendering, PTY or serial I/O, UTF-8 decoding (this core is
//! 8-bit clean and byte-oriented), scrollback history, selection/clipboard,
//! mouse reporting, the alternate screen buffer, tab-stop tables, and
//! character-set designation (G0/G1/SCS). Those are a host's job, or a
//! different crate's.
//!
//! ## Example
//!
//! ```
//! use vterm_core::{Callbacks, Vterm};
//!
//! let callbacks = Callbacks::new()
//!     .with_mem_alloc(|n| Some(vec![Default::default(); n]))
//!     .with_mem_free(|_buf| {});
//!
//! let mut vt = Vterm::init(callbacks).expect("mem_alloc/mem_free are present");
//! vt.write(b"AB\nC");
//! assert_eq!(vt.cursor(), vterm_core::Cursor { x: 1, y: 1 });
//! assert_eq!(vt.grid().cell(0, 0).chr, b'A');
//! ```

mod attribute;
mod callbacks;
mod cell;
mod cursor;
mod grid;
mod mode;
mod ops;
mod parser;
mod printer;
mod vterm;

pub use attribute::{AttrFlags, Attribute, Color};
pub use callbacks::{Callbacks, InitError};
pub use cell::Cell;
pub use cursor::Cursor;
pub use grid::Grid;
pub use mode::{Mode, ModeFlags};
pub use vterm::Vterm;

pub(crate) mod c0 {
    //! C0 control codes and the two bytes that open a CSI sequence.
    //! Mirrors the `VTERM_CHR_*` constants of the original design.
    pub const NUL: u8 = 0x00;
    pub const BEL: u8 = 0x07;
    pub const BS: u8 = 0x08;
    pub const HT: u8 = 0x09;
    pub const LF: u8 = 0x0A;
    pub const VT: u8 = 0x0B;
    pub const FF: u8 = 0x0C;
    pub const CR: u8 = 0x0D;
    pub const DEL: u8 = 0x7F;
    pub const ESC: u8 = 0x1B;
    pub const CSI: u8 = 0x5B;
}
