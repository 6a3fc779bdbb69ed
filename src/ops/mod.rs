//! CSI dispatch table.
//!
//! ```text
//! byte stream
//!     │
//!     ▼
//! Parser::step()  (parser.rs)
//!     │  StepOutcome::Dispatch(final_byte)
//!     ▼
//! ops::dispatch(vt, final_byte)   <- this module
//!     │
//!     ├── A B C D  -> cursor_ops::cuu/cud/cuf/cub
//!     ├── G        -> cursor_ops::cha
//!     ├── H        -> cursor_ops::cup
//!     ├── J K      -> erase_ops::ed/el
//!     ├── T        -> erase_ops::sd
//!     ├── m        -> sgr_ops::sgr
//!     ├── h        -> mode_ops::sm
//!     ├── n        -> dsr_ops::dsr
//!     ├── 7 s      -> dec_ops::decsc
//!     ├── 8 u      -> dec_ops::decrc
//!     └── other    -> Vterm::emit_misc_sequence
//! ```

mod cursor_ops;
mod dec_ops;
mod dsr_ops;
mod erase_ops;
mod mode_ops;
mod sgr_ops;

use crate::vterm::Vterm;

pub(crate) fn dispatch(vt: &mut Vterm, final_byte: u8) {
    match final_byte {
        b'A' | b'B' | b'C' | b'D' => vt.csi_cursor_move(final_byte),
        b'G' => vt.csi_cha(),
        b'H' => vt.csi_cup(),
        b'J' => vt.csi_ed(),
        b'K' => vt.csi_el(),
        b'T' => vt.csi_sd(),
        b'm' => vt.csi_sgr(),
        b'h' => vt.csi_mode(),
        b'n' => vt.csi_dsr(),
        b'7' | b's' => vt.csi_decsc(),
        b'8' | b'u' => vt.csi_decrc(),
        other => vt.emit_misc_sequence(other),
    }
}
