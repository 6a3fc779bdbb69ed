//! `h` with `prefix_chr == '='` — the four legacy video modes.
//!
//! A bare `CSI h` (no prefix) or any `?`/`<`/`>`-prefixed `h` is silently
//! ignored here: DEC private mode sets are not implemented in this core.

use crate::mode;
use crate::vterm::Vterm;

impl Vterm {
    pub(crate) fn csi_mode(&mut self) {
        if self.parser().prefix_chr != Some('=') {
            tracing::warn!(
                prefix = ?self.parser().prefix_chr,
                "CSI h without '=' prefix: standard/DEC private mode sets are not implemented"
            );
            return;
        }
        let arg = self.parser().arg(0, 0);
        let new_mode = mode::legacy_mode(arg);
        self.try_apply_mode(new_mode);
    }
}
