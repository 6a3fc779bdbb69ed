//! `n` — Device Status Report. Only the cursor-position query (`6 n`) is
//! implemented.

use crate::c0;
use crate::vterm::Vterm;

impl Vterm {
    /// On `CSI 6 n`, responds with `ESC '[' <scr_h> ';' <scr_w> 'R'`,
    /// written one byte at a time through the `response` callback so the
    /// host can multiplex the reply without buffering it.
    pub(crate) fn csi_dsr(&mut self) {
        let (value, present) = self.parser().raw_arg(0);
        if !(present && value == 6) {
            return;
        }
        let scr_h = self.scr_h();
        let scr_w = self.scr_w();
        self.emit_response_byte(c0::ESC);
        self.emit_response_byte(c0::CSI);
        self.emit_response_decimal(scr_h as u32);
        self.emit_response_byte(b';');
        self.emit_response_decimal(scr_w as u32);
        self.emit_response_byte(b'R');
    }

    /// Unpadded decimal, minimum one digit (`0` prints as `"0"`).
    fn emit_response_decimal(&mut self, value: u32) {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut i = digits.len();
        loop {
            i -= 1;
            digits[i] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for &d in &digits[i..] {
            self.emit_response_byte(d);
        }
    }
}
