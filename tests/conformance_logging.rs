//! Asserts on the `tracing` events the dispatcher emits for the two
//! documented non-fatal paths (an unrecognized CSI final, and a
//! recognized-but-ignored mode set), by installing a `tracing-subscriber`
//! formatter that writes into a shared in-memory buffer instead of stdout.

mod common;

use std::io::Write;
use std::sync::{Arc, Mutex};

use vterm_core::Vterm;

#[derive(Clone)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.lock().unwrap().flush()
    }
}

fn captured_logs(run: impl FnOnce()) -> String {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let writer_buf = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || SharedBuf(writer_buf.clone()))
        .finish();

    tracing::subscriber::with_default(subscriber, run);

    String::from_utf8(buf.lock().unwrap().clone()).expect("log output is valid UTF-8")
}

#[test]
fn unrecognized_csi_final_is_logged_at_debug() {
    let (callbacks, _log) = common::recording_callbacks();
    let output = captured_logs(|| {
        let mut vt = Vterm::init(callbacks).unwrap();
        vt.write(b"\x1b[5x");
    });

    assert!(
        output.contains("unrecognized CSI final byte"),
        "expected a debug-level log mentioning the unrecognized final byte, got: {output:?}"
    );
}

#[test]
fn mode_set_without_equals_prefix_is_logged_at_warn() {
    let (callbacks, _log) = common::recording_callbacks();
    let output = captured_logs(|| {
        let mut vt = Vterm::init(callbacks).unwrap();
        vt.write(b"\x1b[?25h");
    });

    assert!(
        output.contains("WARN") && output.contains("without '=' prefix"),
        "expected a warn-level log about the missing '=' prefix, got: {output:?}"
    );
}
