mod common;

use common::recording_callbacks;
use vterm_core::{Cursor, ModeFlags, Vterm};

#[test]
fn scenario_b_full_clear_and_home() {
    let (callbacks, _log) = recording_callbacks();
    let mut vt = Vterm::init(callbacks).unwrap();
    vt.write(b"garbage on the screen\x1b[2J\x1b[H");

    assert_eq!(vt.cursor(), Cursor { x: 0, y: 0 });
    for y in 0..vt.grid().height() {
        for x in 0..vt.grid().width() {
            assert_eq!(vt.grid().cell(x, y).chr, 0);
        }
    }
}

#[test]
fn property_7_scrolling_past_scr_h_equals_full_clear_plus_home() {
    let (callbacks, _log) = recording_callbacks();
    let mut vt = Vterm::init(callbacks).unwrap();
    vt.write(b"hi there");
    let scr_h = vt.grid().height();
    vt.write(format!("\x1b[{}T", scr_h + 1000).as_bytes());

    assert_eq!(vt.cursor().y, 0);
    for x in 0..vt.grid().width() {
        assert_eq!(vt.grid().cell(x, 0).chr, 0);
    }
}

#[test]
fn scroll_by_one_shifts_rows_up_and_clears_the_last_row() {
    let (callbacks, _log) = recording_callbacks();
    let mut vt = Vterm::init(callbacks).unwrap();
    vt.write(b"A");
    vt.write(b"\n".repeat(1).as_bytes()); // cursor now on row 1
    vt.write(b"\x1b[T"); // scroll up by 1 (default)

    assert_eq!(vt.grid().cell(0, 0).chr, 0);
}

#[test]
fn mode_set_reallocates_and_switches_dimensions() {
    let (callbacks, _log) = recording_callbacks();
    let mut vt = Vterm::init(callbacks).unwrap();
    vt.write(b"\x1b[=2h");
    assert_eq!(vt.grid().width(), 80);
    assert_eq!(vt.grid().height(), 25);
    assert!(!vt.mode().flags.contains(ModeFlags::COLOR));
    assert!(vt.mode().flags.contains(ModeFlags::SCROLL));
}
