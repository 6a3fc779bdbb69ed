mod common;

use common::recording_callbacks;
use vterm_core::{AttrFlags, Attribute, Color, Vterm};

#[test]
fn scenario_c_bold_red_x() {
    let (callbacks, _log) = recording_callbacks();
    let mut vt = Vterm::init(callbacks).unwrap();
    vt.write(b"\x1b[1;31mX");
    let cell = vt.grid().cell(0, 0);
    assert_eq!(cell.chr, b'X');
    assert!(cell.attrib.attr.contains(AttrFlags::BOLD));
    assert_eq!(cell.attrib.fg, Color::Red);
}

#[test]
fn property_6_bare_and_explicit_zero_reset_restore_default_byte_for_byte() {
    for seq in [&b"\x1b[1;4;31;42m\x1b[m"[..], &b"\x1b[1;4;31;42m\x1b[0m"[..]] {
        let (callbacks, _log) = recording_callbacks();
        let mut vt = Vterm::init(callbacks).unwrap();
        vt.write(seq);
        assert_eq!(vt.current_attrib(), Attribute::default());
    }
}

#[test]
fn background_color_uses_the_40_range() {
    let (callbacks, _log) = recording_callbacks();
    let mut vt = Vterm::init(callbacks).unwrap();
    vt.write(b"\x1b[44m");
    assert_eq!(vt.current_attrib().bg, Color::Blue);
}

#[test]
fn unrecognized_sgr_values_are_ignored_without_resetting() {
    let (callbacks, _log) = recording_callbacks();
    let mut vt = Vterm::init(callbacks).unwrap();
    vt.write(b"\x1b[1;63m");
    assert!(vt.current_attrib().attr.contains(AttrFlags::BOLD));
}

#[test]
fn attribute_21_sets_both_underline_bits() {
    let (callbacks, _log) = recording_callbacks();
    let mut vt = Vterm::init(callbacks).unwrap();
    vt.write(b"\x1b[21m");
    assert!(vt.current_attrib().attr.contains(AttrFlags::UNDERLINE));
    assert!(vt.current_attrib().attr.contains(AttrFlags::DOUBLE_UNDERLINE));
}
