//! Shared recording-callbacks harness for the conformance suite: one
//! setup function reused across a family of `tests/*.rs` files.

use std::cell::RefCell;
use std::rc::Rc;

use vterm_core::{Attribute, Callbacks, Cursor, Mode};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    DrawCell(u8, usize, usize, Attribute),
    SetCursor(Cursor),
    ModeChange(Mode),
    Response(u8),
    Ascii(u8),
    Misc(Option<char>, u8),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

/// Builds a `Callbacks` that records every invocation into a shared log,
/// plus a handle to read that log back.
pub fn recording_callbacks() -> (Callbacks, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));

    let callbacks = Callbacks::new()
        .with_mem_alloc(|n| Some(vec![Default::default(); n]))
        .with_mem_free(|_buf| {})
        .with_draw_cell({
            let l = log.clone();
            move |chr, x, y, attrib| l.borrow_mut().push(Event::DrawCell(chr, x, y, attrib))
        })
        .with_set_cursor({
            let l = log.clone();
            move |cursor| l.borrow_mut().push(Event::SetCursor(cursor))
        })
        .with_mode_change({
            let l = log.clone();
            move |mode| l.borrow_mut().push(Event::ModeChange(mode))
        })
        .with_response({
            let l = log.clone();
            move |byte| l.borrow_mut().push(Event::Response(byte))
        })
        .with_ascii({
            let l = log.clone();
            move |byte| l.borrow_mut().push(Event::Ascii(byte))
        })
        .with_misc_sequence({
            let l = log.clone();
            move |prefix, byte| l.borrow_mut().push(Event::Misc(prefix, byte))
        });

    (callbacks, log)
}

pub fn draw_cell_count(log: &Log) -> usize {
    log.borrow()
        .iter()
        .filter(|e| matches!(e, Event::DrawCell(..)))
        .count()
}

pub fn set_cursor_count(log: &Log) -> usize {
    log.borrow()
        .iter()
        .filter(|e| matches!(e, Event::SetCursor(..)))
        .count()
}
