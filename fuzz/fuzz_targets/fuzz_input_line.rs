//! Fuzz target for input line editing.
//!
//! Drives a line with raw bytes, commands, mouse events and programmatic
//! edits, checking cursor and mark bounds after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use termline::{
    Command, InputLine, InputOptions, KillRing, MemoryClipboard, MouseEvent, MouseEventKind,
    WordListCompleter,
};

#[derive(Arbitrary, Debug)]
struct Session {
    width: u8,
    limit: Option<u8>,
    password: bool,
    ops: Vec<Op>,
}

#[derive(Arbitrary, Debug)]
enum Op {
    /// Raw terminal bytes.
    Bytes(Vec<u8>),
    /// Index into `Command::ALL`.
    Command(u8),
    /// Mouse event at a column.
    Mouse { column: i16, kind: u8 },
    /// Programmatic edits.
    Assign(String),
    Insert(String),
    SetPoint(u16),
    Clean,
    Resize(u8),
}

fuzz_target!(|session: Session| {
    let options = InputOptions {
        width: usize::from(session.width.max(1)),
        max_buffer_bytes: session.limit.map(|l| usize::from(l) + 1),
        is_password: session.password,
        ..InputOptions::default()
    };
    let mut line = InputLine::new(options, KillRing::new())
        .with_clipboard(Box::new(MemoryClipboard::new()))
        .with_completer(Box::new(WordListCompleter::new(["alpha", "alps", "beta"])));

    for op in session.ops.into_iter().take(200) {
        match op {
            Op::Bytes(bytes) => {
                for byte in bytes.into_iter().take(64) {
                    line.handle_raw_byte(byte);
                }
            }
            Op::Command(index) => {
                let command = Command::ALL[usize::from(index) % Command::ALL.len()];
                line.execute(command);
            }
            Op::Mouse { column, kind } => {
                let kind = match kind % 3 {
                    0 => MouseEventKind::Down,
                    1 => MouseEventKind::Drag,
                    _ => MouseEventKind::Up,
                };
                line.handle_mouse(MouseEvent::new(i32::from(column), 0, kind));
            }
            Op::Assign(text) => line.assign_text(&text),
            Op::Insert(text) => line.insert_text(&text, false),
            Op::SetPoint(point) => line.set_point(usize::from(point)),
            Op::Clean => line.clean(),
            Op::Resize(width) => line.set_width(usize::from(width.max(1))),
        }

        let len = line.buffer().len_chars();
        assert!(line.point() <= len);
        assert!(line.raw_mark() <= len);
        assert!(line.buffer().capacity() > line.buffer().store().len_bytes());
    }
});
