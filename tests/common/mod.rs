#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Each test binary uses a subset

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use termline::{
    ClipboardBridge, HistoryBrowser, InputLine, InputOptions, KeyEvent, KillRing, Result,
};

/// Install a test-writer subscriber once per binary.
pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// A line with default options and a private kill ring.
pub fn new_line() -> InputLine {
    InputLine::new(InputOptions::default(), KillRing::new())
}

/// A line `width` columns wide.
pub fn line_of_width(width: usize) -> InputLine {
    let options = InputOptions {
        width,
        ..InputOptions::default()
    };
    InputLine::new(options, KillRing::new())
}

/// Type `text` one key at a time.
pub fn type_text(line: &mut InputLine, text: &str) {
    for c in text.chars() {
        line.handle_key(KeyEvent::char(c));
    }
}

/// Clipboard whose contents stay observable after the line takes ownership.
#[derive(Clone, Default)]
pub struct SharedClipboard {
    pub contents: Rc<RefCell<Option<String>>>,
    pub fallbacks: Rc<RefCell<usize>>,
}

impl ClipboardBridge for SharedClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }

    fn read(&mut self) -> Result<Option<String>> {
        Ok(self.contents.borrow().clone())
    }

    fn copy_fallback(&mut self) -> Result<()> {
        *self.fallbacks.borrow_mut() += 1;
        Ok(())
    }
}

/// History browser that records what it was shown and picks a fixed index.
#[derive(Clone, Default)]
pub struct ScriptedBrowser {
    pub pick: Option<usize>,
    pub delete: Option<usize>,
    pub shown: Rc<RefCell<Vec<(Vec<String>, usize)>>>,
}

impl HistoryBrowser for ScriptedBrowser {
    fn pick(&mut self, entries: &mut Vec<String>, current: usize) -> Option<String> {
        self.shown.borrow_mut().push((entries.clone(), current));
        let chosen = self.pick.and_then(|i| entries.get(i).cloned());
        if let Some(i) = self.delete.filter(|i| *i < entries.len()) {
            entries.remove(i);
        }
        chosen
    }
}
