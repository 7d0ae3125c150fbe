//! History lifecycle: load on attach, navigation, browser, save on detach.

mod common;

use common::{ScriptedBrowser, setup_test_logging, type_text};
use termline::history::HistoryPosition;
use termline::{
    Command, Error, HistoryStore, InputLine, InputOptions, KeyCode, KeyEvent, KillRing,
    MemoryHistoryStore, MouseEvent, Result,
};

fn named(name: &str) -> InputOptions {
    InputOptions {
        history_name: Some(name.to_string()),
        ..InputOptions::default()
    }
}

fn attached(options: InputOptions, store: &MemoryHistoryStore) -> InputLine {
    let mut line = InputLine::new(options, KillRing::new());
    line.load_history(store).unwrap();
    line
}

struct BrokenStore;

impl HistoryStore for BrokenStore {
    fn load(&self, _name: &str) -> Result<Vec<String>> {
        Err(Error::History("unreadable".to_string()))
    }

    fn save(&mut self, _name: &str, _entries: &[String]) -> Result<()> {
        Err(Error::History("read-only".to_string()))
    }
}

#[test]
fn test_full_session_round_trip() {
    setup_test_logging();
    let mut store = MemoryHistoryStore::new().with_channel("cmd", ["make", "make test"]);

    let mut line = attached(named("cmd"), &store);
    assert_eq!(line.history().len(), 2);
    assert_eq!(line.text(), "");

    type_text(&mut line, "cargo build");
    line.save_history(&mut store, false).unwrap();
    assert_eq!(
        store.channel("cmd"),
        Some(&["make".to_string(), "make test".to_string(), "cargo build".to_string()][..])
    );

    let mut next = attached(named("cmd"), &store);
    next.handle_key(KeyEvent::with_alt(KeyCode::Char('p')));
    assert_eq!(next.text(), "cargo build");
    eprintln!("[TEST] PASS: entries survive a detach/attach cycle");
}

#[test]
fn test_navigation_walks_both_ways() {
    setup_test_logging();
    let store = MemoryHistoryStore::new().with_channel("h", ["a", "b", "c"]);
    let mut line = attached(named("h"), &store);

    // Empty draft is not recorded; the first step shows the newest entry
    line.execute(Command::HistoryPrev);
    assert_eq!(line.text(), "c");
    assert_eq!(line.history().len(), 3);
    line.execute(Command::HistoryPrev);
    assert_eq!(line.text(), "b");
    line.execute(Command::HistoryPrev);
    assert_eq!(line.text(), "a");
    assert_eq!(line.history().position(), Some(HistoryPosition::Oldest));

    line.execute(Command::HistoryNext);
    assert_eq!(line.text(), "b");
    assert_eq!(line.history().position(), Some(HistoryPosition::Middle));
    line.execute(Command::HistoryNext);
    assert_eq!(line.text(), "c");
    line.execute(Command::HistoryNext);
    assert_eq!(line.text(), "");
    assert_eq!(line.history().position(), Some(HistoryPosition::Newest));
}

#[test]
fn test_edit_after_recall_is_pushed_first() {
    let store = MemoryHistoryStore::new().with_channel("h", ["ls", "pwd"]);
    let mut line = attached(named("h"), &store);
    line.execute(Command::HistoryPrev);
    assert_eq!(line.text(), "pwd");
    type_text(&mut line, " -P");
    line.execute(Command::HistoryPrev);
    // "pwd -P" became the newest entry, so one step back is "pwd" again
    assert_eq!(line.history().entries(), ["ls", "pwd", "pwd -P"]);
    assert_eq!(line.text(), "pwd");
}

#[test]
fn test_duplicates_move_to_newest() {
    let store = MemoryHistoryStore::new().with_channel("h", ["x", "y", "z"]);
    let mut line = attached(named("h"), &store);
    line.assign_text("x");
    line.clean();
    assert_eq!(line.history().entries(), ["y", "z", "x"]);
}

#[test]
fn test_init_from_history_stays_pristine() {
    let store = MemoryHistoryStore::new().with_channel("dir", ["/usr", "/home/me"]);
    let options = InputOptions {
        init_from_history: true,
        ..named("dir")
    };
    let mut line = attached(options, &store);
    assert_eq!(line.text(), "/home/me");
    assert!(line.is_pristine());

    type_text(&mut line, "/");
    assert_eq!(line.text(), "/");
}

#[test]
fn test_browser_pick_and_delete() {
    setup_test_logging();
    let store = MemoryHistoryStore::new().with_channel("h", ["one", "two", "three"]);
    let browser = ScriptedBrowser {
        pick: Some(1),
        delete: Some(0),
        ..ScriptedBrowser::default()
    };
    let shown = browser.shown.clone();
    let mut line = InputLine::new(named("h"), KillRing::new())
        .with_history_browser(Box::new(browser));
    line.load_history(&store).unwrap();

    line.handle_key(KeyEvent::with_alt(KeyCode::Char('h')));
    assert_eq!(line.text(), "two");
    assert_eq!(line.history().entries(), ["two", "three"]);
    assert!(line.history().is_changed());

    let shown = shown.borrow();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].1, 2);
}

#[test]
fn test_history_button_drawn_and_clickable() {
    setup_test_logging();
    let store = MemoryHistoryStore::new().with_channel("h", ["alpha", "beta"]);
    let browser = ScriptedBrowser {
        pick: Some(0),
        ..ScriptedBrowser::default()
    };
    let options = InputOptions {
        width: 12,
        ..named("h")
    };
    let mut line = InputLine::new(options, KillRing::new()).with_history_browser(Box::new(browser));
    assert!(!line.frame().text().contains('['));
    line.load_history(&store).unwrap();
    line.update(false);
    assert_eq!(line.frame().text(), "         [^]");

    line.execute(Command::HistoryPrev);
    assert_eq!(line.frame().text(), "beta     [^]");
    line.execute(Command::HistoryPrev);
    assert_eq!(line.frame().text(), "alpha    [v]");

    assert!(line.handle_mouse(MouseEvent::down(10)));
    assert_eq!(line.text(), "alpha");
    // Clicks in the text area move the cursor instead
    line.handle_mouse(MouseEvent::down(2));
    assert_eq!(line.point(), 2);
}

#[test]
fn test_save_policies() {
    setup_test_logging();
    let mut store = MemoryHistoryStore::new();

    let mut cancelled = InputLine::new(named("h"), KillRing::new());
    type_text(&mut cancelled, "rm -rf");
    cancelled.save_history(&mut store, true).unwrap();
    assert_eq!(store.save_count(), 0);

    let mut secret = InputLine::new(
        InputOptions {
            is_password: true,
            ..named("pw")
        },
        KillRing::new(),
    );
    type_text(&mut secret, "hunter2");
    secret.save_history(&mut store, false).unwrap();
    assert_eq!(store.channel("pw"), None);

    let mut capped = InputLine::new(
        InputOptions {
            history_max_entries: 2,
            ..named("h")
        },
        KillRing::new(),
    );
    for entry in ["a", "b", "c"] {
        capped.assign_text(entry);
        capped.clean();
    }
    capped.save_history(&mut store, false).unwrap();
    assert_eq!(store.channel("h"), Some(&["b".to_string(), "c".to_string()][..]));
    assert_eq!(capped.history().len(), 3);
}

#[test]
fn test_strip_password_applies_on_save() {
    let mut store = MemoryHistoryStore::new();
    let options = InputOptions {
        strip_password: true,
        ..named("ftp")
    };
    let mut line = InputLine::new(options, KillRing::new());
    type_text(&mut line, "ftp://joe:pw@example.org");
    line.save_history(&mut store, false).unwrap();
    assert_eq!(
        store.channel("ftp"),
        Some(&["ftp://joe@example.org".to_string()][..])
    );
}

#[test]
fn test_store_failures_are_reported_not_fatal() {
    setup_test_logging();
    let options = InputOptions {
        init_from_history: true,
        ..named("h")
    };
    let mut line = InputLine::new(options, KillRing::new());
    assert!(matches!(line.load_history(&BrokenStore), Err(Error::History(_))));
    assert_eq!(line.text(), "");

    type_text(&mut line, "still works");
    let mut store = BrokenStore;
    assert!(line.save_history(&mut store, false).is_err());
    assert!(!line.history().is_changed());
    assert_eq!(line.text(), "still works");
}
