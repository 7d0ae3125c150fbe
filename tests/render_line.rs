//! Frame composition and painting, checked with inline snapshots.
//!
//! Run with:
//!   cargo test --test `render_line`
//!   cargo insta review   # after changing the layout

mod common;

use common::{line_of_width, setup_test_logging, type_text};
use termline::render::{LineView, Viewport};
use termline::{
    AnsiSurface, Frame, InputColors, InputLine, InputOptions, KeyCode, KeyEvent, KeyModifiers,
    KillRing, LineCanvas, MemoryHistoryStore, RenderSurface, Style,
};

fn role(style: Style) -> &'static str {
    let colors = InputColors::default();
    if style == colors.main {
        "main"
    } else if style == colors.mark {
        "mark"
    } else if style == colors.unchanged {
        "unchanged"
    } else if style == colors.history {
        "history"
    } else if style == colors.disabled {
        "disabled"
    } else {
        "other"
    }
}

/// One line per span, then the cursor column.
fn describe(frame: &Frame) -> String {
    let mut out = String::new();
    for span in frame.spans() {
        out.push_str(&format!("{} {:?} {}\n", span.column, span.text, role(span.style)));
    }
    out.push_str(&format!("cursor {}", frame.cursor()));
    out
}

fn line_with_options(options: InputOptions) -> InputLine {
    InputLine::new(options, KillRing::new())
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn test_plain_text() {
    setup_test_logging();
    let mut line = line_of_width(10);
    type_text(&mut line, "hello");
    insta::assert_snapshot!(describe(line.frame()), @r#"
    0 "hello     " main
    cursor 5
    "#);
}

#[test]
fn test_pristine_default_then_typed() {
    setup_test_logging();
    let mut line = line_with_options(InputOptions {
        width: 8,
        default_text: Some("~/src".to_string()),
        ..InputOptions::default()
    });
    insta::assert_snapshot!(describe(line.frame()), @r#"
    0 "~/src   " unchanged
    cursor 5
    "#);

    type_text(&mut line, "x");
    insta::assert_snapshot!(describe(line.frame()), @r#"
    0 "x       " main
    cursor 1
    "#);
}

#[test]
fn test_password_is_masked() {
    let mut line = line_with_options(InputOptions {
        width: 8,
        is_password: true,
        ..InputOptions::default()
    });
    type_text(&mut line, "secret");
    insta::assert_snapshot!(describe(line.frame()), @r#"
    0 "******  " main
    cursor 6
    "#);
}

#[test]
fn test_selection_spans() {
    let mut line = line_of_width(10);
    type_text(&mut line, "one two");
    line.handle_key(KeyEvent::new(
        KeyCode::Left,
        KeyModifiers::CTRL | KeyModifiers::SHIFT,
    ));
    insta::assert_snapshot!(describe(line.frame()), @r#"
    0 "one " main
    4 "two" mark
    7 "   " main
    cursor 4
    "#);
}

#[test]
fn test_disabled_field() {
    let mut line = line_of_width(6);
    type_text(&mut line, "abc");
    line.set_disabled(true);
    insta::assert_snapshot!(describe(line.frame()), @r#"
    0 "abc   " disabled
    cursor 3
    "#);
}

#[test]
fn test_scrolls_to_keep_cursor_visible() {
    setup_test_logging();
    let mut line = line_of_width(10);
    type_text(&mut line, "abcdefghijklmnop");
    assert_eq!(line.first_column(), 7);
    insta::assert_snapshot!(describe(line.frame()), @r#"
    0 "hijklmnop " main
    cursor 9
    "#);

    line.handle_key(KeyEvent::key(KeyCode::Home));
    assert_eq!(line.first_column(), 0);
    insta::assert_snapshot!(describe(line.frame()), @r#"
    0 "abcdefghij" main
    cursor 0
    "#);
}

#[test]
fn test_text_exactly_field_width() {
    setup_test_logging();
    let colors = InputColors::default();
    let view = LineView {
        text: "0123456789",
        cursor_column: 10,
        selection: None,
        mask: None,
        pristine: false,
        disabled: false,
        history: None,
        width: 10,
        colors: &colors,
    };
    let frame = Frame::compose(&view, &Viewport::new());
    assert_eq!(frame.text(), "0123456789");
    assert_eq!(frame.cursor(), 9);

    // The live line keeps its cursor one column past the text, which is
    // outside a full window, so the view re-anchors.
    let mut line = line_of_width(10);
    line.assign_text("0123456789");
    assert_eq!(line.first_column(), 7);
    assert_eq!(line.frame().text(), "789       ");

    line.handle_key(KeyEvent::key(KeyCode::Home));
    assert_eq!(line.first_column(), 0);
    assert_eq!(line.frame().text(), "0123456789");
    eprintln!("[TEST] PASS: full-width text composes unscrolled");
}

#[test]
fn test_wide_char_cut_at_left_edge() {
    let mut line = line_of_width(9);
    line.assign_text("a漢字かな");
    line.update(false);
    // か straddles the left edge and is replaced by a blank
    insta::assert_snapshot!(describe(line.frame()), @r#"
    0 " な      " main
    cursor 3
    "#);
}

#[test]
fn test_history_button() {
    setup_test_logging();
    let store = MemoryHistoryStore::new().with_channel("h", ["alpha"]);
    let mut line = line_with_options(InputOptions {
        width: 12,
        history_name: Some("h".to_string()),
        ..InputOptions::default()
    });
    line.load_history(&store).unwrap();
    line.update(false);
    insta::assert_snapshot!(describe(line.frame()), @r#"
    0 "         " unchanged
    9 "[^]" history
    cursor 0
    "#);
}

// ============================================================================
// Painting
// ============================================================================

#[test]
fn test_canvas_matches_frame() {
    let mut line = line_of_width(10);
    type_text(&mut line, "one two");
    line.handle_key(KeyEvent::new(
        KeyCode::Left,
        KeyModifiers::CTRL | KeyModifiers::SHIFT,
    ));

    let mut canvas = LineCanvas::new(10);
    line.render_to(&mut canvas).unwrap();
    assert_eq!(canvas.text(), line.frame().text());
    assert_eq!(canvas.cursor(), Some(4));

    let colors = InputColors::default();
    assert_eq!(canvas.style_at(3), Some(colors.main));
    assert_eq!(canvas.style_at(4), Some(colors.mark));
    assert_eq!(canvas.style_at(6), Some(colors.mark));
    assert_eq!(canvas.style_at(7), Some(colors.main));
    eprintln!("[TEST] PASS: canvas cells follow frame spans");
}

#[test]
fn test_ansi_output() {
    let mut line = line_of_width(4);
    type_text(&mut line, "hi");
    let mut surface = AnsiSurface::new(Vec::new(), 2);
    line.render_to(&mut surface).unwrap();
    let written = String::from_utf8_lossy(surface.buffer()).into_owned();
    insta::assert_snapshot!(format!("{written:?}"), @r#""\u{1b}[3G\u{1b}[0;30;46mhi  \u{1b}[5G""#);
}

#[test]
fn test_surface_trait_object() {
    let mut line = line_of_width(5);
    type_text(&mut line, "漢x");
    let mut canvas = LineCanvas::new(5);
    let surface: &mut dyn RenderSurface = &mut canvas;
    line.render_to(surface).unwrap();
    assert_eq!(canvas.text(), "漢x  ");
    assert_eq!(canvas.cursor(), Some(3));
}
