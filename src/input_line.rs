//! The single-line input widget.
//!
//! [`InputLine`] owns a [`LineBuffer`], a [`History`], the completion cache
//! and the rendered [`Frame`]. Keys are resolved to [`Command`]s by a
//! [`KeyResolver`]; unresolved character keys are typed into the buffer.
//! After every event the line is redrawn unless updates are disabled.
//!
//! # Examples
//!
//! ```
//! use termline::{InputLine, InputOptions, KeyCode, KeyEvent, KillRing};
//!
//! let mut line = InputLine::new(InputOptions::default(), KillRing::new());
//! for c in "hello".chars() {
//!     line.handle_key(KeyEvent::char(c));
//! }
//! line.handle_key(KeyEvent::key(KeyCode::Home));
//! line.handle_key(KeyEvent::char('>'));
//! assert_eq!(line.text(), ">hello");
//! assert_eq!(line.point(), 1);
//! ```

use std::fmt;

use crate::collab::{ClipboardBridge, Completer, HistoryBrowser, RawByteSource, word_before};
use crate::command::{Command, CommandTable, DefaultKeymap, KeyResolver};
use crate::error::Result;
use crate::history::{History, HistoryPosition, HistoryStore};
use crate::input::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use crate::render::{Frame, HISTORY_BUTTON_WIDTH, InputColors, LineView, RenderSurface, Viewport};
use crate::text::{Direction, KillRing, LineBuffer};
use crate::unicode::{CharClassifier, column_to_char, display_width, prefix_width};

/// Options for creating an [`InputLine`].
#[derive(Clone, Debug)]
pub struct InputOptions {
    /// Visible width in columns, history button included.
    pub width: usize,
    /// Initial text, drawn as untouched until the user edits it.
    pub default_text: Option<String>,
    /// Take the newest history entry as initial text on load.
    pub init_from_history: bool,
    /// History channel name. Unnamed lines keep history in memory only.
    pub history_name: Option<String>,
    /// Redact `user:password@` credentials before they reach history.
    pub strip_password: bool,
    /// Mask the text and keep it out of history.
    pub is_password: bool,
    /// Upper bound on buffer growth, in bytes.
    pub max_buffer_bytes: Option<usize>,
    /// Entries written back to the history store.
    pub history_max_entries: usize,
    /// Palette.
    pub colors: InputColors,
    /// Character drawn for each masked character.
    pub mask_char: char,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            width: 40,
            default_text: None,
            init_from_history: false,
            history_name: None,
            strip_password: false,
            is_password: false,
            max_buffer_bytes: None,
            history_max_entries: 60,
            colors: InputColors::default(),
            mask_char: '*',
        }
    }
}

/// Whether the line consumed an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The line used the event.
    Handled,
    /// The event is left for the owner (dialog navigation, accept, cancel).
    NotHandled,
}

impl KeyOutcome {
    /// Check if the event was consumed.
    #[must_use]
    pub fn is_handled(self) -> bool {
        self == Self::Handled
    }
}

/// An editable one-row text field.
pub struct InputLine {
    buffer: LineBuffer,
    options: InputOptions,
    history: History,
    kill_ring: KillRing,
    viewport: Viewport,
    frame: Frame,
    /// Text was edited since it was last pushed to history.
    need_push: bool,
    /// Text is the untouched default.
    pristine: bool,
    disabled: bool,
    completions: Vec<String>,
    /// Set by the completion handler for the current key pass.
    complete_cmd: bool,
    update_depth: usize,
    redraws: u64,
    keymap: Box<dyn KeyResolver>,
    completer: Option<Box<dyn Completer>>,
    clipboard: Option<Box<dyn ClipboardBridge>>,
    browser: Option<Box<dyn HistoryBrowser>>,
    raw_source: Option<Box<dyn RawByteSource>>,
}

impl fmt::Debug for InputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputLine")
            .field("buffer", &self.buffer)
            .field("history", &self.history)
            .field("need_push", &self.need_push)
            .field("pristine", &self.pristine)
            .field("disabled", &self.disabled)
            .field("completions", &self.completions)
            .field("first_column", &self.viewport.first_column())
            .finish_non_exhaustive()
    }
}

impl InputLine {
    /// Create a line sharing `kill_ring` with the host's other lines.
    ///
    /// The default text, if any, starts out pristine.
    #[must_use]
    pub fn new(options: InputOptions, kill_ring: KillRing) -> Self {
        let text = options.default_text.clone().unwrap_or_default();
        let buffer =
            LineBuffer::with_text(&text, options.width).with_limit(options.max_buffer_bytes);
        let history = History::new(options.history_name.clone().filter(|n| !n.is_empty()))
            .with_strip_password(options.strip_password);
        let mut line = Self {
            buffer,
            frame: Frame::new(options.width),
            options,
            history,
            kill_ring,
            viewport: Viewport::new(),
            need_push: true,
            pristine: true,
            disabled: false,
            completions: Vec::new(),
            complete_cmd: false,
            update_depth: 0,
            redraws: 0,
            keymap: Box::new(DefaultKeymap::new()),
            completer: None,
            clipboard: None,
            browser: None,
            raw_source: None,
        };
        line.update(false);
        line
    }

    /// Resolve keys with `keymap` instead of the stock bindings.
    #[must_use]
    pub fn with_keymap(mut self, keymap: Box<dyn KeyResolver>) -> Self {
        self.keymap = keymap;
        self
    }

    /// Use `completer` for the `Complete` command.
    #[must_use]
    pub fn with_completer(mut self, completer: Box<dyn Completer>) -> Self {
        self.completer = Some(completer);
        self
    }

    /// Mirror copies to and paste from `clipboard`.
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardBridge>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    /// Use `browser` for the `History` command and the history button.
    #[must_use]
    pub fn with_history_browser(mut self, browser: Box<dyn HistoryBrowser>) -> Self {
        self.browser = Some(browser);
        self
    }

    /// Read literal bytes for `EnterCtrlSeq` from `source`.
    #[must_use]
    pub fn with_raw_source(mut self, source: Box<dyn RawByteSource>) -> Self {
        self.raw_source = Some(source);
        self
    }

    /// Use `classifier` for word motion.
    #[must_use]
    pub fn with_classifier(mut self, classifier: Box<dyn CharClassifier>) -> Self {
        self.buffer = std::mem::take(&mut self.buffer).with_classifier(classifier);
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Current text.
    #[must_use]
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Cursor offset in characters.
    #[must_use]
    pub fn point(&self) -> usize {
        self.buffer.point()
    }

    /// Mark offset while a selection is highlighted.
    #[must_use]
    pub fn mark(&self) -> Option<usize> {
        self.buffer.mark()
    }

    /// Stored mark, used by `Remove` and copy even without a highlight.
    #[must_use]
    pub fn raw_mark(&self) -> usize {
        self.buffer.selection().raw_mark()
    }

    /// Whether a selection is highlighted.
    #[must_use]
    pub fn is_highlighting(&self) -> bool {
        self.buffer.selection().is_active()
    }

    /// Whether the text is still the untouched default.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.pristine
    }

    /// Whether the text was edited since it was last recorded in history.
    #[must_use]
    pub fn needs_push(&self) -> bool {
        self.need_push
    }

    /// Underlying buffer.
    #[must_use]
    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// Options the line was created with.
    #[must_use]
    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    /// Cached completion candidates.
    #[must_use]
    pub fn completions(&self) -> &[String] {
        &self.completions
    }

    /// History list.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Mutable history list.
    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Kill ring handle.
    #[must_use]
    pub fn kill_ring(&self) -> &KillRing {
        &self.kill_ring
    }

    /// Last composed frame.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Cursor column within the field.
    #[must_use]
    pub fn cursor_column(&self) -> usize {
        self.frame.cursor()
    }

    /// First text column shown.
    #[must_use]
    pub fn first_column(&self) -> usize {
        self.viewport.first_column()
    }

    /// Number of redraws performed so far.
    #[must_use]
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    /// Whether the line is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Paint the last frame onto `surface`.
    pub fn render_to(&self, surface: &mut dyn RenderSurface) -> Result<()> {
        self.frame.render_to(surface)
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Dispatch any input event.
    pub fn handle_event(&mut self, event: &Event) -> KeyOutcome {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => {
                if self.handle_mouse(*mouse) {
                    KeyOutcome::Handled
                } else {
                    KeyOutcome::NotHandled
                }
            }
            Event::Paste(text) => {
                self.insert_text(text, false);
                KeyOutcome::Handled
            }
        }
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if is_owner_key(&key) {
            return KeyOutcome::NotHandled;
        }
        if key.code == KeyCode::Enter {
            // Multi-line paste arrives as modified Enter
            self.insert_raw(b'\n');
            self.update(true);
            return KeyOutcome::Handled;
        }
        let command = self.keymap.resolve(&key);
        let mut utf8 = [0u8; 4];
        let typed: &[u8] = match key.typed_char() {
            Some(c) => c.encode_utf8(&mut utf8).as_bytes(),
            None => &[],
        };
        self.key_pass(command, typed)
    }

    /// Handle one raw terminal byte.
    ///
    /// Control bytes are looked up in the keymap as Ctrl chords; anything
    /// unbound is inserted as typed.
    pub fn handle_raw_byte(&mut self, byte: u8) -> KeyOutcome {
        if byte_key(byte).is_some_and(|key| is_owner_key(&key)) {
            return KeyOutcome::NotHandled;
        }
        self.handle_byte(byte)
    }

    /// Run `command` as if its key had been pressed.
    pub fn execute(&mut self, command: Command) -> KeyOutcome {
        self.key_pass(Some(command), &[])
    }

    /// Handle a mouse event. Returns whether it landed on the line.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        let width = self.options.width;
        if !event.is_drag() && !event.is_inside(width) {
            return false;
        }
        let column = usize::try_from(event.column).unwrap_or(0).min(width);

        if event.is_down() {
            self.pristine = false;
            self.buffer.stop_mark();
        }

        if event.is_down() || event.is_drag() {
            if self.history_button().is_some() && column >= width - HISTORY_BUTTON_WIDTH {
                self.cmd_history_show();
            } else {
                let text = self.buffer.text();
                let target = column + self.viewport.first_column();
                let point = if target < display_width(&text) {
                    column_to_char(&text, target)
                } else {
                    self.buffer.len_chars()
                };
                self.buffer.set_point(point);
            }
            self.update(true);
        }

        // A release only ends a drag
        if self.is_highlighting() && !event.is_down() {
            return true;
        }
        if !event.is_drag() {
            self.buffer.start_mark();
        }
        true
    }

    fn handle_byte(&mut self, byte: u8) -> KeyOutcome {
        let command = byte_key(byte).and_then(|key| self.keymap.resolve(&key));
        self.key_pass(command, &[byte])
    }

    /// One key pass: run the command or type the bytes, settle the
    /// selection and completion state, redraw.
    fn key_pass(&mut self, command: Option<Command>, typed: &[u8]) -> KeyOutcome {
        if let Some(command) = command {
            tracing::trace!(%command, point = self.buffer.point(), "input command");
            for &handler in CommandTable::global().handlers(command) {
                handler(self);
            }
        }

        let selection = self.buffer.selection_mut();
        if !selection.take_extending() {
            selection.release();
        }

        if command.is_some() {
            if !std::mem::take(&mut self.complete_cmd) {
                self.completions.clear();
            }
        } else {
            if typed.is_empty() {
                return KeyOutcome::NotHandled;
            }
            if self.pristine {
                self.discard_pristine_text();
            }
            self.completions.clear();
            self.type_bytes(typed);
        }

        self.update(true);
        KeyOutcome::Handled
    }

    fn type_bytes(&mut self, bytes: &[u8]) {
        if self.buffer.feed_bytes(bytes) > 0 {
            self.need_push = true;
        }
    }

    /// Insert one byte without consulting the keymap. Does not redraw.
    fn insert_raw(&mut self, byte: u8) {
        self.completions.clear();
        self.type_bytes(&[byte]);
    }

    fn discard_pristine_text(&mut self) {
        self.buffer.clear();
        self.pristine = false;
    }

    // ------------------------------------------------------------------
    // Programmatic editing
    // ------------------------------------------------------------------

    /// Replace the text, cursor at the end.
    pub fn assign_text(&mut self, text: &str) {
        self.assign(text, true);
    }

    fn assign(&mut self, text: &str, clear_first: bool) {
        self.completions.clear();
        self.need_push = true;
        self.buffer.assign(text);
        self.update(clear_first);
    }

    /// Type `text` as if entered key by key, with a single redraw.
    ///
    /// With `extra_space`, a space follows the text.
    pub fn insert_text(&mut self, text: &str, extra_space: bool) {
        self.update_depth += 1;
        for &byte in text.as_bytes() {
            self.handle_byte(byte);
        }
        if extra_space {
            self.handle_byte(b' ');
        }
        self.update_depth -= 1;
        self.update(true);
    }

    /// Move the cursor. Completions are dropped when it actually moves.
    pub fn set_point(&mut self, point: usize) {
        if self.buffer.set_point(point) {
            self.completions.clear();
        }
        self.update(true);
    }

    /// Record the text in history, then empty the line.
    pub fn clean(&mut self) {
        self.push_history();
        self.need_push = true;
        self.buffer.clear();
        self.completions.clear();
        self.update(false);
    }

    /// Enable or disable the line.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.update(false);
    }

    /// Change the visible width.
    pub fn set_width(&mut self, width: usize) {
        self.options.width = width;
        self.buffer.set_width(width);
        self.update(false);
    }

    /// Suspend redraws. Calls nest.
    pub fn disable_update(&mut self) {
        self.update_depth += 1;
    }

    /// Undo one [`disable_update`](Self::disable_update); the outermost
    /// call redraws.
    pub fn enable_update(&mut self) {
        self.update_depth = self.update_depth.saturating_sub(1);
        self.update(false);
    }

    /// Recompute the viewport and compose a new frame.
    ///
    /// With `clear_first`, the text stops being pristine. Does nothing while
    /// updates are disabled.
    pub fn update(&mut self, clear_first: bool) {
        if self.update_depth > 0 {
            return;
        }
        self.buffer.clamp();

        let width = self.options.width;
        let history = self.history_button();
        let text_width = if history.is_some() {
            width - HISTORY_BUTTON_WIDTH
        } else {
            width
        };
        let text = self.buffer.text();
        let cursor_column = prefix_width(&text, self.buffer.point());
        self.viewport.recompute(cursor_column, text_width, width);

        let view = LineView {
            text: &text,
            cursor_column,
            selection: self.buffer.active_range(),
            mask: self.options.is_password.then_some(self.options.mask_char),
            pristine: self.pristine,
            disabled: self.disabled,
            history,
            width,
            colors: &self.options.colors,
        };
        self.frame = Frame::compose(&view, &self.viewport);
        self.redraws += 1;

        if clear_first {
            self.pristine = false;
        }
    }

    fn history_button(&self) -> Option<HistoryPosition> {
        self.history
            .position()
            .filter(|_| self.options.width > HISTORY_BUTTON_WIDTH * 2 + 1)
    }

    // ------------------------------------------------------------------
    // History lifecycle
    // ------------------------------------------------------------------

    /// Load the history channel from `store`.
    ///
    /// With `init_from_history`, the newest entry becomes the (pristine)
    /// text even when loading failed.
    pub fn load_history(&mut self, store: &dyn HistoryStore) -> Result<()> {
        let result = match self.history.name().map(str::to_owned) {
            Some(name) => store.load(&name).map(|entries| self.history.load(entries)),
            None => Ok(()),
        };
        if let Err(err) = &result {
            tracing::warn!(%err, name = ?self.history.name(), "history load failed");
        }
        if self.options.init_from_history {
            let text = self.history.newest().unwrap_or_default().to_owned();
            self.assign(&text, false);
        }
        result
    }

    /// Record the text and write the history back to `store`.
    ///
    /// Nothing happens for password lines or cancelled sessions. The store
    /// is only written when the list changed.
    pub fn save_history(&mut self, store: &mut dyn HistoryStore, cancelled: bool) -> Result<()> {
        if self.options.is_password || cancelled {
            return Ok(());
        }
        self.push_history();
        let mut result = Ok(());
        if self.history.is_changed() {
            if let Some(name) = self.history.name() {
                let entries = self.history.tail(self.options.history_max_entries);
                tracing::debug!(name, count = entries.len(), "history save");
                result = store.save(name, entries);
            }
        }
        if let Err(err) = &result {
            tracing::warn!(%err, "history save failed");
        }
        self.history.clear_changed();
        result
    }

    fn push_history(&mut self) {
        let text = self.buffer.text();
        self.history.push(&text);
        self.need_push = false;
    }

    // ------------------------------------------------------------------
    // Command handlers
    // ------------------------------------------------------------------

    pub(crate) fn cmd_start_highlight(&mut self) {
        let point = self.buffer.point();
        self.buffer.selection_mut().extend_from(point);
    }

    pub(crate) fn cmd_stop_highlight(&mut self) {
        if self.is_highlighting() {
            self.buffer.stop_mark();
        }
    }

    pub(crate) fn cmd_begin_of_line(&mut self) {
        self.buffer.move_to_begin();
    }

    pub(crate) fn cmd_end_of_line(&mut self) {
        self.buffer.move_to_end();
    }

    pub(crate) fn cmd_backward_char(&mut self) {
        self.buffer.move_char(Direction::Backward);
    }

    pub(crate) fn cmd_forward_char(&mut self) {
        self.buffer.move_char(Direction::Forward);
    }

    pub(crate) fn cmd_backward_word(&mut self) {
        self.buffer.move_word(Direction::Backward);
    }

    pub(crate) fn cmd_forward_word(&mut self) {
        self.buffer.move_word(Direction::Forward);
    }

    pub(crate) fn cmd_backspace(&mut self) {
        let changed = if self.is_highlighting() {
            self.buffer.delete_selection().is_some()
        } else {
            self.buffer.delete_backward()
        };
        self.need_push |= changed;
    }

    pub(crate) fn cmd_delete(&mut self) {
        if self.pristine {
            self.discard_pristine_text();
        } else if self.is_highlighting() {
            self.need_push |= self.buffer.delete_selection().is_some();
        } else {
            self.need_push |= self.buffer.delete_forward();
        }
    }

    pub(crate) fn cmd_kill_word(&mut self) {
        self.buffer.delete_word_forward();
        self.need_push = true;
    }

    pub(crate) fn cmd_back_kill_word(&mut self) {
        self.buffer.delete_word_backward();
        self.need_push = true;
    }

    pub(crate) fn cmd_mark(&mut self) {
        self.buffer.start_mark();
    }

    pub(crate) fn cmd_remove(&mut self) {
        let mark = self.raw_mark();
        self.buffer.delete_region(self.buffer.point(), mark);
        self.need_push = true;
    }

    pub(crate) fn cmd_delete_to_end(&mut self) {
        let killed = self.buffer.delete_to_end();
        self.need_push |= !killed.is_empty();
        self.kill_ring.set(killed);
    }

    pub(crate) fn cmd_clear_all(&mut self) {
        self.need_push = true;
        self.buffer.clear();
    }

    pub(crate) fn cmd_clipboard_copy(&mut self) {
        let point = self.buffer.point();
        let mark = self.raw_mark().min(self.buffer.len_chars());
        let (first, last) = (mark.min(point), mark.max(point));

        if first == last {
            if let Some(clipboard) = self.clipboard.as_mut() {
                if let Err(err) = clipboard.copy_fallback() {
                    tracing::warn!(%err, "clipboard fallback failed");
                }
            }
            return;
        }

        let text = self.buffer.slice(first, last);
        self.kill_ring.set(text.clone());
        if let Some(clipboard) = self.clipboard.as_mut() {
            if let Err(err) = clipboard.write(&text) {
                tracing::warn!(%err, "clipboard write failed");
            }
        }
    }

    pub(crate) fn cmd_clipboard_cut(&mut self) {
        self.cmd_clipboard_copy();
        self.cmd_remove();
    }

    pub(crate) fn cmd_yank(&mut self) {
        if self.kill_ring.yank_into(&mut self.buffer) > 0 {
            self.need_push = true;
        }
    }

    pub(crate) fn cmd_clipboard_paste(&mut self) {
        let Some(clipboard) = self.clipboard.as_mut() else {
            return;
        };
        match clipboard.read() {
            Ok(Some(text)) => self.type_bytes(text.as_bytes()),
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "clipboard read failed"),
        }
    }

    pub(crate) fn cmd_history_previous(&mut self) {
        if self.history.is_empty() {
            return;
        }
        // A blank draft is never recorded, so the first step lands on the
        // newest entry instead of skipping it
        let blank_draft = self.need_push && self.buffer.text().trim().is_empty();
        if self.need_push {
            self.push_history();
        }
        let entry = if blank_draft {
            self.history.rewind()
        } else {
            self.history.previous()
        };
        if let Some(entry) = entry.map(str::to_owned) {
            self.assign_text(&entry);
            self.need_push = false;
        }
    }

    pub(crate) fn cmd_history_next(&mut self) {
        if self.need_push {
            self.push_history();
            self.assign_text("");
            return;
        }
        if self.history.is_empty() {
            return;
        }
        match self.history.next().map(str::to_owned) {
            Some(entry) => {
                self.assign_text(&entry);
                self.need_push = false;
            }
            None => self.assign_text(""),
        }
    }

    pub(crate) fn cmd_history_show(&mut self) {
        let Some(browser) = self.browser.as_mut() else {
            return;
        };
        let len = self.history.len();
        let current = self.history.current_index();
        let picked = browser.pick(self.history.entries_mut(), current);
        if self.history.reconcile(len) {
            tracing::debug!(before = len, after = self.history.len(), "history edited in browser");
        }
        if let Some(text) = picked {
            self.assign_text(&text);
        }
    }

    pub(crate) fn cmd_complete(&mut self) {
        self.complete_cmd = true;
        let Some(completer) = self.completer.as_mut() else {
            return;
        };
        let text = self.buffer.text();
        let point = self.buffer.point();
        let candidates = completer.complete(&text, point);
        tracing::debug!(count = candidates.len(), "completion candidates");

        let word_len = word_before(&text, point).chars().count();
        let replacement = match candidates.as_slice() {
            [] => return,
            [only] => only.clone(),
            many => {
                let prefix = common_prefix(many);
                if prefix.chars().count() <= word_len {
                    self.completions = candidates;
                    return;
                }
                prefix.to_owned()
            }
        };

        if let Err(err) = self
            .buffer
            .replace_range(point - word_len, point, &replacement)
        {
            tracing::warn!(%err, "completion insert dropped");
            return;
        }
        self.need_push = true;
        self.completions = if candidates.len() > 1 {
            candidates
        } else {
            Vec::new()
        };
    }

    pub(crate) fn cmd_enter_ctrl_sequence(&mut self) {
        let Some(source) = self.raw_source.as_mut() else {
            return;
        };
        match source.read_byte() {
            Ok(byte) => self.insert_raw(control_code(byte)),
            Err(err) => tracing::warn!(%err, "raw byte read failed"),
        }
    }
}

/// Keys the owning dialog handles.
fn is_owner_key(key: &KeyEvent) -> bool {
    key.modifiers.is_empty()
        && matches!(
            key.code,
            KeyCode::Up | KeyCode::Down | KeyCode::Esc | KeyCode::F(10) | KeyCode::Enter
        )
}

/// Key a raw control byte stands for, for keymap lookup.
fn byte_key(byte: u8) -> Option<KeyEvent> {
    let key = match byte {
        0x00 => KeyEvent::key(KeyCode::Null),
        0x08 | 0x7f => KeyEvent::key(KeyCode::Backspace),
        b'\t' => KeyEvent::key(KeyCode::Tab),
        b'\n' | b'\r' => KeyEvent::key(KeyCode::Enter),
        0x1b => KeyEvent::key(KeyCode::Esc),
        0x01..=0x1a => KeyEvent::new(
            KeyCode::Char(char::from(b'a' + byte - 1)),
            KeyModifiers::CTRL,
        ),
        _ => return None,
    };
    Some(key)
}

/// Letters become their control code; other bytes pass through.
fn control_code(byte: u8) -> u8 {
    if byte.is_ascii_alphabetic() {
        byte & 0x1f
    } else {
        byte
    }
}

/// Longest prefix shared by every candidate, on a character boundary.
fn common_prefix(candidates: &[String]) -> &str {
    let Some((first, rest)) = candidates.split_first() else {
        return "";
    };
    let mut end = first.len();
    for other in rest {
        let shared = first
            .char_indices()
            .zip(other.chars())
            .take_while(|((_, a), b)| a == b)
            .last()
            .map_or(0, |((i, a), _)| i + a.len_utf8());
        end = end.min(shared);
    }
    &first[..end]
}
