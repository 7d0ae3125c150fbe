//! Editing commands and the table that maps them to handlers.
//!
//! A key press is resolved to a [`Command`] by a [`KeyResolver`] (the host's
//! keymap, or [`DefaultKeymap`]). Each command runs an ordered list of
//! handlers from the process-wide [`CommandTable`]; selection commands, for
//! example, first anchor the selection and then move the cursor.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::input::{KeyCode, KeyEvent, KeyModifiers};
use crate::input_line::InputLine;

/// A handler run by a command.
pub type Handler = fn(&mut InputLine);

/// Every command an input line understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Command {
    /// Extend the selection one character left.
    MarkLeft,
    /// Extend the selection one character right.
    MarkRight,
    /// Extend the selection to the previous word boundary.
    MarkToWordBegin,
    /// Extend the selection to the next word boundary.
    MarkToWordEnd,
    /// Extend the selection to the start of the line.
    MarkToHome,
    /// Extend the selection to the end of the line.
    MarkToEnd,
    /// Move one word right.
    WordRight,
    /// Move one word left.
    WordLeft,
    /// Move one character right.
    Right,
    /// Move one character left.
    Left,
    /// Move to the start of the line.
    Home,
    /// Move to the end of the line.
    End,
    /// Delete the selection or the character before the cursor.
    Backspace,
    /// Delete the character at the cursor.
    Delete,
    /// Delete to the next word boundary.
    DeleteToWordEnd,
    /// Delete to the previous word boundary.
    DeleteToWordBegin,
    /// Set the mark at the cursor.
    Mark,
    /// Delete between the mark and the cursor.
    Remove,
    /// Kill from the cursor to the end of the line.
    DeleteToEnd,
    /// Empty the line.
    Clear,
    /// Copy the marked text.
    Store,
    /// Copy the marked text (clipboard binding).
    ClipboardCopy,
    /// Copy, then remove, the marked text.
    Cut,
    /// Cut (clipboard binding).
    ClipboardCut,
    /// Insert the kill buffer.
    Yank,
    /// Insert the clipboard contents.
    Paste,
    /// Insert the clipboard contents (clipboard binding).
    ClipboardPaste,
    /// Recall the previous (older) history entry.
    HistoryPrev,
    /// Recall the next (newer) history entry.
    HistoryNext,
    /// Open the history browser.
    History,
    /// Complete the word before the cursor.
    Complete,
    /// Read one raw byte and insert it literally.
    EnterCtrlSeq,
}

impl Command {
    /// Every command, in keymap order.
    pub const ALL: [Self; 32] = [
        Self::MarkLeft,
        Self::MarkRight,
        Self::MarkToWordBegin,
        Self::MarkToWordEnd,
        Self::MarkToHome,
        Self::MarkToEnd,
        Self::WordRight,
        Self::WordLeft,
        Self::Right,
        Self::Left,
        Self::Home,
        Self::End,
        Self::Backspace,
        Self::Delete,
        Self::DeleteToWordEnd,
        Self::DeleteToWordBegin,
        Self::Mark,
        Self::Remove,
        Self::DeleteToEnd,
        Self::Clear,
        Self::Store,
        Self::ClipboardCopy,
        Self::Cut,
        Self::ClipboardCut,
        Self::Yank,
        Self::Paste,
        Self::ClipboardPaste,
        Self::HistoryPrev,
        Self::HistoryNext,
        Self::History,
        Self::Complete,
        Self::EnterCtrlSeq,
    ];

    /// Keymap name of the command.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MarkLeft => "MarkLeft",
            Self::MarkRight => "MarkRight",
            Self::MarkToWordBegin => "MarkToWordBegin",
            Self::MarkToWordEnd => "MarkToWordEnd",
            Self::MarkToHome => "MarkToHome",
            Self::MarkToEnd => "MarkToEnd",
            Self::WordRight => "WordRight",
            Self::WordLeft => "WordLeft",
            Self::Right => "Right",
            Self::Left => "Left",
            Self::Home => "Home",
            Self::End => "End",
            Self::Backspace => "Backspace",
            Self::Delete => "Delete",
            Self::DeleteToWordEnd => "DeleteToWordEnd",
            Self::DeleteToWordBegin => "DeleteToWordBegin",
            Self::Mark => "Mark",
            Self::Remove => "Remove",
            Self::DeleteToEnd => "DeleteToEnd",
            Self::Clear => "Clear",
            Self::Store => "Store",
            Self::ClipboardCopy => "ClipboardCopy",
            Self::Cut => "Cut",
            Self::ClipboardCut => "ClipboardCut",
            Self::Yank => "Yank",
            Self::Paste => "Paste",
            Self::ClipboardPaste => "ClipboardPaste",
            Self::HistoryPrev => "HistoryPrev",
            Self::HistoryNext => "HistoryNext",
            Self::History => "History",
            Self::Complete => "Complete",
            Self::EnterCtrlSeq => "EnterCtrlSeq",
        }
    }

    fn handlers(self) -> Vec<Handler> {
        match self {
            Self::MarkLeft => chain(&[InputLine::cmd_start_highlight, InputLine::cmd_backward_char]),
            Self::MarkRight => chain(&[InputLine::cmd_start_highlight, InputLine::cmd_forward_char]),
            Self::MarkToWordBegin => {
                chain(&[InputLine::cmd_start_highlight, InputLine::cmd_backward_word])
            }
            Self::MarkToWordEnd => chain(&[InputLine::cmd_start_highlight, InputLine::cmd_forward_word]),
            Self::MarkToHome => chain(&[InputLine::cmd_start_highlight, InputLine::cmd_begin_of_line]),
            Self::MarkToEnd => chain(&[InputLine::cmd_start_highlight, InputLine::cmd_end_of_line]),
            Self::WordRight => chain(&[InputLine::cmd_stop_highlight, InputLine::cmd_forward_word]),
            Self::WordLeft => chain(&[InputLine::cmd_stop_highlight, InputLine::cmd_backward_word]),
            Self::Right => chain(&[InputLine::cmd_stop_highlight, InputLine::cmd_forward_char]),
            Self::Left => chain(&[InputLine::cmd_stop_highlight, InputLine::cmd_backward_char]),
            Self::Home => chain(&[InputLine::cmd_begin_of_line]),
            Self::End => chain(&[InputLine::cmd_end_of_line]),
            Self::Backspace => chain(&[InputLine::cmd_backspace]),
            Self::Delete => chain(&[InputLine::cmd_delete]),
            Self::DeleteToWordEnd => chain(&[InputLine::cmd_kill_word]),
            Self::DeleteToWordBegin => chain(&[InputLine::cmd_back_kill_word]),
            Self::Mark => chain(&[InputLine::cmd_mark]),
            Self::Remove => chain(&[InputLine::cmd_remove]),
            Self::DeleteToEnd => chain(&[InputLine::cmd_delete_to_end]),
            Self::Clear => chain(&[InputLine::cmd_clear_all]),
            Self::Store | Self::ClipboardCopy => chain(&[InputLine::cmd_clipboard_copy]),
            Self::Cut | Self::ClipboardCut => chain(&[InputLine::cmd_clipboard_cut]),
            Self::Yank => chain(&[InputLine::cmd_yank]),
            Self::Paste | Self::ClipboardPaste => chain(&[InputLine::cmd_clipboard_paste]),
            Self::HistoryPrev => chain(&[InputLine::cmd_history_previous]),
            Self::HistoryNext => chain(&[InputLine::cmd_history_next]),
            Self::History => chain(&[InputLine::cmd_history_show]),
            Self::Complete => chain(&[InputLine::cmd_complete]),
            Self::EnterCtrlSeq => chain(&[InputLine::cmd_enter_ctrl_sequence]),
        }
    }
}

fn chain(handlers: &[Handler]) -> Vec<Handler> {
    handlers.to_vec()
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown command name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCommandError(pub String);

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown input command: {}", self.0)
    }
}

impl std::error::Error for ParseCommandError {}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ParseCommandError(s.to_string()))
    }
}

/// Command to handler-list mapping, built once per process.
pub struct CommandTable {
    handlers: HashMap<Command, Vec<Handler>>,
}

impl fmt::Debug for CommandTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandTable")
            .field("commands", &self.handlers.len())
            .finish()
    }
}

impl CommandTable {
    /// The shared table.
    pub fn global() -> &'static Self {
        static TABLE: OnceLock<CommandTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let handlers: HashMap<_, _> = Command::ALL
                .into_iter()
                .map(|cmd| (cmd, cmd.handlers()))
                .collect();
            tracing::trace!(commands = handlers.len(), "input command table built");
            Self { handlers }
        })
    }

    /// Handlers for `command`, in run order.
    #[must_use]
    pub fn handlers(&self, command: Command) -> &[Handler] {
        self.handlers.get(&command).map_or(&[], Vec::as_slice)
    }

    /// Number of commands in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Maps key presses to commands.
pub trait KeyResolver {
    /// The command bound to `key`, if any.
    fn resolve(&self, key: &KeyEvent) -> Option<Command>;
}

/// Keymap with the stock bindings.
#[derive(Clone, Debug)]
pub struct DefaultKeymap {
    bindings: HashMap<KeyEvent, Command>,
}

impl Default for DefaultKeymap {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultKeymap {
    /// Create a keymap with the stock bindings.
    #[must_use]
    pub fn new() -> Self {
        let ctrl = KeyModifiers::CTRL;
        let alt = KeyModifiers::ALT;
        let shift = KeyModifiers::SHIFT;
        let none = KeyModifiers::empty();
        let ch = KeyCode::Char;

        let stock = [
            (KeyCode::Home, none, Command::Home),
            (ch('a'), ctrl, Command::Home),
            (KeyCode::End, none, Command::End),
            (ch('e'), ctrl, Command::End),
            (KeyCode::Left, none, Command::Left),
            (ch('b'), ctrl, Command::Left),
            (KeyCode::Right, none, Command::Right),
            (ch('f'), ctrl, Command::Right),
            (KeyCode::Left, ctrl, Command::WordLeft),
            (ch('b'), alt, Command::WordLeft),
            (KeyCode::Right, ctrl, Command::WordRight),
            (ch('f'), alt, Command::WordRight),
            (KeyCode::Left, shift, Command::MarkLeft),
            (KeyCode::Right, shift, Command::MarkRight),
            (KeyCode::Left, ctrl | shift, Command::MarkToWordBegin),
            (KeyCode::Right, ctrl | shift, Command::MarkToWordEnd),
            (KeyCode::Home, shift, Command::MarkToHome),
            (KeyCode::End, shift, Command::MarkToEnd),
            (KeyCode::Backspace, none, Command::Backspace),
            (ch('h'), ctrl, Command::Backspace),
            (KeyCode::Delete, none, Command::Delete),
            (ch('d'), ctrl, Command::Delete),
            (ch('d'), alt, Command::DeleteToWordEnd),
            (KeyCode::Backspace, alt, Command::DeleteToWordBegin),
            (ch(' '), ctrl, Command::Mark),
            (KeyCode::Null, none, Command::Mark),
            (ch('k'), ctrl, Command::DeleteToEnd),
            (ch('w'), alt, Command::Store),
            (KeyCode::Insert, ctrl, Command::ClipboardCopy),
            (ch('w'), ctrl, Command::Cut),
            (KeyCode::Delete, shift, Command::ClipboardCut),
            (ch('y'), ctrl, Command::Yank),
            (KeyCode::Insert, shift, Command::ClipboardPaste),
            (ch('p'), alt, Command::HistoryPrev),
            (ch('n'), alt, Command::HistoryNext),
            (ch('h'), alt, Command::History),
            (KeyCode::Tab, alt, Command::Complete),
            (ch('q'), ctrl, Command::EnterCtrlSeq),
        ];

        let bindings = stock
            .into_iter()
            .map(|(code, mods, cmd)| (KeyEvent::new(code, mods), cmd))
            .collect();
        Self { bindings }
    }

    /// Create a keymap with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `key` to `command`, replacing any previous binding.
    pub fn bind(&mut self, key: KeyEvent, command: Command) -> Option<Command> {
        self.bindings.insert(key, command)
    }

    /// Remove the binding for `key`.
    pub fn unbind(&mut self, key: &KeyEvent) -> Option<Command> {
        self.bindings.remove(key)
    }

    /// Keys bound to `command`.
    #[must_use]
    pub fn keys_for(&self, command: Command) -> Vec<KeyEvent> {
        self.bindings
            .iter()
            .filter(|(_, c)| **c == command)
            .map(|(k, _)| *k)
            .collect()
    }
}

impl KeyResolver for DefaultKeymap {
    fn resolve(&self, key: &KeyEvent) -> Option<Command> {
        self.bindings.get(key).copied()
    }
}
