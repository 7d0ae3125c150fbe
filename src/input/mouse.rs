//! Mouse events in widget-local coordinates.

/// Kind of mouse event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// Button pressed.
    Down,
    /// Mouse moved with the button held.
    Drag,
    /// Button released.
    Up,
}

/// A mouse event.
///
/// `column` and `row` are relative to the widget origin; the owner translates
/// screen coordinates before dispatching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    /// Column relative to the widget's first cell.
    pub column: i32,
    /// Row relative to the widget's row.
    pub row: i32,
    /// Kind of event.
    pub kind: MouseEventKind,
}

impl MouseEvent {
    /// Create a new mouse event.
    #[must_use]
    pub fn new(column: i32, row: i32, kind: MouseEventKind) -> Self {
        Self { column, row, kind }
    }

    /// Create a press event on the widget row.
    #[must_use]
    pub fn down(column: i32) -> Self {
        Self::new(column, 0, MouseEventKind::Down)
    }

    /// Create a drag event on the widget row.
    #[must_use]
    pub fn drag(column: i32) -> Self {
        Self::new(column, 0, MouseEventKind::Drag)
    }

    /// Create a release event on the widget row.
    #[must_use]
    pub fn up(column: i32) -> Self {
        Self::new(column, 0, MouseEventKind::Up)
    }

    /// Check if this is a press event.
    #[must_use]
    pub fn is_down(&self) -> bool {
        self.kind == MouseEventKind::Down
    }

    /// Check if this is a drag event.
    #[must_use]
    pub fn is_drag(&self) -> bool {
        self.kind == MouseEventKind::Drag
    }

    /// Whether the event lands inside a one-row widget `width` cells wide.
    #[must_use]
    pub fn is_inside(&self, width: usize) -> bool {
        self.row == 0
            && self.column >= 0
            && usize::try_from(self.column).is_ok_and(|col| col < width)
    }
}
