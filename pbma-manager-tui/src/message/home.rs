//! Main page message types

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Main page messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeMessage {
    /// Type a character into the SID field
    Input(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    /// Move the window grid selection
    MoveSelection(GridDirection),

    /// Plugin button activated
    CreatePlugins,

    /// Window button `n` activated
    RegisterWindow(u32),

    /// Initialize button activated
    Initialize,
}
