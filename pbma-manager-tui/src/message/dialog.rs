//! Dialog message types

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMessage {
    /// Enter: run the highlighted choice, or acknowledge
    Confirm,

    /// Esc: dismiss without acting
    Cancel,

    /// Move the highlight between yes and no
    ToggleChoice,

    /// `y`: answer yes directly
    ChooseYes,

    /// `n`: answer no directly
    ChooseNo,
}
