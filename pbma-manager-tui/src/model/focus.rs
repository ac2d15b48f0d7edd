//! Focus on the single page

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeFocus {
    /// SID text field (Enter creates plugins)
    #[default]
    SidInput,
    /// Window registration grid
    WindowGrid,
    /// Initialize button
    InitializeButton,
}

impl HomeFocus {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::SidInput => Self::WindowGrid,
            Self::WindowGrid => Self::InitializeButton,
            Self::InitializeButton => Self::SidInput,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::SidInput => Self::InitializeButton,
            Self::WindowGrid => Self::SidInput,
            Self::InitializeButton => Self::WindowGrid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_both_ways() {
        let start = HomeFocus::default();
        assert_eq!(start.next().next().next(), start);
        assert_eq!(start.prev(), HomeFocus::InitializeButton);
        assert_eq!(start.next().prev(), start);
    }
}
