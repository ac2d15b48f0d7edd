//! Window registration button grid

#[derive(Debug, Clone)]
pub struct WindowGrid {
    slots: u32,
    /// Selected slot, 0-based
    selected: u32,
}

impl WindowGrid {
    pub const DEFAULT_SLOTS: u32 = 20;
    pub const COLUMNS: u32 = 4;

    pub fn new(slots: u32) -> Self {
        Self {
            slots: slots.max(1),
            selected: 0,
        }
    }

    pub fn rows(&self) -> u32 {
        self.slots.div_ceil(Self::COLUMNS)
    }

    /// Selected window number, 1-based
    pub fn selected_window(&self) -> u32 {
        self.selected + 1
    }

    pub fn contains(&self, window: u32) -> bool {
        (1..=self.slots).contains(&window)
    }

    pub fn move_left(&mut self) {
        if self.selected % Self::COLUMNS > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.selected % Self::COLUMNS < Self::COLUMNS - 1 && self.selected + 1 < self.slots {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected >= Self::COLUMNS {
            self.selected -= Self::COLUMNS;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + Self::COLUMNS < self.slots {
            self.selected += Self::COLUMNS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_stays_inside_grid() {
        let mut grid = WindowGrid::new(20);
        grid.move_up();
        grid.move_left();
        assert_eq!(grid.selected_window(), 1);

        for _ in 0..10 {
            grid.move_right();
        }
        assert_eq!(grid.selected_window(), 4);

        for _ in 0..10 {
            grid.move_down();
        }
        assert_eq!(grid.selected_window(), 20);
    }

    #[test]
    fn partial_last_row() {
        let mut grid = WindowGrid::new(6);
        assert_eq!(grid.rows(), 2);
        grid.move_down();
        assert_eq!(grid.selected_window(), 5);
        grid.move_right();
        grid.move_right();
        assert_eq!(grid.selected_window(), 6);

        let mut grid = WindowGrid::new(6);
        grid.move_right();
        grid.move_right();
        grid.move_down();
        assert_eq!(grid.selected_window(), 3);
    }

    #[test]
    fn contains_is_one_based() {
        let grid = WindowGrid::new(20);
        assert!(!grid.contains(0));
        assert!(grid.contains(1));
        assert!(grid.contains(20));
        assert!(!grid.contains(21));
    }
}
