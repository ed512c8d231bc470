use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_SIZE, Mark};
use super::win_detector::{check_win, check_win_with_line};

/// The 3x3 grid, cells indexed 0..9 row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; BOARD_SIZE],
        }
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, position: usize) -> Option<Mark> {
        self.cells.get(position).copied()
    }

    /// Empty cells in ascending order. Search tie-breaking relies on this order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(position, _)| position)
            .collect()
    }

    pub fn make_move(&mut self, position: usize, mark: Mark) -> bool {
        if mark == Mark::Empty {
            return false;
        }
        match self.cells.get_mut(position) {
            Some(cell) if *cell == Mark::Empty => {
                *cell = mark;
                true
            }
            _ => false,
        }
    }

    /// Clears the cell without checking who placed it.
    pub fn undo_move(&mut self, position: usize) {
        if let Some(cell) = self.cells.get_mut(position) {
            *cell = Mark::Empty;
        }
    }

    pub fn check_winner(&self) -> Option<Mark> {
        check_win(&self.cells)
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        check_win_with_line(&self.cells).map(|(_, line)| line)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_terminal(&self) -> bool {
        self.check_winner().is_some() || self.is_full()
    }
}

impl FromStr for Board {
    type Err = String;

    /// Parses nine cells written as `X`, `O` or a space, e.g. `"XXOXOO  X"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != BOARD_SIZE {
            return Err(format!(
                "Board must have {} cells, got {}",
                BOARD_SIZE,
                chars.len()
            ));
        }

        let mut board = Board::new();
        for (position, c) in chars.into_iter().enumerate() {
            board.cells[position] =
                Mark::from_char(c).ok_or_else(|| format!("Invalid cell '{}' at {}", c, position))?;
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}
