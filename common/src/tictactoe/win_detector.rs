use super::types::{BOARD_SIZE, Mark};

/// Rows, then columns, then the two diagonals. The order decides which line
/// `check_win` reports first.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Mark; BOARD_SIZE]) -> Option<Mark> {
    check_win_with_line(cells).map(|(mark, _)| mark)
}

pub fn check_win_with_line(cells: &[Mark; BOARD_SIZE]) -> Option<(Mark, [usize; 3])> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && cells[b] == mark && cells[c] == mark {
            return Some((mark, line));
        }
    }
    None
}
