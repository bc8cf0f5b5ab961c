//! Grid storage and empty-cell bookkeeping.
//!
//! [`Board`] knows nothing about game rules: it stores symbols, counts empty
//! cells, and answers range queries. Legality checking (emptiness, range,
//! turn order) belongs to [`crate::engine::Engine`].

use std::fmt;
use std::str::FromStr;

/// One of the two participant markers. `X` always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// The complementary symbol.
    pub fn other(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}

impl FromStr for Symbol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" | "X" => Ok(Symbol::X),
            "o" | "O" => Ok(Symbol::O),
            other => Err(format!("invalid symbol '{other}', expected X or O")),
        }
    }
}

/// An N×N grid of cells, each empty or holding a [`Symbol`].
///
/// Cells are stored row-major in a flat vector. The empty-cell counter is
/// kept in lockstep with the grid: it is decremented exactly once per
/// placement and restored by [`Board::reset`].
pub struct Board {
    size: usize,
    cells: Vec<Option<Symbol>>,
    empty_cells: usize,
}

impl Board {
    /// Create an all-empty board with the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            empty_cells: size * size,
        }
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The symbol at (row, col), or `None` for an empty or out-of-range cell.
    pub fn get(&self, row: usize, col: usize) -> Option<Symbol> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[self.idx(row, col)]
    }

    /// True iff the cell holds no symbol.
    ///
    /// Out-of-range coordinates also read as empty, so callers must check
    /// [`Board::out_of_range`] first when the distinction matters.
    pub fn is_cell_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_none()
    }

    /// True iff either coordinate falls outside the grid.
    pub fn out_of_range(&self, row: usize, col: usize) -> bool {
        row >= self.size || col >= self.size
    }

    /// Write a symbol into a cell and decrement the empty-cell counter.
    ///
    /// Performs no legality checking: the caller must have verified that the
    /// cell is in range and empty, otherwise the counter goes out of sync.
    pub fn place_move(&mut self, row: usize, col: usize, symbol: Symbol) {
        let i = self.idx(row, col);
        self.cells[i] = Some(symbol);
        self.empty_cells -= 1;
    }

    /// True iff no empty cells remain.
    pub fn is_full(&self) -> bool {
        self.empty_cells == 0
    }

    /// Clear every cell and restore the empty-cell counter to size².
    pub fn reset(&mut self) {
        self.cells.fill(None);
        self.empty_cells = self.size * self.size;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = match self.get(row, col) {
                    Some(Symbol::X) => 'X',
                    Some(Symbol::O) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3);
        for row in 0..3 {
            for col in 0..3 {
                assert!(board.is_cell_empty(row, col));
            }
        }
        assert!(!board.is_full());
    }

    #[test]
    fn test_empty_cell_counter() {
        let mut board = Board::new(3);
        board.place_move(0, 0, Symbol::X);
        board.place_move(1, 1, Symbol::O);
        assert!(!board.is_full());

        // Fill the remaining 7 cells
        let mut placed = 2;
        for row in 0..3 {
            for col in 0..3 {
                if board.is_cell_empty(row, col) {
                    board.place_move(row, col, Symbol::X);
                    placed += 1;
                }
            }
        }
        assert_eq!(placed, 9);
        assert!(board.is_full());
    }

    #[test]
    fn test_out_of_range() {
        let board = Board::new(3);
        assert!(!board.out_of_range(0, 0));
        assert!(!board.out_of_range(2, 2));
        assert!(board.out_of_range(3, 0));
        assert!(board.out_of_range(0, 3));
        assert!(board.out_of_range(7, 7));
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let mut board = Board::new(3);
        board.place_move(2, 2, Symbol::O);
        assert_eq!(board.get(2, 2), Some(Symbol::O));
        assert_eq!(board.get(3, 3), None);
    }

    #[test]
    fn test_reset_matches_fresh_board() {
        let mut board = Board::new(4);
        board.place_move(0, 0, Symbol::X);
        board.place_move(3, 3, Symbol::O);
        board.reset();

        let fresh = Board::new(4);
        assert!(!board.is_full());
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(board.get(row, col), fresh.get(row, col));
                assert_eq!(board.is_cell_empty(row, col), fresh.is_cell_empty(row, col));
            }
        }
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3);
        board.place_move(0, 0, Symbol::X);
        board.place_move(1, 1, Symbol::O);
        let rendered = board.to_string();
        assert_eq!(rendered, "X . . \n. O . \n. . . \n");
    }

    #[test]
    fn test_symbol_other() {
        assert_eq!(Symbol::X.other(), Symbol::O);
        assert_eq!(Symbol::O.other(), Symbol::X);
    }

    #[test]
    fn test_symbol_from_str() {
        assert_eq!("x".parse::<Symbol>(), Ok(Symbol::X));
        assert_eq!("O".parse::<Symbol>(), Ok(Symbol::O));
        assert!("z".parse::<Symbol>().is_err());
    }
}
