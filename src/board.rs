//! Board representation for the N-queens solver.
//!
//! This module provides the [`Board`] struct, a mutable N×N grid of cells that
//! either hold a queen or are empty. The local search owns exactly one board
//! per solve attempt and moves queens in place; there is no copy-on-write or
//! history sharing.

use std::{fmt, str::FromStr};

/// State of a single board cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {
    Empty,
    Queen,
}

/// Mutable square board that stores cells in row-major order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given side length.
    pub fn empty(size: usize) -> Board {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells on the board.
    pub fn num_cells(&self) -> usize {
        self.size * self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) is outside the {size}x{size} board",
            size = self.size
        );
        row * self.size + col
    }

    /// Returns the state of the given cell.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Returns true if the given cell holds a queen.
    pub fn is_queen(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Cell::Queen
    }

    /// Places a queen on an empty cell.
    pub fn place(&mut self, row: usize, col: usize) -> Result<(), String> {
        if row >= self.size || col >= self.size {
            return Err(format!(
                "cell ({row}, {col}) is out of bounds for a {size}x{size} board",
                size = self.size
            ));
        }
        let index = row * self.size + col;
        if self.cells[index] == Cell::Queen {
            return Err(format!("cell ({row}, {col}) already holds a queen"));
        }
        self.cells[index] = Cell::Queen;
        Ok(())
    }

    /// Removes the queen from an occupied cell.
    pub fn remove(&mut self, row: usize, col: usize) -> Result<(), String> {
        if row >= self.size || col >= self.size {
            return Err(format!(
                "cell ({row}, {col}) is out of bounds for a {size}x{size} board",
                size = self.size
            ));
        }
        let index = row * self.size + col;
        if self.cells[index] == Cell::Empty {
            return Err(format!("cell ({row}, {col}) does not hold a queen"));
        }
        self.cells[index] = Cell::Empty;
        Ok(())
    }

    /// Clears every cell. Used when reseeding the board for a restart.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Number of queens currently on the board.
    pub fn num_queens(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Queen).count()
    }

    /// Iterator over the positions of all queens, in row-major order.
    ///
    /// This is a full grid scan; the search uses it for initialization and
    /// candidate selection, never for per-move count maintenance.
    pub fn queens(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().filter_map(|(index, &cell)| {
            if cell == Cell::Queen {
                Some((index / self.size, index % self.size))
            } else {
                None
            }
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row != 0 {
                writeln!(f)?;
            }
            for col in 0..self.size {
                match self.cell(row, col) {
                    Cell::Queen => write!(f, "Q")?,
                    Cell::Empty => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split_whitespace().collect();
        let size = rows.len();
        if size == 0 {
            return Err("board string contains no rows".to_string());
        }

        let mut board = Board::empty(size);
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != size {
                return Err(format!(
                    "row {row} has {} cells, expected {size}",
                    line.chars().count()
                ));
            }
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'Q' => board.cells[row * size + col] = Cell::Queen,
                    '.' => {}
                    _ => {
                        return Err(format!(
                            "invalid character '{ch}' at row {row}, column {col}; expected 'Q' or '.'"
                        ))
                    }
                }
            }
        }

        Ok(board)
    }
}
