//! Random-restart hill climbing driver.
//!
//! Each restart scatters the queens over distinct random cells and then
//! repeatedly moves the most-threatened queen to the least-attacked free
//! cell. Moves are applied unconditionally: the climb accepts non-improving
//! successors and can plateau or cycle, which the per-restart move budget
//! bounds. A restart that runs out of moves is discarded and the board
//! reseeded, up to the restart budget.

use std::fmt;
use std::sync::Arc;

use rand::{seq::SliceRandom, Rng};

use crate::attack::AttackTable;
use crate::board::Board;
use crate::tracker::ConflictTracker;

/// Budgets bounding a single solve attempt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchLimits {
    /// Successor moves attempted within one restart before reseeding.
    pub max_moves_per_restart: usize,

    /// Random restarts attempted before reporting failure.
    pub max_restarts: usize,
}

impl Default for SearchLimits {
    fn default() -> SearchLimits {
        SearchLimits {
            max_moves_per_restart: 1000,
            max_restarts: 100,
        }
    }
}

/// Counters accumulated over one solve attempt.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchStats {
    /// Restarts consumed, including the one that solved the board.
    pub restarts: usize,

    /// Successor moves applied across all restarts.
    pub moves: usize,
}

/// Terminal result of a solve attempt.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SolveOutcome {
    /// A conflict-free placement was found.
    Solved { board: Board, stats: SearchStats },

    /// Every restart exhausted its move budget without reaching zero threat.
    /// This is a defined negative outcome, not an error.
    Exhausted { stats: SearchStats },
}

/// Errors returned from the solve entry points.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolveError {
    /// The board size was zero.
    InvalidBoardSize,

    /// More queens were requested than the board has cells.
    TooManyQueens { queens: usize, cells: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidBoardSize => {
                write!(f, "board size must be at least 1")
            }
            SolveError::TooManyQueens { queens, cells } => {
                write!(
                    f,
                    "cannot place {queens} queens on a board with only {cells} cells"
                )
            }
        }
    }
}

/// Runs the random-restart hill climb with the given random source.
///
/// `size` is the board's side length and `num_queens` the number of queens to
/// place; the classic problem uses `num_queens == size` but any count up to
/// the cell count is accepted.
pub fn solve_with_rng<R: Rng>(
    size: usize,
    num_queens: usize,
    limits: SearchLimits,
    rng: &mut R,
) -> Result<SolveOutcome, SolveError> {
    if size == 0 {
        return Err(SolveError::InvalidBoardSize);
    }
    if num_queens > size * size {
        return Err(SolveError::TooManyQueens {
            queens: num_queens,
            cells: size * size,
        });
    }

    let table = Arc::new(AttackTable::new(size));
    let mut board = Board::empty(size);
    let mut tracker = ConflictTracker::new(Arc::clone(&table));
    let mut stats = SearchStats::default();

    let mut cells: Vec<(usize, usize)> = (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .collect();

    for restart in 0..limits.max_restarts {
        stats.restarts = restart + 1;

        // Scatter the queens over distinct cells: shuffle the full cell list
        // and take the first K.
        board.clear();
        cells.shuffle(rng);
        for &(row, col) in cells.iter().take(num_queens) {
            board
                .place(row, col)
                .expect("shuffled cells are distinct and in bounds");
        }
        tracker.rebuild(&board);

        // A lucky seed (or a single queen) needs no moves at all.
        if tracker.total_threat(&board) == 0 {
            return Ok(SolveOutcome::Solved { board, stats });
        }

        for _ in 0..limits.max_moves_per_restart {
            let from = match tracker.most_threatened_queen(&board) {
                Some(pos) => pos,
                None => break,
            };
            let to = match tracker.least_attacked_free(&board) {
                // A fully occupied board has nowhere to move to.
                None => break,
                Some(pos) => pos,
            };

            tracker.apply_move(&mut board, from, to);
            stats.moves += 1;

            if tracker.total_threat(&board) == 0 {
                return Ok(SolveOutcome::Solved { board, stats });
            }
        }

        log::debug!(
            "Restart {}/{} used its move budget of {} without a solution.",
            restart + 1,
            limits.max_restarts,
            limits.max_moves_per_restart
        );
    }

    Ok(SolveOutcome::Exhausted { stats })
}

/// Solves the classic N-queens arrangement (`num_queens == size`) with the
/// default budgets and a thread-local random source.
pub fn solve(size: usize) -> Result<SolveOutcome, SolveError> {
    let mut rng = rand::rng();
    solve_with_rng(size, size, SearchLimits::default(), &mut rng)
}
