//! Incremental conflict bookkeeping for the local search.
//!
//! The tracker keeps one count per cell: the number of queens whose line of
//! sight includes that cell. Read through the board's occupancy the single
//! array covers both of the search's views: for a free cell the entry is the
//! attack count a queen would inherit by moving there, and for an occupied
//! cell it is the number of other queens threatening the resident queen (a
//! queen's rays never include its own square, so there is no self-threat to
//! subtract).
//!
//! Moves update the counts along the departing and arriving rays only; a full
//! recomputation happens once per restart, never per move.

use std::sync::Arc;

use crate::attack::AttackTable;
use crate::board::Board;

/// Per-cell threat counts, maintained incrementally as queens move.
#[derive(Clone, Debug)]
pub struct ConflictTracker {
    table: Arc<AttackTable>,
    counts: Vec<u32>,
}

impl ConflictTracker {
    /// Creates a tracker with all counts at zero.
    pub fn new(table: Arc<AttackTable>) -> ConflictTracker {
        let num_cells = table.size() * table.size();
        ConflictTracker {
            table,
            counts: vec![0; num_cells],
        }
    }

    /// Recomputes every count from scratch for the given board.
    pub fn rebuild(&mut self, board: &Board) {
        assert_eq!(
            board.size(),
            self.table.size(),
            "board size does not match the attack table"
        );

        self.counts.fill(0);
        for (row, col) in board.queens() {
            for &(r, c) in self.table.attacked_from(row, col) {
                self.counts[r * board.size() + c] += 1;
            }
        }
    }

    /// Relocates one queen and updates the counts incrementally.
    ///
    /// The departing queen's contribution disappears along its old rays and
    /// reappears along the new ones. The entry at `from` stays behind as the
    /// freed cell's attack count, and the entry at `to` (the attack count the
    /// free cell held) becomes the moved queen's threat count. A cell covered
    /// by both the old and the new rays nets to no change, which is correct:
    /// the moving queen never threatened it more or less than once.
    pub fn apply_move(
        &mut self,
        board: &mut Board,
        from: (usize, usize),
        to: (usize, usize),
    ) {
        let size = board.size();

        for &(r, c) in self.table.attacked_from(from.0, from.1) {
            self.counts[r * size + c] -= 1;
        }

        board
            .remove(from.0, from.1)
            .expect("move source was already known to hold a queen");
        board
            .place(to.0, to.1)
            .expect("move target was already known to be free");

        for &(r, c) in self.table.attacked_from(to.0, to.1) {
            self.counts[r * size + c] += 1;
        }
    }

    /// Number of queens attacking the given free cell.
    pub fn attack_count(&self, board: &Board, row: usize, col: usize) -> u32 {
        assert!(
            !board.is_queen(row, col),
            "cell ({row}, {col}) holds a queen; use queen_threat"
        );
        self.counts[row * board.size() + col]
    }

    /// Number of other queens attacking the queen at the given cell.
    pub fn queen_threat(&self, board: &Board, row: usize, col: usize) -> u32 {
        assert!(
            board.is_queen(row, col),
            "cell ({row}, {col}) holds no queen; use attack_count"
        );
        self.counts[row * board.size() + col]
    }

    /// Sum of the threat counts over every queen. Zero exactly when no two
    /// queens share a row, column, or diagonal.
    pub fn total_threat(&self, board: &Board) -> u32 {
        board
            .queens()
            .map(|(row, col)| self.counts[row * board.size() + col])
            .sum()
    }

    /// The queen with the highest threat count. Ties resolve to the first
    /// maximum in row-major order; `None` on a queenless board.
    pub fn most_threatened_queen(&self, board: &Board) -> Option<(usize, usize)> {
        let mut best_pos: Option<(usize, usize)> = None;
        let mut best_threat = 0;

        for (row, col) in board.queens() {
            let threat = self.counts[row * board.size() + col];
            if best_pos.is_none() || threat > best_threat {
                best_threat = threat;
                best_pos = Some((row, col));
            }
        }

        best_pos
    }

    /// The free cell with the lowest attack count. Ties resolve to the first
    /// minimum in row-major order; `None` on a fully occupied board.
    pub fn least_attacked_free(&self, board: &Board) -> Option<(usize, usize)> {
        let mut best_pos: Option<(usize, usize)> = None;
        let mut best_count = u32::MAX;

        for row in 0..board.size() {
            for col in 0..board.size() {
                if board.is_queen(row, col) {
                    continue;
                }
                let count = self.counts[row * board.size() + col];
                if count < best_count {
                    best_count = count;
                    best_pos = Some((row, col));
                }
            }
        }

        best_pos
    }
}
