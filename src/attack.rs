//! Line-of-sight attack computation.
//!
//! A queen attacks along eight rays: the four axis directions and the four
//! diagonals. A ray runs from the queen's cell to the board edge and passes
//! through every cell on the way, occupied or not; an intervening queen does
//! not block sight in this solver.

/// The eight ray directions as (row, col) unit steps.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (1, 0),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// Walks one ray from the given cell until it leaves the board.
///
/// The origin cell itself is not part of the ray; a queen never attacks its
/// own square.
pub fn ray_sight(
    size: usize,
    row: usize,
    col: usize,
    direction: (i32, i32),
) -> Vec<(usize, usize)> {
    let (row_step, col_step) = direction;
    let mut sight = Vec::new();

    let mut row = row as i32 + row_step;
    let mut col = col as i32 + col_step;
    while row >= 0 && col >= 0 && (row as usize) < size && (col as usize) < size {
        sight.push((row as usize, col as usize));
        row += row_step;
        col += col_step;
    }

    sight
}

/// All cells a queen at the given position attacks: the union of its eight
/// rays. Distinct rays never overlap, so the result contains no duplicates.
pub fn attacked_cells(size: usize, row: usize, col: usize) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for &direction in DIRECTIONS.iter() {
        cells.extend(ray_sight(size, row, col, direction));
    }
    cells
}

/// Precomputed attack geometry for one board size.
///
/// Sight does not depend on where the other queens stand, so the attacked-cell
/// list for every origin can be derived once up front and shared across all
/// restarts of a solve attempt.
#[derive(Clone, Debug)]
pub struct AttackTable {
    size: usize,
    attacked_for_cell: Vec<Vec<(usize, usize)>>,
}

impl AttackTable {
    /// Builds the attacked-cell lookup table for every cell of the board.
    pub fn new(size: usize) -> AttackTable {
        let mut attacked_for_cell = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                attacked_for_cell.push(attacked_cells(size, row, col));
            }
        }

        AttackTable {
            size,
            attacked_for_cell,
        }
    }

    /// Side length of the board this table was built for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cells attacked by a queen standing at the given position.
    pub fn attacked_from(&self, row: usize, col: usize) -> &[(usize, usize)] {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) is outside the {size}x{size} board",
            size = self.size
        );
        &self.attacked_for_cell[row * self.size + col]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn ray_stops_at_the_board_edge() {
        let sight = ray_sight(5, 2, 2, (0, 1));
        assert_eq!(sight, vec![(2, 3), (2, 4)]);

        let sight = ray_sight(5, 0, 0, (-1, -1));
        assert!(sight.is_empty());
    }

    #[test]
    fn ray_excludes_its_origin() {
        for &direction in DIRECTIONS.iter() {
            assert!(!ray_sight(5, 2, 2, direction).contains(&(2, 2)));
        }
    }

    #[test]
    fn corner_attacks_three_full_rays() {
        // From a corner only one axis ray per dimension and one diagonal stay
        // on the board, each of length N-1.
        let cells = attacked_cells(6, 0, 0);
        assert_eq!(cells.len(), 3 * 5);

        let cells: BTreeSet<(usize, usize)> = cells.into_iter().collect();
        assert!(cells.contains(&(0, 5)));
        assert!(cells.contains(&(5, 0)));
        assert!(cells.contains(&(5, 5)));
        assert!(!cells.contains(&(1, 2)));
    }

    #[test]
    fn center_of_five_by_five_attacks_sixteen_cells() {
        let cells = attacked_cells(5, 2, 2);
        assert_eq!(cells.len(), 16);

        let unique: BTreeSet<(usize, usize)> = cells.iter().copied().collect();
        assert_eq!(unique.len(), 16, "rays must not overlap");
    }

    #[test]
    fn attack_is_symmetric_for_every_cell_pair() {
        // b is attacked from a exactly when a is attacked from b, since a
        // straight line runs both ways and nothing blocks it.
        let size = 6;
        let table = AttackTable::new(size);
        for a_row in 0..size {
            for a_col in 0..size {
                let from_a: BTreeSet<(usize, usize)> =
                    table.attacked_from(a_row, a_col).iter().copied().collect();
                for b_row in 0..size {
                    for b_col in 0..size {
                        let from_b = table.attacked_from(b_row, b_col);
                        assert_eq!(
                            from_a.contains(&(b_row, b_col)),
                            from_b.contains(&(a_row, a_col)),
                            "asymmetric sight between ({a_row}, {a_col}) and ({b_row}, {b_col})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn table_matches_direct_computation() {
        let size = 7;
        let table = AttackTable::new(size);
        for row in 0..size {
            for col in 0..size {
                assert_eq!(table.attacked_from(row, col), attacked_cells(size, row, col));
            }
        }
    }
}
