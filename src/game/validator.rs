use crate::models::{FoundWords, GeneratedGrid, Position};
use crate::words::WordList;

pub struct SelectionValidator;

impl SelectionValidator {
    /// Check a released selection against the word list.
    ///
    /// Only the selection's endpoints matter: the canonical straight-line
    /// path between them is re-derived and its letters looked up forward
    /// and reversed. Returns the matched word together with the canonical
    /// cells, or None for short, non-linear, unknown, or already-found
    /// selections. Placement-agnostic: runs fine against the fallback
    /// grid, it just never matches there.
    pub fn validate(
        grid: &GeneratedGrid,
        selection: &[Position],
        words: &WordList,
        found: &FoundWords,
    ) -> Option<(String, Vec<Position>)> {
        if selection.len() < 2 {
            return None;
        }

        let start = selection[0];
        let end = selection[selection.len() - 1];
        let cells = Self::cells_between(start, end)?;

        let candidate: String = cells
            .iter()
            .map(|pos| grid.letter(*pos))
            .collect::<Option<String>>()?;

        let matched = words.match_word(&candidate)?;
        if found.contains(matched) {
            return None;
        }

        Some((matched.to_string(), cells))
    }

    /// Walk the canonical straight line from `start` to `end` inclusive.
    /// None unless the endpoints lie on one of the 8 directions.
    /// Coordinates too large for i32 are rejected outright; a truncating
    /// cast here would let an absurd endpoint wrap back into range.
    pub fn cells_between(start: Position, end: Position) -> Option<Vec<Position>> {
        let start_row = i32::try_from(start.row).ok()?;
        let start_col = i32::try_from(start.col).ok()?;
        let dr = i32::try_from(end.row).ok()? - start_row;
        let dc = i32::try_from(end.col).ok()? - start_col;
        let (sr, sc) = Self::normalize_step(dr, dc)?;

        let len = dr.abs().max(dc.abs()) + 1;
        let mut cells = Vec::with_capacity(len as usize);
        for i in 0..len {
            cells.push(Position {
                row: (start_row + i * sr) as usize,
                col: (start_col + i * sc) as usize,
            });
        }
        Some(cells)
    }

    /// Reduce a (dr, dc) delta to a canonical unit step. None for the zero
    /// delta and for anything off the 8 directions.
    fn normalize_step(dr: i32, dc: i32) -> Option<(i32, i32)> {
        if dr == 0 && dc == 0 {
            return None;
        }
        if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
            return None;
        }
        Some((dr.signum(), dc.signum()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Direction, Placement};
    use std::collections::HashMap;

    fn pos(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// 4x4 grid with CAT written left-to-right from (0,0), everything else
    /// filler that spells nothing.
    fn cat_grid() -> GeneratedGrid {
        let mut placements = HashMap::new();
        placements.insert(
            "CAT".to_string(),
            Placement {
                origin: pos(0, 0),
                direction: Direction { dr: 0, dc: 1 },
                reversed: false,
            },
        );
        GeneratedGrid {
            cells: vec![
                vec!['C', 'A', 'T', 'Q'],
                vec!['Q', 'Q', 'Q', 'Q'],
                vec!['Q', 'Q', 'Q', 'Q'],
                vec!['Q', 'Q', 'Q', 'Q'],
            ],
            placements,
        }
    }

    #[test]
    fn test_forward_selection_matches() {
        let grid = cat_grid();
        let words = WordList::from_lines(vec!["CAT"]);
        let found = FoundWords::new();
        let selection = vec![pos(0, 0), pos(0, 1), pos(0, 2)];

        let (word, cells) =
            SelectionValidator::validate(&grid, &selection, &words, &found).unwrap();
        assert_eq!(word, "CAT");
        assert_eq!(cells, selection);
    }

    #[test]
    fn test_reversed_selection_matches_same_word() {
        let grid = cat_grid();
        let words = WordList::from_lines(vec!["CAT"]);
        let found = FoundWords::new();
        let selection = vec![pos(0, 2), pos(0, 1), pos(0, 0)];

        let (word, _) =
            SelectionValidator::validate(&grid, &selection, &words, &found).unwrap();
        assert_eq!(word, "CAT");
    }

    #[test]
    fn test_only_endpoints_matter() {
        let grid = cat_grid();
        let words = WordList::from_lines(vec!["CAT"]);
        let found = FoundWords::new();
        // Sloppy drag path: middle cell off the line. Endpoints still
        // define the canonical path.
        let selection = vec![pos(0, 0), pos(1, 1), pos(0, 2)];

        let (word, cells) =
            SelectionValidator::validate(&grid, &selection, &words, &found).unwrap();
        assert_eq!(word, "CAT");
        assert_eq!(cells, vec![pos(0, 0), pos(0, 1), pos(0, 2)]);
    }

    #[test]
    fn test_single_cell_never_matches() {
        let grid = cat_grid();
        let words = WordList::from_lines(vec!["C"]);
        let found = FoundWords::new();
        assert!(SelectionValidator::validate(&grid, &[pos(0, 0)], &words, &found).is_none());
    }

    #[test]
    fn test_non_linear_selection_never_matches() {
        let grid = cat_grid();
        let words = WordList::from_lines(vec!["CAT"]);
        let found = FoundWords::new();
        let selection = vec![pos(0, 0), pos(1, 2)];
        assert!(SelectionValidator::validate(&grid, &selection, &words, &found).is_none());
    }

    #[test]
    fn test_already_found_word_is_not_rematchable() {
        let grid = cat_grid();
        let words = WordList::from_lines(vec!["CAT"]);
        let mut found = FoundWords::new();
        let selection = vec![pos(0, 0), pos(0, 1), pos(0, 2)];

        let (word, cells) =
            SelectionValidator::validate(&grid, &selection, &words, &found).unwrap();
        found.insert(word, cells);

        assert!(SelectionValidator::validate(&grid, &selection, &words, &found).is_none());
    }

    #[test]
    fn test_out_of_bounds_endpoint_rejected() {
        let grid = cat_grid();
        let words = WordList::from_lines(vec!["CAT"]);
        let found = FoundWords::new();
        let selection = vec![pos(0, 2), pos(0, 5)];
        assert!(SelectionValidator::validate(&grid, &selection, &words, &found).is_none());
    }

    #[test]
    fn test_huge_endpoint_cannot_wrap_into_range() {
        let grid = cat_grid();
        let words = WordList::from_lines(vec!["CAT"]);
        let found = FoundWords::new();

        // Truncated to i32, this column would land back on (0,2) and
        // spell CAT. It must be rejected, not wrapped.
        let selection = vec![pos(0, 0), pos(0, (1usize << 32) + 2)];
        assert!(SelectionValidator::validate(&grid, &selection, &words, &found).is_none());

        assert!(SelectionValidator::cells_between(pos(0, 0), pos(0, usize::MAX)).is_none());
        assert!(SelectionValidator::cells_between(pos(usize::MAX, 0), pos(0, 0)).is_none());
    }

    #[test]
    fn test_cells_between_diagonal() {
        let cells = SelectionValidator::cells_between(pos(3, 3), pos(0, 0)).unwrap();
        assert_eq!(cells, vec![pos(3, 3), pos(2, 2), pos(1, 1), pos(0, 0)]);
    }

    #[test]
    fn test_cells_between_rejects_knight_move() {
        assert!(SelectionValidator::cells_between(pos(0, 0), pos(1, 2)).is_none());
        assert!(SelectionValidator::cells_between(pos(0, 0), pos(0, 0)).is_none());
    }
}
