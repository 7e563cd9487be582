use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// A unit step on the grid: one of the 8 canonical (row, col) deltas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
pub struct Direction {
    pub dr: i32,
    pub dc: i32,
}

/// All 8 canonical directions (horizontal, vertical, both diagonals).
pub const DIRECTIONS: [Direction; 8] = [
    Direction { dr: 0, dc: 1 },
    Direction { dr: 0, dc: -1 },
    Direction { dr: 1, dc: 0 },
    Direction { dr: -1, dc: 0 },
    Direction { dr: 1, dc: 1 },
    Direction { dr: 1, dc: -1 },
    Direction { dr: -1, dc: 1 },
    Direction { dr: -1, dc: -1 },
];

/// Where a word was written into the grid.
/// `reversed` means the grid holds the word spelled backwards along
/// (origin, direction).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Placement {
    pub origin: Position,
    pub direction: Direction,
    pub reversed: bool,
}

pub type Grid = Vec<Vec<char>>;

/// Immutable per-round snapshot: the filled letter grid plus where each
/// word ended up. An empty placement map means the fallback grid (pure
/// random letters, no findable words).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedGrid {
    pub cells: Grid,
    pub placements: HashMap<String, Placement>,
}

impl GeneratedGrid {
    pub fn letter(&self, pos: Position) -> Option<char> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Read `len` letters starting at `origin` along `direction`.
    /// Returns None if the walk leaves the grid.
    pub fn read_along(&self, origin: Position, direction: Direction, len: usize) -> Option<String> {
        let mut word = String::with_capacity(len);
        for i in 0..len {
            let row = origin.row as i32 + i as i32 * direction.dr;
            let col = origin.col as i32 + i as i32 * direction.dc;
            if row < 0 || col < 0 {
                return None;
            }
            word.push(self.letter(Position {
                row: row as usize,
                col: col as usize,
            })?);
        }
        Some(word)
    }
}

/// Words found so far in a round, with the cells that spelled them.
/// Append-only: a word, once found, stays found for the round.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoundWords {
    entries: HashMap<String, Vec<Position>>,
}

impl FoundWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Record a found word. Returns false if it was already recorded.
    pub fn insert(&mut self, word: String, cells: Vec<Position>) -> bool {
        if self.entries.contains_key(&word) {
            return false;
        }
        self.entries.insert(word, cells);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_words_append_only() {
        let mut found = FoundWords::new();
        assert!(found.insert("ECHO".to_string(), vec![Position { row: 0, col: 0 }]));
        assert!(!found.insert("ECHO".to_string(), vec![Position { row: 1, col: 1 }]));
        assert_eq!(found.len(), 1);
        assert!(found.contains("ECHO"));
    }

    #[test]
    fn test_read_along_bounds() {
        let grid = GeneratedGrid {
            cells: vec![vec!['A', 'B'], vec!['C', 'D']],
            placements: HashMap::new(),
        };
        let origin = Position { row: 0, col: 0 };
        assert_eq!(
            grid.read_along(origin, Direction { dr: 0, dc: 1 }, 2),
            Some("AB".to_string())
        );
        assert_eq!(grid.read_along(origin, Direction { dr: 0, dc: 1 }, 3), None);
        assert_eq!(grid.read_along(origin, Direction { dr: -1, dc: 0 }, 2), None);
    }
}
