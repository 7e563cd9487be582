use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

use crate::models::{Direction, GeneratedGrid, Placement, Position, DIRECTIONS};
use crate::words::WordList;

/// Full-grid restarts before giving up and emitting the fallback grid.
const MAX_GRID_ATTEMPTS: usize = 12;
/// (direction, origin) candidates tried per word within one attempt.
const PLACEMENT_TRIES: usize = 400;

pub struct GridGenerator;

impl GridGenerator {
    /// Generate a grid hiding every listed word. The RNG is injected, so
    /// a seeded `StdRng` makes the whole round reproducible.
    ///
    /// Placement failures restart the entire grid rather than backtracking
    /// single words; after all restarts are spent the result degrades to a
    /// grid of pure random letters with an empty placement map. This never
    /// fails: every call returns a playable grid.
    pub fn generate_with_rng(words: &WordList, size: usize, rng: &mut impl Rng) -> GeneratedGrid {
        for _ in 0..MAX_GRID_ATTEMPTS {
            if let Some(generated) = Self::try_place_all(words, size, rng) {
                return generated;
            }
        }

        tracing::warn!(
            "grid generation exhausted after {} attempts; falling back to unplaced letters",
            MAX_GRID_ATTEMPTS
        );

        let mut cells = vec![vec!['A'; size]; size];
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = Self::random_letter(rng);
            }
        }
        GeneratedGrid {
            cells,
            placements: HashMap::new(),
        }
    }

    /// One outer attempt: place every word, in shuffled order, into an
    /// empty grid. Bails on the first word that cannot be placed rather
    /// than committing a partial layout.
    fn try_place_all(
        words: &WordList,
        size: usize,
        rng: &mut impl Rng,
    ) -> Option<GeneratedGrid> {
        let mut cells: Vec<Vec<Option<char>>> = vec![vec![None; size]; size];
        let mut placements = HashMap::new();

        let mut order: Vec<&str> = words.iter().collect();
        order.shuffle(rng);

        for word in order {
            let placement = Self::place_word(&mut cells, word, rng)?;
            placements.insert(word.to_string(), placement);
        }

        let mut filled = Vec::with_capacity(size);
        for row in cells {
            let mut out = Vec::with_capacity(size);
            for cell in row {
                out.push(cell.unwrap_or_else(|| Self::random_letter(rng)));
            }
            filled.push(out);
        }

        let generated = GeneratedGrid {
            cells: filled,
            placements,
        };

        // Every committed placement must re-read as its word.
        debug_assert!(generated.placements.iter().all(|(word, p)| {
            let expected: String = if p.reversed {
                word.chars().rev().collect()
            } else {
                word.clone()
            };
            generated.read_along(p.origin, p.direction, word.chars().count())
                == Some(expected)
        }));

        Some(generated)
    }

    /// Try up to PLACEMENT_TRIES (direction, origin) candidates for one
    /// word, cycling a shuffled copy of the 8 directions with a fresh
    /// uniform origin each try.
    fn place_word(
        cells: &mut [Vec<Option<char>>],
        word: &str,
        rng: &mut impl Rng,
    ) -> Option<Placement> {
        let size = cells.len();
        let mut directions = DIRECTIONS;
        directions.shuffle(rng);

        let letters: Vec<char> = word.chars().collect();
        let reversed: Vec<char> = word.chars().rev().collect();

        for t in 0..PLACEMENT_TRIES {
            let direction = directions[t % directions.len()];
            let origin = Position {
                row: rng.random_range(0..size),
                col: rng.random_range(0..size),
            };

            if Self::can_place(cells, &letters, origin, direction) {
                Self::write_word(cells, &letters, origin, direction);
                return Some(Placement {
                    origin,
                    direction,
                    reversed: false,
                });
            }

            // A crossing word already on the grid may demand the reversed
            // spelling at this candidate.
            if Self::can_place(cells, &reversed, origin, direction) {
                Self::write_word(cells, &reversed, origin, direction);
                return Some(Placement {
                    origin,
                    direction,
                    reversed: true,
                });
            }
        }

        None
    }

    /// A candidate is valid if the word's full extent stays in bounds and
    /// every covered cell is unset or already holds the needed letter.
    fn can_place(
        cells: &[Vec<Option<char>>],
        letters: &[char],
        origin: Position,
        direction: Direction,
    ) -> bool {
        let size = cells.len() as i32;
        let last = letters.len() as i32 - 1;
        let end_row = origin.row as i32 + last * direction.dr;
        let end_col = origin.col as i32 + last * direction.dc;
        if end_row < 0 || end_row >= size || end_col < 0 || end_col >= size {
            return false;
        }

        for (i, &ch) in letters.iter().enumerate() {
            let row = (origin.row as i32 + i as i32 * direction.dr) as usize;
            let col = (origin.col as i32 + i as i32 * direction.dc) as usize;
            if let Some(existing) = cells[row][col] {
                if existing != ch {
                    return false;
                }
            }
        }

        true
    }

    fn write_word(
        cells: &mut [Vec<Option<char>>],
        letters: &[char],
        origin: Position,
        direction: Direction,
    ) {
        for (i, &ch) in letters.iter().enumerate() {
            let row = (origin.row as i32 + i as i32 * direction.dr) as usize;
            let col = (origin.col as i32 + i as i32 * direction.dc) as usize;
            cells[row][col] = Some(ch);
        }
    }

    fn random_letter(rng: &mut impl Rng) -> char {
        let offset: u8 = rng.random_range(0..26);
        (b'A' + offset) as char
    }
}
