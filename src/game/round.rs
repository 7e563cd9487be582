use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::{GridGenerator, SelectionValidator};
use crate::models::{FoundWords, GeneratedGrid, Position};
use crate::words::WordList;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    Running,
    Paused,
    Finished,
}

/// All mutable state of one round, held explicitly instead of as ambient
/// globals. The grid snapshot never changes after `start`; the only
/// in-round mutation is appending to `found` and counting the clock down.
#[derive(Debug, Clone, Serialize)]
pub struct RoundState {
    pub grid: GeneratedGrid,
    pub score: u32,
    pub seconds_left: u32,
    pub status: RoundStatus,
    pub found: FoundWords,
    pub started_at: DateTime<Utc>,
    /// Set once, when the round transitions to Finished.
    pub finished_at: Option<DateTime<Utc>>,
}

impl RoundState {
    /// Generate a fresh grid and start the clock.
    pub fn start(words: &WordList, size: usize, duration_secs: u32, rng: &mut impl Rng) -> Self {
        Self {
            grid: GridGenerator::generate_with_rng(words, size, rng),
            score: 0,
            seconds_left: duration_secs,
            status: RoundStatus::Running,
            found: FoundWords::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    fn finish(&mut self) {
        if self.status != RoundStatus::Finished {
            self.status = RoundStatus::Finished;
            self.finished_at = Some(Utc::now());
        }
    }

    /// Handle a released selection. On a new match the word is recorded
    /// with its canonical cells and the score goes up by one; repeats and
    /// misses do nothing. Finding the last word finishes the round.
    pub fn select(&mut self, selection: &[Position], words: &WordList) -> Option<String> {
        if self.status != RoundStatus::Running {
            return None;
        }

        let (word, cells) =
            SelectionValidator::validate(&self.grid, selection, words, &self.found)?;
        self.found.insert(word.clone(), cells);
        self.score += 1;

        if self.all_found(words) {
            self.finish();
        }

        Some(word)
    }

    /// One second of clock. Counts down only while running; hitting zero
    /// finishes the round.
    pub fn tick(&mut self) -> RoundStatus {
        if self.status == RoundStatus::Running {
            self.seconds_left = self.seconds_left.saturating_sub(1);
            if self.seconds_left == 0 {
                self.finish();
            }
        }
        self.status
    }

    pub fn pause(&mut self) {
        if self.status == RoundStatus::Running {
            self.status = RoundStatus::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.status == RoundStatus::Paused {
            self.status = RoundStatus::Running;
        }
    }

    pub fn end(&mut self) {
        self.finish();
    }

    pub fn all_found(&self, words: &WordList) -> bool {
        self.found.len() == words.len()
    }
}
