//! Session leaderboards
//!
//! Kept in memory for as long as the arcade is open, top 10 per game.

use serde::{Deserialize, Serialize};

/// Maximum number of entries per leaderboard
pub const MAX_HIGH_SCORES: usize = 10;

/// Which way a leaderboard sorts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ranking {
    /// Points: bigger is better
    HigherIsBetter,
    /// Times: smaller is better
    LowerIsBetter,
}

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Points or seconds, depending on the board
    pub value: f64,
    /// Session time (ms) when achieved
    pub achieved_at_ms: u64,
}

/// One leaderboard, best entry first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub ranking: Ranking,
    pub entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    pub fn new(ranking: Ranking) -> Self {
        Self {
            ranking,
            entries: Vec::new(),
        }
    }

    fn beats(&self, value: f64, other: f64) -> bool {
        match self.ranking {
            Ranking::HigherIsBetter => value > other,
            Ranking::LowerIsBetter => value < other,
        }
    }

    /// Check if a result qualifies for the board.
    ///
    /// Zero, negative and non-finite results never qualify: a Snake run that
    /// ate nothing is not a score, and a zero-second drill is not a time.
    pub fn qualifies(&self, value: f64) -> bool {
        if !value.is_finite() || value <= 0.0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries
            .last()
            .map(|e| self.beats(value, e.value))
            .unwrap_or(true)
    }

    /// Get the rank a result would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, value: f64) -> Option<usize> {
        if !self.qualifies(value) {
            return None;
        }
        let rank = self.entries.iter().position(|e| self.beats(value, e.value));
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a result to the board (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add(&mut self, value: f64, achieved_at_ms: u64) -> Option<usize> {
        let rank = self.potential_rank(value)?;
        self.entries.insert(
            rank - 1,
            ScoreEntry {
                value,
                achieved_at_ms,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the best result (if any)
    pub fn best(&self) -> Option<f64> {
        self.entries.first().map(|e| e.value)
    }
}

/// Leaderboards for the games that keep one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScores {
    /// Food eaten per run
    pub snake: Leaderboard,
    /// Seconds per Fast Math round
    pub fast_math: Leaderboard,
}

impl Default for HighScores {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            snake: Leaderboard::new(Ranking::HigherIsBetter),
            fast_math: Leaderboard::new(Ranking::LowerIsBetter),
        }
    }

    pub fn record_snake(&mut self, score: u32, achieved_at_ms: u64) -> Option<usize> {
        let rank = self.snake.add(f64::from(score), achieved_at_ms);
        if let Some(rank) = rank {
            log::info!("Snake score {} ranked #{}", score, rank);
        }
        rank
    }

    pub fn record_fast_math(&mut self, secs: f64, achieved_at_ms: u64) -> Option<usize> {
        let rank = self.fast_math.add(secs, achieved_at_ms);
        if let Some(rank) = rank {
            log::info!("Fast Math time {:.2}s ranked #{}", secs, rank);
        }
        rank
    }
}
