//! Fast Math: a timed times-table drill
//!
//! A round is a fixed number of problems answered on a digit keypad. There is
//! no submit key: the moment the typed digits equal the product, the next
//! problem appears. Timestamps are passed in by the caller (milliseconds on
//! any monotonic clock) so the drill itself stays pure.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{MATH_MAX_FACTOR, MATH_PROBLEMS_PER_ROUND};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FastMathConfig {
    pub problems_per_round: u32,
    /// Factors are drawn from 0..=max_factor
    pub max_factor: u32,
}

impl Default for FastMathConfig {
    fn default() -> Self {
        Self {
            problems_per_round: MATH_PROBLEMS_PER_ROUND,
            max_factor: MATH_MAX_FACTOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub a: u32,
    pub b: u32,
}

impl Problem {
    pub fn answer(&self) -> u64 {
        u64::from(self.a) * u64::from(self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MathPhase {
    Idle,
    Playing,
}

/// What a keypress did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyOutcome {
    /// Not playing, or not a digit
    Ignored,
    /// Digit appended, answer not yet correct
    Typed,
    /// Correct; the next problem is up
    Solved,
    /// Correct on the last problem; the round took `secs` seconds
    RoundComplete { secs: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FastMath {
    pub config: FastMathConfig,
    pub phase: MathPhase,
    pub problem: Problem,
    /// Digits typed for the current problem
    pub answer: String,
    /// Problems solved this round
    pub solved: u32,
    started_at_ms: u64,
    /// Time of the last finished round, in seconds
    pub last_time: Option<f64>,
    /// Fastest round this session, in seconds
    pub best_time: Option<f64>,
    rng: Pcg32,
}

impl FastMath {
    pub fn new(config: FastMathConfig, seed: u64) -> Self {
        Self {
            config,
            phase: MathPhase::Idle,
            problem: Problem { a: 0, b: 0 },
            answer: String::new(),
            solved: 0,
            started_at_ms: 0,
            last_time: None,
            best_time: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start (or restart) a round
    pub fn start(&mut self, now_ms: u64) {
        self.phase = MathPhase::Playing;
        self.solved = 0;
        self.started_at_ms = now_ms;
        self.next_problem();
        log::info!("Fast Math round started");
    }

    pub fn is_playing(&self) -> bool {
        self.phase == MathPhase::Playing
    }

    /// Seconds since the round started, 0 when idle
    pub fn elapsed_secs(&self, now_ms: u64) -> f64 {
        if !self.is_playing() {
            return 0.0;
        }
        now_ms.saturating_sub(self.started_at_ms) as f64 / 1000.0
    }

    /// Problem number being shown (1-based) and round length
    pub fn progress(&self) -> (u32, u32) {
        (self.solved + 1, self.config.problems_per_round)
    }

    /// Handle a keypad digit
    pub fn press_digit(&mut self, digit: u8, now_ms: u64) -> KeyOutcome {
        if !self.is_playing() || digit > 9 {
            return KeyOutcome::Ignored;
        }
        self.answer.push(char::from(b'0' + digit));

        // Overlong input simply never matches
        if self.answer.parse::<u64>().ok() != Some(self.problem.answer()) {
            return KeyOutcome::Typed;
        }

        if self.solved + 1 >= self.config.problems_per_round {
            return KeyOutcome::RoundComplete {
                secs: self.finish(now_ms),
            };
        }

        self.solved += 1;
        self.next_problem();
        KeyOutcome::Solved
    }

    /// Remove the last typed digit
    pub fn backspace(&mut self) {
        self.answer.pop();
    }

    fn finish(&mut self, now_ms: u64) -> f64 {
        let secs = self.elapsed_secs(now_ms);
        self.phase = MathPhase::Idle;
        self.solved = self.config.problems_per_round;
        self.last_time = Some(secs);
        if self.best_time.is_none_or(|best| secs < best) {
            self.best_time = Some(secs);
        }
        log::info!("Fast Math round finished in {:.2}s", secs);
        secs
    }

    fn next_problem(&mut self) {
        let max = self.config.max_factor;
        self.problem = Problem {
            a: self.rng.random_range(0..=max),
            b: self.rng.random_range(0..=max),
        };
        self.answer.clear();
    }
}
