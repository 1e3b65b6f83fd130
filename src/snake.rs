//! Grid snake
//!
//! The body is stored tail first, head last. Each tick pushes a new head and,
//! unless food was eaten, drops the tail.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{SNAKE_BOARD_SIZE, SNAKE_TICK_MS};

/// A board cell, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Board geometry and speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Cells per row and per column
    pub board_size: i32,
    /// Tick interval in milliseconds
    pub tick_ms: u64,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            board_size: SNAKE_BOARD_SIZE,
            tick_ms: SNAKE_TICK_MS,
        }
    }
}

impl SnakeConfig {
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.board_size).contains(&cell.x) && (0..self.board_size).contains(&cell.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakePhase {
    Running,
    GameOver,
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeEvent {
    Moved,
    Ate,
    HitWall,
    HitSelf,
    /// Food eaten and no free cell left for the next one
    BoardFilled,
}

const INITIAL_BODY: [Cell; 2] = [Cell::new(0, 0), Cell::new(1, 0)];
const INITIAL_DIRECTION: Direction = Direction::Right;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnakeGame {
    pub config: SnakeConfig,
    /// Tail first, head last
    pub body: VecDeque<Cell>,
    /// Direction the next tick will move in
    pub direction: Direction,
    /// Direction of the last completed move; turns are judged against this
    pub heading: Direction,
    pub food: Option<Cell>,
    pub score: u32,
    /// Best score this session, kept across restarts
    pub high_score: u32,
    pub phase: SnakePhase,
    rng: Pcg32,
}

impl SnakeGame {
    pub fn new(config: SnakeConfig, seed: u64) -> Self {
        let mut game = Self {
            config,
            body: VecDeque::from(INITIAL_BODY),
            direction: INITIAL_DIRECTION,
            heading: INITIAL_DIRECTION,
            food: None,
            score: 0,
            high_score: 0,
            phase: SnakePhase::Running,
            rng: Pcg32::seed_from_u64(seed),
        };
        game.food = game.place_food();
        game
    }

    /// Start a fresh round. The high score survives.
    pub fn restart(&mut self) {
        self.body = VecDeque::from(INITIAL_BODY);
        self.direction = INITIAL_DIRECTION;
        self.heading = INITIAL_DIRECTION;
        self.score = 0;
        self.phase = SnakePhase::Running;
        self.food = self.place_food();
        log::info!("Snake restarted (high score {})", self.high_score);
    }

    pub fn head(&self) -> Cell {
        // The body is never empty
        self.body.back().copied().unwrap_or(INITIAL_BODY[1])
    }

    pub fn is_over(&self) -> bool {
        self.phase == SnakePhase::GameOver
    }

    /// Queue a turn for the next tick.
    ///
    /// Only perpendicular turns are accepted, judged against the direction the
    /// snake last moved in, so two quick turns between ticks cannot reverse it
    /// into its own neck. Returns whether the turn was accepted.
    pub fn turn(&mut self, dir: Direction) -> bool {
        if self.is_over() || dir.is_horizontal() == self.heading.is_horizontal() {
            return false;
        }
        self.direction = dir;
        true
    }

    /// Advance one tick. Returns `None` once the game is over.
    pub fn tick(&mut self) -> Option<SnakeEvent> {
        if self.is_over() {
            return None;
        }

        let next = self.head().step(self.direction);

        if !self.config.contains(next) {
            self.game_over("wall");
            return Some(SnakeEvent::HitWall);
        }
        if self.body.contains(&next) {
            self.game_over("self");
            return Some(SnakeEvent::HitSelf);
        }

        self.body.push_back(next);
        self.heading = self.direction;

        if self.food != Some(next) {
            self.body.pop_front();
            return Some(SnakeEvent::Moved);
        }

        self.score += 1;
        self.high_score = self.high_score.max(self.score);
        self.food = self.place_food();
        if self.food.is_none() {
            self.game_over("board full");
            return Some(SnakeEvent::BoardFilled);
        }
        Some(SnakeEvent::Ate)
    }

    fn game_over(&mut self, cause: &str) {
        self.phase = SnakePhase::GameOver;
        log::info!(
            "Snake over ({}): score {}, high score {}",
            cause,
            self.score,
            self.high_score
        );
    }

    /// Pick a uniformly random cell not covered by the snake
    fn place_food(&mut self) -> Option<Cell> {
        let size = self.config.board_size;
        let free: Vec<Cell> = (0..size)
            .flat_map(|y| (0..size).map(move |x| Cell::new(x, y)))
            .filter(|cell| !self.body.contains(cell))
            .collect();
        if free.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..free.len());
        Some(free[index])
    }
}
