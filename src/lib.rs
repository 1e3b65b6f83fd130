//! Pocket Arcade - three pocket mini-games without the pocket
//!
//! Core modules:
//! - `sim`: Deterministic Pong simulation (physics, collisions, scoring, AI)
//! - `snake`: Grid snake with wall/self collision and food
//! - `fast_math`: Ten-problem times-table drill
//! - `input`: Pure mapping from drags, keys and swipes to game input
//! - `clock`: Fixed-timestep tick accumulator
//! - `highscores`: In-memory session leaderboards
//! - `settings`: Compiled-in defaults with optional JSON overrides

pub mod clock;
pub mod fast_math;
pub mod highscores;
pub mod input;
pub mod settings;
pub mod sim;
pub mod snake;

pub use clock::TickClock;
pub use fast_math::FastMath;
pub use highscores::HighScores;
pub use settings::{Settings, SettingsError};
pub use sim::{PongState, TickInput, step, tick};
pub use snake::SnakeGame;

/// Game configuration constants
pub mod consts {
    /// Pong tick interval in milliseconds (~60 Hz)
    pub const PONG_TICK_MS: u64 = 16;

    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 800.0;

    /// Paddle defaults
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_WIDTH: f32 = 20.0;
    /// Distance between a paddle and its side of the field
    pub const PADDLE_OFFSET: f32 = 50.0;
    /// AI paddle speed (units per tick)
    pub const AI_SPEED: f32 = 5.0;
    /// AI holds still while its centre is within this distance of the ball centre
    pub const AI_DEAD_ZONE: f32 = 10.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 15.0;
    /// Horizontal serve speed after a point
    pub const SERVE_SPEED: f32 = 5.0;
    /// Serve dy is drawn from [-SERVE_SPREAD, SERVE_SPREAD)
    pub const SERVE_SPREAD: f32 = 5.0;
    /// Fraction of paddle velocity transferred into the ball on a hit
    pub const PADDLE_MOMENTUM: f32 = 0.5;
    /// Vertical speed cap after a paddle hit
    pub const MAX_BALL_DY: f32 = 10.0;

    /// Keyboard paddle step
    pub const PADDLE_KEY_STEP: f32 = 20.0;

    /// Snake defaults
    pub const SNAKE_BOARD_SIZE: i32 = 15;
    pub const SNAKE_TICK_MS: u64 = 150;
    /// Largest board settings may ask for
    pub const MAX_SNAKE_BOARD_SIZE: i32 = 64;

    /// Fast Math defaults
    pub const MATH_PROBLEMS_PER_ROUND: u32 = 10;
    pub const MATH_MAX_FACTOR: u32 = 12;

    /// Maximum ticks a clock will hand out per advance, to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
