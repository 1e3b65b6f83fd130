//! Pong state and core simulation types
//!
//! Everything the tick needs lives in `PongState`, including the serve RNG,
//! so a state can be cloned, stepped and compared.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, driven by the player
    Player,
    /// Right paddle, driven by the tracking AI
    Ai,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Ai => "ai",
        }
    }
}

/// Fixed geometry and tuning for one Pong session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PongConfig {
    /// Playfield width
    pub width: f32,
    /// Playfield height
    pub height: f32,
    pub paddle_height: f32,
    pub paddle_width: f32,
    pub ball_size: f32,
    /// Gap between each paddle and its side edge
    pub paddle_offset: f32,
    /// Tick interval in milliseconds
    pub tick_ms: u64,
    /// AI paddle movement per tick
    pub ai_speed: f32,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            paddle_height: PADDLE_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            ball_size: BALL_SIZE,
            paddle_offset: PADDLE_OFFSET,
            tick_ms: PONG_TICK_MS,
            ai_speed: AI_SPEED,
        }
    }
}

impl PongConfig {
    /// Config with a custom playfield and default everything else
    pub fn with_playfield(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Lowest valid paddle Y (paddles are positioned by their top edge)
    #[inline]
    pub fn max_paddle_y(&self) -> f32 {
        (self.height - self.paddle_height).max(0.0)
    }

    /// Clamp a paddle Y into [0, height - paddle_height]
    #[inline]
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    /// Centre of the playfield, where the ball serves from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// X of a paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_offset,
            Side::Ai => self.width - self.paddle_offset - self.paddle_width,
        }
    }

    /// Paddle Y that vertically centres a paddle
    pub fn centered_paddle_y(&self) -> f32 {
        self.clamp_paddle_y(self.height / 2.0 - self.paddle_height / 2.0)
    }
}

/// The ball. Position is its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }
}

/// A paddle and its position one tick ago
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top edge
    pub y: f32,
    /// `y` as it was at the start of the previous tick
    pub prev_y: f32,
}

impl Paddle {
    /// A resting paddle (no velocity)
    pub fn at(y: f32) -> Self {
        Self { y, prev_y: y }
    }

    /// Vertical movement since the previous tick
    #[inline]
    pub fn velocity(&self) -> f32 {
        self.y - self.prev_y
    }

    /// Start a new tick: the current position becomes the previous one.
    /// Returns the velocity sampled before the shift.
    pub fn sample(&mut self) -> f32 {
        let velocity = self.velocity();
        self.prev_y = self.y;
        velocity
    }

    /// Check whether a vertical span overlaps this paddle
    #[inline]
    pub fn overlaps(&self, top: f32, bottom: f32, paddle_height: f32) -> bool {
        bottom >= self.y && top <= self.y + paddle_height
    }
}

/// Points per side. Only ever goes up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Ai => self.ai += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.player + self.ai
    }
}

/// Things that happened during a tick, for the render/audio sink
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PongEvent {
    /// Ball bounced off the top or bottom edge
    WallBounce,
    /// Ball was returned by a paddle
    PaddleHit { side: Side },
    /// A point was scored and the ball re-served
    Scored { side: Side },
}

/// Complete Pong session state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PongState {
    /// Seed the serve RNG was created from
    pub seed: u64,
    /// Fixed for the session
    pub config: PongConfig,
    pub ball: Ball,
    pub player: Paddle,
    pub ai: Paddle,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<PongEvent>,
    rng: Pcg32,
}

impl PongState {
    /// Create a new session with the given seed
    pub fn new(config: PongConfig, seed: u64) -> Self {
        let paddle_y = config.centered_paddle_y();
        Self {
            seed,
            config,
            ball: Ball::new(config.center(), Vec2::new(SERVE_SPEED, SERVE_SPEED)),
            player: Paddle::at(paddle_y),
            ai: Paddle::at(paddle_y),
            score: Score::default(),
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Restart the session: fresh ball and paddles, scores back to zero
    pub fn restart(&mut self) {
        *self = Self::new(self.config, self.seed);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}
