//! Deterministic Pong simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per call
//! - Seeded RNG only, stored in the state
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{WallResult, in_paddle_band, paddle_return, wall_bounce};
pub use state::{Ball, Paddle, PongConfig, PongEvent, PongState, Score, Side};
pub use tick::{TickInput, scoring_side, step, tick, track_ball};
