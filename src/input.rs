//! Input mapping
//!
//! Turns raw drags, key names and swipes into game input. Capturing the
//! events is the host's job; these functions only carry the game rules.

use crate::consts::PADDLE_KEY_STEP;
use crate::sim::PongConfig;
use crate::snake::Direction;

/// Keys that move the Pong paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleKey {
    Up,
    Down,
}

impl PaddleKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(PaddleKey::Up),
            "ArrowDown" => Some(PaddleKey::Down),
            _ => None,
        }
    }
}

/// Paddle position after a vertical drag of `gesture_dy`
pub fn drag_paddle(y: f32, gesture_dy: f32, config: &PongConfig) -> f32 {
    config.clamp_paddle_y(y + gesture_dy)
}

/// Paddle position after one key press
pub fn nudge_paddle(y: f32, key: PaddleKey, config: &PongConfig) -> f32 {
    let step = match key {
        PaddleKey::Up => -PADDLE_KEY_STEP,
        PaddleKey::Down => PADDLE_KEY_STEP,
    };
    config.clamp_paddle_y(y + step)
}

/// Snake direction for an arrow key
pub fn direction_from_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        _ => None,
    }
}

/// Snake direction for a released swipe; the dominant axis wins.
///
/// Screen coordinates: positive `dy` points down. A swipe that did not move
/// at all has no direction.
pub fn swipe_direction(dx: f32, dy: f32) -> Option<Direction> {
    if dx == 0.0 && dy == 0.0 {
        return None;
    }
    if dx.abs() > dy.abs() {
        Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
    } else {
        Some(if dy > 0.0 { Direction::Down } else { Direction::Up })
    }
}
