//! Collision detection and response for the Pong field
//!
//! Walls clamp and reflect. Paddles reflect horizontally and pass a share of
//! their own velocity into the ball.

use glam::Vec2;

use super::state::{Paddle, PongConfig, Side};
use crate::consts::{MAX_BALL_DY, PADDLE_MOMENTUM};

/// Result of moving the ball vertically against the top/bottom edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallResult {
    /// New ball Y
    pub y: f32,
    /// New vertical velocity
    pub dy: f32,
    /// Whether an edge was touched
    pub bounced: bool,
}

/// Advance ball Y by `dy`, clamping and reflecting at the field edges.
///
/// Touching an edge counts as a bounce: the ball is placed flush against it
/// and `dy` is forced to point back into the field.
pub fn wall_bounce(y: f32, dy: f32, ball_size: f32, height: f32) -> WallResult {
    let next = y + dy;
    if next <= 0.0 {
        WallResult {
            y: 0.0,
            dy: dy.abs(),
            bounced: true,
        }
    } else if next + ball_size >= height {
        WallResult {
            y: height - ball_size,
            dy: -dy.abs(),
            bounced: true,
        }
    } else {
        WallResult {
            y: next,
            dy,
            bounced: false,
        }
    }
}

/// Check whether the ball at `pos` is inside a paddle's collision band.
///
/// The band is open toward the paddle's own edge of the field: a ball that
/// has already slipped behind the paddle but still overlaps it vertically is
/// returned as well.
pub fn in_paddle_band(pos: Vec2, paddle: &Paddle, side: Side, config: &PongConfig) -> bool {
    let in_x = match side {
        Side::Player => pos.x <= config.paddle_x(side) + config.paddle_width,
        Side::Ai => pos.x + config.ball_size >= config.paddle_x(side),
    };
    in_x && paddle.overlaps(pos.y, pos.y + config.ball_size, config.paddle_height)
}

/// Return the ball off a paddle.
///
/// `dx` is forced away from `side`; `dy` picks up half the paddle velocity and
/// is capped at ±10.
pub fn paddle_return(vel: Vec2, paddle_velocity: f32, side: Side) -> Vec2 {
    let dx = match side {
        Side::Player => vel.x.abs(),
        Side::Ai => -vel.x.abs(),
    };
    let dy = (vel.y + paddle_velocity * PADDLE_MOMENTUM).clamp(-MAX_BALL_DY, MAX_BALL_DY);
    Vec2::new(dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_bounce_top() {
        let result = wall_bounce(2.0, -5.0, 15.0, 800.0);
        assert_eq!(result.y, 0.0);
        assert_eq!(result.dy, 5.0);
        assert!(result.bounced);
    }

    #[test]
    fn test_wall_bounce_exactly_zero_is_a_bounce() {
        let result = wall_bounce(4.0, -4.0, 15.0, 800.0);
        assert_eq!(result.y, 0.0);
        assert_eq!(result.dy, 4.0);
        assert!(result.bounced);
    }

    #[test]
    fn test_wall_bounce_bottom() {
        let result = wall_bounce(780.0, 6.0, 15.0, 800.0);
        assert_eq!(result.y, 785.0);
        assert_eq!(result.dy, -6.0);
        assert!(result.bounced);
    }

    #[test]
    fn test_wall_bounce_keeps_sign_when_already_heading_inward() {
        // Already moving up but the clamp still applies at the bottom edge
        let result = wall_bounce(790.0, -2.0, 15.0, 800.0);
        assert_eq!(result.y, 785.0);
        assert_eq!(result.dy, -2.0);
    }

    #[test]
    fn test_wall_free_flight() {
        let result = wall_bounce(100.0, 3.5, 15.0, 800.0);
        assert_eq!(result.y, 103.5);
        assert_eq!(result.dy, 3.5);
        assert!(!result.bounced);
    }

    #[test]
    fn test_player_band_includes_ball_behind_paddle() {
        let config = PongConfig::default();
        let paddle = Paddle::at(350.0);
        assert!(in_paddle_band(Vec2::new(5.0, 390.0), &paddle, Side::Player, &config));
        assert!(in_paddle_band(Vec2::new(70.0, 390.0), &paddle, Side::Player, &config));
        assert!(!in_paddle_band(Vec2::new(70.1, 390.0), &paddle, Side::Player, &config));
    }

    #[test]
    fn test_player_band_vertical_overlap_edges() {
        let config = PongConfig::default();
        let paddle = Paddle::at(350.0);
        // Ball bottom touches paddle top
        assert!(in_paddle_band(Vec2::new(60.0, 335.0), &paddle, Side::Player, &config));
        // Ball top touches paddle bottom
        assert!(in_paddle_band(Vec2::new(60.0, 450.0), &paddle, Side::Player, &config));
        assert!(!in_paddle_band(Vec2::new(60.0, 334.0), &paddle, Side::Player, &config));
        assert!(!in_paddle_band(Vec2::new(60.0, 451.0), &paddle, Side::Player, &config));
    }

    #[test]
    fn test_ai_band() {
        let config = PongConfig::default();
        let paddle = Paddle::at(350.0);
        // Band starts where the ball's right edge reaches x = 330
        assert!(in_paddle_band(Vec2::new(315.0, 400.0), &paddle, Side::Ai, &config));
        assert!(!in_paddle_band(Vec2::new(314.0, 400.0), &paddle, Side::Ai, &config));
    }

    #[test]
    fn test_bands_follow_custom_geometry() {
        let config = PongConfig {
            paddle_offset: 30.0,
            paddle_width: 10.0,
            ..PongConfig::with_playfield(300.0, 600.0)
        };
        let paddle = Paddle::at(250.0);
        // Player paddle face at x = 40, AI paddle face at x = 260
        assert!(in_paddle_band(Vec2::new(40.0, 280.0), &paddle, Side::Player, &config));
        assert!(!in_paddle_band(Vec2::new(41.0, 280.0), &paddle, Side::Player, &config));
        assert!(in_paddle_band(Vec2::new(245.0, 280.0), &paddle, Side::Ai, &config));
        assert!(!in_paddle_band(Vec2::new(244.0, 280.0), &paddle, Side::Ai, &config));
    }

    #[test]
    fn test_paddle_return_transfers_momentum() {
        let vel = paddle_return(Vec2::new(-5.0, 2.0), 5.0, Side::Player);
        assert_eq!(vel, Vec2::new(5.0, 4.5));

        let vel = paddle_return(Vec2::new(5.0, 2.0), -4.0, Side::Ai);
        assert_eq!(vel, Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn test_paddle_return_caps_dy() {
        let vel = paddle_return(Vec2::new(-5.0, 8.0), 40.0, Side::Player);
        assert_eq!(vel.y, 10.0);
        let vel = paddle_return(Vec2::new(-5.0, -8.0), -40.0, Side::Player);
        assert_eq!(vel.y, -10.0);
    }
}
