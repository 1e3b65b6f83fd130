//! Game settings
//!
//! Defaults are compiled in. A JSON file may override any subset of fields;
//! whatever it leaves out keeps its default.

use std::fmt;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_SNAKE_BOARD_SIZE;
use crate::fast_math::FastMathConfig;
use crate::sim::PongConfig;
use crate::snake::SnakeConfig;

/// Error type for loading settings
#[derive(Debug)]
pub enum SettingsError {
    /// Settings file could not be read
    Io(io::Error),
    /// Settings file is not valid JSON for `Settings`
    Parse(serde_json::Error),
    /// Values parsed but describe an unplayable game
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "Settings IO error: {}", err),
            SettingsError::Parse(err) => write!(f, "Settings parse error: {}", err),
            SettingsError::Invalid(msg) => write!(f, "Invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            SettingsError::Parse(err) => Some(err),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(err: io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

/// Settings for all three games
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pong: PongConfig,
    pub snake: SnakeConfig,
    pub fast_math: FastMathConfig,
    /// Fixed RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path.map(Self::load) {
            Some(Ok(settings)) => settings,
            Some(Err(err)) => {
                log::warn!("{}; using default settings", err);
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Reject geometry the games cannot run on
    pub fn validate(&self) -> Result<(), SettingsError> {
        let pong = &self.pong;
        let positive = [
            ("pong.width", pong.width),
            ("pong.height", pong.height),
            ("pong.paddle_height", pong.paddle_height),
            ("pong.paddle_width", pong.paddle_width),
            ("pong.ball_size", pong.ball_size),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{} must be positive, got {}", name, value)));
            }
        }
        if !(pong.ai_speed.is_finite() && pong.ai_speed >= 0.0) {
            return Err(invalid(format!(
                "pong.ai_speed must not be negative, got {}",
                pong.ai_speed
            )));
        }
        if !(pong.paddle_offset.is_finite() && pong.paddle_offset >= 0.0) {
            return Err(invalid(format!(
                "pong.paddle_offset must not be negative, got {}",
                pong.paddle_offset
            )));
        }
        if pong.paddle_height > pong.height {
            return Err(invalid(format!(
                "pong paddle ({}) is taller than the field ({})",
                pong.paddle_height, pong.height
            )));
        }
        if pong.ball_size >= pong.height || pong.ball_size >= pong.width {
            return Err(invalid(format!(
                "pong ball ({}) does not fit the field ({}x{})",
                pong.ball_size, pong.width, pong.height
            )));
        }
        if pong.tick_ms == 0 || self.snake.tick_ms == 0 {
            return Err(invalid("tick intervals must be at least 1ms".to_string()));
        }
        if !(2..=MAX_SNAKE_BOARD_SIZE).contains(&self.snake.board_size) {
            return Err(invalid(format!(
                "snake.board_size must be between 2 and {}, got {}",
                MAX_SNAKE_BOARD_SIZE, self.snake.board_size
            )));
        }
        if self.fast_math.problems_per_round == 0 {
            return Err(invalid("fast_math.problems_per_round must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> SettingsError {
    SettingsError::Invalid(msg)
}
