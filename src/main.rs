//! Pocket Arcade entry point
//!
//! Headless driver: loads settings, then plays each game against a simple
//! autopilot on simulated time and logs what happens. Rendering and touch
//! input belong to the host shell.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use pocket_arcade::fast_math::KeyOutcome;
    use pocket_arcade::input::{PaddleKey, nudge_paddle};
    use pocket_arcade::sim::{PongEvent, PongState, TickInput, tick};
    use pocket_arcade::snake::{Direction, SnakeGame};
    use pocket_arcade::{FastMath, HighScores, Settings, TickClock};

    /// Simulated host frame (60 Hz display)
    const FRAME: Duration = Duration::from_micros(16_667);
    /// How long the Pong demo runs
    const PONG_DURATION: Duration = Duration::from_secs(60);
    /// Upper bound on Snake ticks per run
    const SNAKE_MAX_TICKS: u32 = 2_000;
    /// Simulated time between Fast Math keypresses
    const KEYPRESS_MS: u64 = 350;

    pub fn run(settings: &Settings) {
        let seed = settings.seed.unwrap_or_else(time_seed);
        log::info!("Pocket Arcade (headless) starting, seed {}", seed);

        let mut scores = HighScores::new();
        let mut session_ms = 0;

        session_ms += play_pong(settings, seed);
        for run in 0..3 {
            session_ms += play_snake(settings, seed.wrapping_add(run), session_ms, &mut scores);
        }
        play_fast_math(settings, seed, session_ms, &mut scores);

        log::info!(
            "Session best: snake {:?}, fast math {:?}s",
            scores.snake.best(),
            scores.fast_math.best()
        );
    }

    fn time_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(12345)
    }

    /// Player paddle follows the ball with arrow-key presses
    fn play_pong(settings: &Settings, seed: u64) -> u64 {
        let config = settings.pong;
        let mut state = PongState::new(config, seed);
        let mut clock = TickClock::from_millis(config.tick_ms);
        let mut elapsed = Duration::ZERO;

        while elapsed < PONG_DURATION {
            elapsed += FRAME;
            for _ in 0..clock.advance(FRAME) {
                let paddle_center = state.player.y + config.paddle_height / 2.0;
                let ball_center = state.ball.pos.y + config.ball_size / 2.0;
                let target = if ball_center < paddle_center - config.paddle_height / 4.0 {
                    nudge_paddle(state.player.y, PaddleKey::Up, &config)
                } else if ball_center > paddle_center + config.paddle_height / 4.0 {
                    nudge_paddle(state.player.y, PaddleKey::Down, &config)
                } else {
                    state.player.y
                };

                tick(&mut state, &TickInput::target(target));
                for event in &state.events {
                    if let PongEvent::Scored { side } = event {
                        log::info!(
                            "Pong point to {} ({} - {})",
                            side.as_str(),
                            state.score.player,
                            state.score.ai
                        );
                    }
                }
            }
        }
        clock.stop();

        log::info!(
            "Pong finished after {} ticks: {} - {}",
            state.time_ticks,
            state.score.player,
            state.score.ai
        );
        elapsed.as_millis() as u64
    }

    /// Serpentine autopilot: sweep a row, drop one, sweep back
    fn autopilot(game: &SnakeGame) -> Option<Direction> {
        let head = game.head();
        let last = game.config.board_size - 1;
        match game.heading {
            Direction::Right if head.x == last => Some(Direction::Down),
            Direction::Left if head.x == 0 => Some(Direction::Down),
            Direction::Down => Some(if head.x == 0 {
                Direction::Right
            } else {
                Direction::Left
            }),
            _ => None,
        }
    }

    fn play_snake(settings: &Settings, seed: u64, session_ms: u64, scores: &mut HighScores) -> u64 {
        let mut game = SnakeGame::new(settings.snake, seed);
        let mut clock = TickClock::from_millis(settings.snake.tick_ms);
        let mut elapsed = Duration::ZERO;
        let mut ticks = 0;

        while clock.is_running() && ticks < SNAKE_MAX_TICKS {
            elapsed += FRAME;
            for _ in 0..clock.advance(FRAME) {
                if let Some(dir) = autopilot(&game) {
                    game.turn(dir);
                }
                game.tick();
                ticks += 1;
                if game.is_over() {
                    clock.stop();
                    break;
                }
            }
        }

        let ms = elapsed.as_millis() as u64;
        scores.record_snake(game.score, session_ms + ms);
        ms
    }

    /// Answers every problem, fumbling one digit in five
    fn play_fast_math(settings: &Settings, seed: u64, session_ms: u64, scores: &mut HighScores) {
        let mut game = FastMath::new(settings.fast_math, seed);
        let mut now = session_ms;

        for _round in 0..2 {
            game.start(now);
            let mut presses = 0u64;
            while game.is_playing() {
                presses += 1;
                now += KEYPRESS_MS;
                let fumble = presses % 5 == 0;
                let digit = if fumble {
                    9
                } else {
                    let wanted = game.problem.answer().to_string();
                    wanted.as_bytes()[game.answer.len().min(wanted.len() - 1)] - b'0'
                };

                match game.press_digit(digit, now) {
                    KeyOutcome::RoundComplete { secs } => {
                        scores.record_fast_math(secs, now);
                    }
                    KeyOutcome::Typed if fumble => {
                        now += KEYPRESS_MS;
                        game.backspace();
                    }
                    _ => {}
                }
            }
            now += 5_000;
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pocket_arcade::Settings;
    use std::path::PathBuf;

    env_logger::init();

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref());
    headless::run(&settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser shell drives the library directly
}
