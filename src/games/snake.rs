use crate::engines::Direction;
use crate::engines::snake::{GRID_SIZE, SnakeEngine, TickOutcome};
use crate::error::PortalError;
use crate::games::term::{self, FRAME_MS, Rgb, TerminalGuard};
use crate::games::{option_value, parse_seed, split_option};
use crate::rng::GameRng;
use crate::timer::RepeatingTask;
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

const DEFAULT_SPEED_MS: u64 = 150;
const MIN_SPEED_MS: u64 = 60;
const MAX_SPEED_MS: u64 = 400;

const HEAD: Rgb = Rgb::new(16, 185, 129);
const BODY: Rgb = Rgb::new(5, 150, 105);
const FOOD: Rgb = Rgb::new(244, 63, 94);
const FLOOR: Rgb = Rgb::new(24, 24, 27);
const BANNER: Rgb = Rgb::new(244, 63, 94);

#[derive(Debug, PartialEq, Eq)]
pub struct SnakeConfig
{
    step: Duration,
    seed: Option<u64>,
}

impl SnakeConfig
{
    pub fn from_args(args: &[String]) -> Result<Self, PortalError>
    {
        let mut config = Self::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let (name, inline) = split_option(arg);
            match name {
                "--speed-ms" => {
                    let value = option_value(name, inline, &mut iter)?;
                    config.step = Duration::from_millis(parse_speed(&value)?);
                }
                "--seed" => {
                    let value = option_value(name, inline, &mut iter)?;
                    config.seed = Some(parse_seed(&value)?);
                }
                _ => {
                    return Err(PortalError::UnknownOption {
                        game: "snake",
                        option: arg.clone(),
                    });
                }
            }
        }
        Ok(config)
    }
}

impl Default for SnakeConfig
{
    fn default() -> Self
    {
        Self {
            step: Duration::from_millis(DEFAULT_SPEED_MS),
            seed: None,
        }
    }
}

fn parse_speed(value: &str) -> Result<u64, PortalError>
{
    let parsed = value
        .parse::<u64>()
        .map_err(|_| PortalError::InvalidValue {
            option: "--speed-ms",
            expected: "a whole number of milliseconds",
            value: value.to_string(),
        })?;
    Ok(parsed.clamp(MIN_SPEED_MS, MAX_SPEED_MS))
}

/// Engine plus the host state around it: step timer and session best.
struct Session
{
    engine: SnakeEngine,
    timer: RepeatingTask,
    best: u32,
}

impl Session
{
    /// Starts paused; SPACE begins the run.
    fn new(engine: SnakeEngine, step: Duration) -> Self
    {
        Self {
            engine,
            timer: RepeatingTask::new(step),
            best: 0,
        }
    }

    /// Applies one key press. Returns false once the player leaves.
    fn handle_key(&mut self, key: KeyCode, now: Instant) -> bool
    {
        match key {
            KeyCode::Esc => {
                tracing::info!(score = self.engine.score(), best = self.best(), "leaving snake");
                return false;
            }
            KeyCode::Up => {
                self.engine.set_direction(Direction::Up);
            }
            KeyCode::Down => {
                self.engine.set_direction(Direction::Down);
            }
            KeyCode::Left => {
                self.engine.set_direction(Direction::Left);
            }
            KeyCode::Right => {
                self.engine.set_direction(Direction::Right);
            }
            KeyCode::Char(' ') => {
                if self.engine.is_alive() {
                    self.timer.toggle(now);
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.best = self.best();
                self.engine.reset();
                self.timer.start(now);
                tracing::info!(best = self.best, "snake reset");
            }
            _ => {}
        }
        true
    }

    /// Runs every step that fell due by `now`. A collision stops the timer.
    fn advance(&mut self, now: Instant)
    {
        for _ in 0..self.timer.due_ticks(now) {
            if self.engine.tick() == TickOutcome::Died {
                self.timer.stop();
                self.best = self.best();
                break;
            }
        }
    }

    fn best(&self) -> u32
    {
        self.best.max(self.engine.score())
    }
}

pub fn run_with_config(config: SnakeConfig) -> Result<(), PortalError>
{
    let rng = GameRng::seeded_or_random(config.seed);
    tracing::info!(seed = rng.seed(), step_ms = config.step.as_millis() as u64, "starting snake");
    let mut session = Session::new(SnakeEngine::new(rng), config.step);

    let mut term = TerminalGuard::enter()?;
    let mut last_frame: Option<Instant> = None;

    loop {
        let now = Instant::now();
        for key in term::poll_keys()? {
            if !session.handle_key(key, now) {
                return Ok(());
            }
        }

        session.advance(now);

        if last_frame.is_none_or(|frame| frame.elapsed() >= Duration::from_millis(FRAME_MS)) {
            term.present(&draw(&session.engine, &session.timer, session.best()))?;
            last_frame = Some(Instant::now());
        }

        std::thread::sleep(Duration::from_millis(1));
    }
}

fn draw(engine: &SnakeEngine, timer: &RepeatingTask, best: u32) -> Vec<String>
{
    let mut lines = Vec::new();
    lines.push("Nexus Arcade - Neon Snake".to_string());
    lines.push(format!(
        "Score: {:>5}  Best: {:>5}  Length: {:>3}  Heading: {:<5}  Step: {}ms",
        engine.score(),
        best,
        engine.length(),
        format!("{:?}", engine.heading()),
        timer.interval().as_millis()
    ));
    lines.push(String::new());

    let mut grid = vec![vec![FLOOR; GRID_SIZE as usize]; GRID_SIZE as usize];
    let mut marks = vec![vec![' '; GRID_SIZE as usize]; GRID_SIZE as usize];
    if let Some(food) = engine.food() {
        grid[food.y as usize][food.x as usize] = FOOD;
        marks[food.y as usize][food.x as usize] = '*';
    }
    for (index, cell) in engine.body().enumerate() {
        grid[cell.y as usize][cell.x as usize] = if index == 0 { HEAD } else { BODY };
    }

    for (row, row_marks) in grid.iter().zip(marks.iter()) {
        let mut line = String::new();
        for (color, mark) in row.iter().zip(row_marks.iter()) {
            line.push_str(&term::bg(*color, &format!("{mark} ")));
        }
        lines.push(line);
    }

    lines.push(String::new());
    if !engine.is_alive() {
        lines.push(term::fg(BANNER, &format!("GAME OVER - score {}", engine.score())));
        lines.push("Press R to try again, ESC to leave.".to_string());
    } else if !timer.is_running() {
        lines.push("PAUSED - press SPACE to play".to_string());
        lines.push("Arrows steer, R restarts, ESC leaves.".to_string());
    } else {
        lines.push("Arrows steer, SPACE pauses, R restarts, ESC leaves.".to_string());
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::engines::Cell;
    use crate::engines::snake::START_CELL;

    fn args(values: &[&str]) -> Vec<String>
    {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn defaults_to_150ms()
    {
        let config = SnakeConfig::from_args(&[]).expect("no options");
        assert_eq!(config, SnakeConfig::default());
        assert_eq!(config.step, Duration::from_millis(150));
    }

    #[test]
    fn parses_inline_and_separate_values()
    {
        let config =
            SnakeConfig::from_args(&args(&["--speed-ms=100", "--seed", "42"])).expect("valid options");
        assert_eq!(config.step, Duration::from_millis(100));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn speed_is_clamped()
    {
        let fast = SnakeConfig::from_args(&args(&["--speed-ms=1"])).expect("valid");
        assert_eq!(fast.step, Duration::from_millis(MIN_SPEED_MS));
        let slow = SnakeConfig::from_args(&args(&["--speed-ms=9000"])).expect("valid");
        assert_eq!(slow.step, Duration::from_millis(MAX_SPEED_MS));
    }

    #[test]
    fn rejects_bad_options()
    {
        assert!(matches!(
            SnakeConfig::from_args(&args(&["--wrap"])),
            Err(PortalError::UnknownOption { .. })
        ));
        assert!(matches!(
            SnakeConfig::from_args(&args(&["--seed"])),
            Err(PortalError::MissingValue(_))
        ));
        assert!(matches!(
            SnakeConfig::from_args(&args(&["--speed-ms=fast"])),
            Err(PortalError::InvalidValue { .. })
        ));
    }

    const STEP: Duration = Duration::from_millis(150);

    /// A loop whose head eats at (5,4), then dies turning left into (4,4).
    fn doomed_session() -> Session
    {
        let engine = SnakeEngine::with_body(
            &[(5, 5), (5, 6), (4, 6), (4, 5), (4, 4)],
            Direction::Up,
            Some((5, 4)),
        );
        Session::new(engine, STEP)
    }

    #[test]
    fn paused_session_does_not_tick()
    {
        let start = Instant::now();
        let mut session = doomed_session();
        session.advance(start + STEP * 10);
        assert_eq!(session.engine.head(), Cell::new(5, 5));
        assert!(!session.timer.is_running());
    }

    #[test]
    fn space_starts_and_pauses_the_run()
    {
        let start = Instant::now();
        let mut session = doomed_session();
        assert!(session.handle_key(KeyCode::Char(' '), start));
        session.advance(start + STEP);
        assert_eq!(session.engine.head(), Cell::new(5, 4));
        assert_eq!(session.engine.score(), 10);

        assert!(session.handle_key(KeyCode::Char(' '), start + STEP));
        session.advance(start + STEP * 5);
        assert_eq!(session.engine.head(), Cell::new(5, 4));
    }

    #[test]
    fn death_stops_the_timer_and_records_best()
    {
        let start = Instant::now();
        let mut session = doomed_session();
        session.handle_key(KeyCode::Char(' '), start);
        session.advance(start + STEP);
        session.handle_key(KeyCode::Left, start + STEP);
        session.advance(start + STEP * 2);

        assert!(!session.engine.is_alive());
        assert!(!session.timer.is_running());
        assert_eq!(session.best, 10);

        session.handle_key(KeyCode::Char(' '), start + STEP * 3);
        assert!(!session.timer.is_running());
    }

    #[test]
    fn reset_mid_run_keeps_best_and_restarts()
    {
        let start = Instant::now();
        let mut session = doomed_session();
        session.handle_key(KeyCode::Char(' '), start);
        session.advance(start + STEP);
        assert_eq!(session.engine.score(), 10);

        let restart = start + STEP + Duration::from_millis(20);
        assert!(session.handle_key(KeyCode::Char('r'), restart));
        assert_eq!(session.engine.score(), 0);
        assert_eq!(session.best(), 10);
        assert!(session.timer.is_running());

        session.advance(restart + STEP);
        assert_eq!(session.engine.head(), Cell::new(START_CELL.x, START_CELL.y - 1));
    }

    #[test]
    fn escape_ends_the_session()
    {
        let mut session = doomed_session();
        assert!(!session.handle_key(KeyCode::Esc, Instant::now()));
    }

    #[test]
    fn paused_board_shows_prompt()
    {
        let engine = SnakeEngine::new(GameRng::new(1));
        let timer = RepeatingTask::new(Duration::from_millis(150));
        let lines = draw(&engine, &timer, 0);
        assert_eq!(lines.len(), 3 + GRID_SIZE as usize + 3);
        assert!(lines.iter().any(|line| line.starts_with("PAUSED")));
    }
}
