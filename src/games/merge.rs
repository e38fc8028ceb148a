use crate::engines::Direction;
use crate::engines::merge::{BOARD_SIZE, MergeEngine};
use crate::error::PortalError;
use crate::games::term::{self, FRAME_MS, Rgb, TerminalGuard};
use crate::games::{option_value, parse_seed, split_option};
use crate::rng::GameRng;
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

const CELL_WIDTH: usize = 6;
const EMPTY: Rgb = Rgb::new(39, 39, 42);

#[derive(Debug, Default, PartialEq, Eq)]
pub struct MergeConfig
{
    seed: Option<u64>,
}

impl MergeConfig
{
    pub fn from_args(args: &[String]) -> Result<Self, PortalError>
    {
        let mut config = Self::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match split_option(arg) {
                ("--seed", inline) => {
                    let value = option_value("--seed", inline, &mut iter)?;
                    config.seed = Some(parse_seed(&value)?);
                }
                _ => {
                    return Err(PortalError::UnknownOption {
                        game: "2048",
                        option: arg.clone(),
                    });
                }
            }
        }
        Ok(config)
    }
}

pub fn run_with_config(config: MergeConfig) -> Result<(), PortalError>
{
    let rng = GameRng::seeded_or_random(config.seed);
    tracing::info!(seed = rng.seed(), "starting 2048");
    let mut engine = MergeEngine::new(rng);
    let mut term = TerminalGuard::enter()?;
    let mut dirty = true;
    let mut last_frame = Instant::now();

    loop {
        for key in term::poll_keys()? {
            let direction = match key {
                KeyCode::Esc => {
                    tracing::info!(
                        score = engine.score(),
                        best = engine.best_score(),
                        "leaving 2048"
                    );
                    return Ok(());
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    engine.reset();
                    tracing::info!(best = engine.best_score(), "2048 reset");
                    dirty = true;
                    continue;
                }
                KeyCode::Up => Direction::Up,
                KeyCode::Down => Direction::Down,
                KeyCode::Left => Direction::Left,
                KeyCode::Right => Direction::Right,
                _ => continue,
            };
            if engine.slide(direction) {
                dirty = true;
                if !engine.has_moves() {
                    tracing::info!(score = engine.score(), max_tile = engine.max_tile(), "no moves left");
                }
            }
        }

        if dirty && last_frame.elapsed() >= Duration::from_millis(FRAME_MS) {
            term.present(&draw(&engine))?;
            dirty = false;
            last_frame = Instant::now();
        }

        std::thread::sleep(Duration::from_millis(1));
    }
}

fn draw(engine: &MergeEngine) -> Vec<String>
{
    let mut lines = Vec::new();
    lines.push("Nexus Arcade - 2048".to_string());
    lines.push(format!(
        "Score: {:>6}  Best: {:>6}  Top tile: {}",
        engine.score(),
        engine.best_score(),
        engine.max_tile()
    ));
    lines.push(String::new());

    let size = BOARD_SIZE as usize;
    let mut board = vec![vec![None::<u32>; size]; size];
    for tile in engine.tiles() {
        board[tile.y as usize][tile.x as usize] = Some(tile.value);
    }

    for row in board {
        let mut line = String::new();
        for slot in row {
            let cell = match slot {
                Some(value) => term::bg(tile_color(value), &format!("{value:^width$}", width = CELL_WIDTH)),
                None => term::bg(EMPTY, &format!("{:^width$}", ".", width = CELL_WIDTH)),
            };
            line.push_str(&cell);
            line.push(' ');
        }
        lines.push(line);
        lines.push(String::new());
    }

    if !engine.has_moves() {
        lines.push(term::fg(Rgb::new(244, 63, 94), "NO MOVES LEFT - press R for a new game"));
    } else {
        lines.push(String::new());
    }
    lines.push("Arrows slide, R starts a new game, ESC leaves.".to_string());
    lines
}

fn tile_color(value: u32) -> Rgb
{
    match value {
        2 => Rgb::new(228, 228, 231),
        4 => Rgb::new(212, 212, 216),
        8 => Rgb::new(254, 215, 170),
        16 => Rgb::new(253, 186, 116),
        32 => Rgb::new(251, 146, 60),
        64 => Rgb::new(249, 115, 22),
        128 => Rgb::new(254, 240, 138),
        256 => Rgb::new(253, 224, 71),
        512 => Rgb::new(250, 204, 21),
        1024 => Rgb::new(234, 179, 8),
        2048 => Rgb::new(202, 138, 4),
        _ => Rgb::new(63, 63, 70),
    }
}
