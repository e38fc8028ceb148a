use crate::engines::clicker::{ClickerEngine, UpgradeKind};
use crate::error::PortalError;
use crate::games::term::{self, FRAME_MS, Rgb, TerminalGuard};
use crate::timer::RepeatingTask;
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

const PASSIVE_INTERVAL: Duration = Duration::from_secs(1);

const ENERGY: Rgb = Rgb::new(52, 211, 153);
const DIMMED: Rgb = Rgb::new(113, 113, 122);

pub fn run() -> Result<(), PortalError>
{
    tracing::info!("starting energy clicker");
    let mut engine = ClickerEngine::default();
    let mut passive = RepeatingTask::new(PASSIVE_INTERVAL);
    let mut term = TerminalGuard::enter()?;
    let start = Instant::now();
    passive.start(start);
    let mut last_frame: Option<Instant> = None;

    loop {
        let now = Instant::now();
        for key in term::poll_keys()? {
            match key {
                KeyCode::Esc => {
                    tracing::info!(
                        total = engine.total(),
                        seconds = start.elapsed().as_secs(),
                        "leaving energy clicker"
                    );
                    return Ok(());
                }
                KeyCode::Char(' ') | KeyCode::Enter => engine.perform_action(),
                KeyCode::Char(ch) => {
                    if let Some(id) = ch.to_digit(10) {
                        engine.purchase(id);
                    }
                }
                _ => {}
            }
        }

        for _ in 0..passive.due_ticks(now) {
            engine.tick();
        }

        if last_frame.is_none_or(|frame| frame.elapsed() >= Duration::from_millis(FRAME_MS)) {
            term.present(&draw(&engine))?;
            last_frame = Some(Instant::now());
        }

        std::thread::sleep(Duration::from_millis(1));
    }
}

fn draw(engine: &ClickerEngine) -> Vec<String>
{
    let mut lines = Vec::new();
    lines.push("Nexus Arcade - Energy Clicker".to_string());
    lines.push(String::new());
    lines.push(term::fg(ENERGY, &format!("  {} energy", group_digits(engine.total()))));
    lines.push(format!(
        "  +{} / action   {}/sec",
        engine.per_action_power(),
        engine.per_tick_rate()
    ));
    lines.push(String::new());
    lines.push("Upgrades".to_string());

    for upgrade in engine.upgrades() {
        let kind = match upgrade.kind {
            UpgradeKind::Action => "action",
            UpgradeKind::Passive => "per sec",
        };
        let row = format!(
            "  [{}] {:<16} x{:<3} {:>8} energy   +{} {}",
            upgrade.id,
            upgrade.name,
            upgrade.purchase_count,
            upgrade.cost,
            upgrade.power_delta,
            kind
        );
        if engine.affordable(upgrade.id) {
            lines.push(row);
        } else {
            lines.push(term::fg(DIMMED, &row));
        }
    }

    lines.push(String::new());
    lines.push("SPACE/ENTER generates energy, 1-4 buys an upgrade, ESC leaves.".to_string());
    lines
}

fn group_digits(value: u64) -> String
{
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
