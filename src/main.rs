mod catalog;
mod engines;
mod error;
mod games;
mod logging;
mod rng;
mod timer;

use crate::error::PortalError;
use crate::games::term;
use std::env;
use std::io::Write;

fn main()
{
    if let Err(err) = run() {
        tracing::error!(error = %err, "portal exited with error");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), PortalError>
{
    logging::init()?;
    let mut args = env::args().skip(1);
    let command = args.next();
    let rest: Vec<String> = args.collect();
    match command.as_deref() {
        None => interactive_menu(),
        Some("list") => {
            list_games();
            Ok(())
        }
        Some("play") => match rest.split_first() {
            Some((id, options)) => run_game(id, options),
            None => Err(PortalError::MissingValue("play".to_string())),
        },
        Some("-h") | Some("--help") => {
            print_help();
            Ok(())
        }
        Some(other) if catalog::find(other).is_some() => run_game(other, &rest),
        Some(other) => Err(PortalError::UnknownCommand(other.to_string())),
    }
}

fn run_game(id: &str, args: &[String]) -> Result<(), PortalError>
{
    let entry = catalog::find(id).ok_or_else(|| PortalError::UnknownGame(id.to_string()))?;
    games::launch(entry, args)
}

fn interactive_menu() -> Result<(), PortalError>
{
    let entries = catalog::entries();
    println!("Nexus Arcade");
    println!();
    println!("Select a game:");
    for (idx, entry) in entries.iter().enumerate() {
        println!("  {}. {}", idx + 1, menu_line(entry));
    }
    println!();
    print!("Enter number or id (default 1, q to quit): ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    let choice = input.trim();

    if choice.is_empty() {
        return run_game(entries[0].id, &[]);
    }
    if choice.eq_ignore_ascii_case("q") {
        return Ok(());
    }
    if let Ok(index) = choice.parse::<usize>() {
        if index >= 1 && index <= entries.len() {
            return run_game(entries[index - 1].id, &[]);
        }
    }
    if let Some(entry) = catalog::find(choice) {
        return run_game(entry.id, &[]);
    }

    Err(PortalError::InvalidSelection)
}

fn menu_line(entry: &catalog::CatalogEntry) -> String
{
    let title = term::fg(
        term::theme_color(entry.theme),
        &format!("{} {:<15}", term::icon_glyph(entry.icon), entry.title),
    );
    format!("{title} [{}] {}", entry.category, entry.description)
}

fn list_games()
{
    println!("Available games:");
    for category in catalog::categories() {
        println!();
        println!("{category}");
        for entry in catalog::entries().iter().filter(|entry| entry.category == category) {
            let kind = match entry.launch {
                catalog::Launch::Internal(_) => "built-in",
                catalog::Launch::Embedded { .. } => "embedded",
            };
            println!("  {:<8} - {} ({kind})", entry.id, entry.title);
        }
    }
}

fn print_help()
{
    println!("nexus-arcade");
    println!("\nUsage:");
    println!("  nexus-arcade                 interactive menu");
    println!("  nexus-arcade list");
    println!("  nexus-arcade snake [--speed-ms=150] [--seed=N]");
    println!("  nexus-arcade 2048 [--seed=N]");
    println!("  nexus-arcade clicker");
    println!("  nexus-arcade play <id> [options]");
    println!("\nNotes:");
    println!("  Snake steps every 150 ms by default, the reference speed of the grid game.");
    println!("  --speed-ms is an extra tuning knob, clamped to 60..=400 ms.");
    println!("  Set ARCADE_LOG to a file path to record a log of the session.");
    println!("  ARCADE_LOG_LEVEL takes a tracing filter (default info).");
}
