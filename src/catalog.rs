#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InternalGame
{
    Snake,
    TileMerge,
    Clicker,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Launch
{
    Internal(InternalGame),
    /// Third-party document the portal only points at.
    Embedded
    {
        url: &'static str,
    },
}

#[derive(Clone, Copy, Debug)]
pub struct CatalogEntry
{
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub theme: &'static str,
    pub launch: Launch,
}

static ENTRIES: [CatalogEntry; 5] = [
    CatalogEntry {
        id: "snake",
        title: "Neon Snake",
        category: "Arcade",
        description: "Classic snake with a neon twist. Grow as long as possible.",
        icon: "Zap",
        theme: "emerald",
        launch: Launch::Internal(InternalGame::Snake),
    },
    CatalogEntry {
        id: "2048",
        title: "2048",
        category: "Puzzle",
        description: "Slide and join the numbers until you reach 2048.",
        icon: "Grid3X3",
        theme: "amber",
        launch: Launch::Internal(InternalGame::TileMerge),
    },
    CatalogEntry {
        id: "clicker",
        title: "Energy Clicker",
        category: "Idle",
        description: "Generate energy, buy upgrades, and build an empire.",
        icon: "Cpu",
        theme: "rose",
        launch: Launch::Internal(InternalGame::Clicker),
    },
    CatalogEntry {
        id: "tetris",
        title: "Tetris",
        category: "Puzzle",
        description: "The world-famous puzzle game that everyone knows.",
        icon: "Puzzle",
        theme: "blue",
        launch: Launch::Embedded {
            url: "https://tetris.com/play-tetris",
        },
    },
    CatalogEntry {
        id: "pacman",
        title: "Pac-Man",
        category: "Arcade",
        description: "Guide Pac-Man through the maze and eat all the dots.",
        icon: "Circle",
        theme: "yellow",
        launch: Launch::Embedded {
            url: "https://www.google.com/logos/2010/pacman10-i.html",
        },
    },
];

pub fn entries() -> &'static [CatalogEntry]
{
    &ENTRIES
}

pub fn find(id: &str) -> Option<&'static CatalogEntry>
{
    ENTRIES
        .iter()
        .find(|entry| entry.id.eq_ignore_ascii_case(id))
}

/// Category labels in first-seen order.
pub fn categories() -> Vec<&'static str>
{
    let mut seen: Vec<&'static str> = Vec::new();
    for entry in &ENTRIES {
        if !seen.contains(&entry.category) {
            seen.push(entry.category);
        }
    }
    seen
}
