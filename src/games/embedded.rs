use crate::catalog::CatalogEntry;
use crate::error::PortalError;
use crate::games::term::{self, TerminalGuard};

/// Shows where an embedded title lives. Its document runs elsewhere and the
/// portal has no view into it.
pub fn show(entry: &CatalogEntry, url: &str) -> Result<(), PortalError>
{
    tracing::info!(game = entry.id, url, "pointing at embedded game");
    let mut term = TerminalGuard::enter()?;
    term.present(&describe(entry, url))?;
    term::wait_for_space()?;
    Ok(())
}

fn describe(entry: &CatalogEntry, url: &str) -> Vec<String>
{
    let accent = term::theme_color(entry.theme);
    vec![
        term::fg(
            accent,
            &format!("[{}] {}", term::icon_glyph(entry.icon), entry.title),
        ),
        format!("Category: {}", entry.category),
        String::new(),
        entry.description.to_string(),
        String::new(),
        "This game is hosted externally. Open it in a browser:".to_string(),
        format!("  {url}"),
        String::new(),
        "Press SPACE to return.".to_string(),
    ]
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::catalog::{self, Launch};

    #[test]
    fn description_includes_url()
    {
        let entry = catalog::find("tetris").expect("tetris entry");
        let Launch::Embedded { url } = entry.launch else {
            panic!("tetris should be embedded");
        };
        let lines = describe(entry, url);
        assert!(lines.iter().any(|line| line.contains(url)));
        assert!(lines[0].contains("Tetris"));
    }
}
