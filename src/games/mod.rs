pub mod clicker;
pub mod embedded;
pub mod merge;
pub mod snake;
pub mod term;

use crate::catalog::{CatalogEntry, InternalGame, Launch};
use crate::error::PortalError;

pub fn launch(entry: &CatalogEntry, args: &[String]) -> Result<(), PortalError>
{
    tracing::info!(game = entry.id, "launching");
    match entry.launch {
        Launch::Internal(InternalGame::Snake) => {
            let config = snake::SnakeConfig::from_args(args)?;
            snake::run_with_config(config)
        }
        Launch::Internal(InternalGame::TileMerge) => {
            let config = merge::MergeConfig::from_args(args)?;
            merge::run_with_config(config)
        }
        Launch::Internal(InternalGame::Clicker) => {
            if let Some(arg) = args.first() {
                return Err(PortalError::UnknownOption {
                    game: "clicker",
                    option: arg.clone(),
                });
            }
            clicker::run()
        }
        Launch::Embedded { url } => {
            if let Some(arg) = args.first() {
                return Err(PortalError::UnknownOption {
                    game: entry.id,
                    option: arg.clone(),
                });
            }
            embedded::show(entry, url)
        }
    }
}

/// Splits `--name=value` into its parts; other arguments pass through whole.
pub(crate) fn split_option(arg: &str) -> (&str, Option<&str>)
{
    match arg.split_once('=') {
        Some((name, value)) if name.starts_with("--") => (name, Some(value)),
        _ => (arg, None),
    }
}

pub(crate) fn option_value<'a>(
    name: &str,
    inline: Option<&str>,
    rest: &mut impl Iterator<Item = &'a String>,
) -> Result<String, PortalError>
{
    match inline {
        Some(value) => Ok(value.to_string()),
        None => rest
            .next()
            .cloned()
            .ok_or_else(|| PortalError::MissingValue(name.to_string())),
    }
}

pub(crate) fn parse_seed(value: &str) -> Result<u64, PortalError>
{
    value.parse::<u64>().map_err(|_| PortalError::InvalidValue {
        option: "--seed",
        expected: "an unsigned integer",
        value: value.to_string(),
    })
}
