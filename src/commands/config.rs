//! Config command - show or initialise the configuration file

use crate::cli::ConfigCommands;
use crate::config::FilmroomConfig;
use crate::FilmroomError;

type Result<T> = std::result::Result<T, FilmroomError>;

/// Execute a configuration subcommand
///
/// # Errors
/// Returns an error if the configuration cannot be rendered or written.
pub fn execute(config: &FilmroomConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigCommands::Init { force } => {
            let path = FilmroomConfig::config_path()?;
            if path.exists() && !force {
                if !quiet {
                    println!("Config already exists at {} (use --force to overwrite)", path.display());
                }
                return Ok(());
            }
            FilmroomConfig::default().save_to(&path)?;
            if !quiet {
                println!("Wrote default config to {}", path.display());
            }
        }
    }
    Ok(())
}
