//! Command-name contract for logging.

use crate::cli::parse::{Commands, ConfigCommands};

/// Dotted command name recorded on log events (e.g. "merge", "config.show").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Merge { .. } => "merge".to_string(),
        Commands::Validate { .. } => "validate".to_string(),
        Commands::Get { .. } => "get".to_string(),
        Commands::Config { command } => format!("config.{}", config_command_name(command)),
    }
}

pub fn config_command_name(command: &ConfigCommands) -> &'static str {
    match command {
        ConfigCommands::Show { .. } => "show",
        ConfigCommands::Path => "path",
    }
}
