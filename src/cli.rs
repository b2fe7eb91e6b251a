//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, config_command_name};
pub use output::map_error;
pub use parse::{Cli, Commands, ConfigCommands};
pub use presentation::{
    format_config_path, format_merge_report_json, format_merge_report_text, format_settings,
    format_validation_report_json, format_validation_report_text,
};
pub use route::{CommandOutput, RunContext};
