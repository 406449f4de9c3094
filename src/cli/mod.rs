//! CLI command handlers
//!
//! This module contains the implementation of the non-interactive commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod history;
pub mod report;

pub use expense::{handle_add_command, handle_list_command, AddArgs};
pub use history::handle_history_command;
pub use report::handle_report_command;
