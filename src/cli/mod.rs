//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod contact;
pub mod export;
pub mod import;
pub mod shell;

pub use contact::{handle_contact_command, ContactCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use import::{handle_import_command, ImportArgs, ImportFormat};
pub use shell::{ContactShell, MenuChoice};
