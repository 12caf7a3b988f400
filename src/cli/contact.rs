//! Contact CLI commands
//!
//! Implements the one-shot add/find/delete/list commands and the audit
//! history view.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_contact_details, format_contact_list, format_contact_table};
use crate::error::ContactResult;
use crate::services::{AddContactInput, ContactService};
use crate::storage::Storage;

/// Contact subcommands
#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    /// Add a new contact
    Add {
        /// Contact name (must be unique, ignoring case)
        name: String,
        /// Phone number
        phone: String,
        /// Email address
        #[arg(short, long)]
        email: Option<String>,
        /// Category (family, friends, work, general, ...)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Find a contact by exact name (case-insensitive)
    Find {
        /// Contact name
        name: String,
    },
    /// Delete a contact by name
    #[command(alias = "rm")]
    Delete {
        /// Contact name
        name: String,
    },
    /// List all contacts in alphabetical order
    #[command(alias = "ls")]
    List {
        /// One line per contact
        #[arg(short, long)]
        compact: bool,
    },
    /// Show recent additions and deletions
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle a contact command
pub fn handle_contact_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ContactCommands,
) -> ContactResult<()> {
    let service = ContactService::new(storage, settings);

    match cmd {
        ContactCommands::Add {
            name,
            phone,
            email,
            category,
        } => {
            let contact = service.add(AddContactInput {
                name,
                phone,
                email,
                category,
            })?;
            println!("Added contact: {}", contact.name);
        }

        ContactCommands::Find { name } => match service.find(&name)? {
            Some(contact) => print!("{}", format_contact_details(&contact, &settings.date_format)),
            None => println!("Contact not found: {}", name),
        },

        ContactCommands::Delete { name } => match service.delete(&name)? {
            Some(contact) => println!("Deleted contact: {}", contact.name),
            None => println!("Contact not found: {}", name),
        },

        ContactCommands::List { compact } => {
            let contacts = service.list()?;
            if compact {
                print!("{}", format_contact_table(&contacts));
            } else {
                println!("{}", format_contact_list(&contacts, &settings.date_format));
            }
        }

        ContactCommands::History { limit } => {
            let Some(logger) = storage.audit() else {
                println!("Audit logging is disabled.");
                return Ok(());
            };

            let entries = logger.read_recent(limit)?;
            if entries.is_empty() {
                println!("No history yet.");
                return Ok(());
            }

            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    Ok(())
}
