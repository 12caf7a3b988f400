//! Interactive command loop
//!
//! A numbered text menu for adding, finding, deleting, and listing
//! contacts. Input and output are generic so the loop can be driven from a
//! terminal or from tests.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{format_contact_details, format_contact_list};
use crate::error::ContactResult;
use crate::models::KNOWN_CATEGORIES;
use crate::services::{AddContactInput, ContactService};
use crate::storage::Storage;

/// A menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Find,
    Delete,
    List,
    Exit,
}

impl MenuChoice {
    /// Parse a menu number or command word
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "add" => Some(Self::Add),
            "2" | "find" => Some(Self::Find),
            "3" | "delete" => Some(Self::Delete),
            "4" | "list" => Some(Self::List),
            "5" | "exit" | "quit" | "q" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The interactive contact menu
pub struct ContactShell<'a, R, W> {
    service: ContactService<'a>,
    date_format: String,
    read_only: bool,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> ContactShell<'a, R, W> {
    /// Create a shell reading commands from `input` and writing to `output`
    pub fn new(storage: &'a Storage, settings: &Settings, input: R, output: W) -> Self {
        Self {
            service: ContactService::new(storage, settings),
            date_format: settings.date_format.clone(),
            read_only: false,
            input,
            output,
        }
    }

    /// Refuse add and delete
    ///
    /// Used when the contacts file could not be loaded, so a save cannot
    /// overwrite it.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> ContactResult<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.prompt("\nEnter your choice (1-5): ")? else {
                writeln!(self.output)?;
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Add) => self.add()?,
                Some(MenuChoice::Find) => self.find()?,
                Some(MenuChoice::Delete) => self.delete()?,
                Some(MenuChoice::List) => self.list()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Invalid choice. Please enter 1-5.")?,
            }
        }
    }

    fn print_menu(&mut self) -> ContactResult<()> {
        writeln!(self.output, "\nContact Management System")?;
        writeln!(self.output, "1. Add Contact")?;
        writeln!(self.output, "2. Find Contact")?;
        writeln!(self.output, "3. Delete Contact")?;
        writeln!(self.output, "4. Display Contacts")?;
        writeln!(self.output, "5. Exit")?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> ContactResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Whether changes are refused; prints the notice if so
    fn refuse_changes(&mut self) -> ContactResult<bool> {
        if self.read_only {
            writeln!(
                self.output,
                "Changes are disabled because the contacts file could not be loaded."
            )?;
        }
        Ok(self.read_only)
    }

    fn add(&mut self) -> ContactResult<()> {
        if self.refuse_changes()? {
            return Ok(());
        }

        let Some(name) = self.prompt("Enter name: ")? else {
            return Ok(());
        };
        if name.is_empty() {
            writeln!(self.output, "Name cannot be empty.")?;
            return Ok(());
        }
        if self.service.find(&name)?.is_some() {
            writeln!(self.output, "A contact named '{}' already exists.", name)?;
            return Ok(());
        }

        let Some(phone) = self.prompt("Enter phone number: ")? else {
            return Ok(());
        };
        let email = self.prompt("Enter email (optional): ")?;
        let category_prompt = format!("Enter category ({}): ", KNOWN_CATEGORIES.join("/"));
        let category = self.prompt(&category_prompt)?;

        let input = AddContactInput {
            name,
            phone,
            email,
            category,
        };
        match self.service.add(input) {
            Ok(_) => writeln!(self.output, "Contact added successfully!")?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn find(&mut self) -> ContactResult<()> {
        let Some(name) = self.prompt("Enter name to find: ")? else {
            return Ok(());
        };

        match self.service.find(&name)? {
            Some(contact) => {
                writeln!(self.output)?;
                write!(
                    self.output,
                    "{}",
                    format_contact_details(&contact, &self.date_format)
                )?;
            }
            None => writeln!(self.output, "Contact not found.")?,
        }
        Ok(())
    }

    fn delete(&mut self) -> ContactResult<()> {
        if self.refuse_changes()? {
            return Ok(());
        }

        let Some(name) = self.prompt("Enter name to delete: ")? else {
            return Ok(());
        };

        match self.service.delete(&name) {
            Ok(Some(contact)) => writeln!(self.output, "Deleted contact: {}", contact.name)?,
            Ok(None) => writeln!(self.output, "Contact not found.")?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn list(&mut self) -> ContactResult<()> {
        let contacts = self.service.list()?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{}",
            format_contact_list(&contacts, &self.date_format)
        )?;
        Ok(())
    }
}
