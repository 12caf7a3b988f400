use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use contact_book::cli::{
    handle_contact_command, handle_export_command, handle_import_command, ContactCommands,
    ContactShell, ExportArgs, ImportArgs,
};
use contact_book::config::{paths::ContactPaths, settings::Settings};
use contact_book::storage::Storage;

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Terminal contact book",
    long_about = "A contact book for the terminal. Contacts are kept in alphabetical \
                  order by name and saved to a JSON file between runs. Run without a \
                  command to use the interactive menu."
)]
struct Cli {
    /// Contacts file to use instead of the default location
    #[arg(short, long, global = true, env = "CONTACT_BOOK_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Contact(ContactCommands),

    /// Export all contacts
    Export(ExportArgs),

    /// Add contacts from a JSON or YAML export
    Import(ImportArgs),

    /// Launch the interactive menu
    #[command(alias = "menu")]
    Shell,

    /// Write default settings and create the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut paths = ContactPaths::new()?;
    if let Some(file) = cli.file {
        paths = paths.with_contacts_file(file);
    }
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    if !settings.audit_enabled {
        storage = storage.without_audit();
    }

    let (loaded, load_error) = match storage.load_all() {
        Ok(count) => {
            info!(count, path = %paths.contacts_file().display(), "loaded contacts");
            (count, None)
        }
        Err(e) => {
            warn!(path = %paths.contacts_file().display(), error = %e, "failed to load contacts");
            eprintln!("Error loading contacts: {}", e);
            (0, Some(e))
        }
    };

    // Saving after a failed load would overwrite the unreadable file
    match cli.command {
        None | Some(Commands::Shell) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut shell = ContactShell::new(&storage, &settings, stdin.lock(), stdout.lock());
            if load_error.is_some() {
                eprintln!("Opening the contact book read-only; add and delete are disabled.");
                shell.read_only().run()?;
            } else {
                println!("Loaded {} contacts.", loaded);
                shell.run()?;
            }
        }
        Some(Commands::Contact(cmd)) => {
            let mutates = matches!(cmd, ContactCommands::Add { .. } | ContactCommands::Delete { .. });
            if let (true, Some(e)) = (mutates, load_error) {
                return Err(e.into());
            }
            handle_contact_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, &settings, args)?;
        }
        Some(Commands::Import(args)) => {
            if let Some(e) = load_error {
                return Err(e.into());
            }
            handle_import_command(&storage, &settings, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing contact book at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Contact Book Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Contacts file:  {}", paths.contacts_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Default category: {}", settings.default_category);
            println!("  Audit enabled:    {}", settings.audit_enabled);
            println!("  Date format:      {}", settings.date_format);
            println!();
            println!("Contacts: {}", storage.contacts.count()?);
        }
    }

    Ok(())
}
