//! CLI command for data export
//!
//! Writes every contact to a file (or stdout) in CSV, JSON, or YAML.

use crate::config::Settings;
use crate::error::{ContactError, ContactResult};
use crate::export::{export_contacts_csv, export_contacts_json, export_contacts_yaml};
use crate::storage::Storage;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (spreadsheet-compatible)
    Csv,
    /// JSON format (with metadata)
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Arguments of the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> ContactResult<()> {
    match &args.output {
        Some(output) => {
            let file = File::create(output).map_err(|e| {
                ContactError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, settings, &args, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ContactError::Export(e.to_string()))?;

            let count = storage.contacts.count()?;
            println!("Exported {} contacts to: {}", count, output.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, settings, &args, &mut writer)?;
            if args.format == ExportFormat::Json {
                writeln!(writer).map_err(|e| ContactError::Export(e.to_string()))?;
            }
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    storage: &Storage,
    settings: &Settings,
    args: &ExportArgs,
    writer: &mut W,
) -> ContactResult<()> {
    match args.format {
        ExportFormat::Csv => export_contacts_csv(storage, writer, &settings.date_format),
        ExportFormat::Json => export_contacts_json(storage, writer, args.pretty),
        ExportFormat::Yaml => export_contacts_yaml(storage, writer),
    }
}
