//! CLI command for importing a JSON or YAML export

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::error::{ContactError, ContactResult};
use crate::export::{import_from_json, import_from_yaml};
use crate::services::ContactService;
use crate::storage::Storage;

/// Import format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImportFormat {
    /// JSON export
    Json,
    /// YAML export
    Yaml,
}

impl ImportFormat {
    /// Guess the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Arguments of the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// File written by `contacts export json` or `contacts export yaml`
    pub file: PathBuf,

    /// Input format (guessed from the extension if omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<ImportFormat>,
}

/// Handle the import command
pub fn handle_import_command(
    storage: &Storage,
    settings: &Settings,
    args: ImportArgs,
) -> ContactResult<()> {
    let contents = fs::read_to_string(&args.file).map_err(|e| {
        ContactError::Import(format!("Failed to read {}: {}", args.file.display(), e))
    })?;

    let format = args
        .format
        .unwrap_or_else(|| ImportFormat::from_path(&args.file));
    let export = match format {
        ImportFormat::Json => import_from_json(&contents)?,
        ImportFormat::Yaml => import_from_yaml(&contents)?,
    };

    let service = ContactService::new(storage, settings);
    let summary = service.import(export.contacts)?;

    println!("Imported {} contacts.", summary.added);
    for name in &summary.skipped {
        println!("Skipped existing contact: {}", name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ImportFormat::from_path(Path::new("book.yaml")), ImportFormat::Yaml);
        assert_eq!(ImportFormat::from_path(Path::new("book.YML")), ImportFormat::Yaml);
        assert_eq!(ImportFormat::from_path(Path::new("book.json")), ImportFormat::Json);
        assert_eq!(ImportFormat::from_path(Path::new("book")), ImportFormat::Json);
    }
}
