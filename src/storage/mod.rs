pub mod memory;
pub mod stores;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::Path;

/// Supplies the contacts a [`PhoneBook`](crate::domain::PhoneBook) starts with.
///
/// Sources yield unindexed contacts; ids are issued by the phone book.
pub trait ContactSource {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKinds {
    Simpsons,
    Empty,
    Json,
    Csv,
}

impl SourceKinds {
    pub fn is_which(&self) -> &str {
        match self {
            SourceKinds::Simpsons => "simpsons",
            SourceKinds::Empty => "empty",
            SourceKinds::Json => "json",
            SourceKinds::Csv => "csv",
        }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "simpsons" => Ok(SourceKinds::Simpsons),
            "empty" => Ok(SourceKinds::Empty),
            "json" => Ok(SourceKinds::Json),
            "csv" => Ok(SourceKinds::Csv),
            _ => Err(AppError::Validation(format!(
                "'{}' is not a recognized seed source (simpsons, empty, json, csv)",
                str
            ))),
        }
    }
}

pub fn parse_source(
    kind: SourceKinds,
    path: Option<&str>,
) -> Result<Box<dyn ContactSource>, AppError> {
    let require_path = || {
        path.map(str::to_string).ok_or_else(|| {
            AppError::Validation(format!(
                "a seed path is required for the {} source",
                kind.is_which()
            ))
        })
    };

    match kind {
        SourceKinds::Simpsons => Ok(Box::new(memory::SimpsonsSource)),
        SourceKinds::Empty => Ok(Box::new(memory::EmptySource)),
        SourceKinds::Json => Ok(Box::new(stores::JsonSource::new(&require_path()?))),
        SourceKinds::Csv => Ok(Box::new(stores::CsvSource::new(&require_path()?))),
    }
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
