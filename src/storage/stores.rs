use super::*;

use csv::{Reader, Writer};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Read;
use std::path::PathBuf;

pub struct JsonSource {
    pub medium: String,
    pub path: String,
}

impl JsonSource {
    pub fn new(path: &str) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.to_string(),
        }
    }
}

pub struct CsvSource {
    pub medium: String,
    pub src: String,
}

impl CsvSource {
    pub fn new(src: &str) -> Self {
        Self {
            medium: "csv".to_string(),
            src: src.to_string(),
        }
    }
}

impl ContactSource for JsonSource {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(Path::new(&self.path))? {
            return Err(AppError::NotFound(format!("JSON file {}", self.path)));
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        let value: Value = serde_json::from_str(&data)?;

        if value.is_array() {
            Ok(serde_json::from_value(value)?)
        } else if let Value::Object(keyed) = value {
            // Contacts keyed by id: loaded in numeric key order, ids are reissued.
            let mut entries: Vec<(String, Value)> = keyed.into_iter().collect();
            entries.sort_by_cached_key(|(key, _)| key.parse::<i64>().map_err(|_| key.clone()));

            entries
                .into_iter()
                .map(|(_, contact)| serde_json::from_value(contact).map_err(AppError::from))
                .collect()
        } else {
            Err(AppError::Validation(
                "Invalid JSON structure: expected object or array".to_string(),
            ))
        }
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

impl ContactSource for CsvSource {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let file_path: PathBuf = PathBuf::from(&self.src);

        if !file_path.exists() {
            return Err(AppError::NotFound(format!("CSV file {}", self.src)));
        }

        if file_path.extension().is_some_and(|ext| ext != "csv") {
            return Err(AppError::Validation("File not .csv".to_string()));
        }

        let mut reader = Reader::from_path(&file_path)?;

        let mut contacts = Vec::new();
        for result in reader.deserialize() {
            let record: Contact = result?;
            contacts.push(record);
        }

        Ok(contacts)
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

/// Writes `contacts` to a `.csv` file, or to `exported.csv` inside `des` when
/// it is a directory. Returns the written path and the number of rows.
pub fn export_contacts_to_csv(contacts: &[Contact], des: &str) -> Result<(PathBuf, u64), AppError> {
    let mut file_path = PathBuf::from(des);

    if file_path.is_dir() {
        file_path = file_path.join("exported.csv");
    } else if file_path.extension().is_none_or(|ext| ext != "csv") {
        return Err(AppError::Validation(
            "Export file must be a .csv file".to_string(),
        ));
    }

    if let Some(path) = file_path.to_str() {
        create_file_parent(path)?;
    }

    let mut writer = Writer::from_path(&file_path)?;

    let mut counter: u64 = 0;
    for contact in contacts {
        writer.serialize(contact)?;
        counter += 1;
    }

    writer.flush()?;

    Ok((file_path, counter))
}
