use super::*;

/// The Simpson family, the phone book's default contents.
pub struct SimpsonsSource;

/// Starts the phone book with no contacts.
pub struct EmptySource;

impl ContactSource for SimpsonsSource {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(vec![
            Contact::new("Homer", "Simpson", "+1-877-555-2501"),
            Contact::new("Marge", "Simpson", "+1-877-555-2502"),
            Contact::new("Bart", "Simpson", "+1-877-555-2503"),
            Contact::new("Lisa", "Simpson", "+1-877-555-2504"),
        ])
    }

    fn get_medium(&self) -> &str {
        "simpsons"
    }
}

impl ContactSource for EmptySource {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(Vec::new())
    }

    fn get_medium(&self) -> &str {
        "empty"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simpsons_are_unindexed() -> Result<(), AppError> {
        let contacts = SimpsonsSource.load()?;

        assert_eq!(contacts.len(), 4);
        assert!(contacts.iter().all(|c| c.id.is_none()));
        assert!(
            contacts
                .iter()
                .all(|c| c.surname.as_deref() == Some("Simpson"))
        );
        Ok(())
    }

    #[test]
    fn empty_source_loads_nothing() -> Result<(), AppError> {
        assert!(EmptySource.load()?.is_empty());
        Ok(())
    }
}
