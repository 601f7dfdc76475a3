use super::*;
use serde::{Deserialize, Serialize};

/// A phone book entry.
///
/// The same shape is used for payloads that carry no identity yet (`id` unset)
/// and for records held by the [`PhoneBook`](super::PhoneBook), which always
/// have `id` set. No field other than `id` is unique: two contacts may share a
/// name, surname and phone.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub id: Option<i64>,

    pub name: Option<String>,
    pub surname: Option<String>,
    pub phone: Option<String>,
}

impl Contact {
    pub fn new(name: &str, surname: &str, phone: &str) -> Self {
        Contact {
            id: None,
            name: Some(name.to_string()),
            surname: Some(surname.to_string()),
            phone: Some(phone.to_string()),
        }
    }

    pub fn with_id(self, id: i64) -> Self {
        Contact {
            id: Some(id),
            ..self
        }
    }

    /// Checks that a contact addressed at `path_id` carries that same id.
    ///
    /// Must hold before the contact is handed to
    /// [`PhoneBook::upsert`](super::PhoneBook::upsert).
    pub fn ensure_identity(&self, path_id: i64) -> Result<i64, AppError> {
        match self.id {
            Some(id) if id == path_id => Ok(id),
            Some(id) => Err(AppError::IllegalContact(format!(
                "contact id {} does not match the URI id {}",
                id, path_id
            ))),
            None => Err(AppError::IllegalContact(format!(
                "contact has no id, expected {}",
                path_id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_matches_path() -> Result<(), AppError> {
        let contact = Contact::new("Homer", "Simpson", "555-2501").with_id(1);

        assert_eq!(contact.ensure_identity(1)?, 1);
        Ok(())
    }

    #[test]
    fn identity_mismatch_is_illegal() {
        let contact = Contact::new("Homer", "Simpson", "555-2501").with_id(2);

        assert!(matches!(
            contact.ensure_identity(1),
            Err(AppError::IllegalContact(_))
        ));
    }

    #[test]
    fn missing_identity_is_illegal() {
        let contact = Contact::new("Homer", "Simpson", "555-2501");

        assert!(matches!(
            contact.ensure_identity(1),
            Err(AppError::IllegalContact(_))
        ));
    }

    #[test]
    fn deserializes_payload_without_id() -> Result<(), AppError> {
        let contact: Contact = serde_json::from_str(r#"{"name":"Bart","surname":"Simpson"}"#)?;

        assert_eq!(contact.id, None);
        assert_eq!(contact.name.as_deref(), Some("Bart"));
        assert_eq!(contact.phone, None);
        Ok(())
    }

    #[test]
    fn serializes_absent_fields_as_null() -> Result<(), AppError> {
        let contact = Contact {
            id: Some(3),
            name: Some("Lisa".to_string()),
            surname: None,
            phone: None,
        };

        let value = serde_json::to_value(&contact)?;
        assert_eq!(
            value,
            serde_json::json!({"id": 3, "name": "Lisa", "surname": null, "phone": null})
        );
        Ok(())
    }
}
