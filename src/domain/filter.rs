use super::*;
use serde::Deserialize;

/// Exact-match constraints on contact fields.
///
/// Absent fields impose no constraint; present fields are combined with AND.
/// Doubles as the query string of `GET /contacts`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactFilter {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub phone: Option<String>,
}

impl ContactFilter {
    pub fn new(name: Option<String>, surname: Option<String>, phone: Option<String>) -> Self {
        ContactFilter {
            name,
            surname,
            phone,
        }
    }

    pub fn by_name(name: &str) -> Self {
        ContactFilter {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn by_surname(surname: &str) -> Self {
        ContactFilter {
            surname: Some(surname.to_string()),
            ..Default::default()
        }
    }

    pub fn by_phone(phone: &str) -> Self {
        ContactFilter {
            phone: Some(phone.to_string()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.surname.is_none() && self.phone.is_none()
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        field_matches(&self.name, &contact.name)
            && field_matches(&self.surname, &contact.surname)
            && field_matches(&self.phone, &contact.phone)
    }

    /// Present constraints as `(field, value)` pairs, in field order.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", &self.name),
            ("surname", &self.surname),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}

// A null field never satisfies a present constraint.
fn field_matches(wanted: &Option<String>, actual: &Option<String>) -> bool {
    match wanted {
        Some(wanted) => actual.as_deref() == Some(wanted.as_str()),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_matches_everything() {
        let filter = ContactFilter::default();

        assert!(filter.is_empty());
        assert!(filter.matches(&Contact::new("Bart", "Simpson", "555-2503")));
        assert!(filter.matches(&Contact::default()));
    }

    #[test]
    fn match_is_exact_and_case_sensitive() {
        let bart = Contact::new("Bart", "Simpson", "555-2503");

        assert!(ContactFilter::by_name("Bart").matches(&bart));
        assert!(!ContactFilter::by_name("bart").matches(&bart));
        assert!(!ContactFilter::by_name("Bar").matches(&bart));
        assert!(!ContactFilter::by_name("Bart ").matches(&bart));
    }

    #[test]
    fn present_fields_are_combined() {
        let bart = Contact::new("Bart", "Simpson", "555-2503");
        let filter = ContactFilter::new(
            Some("Bart".to_string()),
            Some("Simpson".to_string()),
            Some("555-2504".to_string()),
        );

        assert!(!filter.is_empty());
        assert!(!filter.matches(&bart));
        assert!(ContactFilter::new(Some("Bart".to_string()), None, Some("555-2503".to_string()))
            .matches(&bart));
    }

    #[test]
    fn null_field_never_matches_present_filter() {
        let nameless = Contact {
            surname: Some("Simpson".to_string()),
            ..Default::default()
        };

        assert!(!ContactFilter::by_name("").matches(&nameless));
        assert!(ContactFilter::by_surname("Simpson").matches(&nameless));
    }

    #[test]
    fn query_pairs_skip_absent_fields() {
        let filter = ContactFilter::new(None, Some("Simpson".to_string()), Some("1".to_string()));

        assert_eq!(filter.query_pairs(), vec![("surname", "Simpson"), ("phone", "1")]);
        assert!(ContactFilter::default().query_pairs().is_empty());
    }
}
