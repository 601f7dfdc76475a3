use crate::prelude::{AppError, Contact, ContactFilter};
use reqwest::{StatusCode, blocking};
use url::Url;

/// Blocking client for a running phone book server.
///
/// Must not be called from inside an async runtime; reqwest's blocking client
/// drives its own.
pub struct PhoneBookClient {
    base_url: Url,
    http: blocking::Client,
}

impl PhoneBookClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let mut base_url = Url::parse(base_url)?;

        // Keep any path prefix when joining relative segments.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            http: blocking::Client::new(),
        })
    }

    fn contacts_url(&self) -> Result<Url, AppError> {
        Ok(self.base_url.join("contacts")?)
    }

    fn contact_url(&self, id: i64) -> Result<Url, AppError> {
        Ok(self.base_url.join(&format!("contacts/{}", id))?)
    }

    pub fn find_all(&self, filter: &ContactFilter) -> Result<Vec<Contact>, AppError> {
        let mut url = self.contacts_url()?;
        let pairs = filter.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        let res = self.http.get(url).send()?.error_for_status()?;
        Ok(res.json()?)
    }

    pub fn find_by_id(&self, id: i64) -> Result<Contact, AppError> {
        let res = self.http.get(self.contact_url(id)?).send()?;

        if res.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Contact '{}'", id)));
        }

        Ok(res.error_for_status()?.json()?)
    }

    pub fn insert(&self, contact: &Contact) -> Result<Contact, AppError> {
        let res = self
            .http
            .post(self.contacts_url()?)
            .json(contact)
            .send()?
            .error_for_status()?;
        Ok(res.json()?)
    }

    pub fn upsert(&self, id: i64, contact: &Contact) -> Result<Contact, AppError> {
        let res = self.http.put(self.contact_url(id)?).json(contact).send()?;

        if res.status() == StatusCode::BAD_REQUEST {
            return Err(AppError::IllegalContact(format!(
                "server rejected contact for id {}",
                id
            )));
        }

        Ok(res.error_for_status()?.json()?)
    }

    pub fn delete(&self, id: i64) -> Result<(), AppError> {
        self.http
            .delete(self.contact_url(id)?)
            .send()?
            .error_for_status()?;
        Ok(())
    }
}
