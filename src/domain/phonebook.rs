use super::*;

use log::{debug, info};
use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::storage::ContactSource;

const FIRST_ID: i64 = 1;

/// The authoritative, in-memory set of contacts.
///
/// Map and id counter sit behind one lock, taken for the whole of every
/// operation. Searches are linear scans over the map, which is fine for a
/// phone book but is the point where a large data set would need indexes.
pub struct PhoneBook {
    book: Mutex<Book>,
}

struct Book {
    contacts: BTreeMap<i64, Contact>,
    // Greater than every id issued or stored so far. `None` once `i64::MAX`
    // has been used.
    next_id: Option<i64>,
}

impl Book {
    fn issue_id(&mut self) -> Result<i64, AppError> {
        let id = self.next_id.ok_or(AppError::IdsExhausted)?;
        self.next_id = id.checked_add(1);
        Ok(id)
    }

    // Client-chosen ids must never be handed out again by `issue_id`.
    fn reserve_id(&mut self, id: i64) {
        if let Some(next) = self.next_id {
            self.next_id = id.checked_add(1).map(|after| next.max(after));
        }
    }
}

impl PhoneBook {
    pub fn new() -> Self {
        Self {
            book: Mutex::new(Book {
                contacts: BTreeMap::new(),
                next_id: Some(FIRST_ID),
            }),
        }
    }

    /// Builds a phone book holding every contact of `source`, each under a
    /// freshly issued id, in the order the source yields them.
    pub fn from_source(source: &dyn ContactSource) -> Result<Self, AppError> {
        let phonebook = Self::new();
        let contacts = source.load()?;
        let total = contacts.len();

        for contact in contacts {
            phonebook.insert(contact)?;
        }

        info!(
            "Seeded phone book with {} contacts from {} source",
            total,
            source.get_medium()
        );
        Ok(phonebook)
    }

    // No operation can panic half way through a write, so a poisoned lock
    // still guards a consistent book.
    fn book(&self) -> MutexGuard<'_, Book> {
        self.book.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Every contact matching `filter`, in ascending id order.
    pub fn find_all(&self, filter: &ContactFilter) -> Vec<Contact> {
        let book = self.book();

        if filter.is_empty() {
            return book.contacts.values().cloned().collect();
        }

        book.contacts
            .values()
            .filter(|&contact| filter.matches(contact))
            .cloned()
            .collect()
    }

    pub fn find_by_id(&self, id: i64) -> Option<Contact> {
        self.book().contacts.get(&id).cloned()
    }

    /// Stores `contact` under a new id. Any id already on `contact` is ignored.
    ///
    /// Fails with [`AppError::IdsExhausted`] once every id up to `i64::MAX`
    /// has been issued or taken by an upsert.
    pub fn insert(&self, contact: Contact) -> Result<Contact, AppError> {
        let mut book = self.book();

        let id = book.issue_id()?;
        let indexed = contact.with_id(id);
        book.contacts.insert(id, indexed.clone());

        debug!("Inserted contact {}", id);
        Ok(indexed)
    }

    /// Creates or fully replaces the contact under `contact.id`.
    ///
    /// Callers check the id first (see [`Contact::ensure_identity`]); a
    /// contact without id is rejected as [`AppError::IllegalContact`].
    pub fn upsert(&self, contact: Contact) -> Result<Contact, AppError> {
        let Some(id) = contact.id else {
            return Err(AppError::IllegalContact("contact has no id".to_string()));
        };

        let mut book = self.book();

        book.reserve_id(id);
        let replaced = book.contacts.insert(id, contact.clone()).is_some();

        debug!(
            "Upserted contact {} ({})",
            id,
            if replaced { "replaced" } else { "created" }
        );
        Ok(contact)
    }

    /// Removes the contact with `id`. Unknown ids are ignored.
    pub fn delete(&self, id: i64) {
        if self.book().contacts.remove(&id).is_some() {
            debug!("Deleted contact {}", id);
        }
    }

    pub fn len(&self) -> usize {
        self.book().contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.book().contacts.is_empty()
    }
}

impl Default for PhoneBook {
    fn default() -> Self {
        Self::new()
    }
}
