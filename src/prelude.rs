pub use crate::cli::{command, run_app};
pub use crate::client::PhoneBookClient;
pub use crate::domain::{
    contact::{self, Contact},
    filter::ContactFilter,
    phonebook::PhoneBook,
};
pub use crate::errors::AppError;
pub use crate::server;
pub use crate::storage::{self, ContactSource, SourceKinds, parse_source};
