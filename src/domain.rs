pub mod contact;
pub mod filter;
pub mod phonebook;

pub use contact::Contact;
pub use filter::ContactFilter;
pub use phonebook::PhoneBook;

use crate::errors::AppError;
