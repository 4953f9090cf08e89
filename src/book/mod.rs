//! The address book collection and its paginated view.
//!
//! `AddressBook` owns the records keyed by name; `Pages` walks them in
//! fixed-size groups without copying.

pub mod address_book;
pub mod pages;

pub use address_book::{AddressBook, RecordMap};
pub use pages::Pages;
