//! Data models for address book entries.

pub mod contact;

pub use contact::Contact;
