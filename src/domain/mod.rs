//! Domain value objects and types.
//!
//! Validation happens at construction time so that an invalid phone number
//! never reaches the dial handler.

pub mod errors;
pub mod phone;

pub use errors::ValidationError;
pub use phone::PhoneNumber;
