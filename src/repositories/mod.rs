mod in_memory_contact_repository;
mod json_file_contact_repository;
mod traits;

pub use in_memory_contact_repository::InMemoryContactRepository;
pub use json_file_contact_repository::JsonFileContactRepository;
pub use traits::ContactRepository;
