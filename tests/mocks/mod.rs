mod mock_contact_repository;
mod recording_dialer;

pub use mock_contact_repository::MockContactRepository;
pub use recording_dialer::RecordingDialer;
