pub mod session_repository;

pub use session_repository::{InMemorySessionRepository, SessionRepository};

#[cfg(test)]
pub use session_repository::MockSessionRepository;
