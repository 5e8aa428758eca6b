//! In-memory repository - used when no database is configured.

mod post_repo;

pub use post_repo::InMemoryPostRepository;
