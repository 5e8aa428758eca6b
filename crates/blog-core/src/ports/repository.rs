use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewPost, Post, PostChanges};
use crate::error::RepoError;

/// Generic repository trait defining the entity-agnostic operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID. `None` means not found.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Every stored entity. Order is stable within a single read.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Any one stored entity.
    async fn find_one(&self) -> Result<Option<T>, RepoError>;

    /// Number of stored entities.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` on a miss.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;

    /// Remove every stored entity.
    async fn drop_all(&self) -> Result<(), RepoError>;
}

/// Post repository. Owns id generation and timestamping.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Store a new post, assigning `id` and `created_at`.
    async fn insert(&self, input: NewPost) -> Result<Post, RepoError>;

    /// Bulk insert, used for seeding. Returns the number of posts stored.
    async fn insert_many(&self, inputs: Vec<NewPost>) -> Result<u64, RepoError>;

    /// Apply a partial update and return the stored result.
    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, RepoError>;
}
