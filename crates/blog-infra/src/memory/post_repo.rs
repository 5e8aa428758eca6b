//! In-memory post repository.
//!
//! Posts are kept in insertion order behind an async RwLock.
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{NewPost, Post, PostChanges};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

pub struct InMemoryPostRepository {
    store: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn find_one(&self) -> Result<Option<Post>, RepoError> {
        Ok(self.store.read().await.first().cloned())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.store.read().await.len() as u64)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let index = store
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        store.remove(index);
        Ok(())
    }

    async fn drop_all(&self) -> Result<(), RepoError> {
        self.store.write().await.clear();
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, input: NewPost) -> Result<Post, RepoError> {
        let post = Post::new(input);
        self.store.write().await.push(post.clone());
        Ok(post)
    }

    async fn insert_many(&self, inputs: Vec<NewPost>) -> Result<u64, RepoError> {
        let count = inputs.len() as u64;
        let mut store = self.store.write().await;
        store.extend(inputs.into_iter().map(Post::new));
        Ok(count)
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        post.apply(changes);
        Ok(post.clone())
    }
}
