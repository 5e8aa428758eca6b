//! SeaORM post repository, usable with Postgres or SQLite.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::Unchanged, EntityTrait, Set};
use uuid::Uuid;

use blog_core::domain::{NewPost, Post, PostChanges};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::sea_orm_base::{SeaOrmBaseRepository, repo_err};

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn insert(&self, input: NewPost) -> Result<Post, RepoError> {
        let post = Post::new(input);
        tracing::debug!(post_id = %post.id, "Inserting post");

        let model = post::ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(repo_err)?;

        Ok(model.into())
    }

    async fn insert_many(&self, inputs: Vec<NewPost>) -> Result<u64, RepoError> {
        if inputs.is_empty() {
            return Ok(0);
        }

        let count = inputs.len() as u64;
        let models = inputs
            .into_iter()
            .map(|input| post::ActiveModel::from(Post::new(input)));

        PostEntity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(repo_err)?;

        tracing::debug!(count, "Inserted posts");
        Ok(count)
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, RepoError> {
        if changes.is_empty() {
            let current = PostEntity::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(repo_err)?;
            return current.map(Into::into).ok_or(RepoError::NotFound);
        }

        // Only touched columns are Set; created_at stays NotSet.
        let mut active = post::ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(first_name) = changes.author_first_name {
            active.author_first_name = Set(first_name);
        }
        if let Some(last_name) = changes.author_last_name {
            active.author_last_name = Set(last_name);
        }
        if let Some(content) = changes.content {
            active.content = Set(content);
        }

        tracing::debug!(post_id = %id, "Updating post");
        let model = active.update(&self.db).await.map_err(repo_err)?;

        Ok(model.into())
    }
}
