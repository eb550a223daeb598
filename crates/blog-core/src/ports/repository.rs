use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::error::RepoError;

/// Generic repository trait defining the read and delete operations shared by entities.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Return every stored entity.
    async fn list_all(&self) -> Result<Vec<T>, RepoError>;

    /// Delete an entity by its ID. Returns `RepoError::NotFound` if nothing was removed.
    async fn delete_by_id(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog post repository.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, Uuid> {
    /// Persist a new post. The store-side record gets a fresh ID and publish date.
    async fn insert(&self, input: NewBlogPost) -> Result<BlogPost, RepoError>;

    /// Apply the supplied fields of `patch` to the post with `id`.
    async fn update_fields(&self, id: Uuid, patch: BlogPostPatch) -> Result<(), RepoError>;
}
