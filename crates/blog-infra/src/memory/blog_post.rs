//! In-memory blog post repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogPostRepository};

/// Blog post store backed by a HashMap behind an async RwLock.
///
/// Each instance is isolated, which makes it the store of choice for tests.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogPostRepository {
    store: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Build a repository pre-populated with `posts`.
    pub fn with_posts(posts: impl IntoIterator<Item = BlogPost>) -> Self {
        Self {
            store: RwLock::new(posts.into_iter().map(|p| (p.id, p)).collect()),
        }
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<BlogPost> = store.values().cloned().collect();
        posts.sort_by(|a, b| a.publish_date.cmp(&b.publish_date).then(a.id.cmp(&b.id)));
        Ok(posts)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn insert(&self, input: NewBlogPost) -> Result<BlogPost, RepoError> {
        let post = BlogPost::new(input);
        let mut store = self.store.write().await;
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update_fields(&self, id: Uuid, patch: BlogPostPatch) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or(RepoError::NotFound)?;
        patch.apply_to(post);
        Ok(())
    }
}
