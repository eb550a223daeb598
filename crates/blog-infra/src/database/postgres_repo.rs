//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL blog post repository.
pub type PostgresBlogPostRepository = PostgresBaseRepository<BlogPostEntity>;

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn insert(&self, input: NewBlogPost) -> Result<BlogPost, RepoError> {
        let active_model: blog_post::ActiveModel = BlogPost::new(input).into();

        let model = active_model.insert(&self.db).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("Blog post already exists".to_string())
            } else {
                map_db_err(e)
            }
        })?;

        tracing::debug!(post_id = %model.id, "Inserted blog post");
        Ok(model.into())
    }

    async fn update_fields(&self, id: Uuid, patch: BlogPostPatch) -> Result<(), RepoError> {
        if patch.is_empty() {
            // Nothing to write; still report a missing record.
            return BlogPostEntity::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(map_db_err)?
                .map(|_| ())
                .ok_or(RepoError::NotFound);
        }

        let mut update = BlogPostEntity::update_many().filter(blog_post::Column::Id.eq(id));
        if let Some(author) = patch.author {
            update = update.col_expr(blog_post::Column::Author, Expr::value(author));
        }
        if let Some(title) = patch.title {
            update = update.col_expr(blog_post::Column::Title, Expr::value(title));
        }
        if let Some(content) = patch.content {
            update = update.col_expr(blog_post::Column::Content, Expr::value(content));
        }

        let result = update.exec(&self.db).await.map_err(map_db_err)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = %id, "Updated blog post");
        Ok(())
    }
}
