use blog_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use uuid::Uuid;

use crate::database::entity::blog_post;
use crate::database::postgres_repo::PostgresBlogPostRepository;

fn repo(db: DatabaseConnection) -> Box<dyn BlogPostRepository> {
    Box::new(PostgresBlogPostRepository::new(db))
}

fn model(title: &str) -> blog_post::Model {
    blog_post::Model {
        id: Uuid::new_v4(),
        author: "Sebastian Bastidas".to_owned(),
        title: title.to_owned(),
        content: "Single-origin coffee flannel cred".to_owned(),
        publish_date: chrono::Utc::now().into(),
    }
}

fn exec_result(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let row = model("Test Post");
    let post_id = row.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row]])
        .into_connection();

    let result = repo(db).find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
}

#[tokio::test]
async fn test_find_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<blog_post::Model>::new()])
        .into_connection();

    let result = repo(db).find_by_id(Uuid::new_v4()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_list_all_maps_every_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model("First"), model("Second")]])
        .into_connection();

    let posts: Vec<BlogPost> = repo(db).list_all().await.unwrap();

    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_insert_returns_stored_row() {
    let row = model("Lorem ip some");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row.clone()]])
        .into_connection();

    let input = NewBlogPost::new(
        Some(row.author.clone()),
        Some(row.title.clone()),
        Some(row.content.clone()),
    )
    .unwrap();
    let post = repo(db).insert(input).await.unwrap();

    assert_eq!(post.id, row.id);
    assert_eq!(post.title, "Lorem ip some");
    assert_eq!(post.publish_date, row.publish_date);
}

#[tokio::test]
async fn test_update_fields() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![exec_result(1)])
        .into_connection();

    let patch = BlogPostPatch::new(Some("Fofofof Fofferson".to_string()), None, None).unwrap();
    repo(db).update_fields(Uuid::new_v4(), patch).await.unwrap();
}

#[tokio::test]
async fn test_update_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![exec_result(0)])
        .into_connection();

    let patch = BlogPostPatch::new(None, Some("Futuristic Fusion".to_string()), None).unwrap();
    let result = repo(db).update_fields(Uuid::new_v4(), patch).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_empty_patch_checks_existence() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<blog_post::Model>::new()])
        .into_connection();

    let result = repo(db)
        .update_fields(Uuid::new_v4(), BlogPostPatch::default())
        .await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![exec_result(0)])
        .into_connection();

    let result = repo(db).delete_by_id(Uuid::new_v4()).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![exec_result(1)])
        .into_connection();

    repo(db).delete_by_id(Uuid::new_v4()).await.unwrap();
}
