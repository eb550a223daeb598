//! End-to-end suite against PostgreSQL.
//!
//! Runs only when `TEST_DATABASE_URL` points at a disposable database; the
//! `blog_posts` table is emptied between scenarios.

#![cfg(feature = "postgres")]

mod common;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use api_server::config::AppConfig;
use blog_infra::DatabaseConfig;

use common::{POST_KEYS, generate_blog_data, keys_of};

const SEED_COUNT: usize = 10;

struct Harness {
    client: Client,
    base: String,
}

impl Harness {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn list(&self) -> Vec<Value> {
        self.client
            .get(self.url("/blog-posts"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    async fn seed_blog_data(&self) {
        for i in 0..SEED_COUNT {
            let res = self
                .client
                .post(self.url("/blog-posts"))
                .json(&generate_blog_data(i))
                .send()
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::CREATED);
        }
    }

    async fn tear_down_db(&self) {
        for post in self.list().await {
            let id = post["id"].as_str().unwrap();
            self.client
                .delete(self.url(&format!("/blog-posts/{id}")))
                .send()
                .await
                .unwrap();
        }
    }
}

#[actix_web::test]
async fn test_blog_api_resource_against_postgres() {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set; skipping postgres suite");
        return;
    };

    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: Some(DatabaseConfig {
            url,
            max_connections: 5,
            min_connections: 1,
        }),
    };
    let mut server = api_server::start(&config).await.unwrap();
    let harness = Harness {
        client: Client::new(),
        base: format!("http://{}", server.local_addr()),
    };
    harness.tear_down_db().await;

    // GET returns every seeded post with the right fields.
    harness.seed_blog_data().await;
    let posts = harness.list().await;
    assert_eq!(posts.len(), SEED_COUNT);
    assert!(posts.iter().all(|p| keys_of(p) == POST_KEYS));
    harness.tear_down_db().await;

    // POST creates a post that GET by id returns unchanged.
    harness.seed_blog_data().await;
    let created: Value = harness
        .client
        .post(harness.url("/blog-posts"))
        .json(&json!({
            "title": "Lorem ip some",
            "content": "foo foo foo foo",
            "author": "Emma Goldman",
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(keys_of(&created), POST_KEYS);
    let post_url = harness.url(&format!("/blog-posts/{}", created["id"].as_str().unwrap()));
    let fetched: Value = harness
        .client
        .get(&post_url)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    // PUT updates the fields sent over and nothing else.
    let res = harness
        .client
        .put(&post_url)
        .json(&json!({
            "id": created["id"],
            "author": "Fofofof Fofferson",
            "title": "Futuristic Fusion",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let updated: Value = harness
        .client
        .get(&post_url)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["author"], "Fofofof Fofferson");
    assert_eq!(updated["title"], "Futuristic Fusion");
    assert_eq!(updated["content"], created["content"]);
    assert_eq!(updated["publishDate"], created["publishDate"]);

    // DELETE removes the post.
    let res = harness.client.delete(&post_url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = harness.client.get(&post_url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(harness.list().await.len(), SEED_COUNT);
    harness.tear_down_db().await;

    server.stop().await.unwrap();
}
