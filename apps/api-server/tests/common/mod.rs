//! Test harness: a scoped storage handle, seeding, and synthetic data.

#![allow(dead_code)]

use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;

use api_server::AppState;
use blog_core::domain::{Author, NewPost};
use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, DatabaseHandle, SeaOrmPostRepository};
use migration::{Migrator, MigratorTrait};

/// Posts seeded before each test case.
pub const SEED_COUNT: usize = 11;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Barbara", "Edsger", "Donald", "Margaret", "Ken", "Dennis", "Frances",
];
const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Liskov", "Dijkstra", "Knuth", "Hamilton", "Thompson",
    "Ritchie", "Allen",
];
const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "borrow", "lifetime", "trait", "crate", "async",
    "future", "pin", "slice", "iterator", "closure", "macro", "module", "unsafe", "vector",
];

/// One in-memory SQLite database per test, migrated and owned by the test.
pub struct TestApp {
    pub posts: Arc<dyn PostRepository>,
    db: DatabaseHandle,
}

impl TestApp {
    /// Acquire a fresh, empty store.
    pub async fn start() -> Self {
        // A single pooled connection keeps the in-memory database alive
        let config = DatabaseConfig {
            max_connections: 1,
            min_connections: 1,
            ..DatabaseConfig::new("sqlite::memory:")
        };
        let db = DatabaseHandle::connect(&config)
            .await
            .expect("connect to in-memory sqlite");
        Migrator::up(db.conn(), None)
            .await
            .expect("apply migrations");

        let posts = Arc::new(SeaOrmPostRepository::new(db.conn().clone()));
        Self { posts, db }
    }

    /// Acquire a store and seed it with [`SEED_COUNT`] posts.
    pub async fn seeded() -> Self {
        let app = Self::start().await;
        app.seed(SEED_COUNT).await;
        app
    }

    pub async fn seed(&self, n: usize) -> u64 {
        let inputs = (0..n).map(|_| generate_post_data()).collect();
        self.posts.insert_many(inputs).await.expect("seed posts")
    }

    pub fn state(&self) -> AppState {
        AppState::new(self.posts.clone())
    }

    /// Wipe all posts and release the handle.
    pub async fn teardown(self) {
        self.posts.drop_all().await.expect("drop posts");
        self.db.close().await.expect("close database");
    }
}

fn words(rng: &mut impl Rng, count: usize) -> String {
    (0..count)
        .map(|_| *WORDS.choose(rng).expect("word list is not empty"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Random post input.
pub fn generate_post_data() -> NewPost {
    let mut rng = rand::thread_rng();
    let title_len = rng.gen_range(2..6);
    let content_len = rng.gen_range(20..60);

    NewPost {
        title: words(&mut rng, title_len),
        author: Author::new(
            *FIRST_NAMES.choose(&mut rng).expect("names are not empty"),
            *LAST_NAMES.choose(&mut rng).expect("names are not empty"),
        ),
        content: words(&mut rng, content_len),
    }
}

/// Random post input as a create request body.
pub fn generate_post_body() -> (NewPost, serde_json::Value) {
    let input = generate_post_data();
    let body = serde_json::json!({
        "title": input.title,
        "author": {
            "firstName": input.author.first_name,
            "lastName": input.author.last_name,
        },
        "content": input.content,
    });
    (input, body)
}
