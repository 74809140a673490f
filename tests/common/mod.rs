//! Shared harness: serves the real router on an ephemeral port with collection files in a
//! temporary directory.

use flatfile_blog_api::transport;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub users_file: PathBuf,
    pub blogs_file: PathBuf,
    // Dropping the directory removes the collection files.
    _dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn read_json(&self, path: &Path) -> serde_json::Value {
        let raw = std::fs::read_to_string(path).expect("collection file should exist");
        serde_json::from_str(&raw).expect("collection file should hold valid JSON")
    }
}

pub async fn spawn_app() -> Result<TestApp, Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let users_file = dir.path().join("users.json");
    let blogs_file = dir.path().join("blogs.json");

    let state = transport::http::AppState::new(users_file.clone(), blogs_file.clone());
    let router = transport::http::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    Ok(TestApp {
        base_url: format!("http://{}", addr),
        client,
        users_file,
        blogs_file,
        _dir: dir,
    })
}
