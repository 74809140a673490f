//! Centralized configuration (environment variables + defaults).
//!
//! Call `dotenv::dotenv()` before reading so values from a local `.env` file apply.

use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_USERS_FILE: &str = "users.json";
pub const DEFAULT_BLOGS_FILE: &str = "blogs.json";

fn var_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Interface to bind (`HOST`, default `0.0.0.0`).
pub fn host() -> String {
    var_or("HOST", DEFAULT_HOST)
}

/// Listening port (`PORT`, default 5000).
pub fn port() -> anyhow::Result<u16> {
    match std::env::var("PORT") {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got {:?}", v)),
        _ => Ok(DEFAULT_PORT),
    }
}

pub fn bind_addr() -> anyhow::Result<SocketAddr> {
    let host = host();
    let port = port()?;
    format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("HOST must be an IP address, got {:?}", host))
}

/// Users collection file (`USERS_FILE`), relative to the working directory.
pub fn users_file() -> PathBuf {
    PathBuf::from(var_or("USERS_FILE", DEFAULT_USERS_FILE))
}

/// Blogs collection file (`BLOGS_FILE`), relative to the working directory.
pub fn blogs_file() -> PathBuf {
    PathBuf::from(var_or("BLOGS_FILE", DEFAULT_BLOGS_FILE))
}
