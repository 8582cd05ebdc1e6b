use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::rag::pipeline::DEFAULT_TOP_K;

/// Application configuration loaded from environment variables.
/// Nothing is required: without an API key the service runs on rule tables only.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub retrieval_top_k: usize,
    pub resume_path: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let retrieval_top_k = match lookup("RETRIEVAL_TOP_K") {
            Some(raw) => parse_top_k(&raw)?,
            None => DEFAULT_TOP_K,
        };

        Ok(Config {
            anthropic_api_key: lookup("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty()),
            retrieval_top_k,
            resume_path: lookup("RESUME_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_top_k(raw: &str) -> Result<usize> {
    let k = raw
        .trim()
        .parse::<usize>()
        .context("RETRIEVAL_TOP_K must be a positive integer")?;
    if k == 0 {
        bail!("RETRIEVAL_TOP_K must be at least 1");
    }
    Ok(k)
}
