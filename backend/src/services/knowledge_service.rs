//! Knowledge store adapter
//!
//! Pulls crawled pages, the team profile and curated facts out of the
//! knowledge database and flattens them into one context block for the
//! system prompt. Any failure means "no context", never a failed request.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::models::{ProfileRecord, TrainingFact, WebsiteContent};
use crate::utils::truncate_chars;

pub const MAX_PAGES: i64 = 50;
pub const MAX_FACTS: i64 = 20;
pub const PAGE_CONTENT_CHARS: usize = 1000;
pub const PROFILE_EXPERIENCE_CHARS: usize = 500;
pub const FACT_CONTENT_CHARS: usize = 500;

/// Separator between context blocks
pub const BLOCK_SEPARATOR: &str = "\n\n---\n\n";

/// Source of auxiliary prompt context
#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    /// Formatted context, or `None` when the store is unreachable or empty
    async fn fetch_context(&self) -> Option<String>;
}

pub struct SqlKnowledgeSource {
    pool: SqlitePool,
}

impl SqlKnowledgeSource {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the pool described by `config` and apply pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, anyhow::Error> {
        if let Some(dir) = database_file(&config.url).as_ref().and_then(|f| f.parent())
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir)?;
        }

        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await?;

        sqlx::migrate!().run(&pool).await?;

        tracing::info!("Knowledge database ready: {}", config.url);
        Ok(Self::new(pool))
    }

    async fn load_blocks(&self) -> Result<Vec<String>, sqlx::Error> {
        let mut blocks = Vec::new();

        let pages: Vec<WebsiteContent> = sqlx::query_as(
            "SELECT title, content, url, description FROM website_contents \
             WHERE is_active = 1 ORDER BY last_crawled DESC LIMIT ?",
        )
        .bind(MAX_PAGES)
        .fetch_all(&self.pool)
        .await?;
        blocks.extend(pages.iter().map(format_page));

        let profile: Option<ProfileRecord> = sqlx::query_as(
            "SELECT full_name, headline, summary, experience, skills, location \
             FROM linkedin_profiles WHERE is_active = 1 ORDER BY last_updated DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        blocks.extend(profile.as_ref().map(format_profile));

        let facts: Vec<TrainingFact> = sqlx::query_as(
            "SELECT category, content, source FROM training_data \
             WHERE is_active = 1 ORDER BY priority DESC, created_at DESC LIMIT ?",
        )
        .bind(MAX_FACTS)
        .fetch_all(&self.pool)
        .await?;
        blocks.extend(facts.iter().map(format_fact));

        Ok(blocks)
    }
}

#[async_trait]
impl KnowledgeSource for SqlKnowledgeSource {
    async fn fetch_context(&self) -> Option<String> {
        match self.load_blocks().await {
            Ok(blocks) if blocks.is_empty() => {
                tracing::debug!("Knowledge database returned no rows");
                None
            },
            Ok(blocks) => {
                tracing::info!("Retrieved {} training data items from database", blocks.len());
                Some(blocks.join(BLOCK_SEPARATOR))
            },
            Err(e) => {
                tracing::error!("Error retrieving training data from database: {}", e);
                None
            },
        }
    }
}

/// File behind a `sqlite:` URL, `None` for in-memory databases
fn database_file(url: &str) -> Option<PathBuf> {
    let rest = url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn or_na(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => "N/A",
    }
}

pub fn format_page(page: &WebsiteContent) -> String {
    format!(
        "Page: {}\nURL: {}\n{}\n{}",
        or_empty(&page.title),
        or_empty(&page.url),
        or_empty(&page.description),
        truncate_chars(or_empty(&page.content), PAGE_CONTENT_CHARS)
    )
}

pub fn format_profile(profile: &ProfileRecord) -> String {
    let experience = match profile.experience.as_deref() {
        Some(exp) if !exp.is_empty() => truncate_chars(exp, PROFILE_EXPERIENCE_CHARS),
        _ => "N/A",
    };

    format!(
        "\nLinkedIn Profile: {}\nHeadline: {}\nLocation: {}\nSummary: {}\nKey Skills: {}\nExperience: {}\n",
        or_empty(&profile.full_name),
        or_empty(&profile.headline),
        or_empty(&profile.location),
        or_na(&profile.summary),
        or_na(&profile.skills),
        experience
    )
}

pub fn format_fact(fact: &TrainingFact) -> String {
    format!(
        "[{}] {}",
        or_empty(&fact.category),
        truncate_chars(or_empty(&fact.content), FACT_CONTENT_CHARS)
    )
}
