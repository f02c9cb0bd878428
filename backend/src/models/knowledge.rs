use sqlx::FromRow;

/// Crawled page from the organization's website
#[derive(Debug, Clone, FromRow)]
pub struct WebsiteContent {
    pub title: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ProfileRecord {
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub experience: Option<String>,
    pub skills: Option<String>,
    pub location: Option<String>,
}

/// Hand-curated fact fed to the assistant
#[derive(Debug, Clone, FromRow)]
pub struct TrainingFact {
    pub category: Option<String>,
    pub content: Option<String>,
    pub source: Option<String>,
}
