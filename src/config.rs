use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Missing key is tolerated at startup; provider calls fail with 500.
    pub api_key: Option<String>,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub provider: ProviderConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(30),
        };
        let provider = ProviderConfig {
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            base_url: std::env::var("PROVIDER_BASE_URL")
                .unwrap_or_else(|_| "https://api.metisai.ir/api/v1".into()),
        };
        Ok(Self {
            database_url,
            jwt,
            provider,
        })
    }
}
