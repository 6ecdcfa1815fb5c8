/// Application configuration module
use std::env;
use std::path::PathBuf;

const DEFAULT_EPG_API_URL: &str =
    "https://tm.tapi.videoready.tv/portal-search/pub/api/v1/channels/schedule";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub epg_api_url: String,
    pub page_limit: u64,
    pub window_days: u32,
    pub refresh_interval_seconds: u64,
    pub snapshot_path: PathBuf,
    pub refresh_on_download: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let epg_api_url =
            env::var("EPG_API_URL").unwrap_or_else(|_| DEFAULT_EPG_API_URL.to_string());

        let snapshot_path =
            PathBuf::from(env::var("EPG_FILE").unwrap_or_else(|_| "epg.json".to_string()));

        Ok(Self {
            port: env_u64("PORT", 8000) as u16,
            epg_api_url,
            page_limit: env_u64("EPG_PAGE_LIMIT", 20),
            window_days: env_u64("EPG_WINDOW_DAYS", 3) as u32,
            refresh_interval_seconds: env_u64("EPG_REFRESH_SECONDS", 172_800), // 2 days
            snapshot_path,
            refresh_on_download: env_bool("EPG_REFRESH_ON_DOWNLOAD", false),
        })
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn env_bool(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .map(|s| matches!(s.trim(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
