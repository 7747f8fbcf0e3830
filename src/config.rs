use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Bucket holding the precomputed catalog datasets
    pub s3_bucket_name: String,

    /// Optional endpoint override for S3-compatible blob stores
    #[serde(default)]
    pub s3_endpoint_url: Option<String>,

    /// Object key for the per-user offline recommendations dataset
    #[serde(default = "default_key_recommendations")]
    pub key_recommendations: String,

    /// Object key for the global popularity dataset
    #[serde(default = "default_key_top_popular")]
    pub key_top_popular: String,

    /// Object key for the track similarity dataset
    #[serde(default = "default_key_similar")]
    pub key_similar: String,

    /// Object key for the track metadata dataset
    #[serde(default = "default_key_items")]
    pub key_items: String,

    /// Cap on stored play events per user
    #[serde(default = "default_max_events_per_user")]
    pub max_events_per_user: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_key_recommendations() -> String {
    "recommendations.json".to_string()
}

fn default_key_top_popular() -> String {
    "top_popular.json".to_string()
}

fn default_key_similar() -> String {
    "similar.json".to_string()
}

fn default_key_items() -> String {
    "items.json".to_string()
}

fn default_max_events_per_user() -> usize {
    20
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
