use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

/// Runtime configuration, merged from built-in defaults and
/// `CITADEL_`-prefixed environment variables (`.env` is loaded by `main`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub loglevel: String,
    /// Directory uploaded photos are written to; served under /uploaded_photos.
    pub upload_dir: PathBuf,
    /// Directory of bundled assets; served under /static.
    pub static_dir: PathBuf,
    /// Rows per listing page.
    pub page_size: i64,
    /// Key material for the private session cookie. Must be at least 64
    /// bytes when set; a random key is generated per process otherwise.
    pub cookie_secret: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:citadel.sqlite".to_string(),
            bind_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            upload_dir: PathBuf::from("uploaded_photos"),
            static_dir: PathBuf::from("static"),
            page_size: 10,
            cookie_secret: None,
        }
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Figment::from(Serialized::defaults(Config::default()))
        .merge(Env::prefixed("CITADEL_"))
        .extract()
        .expect("invalid CITADEL_* configuration")
});
