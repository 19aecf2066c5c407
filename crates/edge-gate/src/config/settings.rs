use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

/// Insecure fallback secret; only acceptable for local development.
pub const DEFAULT_SESSION_SECRET: &str = "dev-secret-change-me";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid bind address: {0}")]
    BindAddress(String),
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub body_limit_bytes: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub cookie_name: String,
    pub ttl_secs: i64,
    pub secure: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StaticFilesConfig {
    pub public_dir: PathBuf,
    pub asset_max_age_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                body_limit_bytes: 64 * 1024,
            },
            session: SessionConfig {
                secret: DEFAULT_SESSION_SECRET.to_string(),
                cookie_name: "hd_sess".to_string(),
                ttl_secs: 8 * 60 * 60,
                secure: false,
            },
            static_files: StaticFilesConfig {
                public_dir: PathBuf::from("public"),
                asset_max_age_secs: 7 * 24 * 60 * 60,
            },
        }
    }
}

impl Settings {
    /// Load settings: built-in defaults, then `config/settings.*`, then
    /// `APP__*` variables, then the bare `PORT` / `SESSION_SECRET` variables.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        // Platform deploy (Render) selalu lewat HTTPS, jadi cookie harus secure
        let mut defaults = Settings::default();
        defaults.session.secure = std::env::var_os("RENDER").is_some();

        let config = Config::builder()
            .add_source(Config::try_from(&defaults)?)
            .add_source(File::with_name("config/settings").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("session.secret", std::env::var("SESSION_SECRET").ok())?
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|_| SettingsError::BindAddress(self.server.host.clone()))?;
        Ok(SocketAddr::from((host, self.server.port)))
    }

    pub fn login_page(&self) -> PathBuf {
        self.static_files.public_dir.join("login.html")
    }

    pub fn app_page(&self) -> PathBuf {
        self.static_files.public_dir.join("app.html")
    }

    pub fn admin_page(&self) -> PathBuf {
        self.static_files.public_dir.join("admin.html")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.static_files.public_dir.join("assets")
    }
}

impl SessionConfig {
    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_SESSION_SECRET
    }
}
