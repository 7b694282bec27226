use std::path::PathBuf;

pub const DEFAULT_SITE_TITLE: &str = "WordPress to Next.js Migration";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to determine {0} from environment variables")]
    Missing(&'static str),

    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Clone, Debug)]
pub struct MirrorConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    // static files served for any path the router doesn't know
    pub frontend_path: Option<PathBuf>,
    // when set, the home page views fetch from this origin instead of in-process
    pub api_base_url: Option<String>,
    pub site_title: String,
    pub check_integrity: bool,
}

impl MirrorConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // split out from `from_env` so tests don't have to touch the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|val| !val.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = lookup("MAX_CONNECTIONS")
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(15);

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(val) => val.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                expected: "a valid u16",
                value: val.clone(),
            })?,
            None => 3000,
        };

        let frontend_path = lookup("FRONTEND_DIST_PATH")
            .filter(|val| !val.is_empty())
            .map(PathBuf::from);

        let api_base_url = lookup("CONTENT_API_URL")
            .filter(|val| !val.is_empty())
            .map(|val| val.trim_end_matches('/').to_string());

        let site_title = lookup("SITE_TITLE").unwrap_or_else(|| DEFAULT_SITE_TITLE.to_string());

        let check_integrity = lookup("CHECK_INTEGRITY")
            .map(|val| val != "false")
            .unwrap_or(true);

        Ok(Self {
            database_url,
            max_connections,
            host,
            port,
            frontend_path,
            api_base_url,
            site_title,
            check_integrity,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
