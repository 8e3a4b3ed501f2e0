use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// JSON file holding the listings; the bundled dataset is used when unset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Recommendations returned when a request gives no limit
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,

    /// Listings per page when a request gives no page size
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Upper bound accepted for a requested page size
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            recommendation_limit: default_recommendation_limit(),
            page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_recommendation_limit() -> usize {
    3
}

fn default_page_size() -> usize {
    9
}

fn default_max_page_size() -> usize {
    50
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.page_size == 0 || self.max_page_size == 0 {
            anyhow::bail!("PAGE_SIZE and MAX_PAGE_SIZE must be positive");
        }
        if self.page_size > self.max_page_size {
            anyhow::bail!(
                "PAGE_SIZE ({}) exceeds MAX_PAGE_SIZE ({})",
                self.page_size,
                self.max_page_size
            );
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_env() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.recommendation_limit, 3);
        assert_eq!(config.page_size, 9);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_overrides_from_env() {
        let vars = vec![
            ("CATALOG_PATH".to_string(), "/srv/listings.json".to_string()),
            ("RECOMMENDATION_LIMIT".to_string(), "5".to_string()),
            ("PORT".to_string(), "8080".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/listings.json")));
        assert_eq!(config.recommendation_limit, 5);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_rejects_page_size_above_max() {
        let config = Config {
            page_size: 60,
            ..Config::default()
        };
        assert!(config.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }
}
