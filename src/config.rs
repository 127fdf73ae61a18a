use std::env;

const DEFAULT_MAX_SYLLABUS_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub max_syllabus_bytes: usize,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            max_syllabus_bytes: env::var("MAX_SYLLABUS_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(DEFAULT_MAX_SYLLABUS_BYTES),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3001,
            max_syllabus_bytes: 4096,
            cors_allowed_origin: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.web_server_host.is_empty());
        assert!(config.max_syllabus_bytes > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.web_server_host, "127.0.0.1");
        assert_eq!(config.web_server_port, 3001);
        assert_eq!(config.max_syllabus_bytes, 4096);
        assert!(config.cors_allowed_origin.is_none());
    }
}
