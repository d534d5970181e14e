use serde::Deserialize;

/// Bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Discord bot token
    pub discord_token: Option<String>,
    /// Command prefix
    pub prefix: String,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            discord_token: None,
            prefix: "!".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            discord_token: std::env::var("DISCORD_TOKEN").ok(),
            prefix: std::env::var("COMMAND_PREFIX").unwrap_or_else(|_| "!".to_string()),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn with_overrides(self, prefix: Option<String>, discord_token: Option<String>) -> Self {
        Self {
            prefix: prefix.unwrap_or(self.prefix),
            discord_token: discord_token.or(self.discord_token),
            log_level: self.log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_over_loaded_values() {
        let base = Config {
            discord_token: Some("env-token".to_string()),
            ..Config::default()
        };
        let config = base.with_overrides(Some("?".to_string()), Some("flag-token".to_string()));
        assert_eq!(config.prefix, "?");
        assert_eq!(config.discord_token.as_deref(), Some("flag-token"));
    }

    #[test]
    fn absent_overrides_keep_loaded_values() {
        let base = Config {
            discord_token: Some("env-token".to_string()),
            ..Config::default()
        };
        let config = base.with_overrides(None, None);
        assert_eq!(config.prefix, "!");
        assert_eq!(config.discord_token.as_deref(), Some("env-token"));
        assert_eq!(config.log_level, "info");
    }
}
