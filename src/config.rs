//! Command line and environment configuration

use crate::error::{AireError, Result};
use clap::Parser;
use std::time::Duration;

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// AIRE - chat with an assistant about the listings in your Supabase table
#[derive(Debug, Clone, Parser)]
#[command(name = "aire", version, about)]
pub struct Cli {
    /// Supabase project URL
    #[arg(long, env = "SUPABASE_URL")]
    pub supabase_url: String,

    /// Supabase anon key
    #[arg(long, env = "SUPABASE_KEY", hide_env_values = true)]
    pub supabase_key: String,

    /// Table holding the listings
    #[arg(long, env = "AIRE_LISTINGS_TABLE", default_value = "listings")]
    pub listings_table: String,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    /// Gemini model used for recommendations
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    /// Base URL of the Gemini API
    #[arg(long, env = "GEMINI_API_BASE", default_value = DEFAULT_GEMINI_API_BASE)]
    pub gemini_api_base: String,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, env = "AIRE_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

/// Connection settings for the Supabase REST API
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub key: String,
    pub table: String,
    pub timeout: Duration,
}

/// Connection settings for the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            api_key: String::new(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub supabase: SupabaseConfig,
    pub gemini: GeminiConfig,
}

impl Config {
    /// Build a validated configuration from parsed arguments
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let timeout = Duration::from_secs(cli.timeout_secs);
        let config = Self {
            supabase: SupabaseConfig {
                url: cli.supabase_url.trim_end_matches('/').to_string(),
                key: cli.supabase_key,
                table: cli.listings_table,
                timeout,
            },
            gemini: GeminiConfig {
                api_base: cli.gemini_api_base.trim_end_matches('/').to_string(),
                api_key: cli.gemini_api_key,
                model: cli.gemini_model,
                timeout,
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("supabase url", &self.supabase.url),
            ("supabase key", &self.supabase.key),
            ("listings table", &self.supabase.table),
            ("gemini api key", &self.gemini.api_key),
            ("gemini model", &self.gemini.model),
            ("gemini api base", &self.gemini.api_base),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(AireError::Config(format!("{} must not be empty", name)));
            }
        }
        if self.supabase.timeout.is_zero() {
            return Err(AireError::Config("timeout must be at least one second".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(gemini_key: &str, extra: &[&str]) -> std::result::Result<Cli, clap::Error> {
        let mut args = vec![
            "aire",
            "--supabase-url",
            "https://example.supabase.co/",
            "--supabase-key",
            "anon",
            "--gemini-api-key",
            gemini_key,
        ];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args)
    }

    #[test]
    fn defaults_are_applied() {
        let config = Config::from_cli(parse("secret", &[]).unwrap()).unwrap();
        assert_eq!(config.supabase.url, "https://example.supabase.co");
        assert_eq!(config.supabase.table, "listings");
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.gemini.api_base, DEFAULT_GEMINI_API_BASE);
        assert_eq!(config.gemini.timeout, Duration::from_secs(30));
    }

    #[test]
    fn empty_key_is_rejected() {
        let cli = parse(" ", &[]).unwrap();
        let err = Config::from_cli(cli).unwrap_err();
        assert!(err.to_string().contains("gemini api key"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let cli = parse("secret", &["--timeout-secs", "0"]).unwrap();
        assert!(matches!(Config::from_cli(cli), Err(AireError::Config(_))));
    }
}
