//! Configuration management for the Velvet Pour backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with VP_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Public site details used in redirects and emails
    pub site: SiteConfig,

    /// Outbound mail relay configuration
    pub smtp: SmtpConfig,

    /// Payment provider configuration
    pub stripe: StripeConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Base URL for redirect targets and email links (no trailing slash)
    pub base_url: String,

    /// Business display name used in email headers
    pub business_name: String,

    /// Fixed address booking notifications are sent to
    pub contact_email: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    /// Mail relay hostname
    pub host: String,

    /// Mail relay port
    pub port: u16,

    /// Use implicit TLS (SMTPS); STARTTLS otherwise
    pub secure: bool,

    /// Relay username
    pub username: String,

    /// Relay password
    pub password: String,

    /// Address outbound mail is sent from
    pub from_address: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StripeConfig {
    /// Secret API key
    pub secret_key: String,

    /// Flat price charged for a custom mix, in pence
    pub custom_mix_price_pence: i64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("VP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("site.base_url", "https://velvetpour.co.uk")?
            .set_default("site.business_name", "Velvet Pour")?
            .set_default("site.contact_email", "contact@velvetpour.co.uk")?
            .set_default("smtp.port", 587)?
            .set_default("smtp.secure", false)?
            .set_default("stripe.custom_mix_price_pence", 2500)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (VP_ prefix)
            .add_source(
                Environment::with_prefix("VP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
