use crate::prelude::{println, *};

pub mod optionsets;

/// DHIS2 module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "dhis2")]
#[command(about = "DHIS2 metadata server operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Option set operations
    #[clap(subcommand)]
    Optionsets(optionsets::Commands),
}

/// DHIS2 connection settings from environment variables
#[derive(Debug, Clone)]
pub struct Dhis2Config {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl Dhis2Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: std::env::var("DHIS2_BASE_URL")
                .map_err(|_| eyre!("DHIS2_BASE_URL environment variable not set"))?,
            username: std::env::var("DHIS2_USERNAME")
                .map_err(|_| eyre!("DHIS2_USERNAME environment variable not set"))?,
            password: std::env::var("DHIS2_PASSWORD")
                .map_err(|_| eyre!("DHIS2_PASSWORD environment variable not set"))?,
        })
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }

    /// Option set metadata endpoint, with any trailing slash on the base URL
    /// normalized away.
    pub fn option_sets_url(&self) -> String {
        format!("{}/api/optionSets", self.base_url.trim_end_matches('/'))
    }
}

/// Create an authenticated HTTP client with Basic Auth headers
pub fn create_authenticated_client(config: &Dhis2Config) -> Result<reqwest::Client> {
    use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

    let auth_value = metadict_core::auth::basic_authorization(&config.username, &config.password);

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&auth_value).map_err(|e| eyre!("Invalid header value: {}", e))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    // A hung metadata call would otherwise stall the whole pipeline.
    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

/// Module entry point
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running DHIS2 module...");
    }

    match app.command {
        Commands::Optionsets(cmd) => optionsets::run(cmd, global).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_sets_url_trims_trailing_slash() {
        let config = Dhis2Config {
            base_url: "https://play.dhis2.org/demo/".to_string(),
            username: "admin".to_string(),
            password: "district".to_string(),
        };

        assert_eq!(
            config.option_sets_url(),
            "https://play.dhis2.org/demo/api/optionSets"
        );
    }

    #[test]
    fn test_with_overrides_replaces_base_url() {
        let config = Dhis2Config {
            base_url: "https://play.dhis2.org/demo".to_string(),
            username: "admin".to_string(),
            password: "district".to_string(),
        }
        .with_overrides(Some("http://localhost:8080".to_string()));

        assert_eq!(config.base_url, "http://localhost:8080");
    }
}
