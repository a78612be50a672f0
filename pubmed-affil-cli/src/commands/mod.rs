pub mod find;

use anyhow::{Context, Result};
use pubmed_affil::{ClientConfig, PubMedClient};

pub fn create_pubmed_client(
    api_key: Option<&str>,
    email: Option<&str>,
    tool: &str,
) -> Result<PubMedClient> {
    let mut config = ClientConfig::new().with_tool(tool);

    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }

    if let Some(email) = email {
        config = config.with_email(email);
    }

    PubMedClient::with_config(config).context("Failed to create HTTP client")
}

/// Show only the first four characters of a credential
pub fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 4 {
        "*".repeat(secret.chars().count())
    } else {
        format!("{visible}***")
    }
}
