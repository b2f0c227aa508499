use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Environment property (ESV) holding the tenant fully-qualified domain
    /// name of the IDM email endpoint.
    pub tenant_fqdn_property: String,
    /// Session-state field the access token was stored under by an earlier
    /// node in the journey.
    pub access_token_field: String,
    /// Sender address put on every outgoing email.
    pub sender: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tenant_fqdn_property: "esv.tenant.fqdn".to_string(),
            access_token_field: "idmAccessToken".to_string(),
            sender: "saas@forgerock.com".to_string(),
        }
    }
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    // Retrieve env variable
    let config_path = env::var("HOTP_NODE_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    // Try env path
    if Path::new(&config_path).exists() {
        let contents = fs::read_to_string(&config_path)?;
        return serde_yaml::from_str(&contents).map_err(Into::into);
    }

    // Fallback to config.yaml
    if Path::new("config.yaml").exists() {
        tracing::warn!(
            "Config file '{}' not found, falling back to 'config.yaml'",
            config_path
        );
        let contents = fs::read_to_string("config.yaml")?;
        return serde_yaml::from_str(&contents).map_err(Into::into);
    }

    // Fallback to config.example.yaml
    if Path::new("config.example.yaml").exists() {
        tracing::warn!(
            "Config file '{}' and 'config.yaml' not found, falling back to 'config.example.yaml'",
            config_path
        );
        let contents = fs::read_to_string("config.example.yaml")?;
        return serde_yaml::from_str(&contents).map_err(Into::into);
    }

    // Every setting has a fixed default, so a missing file is not an error
    tracing::info!("No config file found, using the built-in node defaults");
    Ok(Config::default())
}
