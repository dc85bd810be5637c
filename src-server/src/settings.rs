//! Server settings
//!
//! Read once at startup from the JSON file named by `FORM_A_SETTINGS`.
//! Every field has a default, so a partial file (or no file) is fine.
//! `PORT` overrides the port from the file.

use anyhow::{Context, Result};
use form_renderer::{FieldPolicy, FormConfig};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "FORM_A_SETTINGS";

/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "PORT";

/// Which layout preset requests are rendered with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutPreset {
    #[default]
    Standard,
    FullWidthDispute,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to listen on
    pub bind_address: String,
    pub port: u16,
    pub layout: LayoutPreset,
    /// Text for missing or blank fields; empty cells when unset
    pub placeholder: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8000,
            layout: LayoutPreset::Standard,
            placeholder: None,
        }
    }
}

impl ServerSettings {
    /// Load settings from the environment
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(SETTINGS_ENV);
        let port = std::env::var(PORT_ENV).ok();
        Self::load_from(path.as_deref().map(Path::new), port.as_deref())
    }

    /// Load settings from an optional file, then apply a port override
    pub fn load_from(path: Option<&Path>, port: Option<&str>) -> Result<Self> {
        let mut settings = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("reading settings from {}", path.display()))?;
                match serde_json::from_str::<ServerSettings>(&content) {
                    Ok(settings) => settings,
                    Err(e) => {
                        tracing::warn!("Failed to parse settings file, using defaults: {}", e);
                        ServerSettings::default()
                    }
                }
            }
            None => ServerSettings::default(),
        };

        if let Some(port) = port {
            settings.port = port
                .parse()
                .with_context(|| format!("{} is not a valid port: {:?}", PORT_ENV, port))?;
        }

        Ok(settings)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind_address
            .parse()
            .with_context(|| format!("invalid bind address {:?}", self.bind_address))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn form_config(&self) -> FormConfig {
        match self.layout {
            LayoutPreset::Standard => FormConfig::standard(),
            LayoutPreset::FullWidthDispute => FormConfig::full_width_dispute(),
        }
    }

    pub fn field_policy(&self) -> FieldPolicy {
        match &self.placeholder {
            Some(text) => FieldPolicy::Placeholder(text.clone()),
            None => FieldPolicy::Empty,
        }
    }
}
