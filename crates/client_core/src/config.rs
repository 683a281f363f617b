use std::{collections::HashMap, fs};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_host: String,
    pub api_port: u16,
    pub api_base_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_host: "127.0.0.1".into(),
            api_port: 8080,
            api_base_path: "/api".into(),
        }
    }
}

impl Settings {
    /// Base URL the users collection hangs off of, e.g. `http://127.0.0.1:8080/api`.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}{}", self.api_host, self.api_port, self.api_base_path)
    }
}

/// Resolve settings once at startup: struct defaults, then an optional
/// `client.toml` next to the binary, then environment variables. Not
/// reloadable afterwards.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("client.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("api_host") {
                settings.api_host = v.clone();
            }
            if let Some(v) = file_cfg.get("api_port") {
                if let Ok(parsed) = v.parse::<u16>() {
                    settings.api_port = parsed;
                }
            }
            if let Some(v) = file_cfg.get("api_base_path") {
                settings.api_base_path = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("API_HOST") {
        settings.api_host = v;
    }
    if let Ok(v) = std::env::var("APP__API_HOST") {
        settings.api_host = v;
    }

    if let Ok(v) = std::env::var("API_PORT") {
        if let Ok(parsed) = v.parse::<u16>() {
            settings.api_port = parsed;
        }
    }
    if let Ok(v) = std::env::var("APP__API_PORT") {
        if let Ok(parsed) = v.parse::<u16>() {
            settings.api_port = parsed;
        }
    }

    if let Ok(v) = std::env::var("API_BASE_PATH") {
        settings.api_base_path = v;
    }
    if let Ok(v) = std::env::var("APP__API_BASE_PATH") {
        settings.api_base_path = v;
    }

    settings.api_base_path = normalize_base_path(&settings.api_base_path);
    settings
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
