use std::fs;
use std::path::Path;

use crate::error::ReadError;

pub const ENDPOINT_VAR: &str = "AI_SERVICE_ENDPOINT";
pub const KEY_VAR: &str = "AI_SERVICE_KEY";

/// Service endpoint and key, read once at startup and passed by reference to
/// whatever needs them.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub endpoint: String,
    pub key: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self, ReadError> {
        let endpoint = require_env(ENDPOINT_VAR)?;
        let key = require_env(KEY_VAR)?;
        Ok(Self { endpoint, key })
    }
}

fn require_env(name: &str) -> Result<String, ReadError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ReadError::Config(format!("{} is not set", name)))
}

/// Best-effort pre-population of the environment from a local `.env` file.
/// Variables already set in the environment win.
pub fn load_dotenv() {
    load_dotenv_from(Path::new(".env"));
}

fn load_dotenv_from(path: &Path) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        let name = name.trim();
        let value = value.trim().trim_matches('"');
        if name.is_empty() || std::env::var_os(name).is_some() {
            continue;
        }
        std::env::set_var(name, value);
    }
}
