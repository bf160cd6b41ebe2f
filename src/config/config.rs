use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::CONFIG_FILE;

/// Persisted defaults for the repository to target when neither the
/// command line nor the local checkout names one. Credentials are
/// deliberately not part of the config; they are asked for per post.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub default_owner: Option<String>,
    pub default_repo: Option<String>,
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Config::default(),
    }
}

fn load_config_from(path: &Path) -> Config {
    if path.exists() {
        match fs::read_to_string(path) {
            Ok(config_str) => serde_json::from_str(&config_str).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let path = config_path().ok_or("could not find home directory")?;
    save_config_to(config, &path)
}

fn save_config_to(config: &Config, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

/// Default owner/repo pair, environment variables first, then the
/// config file. Either side may be absent.
pub fn default_coordinates() -> (Option<String>, Option<String>) {
    let config = load_config();
    let owner = env::var("GITHUB_TOOLS_OWNER")
        .ok()
        .or(config.default_owner);
    let repo = env::var("GITHUB_TOOLS_REPO").ok().or(config.default_repo);
    (owner, repo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            default_owner: Some("rust-lang".to_string()),
            default_repo: Some("cargo".to_string()),
        };
        save_config_to(&config, &path).unwrap();

        let loaded = load_config_from(&path);
        assert_eq!(loaded.default_owner.as_deref(), Some("rust-lang"));
        assert_eq!(loaded.default_repo.as_deref(), Some("cargo"));
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config_from(&dir.path().join("absent.json"));
        assert!(loaded.default_owner.is_none());
        assert!(loaded.default_repo.is_none());
    }

    #[test]
    fn test_garbage_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        let loaded = load_config_from(&path);
        assert!(loaded.default_owner.is_none());
    }
}
