// src/config.rs
// Loads signify-verify configuration from /etc and user config; provides defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const SYSTEM_CONFIG: &str = "/etc/signify-verify/config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Public key used when none is given on the command line.
    pub pubkey_path: Option<PathBuf>,
    /// Directory of `*.pub` files searched by key number.
    pub keyring_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            pubkey_path: None,
            keyring_dir: None,
            log_level: "warn".to_string(),
        }
    }
}

// On-disk shape; every key is optional so files can override selectively.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    pubkey_path: Option<PathBuf>,
    keyring_dir: Option<PathBuf>,
    log_level: Option<String>,
}

impl AppConfig {
    pub fn load() -> Self {
        let mut cfg = AppConfig::default();

        // 1) System config
        cfg.apply_file_if_exists(Path::new(SYSTEM_CONFIG));

        // 2) User config: $XDG_CONFIG_HOME/signify-verify/config.toml or ~/.config/...
        cfg.apply_file_if_exists(&Self::user_config_path());

        // 3) Environment overrides (highest priority)
        cfg.apply_env(|key| env::var(key).ok());

        cfg
    }

    pub fn user_config_path() -> PathBuf {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("~/.config").expand_home())
            .join("signify-verify/config.toml")
    }

    fn apply_file_if_exists(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        if let Err(e) = self.apply_file(path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to load config");
        }
    }

    pub fn apply_file(&mut self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        self.apply_str(&content)
    }

    pub fn apply_str(&mut self, content: &str) -> Result<(), Box<dyn std::error::Error>> {
        let file: ConfigFile = toml::from_str(content)?;
        if let Some(p) = file.pubkey_path { self.pubkey_path = Some(p.expand_home()); }
        if let Some(d) = file.keyring_dir { self.keyring_dir = Some(d.expand_home()); }
        if let Some(l) = file.log_level { self.log_level = l; }
        Ok(())
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("SIGNIFY_VERIFY_PUBKEY") { self.pubkey_path = Some(PathBuf::from(v).expand_home()); }
        if let Some(v) = var("SIGNIFY_VERIFY_KEYRING") { self.keyring_dir = Some(PathBuf::from(v).expand_home()); }
        if let Some(v) = var("SIGNIFY_VERIFY_LOG") { self.log_level = v; }
    }
}

// Small helper to expand leading ~ in paths
trait ExpandHome {
    fn expand_home(self) -> PathBuf;
}

impl ExpandHome for PathBuf {
    fn expand_home(self) -> PathBuf {
        let s = self.to_string_lossy().to_string();
        if let Some(rest) = s.strip_prefix("~/") {
            if let Some(home) = dirs_next::home_dir() {
                return home.join(rest);
            }
        }
        self
    }
}
