//! Profile configuration for RDS sessions
//!
//! Configuration is stored in TOML with any number of named profiles:
//!
//! ```toml
//! default_profile = "prod"
//!
//! [profiles.prod]
//! region_id = "cn-hangzhou"
//! access_key_id = "${ALIYUN_AK:-LTAI-placeholder}"
//! access_key_secret = "keyring:prod-secret"
//! page_size = 50
//!
//! [profiles.prod.default_params]
//! ResourceGroupId = "rg-acfm"
//! ```

#[cfg(target_os = "macos")]
use directories::BaseDirs;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::credential::CredentialStore;
use super::error::{ConfigError, Result};
use crate::client::ClientSettings;
use crate::params::Params;

/// Environment variable overriding every profile's access key id
pub const ACCESS_KEY_ID_ENV: &str = "ALIBABA_CLOUD_ACCESS_KEY_ID";
/// Environment variable overriding every profile's access key secret
pub const ACCESS_KEY_SECRET_ENV: &str = "ALIBABA_CLOUD_ACCESS_KEY_SECRET";

const CREATE_PROFILE_HINT: &str = "Add a [profiles.<name>] table to the config file.";

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Config {
    /// Profile used when none is named explicitly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,
    /// Map of profile name -> profile configuration
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

/// One account in one region
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Profile {
    /// `RegionId` sent with every call that does not set its own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    /// Endpoint override for the transport
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Plaintext or `keyring:` reference
    #[serde(default)]
    pub access_key_id: String,
    /// Plaintext or `keyring:` reference
    #[serde(default)]
    pub access_key_secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Parameters merged into every call
    #[serde(default, skip_serializing_if = "Params::is_empty")]
    pub default_params: Params,
}

/// Resolved access key pair
#[derive(Clone, PartialEq, Eq)]
pub struct AccessKey {
    pub id: String,
    pub secret: String,
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessKey")
            .field("id", &self.id)
            .field("secret", &"***")
            .finish()
    }
}

/// Everything a transport and a session need from one profile
#[derive(Debug, Clone)]
pub struct ResolvedProfile {
    pub name: String,
    pub access_key: AccessKey,
    pub endpoint: Option<String>,
    pub settings: ClientSettings,
}

impl Profile {
    /// Resolve the access key pair (with environment and keyring support)
    pub fn resolve_access_key(&self) -> Result<AccessKey> {
        let store = CredentialStore::new();

        let id = store
            .get_credential(&self.access_key_id, Some(ACCESS_KEY_ID_ENV))
            .map_err(|e| {
                ConfigError::CredentialError(format!("Failed to resolve access key id: {}", e))
            })?;
        let secret = store
            .get_credential(&self.access_key_secret, Some(ACCESS_KEY_SECRET_ENV))
            .map_err(|e| {
                ConfigError::CredentialError(format!(
                    "Failed to resolve access key secret: {}",
                    e
                ))
            })?;

        if id.is_empty() || secret.is_empty() {
            return Err(ConfigError::CredentialError(
                "access_key_id and access_key_secret must both be set".to_string(),
            ));
        }

        Ok(AccessKey { id, secret })
    }

    /// Session settings described by this profile
    pub fn client_settings(&self) -> ClientSettings {
        let mut settings = ClientSettings::default();
        if let Some(region) = &self.region_id {
            settings = settings.with_region(region.clone());
        }
        if let Some(page_size) = self.page_size {
            settings = settings.with_page_size(page_size);
        }
        for (name, value) in &self.default_params {
            settings = settings.with_default_param(name.clone(), value.clone());
        }
        settings
    }
}

impl Config {
    /// Pick the profile name to use
    ///
    /// An explicit name wins, then `default_profile`, then the first profile
    /// in alphabetical order.
    pub fn resolve_profile(&self, explicit_profile: Option<&str>) -> Result<String> {
        if let Some(profile_name) = explicit_profile {
            return Ok(profile_name.to_string());
        }

        if let Some(ref default) = self.default_profile {
            return Ok(default.clone());
        }

        if let Some((name, _)) = self.list_profiles().first() {
            return Ok((*name).clone());
        }

        Err(ConfigError::NoProfiles {
            suggestion: CREATE_PROFILE_HINT.to_string(),
        })
    }

    /// Resolve a profile into credentials and session settings
    pub fn resolve(&self, explicit_profile: Option<&str>) -> Result<ResolvedProfile> {
        let name = self.resolve_profile(explicit_profile)?;
        let profile = self
            .profiles
            .get(&name)
            .ok_or_else(|| ConfigError::ProfileNotFound { name: name.clone() })?;

        debug!(profile = %name, region = ?profile.region_id, "Resolved profile");

        Ok(ResolvedProfile {
            access_key: profile.resolve_access_key()?,
            endpoint: profile.endpoint.clone(),
            settings: profile.client_settings(),
            name,
        })
    }

    /// Load configuration from the standard location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::LoadError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        let expanded_content = Self::expand_env_vars(&content);
        let config: Config = toml::from_str(&expanded_content)?;

        Ok(config)
    }

    /// Save configuration to the standard location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to_path(&config_path)
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::SaveError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| ConfigError::SaveError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }

    /// Set or update a profile
    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// Remove a profile by name
    pub fn remove_profile(&mut self, name: &str) -> Option<Profile> {
        if self.default_profile.as_deref() == Some(name) {
            self.default_profile = None;
        }
        self.profiles.remove(name)
    }

    /// List all profiles sorted by name
    pub fn list_profiles(&self) -> Vec<(&String, &Profile)> {
        let mut profiles: Vec<_> = self.profiles.iter().collect();
        profiles.sort_by_key(|(name, _)| *name);
        profiles
    }

    /// Get the path to the configuration file
    ///
    /// On macOS an existing `~/.config/rdsctl/` directory is preferred over
    /// `~/Library/Application Support/com.rdsctl.rdsctl/`.
    ///
    /// On Linux: ~/.config/rdsctl/config.toml
    /// On Windows: %APPDATA%\rdsctl\rdsctl\config.toml
    pub fn config_path() -> Result<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            if let Some(base_dirs) = BaseDirs::new() {
                let linux_style_path = base_dirs
                    .home_dir()
                    .join(".config")
                    .join("rdsctl")
                    .join("config.toml");

                if linux_style_path
                    .parent()
                    .map(|p| p.exists())
                    .unwrap_or(false)
                {
                    return Ok(linux_style_path);
                }
            }
        }

        let proj_dirs =
            ProjectDirs::from("com", "rdsctl", "rdsctl").ok_or(ConfigError::ConfigDirError)?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Expand `${VAR}` and `${VAR:-default}` references
    ///
    /// Unset variables without a default are left as written.
    fn expand_env_vars(content: &str) -> String {
        shellexpand::env_with_context_no_errors(content, |var| std::env::var(var).ok())
            .to_string()
    }
}
