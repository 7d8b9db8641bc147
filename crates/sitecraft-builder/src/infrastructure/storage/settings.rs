//! TOML-based settings for the builder binary.
//!
//! Reads and writes [`BuilderSettings`] to the platform-appropriate file:
//! - Windows:  `%APPDATA%\SiteCraft\settings.toml`
//! - Linux:    `~/.config/sitecraft/settings.toml`
//! - macOS:    `~/Library/Application Support/SiteCraft/settings.toml`
//!
//! Example:
//!
//! ```toml
//! [general]
//! log_level = "debug"
//! default_template = "creative"
//!
//! [api]
//! base_url = "https://sites.example.com"
//! access_token = "..."
//!
//! [dns]
//! apex_a_record = "76.76.21.21"
//! cname_target = "cname.vercel-dns.com"
//! ```
//!
//! Every field has a serde default, so a missing file, a missing section, or
//! a missing key all fall back to working values.  Command-line flags
//! override whatever the file says.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sitecraft_core::{DnsTargets, TemplateId};
use thiserror::Error;

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Settings schema types ─────────────────────────────────────────────────────

/// Top-level settings stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BuilderSettings {
    #[serde(default)]
    pub general: GeneralSettings,
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub dns: DnsSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    /// `tracing` level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Template used when the owner has no stored record.
    #[serde(default)]
    pub default_template: TemplateId,
}

/// Where the site backend lives and how to authenticate against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token identifying the owner; requests go out unauthenticated
    /// without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Record values shown in DNS instructions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DnsSettings {
    #[serde(default = "default_apex_a_record")]
    pub apex_a_record: String,
    #[serde(default = "default_cname_target")]
    pub cname_target: String,
}

impl DnsSettings {
    pub fn targets(&self) -> DnsTargets {
        DnsTargets {
            apex_a_record: self.apex_a_record.clone(),
            cname_target: self.cname_target.clone(),
        }
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}
fn default_apex_a_record() -> String {
    DnsTargets::default().apex_a_record
}
fn default_cname_target() -> String {
    DnsTargets::default().cname_target
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_template: TemplateId::default(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
        }
    }
}

impl Default for DnsSettings {
    fn default() -> Self {
        Self {
            apex_a_record: default_apex_a_record(),
            cname_target: default_cname_target(),
        }
    }
}

// ── Settings repository ───────────────────────────────────────────────────────

/// Resolves the full path to the settings file.
///
/// # Errors
///
/// Returns [`SettingsError::NoPlatformConfigDir`] when the platform config
/// base directory cannot be determined from the environment.
pub fn settings_file_path() -> Result<PathBuf, SettingsError> {
    platform_config_dir()
        .map(|dir| dir.join("settings.toml"))
        .ok_or(SettingsError::NoPlatformConfigDir)
}

/// Loads settings from the platform path, or defaults if the file is absent.
///
/// # Errors
///
/// See [`load_settings_from`].
pub fn load_settings() -> Result<BuilderSettings, SettingsError> {
    load_settings_from(&settings_file_path()?)
}

/// Loads settings from `path`, returning defaults if the file does not exist.
///
/// # Errors
///
/// Returns [`SettingsError::Io`] for file-system errors other than "not
/// found", and [`SettingsError::Parse`] if the TOML is malformed.
pub fn load_settings_from(path: &Path) -> Result<BuilderSettings, SettingsError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BuilderSettings::default()),
        Err(source) => Err(SettingsError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Writes `settings` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`SettingsError::Io`] for file-system failures or
/// [`SettingsError::Serialize`] if serialization fails.
pub fn save_settings_to(path: &Path, settings: &BuilderSettings) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| SettingsError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(settings)?;
    std::fs::write(path, content).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("SiteCraft"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("sitecraft"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("SiteCraft")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
