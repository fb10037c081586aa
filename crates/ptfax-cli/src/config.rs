use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use ptfax_export::context::CoverSheetDefaults;
use ptfax_export::styles::DocumentStyles;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PtfaxConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Recipient printed when a report leaves it blank. Flat
    /// `recipient_name`/`recipient_fax` keys before v1.
    #[serde(default)]
    pub defaults: CoverSheetDefaults,
    #[serde(default)]
    pub styles: DocumentStyles,
    /// Replacement for the built-in cover sheet template.
    #[serde(default)]
    pub template_path: Option<PathBuf>,
    pub created_at: jiff::Timestamp,
}

impl Default for PtfaxConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            defaults: CoverSheetDefaults::default(),
            styles: DocumentStyles::default(),
            template_path: None,
            created_at: jiff::Timestamp::now(),
        }
    }
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.ptfax.cli"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<PtfaxConfig> {
    load_config_from(&config_path()?)
}

/// Load the config if one exists, otherwise fall back to built-in defaults.
pub fn load_or_default() -> eyre::Result<PtfaxConfig> {
    if has_config() {
        load_config()
    } else {
        tracing::debug!("no config file, using defaults");
        Ok(PtfaxConfig::default())
    }
}

pub fn load_config_from(path: &Path) -> eyre::Result<PtfaxConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: PtfaxConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update ptfax."
        ));
    }

    // v0 → v1: move flat recipient keys under `defaults`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

        let fallback = CoverSheetDefaults::default();
        let name = obj
            .remove("recipient_name")
            .unwrap_or(serde_json::Value::String(fallback.recipient_name));
        let fax = obj
            .remove("recipient_fax")
            .unwrap_or(serde_json::Value::String(fallback.recipient_fax));
        obj.insert(
            "defaults".to_string(),
            serde_json::json!({ "recipient_name": name, "recipient_fax": fax }),
        );
        obj.entry("created_at")
            .or_insert(serde_json::Value::String(jiff::Timestamp::now().to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (nested recipient defaults)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(config: &PtfaxConfig) -> eyre::Result<PathBuf> {
    save_config_in(&config_dir()?, config)
}

/// Write `config` into `dir`, creating it if needed.
pub fn save_config_in(dir: &Path, config: &PtfaxConfig) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Set restrictive permissions on Unix before renaming
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}
