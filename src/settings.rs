use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

pub const ADMIN_IDS_KEY: &str = "AdminIDs";
pub const ALLOWED_ROLES_KEY: &str = "AllowedRoles";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsStatus {
    Created,
    Updated,
    UpToDate,
}

/// Typed view over the settings file. Keys the bot does not know about are
/// left alone in the file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(rename = "AdminIDs", default, deserialize_with = "deserialize_ids")]
    pub admin_ids: Vec<u64>,
    #[serde(rename = "AllowedRoles", default, deserialize_with = "deserialize_ids")]
    pub allowed_roles: Vec<u64>,
}

/// Discord snowflakes show up both as JSON numbers and as digit strings.
fn deserialize_ids<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(u64),
        Text(String),
    }

    Vec::<Id>::deserialize(deserializer)?
        .into_iter()
        .map(|id| match id {
            Id::Number(n) => Ok(n),
            Id::Text(s) => s.trim().parse::<u64>().map_err(serde::de::Error::custom),
        })
        .collect()
}

pub fn default_settings() -> Map<String, Value> {
    let mut defaults = Map::new();
    defaults.insert(ADMIN_IDS_KEY.to_string(), Value::Array(Vec::new()));
    defaults.insert(ALLOWED_ROLES_KEY.to_string(), Value::Array(Vec::new()));
    defaults
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings_path = path.as_ref();
        let contents = fs::read_to_string(settings_path)
            .context(format!("Failed to read settings from {}", settings_path.display()))?;
        serde_json::from_str(&contents)
            .context(format!("Failed to parse settings from {}", settings_path.display()))
    }
}

/// Make sure the settings file exists and carries every default key. Existing
/// values, including unknown keys, are kept as they are.
pub fn check_settings_file<P: AsRef<Path>>(path: P) -> Result<SettingsStatus> {
    let settings_path = path.as_ref();
    info!("Checking for settings file...");

    if let Some(parent) = settings_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating config folder {}...", parent.display());
            fs::create_dir_all(parent)
                .context(format!("Failed to create {}", parent.display()))?;
        }
    }

    if !settings_path.exists() {
        debug!("Creating new settings file with default values...");
        write_settings(settings_path, &default_settings())?;
        return Ok(SettingsStatus::Created);
    }

    debug!("Settings file already exists, loading...");
    let contents = fs::read_to_string(settings_path)
        .context(format!("Failed to read settings from {}", settings_path.display()))?;
    let mut current = match serde_json::from_str::<Value>(&contents)
        .context(format!("Failed to parse settings from {}", settings_path.display()))?
    {
        Value::Object(map) => map,
        _ => bail!("{} does not contain a JSON object", settings_path.display()),
    };

    let mut updated = false;
    for (key, value) in default_settings() {
        if !current.contains_key(&key) {
            current.insert(key, value);
            updated = true;
        }
    }

    if updated {
        info!("Updating settings file with missing default values...");
        write_settings(settings_path, &current)?;
        Ok(SettingsStatus::Updated)
    } else {
        info!("Settings file is up-to-date");
        Ok(SettingsStatus::UpToDate)
    }
}

fn write_settings(path: &Path, settings: &Map<String, Value>) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    settings
        .serialize(&mut serializer)
        .context("Failed to serialize settings")?;

    fs::write(path, buf).context(format!("Failed to save settings to {}", path.display()))?;
    debug!("Settings saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_file_and_folder() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config").join("settings.json");

        assert_eq!(check_settings_file(&path).unwrap(), SettingsStatus::Created);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{\n    \"AdminIDs\": [],\n    \"AllowedRoles\": []\n}");
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_backfills_missing_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"Theme": "dark", "AdminIDs": [1, 2]}"#).unwrap();

        assert_eq!(check_settings_file(&path).unwrap(), SettingsStatus::Updated);

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let map = value.as_object().unwrap();
        let keys: Vec<&str> = map.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["Theme", "AdminIDs", "AllowedRoles"]);
        assert_eq!(map["Theme"], "dark");
        assert_eq!(map["AdminIDs"], serde_json::json!([1, 2]));
        assert_eq!(map["AllowedRoles"], serde_json::json!([]));
    }

    #[test]
    fn test_second_check_is_up_to_date() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        check_settings_file(&path).unwrap();
        let first = fs::read_to_string(&path).unwrap();

        assert_eq!(check_settings_file(&path).unwrap(), SettingsStatus::UpToDate);
        assert_eq!(fs::read_to_string(&path).unwrap(), first);
    }

    #[test]
    fn test_rejects_non_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(check_settings_file(&path).is_err());
    }

    #[test]
    fn test_rejects_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(check_settings_file(&path).is_err());
    }

    #[test]
    fn test_load_accepts_numeric_and_string_ids() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"AdminIDs": [123456789012345678, "987654321098765432"], "AllowedRoles": ["42"]}"#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.admin_ids, vec![123456789012345678, 987654321098765432]);
        assert_eq!(settings.allowed_roles, vec![42]);
    }

    #[test]
    fn test_load_rejects_bad_id() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"AdminIDs": ["not-an-id"]}"#).unwrap();

        assert!(Settings::load(&path).is_err());
    }
}
