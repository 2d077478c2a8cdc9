use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use courier_core::ExtractorSettings;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "courier";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub import: ExtractorSettings,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid import.{field} value: {value}")]
    InvalidImportSetting { field: &'static str, value: usize },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    import: Option<ImportFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ImportFile {
    window_chars: Option<usize>,
    name_words: Option<usize>,
    location_words: Option<usize>,
    lookahead_lines: Option<usize>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(import) = parsed.import {
        let settings = &mut config.import;
        if let Some(value) = import.window_chars {
            settings.window_chars = positive("window_chars", value)?;
        }
        if let Some(value) = import.name_words {
            settings.name_words = positive("name_words", value)?;
        }
        if let Some(value) = import.location_words {
            settings.location_words = positive("location_words", value)?;
        }
        if let Some(value) = import.lookahead_lines {
            settings.lookahead_lines = positive("lookahead_lines", value)?;
        }
    }

    Ok(config)
}

fn positive(field: &'static str, value: usize) -> Result<usize> {
    if value == 0 {
        return Err(ConfigError::InvalidImportSetting { field, value });
    }
    Ok(value)
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, resolve_config_path, ConfigFile, ImportFile};
    use courier_core::ExtractorSettings;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn restrict_permissions(path: &Path) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path).expect("metadata").permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms).expect("chmod");
        }
    }

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            import: Some(ImportFile {
                window_chars: Some(80),
                name_words: None,
                location_words: Some(3),
                lookahead_lines: Some(5),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(
            merged.import,
            ExtractorSettings {
                window_chars: 80,
                name_words: 4,
                location_words: 3,
                lookahead_lines: 5,
            }
        );
    }

    #[test]
    fn merge_config_without_import_keeps_defaults() {
        let merged = merge_config(ConfigFile { import: None }).expect("merge");
        assert_eq!(merged.import, ExtractorSettings::default());
    }

    #[test]
    fn merge_config_rejects_zero() {
        let parsed = ConfigFile {
            import: Some(ImportFile {
                window_chars: None,
                name_words: Some(0),
                location_words: None,
                lookahead_lines: None,
            }),
        };
        let err = merge_config(parsed).unwrap_err();
        assert_eq!(err.to_string(), "invalid import.name_words value: 0");
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
        assert!(load_at_path(&missing, false).expect("optional").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "[import]\nwindow_chars = 40\nname_words = 2\n").expect("write config");
        restrict_permissions(&path);

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.import.window_chars, 40);
        assert_eq!(config.import.name_words, 2);
        assert_eq!(config.import.location_words, 6);
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "[import]\nwindow = 40\n").expect("write config");
        restrict_permissions(&path);

        let err = load_at_path(&path, true).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }

    #[cfg(unix)]
    #[test]
    fn load_at_path_rejects_world_readable_files() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "").expect("write config");
        let mut perms = fs::metadata(&path).expect("metadata").permissions();
        perms.set_mode(0o644);
        fs::set_permissions(&path, perms).expect("chmod");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(err.to_string().contains("permissions too permissive"));
    }

    #[test]
    fn resolve_config_path_rejects_empty_custom_path() {
        assert!(resolve_config_path(Some(PathBuf::new())).is_err());
        let custom = PathBuf::from("/tmp/courier.toml");
        assert_eq!(resolve_config_path(Some(custom.clone())).expect("path"), custom);
    }
}
