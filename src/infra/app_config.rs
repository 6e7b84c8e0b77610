use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Overrides the per-OS default location of the SQLite file.
    pub database_path: Option<PathBuf>,
    pub login: LoginConfig,
}

/// Credential pair accepted by the fixed-pair verifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoginConfig {
    pub username: String,
    pub password: String,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}

impl AppConfig {
    /// Picks the database file: explicit override, then config, then the OS default.
    pub fn resolve_database_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.database_path.clone())
            .unwrap_or_else(crate::infra::db::Database::default_path)
    }
}

pub fn load_config() -> AppConfig {
    load_config_from(&config_path())
}

/// Missing files yield defaults; malformed files are logged and yield defaults.
pub fn load_config_from(path: &Path) -> AppConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        log::debug!("no config at {}, using defaults", path.display());
        return AppConfig::default();
    };
    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring malformed config {}: {}", path.display(), err);
            AppConfig::default()
        }
    }
}

pub fn config_path() -> PathBuf {
    app_data_dir().join("config.toml")
}

pub fn app_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("UserManager");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("UserManager");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("usermgr");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".local").join("share").join("usermgr");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".usermgr")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml"));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.login.username, "admin");
        assert_eq!(config.login.password, "admin");
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[login]\nusername = \"root\"").unwrap();

        let config = load_config_from(file.path());
        assert_eq!(config.login.username, "root");
        assert_eq!(config.login.password, "admin");
        assert!(config.database_path.is_none());
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "database_path = [not toml").unwrap();

        assert_eq!(load_config_from(file.path()), AppConfig::default());
    }

    #[test]
    fn test_resolve_database_path_precedence() {
        let config = AppConfig {
            database_path: Some(PathBuf::from("/data/from-config.db")),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_database_path(Some(PathBuf::from("/tmp/cli.db"))),
            PathBuf::from("/tmp/cli.db")
        );
        assert_eq!(
            config.resolve_database_path(None),
            PathBuf::from("/data/from-config.db")
        );
        assert!(
            AppConfig::default()
                .resolve_database_path(None)
                .ends_with("users.db")
        );
    }
}
