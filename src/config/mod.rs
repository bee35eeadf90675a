use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_type")]
    pub default_type: String,
    #[serde(default)]
    pub default_location: String,
    /// Width (in characters) of the ASCII day timeline.
    #[serde(default = "default_timeline_columns")]
    pub timeline_columns: usize,
    /// Height (in rows) of the ASCII day timeline; one row per slice of the day.
    #[serde(default = "default_timeline_rows")]
    pub timeline_rows: usize,
}

fn default_type() -> String {
    "work".to_string()
}
fn default_timeline_columns() -> usize {
    72
}
fn default_timeline_rows() -> usize {
    48
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_type: default_type(),
            default_location: String::new(),
            timeline_columns: default_timeline_columns(),
            timeline_rows: default_timeline_rows(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworklog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworklog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Initialize configuration and database files.
    /// Returns the database path written into the configuration.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Self::with_database(db_path.clone());
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.default_type, "work");
        assert_eq!(cfg.timeline_columns, 72);
        assert_eq!(cfg.timeline_rows, 48);
        assert!(cfg.default_location.is_empty());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = env::temp_dir().join("rworklog_missing_config_test.conf");
        fs::remove_file(&path).ok();
        let cfg = Config::load_from(&path).unwrap();
        assert!(cfg.database.ends_with("rworklog.sqlite"));
    }
}
