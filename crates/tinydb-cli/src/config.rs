use std::path::{Path, PathBuf};

use serde::Deserialize;
use tinydb_core::TableKind;

#[derive(Debug, Default, Deserialize)]
pub struct TinyDbConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub tables: TablesSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct StorageSection {
    pub data_dir: Option<String>,
}

/// File names of the persisted tables, relative to the data directory.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TablesSection {
    pub employees: String,
    pub departments: String,
    pub bonuses: String,
}

impl Default for TablesSection {
    fn default() -> Self {
        Self {
            employees: default_file_name(TableKind::Employee),
            departments: default_file_name(TableKind::Department),
            bonuses: default_file_name(TableKind::Bonus),
        }
    }
}

fn default_file_name(kind: TableKind) -> String {
    kind.default_file_name().unwrap_or_default().to_string()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

pub fn read_config(path: &Path) -> anyhow::Result<TinyDbConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("tinydb"));
        }
    }
    Ok(home_dir()?.join(".config").join("tinydb"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("tinydb"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("tinydb"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_default_file_names() {
        let config: TinyDbConfig = toml::from_str("").unwrap();
        assert!(config.storage.data_dir.is_none());
        assert_eq!(config.tables.employees, "employee_table.csv");
        assert_eq!(config.tables.departments, "department_table.csv");
        assert_eq!(config.tables.bonuses, "bonus_table.csv");
    }

    #[test]
    fn test_partial_tables_section() {
        let config: TinyDbConfig = toml::from_str(
            "[storage]\ndata_dir = \"/srv/tinydb\"\n\n[tables]\nbonuses = \"b.csv\"\n",
        )
        .unwrap();
        assert_eq!(config.storage.data_dir.as_deref(), Some("/srv/tinydb"));
        assert_eq!(config.tables.bonuses, "b.csv");
        assert_eq!(config.tables.employees, "employee_table.csv");
    }
}
