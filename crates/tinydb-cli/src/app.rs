//! Application-level wiring: config resolution, store construction and
//! error-to-exit-code mapping.

use std::path::PathBuf;

use tinydb_core::{FileTable, Store, TinyDbError};
use tracing::debug;

use crate::cli::Cli;
use crate::config::{default_config_path, default_data_dir, read_config, TinyDbConfig};
use crate::constants::{exit_codes, table_names};

pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.config.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    default_config_path()
}

/// Load the config file, or defaults when none exists.
///
/// An explicitly requested config that does not exist is an error.
pub fn load_config(cli: &Cli) -> anyhow::Result<TinyDbConfig> {
    let path = resolve_config_path(cli)?;
    if path.exists() {
        debug!(path = %path.display(), "reading config");
        return read_config(&path);
    }
    if cli.config.is_some() {
        return Err(anyhow::anyhow!("Config file {} not found", path.display()));
    }
    Ok(TinyDbConfig::default())
}

/// Data directory: `--data-dir`/`TINYDB_DATA_DIR`, then config, then XDG.
pub fn resolve_data_dir(cli: &Cli, config: &TinyDbConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = cli.data_dir.as_deref().filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = config.storage.data_dir.as_deref() {
        return Ok(PathBuf::from(dir));
    }
    default_data_dir()
}

/// Build the store with the three persisted tables registered.
pub fn open_store(cli: &Cli) -> anyhow::Result<Store> {
    let config = load_config(cli)?;
    let data_dir = resolve_data_dir(cli, &config)?;
    std::fs::create_dir_all(&data_dir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create data directory {}: {}",
            data_dir.display(),
            e
        )
    })?;
    debug!(data_dir = %data_dir.display(), "opening store");

    let mut store = Store::new();
    store.register_table(
        table_names::EMPLOYEES,
        FileTable::employees(data_dir.join(&config.tables.employees))?,
    );
    store.register_table(
        table_names::DEPARTMENTS,
        FileTable::departments(data_dir.join(&config.tables.departments))?,
    );
    store.register_table(
        table_names::BONUSES,
        FileTable::bonuses(data_dir.join(&config.tables.bonuses))?,
    );
    Ok(store)
}

/// Map an error to the process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<TinyDbError>() {
        Some(TinyDbError::UnknownTable(_)) | Some(TinyDbError::DanglingReference { .. }) => {
            exit_codes::NOT_FOUND
        }
        Some(TinyDbError::DuplicateKey { .. }) => exit_codes::CONFLICT,
        Some(TinyDbError::Persistence(_)) => exit_codes::STORAGE,
        Some(_) => exit_codes::INVALID_INPUT,
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_error_kind() {
        let err = anyhow::Error::from(TinyDbError::UnknownTable("x".to_string()));
        assert_eq!(exit_code_for(&err), exit_codes::NOT_FOUND);

        let err = anyhow::Error::from(TinyDbError::DuplicateKey {
            id: "1".to_string(),
        });
        assert_eq!(exit_code_for(&err), exit_codes::CONFLICT);

        let err = anyhow::Error::from(TinyDbError::EmptyTable("employees".to_string()));
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&err), 1);
    }
}
