use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::{Error, Result, Variant};

/// Optional `sqli-demo.toml` contents
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DemoConfig {
    pub variant: Option<Variant>,
    pub database: Option<String>,
    pub foreign_keys: Option<bool>,
}

/// Values given on the command line; `None` defers to the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub variant: Option<Variant>,
    pub database: Option<PathBuf>,
    pub no_foreign_keys: bool,
}

/// Effective settings after applying flags, config file and defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub variant: Variant,
    pub database: PathBuf,
    pub foreign_keys: bool,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("sqli-demo.toml")
}

pub fn load_config(path: Option<&Path>) -> Result<Option<DemoConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: DemoConfig = toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    Ok(Some(config))
}

/// Flag > config file > built-in default
pub fn resolve(overrides: &Overrides, config: Option<&DemoConfig>) -> Settings {
    let variant = overrides
        .variant
        .or_else(|| config.and_then(|c| c.variant))
        .unwrap_or_default();

    let database = overrides
        .database
        .clone()
        .or_else(|| config.and_then(|c| c.database.as_ref()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(variant.default_database()));

    let foreign_keys = !overrides.no_foreign_keys
        && config.and_then(|c| c.foreign_keys).unwrap_or(true);

    Settings {
        variant,
        database,
        foreign_keys,
    }
}

pub fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_flags_or_file() {
        let settings = resolve(&Overrides::default(), None);
        assert_eq!(
            settings,
            Settings {
                variant: Variant::Customers,
                database: PathBuf::from("customers.db"),
                foreign_keys: true,
            }
        );
    }

    #[test]
    fn test_variant_picks_its_default_database() {
        let overrides = Overrides {
            variant: Some(Variant::Invoices),
            ..Default::default()
        };
        assert_eq!(resolve(&overrides, None).database, PathBuf::from("invoices.db"));
    }

    #[test]
    fn test_flags_override_config() {
        let config = DemoConfig {
            variant: Some(Variant::Invoices),
            database: Some("from-config.db".to_string()),
            foreign_keys: Some(true),
        };
        let overrides = Overrides {
            variant: Some(Variant::Customers),
            database: None,
            no_foreign_keys: true,
        };

        let settings = resolve(&overrides, Some(&config));
        assert_eq!(settings.variant, Variant::Customers);
        assert_eq!(settings.database, PathBuf::from("from-config.db"));
        assert!(!settings.foreign_keys);
    }

    #[test]
    fn test_load_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sqli-demo.toml");
        assert_eq!(load_config(Some(&path)).unwrap(), None);

        std::fs::write(&path, "variant = \"invoices\"\nforeign_keys = false\n").unwrap();
        let config = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(config.variant, Some(Variant::Invoices));
        assert_eq!(config.database, None);
        assert_eq!(config.foreign_keys, Some(false));

        std::fs::write(&path, "variant = \"orders\"\n").unwrap();
        assert!(matches!(load_config(Some(&path)), Err(Error::Config(_))));
    }

    #[test]
    fn test_ensure_db_dir_creates_parent() {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("nested").join("demo.db");
        ensure_db_dir(&db).unwrap();
        assert!(db.parent().unwrap().is_dir());
        ensure_db_dir(Path::new("plain.db")).unwrap();
    }
}
