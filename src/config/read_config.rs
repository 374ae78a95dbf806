use std::fs;
use std::path::Path;

use crate::config::store::BuildConfig;
use crate::config::value::OptionValue;
use crate::errors::ConfigError;

impl BuildConfig {
    /// Parse a flat TOML table of option values.
    ///
    /// Only booleans, integers and strings have a truthiness interpretation;
    /// any other value kind is rejected with a message naming the offending
    /// key rather than an opaque deserialisation failure.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(text)?;
        let mut config = BuildConfig::new();
        for (key, value) in table {
            let value = match value {
                toml::Value::Boolean(b) => OptionValue::Bool(b),
                toml::Value::Integer(n) => OptionValue::Int(n),
                toml::Value::String(s) => OptionValue::Str(s),
                other => {
                    return Err(ConfigError::UnsupportedValue {
                        key,
                        kind: kind_str(&other),
                    })
                }
            };
            config.set(key, value);
        }
        Ok(config)
    }
}

fn kind_str(value: &toml::Value) -> &'static str {
    match value {
        toml::Value::String(_) => "string",
        toml::Value::Integer(_) => "integer",
        toml::Value::Float(_) => "float",
        toml::Value::Boolean(_) => "boolean",
        toml::Value::Datetime(_) => "datetime",
        toml::Value::Array(_) => "array",
        toml::Value::Table(_) => "table",
    }
}

/// Load a build configuration from a TOML file on disk.
pub fn load_config(path: impl AsRef<Path>) -> Result<BuildConfig, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let config = BuildConfig::from_toml_str(&text)?;
    tracing::debug!(
        "loaded {} build options from {}",
        config.len(),
        path.display()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_flat_table_of_supported_kinds() {
        let config =
            BuildConfig::from_toml_str("WITH_UI = true\nDEBUG_LEVEL = 2\nPLATFORM = \"pc\"\n")
                .unwrap();
        assert_eq!(config.truthy("WITH_UI"), Some(true));
        assert_eq!(config.get("DEBUG_LEVEL"), Some(&OptionValue::Int(2)));
        assert_eq!(config.get("PLATFORM"), Some(&OptionValue::from("pc")));
    }

    #[test]
    fn unsupported_value_kind_names_the_key() {
        let err = BuildConfig::from_toml_str("WITH_UI = true\nEXTRA = [1, 2]\n").unwrap_err();
        match err {
            ConfigError::UnsupportedValue { key, kind } => {
                assert_eq!(key, "EXTRA");
                assert_eq!(kind, "array");
            }
            other => panic!("expected UnsupportedValue, got: {other}"),
        }
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = BuildConfig::from_toml_str("WITH_UI = \n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_config_reads_a_file() {
        let td = tempdir().unwrap();
        let p = td.path().join("build.toml");
        fs::write(&p, "WITH_NET = false\nARCH = \"x86\"\n").unwrap();
        let config = load_config(&p).unwrap();
        assert_eq!(config.truthy("WITH_NET"), Some(false));
        assert_eq!(config.truthy("ARCH"), Some(true));
    }

    #[test]
    fn load_config_missing_file_is_io_error() {
        let td = tempdir().unwrap();
        let err = load_config(td.path().join("no-such.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
