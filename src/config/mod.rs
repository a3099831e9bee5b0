pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gradecrab")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Invalid config in {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig =
        toml::from_str(contents).with_context(|| "Failed to parse config file")?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("gradecrab-does-not-exist").join("config.toml");
        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.course.default_credits, 3.0);
    }

    #[test]
    fn test_parse_config_validates() {
        let err = parse_config("[ui]\ncredit_step = -1.0\n").unwrap_err();
        assert!(format!("{:#}", err).contains("credit_step"));
    }

    #[test]
    fn test_parse_config_reports_syntax_errors() {
        let err = parse_config("[ui\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = std::env::temp_dir().join(format!("gradecrab-cfg-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[course]\ndefault_credits = 4.0\n").unwrap();

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.course.default_credits, 4.0);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
