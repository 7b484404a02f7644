//! Configuration for the `rur-gen` binary
//!
//! Sources, later ones winning:
//! 1. `rur-gen.{toml,yaml,json}` in the working directory, or the file given with `--config`
//! 2. `RURGEN_*` environment variables (`RURGEN_LOG_LEVEL`, `RURGEN_GENERATOR__STRICT`, ...)
//! 3. command-line flags

use std::path::Path;

use anyhow::Context;
use rur_codegen::generators::GeneratorConfig;
use serde::Deserialize;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default level for the generator's own targets (overridden by `RUST_LOG`)
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    pub generator: GeneratorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_json: false,
            generator: GeneratorConfig::default(),
        }
    }
}

impl Config {
    /// Load file and environment sources
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("rur-gen").required(false),
        };

        config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("RURGEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("reading configuration sources")?
            .try_deserialize()
            .context("deserializing configuration")
    }

    pub fn validate(&self) -> Result<(), String> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(format!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }
        if self.generator.indent_width == 0 || self.generator.indent_width > 16 {
            return Err(format!(
                "generator.indent_width must be between 1 and 16, got {}",
                self.generator.indent_width
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generator, GeneratorConfig::default());
    }

    #[test]
    fn test_load_toml_file() {
        let dir = std::env::temp_dir().join(format!("rur-gen-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rur-gen.toml");
        fs::write(
            &path,
            r#"
log_level = "debug"

[generator]
strict = true
indent_width = 4
banner = "Copyright Example Robotics"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(!config.log_json);
        assert!(config.generator.strict);
        assert!(config.generator.generate_docs);
        assert_eq!(config.generator.indent_width, 4);
        assert_eq!(
            config.generator.banner.as_deref(),
            Some("Copyright Example Robotics")
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("log_level"));

        config.log_level = "warn".to_string();
        config.generator.indent_width = 0;
        assert!(config.validate().unwrap_err().contains("indent_width"));
    }
}
