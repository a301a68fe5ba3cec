use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::enums::render_mode::RenderMode;
use crate::enums::view_preset::ViewPreset;
use crate::errors::{ArcaError, ArcaResult};
use crate::structs::config::config::Config;
use crate::structs::view_config::ViewConfig;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Reads the config at `path` (or the default location); a missing file yields defaults.
    pub fn load(path: Option<&Path>) -> ArcaResult<Config> {
        let config_location = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if !config_location.exists() {
            log::debug!("No config at {}, using defaults", config_location.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", config_location.display());
        let content = fs::read_to_string(&config_location).map_err(|e| ArcaError::ConfigurationFileError {
            path: config_location.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ArcaError::ConfigurationFileError {
            path: config_location.display().to_string(),
            reason: e.user_message(),
        })
    }

    pub fn parse(content: &str) -> ArcaResult<Config> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn create_sample_config(path: Option<&Path>) -> ArcaResult<PathBuf> {
        let sample_config = r#"# Arca configuration

[server]
host = "127.0.0.1"
port = 8080

# Causes loaded at startup. Ids are assigned in order, starting at 1.
[[server.seed]]
name = "Missing parts"
frequency = 42
total = 120
description = "Parts not delivered on time"

[[server.seed]]
name = "Operator error"
frequency = 31
total = 120

[[server.seed]]
name = "Machine breakdown"
frequency = 17
total = 120

[client]
base_url = "http://localhost:8080"
timeout_secs = 10

[email]
from = "arca@localhost"
to = ["quality@example.com"]
# Simulated delivery time
pause_ms = 5000

[batch]
enabled = false
report_interval_secs = 30
initial_delay_secs = 5
fixed_rate_secs = 15
fixed_delay_secs = 15
work_ms = 5000

[render]
# "arca", "pareto" or any view declared below
default_view = "arca"
# One row per cause instead of one shared node per field
per_record = false
title = "Causes"

# Custom views map record fields onto node classes
[views.summary]
mode = "per_record"

[[views.summary.bindings]]
field = "name"
aliases = ["text"]
selector = ".cause-name"

[[views.summary.bindings]]
field = "frequency"
selector = ".cause-frequency"
"#;
        let config_file_path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);
        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, sample_config)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        Self::validate_for_serve(config, config.batch.enabled)
    }

    /// `run_batch` is whether batch jobs will actually start, which `serve --batch`
    /// can force on top of `batch.enabled`.
    pub fn validate_for_serve(config: &Config, run_batch: bool) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.server.port == 0 {
            errors.push("Server port must be greater than 0".to_string());
        }

        if let Err(e) = reqwest::Url::parse(&config.client.base_url) {
            errors.push(format!("Client base_url '{}' is not a valid URL: {}", config.client.base_url, e));
        }

        if config.client.timeout_secs == 0 {
            errors.push("Client timeout_secs must be greater than 0".to_string());
        }

        for (index, cause) in config.server.seed.iter().enumerate() {
            if cause.id.is_some() {
                errors.push(format!("Seed cause #{} ('{}') must not set an id", index + 1, cause.name));
            }
        }

        if run_batch {
            let intervals = [
                ("report_interval_secs", config.batch.report_interval_secs),
                ("fixed_rate_secs", config.batch.fixed_rate_secs),
                ("fixed_delay_secs", config.batch.fixed_delay_secs),
            ];
            for (name, value) in intervals {
                if value == 0 {
                    errors.push(format!("Batch {} must be greater than 0", name));
                }
            }
        }

        let mut names: Vec<&String> = config.views.keys().collect();
        names.sort();
        for name in names {
            let view = &config.views[name];
            if view.bindings.is_empty() {
                errors.push(format!("View '{}' has no bindings", name));
            }
            for binding in &view.bindings {
                if binding.field.trim().is_empty() {
                    errors.push(format!("View '{}' has a binding without a field", name));
                }
                if binding.class_name().is_empty() {
                    errors.push(format!("View '{}' binds field '{}' to an empty selector", name, binding.field));
                }
            }
        }

        if Self::resolve_view(config, &config.render.default_view, None).is_err() {
            errors.push(format!("Default view '{}' is neither a preset nor a configured view", config.render.default_view));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Looks `name` up among configured views first, then the presets.
    /// `per_record` overrides the view's own mode when given.
    pub fn resolve_view(config: &Config, name: &str, per_record: Option<bool>) -> ArcaResult<ViewConfig> {
        let view = match config.views.get(name) {
            Some(view) => view.clone(),
            None => ViewPreset::from_str(name)
                .map_err(|_| ArcaError::config_error(
                    &format!("Unknown view '{}'", name),
                    Some("render.default_view"),
                    Some("Use 'arca', 'pareto' or declare the view under [views]"),
                ))?
                .view(),
        };

        Ok(match per_record {
            Some(true) => view.with_mode(RenderMode::PerRecord),
            Some(false) => view.with_mode(RenderMode::Accumulate),
            None => view,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let written = ConfigManager::create_sample_config(Some(&path)).unwrap();
        assert_eq!(written, path);

        let config = ConfigManager::load(Some(&path)).unwrap();
        assert_eq!(config.server.seed.len(), 3);
        assert_eq!(config.email.to, vec!["quality@example.com".to_string()]);
        assert!(config.views.contains_key("summary"));
        assert_eq!(ConfigManager::validate_config(&config), Ok(()));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigManager::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.client.base_url, "http://localhost:8080");
        assert_eq!(config.render.default_view, "arca");
    }

    #[test]
    fn validation_collects_every_problem() {
        let config = ConfigManager::parse(
            r#"
[server]
port = 0

[[server.seed]]
id = 3
name = "Preset id"

[client]
base_url = "not a url"

[render]
default_view = "nowhere"

[views.empty]
"#,
        )
        .unwrap();

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5, "{:?}", errors);
        assert!(errors.iter().any(|e| e.contains("port")));
        assert!(errors.iter().any(|e| e.contains("must not set an id")));
        assert!(errors.iter().any(|e| e.contains("base_url")));
        assert!(errors.iter().any(|e| e.contains("no bindings")));
        assert!(errors.iter().any(|e| e.contains("nowhere")));
    }

    #[test]
    fn batch_intervals_are_checked_when_serve_forces_batch() {
        let config = ConfigManager::parse(
            r#"
[batch]
enabled = false
report_interval_secs = 0
"#,
        )
        .unwrap();

        assert_eq!(ConfigManager::validate_config(&config), Ok(()));
        let errors = ConfigManager::validate_for_serve(&config, true).unwrap_err();
        assert_eq!(errors, vec!["Batch report_interval_secs must be greater than 0".to_string()]);
    }

    #[test]
    fn resolve_view_prefers_configured_views_and_applies_override() {
        let config = ConfigManager::parse(
            r#"
[[views.arca.bindings]]
field = "id"
selector = "only-id"
"#,
        )
        .unwrap();

        let view = ConfigManager::resolve_view(&config, "arca", None).unwrap();
        assert_eq!(view.class_names(), vec!["only-id"]);

        let pareto = ConfigManager::resolve_view(&config, "pareto", Some(true)).unwrap();
        assert_eq!(pareto.mode, RenderMode::PerRecord);
        assert!(ConfigManager::resolve_view(&config, "missing", None).is_err());
    }
}
