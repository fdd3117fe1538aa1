//! Bundle configuration: branding, navigation, charts, clients, features.
//!
//! A config file is pure data. The shell loads it once at startup, validates
//! it fail-fast, and never writes panel state back.

use crate::charts::ChartConfig;
use crate::icons::Icon;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the config file failed.
    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for the expected shape.
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The config parsed but fails a structural invariant.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// How serious a validation finding is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// One finding from config validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
}

impl ValidationIssue {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// A navigable dashboard tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabConfig {
    /// Unique identifier, matched against the panel registry.
    pub id: String,
    pub label: String,
    pub description: String,
    pub icon: Icon,
}

/// A client roster entry. Flat record, no relationships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub industry: String,
}

/// The dashboard section: tab list plus the charts the fallback panel shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardSection {
    pub tabs: Vec<TabConfig>,
    #[serde(default)]
    pub charts: BTreeMap<String, ChartConfig>,
}

/// The analytics section, gated behind the `reporting` feature flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalyticsSection {
    #[serde(default)]
    pub charts: BTreeMap<String, ChartConfig>,
}

/// Top-level bundle configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub title: String,
    pub company_name: String,
    /// Logo path, resolved by the deployment; the shell only displays it.
    #[serde(default)]
    pub logo: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub user_name: String,
    pub dashboard: DashboardSection,
    #[serde(default)]
    pub analytics: AnalyticsSection,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub features: BTreeMap<String, bool>,
}

impl AppConfig {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns a `ConfigError` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path)?;
        let config: AppConfig = serde_json::from_slice(&buf)?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites
    /// existing files.
    ///
    /// # Errors
    /// Returns a `ConfigError` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Whether a feature flag is enabled. Unknown flags are off.
    pub fn feature(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }

    /// Structural validation, fail-fast before the dashboard starts.
    ///
    /// Errors abort startup; warnings are surfaced but the shell degrades
    /// gracefully (cyclic palettes, default accents).
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.title.trim().is_empty() {
            issues.push(ValidationIssue::error("title must not be empty"));
        }
        if self.dashboard.tabs.is_empty() {
            issues.push(ValidationIssue::error(
                "dashboard.tabs must list at least one tab",
            ));
        }

        let mut seen = HashSet::new();
        for tab in &self.dashboard.tabs {
            if tab.id.trim().is_empty() {
                issues.push(ValidationIssue::error(format!(
                    "tab '{}' has an empty id",
                    tab.label
                )));
            } else if !seen.insert(tab.id.as_str()) {
                issues.push(ValidationIssue::error(format!(
                    "duplicate tab id: {}",
                    tab.id
                )));
            }
        }

        for (section, charts) in [
            ("dashboard", &self.dashboard.charts),
            ("analytics", &self.analytics.charts),
        ] {
            for (name, chart) in charts {
                if !chart.has_full_color_coverage() {
                    issues.push(ValidationIssue::warning(format!(
                        "chart '{}.{}' declares {} colors for {} slots; palette will cycle",
                        section,
                        name,
                        chart.colors.len(),
                        chart.required_colors()
                    )));
                }
            }
        }

        for (field, value) in [
            ("primary_color", &self.primary_color),
            ("secondary_color", &self.secondary_color),
        ] {
            if crate::theme::parse_hex_color(value).is_none() {
                issues.push(ValidationIssue::warning(format!(
                    "{} is not a #RRGGBB value; the default accent will be used",
                    field
                )));
            }
        }

        issues
    }

    /// Returns an error for the first validation finding of `Error` severity.
    pub fn ensure_valid(&self) -> Result<(), ConfigError> {
        match self
            .validate()
            .into_iter()
            .find(|issue| issue.severity == Severity::Error)
        {
            Some(issue) => Err(ConfigError::Invalid(issue.message)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::sample_config;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = sample_config();
        config.save(&path).unwrap();

        let loaded_config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = sample_config();
        let result = config.save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = AppConfig::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // The built-in sample bundle must pass validation cleanly.
    fn sample_config_is_valid() {
        let config = sample_config();
        assert!(config.validate().is_empty());
        assert!(config.ensure_valid().is_ok());
    }

    #[test]
    fn tab_ids_must_be_unique() {
        let mut config = sample_config();
        let duplicate = config.dashboard.tabs[0].clone();
        config.dashboard.tabs.push(duplicate);

        let issues = config.validate();
        assert!(
            issues
                .iter()
                .any(|i| i.severity == Severity::Error
                    && i.message.contains("duplicate tab id: propertyOccupation"))
        );
        assert!(config.ensure_valid().is_err());
    }

    #[test]
    fn empty_title_is_an_error() {
        let mut config = sample_config();
        config.title = "  ".to_string();
        assert!(config.ensure_valid().is_err());
    }

    #[test]
    fn missing_tabs_is_an_error() {
        let mut config = sample_config();
        config.dashboard.tabs.clear();
        assert!(config.ensure_valid().is_err());
    }

    #[test]
    // A short chart palette is a warning, never a startup failure.
    fn short_palette_warns_but_does_not_fail() {
        let mut config = sample_config();
        config
            .dashboard
            .charts
            .get_mut("propertyStatus")
            .unwrap()
            .colors
            .truncate(1);

        let issues = config.validate();
        assert!(
            issues
                .iter()
                .any(|i| i.severity == Severity::Warning && i.message.contains("propertyStatus"))
        );
        assert!(config.ensure_valid().is_ok());
    }

    #[test]
    // Feature flags are independent booleans: toggling one leaves the rest alone.
    fn toggling_one_feature_leaves_others_unchanged() {
        let mut config = sample_config();
        let before: Vec<(String, bool)> = config
            .features
            .iter()
            .filter(|(name, _)| name.as_str() != "taxAdvice")
            .map(|(name, value)| (name.clone(), *value))
            .collect();

        config.features.insert("taxAdvice".to_string(), false);

        assert!(!config.feature("taxAdvice"));
        for (name, value) in before {
            assert_eq!(config.feature(&name), value, "flag {} changed", name);
        }
    }

    #[test]
    fn unknown_feature_flags_are_off() {
        let config = sample_config();
        assert!(!config.feature("timeTravel"));
    }

    #[test]
    // Branding colors and chart data are independent: swapping colors must not
    // touch any chart's records.
    fn swapping_branding_colors_preserves_chart_data() {
        let mut config = sample_config();
        let dashboard_data_before: Vec<_> = config
            .dashboard
            .charts
            .values()
            .map(|c| c.data.clone())
            .collect();
        let analytics_data_before: Vec<_> = config
            .analytics
            .charts
            .values()
            .map(|c| c.data.clone())
            .collect();

        std::mem::swap(&mut config.primary_color, &mut config.secondary_color);

        let dashboard_data_after: Vec<_> = config
            .dashboard
            .charts
            .values()
            .map(|c| c.data.clone())
            .collect();
        let analytics_data_after: Vec<_> = config
            .analytics
            .charts
            .values()
            .map(|c| c.data.clone())
            .collect();
        assert_eq!(dashboard_data_before, dashboard_data_after);
        assert_eq!(analytics_data_before, analytics_data_after);
    }

    #[test]
    // Minimal configs omit optional sections entirely.
    fn optional_sections_default_to_empty() {
        let json = r##"{
            "title": "Minimal",
            "company_name": "Acme",
            "primary_color": "#112233",
            "secondary_color": "#445566",
            "user_name": "Operator",
            "dashboard": {
                "tabs": [
                    {"id": "overview", "label": "Overview", "description": "", "icon": "home"}
                ]
            }
        }"##;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert!(config.analytics.charts.is_empty());
        assert!(config.clients.is_empty());
        assert!(config.features.is_empty());
        assert!(config.ensure_valid().is_ok());
    }
}
