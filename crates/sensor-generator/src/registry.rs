//! Catalog of sensor profiles, pipelines, statuses and alert levels.
//!
//! Statuses and alert levels are weighted by repetition: a value listed
//! four times is picked four times as often as a value listed once. The
//! synthesizer only ever picks uniformly from these lists.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Error type for registry loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// IO error while reading a catalog file
    #[error("Failed to read registry file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error
    #[error("Failed to parse registry YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A required list is empty
    #[error("Registry list '{0}' must not be empty")]
    EmptyList(&'static str),

    /// Profile bounds are inverted or not finite
    #[error("Invalid range for sensor type '{kind}': min {min} > max {max} or not finite")]
    InvalidRange { kind: String, min: f64, max: f64 },

    /// Two profiles share a kind
    #[error("Duplicate sensor type: {0}")]
    DuplicateKind(String),

    /// A profile has an empty kind
    #[error("Sensor type kind must not be empty")]
    EmptyKind,
}

/// Definition of one sensor type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorTypeProfile {
    pub kind: String,
    pub unit: String,
    pub min: f64,
    pub max: f64,
}

impl SensorTypeProfile {
    pub fn new(kind: impl Into<String>, unit: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            kind: kind.into(),
            unit: unit.into(),
            min,
            max,
        }
    }
}

/// Immutable lookup tables consumed by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    profiles: Vec<SensorTypeProfile>,
    #[serde(default = "default_pipelines")]
    pipelines: Vec<String>,
    #[serde(default = "default_statuses")]
    statuses: Vec<String>,
    #[serde(default = "default_alert_levels")]
    alert_levels: Vec<String>,
}

fn default_profiles() -> Vec<SensorTypeProfile> {
    vec![
        SensorTypeProfile::new("pressure", "psi", 200.0, 1500.0),
        SensorTypeProfile::new("temperature", "fahrenheit", -20.0, 180.0),
        SensorTypeProfile::new("flow_rate", "bbl/hr", 0.0, 50000.0),
        SensorTypeProfile::new("vibration", "mm/s", 0.0, 25.0),
        SensorTypeProfile::new("corrosion", "mpy", 0.0, 50.0),
        SensorTypeProfile::new("humidity", "percent", 0.0, 100.0),
        SensorTypeProfile::new("gas_detector", "ppm", 0.0, 1000.0),
        SensorTypeProfile::new("valve_position", "percent", 0.0, 100.0),
    ]
}

fn default_pipelines() -> Vec<String> {
    [
        "PIPE-TX-001",
        "PIPE-TX-002",
        "PIPE-OK-001",
        "PIPE-LA-001",
        "PIPE-NM-001",
        "PIPE-CO-001",
        "PIPE-WY-001",
        "PIPE-ND-001",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_statuses() -> Vec<String> {
    ["normal", "normal", "normal", "normal", "warning", "maintenance"]
        .into_iter()
        .map(String::from)
        .collect()
}

// Empty string means no alert.
fn default_alert_levels() -> Vec<String> {
    ["", "", "", "", "", "low", "medium", "high"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// The built-in pipeline sensor catalog.
    pub fn builtin() -> Self {
        Self {
            profiles: default_profiles(),
            pipelines: default_pipelines(),
            statuses: default_statuses(),
            alert_levels: default_alert_levels(),
        }
    }

    /// Build a registry from explicit lists, validating it.
    pub fn new(
        profiles: Vec<SensorTypeProfile>,
        pipelines: Vec<String>,
        statuses: Vec<String>,
        alert_levels: Vec<String>,
    ) -> Result<Self, RegistryError> {
        let registry = Self {
            profiles,
            pipelines,
            statuses,
            alert_levels,
        };
        registry.validate()?;
        Ok(registry)
    }

    /// Parse a registry catalog from YAML.
    ///
    /// Only `profiles` is required; missing `pipelines`, `statuses` or
    /// `alert_levels` fall back to the built-in lists.
    pub fn from_yaml(yaml: &str) -> Result<Self, RegistryError> {
        let registry: Registry = serde_yaml::from_str(yaml)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Load a registry catalog from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    fn validate(&self) -> Result<(), RegistryError> {
        if self.profiles.is_empty() {
            return Err(RegistryError::EmptyList("profiles"));
        }
        if self.pipelines.is_empty() {
            return Err(RegistryError::EmptyList("pipelines"));
        }
        if self.statuses.is_empty() {
            return Err(RegistryError::EmptyList("statuses"));
        }
        if self.alert_levels.is_empty() {
            return Err(RegistryError::EmptyList("alert_levels"));
        }

        let mut kinds = HashSet::new();
        for profile in &self.profiles {
            if profile.kind.is_empty() {
                return Err(RegistryError::EmptyKind);
            }
            if !profile.min.is_finite() || !profile.max.is_finite() || profile.min > profile.max {
                return Err(RegistryError::InvalidRange {
                    kind: profile.kind.clone(),
                    min: profile.min,
                    max: profile.max,
                });
            }
            if !kinds.insert(profile.kind.as_str()) {
                return Err(RegistryError::DuplicateKind(profile.kind.clone()));
            }
        }

        Ok(())
    }

    pub fn profiles(&self) -> &[SensorTypeProfile] {
        &self.profiles
    }

    pub fn pipelines(&self) -> &[String] {
        &self.pipelines
    }

    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    pub fn alert_levels(&self) -> &[String] {
        &self.alert_levels
    }

    /// Look up a profile by kind.
    pub fn profile(&self, kind: &str) -> Option<&SensorTypeProfile> {
        self.profiles.iter().find(|p| p.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_registry_is_valid() {
        let registry = Registry::builtin();
        registry.validate().unwrap();

        assert_eq!(registry.profiles().len(), 8);
        assert_eq!(registry.pipelines().len(), 8);
        assert!(registry.pipelines().contains(&"PIPE-ND-001".to_string()));
    }

    #[test]
    fn test_builtin_profiles() {
        let registry = Registry::builtin();

        let pressure = registry.profile("pressure").unwrap();
        assert_eq!(pressure.unit, "psi");
        assert_eq!(pressure.min, 200.0);
        assert_eq!(pressure.max, 1500.0);

        let temperature = registry.profile("temperature").unwrap();
        assert_eq!(temperature.min, -20.0);

        assert!(registry.profile("radiation").is_none());
    }

    #[test]
    fn test_status_weighting_by_repetition() {
        let registry = Registry::builtin();
        let normal = registry
            .statuses()
            .iter()
            .filter(|s| *s == "normal")
            .count();
        let warning = registry
            .statuses()
            .iter()
            .filter(|s| *s == "warning")
            .count();

        assert_eq!(normal, 4);
        assert_eq!(warning, 1);
    }

    #[test]
    fn test_alert_levels_mostly_empty() {
        let registry = Registry::builtin();
        let empty = registry
            .alert_levels()
            .iter()
            .filter(|a| a.is_empty())
            .count();

        assert_eq!(empty, 5);
        assert_eq!(registry.alert_levels().len(), 8);
    }

    #[test]
    fn test_from_yaml_with_defaults() {
        let yaml = r#"
profiles:
  - kind: pressure
    unit: psi
    min: 10
    max: 20
"#;
        let registry = Registry::from_yaml(yaml).unwrap();

        assert_eq!(registry.profiles().len(), 1);
        assert_eq!(registry.pipelines(), Registry::builtin().pipelines());
        assert_eq!(registry.statuses(), Registry::builtin().statuses());
    }

    #[test]
    fn test_from_yaml_full() {
        let yaml = r#"
profiles:
  - kind: level
    unit: ft
    min: 0
    max: 40
pipelines: ["TANK-01"]
statuses: ["ok"]
alert_levels: ["", "high"]
"#;
        let registry = Registry::from_yaml(yaml).unwrap();

        assert_eq!(registry.pipelines(), ["TANK-01".to_string()]);
        assert_eq!(registry.statuses(), ["ok".to_string()]);
        assert_eq!(registry.alert_levels().len(), 2);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let yaml = r#"
profiles:
  - kind: pressure
    unit: psi
    min: 100
    max: 10
"#;
        let result = Registry::from_yaml(yaml);
        assert!(matches!(result, Err(RegistryError::InvalidRange { .. })));
    }

    #[test]
    fn test_duplicate_kind_rejected() {
        let result = Registry::new(
            vec![
                SensorTypeProfile::new("pressure", "psi", 0.0, 1.0),
                SensorTypeProfile::new("pressure", "bar", 0.0, 1.0),
            ],
            vec!["P".to_string()],
            vec!["normal".to_string()],
            vec![String::new()],
        );
        assert!(matches!(result, Err(RegistryError::DuplicateKind(k)) if k == "pressure"));
    }

    #[test]
    fn test_empty_lists_rejected() {
        let result = Registry::new(
            vec![],
            vec!["P".to_string()],
            vec!["normal".to_string()],
            vec![String::new()],
        );
        assert!(matches!(result, Err(RegistryError::EmptyList("profiles"))));

        let result = Registry::new(
            vec![SensorTypeProfile::new("pressure", "psi", 0.0, 1.0)],
            vec![],
            vec!["normal".to_string()],
            vec![String::new()],
        );
        assert!(matches!(result, Err(RegistryError::EmptyList("pipelines"))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "profiles:\n  - kind: vibration\n    unit: mm/s\n    min: 0\n    max: 25"
        )
        .unwrap();

        let registry = Registry::from_file(file.path()).unwrap();
        assert_eq!(registry.profiles()[0].kind, "vibration");
    }

    #[test]
    fn test_from_missing_file() {
        let result = Registry::from_file("/nonexistent/registry.yaml");
        assert!(matches!(result, Err(RegistryError::Io(_))));
    }
}
