use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_yml;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Files looked at, in order, when `P1_CONFIG` is not set.
pub const CONFIG_PATHS: [&str; 2] = ["config/p1reader.yaml", "p1reader.yaml"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read config {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("Unable to parse config {path}: {source}")]
    Parse { path: String, source: serde_yml::Error },
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON object per line
    Json,
    Pretty,
    /// The telegram text as received
    Raw,
}

fn device_default() -> String { return "/dev/ttyUSB0".to_string() }
fn telegrams_default() -> u64 { return 1 }
fn retries_default() -> u32 { return 3 }
fn output_default() -> OutputFormat { return OutputFormat::Json }
fn timestamp_default() -> bool { return true }

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Already configured tty, capture file or `-` for stdin
    #[serde(default="device_default")]
    pub device: String,
    /// 0 reads forever
    #[serde(default="telegrams_default")]
    pub telegrams: u64,
    #[serde(default="retries_default")]
    pub retries: u32,
    #[serde(default="output_default")]
    pub output: OutputFormat,
    #[serde(default="timestamp_default")]
    pub timestamp: bool,
}

impl Default for Config {
    fn default() -> Self {
        return Config {
            device: device_default(),
            telegrams: telegrams_default(),
            retries: retries_default(),
            output: output_default(),
            timestamp: timestamp_default(),
        }
    }
}

impl Config {
    pub fn from_yaml(contents: &str, path: &str) -> Result<Self, ConfigError> {
        serde_yml::from_str(contents).map_err(|source| ConfigError::Parse { path: path.to_string(), source })
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_string(), source })?;
        Self::from_yaml(&contents, path)
    }

    /// An explicit path must exist, otherwise the well known locations are
    /// tried and the defaults used when none of them is there.
    pub fn load(explicit: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            info!("Loading config from {}", path);
            return Self::from_file(path);
        }

        for path in CONFIG_PATHS {
            if Path::new(path).exists() {
                info!("Loading config from {}", path);
                return Self::from_file(path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let c = Config::from_yaml("{}", "inline").unwrap();
        assert_eq!(c, Config::default());
        assert_eq!(c.device, "/dev/ttyUSB0");
        assert_eq!(c.telegrams, 1);
        assert_eq!(c.retries, 3);
        assert_eq!(c.output, OutputFormat::Json);
        assert!(c.timestamp);
    }

    #[test]
    fn test_full_document() {
        let yaml = "device: capture.txt\ntelegrams: 0\nretries: 1\noutput: raw\ntimestamp: false\n";
        let c = Config::from_yaml(yaml, "inline").unwrap();
        assert_eq!(c.device, "capture.txt");
        assert_eq!(c.telegrams, 0);
        assert_eq!(c.retries, 1);
        assert_eq!(c.output, OutputFormat::Raw);
        assert!(!c.timestamp);
    }

    #[test]
    fn test_unknown_output_format() {
        let err = Config::from_yaml("output: xml\n", "inline").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("Unable to parse config inline"));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Some("/nonexistent/p1reader.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
