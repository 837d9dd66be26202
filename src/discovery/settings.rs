//! Project settings (omsidoc.yaml) parsing.
//!
//! Settings control where the documentation is written, its title and
//! whether subdirectories are scanned. A project without a settings file
//! gets the defaults. The INI file used by earlier releases of the tool,
//! `omsiScriptDoc.ini`, is still read when no YAML file exists.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DocError, Result};
use crate::parser::parse_ini;

/// The name of the settings file.
pub const SETTINGS_FILENAME: &str = "omsidoc.yaml";

/// The name of the legacy INI settings file.
pub const LEGACY_SETTINGS_FILENAME: &str = "omsiScriptDoc.ini";

/// Project settings loaded from omsidoc.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output directory, relative to the project root unless absolute.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Page title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Scan subdirectories too.
    #[serde(default)]
    pub recursive: bool,

    /// Escape names and descriptions for HTML. Off by default so output
    /// matches earlier releases byte for byte.
    #[serde(default)]
    pub escape_html: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from("docs")
}

fn default_title() -> String {
    "OMSI Script Documentation".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: default_output(),
            title: default_title(),
            recursive: false,
            escape_html: false,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DocError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse settings from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| DocError::Parse {
            message: format!("Invalid settings: {}", e),
            help: Some(format!("Check {} syntax", SETTINGS_FILENAME)),
        })
    }

    /// Parse settings from the legacy INI format.
    ///
    /// Keys are read from the top of the file or a `[General]` section;
    /// anything unrecognised is ignored.
    pub fn parse_legacy(content: &str) -> Self {
        let mut settings = Self::default();

        for entry in parse_ini(content) {
            if !(entry.section.is_empty() || entry.in_section("general")) {
                continue;
            }
            match entry.key.as_str() {
                "outputPath" => settings.output = PathBuf::from(entry.value),
                "title" => settings.title = entry.value,
                "recursive" => settings.recursive = parse_flag(&entry.value),
                "escapeHtml" => settings.escape_html = parse_flag(&entry.value),
                _ => {}
            }
        }

        settings
    }

    /// Find and load the settings of a project.
    ///
    /// Returns the settings and the file they came from, if any.
    pub fn discover(root: &Path) -> Result<(Self, Option<PathBuf>)> {
        let yaml = root.join(SETTINGS_FILENAME);
        if yaml.is_file() {
            return Ok((Self::load(&yaml)?, Some(yaml)));
        }

        let legacy = root.join(LEGACY_SETTINGS_FILENAME);
        if legacy.is_file() {
            let bytes = std::fs::read(&legacy).map_err(|e| DocError::Io {
                path: legacy.clone(),
                message: format!("Failed to read settings: {}", e),
            })?;
            let settings = Self::parse_legacy(&String::from_utf8_lossy(&bytes));
            return Ok((settings, Some(legacy)));
        }

        Ok((Self::default(), None))
    }

    /// Output directory resolved against the project root.
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            root.join(&self.output)
        }
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case("true")
        || value
            .parse::<i64>()
            .map(|n| n != 0)
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.output, PathBuf::from("docs"));
        assert_eq!(settings.title, "OMSI Script Documentation");
        assert!(!settings.recursive);
        assert!(!settings.escape_html);
    }

    #[test]
    fn test_parse_minimal_settings() {
        let settings = Settings::parse("recursive: true").unwrap();

        assert!(settings.recursive);
        assert_eq!(settings.output, PathBuf::from("docs"));
    }

    #[test]
    fn test_parse_full_settings() {
        let yaml = r#"
output: build/reference
title: MAN Lion's City
recursive: true
escape_html: true
"#;
        let settings = Settings::parse(yaml).unwrap();

        assert_eq!(settings.output, PathBuf::from("build/reference"));
        assert_eq!(settings.title, "MAN Lion's City");
        assert!(settings.recursive);
        assert!(settings.escape_html);
    }

    #[test]
    fn test_parse_empty_settings() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_invalid_settings() {
        assert!(Settings::parse("recursive: [not, a, bool]").is_err());
    }

    #[test]
    fn test_parse_legacy() {
        let settings = Settings::parse_legacy(
            "[General]\r\noutputPath=out\r\ntitle=Citaro\r\nrecursive=true\r\n",
        );

        assert_eq!(settings.output, PathBuf::from("out"));
        assert_eq!(settings.title, "Citaro");
        assert!(settings.recursive);
    }

    #[test]
    fn test_parse_legacy_numeric_flag() {
        assert!(Settings::parse_legacy("recursive=1").recursive);
        assert!(!Settings::parse_legacy("recursive=0").recursive);
        assert!(!Settings::parse_legacy("recursive=maybe").recursive);
    }

    #[test]
    fn test_discover_prefers_yaml() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILENAME), "title: From YAML").unwrap();
        fs::write(dir.path().join(LEGACY_SETTINGS_FILENAME), "title=From INI").unwrap();

        let (settings, source) = Settings::discover(dir.path()).unwrap();

        assert_eq!(settings.title, "From YAML");
        assert_eq!(source, Some(dir.path().join(SETTINGS_FILENAME)));
    }

    #[test]
    fn test_discover_falls_back_to_legacy() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(LEGACY_SETTINGS_FILENAME), "title=From INI").unwrap();

        let (settings, source) = Settings::discover(dir.path()).unwrap();

        assert_eq!(settings.title, "From INI");
        assert!(source.is_some());
    }

    #[test]
    fn test_discover_defaults() {
        let dir = tempdir().unwrap();

        let (settings, source) = Settings::discover(dir.path()).unwrap();

        assert_eq!(settings, Settings::default());
        assert!(source.is_none());
    }

    #[test]
    fn test_output_dir_resolution() {
        let root = Path::new("/projects/bus");
        let settings = Settings::default();
        assert_eq!(settings.output_dir(root), PathBuf::from("/projects/bus/docs"));

        let settings = Settings {
            output: PathBuf::from("/tmp/out"),
            ..Default::default()
        };
        assert_eq!(settings.output_dir(root), PathBuf::from("/tmp/out"));
    }
}
