//! Defaults file support
//!
//! A small YAML file can carry the flags a user passes on every
//! invocation (profile, region, output format, paging defaults). Values
//! from the file sit below command-line flags: a flag always wins.
//!
//! ```yaml
//! profile: billing
//! region: us-east-1
//! output: jsonl
//! max_items: 500
//! page_size: 100
//! ```

use crate::error::{Error, Result};
use crate::types::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Defaults loaded from a YAML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    /// Named AWS profile
    #[serde(default)]
    pub profile: Option<String>,
    /// AWS region
    #[serde(default)]
    pub region: Option<String>,
    /// Endpoint override
    #[serde(default)]
    pub endpoint_url: Option<String>,
    /// Output format
    #[serde(default)]
    pub output: Option<OutputFormat>,
    /// Default total item cap for paged commands
    #[serde(default)]
    pub max_items: Option<usize>,
    /// Default per-call page-size hint for paged commands
    #[serde(default)]
    pub page_size: Option<i32>,
}

impl Defaults {
    /// Load defaults from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse defaults from a YAML string
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Fill in any value the command line did not supply
    pub fn merge_under<T>(file_value: Option<T>, flag_value: Option<T>) -> Option<T> {
        flag_value.or(file_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_full_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "profile: billing\nregion: us-east-1\noutput: jsonl\nmax_items: 500\npage_size: 100"
        )
        .unwrap();

        let defaults = Defaults::load(file.path()).unwrap();

        assert_eq!(defaults.profile.as_deref(), Some("billing"));
        assert_eq!(defaults.region.as_deref(), Some("us-east-1"));
        assert_eq!(defaults.output, Some(OutputFormat::Jsonl));
        assert_eq!(defaults.max_items, Some(500));
        assert_eq!(defaults.page_size, Some(100));
    }

    #[test]
    fn test_load_partial_defaults() {
        let defaults = Defaults::parse("region: eu-west-1").unwrap();
        assert_eq!(defaults.region.as_deref(), Some("eu-west-1"));
        assert!(defaults.profile.is_none());
        assert!(defaults.output.is_none());
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        assert!(Defaults::parse("regin: eu-west-1").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Defaults::load(Path::new("/nonexistent/costctl.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_merge_under_prefers_flags() {
        assert_eq!(
            Defaults::merge_under(Some("file"), Some("flag")),
            Some("flag")
        );
        assert_eq!(Defaults::merge_under(Some("file"), None), Some("file"));
        assert_eq!(Defaults::merge_under(None::<&str>, None), None);
    }
}
