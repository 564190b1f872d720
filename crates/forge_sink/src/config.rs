use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Path naming the process's standard output.
pub const STDOUT: &str = "stdout";
/// Path naming the process's standard error.
pub const STDERR: &str = "stderr";

/// Where [`crate::open()`] sends output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(into)]
#[serde(default)]
pub struct OutputConfig {
    /// Output destinations. [`STDOUT`] and [`STDERR`] select the standard
    /// streams; anything else is a file path.
    pub paths: Vec<String>,
    /// Append to existing files instead of truncating them.
    pub append: bool,
    /// Create missing parent directories of file outputs.
    pub create_dirs: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { paths: vec![STDERR.to_string()], append: true, create_dirs: false }
    }
}

impl OutputConfig {
    /// Adds one destination to the configured paths.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults_to_stderr_in_append_mode() {
        let actual = OutputConfig::default();
        let expected = OutputConfig {
            paths: vec!["stderr".to_string()],
            append: true,
            create_dirs: false,
        };
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let actual: OutputConfig =
            serde_json::from_str(r#"{"paths": ["stdout", "app.log"]}"#).unwrap();
        let expected = OutputConfig::default()
            .paths(vec!["stdout".to_string(), "app.log".to_string()]);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_builder_appends_paths() {
        let actual = OutputConfig::default()
            .paths(Vec::<String>::new())
            .path("stdout")
            .path("/tmp/app.log")
            .append(false);
        let expected = OutputConfig {
            paths: vec!["stdout".to_string(), "/tmp/app.log".to_string()],
            append: false,
            create_dirs: false,
        };
        assert_eq!(actual, expected);
    }
}
