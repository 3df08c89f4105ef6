use crate::errors::SproutError;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional preferences file looked up in the working directory.
pub const PREFERENCES_FILE: &str = ".sproutrc";

/// Defaults read from a `.sproutrc` file; a CLI flag always wins over these.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preferences {
    pub indent_unit: Option<usize>,
    pub skip_root: Option<bool>,
    pub output_root: Option<PathBuf>,
}

impl Preferences {
    /// Parses preferences from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SproutError> {
        let doc: Value = serde_yaml::from_str(yaml)?;

        let indent_unit = match doc.get("indent") {
            Some(value) => {
                let unit = value
                    .as_u64()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| {
                        SproutError::Config("'indent' must be a positive integer".into())
                    })?;
                Some(unit as usize)
            }
            None => None,
        };

        let skip_root = match doc.get("skip_root") {
            Some(value) => Some(value.as_bool().ok_or_else(|| {
                SproutError::Config("'skip_root' must be a boolean".into())
            })?),
            None => None,
        };

        let output_root = match doc.get("output") {
            Some(value) => Some(PathBuf::from(value.as_str().ok_or_else(|| {
                SproutError::Config("'output' must be a path string".into())
            })?)),
            None => None,
        };

        Ok(Self {
            indent_unit,
            skip_root,
            output_root,
        })
    }

    /// Loads preferences from a file; an absent file yields empty preferences.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SproutError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| SproutError::from_io_with_context(e, path.to_path_buf()))?;
        Self::from_yaml_str(&content)
    }
}

/// Resolves the effective indentation unit: CLI flag over preference over
/// the built-in default.
pub fn resolve_indent_unit(
    arg: Option<&String>,
    prefs: &Preferences,
) -> Result<usize, SproutError> {
    match arg {
        Some(raw) => raw
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                SproutError::Config(format!("invalid indent unit '{}': expected a positive integer", raw))
            }),
        None => Ok(prefs
            .indent_unit
            .unwrap_or(crate::parser::DEFAULT_INDENT_UNIT)),
    }
}

/// Returns the provided sketch path or defaults to reading standard input
/// when the argument is `-`.
pub fn sketch_source(arg: &str) -> SketchSource {
    if arg == "-" {
        SketchSource::Stdin
    } else {
        SketchSource::File(PathBuf::from(arg))
    }
}

/// Where the sketch text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SketchSource {
    File(PathBuf),
    Stdin,
}

impl SketchSource {
    /// Reads the whole sketch into memory.
    pub fn read(&self) -> Result<String, SproutError> {
        match self {
            SketchSource::File(path) => fs::read_to_string(path)
                .map_err(|e| SproutError::from_io_with_context(e, path.clone())),
            SketchSource::Stdin => {
                use std::io::Read;
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_preferences_defaults_when_file_absent() {
        let temp_dir = tempdir().unwrap();
        let prefs = Preferences::load(temp_dir.path().join(PREFERENCES_FILE)).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_preferences_from_valid_yaml() {
        let yaml = "indent: 2\nskip_root: true\noutput: \"scaffold\"\n";
        let prefs = Preferences::from_yaml_str(yaml).unwrap();

        assert_eq!(prefs.indent_unit, Some(2));
        assert_eq!(prefs.skip_root, Some(true));
        assert_eq!(prefs.output_root, Some(PathBuf::from("scaffold")));
    }

    #[test]
    fn test_preferences_partial_yaml() {
        let prefs = Preferences::from_yaml_str("indent: 8\n").unwrap();

        assert_eq!(prefs.indent_unit, Some(8));
        assert_eq!(prefs.skip_root, None);
        assert_eq!(prefs.output_root, None);
    }

    #[test]
    fn test_preferences_reject_zero_indent() {
        let result = Preferences::from_yaml_str("indent: 0\n");
        assert!(matches!(result, Err(SproutError::Config(_))));
    }

    #[test]
    fn test_preferences_reject_non_boolean_skip_root() {
        let result = Preferences::from_yaml_str("skip_root: \"yes\"\n");
        assert!(matches!(result, Err(SproutError::Config(_))));
    }

    #[test]
    fn test_preferences_invalid_yaml() {
        let result = Preferences::from_yaml_str("indent: [unterminated\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_preferences_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "indent: 2\n").unwrap();

        let prefs = Preferences::load(&path).unwrap();
        assert_eq!(prefs.indent_unit, Some(2));
    }

    #[test]
    fn test_resolve_indent_unit_precedence() {
        let prefs = Preferences {
            indent_unit: Some(2),
            ..Default::default()
        };

        // Flag wins over preference, preference wins over the default.
        assert_eq!(resolve_indent_unit(Some(&"8".to_string()), &prefs).unwrap(), 8);
        assert_eq!(resolve_indent_unit(None, &prefs).unwrap(), 2);
        assert_eq!(
            resolve_indent_unit(None, &Preferences::default()).unwrap(),
            crate::parser::DEFAULT_INDENT_UNIT
        );
    }

    #[test]
    fn test_resolve_indent_unit_rejects_garbage() {
        let prefs = Preferences::default();
        assert!(resolve_indent_unit(Some(&"zero".to_string()), &prefs).is_err());
        assert!(resolve_indent_unit(Some(&"0".to_string()), &prefs).is_err());
        assert!(resolve_indent_unit(Some(&"-4".to_string()), &prefs).is_err());
    }

    #[test]
    fn test_sketch_source_dash_means_stdin() {
        assert_eq!(sketch_source("-"), SketchSource::Stdin);
        assert_eq!(
            sketch_source("tree.txt"),
            SketchSource::File(PathBuf::from("tree.txt"))
        );
    }

    #[test]
    fn test_sketch_source_missing_file() {
        let result = SketchSource::File(PathBuf::from("definitely_missing.txt")).read();
        assert!(matches!(result, Err(SproutError::InputNotFound { .. })));
    }
}
