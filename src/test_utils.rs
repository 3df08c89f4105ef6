//! Shared test utilities for reducing duplication across test modules
//!
//! This module provides common helper functions for:
//! - CLI argument parsing and testing
//! - Temporary file/directory creation
//! - Sketch fixture setup
//! - Test assertion helpers

#[cfg(test)]
pub mod helpers {
    use clap::ArgMatches;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::{tempdir, TempDir};

    /// Helper for creating CLI matches for a given subcommand with arguments
    pub fn create_cli_matches_for_subcommand(
        subcommand: &str,
        args: Vec<&str>,
    ) -> Option<ArgMatches> {
        let mut full_args = vec!["sprout", subcommand];
        full_args.extend(args);

        let matches = crate::build_cli().get_matches_from(full_args);
        matches.subcommand_matches(subcommand).cloned()
    }

    /// Helper for creating CLI matches for apply subcommand
    pub fn create_apply_matches(args: Vec<&str>) -> Option<ArgMatches> {
        create_cli_matches_for_subcommand("apply", args)
    }

    /// Helper for creating CLI matches for check subcommand
    pub fn create_check_matches(args: Vec<&str>) -> Option<ArgMatches> {
        create_cli_matches_for_subcommand("check", args)
    }

    /// Create a temporary directory with test files
    pub struct TestFileSystem {
        #[allow(dead_code)]
        pub temp_dir: TempDir,
        pub root_path: PathBuf,
    }

    impl Default for TestFileSystem {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TestFileSystem {
        pub fn new() -> Self {
            let temp_dir = tempdir().expect("Failed to create temporary directory");
            let root_path = temp_dir.path().to_path_buf();

            Self {
                temp_dir,
                root_path,
            }
        }

        /// Create a file with given content at the specified path (relative to temp dir)
        pub fn create_file<P: AsRef<Path>>(&self, path: P, content: &str) -> PathBuf {
            let full_path = self.root_path.join(path);

            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent).expect("Failed to create parent directories");
            }

            fs::write(&full_path, content).expect("Failed to write file");
            full_path
        }

        /// Create a standard tree sketch file for testing
        pub fn create_sketch(&self, filename: &str) -> PathBuf {
            let sketch = "\
project/
    src/
        main.ext
    docs/
";
            self.create_file(filename, sketch)
        }

        /// Get a path relative to the temp directory
        pub fn path<P: AsRef<Path>>(&self, relative_path: P) -> PathBuf {
            self.root_path.join(relative_path)
        }
    }

    /// Assert that a CLI command execution succeeds
    pub fn assert_command_succeeds<F>(command_fn: F)
    where
        F: FnOnce() -> Result<(), crate::errors::SproutError>,
    {
        let result = command_fn();
        if let Err(e) = &result {
            panic!("Command should have succeeded but failed with: {}", e);
        }
        assert!(result.is_ok());
    }

    /// Assert that a CLI command execution fails
    pub fn assert_command_fails<F>(command_fn: F)
    where
        F: FnOnce() -> Result<(), crate::errors::SproutError>,
    {
        let result = command_fn();
        assert!(result.is_err(), "Command should have failed but succeeded");
    }

    /// Assert that a directory exists
    pub fn assert_dir_exists<P: AsRef<Path>>(path: P) {
        let path = path.as_ref();
        assert!(path.exists(), "Directory should exist: {}", path.display());
        assert!(
            path.is_dir(),
            "Path should be a directory: {}",
            path.display()
        );
    }
}
