//! # Sprout
//!
//! Grow real directory trees from sketched ones.
//!
//! Sprout turns an indentation-based tree description, the kind people paste
//! into READMEs and design docs, into actual directories and empty files.
//! It provides both a CLI and a programmatic API:
//! - Parsing tree sketches (plain indentation or `tree`-style glyphs)
//! - Planning the creation operations without touching the filesystem
//! - Applying the plan with idempotent create-if-absent semantics
//!
//! ## Usage as a Library
//!
//! ```no_run
//! use sprout::{apply_sketch, SketchOptions};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sketch = "\
//! project/
//!     src/
//!         main.rs
//!     docs/
//! ";
//!
//! let result = apply_sketch(sketch, Path::new("./out"), &SketchOptions::default(), false)?;
//!
//! println!("Created {} directories and {} files", result.dirs_created, result.files_created);
//! # Ok(())
//! # }
//! ```

pub mod apply;
pub mod check;
pub mod config;
pub mod errors;
pub mod output;
pub mod parser;
pub mod tasks;

#[cfg(test)]
pub mod test_utils;

// Re-export key types for library users
pub use crate::config::Preferences;
pub use crate::errors::SproutError;
pub use crate::parser::{Entry, EntryKind, DEFAULT_INDENT_UNIT};
pub use crate::tasks::{Stats, Task};

use clap::{Arg, ArgAction, Command};
use std::path::Path;
use std::time::{Duration, Instant};

/// Options for parsing and planning a sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SketchOptions {
    /// Number of spaces that make up one indentation level.
    pub indent_unit: usize,
    /// Elide the sketch's top-level directory from the output.
    pub skip_root: bool,
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT,
            skip_root: false,
        }
    }
}

/// Result of applying a sketch
#[derive(Debug, Clone)]
pub struct ApplyResult {
    pub dirs_created: usize,
    pub files_created: usize,
    pub duration: Duration,
    pub tasks_total: usize,
}

/// Parses a sketch, plans the operations against `output_root`, and applies
/// them unless `dry_run` is set. Dry runs report only the task count.
pub fn apply_sketch(
    text: &str,
    output_root: &Path,
    options: &SketchOptions,
    dry_run: bool,
) -> Result<ApplyResult, SproutError> {
    let start_time = Instant::now();
    let entries = parser::parse_tree(text, options.indent_unit)?;
    let (tasks, _stats) = tasks::plan_tasks(&entries, output_root, options.skip_root);

    if dry_run {
        Ok(ApplyResult {
            dirs_created: 0,
            files_created: 0,
            duration: start_time.elapsed(),
            tasks_total: tasks.len(),
        })
    } else {
        let applied = tasks::create_files_and_directories(&tasks)?;

        Ok(ApplyResult {
            dirs_created: applied.dirs,
            files_created: applied.files,
            duration: start_time.elapsed(),
            tasks_total: tasks.len(),
        })
    }
}

/// Builds the CLI definition shared by the binary and the test helpers.
pub fn build_cli() -> Command {
    let sketch_arg = Arg::new("sketch")
        .value_name("SKETCH")
        .required(true)
        .help("Tree sketch file to read ('-' reads standard input)");
    let indent_arg = Arg::new("indent")
        .short('i')
        .long("indent")
        .value_name("N")
        .help("Number of spaces that make up one indentation level");
    let verbose_arg = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help("List every planned operation")
        .action(ArgAction::SetTrue);

    Command::new("Sprout")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Grow real directory trees from sketched ones")
        .subcommand(
            Command::new("apply")
                .about("Create the sketched directories and files on disk")
                .arg(sketch_arg.clone())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("DIR")
                        .help("Directory to create the tree under (defaults to the current directory)"),
                )
                .arg(indent_arg.clone())
                .arg(
                    Arg::new("skip_root")
                        .short('s')
                        .long("skip-root")
                        .help("Elide the sketch's top-level directory from the output")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("dry_run")
                        .short('d')
                        .long("dry-run")
                        .help("Preview the operations without touching the filesystem")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Apply without asking for confirmation")
                        .action(ArgAction::SetTrue),
                )
                .arg(verbose_arg.clone()),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a sketch and report its stats without creating anything")
                .arg(sketch_arg)
                .arg(indent_arg)
                .arg(verbose_arg),
        )
}
