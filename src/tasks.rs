//! Plans and applies filesystem creation operations.
//!
//! Planning reconstructs every entry's path with a depth-indexed stack and is
//! a pure function of its inputs; dry-run previews and real applies consume
//! the same task list, so the two can never diverge.

use crate::errors::SproutError;
use crate::parser::{Entry, EntryKind};
use log::info;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// A task to either create a directory or an empty file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Dir(PathBuf),
    File(PathBuf),
}

impl Task {
    pub fn path(&self) -> &Path {
        match self {
            Task::Dir(path) | Task::File(path) => path,
        }
    }
}

/// Counts of planned or applied operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub dirs: usize,
    pub files: usize,
}

impl Stats {
    pub fn total(&self) -> usize {
        self.dirs + self.files
    }
}

/// Resolves each entry against the output root and returns the creation
/// tasks in input order, together with their counts.
///
/// The stack holds the ancestor directory name for every depth seen so far;
/// truncating it to `entry.depth` before each entry discards stale siblings,
/// which is what makes dedentation by several levels at once work.
///
/// `skip_root` is consumed on the first top-level directory: that entry
/// emits no task and its name is elided from descendant paths. A second
/// top-level directory in the same sketch is processed normally; the skip is
/// never re-armed.
pub fn plan_tasks(entries: &[Entry], output_root: &Path, skip_root: bool) -> (Vec<Task>, Stats) {
    let mut tasks = Vec::with_capacity(entries.len());
    let mut stats = Stats::default();
    let mut stack: Vec<String> = Vec::new();
    let mut pending_skip = skip_root;
    // True while stack slot 0 holds the skipped root, which must not appear
    // in resolved paths.
    let mut elided = false;

    for entry in entries {
        stack.truncate(entry.depth);

        match entry.kind {
            EntryKind::Directory => {
                if entry.depth == 0 {
                    elided = false;
                }
                stack.push(entry.name.clone());
                if pending_skip && entry.depth == 0 {
                    // The sketch root only names the output location.
                    pending_skip = false;
                    elided = true;
                    continue;
                }
                tasks.push(Task::Dir(resolve(output_root, &stack, elided, None)));
                stats.dirs += 1;
            }
            EntryKind::File => {
                tasks.push(Task::File(resolve(
                    output_root,
                    &stack,
                    elided,
                    Some(&entry.name),
                )));
                stats.files += 1;
            }
        }
    }

    (tasks, stats)
}

fn resolve(output_root: &Path, stack: &[String], elided: bool, name: Option<&str>) -> PathBuf {
    let skip = usize::from(elided).min(stack.len());
    let mut path = output_root.to_path_buf();
    for segment in &stack[skip..] {
        path.push(segment);
    }
    if let Some(name) = name {
        path.push(name);
    }
    path
}

/// Applies the tasks in order; directory creation is recursive and
/// idempotent, file creation has touch semantics (existing files are left
/// untouched). The first failure aborts the run, since later operations may
/// depend on the failed one; already-created entries remain and re-running
/// is the intended recovery.
pub fn create_files_and_directories(tasks: &[Task]) -> Result<Stats, SproutError> {
    let mut applied = Stats::default();

    for task in tasks {
        match task {
            Task::Dir(path) => {
                fs::create_dir_all(path).map_err(|e| SproutError::filesystem(path, e))?;
                applied.dirs += 1;
                info!("Created directory: {:?}", path);
            }
            Task::File(path) => {
                // Guard against a parent that never got its own task.
                if let Some(parent) = task.path().parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)
                            .map_err(|e| SproutError::filesystem(parent, e))?;
                    }
                }
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| SproutError::filesystem(path, e))?;
                applied.files += 1;
                info!("Created file: {:?}", path);
            }
        }
    }

    Ok(applied)
}

/// Returns a string representation of a task.
pub fn task_label(task: &Task) -> String {
    match task {
        Task::Dir(path) => format!("Dir: {}", path.display()),
        Task::File(path) => format!("File: {}", path.display()),
    }
}
