use crate::config::{resolve_indent_unit, sketch_source, Preferences, PREFERENCES_FILE};
use crate::errors::SproutError;
use crate::output;
use crate::parser::parse_tree;
use crate::tasks::{plan_tasks, task_label};
use clap::ArgMatches;
use std::path::Path;

/// Runs the check subcommand: parses the sketch and reports what an apply
/// would create, without touching the filesystem. Useful for linting
/// hand-edited sketches before committing to them.
pub fn run_check(matches: &ArgMatches) -> Result<(), SproutError> {
    let prefs = Preferences::load(PREFERENCES_FILE)?;
    let sketch = matches
        .get_one::<String>("sketch")
        .ok_or_else(|| SproutError::Config("missing sketch argument".into()))?;
    let indent_unit = resolve_indent_unit(matches.get_one::<String>("indent"), &prefs)?;

    let text = sketch_source(sketch).read()?;
    let entries = parse_tree(&text, indent_unit)?;
    let (tasks, stats) = plan_tasks(&entries, Path::new(""), false);

    if matches.get_flag("verbose") {
        for task in &tasks {
            println!("  {}", task_label(task));
        }
    }
    output::print_check_summary(&stats);

    Ok(())
}
