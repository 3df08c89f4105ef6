use crate::config::{resolve_indent_unit, sketch_source, Preferences, SketchSource, PREFERENCES_FILE};
use crate::errors::SproutError;
use crate::output;
use crate::parser::parse_tree;
use crate::tasks::{create_files_and_directories, plan_tasks};
use clap::ArgMatches;
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Parses CLI arguments and preferences into apply-specific configuration
struct ApplyArgs {
    pub source: SketchSource,
    pub output_root: PathBuf,
    pub indent_unit: usize,
    pub skip_root: bool,
    pub dry_run: bool,
    pub assume_yes: bool,
    pub verbose: bool,
}

impl ApplyArgs {
    fn from_matches(matches: &ArgMatches, prefs: &Preferences) -> Result<Self, SproutError> {
        let sketch = matches
            .get_one::<String>("sketch")
            .ok_or_else(|| SproutError::Config("missing sketch argument".into()))?;

        let output_root = matches
            .get_one::<String>("output")
            .map(PathBuf::from)
            .or_else(|| prefs.output_root.clone())
            .unwrap_or_default();

        let skip_root = if matches.get_flag("skip_root") {
            true
        } else {
            prefs.skip_root.unwrap_or(false)
        };

        Ok(Self {
            source: sketch_source(sketch),
            output_root,
            indent_unit: resolve_indent_unit(matches.get_one::<String>("indent"), prefs)?,
            skip_root,
            dry_run: matches.get_flag("dry_run"),
            assume_yes: matches.get_flag("yes"),
            verbose: matches.get_flag("verbose"),
        })
    }
}

/// Asks an interactive yes/no question on stdout/stdin.
fn confirm() -> Result<bool, SproutError> {
    print!("Proceed? [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Runs the apply subcommand: parses the sketch and creates the directories
/// and empty files it describes. In dry-run mode the plan is printed without
/// performing any filesystem changes.
pub fn run_apply(matches: &ArgMatches) -> Result<(), SproutError> {
    let prefs = Preferences::load(PREFERENCES_FILE)?;
    let args = ApplyArgs::from_matches(matches, &prefs)?;

    info!("Reading sketch from: {:?}", args.source);
    info!(
        "Output root: {:?}, indent unit: {}, skip root: {}",
        args.output_root, args.indent_unit, args.skip_root
    );

    let text = args.source.read()?;
    let entries = parse_tree(&text, args.indent_unit)?;
    let (tasks, stats) = plan_tasks(&entries, &args.output_root, args.skip_root);

    if args.dry_run {
        output::print_dry_run(&tasks, &stats, args.verbose);
        return Ok(());
    }

    if !args.assume_yes {
        output::print_plan_header(&tasks, &stats, args.verbose);
        if !confirm()? {
            println!("Aborted. No changes were made.");
            return Ok(());
        }
    }

    let start_time = Instant::now();
    let applied = create_files_and_directories(&tasks)?;
    output::print_apply_summary(&applied, start_time.elapsed());

    Ok(())
}
