use crate::tasks::{task_label, Stats, Task};
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Helper to print colored timing information with standardized formatting
pub fn print_colored_duration(prefix: &str, duration: std::time::Duration) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    print!("{}", prefix);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true));
    let _ = write!(stdout, "{:.2}ms", duration.as_micros() as f64 / 1000.0);
    let _ = stdout.reset();
    println!();
}

fn write_colored(text: &str, color: Color) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    let _ = write!(stdout, "{}", text);
    let _ = stdout.reset();
}

/// Prints the full operation listing, numbered per kind.
fn print_task_listing(tasks: &[Task]) {
    let mut dir_counter = 0;
    let mut file_counter = 0;

    for task in tasks.iter() {
        match task {
            Task::Dir(_) => {
                dir_counter += 1;
                write_colored("📁 ", Color::Blue);
                print!("[{:4}] ", dir_counter);
            }
            Task::File(_) => {
                file_counter += 1;
                write_colored("📄 ", Color::Green);
                print!("[{:4}] ", file_counter);
            }
        }
        println!("{}", task_label(task));
    }
}

/// Handles dry-run output display with verbose and summary modes
pub fn print_dry_run(tasks: &[Task], stats: &Stats, verbose: bool) {
    if verbose {
        println!("Dry run enabled. Detailed operation listing:");
        println!("════════════════════════════════════════");
        print_task_listing(tasks);
        println!("════════════════════════════════════════");
        println!(
            "Summary: {} directories, {} files ({} total operations)",
            stats.dirs,
            stats.files,
            stats.total()
        );
    } else {
        println!("Dry run enabled. Summary of planned operations:");
        println!("  • {} directories to be created", stats.dirs);
        println!("  • {} files to be created", stats.files);
        println!("  • Total: {} operations", stats.total());

        // Show a sample of what would be created (first 5 items)
        if !tasks.is_empty() {
            println!("\nSample of operations:");
            for (i, task) in tasks.iter().take(5).enumerate() {
                print!("  {}. ", i + 1);
                match task {
                    Task::Dir(_) => write_colored("📁 ", Color::Blue),
                    Task::File(_) => write_colored("📄 ", Color::Green),
                }
                println!("{}", task_label(task));
            }
            if tasks.len() > 5 {
                println!("  ... and {} more operations", tasks.len() - 5);
            }
            println!("\ntip: Use --verbose to see the complete operation list");
        }
    }

    println!("\nDry run complete. No changes were made.");
}

/// Prints the plan shown before the interactive confirmation.
pub fn print_plan_header(tasks: &[Task], stats: &Stats, verbose: bool) {
    println!("Planned operations:");
    if verbose {
        print_task_listing(tasks);
    } else {
        for task in tasks.iter().take(5) {
            println!("  {}", task_label(task));
        }
        if tasks.len() > 5 {
            println!("  ... and {} more operations", tasks.len() - 5);
        }
    }
    println!(
        "{} directories and {} files will be created.",
        stats.dirs, stats.files
    );
}

/// Prints the colored summary after a successful apply.
pub fn print_apply_summary(applied: &Stats, duration: std::time::Duration) {
    write_colored("✅ ", Color::Green);
    println!("Success!");
    write_colored("   📁 ", Color::Blue);
    println!("Directories created: {}", applied.dirs);
    write_colored("   📄 ", Color::Green);
    println!("Files created: {}", applied.files);
    print_colored_duration("   ⚡ Duration: ", duration);
}

/// Prints the stats reported by the check subcommand.
pub fn print_check_summary(stats: &Stats) {
    write_colored("✔ ", Color::Green);
    println!(
        "sketch OK: {} directories, {} files ({} operations)",
        stats.dirs,
        stats.files,
        stats.total()
    );
}
