use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use course_rater::error::{RunError, EXIT_SUCCESS};
use course_rater::{config, output, pipeline, prompt, scoring, table};

#[derive(Parser, Debug)]
#[command(name = "course-rater")]
#[command(about = "Rank courses in a CSV by weighted utility score", long_about = None)]
#[command(version)]
struct Cli {
    /// Courses CSV to score (prompted for when omitted)
    input: Option<String>,

    /// Where to write the scored CSV (defaults to <input>_scored.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to config file (defaults to ~/.config/course-rater/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of top-ranked courses to preview (at least 1)
    #[arg(
        short = 'n',
        long,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    top: Option<usize>,

    /// Enable verbose logging and print a per-course score breakdown
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let default_filter = if verbose { "course_rater=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn run(cli: Cli) -> Result<(), RunError> {
    let start_time = Instant::now();

    // Load and validate config before touching the input
    let config = config::load_config(cli.config).map_err(RunError::Config)?;
    let weights = config.effective_weights();
    scoring::validate_weights(&weights).map_err(RunError::Weights)?;
    let preview_rows = cli.top.unwrap_or_else(|| config.effective_preview_rows());

    let answer = match cli.input {
        Some(path) => path,
        None => prompt::prompt(prompt::INPUT_PROMPT).map_err(RunError::Input)?,
    };
    let input_path = pipeline::resolve_input(&answer)?;

    let table = pipeline::load_input(&input_path)?;
    tracing::info!(rows = table.len(), path = %input_path.display(), "scoring courses");

    let output_path = cli
        .output
        .unwrap_or_else(|| table::scored_output_path(&input_path));
    let rows = pipeline::score_and_save(&table, &output_path, &weights)?;

    let use_colors = !cli.no_color && output::should_use_colors();

    println!();
    println!("Scored courses written to: {}", output_path.display());
    println!();

    if cli.verbose {
        for row in &rows {
            println!(
                "{}",
                output::format_breakdown(table.headers(), row, &weights, use_colors)
            );
            println!();
        }
    }

    println!("Top {} courses by Score:", preview_rows);
    println!(
        "{}",
        output::format_preview(table.headers(), &rows, preview_rows, use_colors)
    );

    if cli.verbose {
        eprintln!();
        eprintln!("Total: {} courses in {:?}", rows.len(), start_time.elapsed());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_rejects_zero() {
        let result = Cli::try_parse_from(["course-rater", "-n", "0", "courses.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_top_accepts_positive() {
        let cli = Cli::try_parse_from(["course-rater", "--top", "3", "courses.csv"]).unwrap();
        assert_eq!(cli.top, Some(3));
        assert_eq!(cli.input.as_deref(), Some("courses.csv"));
    }
}
