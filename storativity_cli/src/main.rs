//! # Storativity Explorer CLI
//!
//! Terminal front end for `storativity_core`. Draws S, Ss or Sw for the five
//! aquifer materials as a log-scale bar chart, with the lookup tables and the
//! beta/Sa notes alongside.
//!
//! ```text
//! storativity --mode S --alpha avg --porosity mid --density sea_water --thickness 15
//! storativity --interactive --refresh live
//! storativity --tables-dir ./data --json
//! ```

mod render;
mod session;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use storativity_core::{load_tables, CalcError, CalcResult, StorativityCalculator, StorativityInput, StorativityTables};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use session::{RefreshPolicy, Reply, Session};

/// Groundwater storativity explorer
#[derive(Parser, Debug)]
#[command(name = "storativity")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Storativity of clay, sand, gravel and rock aquifers", long_about = None)]
struct Cli {
    /// Quantity to plot: S, Ss or Sw
    #[arg(short, long, default_value = "S")]
    mode: String,

    /// Alpha (m²/N) column: min, avg or max
    #[arg(short, long, default_value = "avg")]
    alpha: String,

    /// Porosity column: min, mid or max
    #[arg(short, long, default_value = "mid")]
    porosity: String,

    /// Water density: potable (1.000), sea_water (1.025) or brine (1.088)
    #[arg(short, long, default_value = "sea_water")]
    density: String,

    /// Aquifer thickness in metres: 1, 2, 4, 8, 15 or 30
    #[arg(short, long, default_value_t = 15.0)]
    thickness: f64,

    /// Directory containing alpha.csv and porosity.csv (built-in tables if omitted)
    #[arg(long)]
    tables_dir: Option<PathBuf>,

    /// Print the result as JSON instead of a chart
    #[arg(long)]
    json: bool,

    /// Print the alpha and porosity lookup tables
    #[arg(long)]
    show_tables: bool,

    /// Start an interactive session
    #[arg(short, long)]
    interactive: bool,

    /// When the interactive chart is recomputed
    #[arg(long, value_enum, default_value_t = RefreshPolicy::OnUpdate)]
    refresh: RefreshPolicy,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Err(e) = run(&cli) {
        eprint!("{}", error_report(&e));
        std::process::exit(1);
    }
    Ok(())
}

/// Error message followed by its JSON form
fn error_report(e: &CalcError) -> String {
    let mut report = format!("Error: {}\n", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        report.push_str(&format!("\nError JSON:\n{}\n", json));
    }
    report
}

fn run(cli: &Cli) -> CalcResult<()> {
    // Every selection is validated before the tables are touched.
    let input = StorativityInput::from_keys(&cli.mode, &cli.alpha, &cli.porosity, &cli.density, cli.thickness)?;

    let tables = match &cli.tables_dir {
        Some(dir) => load_tables(dir)?,
        None => StorativityTables::builtin()?,
    };
    let calc = StorativityCalculator::new(tables);

    if cli.interactive {
        return interactive(Session::new(calc, input, cli.refresh));
    }

    let result = calc.calculate(&input);
    info!(mode = %input.mode, "calculated {} values", result.values.len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print!("{}", render::result(&result));
    if cli.show_tables {
        println!();
        print!("{}", render::tables(calc.tables()));
    }
    Ok(())
}

fn interactive(mut session: Session) -> CalcResult<()> {
    println!("Storativity Explorer - type 'help' for commands");
    println!();
    print!("{}", render::result(session.shown()));

    let stdin = io::stdin();
    loop {
        let marker = if session.is_stale() { "*" } else { "" };
        print!("storativity{marker}> ");
        io::stdout()
            .flush()
            .map_err(|e| CalcError::file_error("flush", "stdout", e.to_string()))?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| CalcError::file_error("read", "stdin", e.to_string()))?;
        if read == 0 {
            println!();
            return Ok(());
        }

        match session.handle(&line) {
            Ok(Reply::Chart(result)) => print!("{}", render::result(&result)),
            Ok(Reply::Staged(msg)) => println!("  {msg}"),
            Ok(Reply::Tables) => print!("{}", render::tables(session.calculator().tables())),
            Ok(Reply::Text(text)) if text.is_empty() => {}
            Ok(Reply::Text(text)) => println!("{text}"),
            Ok(Reply::Quit) => return Ok(()),
            Err(e) => println!("  {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_report_prints_message_once() {
        let err = StorativityInput::from_keys("S", "mean", "mid", "sea_water", 15.0).unwrap_err();
        let report = error_report(&err);
        assert_eq!(report.matches("Error:").count(), 1);
        assert!(report.starts_with("Error: "));
        assert!(report.contains("\"type\": \"InvalidSelection\""));
    }

    #[test]
    fn test_invalid_key_fails_before_output() {
        let cli = Cli::parse_from(["storativity", "--alpha", "mean", "--density", "sea"]);
        assert!(run(&cli).unwrap_err().is_selection_error());
    }
}
