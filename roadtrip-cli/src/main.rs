mod reports;
mod util;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use roadtrip_sim::Tour;
use util::split_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Line-by-line trace of every drive, refuel and status
    Console,
    /// Full tour report as pretty-printed JSON
    Json,
    /// Per-route result tables
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "roadtrip", version)]
#[command(about = "Drive the built-in fleet over the built-in waypoint routes")]
struct Args {
    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Routes to run, by index or name (comma-separated, default all)
    #[arg(long, default_value = "")]
    routes: String,

    /// Vehicles to drive: sedan, suv, bus, bicycle (comma-separated, default all)
    #[arg(long, default_value = "")]
    vehicles: String,

    /// List the built-in routes and exit
    #[arg(long)]
    list_routes: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.output.is_some() {
        colored::control::set_override(false);
    }

    let mut tour = Tour::demo();

    if args.list_routes {
        let mut output_target = OutputTarget::new(args.output.clone())?;
        reports::list_routes(output_target.writer(), tour.routes())?;
        reports::list_fleet(output_target.writer(), tour.fleet())?;
        output_target.flush_inner()?;
        return Ok(());
    }

    configure_tour(&args, &mut tour);
    let report = tour.run();
    log::debug!(
        "tour finished: {} completed, {} aborted, {} incomplete",
        report.completed(),
        report.aborted(),
        report.incomplete()
    );

    let mut output_target = OutputTarget::new(args.output.clone())?;
    if shows_banner(&args) {
        announce_banner(output_target.writer())?;
    }
    match args.report {
        ReportFormat::Console => reports::generate_console_report(output_target.writer(), &report)?,
        ReportFormat::Json => reports::generate_json_report(output_target.writer(), &report)?,
        ReportFormat::Markdown => {
            reports::generate_markdown_report(output_target.writer(), &report)?;
        }
    }
    if args.verbose && args.report != ReportFormat::Json {
        reports::generate_summary(output_target.writer(), &report)?;
    }
    output_target
        .flush_inner()
        .context("failed to flush report output")?;

    Ok(())
}

/// JSON output must stay a single parseable document.
const fn shows_banner(args: &Args) -> bool {
    args.verbose && !matches!(args.report, ReportFormat::Json)
}

fn announce_banner(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", "🚗 Roadtrip Fleet Runner".bright_cyan().bold())?;
    writeln!(out, "{}", "========================".cyan())?;
    Ok(())
}

fn configure_tour(args: &Args, tour: &mut Tour) {
    let unknown_routes = tour.select_routes(&split_csv(&args.routes));
    for token in unknown_routes {
        eprintln!("⚠️  Unknown route: {}", token.yellow());
    }

    let unknown_vehicles = tour.select_vehicles(&split_csv(&args.vehicles));
    for err in unknown_vehicles {
        eprintln!("⚠️  {err}");
    }
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}
