//! unitsplit CLI - split a YAML course unit into part files

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unitsplit::{ExportReport, Namer, PartKind, PresetNamer, SplitPlan, TerminalNamer, UnitSplit};

#[derive(Parser)]
#[command(name = "unitsplit")]
#[command(version)]
#[command(
    about = "Split a multi-document YAML unit into Markdown and YAML part files",
    long_about = None
)]
struct Cli {
    /// Input unit file (multi-document YAML)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Directory the input path and output folder are resolved against
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    base_dir: PathBuf,

    /// Accept auto-generated names without prompting
    #[arg(short, long)]
    yes: bool,

    /// Show the planned files without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Print the export report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = cmd_split(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_split(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let splitter = UnitSplit::new().with_base_dir(&cli.base_dir);

    let mut namer: Box<dyn Namer> = if cli.yes {
        Box::new(PresetNamer::auto())
    } else {
        Box::new(TerminalNamer::stdio())
    };

    let plan = splitter.plan(&cli.input, namer.as_mut())?;

    if cli.dry_run {
        print_plan(&plan);
        return Ok(());
    }

    let report = write_plan(plan)?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn write_plan(plan: SplitPlan) -> Result<ExportReport, Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(plan.file_count() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message("Writing files...");

    let report = plan.write_with_progress(|file| {
        pb.set_message(file.filename.clone());
        pb.inc(1);
    });

    match report {
        Ok(report) => {
            pb.finish_with_message("Done!");
            Ok(report)
        }
        Err(e) => {
            pb.abandon_with_message("Failed");
            Err(e.into())
        }
    }
}

fn print_plan(plan: &SplitPlan) {
    println!(
        "{} {}",
        "Would create".yellow().bold(),
        plan.output_dir().display()
    );
    print_tree(
        std::iter::once((unitsplit::UNIT_FILENAME, PartKind::Data))
            .chain(plan.parts().iter().map(|p| (p.filename(), p.kind))),
    );
}

fn print_report(report: &ExportReport) {
    println!(
        "\n{} {}",
        "Output files in".green().bold(),
        display_dir(&report.output_dir)
    );
    print_tree(report.files.iter().map(|f| (f.filename.as_str(), f.kind)));
    println!(
        "\n{} {} files, {} bytes",
        "Done!".green().bold(),
        report.file_count(),
        report.total_bytes()
    );
}

fn print_tree<'a>(entries: impl Iterator<Item = (&'a str, PartKind)>) {
    let entries: Vec<_> = entries.collect();
    for (i, (name, kind)) in entries.iter().enumerate() {
        let branch = if i + 1 == entries.len() { "└─" } else { "├─" };
        let tag = match kind {
            PartKind::Markdown => "md".cyan(),
            PartKind::Data => "yml".blue(),
        };
        println!("  {} {} {}", branch.dimmed(), name, tag.dimmed());
    }
}

fn display_dir(path: &Path) -> String {
    path.strip_prefix(".")
        .unwrap_or(path)
        .display()
        .to_string()
}
