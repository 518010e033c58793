mod error;
mod output;
mod parser;
mod pipeline;
mod report;
mod settings;
mod walker;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use pipeline::CopyMode;
use report::RunReport;
use settings::{Overrides, Settings};

#[derive(Parser)]
#[command(name = "doc_harvest", about = "Convert generated HTML API docs into JSON records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every .html page under the input tree
    Run {
        /// Root of the HTML tree (overrides manifest / DOC_HARVEST_INPUT_DIR)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Root of the JSON tree (overrides manifest / DOC_HARVEST_OUTPUT_DIR)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// JSON manifest with input_dir, output_dir, project_name, ...
        #[arg(short, long)]
        manifest: Option<PathBuf>,
        /// Process pages one at a time on the main thread
        #[arg(long)]
        sequential: bool,
        /// Max pages to convert (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Extract a single page and print its record; copies nothing
    Inspect {
        file: PathBuf,
        /// Directory holding the page's images (default: the page's directory)
        #[arg(long)]
        images: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            input,
            output,
            manifest,
            sequential,
            limit,
        } => {
            let settings = Settings::load(
                manifest.as_deref(),
                Overrides {
                    input_dir: input,
                    output_dir: output,
                    sequential,
                },
            )
            .context("failed to load configuration")?;
            info!(settings = ?settings, "Starting conversion");
            run(&settings, limit)
        }
        Commands::Inspect { file, images } => {
            let images_dir = images
                .or_else(|| file.parent().map(|p| p.to_path_buf()))
                .unwrap_or_default();
            let record = pipeline::extract_file(&file, &images_dir, &images_dir, CopyMode::DryRun)
                .with_context(|| format!("failed to extract {}", file.display()))?;
            let bytes = output::to_json(&record)?;
            println!("{}", String::from_utf8_lossy(&bytes));
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn run(settings: &Settings, limit: Option<usize>) -> anyhow::Result<()> {
    let mut plan = walker::plan(
        &settings.input_dir,
        &settings.output_dir,
        settings.max_file_bytes,
    )?;
    if let Some(n) = limit {
        plan.jobs.truncate(n);
    }

    let mut report = RunReport::with_skipped(plan.skipped);
    if plan.jobs.is_empty() {
        println!("No HTML pages found under {}.", settings.input_dir.display());
    } else {
        println!(
            "[{}] Converting {} pages...",
            settings.project_name,
            plan.jobs.len()
        );
        report.merge(process_jobs(&plan.jobs, settings.parallel)?);
    }

    report.print();
    Ok(())
}

fn process_jobs(jobs: &[walker::Job], parallel: bool) -> anyhow::Result<RunReport> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(jobs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let mut report = RunReport::default();
    for chunk in jobs.chunks(500) {
        let outcomes: Vec<_> = if parallel {
            chunk.par_iter().map(pipeline::run_job).collect()
        } else {
            chunk.iter().map(pipeline::run_job).collect()
        };

        let mut chunk_report = RunReport::default();
        for outcome in outcomes {
            chunk_report.record(outcome);
        }
        report.merge(chunk_report);
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    Ok(report)
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn every_page_ends_in_json_or_error() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("in");
        fs::create_dir_all(input.join("sub")).unwrap();
        fs::write(input.join("ok.html"), "<title>ok</title>").unwrap();
        fs::write(input.join("sub/also.html"), "<h1>A</h1><p>a</p>").unwrap();
        fs::write(input.join("bad.html"), b"\xff\xfe").unwrap();
        fs::write(input.join("huge.html"), vec![b' '; 64]).unwrap();

        let output = tmp.path().join("out");
        let plan = walker::plan(&input, &output, 32).unwrap();
        assert_eq!(plan.skipped, vec![input.join("huge.html")]);

        let report = process_jobs(&plan.jobs, true).unwrap();
        assert_eq!(report.processed, 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, input.join("bad.html"));

        assert!(output.join("ok.json").is_file());
        assert!(output.join("sub/also.json").is_file());
        assert!(!output.join("bad.json").exists());
        assert!(!output.join("huge.json").exists());
    }

    #[test]
    fn duration_formatting() {
        use std::time::Duration;
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_duration(Duration::from_secs(3725)), "1h 2m 5s");
    }
}
