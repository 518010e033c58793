use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;
use walkdir::WalkDir;

/// One page to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    /// Directory images are looked up in: the page's own directory.
    pub images_dir: PathBuf,
    pub output_dir: PathBuf,
    pub json_path: PathBuf,
}

#[derive(Debug, Default)]
pub struct Plan {
    pub jobs: Vec<Job>,
    /// Oversized pages, never opened.
    pub skipped: Vec<PathBuf>,
}

/// Walk `input_root`, mirror its directories under `output_root` and list
/// the `.html` pages to convert.
///
/// Symlinks are followed, so sizes and directory checks see the target.
/// All output directories are created here, before any page is touched;
/// failing to create one aborts the run.
pub fn plan(input_root: &Path, output_root: &Path, max_bytes: u64) -> Result<Plan> {
    let mut plan = Plan::default();

    let walker = WalkDir::new(input_root).follow_links(true).sort_by_file_name();
    for entry in walker {
        let entry = entry.with_context(|| format!("failed to walk {}", input_root.display()))?;
        let rel = entry
            .path()
            .strip_prefix(input_root)
            .context("walked outside the input root")?;

        if entry.file_type().is_dir() {
            let out = output_root.join(rel);
            fs::create_dir_all(&out)
                .with_context(|| format!("failed to create output directory {}", out.display()))?;
            continue;
        }

        if !is_html(entry.path()) {
            continue;
        }

        let size = entry
            .metadata()
            .with_context(|| format!("failed to stat {}", entry.path().display()))?
            .len();
        if size > max_bytes {
            warn!(path = %entry.path().display(), size, "skipping large file");
            plan.skipped.push(entry.path().to_path_buf());
            continue;
        }

        let json_path = output_root.join(rel).with_extension("json");
        plan.jobs.push(Job {
            input: entry.path().to_path_buf(),
            images_dir: parent_or_root(entry.path(), input_root),
            output_dir: parent_or_root(&json_path, output_root),
            json_path,
        });
    }

    Ok(plan)
}

fn is_html(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "html")
}

fn parent_or_root(path: &Path, root: &Path) -> PathBuf {
    path.parent().unwrap_or(root).to_path_buf()
}
