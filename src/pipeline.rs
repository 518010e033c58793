use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::error::DocumentError;
use crate::output;
use crate::parser;
use crate::parser::extract::images::ImageCopy;
use crate::parser::record::{ExtractionRecord, ImageEntry};
use crate::walker::Job;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMode {
    Copy,
    /// Resolve images but leave them in place; entries point at the source.
    DryRun,
}

/// How one page ended: a JSON file or a logged error, never both.
#[derive(Debug)]
pub enum Outcome {
    Written {
        images: usize,
    },
    Failed {
        input: PathBuf,
        error: String,
    },
}

/// Convert one page and write its JSON. Errors stay with this page.
pub fn run_job(job: &Job) -> Outcome {
    match convert(job) {
        Ok(images) => {
            info!(path = %job.input.display(), images, "processed");
            Outcome::Written { images }
        }
        Err(e) => {
            error!(path = %job.input.display(), error = %e, "error processing");
            Outcome::Failed {
                input: job.input.clone(),
                error: e.to_string(),
            }
        }
    }
}

fn convert(job: &Job) -> Result<usize, DocumentError> {
    let record = extract_file(&job.input, &job.images_dir, &job.output_dir, CopyMode::Copy)?;
    let bytes = output::to_json(&record)?;
    output::write_atomic(&job.json_path, &bytes)?;
    Ok(record.images.len())
}

/// read → parse → extract → place images → assemble.
pub fn extract_file(
    input: &Path,
    images_dir: &Path,
    output_dir: &Path,
    mode: CopyMode,
) -> Result<ExtractionRecord, DocumentError> {
    let html = fs::read_to_string(input).map_err(|source| DocumentError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let data = parser::process_html(&html, images_dir, output_dir);
    let images = place_images(&data.images, mode)?;
    Ok(data.into_record(images))
}

fn place_images(copies: &[ImageCopy], mode: CopyMode) -> Result<Vec<ImageEntry>, DocumentError> {
    let mut entries = Vec::with_capacity(copies.len());
    for img in copies {
        let path = match mode {
            CopyMode::Copy => {
                let bytes = output::copy_atomic(&img.source, &img.destination)?;
                debug!(from = %img.source.display(), to = %img.destination.display(), bytes, "image copied");
                &img.destination
            }
            CopyMode::DryRun => &img.source,
        };
        entries.push(ImageEntry {
            path: path.display().to_string(),
            context: img.context.clone(),
        });
    }
    Ok(entries)
}
