use std::path::PathBuf;

use crate::pipeline::Outcome;

/// Run-wide tally, built from per-page outcomes on the calling thread.
#[derive(Debug, Default)]
pub struct RunReport {
    pub processed: usize,
    pub images: usize,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl RunReport {
    pub fn with_skipped(skipped: Vec<PathBuf>) -> Self {
        RunReport {
            skipped,
            ..Default::default()
        }
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Written { images } => {
                self.processed += 1;
                self.images += images;
            }
            Outcome::Failed { input, error } => self.failed.push((input, error)),
        }
    }

    pub fn merge(&mut self, other: RunReport) {
        self.processed += other.processed;
        self.images += other.images;
        self.skipped.extend(other.skipped);
        self.failed.extend(other.failed);
    }

    pub fn print(&self) {
        println!(
            "Converted {} pages ({} images copied), {} errors, {} skipped.",
            self.processed,
            self.images,
            self.failed.len(),
            self.skipped.len(),
        );

        if !self.failed.is_empty() {
            println!("\n--- Errors ---");
            for (path, error) in &self.failed {
                println!("  {}: {}", path.display(), error);
            }
        }

        println!("\nSkipped files:");
        for path in &self.skipped {
            println!("{}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(images: usize) -> Outcome {
        Outcome::Written { images }
    }

    #[test]
    fn record_counts_outcomes() {
        let mut report = RunReport::with_skipped(vec![PathBuf::from("big.html")]);
        report.record(written(2));
        report.record(written(0));
        report.record(Outcome::Failed {
            input: PathBuf::from("c.html"),
            error: "bad utf-8".into(),
        });

        assert_eq!(report.processed, 2);
        assert_eq!(report.images, 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.skipped, vec![PathBuf::from("big.html")]);
    }

    #[test]
    fn merge_appends() {
        let mut a = RunReport::with_skipped(vec![PathBuf::from("x.html")]);
        a.record(written(1));
        let mut b = RunReport::with_skipped(vec![PathBuf::from("y.html")]);
        b.record(written(3));

        a.merge(b);
        assert_eq!(a.processed, 2);
        assert_eq!(a.images, 4);
        assert_eq!(a.skipped, vec![PathBuf::from("x.html"), PathBuf::from("y.html")]);
    }
}
