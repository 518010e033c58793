use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Pages above this size are skipped without being opened.
pub const MAX_FILE_BYTES: u64 = 15 * 1024 * 1024;

const ENV_PREFIX: &str = "DOC_HARVEST";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub project_name: String,
    pub max_file_bytes: u64,
    pub parallel: bool,
}

/// Values given on the command line; they win over every other source.
#[derive(Debug, Default)]
pub struct Overrides {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub sequential: bool,
}

impl Settings {
    /// defaults < manifest (if given, must load) < DOC_HARVEST_* env < CLI.
    pub fn load(manifest: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("project_name", "doc_harvest")?
            .set_default("max_file_bytes", MAX_FILE_BYTES)?
            .set_default("parallel", true)?;

        if let Some(path) = manifest {
            builder = builder.add_source(File::from(path).format(FileFormat::Json).required(true));
        }

        builder = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .set_override_option("input_dir", overrides.input_dir.map(path_value))?
            .set_override_option("output_dir", overrides.output_dir.map(path_value))?;
        if overrides.sequential {
            builder = builder.set_override("parallel", false)?;
        }

        builder.build()?.try_deserialize()
    }
}

fn path_value(path: PathBuf) -> String {
    path.to_string_lossy().into_owned()
}
