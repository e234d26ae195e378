use std::env;
use std::path::PathBuf;

/// Where saved exports land on disk.
#[derive(Clone, Debug)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
}

impl ExportConfig {
    pub fn from_env() -> Self {
        let output_dir = env::var("EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./exports"));

        Self { output_dir }
    }
}
