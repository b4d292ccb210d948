//! Cleaner configuration - file locations and their defaults

use std::path::{Path, PathBuf};

/// Dataset read by both `clean` and `validate` when no file is given
pub const DEFAULT_INPUT: &str = "genz-dictionary.json";

/// Directory the cleaned dataset is written to
pub const DEFAULT_OUT_DIR: &str = "dist";

/// File name of the cleaned dataset inside the output directory
pub const OUTPUT_FILE_NAME: &str = "genz-dictionary.json";

/// Auxiliary mapping copied next to the cleaned dataset when present
pub const MAPPING_FILE_NAME: &str = "translator-mapping.json";

/// Where the cleaner reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanConfig {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub output_file_name: String,
    pub mapping_file_name: String,
}

impl CleanConfig {
    pub fn new(input: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            out_dir: out_dir.into(),
            ..Self::default()
        }
    }

    /// Path of the cleaned dataset
    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(&self.output_file_name)
    }

    /// Expected location of the mapping file: beside the input dataset
    pub fn mapping_source(&self) -> PathBuf {
        let dir = self
            .input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        dir.join(&self.mapping_file_name)
    }

    /// Where the mapping file is copied to
    pub fn mapping_destination(&self) -> PathBuf {
        self.out_dir.join(&self.mapping_file_name)
    }
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            output_file_name: OUTPUT_FILE_NAME.to_string(),
            mapping_file_name: MAPPING_FILE_NAME.to_string(),
        }
    }
}
