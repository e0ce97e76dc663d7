//! Runtime configuration for a workbook build.
//!
//! There is no config file: everything comes from the command line.
//! The workbook lands next to the caller, named after the input.

use std::path::{Path, PathBuf};

use crate::error::{Result, SansIndexError};

/// Extension given to generated workbooks.
pub const OUTPUT_EXTENSION: &str = "xlsx";

/// Inputs to one build: the outline to read and where to put the workbook.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Path to the YAML course outline.
    pub input: PathBuf,
    /// Directory the workbook is written to.
    pub output_dir: PathBuf,
}

impl BuildConfig {
    /// Build config for `input`, writing to the current working directory.
    pub fn for_input(input: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = std::env::current_dir().map_err(|e| {
            SansIndexError::config(format!("cannot determine working directory: {e}"))
        })?;
        let config = Self {
            input: input.into(),
            output_dir,
        };
        tracing::debug!(input = ?config.input, output_dir = ?config.output_dir, "resolved build config");
        Ok(config)
    }

    /// `<output_dir>/<input stem>.xlsx`.
    pub fn output_path(&self) -> Result<PathBuf> {
        Ok(self
            .output_dir
            .join(output_file_name(&self.input)?))
    }
}

/// Workbook file name for an input path: its stem with `.xlsx`.
pub fn output_file_name(input: &Path) -> Result<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| {
        SansIndexError::config(format!("input path {} has no file name", input.display()))
    })?;
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    Ok(PathBuf::from(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_uses_input_stem() {
        let config = BuildConfig {
            input: PathBuf::from("courses/sec504.yaml"),
            output_dir: PathBuf::from("/tmp/out"),
        };
        assert_eq!(
            config.output_path().unwrap(),
            PathBuf::from("/tmp/out/sec504.xlsx")
        );
    }

    #[test]
    fn output_name_keeps_inner_dots() {
        let name = output_file_name(Path::new("for508.v2.yml")).unwrap();
        assert_eq!(name, PathBuf::from("for508.v2.xlsx"));
    }

    #[test]
    fn dotted_stems_do_not_collide() {
        let v1 = output_file_name(Path::new("course.v1.yaml")).unwrap();
        let v2 = output_file_name(Path::new("course.v2.yaml")).unwrap();
        assert_eq!(v1, PathBuf::from("course.v1.xlsx"));
        assert_ne!(v1, v2);
    }

    #[test]
    fn output_name_without_extension() {
        let name = output_file_name(Path::new("outline")).unwrap();
        assert_eq!(name, PathBuf::from("outline.xlsx"));
    }

    #[test]
    fn output_name_rejects_bare_root() {
        let err = output_file_name(Path::new("/")).unwrap_err();
        assert!(err.to_string().contains("no file name"));
    }

    #[test]
    fn for_input_uses_working_directory() {
        let config = BuildConfig::for_input("course.yaml").unwrap();
        assert_eq!(config.output_dir, std::env::current_dir().unwrap());
    }
}
