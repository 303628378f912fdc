//! Command-line argument parsing for the viewer
//!
//! Supports:
//! - Opening image files or a directory of images
//! - Starting at a specific slide
//! - Theme override

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

/// File extensions treated as slides when scanning a directory
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// A minimal image carousel viewer
#[derive(Parser, Debug)]
#[command(name = "showcase", version, about = "A minimal image carousel viewer")]
pub struct CliArgs {
    /// Image files or a directory of images to show
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<PathBuf>,

    /// Start at slide N (1-indexed)
    #[arg(long, value_name = "N")]
    pub slide: Option<usize>,

    /// Theme id, overriding the configured theme for this run
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Resolved slide paths, in display order (at least one)
    pub slide_paths: Vec<PathBuf>,
    /// Initial slide index, 0-indexed and in range
    pub initial_slide: usize,
    /// Theme override for this run
    pub theme: Option<String>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration.
    ///
    /// A directory argument expands to its image files in name order.
    /// An empty resolved slide set is a fatal startup error: the carousel
    /// requires at least one slide.
    pub fn into_config(self) -> Result<StartupConfig> {
        let mut slide_paths = Vec::new();

        for path in &self.paths {
            if path.is_dir() {
                slide_paths.extend(scan_directory(path)?);
            } else {
                slide_paths.push(path.clone());
            }
        }

        if slide_paths.is_empty() {
            bail!("no images found in the given paths");
        }

        // 1-indexed from user; out-of-range values clamp to the last slide
        // here, at the input boundary - the carousel itself never clamps.
        let initial_slide = self
            .slide
            .map(|n| n.saturating_sub(1).min(slide_paths.len() - 1))
            .unwrap_or(0);

        Ok(StartupConfig {
            slide_paths,
            initial_slide,
            theme: self.theme,
        })
    }
}

/// Collect image files from a directory, sorted by file name
fn scan_directory(dir: &std::path::Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| anyhow::anyhow!("cannot read directory {}: {}", dir.display(), e))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn args(paths: Vec<PathBuf>, slide: Option<usize>) -> CliArgs {
        CliArgs {
            paths,
            slide,
            theme: None,
        }
    }

    #[test]
    fn test_explicit_files_keep_order() {
        let config = args(
            vec![PathBuf::from("b.png"), PathBuf::from("a.png")],
            None,
        )
        .into_config()
        .unwrap();
        assert_eq!(config.slide_paths[0], PathBuf::from("b.png"));
        assert_eq!(config.initial_slide, 0);
    }

    #[test]
    fn test_directory_scan_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.png", "a.jpg", "b.PNG", "notes.txt"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let config = args(vec![dir.path().to_path_buf()], None)
            .into_config()
            .unwrap();
        let names: Vec<_> = config
            .slide_paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.PNG", "c.png"]);
    }

    #[test]
    fn test_empty_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(args(vec![dir.path().to_path_buf()], None)
            .into_config()
            .is_err());
    }

    #[test]
    fn test_slide_index_conversion() {
        let paths = vec![PathBuf::from("a.png"), PathBuf::from("b.png")];
        // 1-indexed to 0-indexed
        let config = args(paths.clone(), Some(2)).into_config().unwrap();
        assert_eq!(config.initial_slide, 1);

        // Out of range clamps to the last slide
        let config = args(paths.clone(), Some(99)).into_config().unwrap();
        assert_eq!(config.initial_slide, 1);

        // --slide 0 is treated as the first slide
        let config = args(paths, Some(0)).into_config().unwrap();
        assert_eq!(config.initial_slide, 0);
    }
}
