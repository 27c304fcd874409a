use crate::extractor::{ExtractOptions, extract_page};
use crate::models::PageDescription;
use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

/// Input file format based on file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Html,
    Json,
    Toml,
    Yaml,
}

impl InputFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "html" | "htm" => Some(InputFormat::Html),
                "json" => Some(InputFormat::Json),
                "toml" => Some(InputFormat::Toml),
                "yaml" | "yml" => Some(InputFormat::Yaml),
                _ => None,
            })
    }
}

/// Parses a page description from already-read file contents.
///
/// Fields may be omitted, but an explicit `null` is rejected.
pub fn parse_page(
    contents: &str,
    format: InputFormat,
    options: &ExtractOptions,
) -> Result<PageDescription> {
    let page = match format {
        InputFormat::Html => extract_page(contents, options),
        InputFormat::Json => {
            serde_json::from_str(contents).context("Invalid page description (JSON)")?
        }
        InputFormat::Toml => toml::from_str(contents).context("Invalid page description (TOML)")?,
        InputFormat::Yaml => {
            serde_yaml::from_str(contents).context("Invalid page description (YAML)")?
        }
    };

    Ok(page)
}

/// Load a single page description from disk
pub async fn load_page(path: &Path, options: &ExtractOptions) -> Result<PageDescription> {
    let format = InputFormat::from_path(path)
        .with_context(|| format!("Unsupported input format: {}", path.display()))?;

    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    let page = parse_page(&contents, format, options)
        .with_context(|| format!("Failed to load page from {}", path.display()))?;

    tracing::info!(source = %path.display(), format = ?format, "Loaded page description");
    Ok(page)
}

/// Loads many page descriptions with at most `concurrency` reads in flight.
///
/// Results keep the order of `paths`. The first failure aborts the batch.
pub async fn load_pages(
    paths: &[PathBuf],
    options: &ExtractOptions,
    concurrency: usize,
    show_progress: bool,
) -> Result<Vec<(PathBuf, PageDescription)>> {
    let progress_bar = show_progress.then(|| {
        let pb = ProgressBar::new(paths.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} Loading: {pos}/{len} pages")
                .expect("Progress bar template should be valid"),
        );
        pb
    });

    let results = stream::iter(paths)
        .map(|path| async move {
            let page = load_page(path, options).await;
            (path.clone(), page)
        })
        .buffered(concurrency.max(1))
        .inspect(|_| {
            if let Some(ref pb) = progress_bar {
                pb.inc(1);
            }
        })
        .collect::<Vec<_>>()
        .await;

    if let Some(ref pb) = progress_bar {
        pb.finish_with_message(format!("Loaded {} pages", results.len()));
    }

    results
        .into_iter()
        .map(|(path, page)| page.map(|page| (path, page)))
        .collect()
}
