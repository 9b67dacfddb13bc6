// ABOUTME: Aggregation loop driving the page source to exhaustion and writing output
// ABOUTME: Owns the updater configuration and the atomic file replacement

use anyhow::{Context, Result, bail};
use log::{debug, info};
use sponsors_sdk::{Sponsor, SponsorPageSource};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::constants::{output, pagination, template};
use crate::paths;
use crate::render::render_sponsors_file;

/// Configuration for one updater run. Defaults come from the `constants`
/// module; tests override individual fields.
#[derive(Debug, Clone)]
pub struct UpdateConfig {
    pub page_size: u32,
    pub max_pages: u32,
    pub output_fragment: &'static str,
    pub header: &'static str,
    pub footer: &'static str,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            page_size: pagination::PAGE_SIZE,
            max_pages: pagination::MAX_PAGES,
            output_fragment: output::SPONSORS_FILE_PATH,
            header: template::HEADER,
            footer: template::FOOTER,
        }
    }
}

/// Drive the page source to exhaustion, accumulating sponsors in page order.
///
/// Each fetch carries the cursor returned by the previous page; the empty
/// cursor requests the first page. The loop stops at the first page reporting
/// no further results. Any fetch error aborts the run as-is. A source that
/// never reports exhaustion fails the run once `max_pages` is reached.
pub async fn fetch_all_sponsors(
    source: &impl SponsorPageSource,
    config: &UpdateConfig,
) -> Result<Vec<Sponsor>> {
    let mut cursor = String::new();
    let mut sponsors = Vec::new();

    for page_number in 1..=config.max_pages {
        let page = source.fetch_page(config.page_size, &cursor).await?;
        debug!(
            "page {page_number}: {} nodes, has_next_page={}",
            page.sponsors.len(),
            page.has_next_page
        );

        let has_next_page = page.has_next_page;
        cursor = page.end_cursor;
        sponsors.extend(page.sponsors);

        if !has_next_page {
            return Ok(sponsors);
        }
    }

    bail!(
        "pagination did not terminate within {} pages",
        config.max_pages
    )
}

/// Replace the file at `path` with `contents` in one step. The new contents
/// are staged in a temporary file in the destination directory and renamed
/// over the target, so a failed run never leaves a partial file behind.
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let dir = path
        .parent()
        .with_context(|| format!("output path {} has no parent directory", path.display()))?;
    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create a temporary file in {}", dir.display()))?;
    file.write_all(contents.as_bytes())
        .context("failed to write the generated sponsors file")?;
    file.persist(path)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}

/// Full updater run: aggregate all pages, render, and write the generated
/// file beneath the output directory. Returns the path written.
pub async fn run_update(
    source: &impl SponsorPageSource,
    output_dir: &str,
    config: &UpdateConfig,
) -> Result<PathBuf> {
    let sponsors = fetch_all_sponsors(source, config).await?;
    let rendered = render_sponsors_file(&sponsors, config);

    let path = paths::output_file_path(output_dir, config.output_fragment);
    write_atomically(&path, &rendered)?;

    info!(
        "wrote {} sponsors to {}",
        sponsors.iter().filter(|s| s.is_renderable()).count(),
        path.display()
    );
    Ok(path)
}
