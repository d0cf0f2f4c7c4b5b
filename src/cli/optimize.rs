//! Optimize command implementation.
//!
//! Rewrites qualifying images in HTML files in batch using parallel
//! processing. Each file gets its own page runtime: the page URL is
//! taken from `--url` or derived from the file path, the document is
//! ingested as one batch, and the instrumented HTML is written back (or
//! into `--output`).

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::cli::OptimizeArgs;
use crate::config::SiteConfig;
use crate::core::{PageLocation, Viewport};
use crate::logger::ProgressLine;
use crate::resources::PageResources;
use crate::runtime::PageRuntime;
use crate::{debug, log};

/// One file to rewrite: absolute source path plus the path relative to
/// its scan root (kept for `--output` mirroring and URL derivation).
#[derive(Debug)]
struct WorkItem {
    source: PathBuf,
    relative: PathBuf,
}

/// Run the optimize command.
pub fn run_optimize(args: &OptimizeArgs, config: &SiteConfig) -> Result<()> {
    let items = collect_html_files(&args.paths)?;
    if items.is_empty() {
        log!("optimize"; "no HTML files found");
        return Ok(());
    }

    let viewport = Viewport::new(args.width, args.dpr);
    let progress = ProgressLine::new(&[("pages", items.len())]);

    let failures: Vec<(PathBuf, anyhow::Error)> = items
        .par_iter()
        .filter_map(|item| {
            let result = optimize_file(item, args, viewport, config);
            progress.inc("pages");
            result.err().map(|err| (item.source.clone(), err))
        })
        .collect();

    progress.finish();

    if !failures.is_empty() {
        for (path, err) in &failures {
            log!("error"; "{}: {:#}", path.display(), err);
        }
        bail!("{} of {} files failed", failures.len(), items.len());
    }

    log!("optimize"; "rewrote {} files", items.len());
    Ok(())
}

/// Rewrite one file through a fresh page runtime.
fn optimize_file(
    item: &WorkItem,
    args: &OptimizeArgs,
    viewport: Viewport,
    config: &SiteConfig,
) -> Result<()> {
    let html = fs::read_to_string(&item.source)
        .with_context(|| format!("Failed to read '{}'", item.source.display()))?;

    let location = match &args.url {
        Some(url) => PageLocation::from_url(url),
        None => PageLocation::new("", derive_path(&item.relative)),
    };

    let mut page = PageRuntime::new(location, viewport, config);
    debug!("optimize"; "{}: {} {}", item.source.display(),
        page.classification().language, page.classification().page_type);
    page.ingest_page(&html);

    if args.resources {
        let plan = PageResources::plan(page.classification(), &config.resources);
        plan.apply(page.document_mut());
        page.pump();
    }

    let target = match &args.output {
        Some(dir) => {
            let target = dir.join(&item.relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory '{}'", parent.display())
                })?;
            }
            target
        }
        None => item.source.clone(),
    };

    fs::write(&target, page.render())
        .with_context(|| format!("Failed to write '{}'", target.display()))?;
    Ok(())
}

/// Derive a site path from a file path relative to its scan root.
fn derive_path(relative: &Path) -> String {
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{joined}")
}

/// Expand files and directories into the HTML work list.
///
/// Directories are walked recursively; explicit file arguments are
/// taken as-is (their relative path is just the file name).
fn collect_html_files(paths: &[PathBuf]) -> Result<Vec<WorkItem>> {
    let mut items = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk_dir(path, path, &mut items)?;
        } else if path.is_file() {
            items.push(WorkItem {
                source: path.clone(),
                relative: path.file_name().map(PathBuf::from).unwrap_or_default(),
            });
        } else {
            bail!("'{}' does not exist", path.display());
        }
    }
    items.sort_by(|a, b| a.source.cmp(&b.source));
    Ok(items)
}

fn walk_dir(root: &Path, dir: &Path, items: &mut Vec<WorkItem>) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory '{}'", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            walk_dir(root, &path, items)?;
        } else if path.extension().is_some_and(|ext| ext == "html") {
            let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            items.push(WorkItem {
                source: path,
                relative,
            });
        }
    }
    Ok(())
}
