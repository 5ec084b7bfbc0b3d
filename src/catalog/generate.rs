use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::CatalogError;

use super::hash::hash_file;
use super::model::Catalog;

pub(crate) fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<&str> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.'))
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        // Suffix match is exact: "MP3" does not match a configured "mp3".
        .map(|ext| exts.iter().any(|e| *e == ext))
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Catalog key for `path`: its location relative to `root`, joined with
/// `/` regardless of the host separator. `None` for non-UTF-8 names.
fn catalog_key(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<&str> = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;
    Some(parts.join("/"))
}

/// Resolve the effective library root: a CLI override wins, otherwise the
/// configured value. An unconfigured (empty) root refuses to run rather
/// than silently cataloging the working directory.
pub fn resolve_root(
    override_root: Option<PathBuf>,
    settings: &LibrarySettings,
) -> Result<PathBuf, CatalogError> {
    if let Some(path) = override_root {
        return Ok(path);
    }
    let configured = settings.root.trim();
    if configured.is_empty() {
        return Err(CatalogError::Configuration(
            "no library root configured (set library.root or pass --root)".to_string(),
        ));
    }
    Ok(PathBuf::from(configured))
}

/// Walk `root` and fingerprint every audio file beneath it.
///
/// Unreadable files are logged and skipped; the run completes as a
/// best-effort inventory. A missing or non-directory root fails before
/// any library I/O.
pub fn generate(
    root: &Path,
    settings: &LibrarySettings,
    workers: usize,
) -> Result<Catalog, CatalogError> {
    if !root.is_dir() {
        let reason = if root.exists() {
            "is not a directory"
        } else {
            "does not exist"
        };
        return Err(CatalogError::Configuration(format!(
            "library root {} {reason}",
            root.display()
        )));
    }

    let started = Instant::now();
    let files = collect_audio_files(root, settings);

    let mut catalog = Catalog::new();
    if workers > 1 && !files.is_empty() {
        hash_into_catalog_pooled(root, &files, workers, &mut catalog);
    } else {
        for path in &files {
            if let Some((key, digest)) = hash_entry(path, root) {
                catalog.insert(key, digest);
            }
        }
    }

    info!(
        "cataloged {} of {} candidate files in {:.3?}",
        catalog.len(),
        files.len(),
        started.elapsed()
    );
    Ok(catalog)
}

fn collect_audio_files(root: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(root).follow_links(settings.follow_links);
    if let Some(d) = settings.max_depth {
        walker = walker.max_depth(d);
    }

    let mut files = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable directory entry: {err}");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file()
            && (settings.include_hidden || !is_hidden(path))
            && is_audio_file(path, settings)
        {
            files.push(path.to_path_buf());
        }
    }
    files
}

/// Hash one file and pair it with its catalog key. `None` means the entry
/// was skipped (and the reason logged).
fn hash_entry(path: &Path, root: &Path) -> Option<(String, String)> {
    let Some(key) = catalog_key(path, root) else {
        warn!("skipping non-UTF-8 path {}", path.display());
        return None;
    };
    match hash_file(path) {
        Ok(digest) => Some((key, digest)),
        Err(err) => {
            warn!("skipping unreadable file {}: {err}", path.display());
            None
        }
    }
}

/// Hash across a bounded pool of worker threads. Workers send completed
/// entries over a channel and this thread alone inserts into the map, so
/// the resulting catalog is identical to a sequential run.
fn hash_into_catalog_pooled(
    root: &Path,
    files: &[PathBuf],
    workers: usize,
    catalog: &mut Catalog,
) {
    let chunk_size = files.len().div_ceil(workers);
    let (tx, rx) = mpsc::channel::<(String, String)>();

    thread::scope(|scope| {
        for chunk in files.chunks(chunk_size) {
            let tx = tx.clone();
            scope.spawn(move || {
                for path in chunk {
                    if let Some(entry) = hash_entry(path, root) {
                        let _ = tx.send(entry);
                    }
                }
            });
        }
        drop(tx);

        for (key, digest) in rx {
            catalog.insert(key, digest);
        }
    });
}
