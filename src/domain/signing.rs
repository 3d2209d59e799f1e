//! Sign-manifest discovery and resolution.
//!
//! A release tree opts binaries into signing through `.signlist` manifests.
//! Each manifest line names either a single file or an extension pattern
//! such as `Binaries/*{.so,.dll,.lib}`.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::AppError;

/// File extension of sign manifests discovered in a release tree.
pub const MANIFEST_EXTENSION: &str = "signlist";

/// Recursively collect `.signlist` manifests under `root`.
pub fn find_manifests(root: &Path) -> Vec<PathBuf> {
    let mut manifests: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == MANIFEST_EXTENSION))
        .map(|entry| entry.into_path())
        .collect();
    manifests.sort();
    manifests
}

/// Resolve every file a manifest names.
///
/// Relative paths resolve against the manifest's directory. Pattern lines
/// expand to the files directly inside the named directory whose names end
/// with one of the listed extensions; a pattern over a missing directory
/// expands to nothing.
pub fn resolve_manifest(manifest: &Path) -> Result<Vec<PathBuf>, AppError> {
    let base = manifest.parent().unwrap_or_else(|| Path::new("."));
    let raw = fs::read_to_string(manifest)?;

    let mut resolved = Vec::new();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((dir, exts)) = parse_extension_pattern(line) {
            resolved.extend(expand_extension_pattern(&base.join(dir), &exts));
        } else {
            let path = Path::new(line);
            resolved.push(if path.is_absolute() {
                path.to_path_buf()
            } else {
                base.join(path)
            });
        }
    }
    Ok(resolved)
}

/// Split `dir/*{.a,.b}` into its directory and extension list.
fn parse_extension_pattern(line: &str) -> Option<(&str, Vec<&str>)> {
    let (dir, rest) = line.split_once('*')?;
    let inner = rest.trim().strip_prefix('{')?.strip_suffix('}')?;
    Some((dir, inner.split(',').map(str::trim).collect()))
}

/// List the files directly inside `dir` whose names end with one of `exts`.
fn expand_extension_pattern(dir: &Path, exts: &[&str]) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };
    let mut matched: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            exts.iter().any(|ext| name.ends_with(ext))
        })
        .map(|entry| entry.path())
        .collect();
    matched.sort();
    matched
}
