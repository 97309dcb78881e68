//! Schema directory discovery.
//!
//! Traversal is shallow: only immediate subdirectories of the root are
//! considered, and only immediate files within each resolved category.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::category::lookup_label;
use crate::error::{Result, SchemadocError};

/// A schema subdirectory resolved against the category table.
#[derive(Debug, Clone)]
pub struct CategoryDir {
    pub path: PathBuf,
    pub label: &'static str,
}

/// List immediate subdirectories of `root` that resolve to a known
/// category.
///
/// Hidden entries (leading `.`), plain files, and directories with no
/// category match are skipped silently. Order is whatever the filesystem
/// listing yields.
pub fn resolved_category_dirs(root: &Path) -> Result<Vec<CategoryDir>> {
    let entries = fs::read_dir(root).map_err(|source| SchemadocError::Unlistable {
        path: root.to_path_buf(),
        source,
    })?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SchemadocError::Unlistable {
            path: root.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with('.') {
            continue;
        }
        if let Some(label) = lookup_label(&name) {
            dirs.push(CategoryDir { path, label });
        }
    }
    Ok(dirs)
}

/// List immediate files of `dir` whose name ends with `xsd`.
///
/// The match is a literal, case-sensitive suffix test: `profile.xsd` and
/// `barxsd` both qualify, `schema.XSD` does not.
pub fn schema_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| SchemadocError::Unlistable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SchemadocError::Unlistable {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with("xsd") {
            files.push(path);
        }
    }
    Ok(files)
}

/// Summarize resolved categories as `"{label} (n)"` pairs, e.g.
/// `"Observation Schemas (3), Command Schemas (1)"`.
pub fn category_summary(root: &Path) -> Result<String> {
    let mut summary = Vec::new();

    for dir in resolved_category_dirs(root)? {
        let count = WalkDir::new(&dir.path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter(|e| e.file_name().to_string_lossy().ends_with("xsd"))
            .count();
        summary.push(format!("{} ({})", dir.label, count));
    }

    if summary.is_empty() {
        Ok("(empty)".to_string())
    } else {
        Ok(summary.join(", "))
    }
}
