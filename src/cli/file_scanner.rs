use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

/// Result of collecting files to scan.
pub struct FileScan {
    /// Sorted, deduplicated file paths.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Collect HTML files under `paths` (or `root` when none are given).
///
/// Files named explicitly are always taken. Files found by walking a
/// directory are kept when their path relative to `root` matches one of
/// `includes` and none of `ignores`.
pub fn scan_files(
    root: &Path,
    paths: &[PathBuf],
    includes: &[String],
    ignores: &[String],
) -> FileScan {
    let includes = compile(includes);
    let ignores = compile(ignores);

    let starts: Vec<PathBuf> = if paths.is_empty() {
        vec![root.to_path_buf()]
    } else {
        paths
            .iter()
            .map(|p| if p.is_absolute() { p.clone() } else { root.join(p) })
            .collect()
    };

    let mut files = Vec::new();
    let mut skipped_count = 0;

    for start in starts {
        if start.is_file() {
            files.push(start);
            continue;
        }

        for entry in WalkDir::new(&start) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    tracing::warn!("Cannot access path: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let relative = relative_path(root, entry.path());
            let included = includes.iter().any(|p| p.matches(&relative));
            let ignored = ignores.iter().any(|p| p.matches(&relative));
            if included && !ignored {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    files.dedup();

    FileScan {
        files,
        skipped_count,
    }
}

/// `path` relative to `root` with `/` separators, used as a destination id.
pub fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn compile(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                tracing::warn!("Invalid glob pattern '{}': {}", p, e);
                None
            }
        })
        .collect()
}
