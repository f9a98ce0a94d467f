// crates/collect_targets/src/lib.rs

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Generated icons that shipped without the props spread.
pub const BUILTIN_ICONS: &[&str] = &[
    "AuroraLiveIconChrome.tsx",
    "AuroraLiveIconDice6.tsx",
    "AuroraLiveIconMagnet.tsx",
    "AuroraLiveIconMartini.tsx",
    "AuroraLiveIconMusic.tsx",
    "AuroraLiveIconOrigami.tsx",
    "AuroraLiveIconPlane.tsx",
    "AuroraLiveIconRocket.tsx",
    "AuroraLiveIconSprayCan.tsx",
    "AuroraLiveIconTestTubes.tsx",
    "AuroraLiveIconThumbsDown.tsx",
    "AuroraLiveIconThumbsUp.tsx",
    "AuroraLiveIconWine.tsx",
];

/// Default location of the icon sources, relative to the repository root.
pub const DEFAULT_ICONS_DIR: &str = "libs/aurora-design-system/src/icons";

/// Extension of the files picked up by a directory scan.
pub const SCAN_EXTENSION: &str = "tsx";

/// Where the target list comes from.
#[derive(Clone, Debug, Default)]
pub struct TargetSources {
    /// Paths given directly on the command line.
    pub paths: Vec<PathBuf>,
    /// Optional file holding one path per line.
    pub paths_file: Option<PathBuf>,
    /// Optional directory to scan for icon sources.
    pub scan_dir: Option<PathBuf>,
    /// Directory the built-in list is resolved against.
    pub icons_dir: PathBuf,
    /// Basenames to drop from the final list.
    pub excludes: Vec<String>,
}

impl TargetSources {
    /// True when no paths, paths file or scan directory were given.
    pub fn is_unscoped(&self) -> bool {
        self.paths.is_empty() && self.paths_file.is_none() && self.scan_dir.is_none()
    }
}

/// Builds the ordered target list.
///
/// Explicit paths, the paths file and the directory scan are concatenated in
/// that order. The built-in icon list is used only when none of the three was
/// given; a paths file or scan that yields nothing gives an empty list. The
/// exclusions are applied last and duplicates keep their first position.
pub fn collect(sources: &TargetSources) -> Result<Vec<PathBuf>> {
    let targets = if sources.is_unscoped() {
        log::debug!(
            "no target source given; using built-in list under {}",
            sources.icons_dir.display()
        );
        builtin_targets(&sources.icons_dir)
    } else {
        let mut targets: Vec<PathBuf> = sources.paths.clone();
        if let Some(paths_file) = &sources.paths_file {
            targets.extend(read_paths_file(paths_file)?);
        }
        if let Some(scan_root) = &sources.scan_dir {
            targets.extend(scan_dir(scan_root, SCAN_EXTENSION)?);
        }
        targets
    };

    let targets = exclude_basenames(targets, &sources.excludes);
    Ok(dedup_preserving_order(targets))
}

/// Resolves the built-in icon list against `icons_dir`.
pub fn builtin_targets(icons_dir: &Path) -> Vec<PathBuf> {
    BUILTIN_ICONS.iter().map(|name| icons_dir.join(name)).collect()
}

/// Reads one path per line. Blank lines and directory entries (ending with
/// a slash) are ignored; surrounding whitespace is trimmed.
pub fn read_paths_file(paths_file: &Path) -> Result<Vec<PathBuf>> {
    let content = fs::read_to_string(paths_file)
        .with_context(|| format!("Error reading paths file {}", paths_file.display()))?;
    Ok(parse_path_lines(&content))
}

fn parse_path_lines(content: &str) -> Vec<PathBuf> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.ends_with('/'))
        .map(PathBuf::from)
        .collect()
}

/// Recursively collects regular files under `root` with the given extension.
/// Entries of each directory are visited in file name order.
pub fn scan_dir(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        anyhow::bail!("Scan directory {} does not exist", root.display());
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(root).sort_by(|a, b| a.file_name().cmp(b.file_name())) {
        let entry = entry.with_context(|| format!("Error scanning {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|s| s.to_str())
            .map(|ext| ext == extension)
            .unwrap_or(false);
        if matches {
            found.push(entry.into_path());
        }
    }
    log::debug!("scan of {} found {} file(s)", root.display(), found.len());
    Ok(found)
}

/// Drops every path whose basename exactly matches one of `excludes`.
pub fn exclude_basenames(paths: Vec<PathBuf>, excludes: &[String]) -> Vec<PathBuf> {
    if excludes.is_empty() {
        return paths;
    }
    paths
        .into_iter()
        .filter(|path| {
            let basename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            !excludes.iter().any(|pattern| *pattern == basename)
        })
        .collect()
}

/// Removes repeated paths, keeping the first occurrence of each.
pub fn dedup_preserving_order(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|path| seen.insert(path.clone()))
        .collect()
}
