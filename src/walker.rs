use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, trace};

use crate::error::Result;

/// Requested file suffixes, each starting with `.`, in command-line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet(Vec<String>);

impl ExtensionSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the first extension the full path literally ends with.
    ///
    /// This is a plain suffix test on the path bytes, so `.d.ts` matches
    /// `index.d.ts` even though the parsed extension is only `ts`.
    pub fn matching(&self, path: &Path) -> Option<&str> {
        let bytes = path.as_os_str().as_encoded_bytes();
        self.iter().find(|ext| bytes.ends_with(ext.as_bytes()))
    }
}

impl From<Vec<String>> for ExtensionSet {
    fn from(extensions: Vec<String>) -> Self {
        Self(extensions)
    }
}

impl FromIterator<String> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One node reported by a [`TreeSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl Entry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
        }
    }
}

/// Recursive enumeration of everything reachable from a root.
///
/// Entries are reported with paths joined onto `root`, the root itself
/// included. The first error ends the enumeration for the caller.
pub trait TreeSource {
    fn entries<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = Result<Entry>> + 'a>;
}

/// The host filesystem, walked in file-name order without following symlinks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTree;

impl TreeSource for FsTree {
    fn entries<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = Result<Entry>> + 'a> {
        let walk = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            // Hidden directories below the root are never descended into.
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()))
            .build();

        Box::new(walk.map(|result| {
            let entry = result?;
            let is_dir = entry.file_type().map_or(false, |ft| ft.is_dir());
            Ok(Entry {
                path: entry.into_path(),
                is_dir,
            })
        }))
    }
}

/// Collects every non-directory, non-hidden path under `root` that ends with
/// one of `extensions`, in enumeration order.
pub fn find_files<S>(source: &S, root: &Path, extensions: &ExtensionSet) -> Result<Vec<PathBuf>>
where
    S: TreeSource + ?Sized,
{
    let mut files = Vec::new();

    for entry in source.entries(root) {
        let entry = entry?;
        if entry.is_dir || is_hidden_below(root, &entry.path) {
            continue;
        }

        if let Some(ext) = extensions.matching(&entry.path) {
            trace!(path = %entry.path.display(), ext, "matched");
            files.push(entry.path);
        }
    }

    debug!(count = files.len(), root = %root.display(), "located files");
    Ok(files)
}

fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b".")
}

fn is_hidden_below(root: &Path, path: &Path) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .any(|component| matches!(component, Component::Normal(name) if is_hidden(name)))
}
