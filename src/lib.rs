//! Collect source files by extension and copy them to the clipboard as one
//! Markdown document.

pub mod args;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod output;
pub mod walker;

use tracing::info;

pub use args::{classify, Cli, Invocation, USAGE};
pub use error::{PclipError, Result};
pub use markdown::{format_markdown, language_tag};
pub use output::{ClipboardSink, SystemClipboard};
pub use walker::{find_files, Entry, ExtensionSet, FsTree, TreeSource};

/// How a run ended without a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Usage,
    MissingExtensions,
    NoMatches,
    Copied { files: usize },
}

/// Runs the pipeline: locate, format, copy.
///
/// Nothing reaches `sink` unless every file was read.
pub fn run<T, S>(invocation: Invocation, tree: &T, sink: &mut S) -> Result<Outcome>
where
    T: TreeSource + ?Sized,
    S: ClipboardSink + ?Sized,
{
    let (extensions, root) = match invocation {
        Invocation::NoArguments => return Ok(Outcome::Usage),
        Invocation::MissingExtensions => return Ok(Outcome::MissingExtensions),
        Invocation::Scan { extensions, root } => (extensions, root),
    };

    let files = find_files(tree, &root, &extensions)?;
    if files.is_empty() {
        return Ok(Outcome::NoMatches);
    }

    let document = format_markdown(&root, &files)?;
    sink.set_text(&document)?;
    info!(files = files.len(), bytes = document.len(), "copied to clipboard");

    Ok(Outcome::Copied { files: files.len() })
}
