use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{PclipError, Result};

const BLOCK_SEPARATOR: &str = "\n\n";

/// Markdown fence tag for a file extension (without the leading dot).
/// Unknown extensions get an empty tag.
pub fn language_tag(ext: &str) -> &'static str {
    match ext {
        "go" => "go",
        "js" => "javascript",
        "ts" | "tsx" => "typescript",
        "py" => "python",
        "java" => "java",
        "c" => "c",
        "cpp" => "cpp",
        "cs" => "csharp",
        "html" => "html",
        "css" => "css",
        "scss" => "scss",
        "sh" | "bash" => "bash",
        "rb" => "ruby",
        "rs" => "rust",
        "md" => "markdown",
        "json" => "json",
        "yaml" | "yml" => "yaml",
        "sql" => "sql",
        _ => "",
    }
}

fn language_for(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or("", language_tag)
}

fn relative_to<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

fn write_block(out: &mut String, title: &Path, lang: &str, content: &str) {
    out.push('`');
    out.push_str(&title.display().to_string());
    out.push_str("`\n\n```");
    out.push_str(lang);
    out.push('\n');
    out.push_str(content);
    out.push_str("\n```");
}

/// Reads every file and renders them as one Markdown document.
///
/// Any read failure aborts the whole document.
pub fn format_markdown(root: &Path, files: &[PathBuf]) -> Result<String> {
    let mut out = String::new();

    for (index, file) in files.iter().enumerate() {
        let bytes = fs::read(file).map_err(|source| PclipError::Read {
            path: file.clone(),
            source,
        })?;
        trace!(path = %file.display(), bytes = bytes.len(), "read file");

        if index > 0 {
            out.push_str(BLOCK_SEPARATOR);
        }
        let content = String::from_utf8_lossy(&bytes);
        write_block(&mut out, relative_to(root, file), language_for(file), &content);
    }

    debug!(files = files.len(), bytes = out.len(), "rendered markdown");
    Ok(out)
}
