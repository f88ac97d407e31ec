use std::fs;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::debug;

use crate::walker::ExtensionSet;

pub const USAGE: &str = "
PClip: A clipboard tool for preparing code for AI prompts.

Usage:
  pclip <ext1> [<ext2>...] [<directory>]

Arguments:
  <ext>:       Extension must start with a '.', e.g., .go, .js, .ts
  <directory>: Optional. The directory to scan. Defaults to the current directory if not provided.

Examples:
  # Scan for all .go files in the current directory
  pclip .go

  # Scan for all .ts and .tsx files in the ./src directory
  pclip .ts .tsx ./src
";

/// Copy source files matching the given extensions to the clipboard as Markdown.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Raise diagnostic output on stderr (repeat for more).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the success line.
    #[arg(short, long)]
    pub quiet: bool,

    /// Extensions such as `.rs .toml`, optionally followed by the directory to scan.
    #[arg(value_name = "EXT|DIR", trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

/// What the command-line tokens ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No tokens at all.
    NoArguments,
    /// Tokens were given but none of them named an extension.
    MissingExtensions,
    /// Ready to scan `root` for `extensions`.
    Scan {
        extensions: ExtensionSet,
        root: PathBuf,
    },
}

/// Splits raw tokens into an extension set and a scan root.
///
/// The last token is taken as the root when it names an existing directory;
/// otherwise the root is `.`. Of the remaining tokens only those starting with
/// `.` are kept.
pub fn classify(tokens: &[String]) -> Invocation {
    let Some((last, rest)) = tokens.split_last() else {
        return Invocation::NoArguments;
    };

    let (root, candidates) = match fs::metadata(last) {
        Ok(metadata) if metadata.is_dir() => (PathBuf::from(last), rest),
        _ => (PathBuf::from("."), tokens),
    };

    let extensions: ExtensionSet = candidates
        .iter()
        .filter(|token| token.starts_with('.'))
        .cloned()
        .collect();

    debug!(root = %root.display(), ?extensions, "classified arguments");

    if extensions.is_empty() {
        Invocation::MissingExtensions
    } else {
        Invocation::Scan { extensions, root }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn empty_tokens_ask_for_usage() {
        assert_eq!(classify(&[]), Invocation::NoArguments);
    }

    #[test]
    fn trailing_directory_becomes_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_string_lossy().into_owned();

        let invocation = classify(&tokens(&[".ts", ".tsx", &root]));

        assert_eq!(
            invocation,
            Invocation::Scan {
                extensions: ExtensionSet::from(vec![".ts".to_string(), ".tsx".to_string()]),
                root: dir.path().to_path_buf(),
            }
        );
    }

    #[test]
    fn root_defaults_to_current_directory() {
        let invocation = classify(&tokens(&[".go", ".definitely-not-a-directory"]));

        assert_eq!(
            invocation,
            Invocation::Scan {
                extensions: ExtensionSet::from(vec![
                    ".go".to_string(),
                    ".definitely-not-a-directory".to_string()
                ]),
                root: PathBuf::from("."),
            }
        );
    }

    #[test]
    fn tokens_without_leading_dot_are_dropped() {
        let invocation = classify(&tokens(&["go", ".rs", "-x", "missing/path"]));

        assert_eq!(
            invocation,
            Invocation::Scan {
                extensions: ExtensionSet::from(vec![".rs".to_string()]),
                root: PathBuf::from("."),
            }
        );
    }

    #[test]
    fn lone_directory_leaves_no_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_string_lossy().into_owned();

        assert_eq!(classify(&tokens(&[&root])), Invocation::MissingExtensions);
    }

    #[test]
    fn only_non_extension_tokens() {
        assert_eq!(
            classify(&tokens(&["rs", "toml"])),
            Invocation::MissingExtensions
        );
    }

    #[test]
    fn cli_keeps_hyphenated_tokens_after_first_extension() {
        let cli = Cli::try_parse_from(["pclip", "-v", ".rs", "-x", "src"]).unwrap();

        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.tokens, tokens(&[".rs", "-x", "src"]));
    }
}
