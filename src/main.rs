use std::process;

use anyhow::Result;
use clap::Parser;

use pclip::logging::initialize_logger;
use pclip::{classify, run, Cli, FsTree, Outcome, SystemClipboard, USAGE};

fn main() {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    if let Err(err) = execute(&cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let invocation = classify(&cli.tokens);

    match run(invocation, &FsTree, &mut SystemClipboard)? {
        Outcome::Usage => println!("{USAGE}"),
        Outcome::MissingExtensions => {
            println!("Error: No file extensions specified.");
            println!("{USAGE}");
        }
        Outcome::NoMatches => println!("No matching files found in the directory."),
        Outcome::Copied { files } => {
            if !cli.quiet {
                println!(
                    "✅ Success! Content of {files} file(s) formatted and copied to clipboard."
                );
            }
        }
    }

    Ok(())
}
