//! CLI subcommand definitions

use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Remove empty daily folders, create today's and show the rest (default)
    Run,
    /// Show daily folders with a preview of their contents
    List(ListArgs),
    /// Create today's folder and print its path
    Today,
    /// Print the path of today's folder without creating it
    Path,
    /// Show the entries of one daily folder
    Contents {
        /// Folder name, e.g. 2020-01-23
        name: String,
    },
    /// Remove empty daily folders (today's folder is always kept)
    Clean {
        /// Only show what would be removed
        #[arg(long)]
        dry_run: bool,
    },
    /// Remove the named daily folders; folders with content are refused
    Delete {
        /// Folder names, e.g. 2020-01-23
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Debug, Args, Default)]
pub(crate) struct ListArgs {
    /// Include today's folder
    #[arg(short, long)]
    pub(crate) all: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn delete_requires_a_name() {
        assert!(Cli::try_parse_from(["dailyfolder", "delete"]).is_err());
    }

    #[test]
    fn delete_collects_names() {
        let cli = Cli::try_parse_from(["dailyfolder", "delete", "2020-01-23", "2020-02-23"]).unwrap();
        match cli.command {
            Some(Commands::Delete { names }) => assert_eq!(names, vec!["2020-01-23", "2020-02-23"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["dailyfolder", "clean", "--dry-run", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Commands::Clean { dry_run: true })));
    }
}
