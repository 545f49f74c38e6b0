//! Command line argument parsing for the Litsieve CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Litsieve - PRISMA-style literature review automation
#[derive(Parser, Debug, Clone)]
#[command(name = "litsieve")]
#[command(about = "Boolean split generation, search collection, and screening for literature reviews")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LitsieveArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LitsieveArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate split search strings from keyword groups
    Split(SplitArgs),

    /// Run the full pipeline: split, search, screen, export
    Run(RunArgs),

    /// Screen a pre-collected record file into the final dataset
    Screen(ScreenArgs),
}

/// Arguments for split generation
#[derive(Parser, Debug, Clone)]
pub struct SplitArgs {
    /// Keyword groups file (JSON array of arrays of terms)
    #[arg(value_name = "KEYWORDS_FILE")]
    pub keywords: PathBuf,

    /// Write the generated splits to this file
    #[arg(short, long, value_name = "SPLITS_FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for a full pipeline run
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Keyword groups file (JSON array of arrays of terms)
    #[arg(value_name = "KEYWORDS_FILE")]
    pub keywords: PathBuf,

    /// Record corpus to search (JSONL, one record per line)
    #[arg(short, long, value_name = "RECORDS_FILE")]
    pub records: PathBuf,

    /// Output directory for run artifacts
    #[arg(short, long, default_value = "out")]
    pub out_dir: PathBuf,

    /// Result-count threshold above which a split is excluded
    #[arg(short, long, default_value = "1000")]
    pub threshold: u64,

    /// Provider-side result cap; queries over it are rejected as over-broad
    #[arg(long, value_name = "CAP")]
    pub max_results: Option<u64>,

    /// Only collect result counts, don't download records
    #[arg(long)]
    pub no_download: bool,
}

/// Arguments for standalone screening
#[derive(Parser, Debug, Clone)]
pub struct ScreenArgs {
    /// Record file to screen (JSONL, one record per line)
    #[arg(value_name = "RECORDS_FILE")]
    pub records: PathBuf,

    /// Output CSV file for the screened dataset
    #[arg(short, long, default_value = "dataframe.csv")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_split_command() {
        let args =
            LitsieveArgs::parse_from(["litsieve", "split", "groups.json", "-o", "splits.txt"]);

        match args.command {
            Command::Split(split_args) => {
                assert_eq!(split_args.keywords, PathBuf::from("groups.json"));
                assert_eq!(split_args.output, Some(PathBuf::from("splits.txt")));
            }
            _ => panic!("Expected split command"),
        }
    }

    #[test]
    fn test_parse_run_command_defaults() {
        let args = LitsieveArgs::parse_from([
            "litsieve",
            "run",
            "groups.json",
            "--records",
            "corpus.jsonl",
        ]);

        match args.command {
            Command::Run(run_args) => {
                assert_eq!(run_args.threshold, 1000);
                assert_eq!(run_args.out_dir, PathBuf::from("out"));
                assert!(!run_args.no_download);
                assert!(run_args.max_results.is_none());
            }
            _ => panic!("Expected run command"),
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = LitsieveArgs::parse_from(["litsieve", "split", "groups.json"]);
        assert_eq!(args.verbosity(), 1);

        let args = LitsieveArgs::parse_from(["litsieve", "-vv", "split", "groups.json"]);
        assert_eq!(args.verbosity(), 2);

        let args = LitsieveArgs::parse_from(["litsieve", "-q", "-v", "split", "groups.json"]);
        assert_eq!(args.verbosity(), 0);
    }
}
