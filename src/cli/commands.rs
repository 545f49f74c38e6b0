//! Command implementations for the Litsieve CLI.

use std::fs;
use std::time::Instant;

use chrono::Local;

use crate::cli::args::*;
use crate::error::Result;
use crate::export;
use crate::keyword::KeywordSet;
use crate::screen::screen;
use crate::search::provider::JsonlProvider;
use crate::search::runner::{QueryScope, SearchConfig, SearchRunner};
use crate::split::Splitter;

/// Execute a CLI command.
pub fn execute_command(args: LitsieveArgs) -> Result<()> {
    match &args.command {
        Command::Split(split_args) => generate_splits(split_args.clone(), &args),
        Command::Run(run_args) => run_pipeline(run_args.clone(), &args),
        Command::Screen(screen_args) => screen_records(screen_args.clone(), &args),
    }
}

/// Generate splits from a keyword groups file.
fn generate_splits(args: SplitArgs, cli_args: &LitsieveArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Loading keyword groups from: {}", args.keywords.display());
    }

    let keywords = KeywordSet::from_json_file(&args.keywords)?;
    let splits = Splitter::new(keywords).generate()?;

    if let Some(output) = &args.output {
        export::write_splits(output, &splits)?;
        if cli_args.verbosity() > 0 {
            println!("Wrote splits to: {}", output.display());
        }
    } else {
        for split in &splits {
            println!("{split}");
        }
    }

    if cli_args.verbosity() > 0 {
        println!("Total number of splits: {}", splits.len());
    }
    Ok(())
}

/// Run the full pipeline: split generation, search collection,
/// screening, and artifact export.
fn run_pipeline(args: RunArgs, cli_args: &LitsieveArgs) -> Result<()> {
    let start_time = Instant::now();
    if cli_args.verbosity() > 0 {
        println!("Run started at {}", Local::now().format("%H:%M:%S"));
    }

    // Identification: generate splits and sweep the provider.
    let keywords = KeywordSet::from_json_file(&args.keywords)?;
    let splits = Splitter::new(keywords).generate()?;
    if cli_args.verbosity() > 0 {
        println!("Generated {} splits", splits.len());
    }

    let mut provider = JsonlProvider::from_path(&args.records)?;
    if let Some(cap) = args.max_results {
        provider = provider.with_max_results(cap);
    }
    let config = SearchConfig {
        threshold: args.threshold,
        download: !args.no_download,
        scope: QueryScope::TitleAbsKey,
    };
    let runner = SearchRunner::with_config(provider, config);
    let outcome = runner.run(&splits)?;

    // Screening: reduce the collected records to the final dataset.
    let (records, report) = screen(outcome.records);

    // Persist all artifacts; a run without them is incomplete.
    fs::create_dir_all(&args.out_dir)?;
    export::write_splits(args.out_dir.join("splits.txt"), &splits)?;
    export::write_matched(args.out_dir.join("search_results.txt"), &outcome.matched)?;
    export::write_excluded(args.out_dir.join("excluded_results.txt"), &outcome.excluded)?;
    export::write_records_csv(args.out_dir.join("dataframe.csv"), &records)?;

    if cli_args.verbosity() > 0 {
        println!("Matched splits: {}", outcome.matched.len());
        println!("Excluded splits: {}", outcome.excluded.len());
        println!(
            "Records: {} collected, {} duplicates removed, {} conference reviews removed, {} without DOI removed, {} surviving",
            report.initial,
            report.duplicates_removed,
            report.conference_reviews_removed,
            report.missing_doi_removed,
            report.surviving
        );
        println!("Artifacts written to: {}", args.out_dir.display());

        let elapsed = start_time.elapsed();
        println!(
            "Run finished at {}. Elapsed time: {}min {}s",
            Local::now().format("%H:%M:%S"),
            elapsed.as_secs() / 60,
            elapsed.as_secs() % 60
        );
    }
    Ok(())
}

/// Screen a pre-collected record file into the final dataset.
fn screen_records(args: ScreenArgs, cli_args: &LitsieveArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Loading records from: {}", args.records.display());
    }

    let provider = JsonlProvider::from_path(&args.records)?;
    let records = provider.into_records();
    let (screened, report) = screen(records);

    export::write_records_csv(&args.output, &screened)?;

    if cli_args.verbosity() > 0 {
        println!(
            "Screened {} records down to {} ({} duplicates, {} conference reviews, {} without DOI)",
            report.initial,
            report.surviving,
            report.duplicates_removed,
            report.conference_reviews_removed,
            report.missing_doi_removed
        );
        println!("Wrote dataset to: {}", args.output.display());
    }
    Ok(())
}
